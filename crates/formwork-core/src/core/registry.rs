// crates/formwork-core/src/core/registry.rs
// ============================================================================
// Module: Formwork Field Registry
// Description: Per-type capability sets, default templates, and tag parsing.
// Purpose: Drive one generic editor from a single table instead of
//          near-duplicate per-type editors.
// Dependencies: crate::core::field, crate::core::identifiers, thiserror
// ============================================================================

//! ## Overview
//! The registry is a pure lookup surface: given a [`FieldType`] it returns
//! the capability set the type recognizes and a type-appropriate default
//! [`FieldDefinition`]. It holds no mutable state and performs no side
//! effects; fresh identifiers are minted by the editor and passed in.
//!
//! Unknown field types cannot exist once a [`FieldType`] value is in hand
//! (the enum is closed), so [`RegistryError::UnknownFieldType`] surfaces
//! only at the string-tag boundary used by persistence and host UIs.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::field::Alignment;
use crate::core::field::FieldDefinition;
use crate::core::field::FieldType;
use crate::core::field::HeadingLevel;
use crate::core::field::TextStyles;
use crate::core::identifiers::FieldId;

// ============================================================================
// SECTION: Registry Errors
// ============================================================================

/// Registry lookup errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The requested field type tag is not recognized.
    #[error("unknown field type: {0}")]
    UnknownFieldType(String),
}

// ============================================================================
// SECTION: Capability Sets
// ============================================================================

/// The subset of optional attributes a field type recognizes.
///
/// # Invariants
/// - Capability sets are total and constant per [`FieldType`].
/// - Attributes outside a field's capability set must remain absent on the
///   field; the editor drops patch attributes outside it without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldCapabilities {
    /// Field carries an ordered option list.
    pub has_options: bool,
    /// Field carries length validation bounds.
    pub has_validation_bounds: bool,
    /// Field carries free text body content.
    pub has_content: bool,
    /// Field carries a heading level.
    pub has_heading_level: bool,
    /// Field carries a horizontal alignment.
    pub has_alignment: bool,
    /// Field carries inline style toggles.
    pub has_styles: bool,
    /// Field carries a character counter toggle.
    pub has_char_count: bool,
}

// ============================================================================
// SECTION: Field Registry
// ============================================================================

/// Pure lookup registry mapping field types to defaults and capabilities.
///
/// # Invariants
/// - Lookups are total over [`FieldType`] and deterministic.
/// - No side effects; identifier freshness is the caller's responsibility.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldRegistry;

impl FieldRegistry {
    /// Creates a registry.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns the capability set recognized by `field_type`.
    #[must_use]
    pub const fn capabilities(&self, field_type: FieldType) -> FieldCapabilities {
        match field_type {
            FieldType::Text | FieldType::TextArea => FieldCapabilities {
                has_options: false,
                has_validation_bounds: true,
                has_content: false,
                has_heading_level: false,
                has_alignment: false,
                has_styles: false,
                has_char_count: true,
            },
            FieldType::Select | FieldType::SingleChoice | FieldType::MultiChoice => {
                FieldCapabilities {
                    has_options: true,
                    has_validation_bounds: false,
                    has_content: false,
                    has_heading_level: false,
                    has_alignment: false,
                    has_styles: false,
                    has_char_count: false,
                }
            }
            FieldType::Heading => FieldCapabilities {
                has_options: false,
                has_validation_bounds: false,
                has_content: true,
                has_heading_level: true,
                has_alignment: true,
                has_styles: false,
                has_char_count: false,
            },
            FieldType::Paragraph => FieldCapabilities {
                has_options: false,
                has_validation_bounds: false,
                has_content: true,
                has_heading_level: false,
                has_alignment: true,
                has_styles: true,
                has_char_count: true,
            },
            FieldType::Divider => FieldCapabilities {
                has_options: false,
                has_validation_bounds: false,
                has_content: false,
                has_heading_level: false,
                has_alignment: false,
                has_styles: false,
                has_char_count: false,
            },
        }
    }

    /// Returns the default display label for `field_type`.
    #[must_use]
    pub const fn default_label(&self, field_type: FieldType) -> &'static str {
        match field_type {
            FieldType::Text => "Text field",
            FieldType::TextArea => "Text area",
            FieldType::Select => "Select field",
            FieldType::SingleChoice => "Single choice",
            FieldType::MultiChoice => "Multiple choice",
            FieldType::Heading => "Heading",
            FieldType::Paragraph => "Paragraph",
            FieldType::Divider => "Divider",
        }
    }

    /// Returns a fresh default field definition for `field_type` under `id`.
    ///
    /// Type-specific attributes are zeroed: empty option lists, empty body
    /// text, default alignment and styles, counters off. Attributes outside
    /// the capability set are absent.
    #[must_use]
    pub fn default_field(&self, field_type: FieldType, id: FieldId) -> FieldDefinition {
        let caps = self.capabilities(field_type);
        FieldDefinition {
            id,
            field_type,
            label: self.default_label(field_type).to_string(),
            options: Vec::new(),
            validation: None,
            content: if caps.has_content {
                Some(String::new())
            } else {
                None
            },
            heading_level: if caps.has_heading_level {
                Some(HeadingLevel::default())
            } else {
                None
            },
            alignment: if caps.has_alignment {
                Some(Alignment::default())
            } else {
                None
            },
            styles: if caps.has_styles {
                Some(TextStyles::default())
            } else {
                None
            },
            show_character_count: if caps.has_char_count { Some(false) } else { None },
        }
    }

    /// Parses a stable wire tag into a field type.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownFieldType`] when the tag is not
    /// recognized.
    pub fn parse_tag(&self, tag: &str) -> Result<FieldType, RegistryError> {
        FieldType::all()
            .into_iter()
            .find(|field_type| field_type.as_tag() == tag)
            .ok_or_else(|| RegistryError::UnknownFieldType(tag.to_string()))
    }
}
