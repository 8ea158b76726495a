// crates/formwork-core/src/core/field.rs
// ============================================================================
// Module: Formwork Field Model
// Description: Field type tags, type-specific attributes, and field definitions.
// Purpose: Represent one configurable input or display element within a schema.
// Dependencies: crate::core::identifiers, serde
// ============================================================================

//! ## Overview
//! A field definition is a tagged record: the `field_type` tag determines
//! which of the optional attributes are meaningful. The registry's capability
//! set (see [`crate::core::registry`]) is the single source of truth for
//! which attributes a type recognizes; the editor silently drops everything
//! outside it. Range-limited values (`HeadingLevel`, `ValidationBounds`)
//! enforce their invariants at construction boundaries, including serde.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::FieldId;
use crate::core::identifiers::OptionId;

// ============================================================================
// SECTION: Field Type Tags
// ============================================================================

/// Enumerated field type tag.
///
/// # Invariants
/// - Variants are stable for serialization and template persistence.
/// - The tag is immutable after field creation; changing a field's type is
///   modeled as remove + add, never in-place mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Single-line text input.
    Text,
    /// Multi-line text input.
    TextArea,
    /// Dropdown selection over options.
    Select,
    /// Exclusive choice over options (radio group).
    SingleChoice,
    /// Non-exclusive choice over options (checkbox group).
    MultiChoice,
    /// Static heading element.
    Heading,
    /// Static paragraph element.
    Paragraph,
    /// Static horizontal divider element.
    Divider,
}

impl FieldType {
    /// Returns the stable wire tag for this field type.
    #[must_use]
    pub const fn as_tag(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::TextArea => "text_area",
            Self::Select => "select",
            Self::SingleChoice => "single_choice",
            Self::MultiChoice => "multi_choice",
            Self::Heading => "heading",
            Self::Paragraph => "paragraph",
            Self::Divider => "divider",
        }
    }

    /// Returns all field types in declaration order.
    #[must_use]
    pub const fn all() -> [Self; 8] {
        [
            Self::Text,
            Self::TextArea,
            Self::Select,
            Self::SingleChoice,
            Self::MultiChoice,
            Self::Heading,
            Self::Paragraph,
            Self::Divider,
        ]
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

// ============================================================================
// SECTION: Choice Options
// ============================================================================

/// One selectable option belonging to a choice-like field.
///
/// # Invariants
/// - `id` is unique within the owning field; enforced by the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    /// Option identifier, unique within the owning field.
    pub id: OptionId,
    /// Display label for the option.
    pub label: String,
    /// Indicates whether the option starts selected in rendered previews.
    pub selected_by_default: bool,
}

// ============================================================================
// SECTION: Validation Bounds
// ============================================================================

/// Raw validation bounds used for serde boundary validation.
#[derive(Debug, Clone, Copy, Deserialize)]
struct RawValidationBounds {
    /// Minimum accepted input length.
    min_length: u32,
    /// Maximum accepted input length.
    max_length: u32,
}

/// Length validation bounds for text-like fields.
///
/// # Invariants
/// - `min_length <= max_length`, enforced at every construction boundary
///   (constructor and deserialization).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawValidationBounds")]
pub struct ValidationBounds {
    /// Minimum accepted input length.
    min_length: u32,
    /// Maximum accepted input length.
    max_length: u32,
}

impl ValidationBounds {
    /// Creates validation bounds; returns `None` when `min_length > max_length`.
    #[must_use]
    pub const fn new(min_length: u32, max_length: u32) -> Option<Self> {
        if min_length > max_length {
            return None;
        }
        Some(Self {
            min_length,
            max_length,
        })
    }

    /// Returns the minimum accepted input length.
    #[must_use]
    pub const fn min_length(self) -> u32 {
        self.min_length
    }

    /// Returns the maximum accepted input length.
    #[must_use]
    pub const fn max_length(self) -> u32 {
        self.max_length
    }
}

impl TryFrom<RawValidationBounds> for ValidationBounds {
    type Error = String;

    fn try_from(raw: RawValidationBounds) -> Result<Self, Self::Error> {
        Self::new(raw.min_length, raw.max_length).ok_or_else(|| {
            format!(
                "inverted validation bounds: min_length {} > max_length {}",
                raw.min_length, raw.max_length
            )
        })
    }
}

// ============================================================================
// SECTION: Heading Level
// ============================================================================

/// Heading level restricted to the range `[1, 6]`.
///
/// # Invariants
/// - Always within `[1, 6]`, enforced at every construction boundary
///   (constructor and deserialization).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    /// Creates a heading level; returns `None` outside `[1, 6]`.
    #[must_use]
    pub const fn new(level: u8) -> Option<Self> {
        if level == 0 || level > 6 {
            return None;
        }
        Some(Self(level))
    }

    /// Returns the raw level value (always in `[1, 6]`).
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for HeadingLevel {
    /// Returns level 2, the level assigned to fresh heading fields.
    fn default() -> Self {
        Self(2)
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level).ok_or_else(|| format!("heading level out of range [1, 6]: {level}"))
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        level.0
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// SECTION: Alignment and Styles
// ============================================================================

/// Horizontal alignment for static text elements.
///
/// # Invariants
/// - Variants are stable for serialization and template persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// Left-aligned text.
    #[default]
    Left,
    /// Center-aligned text.
    Center,
    /// Right-aligned text.
    Right,
    /// Justified text.
    Justify,
}

/// Inline text style toggles for paragraph elements.
///
/// # Invariants
/// - All toggles default to off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TextStyles {
    /// Bold toggle.
    pub bold: bool,
    /// Italic toggle.
    pub italic: bool,
    /// Underline toggle.
    pub underline: bool,
}

// ============================================================================
// SECTION: Field Definition
// ============================================================================

/// One configurable input or display element within a schema.
///
/// # Invariants
/// - `id` is unique within the owning schema and immutable.
/// - `field_type` is immutable after creation.
/// - Attributes not recognized by `field_type`'s capability set are absent
///   (`None` or empty); the editor enforces this on every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Field identifier, unique within the owning schema.
    pub id: FieldId,
    /// Field type tag, immutable after creation.
    pub field_type: FieldType,
    /// Display caption for the field.
    pub label: String,
    /// Ordered options; non-empty only for choice-like types.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ChoiceOption>,
    /// Length validation bounds; text-like types only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationBounds>,
    /// Free text body; heading and paragraph elements only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Heading level; heading elements only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_level: Option<HeadingLevel>,
    /// Horizontal alignment; heading and paragraph elements only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    /// Inline style toggles; paragraph elements only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<TextStyles>,
    /// Character counter toggle; text-like and paragraph elements only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_character_count: Option<bool>,
}

impl FieldDefinition {
    /// Returns the option matching `option_id`, if present.
    #[must_use]
    pub fn option(&self, option_id: &OptionId) -> Option<&ChoiceOption> {
        self.options.iter().find(|option| option.id == *option_id)
    }
}
