// crates/formwork-core/src/core/schema.rs
// ============================================================================
// Module: Formwork Schema Model
// Description: Ordered field schemas, persisted snapshots, and validation.
// Purpose: Represent one named record template and its persisted form.
// Dependencies: crate::core::{field, hashing, identifiers, registry, time},
// serde, thiserror
// ============================================================================

//! ## Overview
//! A schema is an ordered, named sequence of field definitions; order is
//! significant (fields render top to bottom) and the field id set is
//! pairwise distinct. A schema is mutated in memory for the duration of an
//! editing session and persisted only on explicit save, as an immutable
//! [`SchemaRecord`] snapshot carrying its own identifier, creation
//! timestamp, and canonical content hash.
//!
//! Persisted data is untrusted on load: [`Schema::validate`] rechecks the
//! structural invariants so stores can fail closed on tampered or drifted
//! records.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashSet;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::field::FieldDefinition;
use crate::core::hashing::DEFAULT_HASH_ALGORITHM;
use crate::core::hashing::HashDigest;
use crate::core::hashing::HashError;
use crate::core::hashing::hash_canonical_json;
use crate::core::identifiers::FieldId;
use crate::core::identifiers::OptionId;
use crate::core::identifiers::TemplateId;
use crate::core::registry::FieldRegistry;
use crate::core::time::Timestamp;

// ============================================================================
// SECTION: Schema Errors
// ============================================================================

/// Structural validation errors for schemas.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Two fields share the same identifier.
    #[error("duplicate field id: {0}")]
    DuplicateFieldId(FieldId),
    /// Two options within one field share the same identifier.
    #[error("duplicate option id {option_id} in field {field_id}")]
    DuplicateOptionId {
        /// Owning field identifier.
        field_id: FieldId,
        /// Duplicated option identifier.
        option_id: OptionId,
    },
    /// A field carries an attribute outside its type's capability set.
    #[error("field {field_id} carries unsupported attribute: {attribute}")]
    UnsupportedAttribute {
        /// Offending field identifier.
        field_id: FieldId,
        /// Name of the attribute that must be absent for the field's type.
        attribute: &'static str,
    },
}

// ============================================================================
// SECTION: Schema
// ============================================================================

/// An ordered, named collection of field definitions.
///
/// # Invariants
/// - Field order is significant and renders top to bottom.
/// - Field identifiers are pairwise distinct.
/// - `name` may be empty while drafting but must be non-empty at save time;
///   the catalog enforces this on save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Template display name.
    pub name: String,
    /// Ordered field definitions.
    pub fields: Vec<FieldDefinition>,
}

impl Schema {
    /// Creates an empty schema draft with the provided name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Returns the field matching `field_id`, if present.
    #[must_use]
    pub fn field(&self, field_id: &FieldId) -> Option<&FieldDefinition> {
        self.fields.iter().find(|field| field.id == *field_id)
    }

    /// Returns the current index of the field matching `field_id`.
    #[must_use]
    pub fn field_index(&self, field_id: &FieldId) -> Option<usize> {
        self.fields.iter().position(|field| field.id == *field_id)
    }

    /// Validates the structural invariants of the schema.
    ///
    /// Checks pairwise-distinct field ids, distinct option ids within each
    /// field, and capability-set consistency (no attribute present that the
    /// field's type does not recognize).
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] describing the first violation found.
    pub fn validate(&self, registry: &FieldRegistry) -> Result<(), SchemaError> {
        let mut field_ids = HashSet::new();
        for field in &self.fields {
            if !field_ids.insert(field.id.clone()) {
                return Err(SchemaError::DuplicateFieldId(field.id.clone()));
            }

            let mut option_ids = HashSet::new();
            for option in &field.options {
                if !option_ids.insert(option.id.clone()) {
                    return Err(SchemaError::DuplicateOptionId {
                        field_id: field.id.clone(),
                        option_id: option.id.clone(),
                    });
                }
            }

            let caps = registry.capabilities(field.field_type);
            if !caps.has_options && !field.options.is_empty() {
                return Err(SchemaError::UnsupportedAttribute {
                    field_id: field.id.clone(),
                    attribute: "options",
                });
            }
            if !caps.has_validation_bounds && field.validation.is_some() {
                return Err(SchemaError::UnsupportedAttribute {
                    field_id: field.id.clone(),
                    attribute: "validation",
                });
            }
            if !caps.has_content && field.content.is_some() {
                return Err(SchemaError::UnsupportedAttribute {
                    field_id: field.id.clone(),
                    attribute: "content",
                });
            }
            if !caps.has_heading_level && field.heading_level.is_some() {
                return Err(SchemaError::UnsupportedAttribute {
                    field_id: field.id.clone(),
                    attribute: "heading_level",
                });
            }
            if !caps.has_alignment && field.alignment.is_some() {
                return Err(SchemaError::UnsupportedAttribute {
                    field_id: field.id.clone(),
                    attribute: "alignment",
                });
            }
            if !caps.has_styles && field.styles.is_some() {
                return Err(SchemaError::UnsupportedAttribute {
                    field_id: field.id.clone(),
                    attribute: "styles",
                });
            }
            if !caps.has_char_count && field.show_character_count.is_some() {
                return Err(SchemaError::UnsupportedAttribute {
                    field_id: field.id.clone(),
                    attribute: "show_character_count",
                });
            }
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Persisted Snapshots
// ============================================================================

/// Canonical hashing body for a schema snapshot.
///
/// # Invariants
/// - Covers exactly the user-authored content (`name` and `fields`); the
///   snapshot identifier and timestamp are excluded so re-saving unchanged
///   content yields the same digest.
#[derive(Serialize)]
struct SnapshotBody<'a> {
    /// Template display name.
    name: &'a str,
    /// Ordered field definitions.
    fields: &'a [FieldDefinition],
}

/// Immutable persisted snapshot of a schema.
///
/// # Invariants
/// - Never partially updated; edits produce a new in-memory draft and a
///   replacement snapshot on the next save.
/// - `content_hash` is the canonical hash of the snapshot's name and fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaRecord {
    /// Template identifier assigned at save time.
    pub template_id: TemplateId,
    /// Template display name at save time.
    pub name: String,
    /// Ordered field definitions at save time.
    pub fields: Vec<FieldDefinition>,
    /// Creation timestamp supplied by the host at save time.
    pub created_at: Timestamp,
    /// Canonical content hash over `name` and `fields`.
    pub content_hash: HashDigest,
}

impl SchemaRecord {
    /// Snapshots a schema draft into an immutable persisted record.
    ///
    /// # Errors
    ///
    /// Returns [`HashError`] when canonical hashing of the draft fails.
    pub fn snapshot(
        schema: &Schema,
        template_id: TemplateId,
        created_at: Timestamp,
    ) -> Result<Self, HashError> {
        let content_hash = Self::content_hash_of(&schema.name, &schema.fields)?;
        Ok(Self {
            template_id,
            name: schema.name.clone(),
            fields: schema.fields.clone(),
            created_at,
            content_hash,
        })
    }

    /// Recomputes the canonical content hash for this record's content.
    ///
    /// Stores use this to verify integrity on load and fail closed on
    /// mismatch.
    ///
    /// # Errors
    ///
    /// Returns [`HashError`] when canonical hashing fails.
    pub fn recompute_content_hash(&self) -> Result<HashDigest, HashError> {
        Self::content_hash_of(&self.name, &self.fields)
    }

    /// Reopens the record as an editable in-memory draft.
    #[must_use]
    pub fn to_draft(&self) -> Schema {
        Schema {
            name: self.name.clone(),
            fields: self.fields.clone(),
        }
    }

    /// Computes the canonical content hash over a name and field sequence.
    fn content_hash_of(name: &str, fields: &[FieldDefinition]) -> Result<HashDigest, HashError> {
        let body = SnapshotBody {
            name,
            fields,
        };
        hash_canonical_json(DEFAULT_HASH_ALGORITHM, &body)
    }
}
