// crates/formwork-core/src/core/mod.rs
// ============================================================================
// Module: Formwork Core Model
// Description: Data model for ordered field schemas and persisted snapshots.
// Purpose: Re-export the core value types used across the crate.
// Dependencies: crate::core submodules
// ============================================================================

//! ## Overview
//! The core module holds the value types of the schema engine: identifiers,
//! field definitions, the field registry, schemas and their persisted
//! snapshots, canonical hashing, and timestamps. Everything here is plain
//! data with construction-boundary invariants; operations live in
//! [`crate::runtime`].

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod field;
pub mod hashing;
pub mod identifiers;
pub mod registry;
pub mod schema;
pub mod time;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use field::Alignment;
pub use field::ChoiceOption;
pub use field::FieldDefinition;
pub use field::FieldType;
pub use field::HeadingLevel;
pub use field::TextStyles;
pub use field::ValidationBounds;
pub use hashing::HashAlgorithm;
pub use hashing::HashDigest;
pub use hashing::HashError;
pub use identifiers::FieldId;
pub use identifiers::OptionId;
pub use identifiers::TemplateId;
pub use registry::FieldCapabilities;
pub use registry::FieldRegistry;
pub use registry::RegistryError;
pub use schema::Schema;
pub use schema::SchemaError;
pub use schema::SchemaRecord;
pub use time::Timestamp;
