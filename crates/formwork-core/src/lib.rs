// crates/formwork-core/src/lib.rs
// ============================================================================
// Module: Formwork Core Crate
// Description: Ordered-field-schema engine for record templates.
// Purpose: Provide the data model, editor, renderer, and persistence seams.
// Dependencies: serde, serde_jcs, sha2, thiserror
// ============================================================================

//! ## Overview
//! Formwork models custom record templates as ordered field schemas: a named
//! sequence of tagged field definitions (text inputs, choice groups, static
//! headings and paragraphs, dividers) edited through pure operations and
//! previewed through a deterministic renderer.
//!
//! The crate is organized in three layers:
//! - [`core`]: value types: identifiers, field definitions, the field
//!   registry and its capability sets, schemas, persisted snapshots,
//!   canonical hashing, and timestamps.
//! - [`interfaces`]: the persistence gateway contract hosts implement.
//! - [`runtime`]: the schema editor, presentation renderer, drag reorder
//!   controller, and template catalog.
//!
//! All operations are synchronous, total functions over in-memory data; the
//! core performs no I/O and never reads ambient state such as wall-clock
//! time.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use crate::core::Alignment;
pub use crate::core::ChoiceOption;
pub use crate::core::FieldCapabilities;
pub use crate::core::FieldDefinition;
pub use crate::core::FieldId;
pub use crate::core::FieldRegistry;
pub use crate::core::FieldType;
pub use crate::core::HashAlgorithm;
pub use crate::core::HashDigest;
pub use crate::core::HashError;
pub use crate::core::HeadingLevel;
pub use crate::core::OptionId;
pub use crate::core::RegistryError;
pub use crate::core::Schema;
pub use crate::core::SchemaError;
pub use crate::core::SchemaRecord;
pub use crate::core::TemplateId;
pub use crate::core::TextStyles;
pub use crate::core::Timestamp;
pub use crate::core::ValidationBounds;
pub use crate::core::hashing;
pub use crate::interfaces::StoreError;
pub use crate::interfaces::TemplateStore;
