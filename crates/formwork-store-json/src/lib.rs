// crates/formwork-store-json/src/lib.rs
// ============================================================================
// Module: Formwork JSON Store Crate
// Description: Durable TemplateStore backed by a single JSON document.
// Purpose: Persist template lists with fail-closed integrity verification.
// Dependencies: formwork-core, serde, serde_json
// ============================================================================

//! ## Overview
//! This crate implements the [`formwork_core::TemplateStore`] contract over
//! one JSON document on disk. The persisted unit is the full template list,
//! replaced atomically on every save (last write wins); loads verify each
//! record's canonical content hash and fail closed on corruption.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod store;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use store::JsonStoreConfig;
pub use store::JsonStoreStats;
pub use store::JsonTemplateStore;
pub use store::MAX_DOCUMENT_BYTES;
pub use store::STORE_FORMAT_VERSION;
