// crates/formwork-core/src/interfaces/mod.rs
// ============================================================================
// Module: Formwork Interfaces
// Description: Backend-agnostic persistence interface for template lists.
// Purpose: Define the storage contract consumed by the template catalog.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! The persistence gateway is an opaque synchronous store for the full list
//! of persisted template snapshots. The core never touches storage directly;
//! hosts inject an implementation into [`crate::runtime::TemplateCatalog`].
//! Semantics are last-write-wins: the store provides no transactional
//! guarantee beyond replacing the whole list on save, and implementations
//! must treat loaded data as untrusted and fail closed on corruption.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use thiserror::Error;

use crate::core::SchemaRecord;

// ============================================================================
// SECTION: Store Errors
// ============================================================================

/// Template store errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Store I/O error.
    #[error("template store io error: {0}")]
    Io(String),
    /// Store data is corrupted or fails integrity checks.
    #[error("template store corruption: {0}")]
    Corrupt(String),
    /// Store data version is incompatible.
    #[error("template store version mismatch: {0}")]
    VersionMismatch(String),
    /// Store data is invalid.
    #[error("template store invalid data: {0}")]
    Invalid(String),
    /// Store reported an error.
    #[error("template store error: {0}")]
    Store(String),
}

// ============================================================================
// SECTION: Template Store
// ============================================================================

/// Persistence gateway for the list of saved template snapshots.
pub trait TemplateStore {
    /// Loads the full persisted template list.
    ///
    /// A store that has never been written returns an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when loading fails or the data fails
    /// integrity checks.
    fn load_templates(&self) -> Result<Vec<SchemaRecord>, StoreError>;

    /// Replaces the full persisted template list.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when saving fails.
    fn save_templates(&self, templates: &[SchemaRecord]) -> Result<(), StoreError>;

    /// Reports store readiness for liveness/readiness probes.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store is unavailable.
    fn readiness(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

impl<S: TemplateStore + ?Sized> TemplateStore for &S {
    fn load_templates(&self) -> Result<Vec<SchemaRecord>, StoreError> {
        (**self).load_templates()
    }

    fn save_templates(&self, templates: &[SchemaRecord]) -> Result<(), StoreError> {
        (**self).save_templates(templates)
    }

    fn readiness(&self) -> Result<(), StoreError> {
        (**self).readiness()
    }
}

impl<S: TemplateStore + ?Sized> TemplateStore for Arc<S> {
    fn load_templates(&self) -> Result<Vec<SchemaRecord>, StoreError> {
        (**self).load_templates()
    }

    fn save_templates(&self, templates: &[SchemaRecord]) -> Result<(), StoreError> {
        (**self).save_templates(templates)
    }

    fn readiness(&self) -> Result<(), StoreError> {
        (**self).readiness()
    }
}
