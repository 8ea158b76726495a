// crates/formwork-core/src/runtime/catalog.rs
// ============================================================================
// Module: Formwork Template Catalog
// Description: Read-modify-write cycle over the persisted template list.
// Purpose: Snapshot drafts into the store and manage the saved list.
// Dependencies: crate::core, crate::interfaces, thiserror
// ============================================================================

//! ## Overview
//! The catalog owns the save-time workflow: validate the draft, snapshot it
//! with a canonical content hash and a host-supplied timestamp, then replace
//! the full persisted list through the injected [`TemplateStore`]. Persisted
//! snapshots are never partially updated; saving under an existing template
//! identifier replaces that entry wholesale. Last write wins across catalog
//! instances sharing a store.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::FieldRegistry;
use crate::core::HashError;
use crate::core::Schema;
use crate::core::SchemaError;
use crate::core::SchemaRecord;
use crate::core::TemplateId;
use crate::core::Timestamp;
use crate::interfaces::StoreError;
use crate::interfaces::TemplateStore;

// ============================================================================
// SECTION: Catalog Errors
// ============================================================================

/// Template catalog errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Draft name is empty at save time.
    #[error("template name must be non-empty at save time")]
    EmptyName,
    /// Draft fails structural validation.
    #[error("invalid draft: {0}")]
    Invalid(#[from] SchemaError),
    /// Canonical hashing of the draft failed.
    #[error("snapshot hashing failed: {0}")]
    Hash(#[from] HashError),
    /// Underlying store operation failed.
    #[error("store operation failed: {0}")]
    Store(#[from] StoreError),
}

// ============================================================================
// SECTION: Template Catalog
// ============================================================================

/// Catalog of persisted template snapshots over an injected store.
///
/// # Invariants
/// - Template identifiers are unique within the persisted list; saving under
///   an existing identifier replaces that entry.
/// - The persisted list is always written in full (no partial updates).
#[derive(Debug)]
pub struct TemplateCatalog<S: TemplateStore> {
    /// Injected persistence gateway.
    store: S,
    /// Registry used for draft validation.
    registry: FieldRegistry,
}

impl<S: TemplateStore> TemplateCatalog<S> {
    /// Creates a catalog over the provided store.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            registry: FieldRegistry::new(),
        }
    }

    /// Returns the injected store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Loads the persisted template list.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Store`] when loading fails.
    pub fn list(&self) -> Result<Vec<SchemaRecord>, CatalogError> {
        Ok(self.store.load_templates()?)
    }

    /// Snapshots a draft and persists it under `template_id`.
    ///
    /// Replaces any existing snapshot with the same identifier, otherwise
    /// appends; the full list is written back either way.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyName`] when the draft name is empty or
    /// whitespace, [`CatalogError::Invalid`] when the draft fails structural
    /// validation, [`CatalogError::Hash`] when snapshot hashing fails, or
    /// [`CatalogError::Store`] when the store round trip fails.
    pub fn save_draft(
        &self,
        draft: &Schema,
        template_id: TemplateId,
        created_at: Timestamp,
    ) -> Result<SchemaRecord, CatalogError> {
        if draft.name.trim().is_empty() {
            return Err(CatalogError::EmptyName);
        }
        draft.validate(&self.registry)?;

        let record = SchemaRecord::snapshot(draft, template_id, created_at)?;
        let mut templates = self.store.load_templates()?;
        match templates
            .iter_mut()
            .find(|existing| existing.template_id == record.template_id)
        {
            Some(existing) => *existing = record.clone(),
            None => templates.push(record.clone()),
        }
        self.store.save_templates(&templates)?;
        Ok(record)
    }

    /// Removes the snapshot matching `template_id` from the persisted list.
    ///
    /// Idempotent: an absent identifier is a successful no-op.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Store`] when the store round trip fails.
    pub fn remove(&self, template_id: &TemplateId) -> Result<(), CatalogError> {
        let mut templates = self.store.load_templates()?;
        let before = templates.len();
        templates.retain(|record| record.template_id != *template_id);
        if templates.len() != before {
            self.store.save_templates(&templates)?;
        }
        Ok(())
    }
}
