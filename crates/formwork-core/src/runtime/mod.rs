// crates/formwork-core/src/runtime/mod.rs
// ============================================================================
// Module: Formwork Runtime
// Description: Editor operations, rendering, reordering, and catalog plumbing.
// Purpose: Host the operations that turn user actions into new schema values.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! The runtime module holds everything that acts on the core model: the
//! schema editor, the presentation renderer, the drag reorder controller,
//! and the template catalog. It also provides an in-memory store for tests
//! and hosts without durable storage.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Mutex;

use crate::core::SchemaRecord;
use crate::interfaces::StoreError;
use crate::interfaces::TemplateStore;

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod catalog;
pub mod editor;
pub mod render;
pub mod reorder;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use catalog::CatalogError;
pub use catalog::TemplateCatalog;
pub use editor::EditError;
pub use editor::EditorLimits;
pub use editor::FieldPatch;
pub use editor::SchemaEditor;
pub use editor::SequenceTokenSource;
pub use editor::TokenSource;
pub use render::OptionView;
pub use render::WidgetControl;
pub use render::WidgetDescriptor;
pub use render::render;
pub use reorder::DragGesture;
pub use reorder::apply_gesture;

// ============================================================================
// SECTION: In-Memory Template Store
// ============================================================================

/// In-memory template store for tests and ephemeral hosts.
///
/// # Invariants
/// - Saves replace the full list; loads return a snapshot copy.
#[derive(Debug, Default)]
pub struct InMemoryTemplateStore {
    /// Persisted template list guarded for shared access.
    templates: Mutex<Vec<SchemaRecord>>,
}

impl InMemoryTemplateStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TemplateStore for InMemoryTemplateStore {
    fn load_templates(&self) -> Result<Vec<SchemaRecord>, StoreError> {
        let templates = self
            .templates
            .lock()
            .map_err(|err| StoreError::Store(format!("lock poisoned: {err}")))?;
        Ok(templates.clone())
    }

    fn save_templates(&self, templates: &[SchemaRecord]) -> Result<(), StoreError> {
        let mut slot = self
            .templates
            .lock()
            .map_err(|err| StoreError::Store(format!("lock poisoned: {err}")))?;
        *slot = templates.to_vec();
        Ok(())
    }
}
