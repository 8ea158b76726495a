// crates/formwork-core/src/runtime/reorder.rs
// ============================================================================
// Module: Formwork Drag Reorder Controller
// Description: Translation of drag gestures into id-based reorder operations.
// Purpose: Keep drag results correct under additions and deletions within a session.
// Dependencies: crate::core, crate::runtime::editor, serde
// ============================================================================

//! ## Overview
//! Drag gestures identify fields by id, not raw index, so a gesture stays
//! correct when fields are added while the drag is in flight. Both ids are
//! resolved to their current indices at apply time; if either id no longer
//! exists (the field was deleted mid-drag), the gesture is discarded and the
//! schema is returned unchanged; concurrent deletion always wins over a
//! stale drag. The controller is independent of any particular
//! gesture-recognition mechanism.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::FieldId;
use crate::core::Schema;
use crate::runtime::editor::EditError;
use crate::runtime::editor::move_field;

// ============================================================================
// SECTION: Drag Gestures
// ============================================================================

/// Result of a completed drag gesture over the field list.
///
/// # Invariants
/// - Identifies fields by id; indices are resolved only at apply time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragGesture {
    /// Identifier of the dragged field.
    pub source_id: FieldId,
    /// Identifier of the field at the drop position.
    pub destination_id: FieldId,
}

// ============================================================================
// SECTION: Gesture Application
// ============================================================================

/// Applies a drag gesture to a schema.
///
/// Resolves both gesture ids to current indices and moves the source field
/// to the destination index. When either id is absent the gesture is
/// discarded and a clone of the input schema is returned.
///
/// # Errors
///
/// Returns [`EditError`] when the underlying reorder fails; with indices
/// resolved from live ids this does not occur in practice, but the error
/// surface is kept so callers handle reorders uniformly.
pub fn apply_gesture(schema: &Schema, gesture: &DragGesture) -> Result<Schema, EditError> {
    let Some(from) = schema.field_index(&gesture.source_id) else {
        return Ok(schema.clone());
    };
    let Some(to) = schema.field_index(&gesture.destination_id) else {
        return Ok(schema.clone());
    };
    move_field(schema, from, to)
}
