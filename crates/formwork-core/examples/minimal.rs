// crates/formwork-core/examples/minimal.rs
// ============================================================================
// Module: Formwork Minimal Example
// Description: Minimal end-to-end template edit, render, and save cycle.
// Purpose: Demonstrate the editor, renderer, and catalog over memory.
// Dependencies: formwork-core
// ============================================================================

//! ## Overview
//! Builds a small record template with the schema editor, previews it with
//! the presentation renderer, and persists it through the template catalog
//! backed by the in-memory store. This example is backend-agnostic and
//! suitable for quick verification.

use formwork_core::FieldType;
use formwork_core::TemplateId;
use formwork_core::Timestamp;
use formwork_core::runtime::DragGesture;
use formwork_core::runtime::FieldPatch;
use formwork_core::runtime::InMemoryTemplateStore;
use formwork_core::runtime::SchemaEditor;
use formwork_core::runtime::TemplateCatalog;
use formwork_core::runtime::apply_gesture;
use formwork_core::runtime::render;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut editor = SchemaEditor::new();
    let draft = editor.new_schema("Patient intake");

    // Assemble the template: a heading, a name input, and a blood type picker.
    let draft = editor.add_field(&draft, FieldType::Heading)?;
    let heading_id = draft.fields[0].id.clone();
    let draft = editor.update_field(
        &draft,
        &heading_id,
        &FieldPatch {
            content: Some("Admission".to_owned()),
            ..FieldPatch::default()
        },
    )?;

    let draft = editor.add_field(&draft, FieldType::Text)?;
    let name_id = draft.fields[1].id.clone();
    let draft = editor.update_field(
        &draft,
        &name_id,
        &FieldPatch {
            label: Some("Full name".to_owned()),
            ..FieldPatch::default()
        },
    )?;

    let draft = editor.add_field(&draft, FieldType::Select)?;
    let select_id = draft.fields[2].id.clone();
    let draft = editor.add_option(&draft, &select_id)?;
    let draft = editor.add_option(&draft, &select_id)?;

    // Drag the picker above the name input by field identity.
    let draft = apply_gesture(
        &draft,
        &DragGesture {
            source_id: select_id,
            destination_id: name_id,
        },
    )?;

    let preview = render(&draft);
    let _ = preview;

    let catalog = TemplateCatalog::new(InMemoryTemplateStore::new());
    let record = catalog.save_draft(&draft, TemplateId::new("tpl-intake"), Timestamp::Logical(1))?;
    let saved = catalog.list()?;
    let _ = (record, saved);
    Ok(())
}
