// crates/formwork-core/tests/render.rs
// ============================================================================
// Module: Presentation Renderer Tests
// Description: Validate the schema-to-descriptor projection.
// Purpose: Ensure rendering is deterministic, ordered, and type-faithful.
// Dependencies: formwork-core
// ============================================================================

//! Renderer tests: one descriptor per field in order, type-appropriate
//! controls, and identical output for identical input.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use formwork_core::Alignment;
use formwork_core::FieldType;
use formwork_core::HeadingLevel;
use formwork_core::Schema;
use formwork_core::TextStyles;
use formwork_core::ValidationBounds;
use formwork_core::runtime::FieldPatch;
use formwork_core::runtime::SchemaEditor;
use formwork_core::runtime::WidgetControl;
use formwork_core::runtime::render;

/// Builds a schema exercising every field type.
fn full_schema() -> Schema {
    let mut editor = SchemaEditor::new();
    let mut draft = editor.new_schema("Preview");
    for field_type in FieldType::all() {
        draft = editor.add_field(&draft, field_type).expect("add field");
    }

    let select_id = draft.fields[2].id.clone();
    draft = editor.add_option(&draft, &select_id).expect("option");

    let heading_id = draft.fields[5].id.clone();
    let heading_patch = FieldPatch {
        content: Some("Anamnesis".to_string()),
        heading_level: HeadingLevel::new(3),
        alignment: Some(Alignment::Center),
        ..FieldPatch::default()
    };
    draft = editor.update_field(&draft, &heading_id, &heading_patch).expect("heading");

    let text_id = draft.fields[0].id.clone();
    let text_patch = FieldPatch {
        validation: ValidationBounds::new(2, 80),
        show_character_count: Some(true),
        ..FieldPatch::default()
    };
    editor.update_field(&draft, &text_id, &text_patch).expect("text")
}

#[test]
fn render_emits_one_descriptor_per_field_in_order() {
    let schema = full_schema();
    let descriptors = render(&schema);

    assert_eq!(descriptors.len(), schema.fields.len());
    for (descriptor, field) in descriptors.iter().zip(&schema.fields) {
        assert_eq!(descriptor.field_id, field.id);
        assert_eq!(descriptor.label, field.label);
    }
}

#[test]
fn render_is_deterministic() {
    let schema = full_schema();
    assert_eq!(render(&schema), render(&schema));
}

#[test]
fn render_maps_types_to_controls() {
    let schema = full_schema();
    let descriptors = render(&schema);

    assert!(matches!(
        descriptors[0].control,
        WidgetControl::TextInput {
            bounds: Some(bounds),
            show_character_count: true,
        } if bounds.min_length() == 2 && bounds.max_length() == 80
    ));
    assert!(matches!(
        descriptors[1].control,
        WidgetControl::TextArea {
            bounds: None,
            show_character_count: false,
        }
    ));
    assert!(matches!(&descriptors[2].control, WidgetControl::Dropdown { options } if options.len() == 1));
    assert!(matches!(&descriptors[3].control, WidgetControl::RadioGroup { options } if options.is_empty()));
    assert!(matches!(&descriptors[4].control, WidgetControl::CheckboxGroup { options } if options.is_empty()));
    assert!(matches!(
        &descriptors[5].control,
        WidgetControl::Heading { text, level, alignment }
            if text == "Anamnesis" && level.get() == 3 && *alignment == Alignment::Center
    ));
    assert!(matches!(
        &descriptors[6].control,
        WidgetControl::Paragraph { styles, .. } if *styles == TextStyles::default()
    ));
    assert!(matches!(descriptors[7].control, WidgetControl::Divider));
}

#[test]
fn render_projects_option_defaults_as_selected() {
    let mut editor = SchemaEditor::new();
    let draft = editor.new_schema("Preview");
    let draft = editor.add_field(&draft, FieldType::SingleChoice).expect("add choice");
    let field_id = draft.fields[0].id.clone();
    let draft = editor.add_option(&draft, &field_id).expect("option");
    let option_id = draft.fields[0].options[0].id.clone();
    let draft = editor
        .set_option_default(&draft, &field_id, &option_id, true)
        .expect("toggle");

    let descriptors = render(&draft);
    let WidgetControl::RadioGroup { options } = &descriptors[0].control else {
        panic!("expected radio group, got {:?}", descriptors[0].control);
    };
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].option_id, option_id);
    assert!(options[0].selected);
}
