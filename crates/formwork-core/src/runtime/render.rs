// crates/formwork-core/src/runtime/render.rs
// ============================================================================
// Module: Formwork Presentation Renderer
// Description: Read-only projection of a schema into inert widget descriptors.
// Purpose: Derive the preview a host UI draws for a schema draft.
// Dependencies: crate::core, serde
// ============================================================================

//! ## Overview
//! Rendering is a pure function over a schema: one descriptor per field, in
//! field order, carrying exactly the attributes a preview needs. Descriptors
//! describe disabled, read-only controls; the preview never accepts input.
//! Determinism (identical output for identical input) makes descriptor
//! sequences suitable for snapshot and golden testing.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::Alignment;
use crate::core::FieldId;
use crate::core::FieldType;
use crate::core::HeadingLevel;
use crate::core::OptionId;
use crate::core::Schema;
use crate::core::TextStyles;
use crate::core::ValidationBounds;
use crate::core::field::FieldDefinition;

// ============================================================================
// SECTION: Option Views
// ============================================================================

/// Preview projection of one choice option.
///
/// # Invariants
/// - `selected` mirrors the option's default-selected flag; previews show
///   the state a fresh record would start in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionView {
    /// Option identifier.
    pub option_id: OptionId,
    /// Display label.
    pub label: String,
    /// Indicates the option renders pre-selected.
    pub selected: bool,
}

// ============================================================================
// SECTION: Widget Controls
// ============================================================================

/// Inert preview control derived from one field.
///
/// # Invariants
/// - Variants are stable for serialization and golden testing.
/// - Every control renders disabled; descriptors carry no input state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WidgetControl {
    /// Disabled single-line text input.
    TextInput {
        /// Length bounds shown as input hints, when configured.
        bounds: Option<ValidationBounds>,
        /// Indicates a character counter is drawn.
        show_character_count: bool,
    },
    /// Disabled multi-line text input.
    TextArea {
        /// Length bounds shown as input hints, when configured.
        bounds: Option<ValidationBounds>,
        /// Indicates a character counter is drawn.
        show_character_count: bool,
    },
    /// Disabled dropdown over options.
    Dropdown {
        /// Options in definition order.
        options: Vec<OptionView>,
    },
    /// Disabled radio group over options.
    RadioGroup {
        /// Options in definition order.
        options: Vec<OptionView>,
    },
    /// Disabled checkbox group over options.
    CheckboxGroup {
        /// Options in definition order.
        options: Vec<OptionView>,
    },
    /// Static heading text.
    Heading {
        /// Heading body text.
        text: String,
        /// Heading level.
        level: HeadingLevel,
        /// Horizontal alignment.
        alignment: Alignment,
    },
    /// Static paragraph text.
    Paragraph {
        /// Paragraph body text.
        text: String,
        /// Horizontal alignment.
        alignment: Alignment,
        /// Inline style toggles.
        styles: TextStyles,
    },
    /// Static horizontal divider.
    Divider,
}

// ============================================================================
// SECTION: Widget Descriptors
// ============================================================================

/// One inert preview widget, in schema field order.
///
/// # Invariants
/// - `field_id` matches the originating field definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetDescriptor {
    /// Originating field identifier.
    pub field_id: FieldId,
    /// Display caption for the widget.
    pub label: String,
    /// Inert control payload.
    pub control: WidgetControl,
}

// ============================================================================
// SECTION: Rendering
// ============================================================================

/// Renders a schema into inert widget descriptors, one per field in order.
///
/// Pure and deterministic: identical schemas produce identical descriptor
/// sequences.
#[must_use]
pub fn render(schema: &Schema) -> Vec<WidgetDescriptor> {
    schema.fields.iter().map(render_field).collect()
}

/// Renders one field definition into its widget descriptor.
fn render_field(field: &FieldDefinition) -> WidgetDescriptor {
    let control = match field.field_type {
        FieldType::Text => WidgetControl::TextInput {
            bounds: field.validation,
            show_character_count: field.show_character_count.unwrap_or(false),
        },
        FieldType::TextArea => WidgetControl::TextArea {
            bounds: field.validation,
            show_character_count: field.show_character_count.unwrap_or(false),
        },
        FieldType::Select => WidgetControl::Dropdown {
            options: option_views(field),
        },
        FieldType::SingleChoice => WidgetControl::RadioGroup {
            options: option_views(field),
        },
        FieldType::MultiChoice => WidgetControl::CheckboxGroup {
            options: option_views(field),
        },
        FieldType::Heading => WidgetControl::Heading {
            text: field.content.clone().unwrap_or_default(),
            level: field.heading_level.unwrap_or_default(),
            alignment: field.alignment.unwrap_or_default(),
        },
        FieldType::Paragraph => WidgetControl::Paragraph {
            text: field.content.clone().unwrap_or_default(),
            alignment: field.alignment.unwrap_or_default(),
            styles: field.styles.unwrap_or_default(),
        },
        FieldType::Divider => WidgetControl::Divider,
    };
    WidgetDescriptor {
        field_id: field.id.clone(),
        label: field.label.clone(),
        control,
    }
}

/// Projects a field's options into preview views, preserving order.
fn option_views(field: &FieldDefinition) -> Vec<OptionView> {
    field
        .options
        .iter()
        .map(|option| OptionView {
            option_id: option.id.clone(),
            label: option.label.clone(),
            selected: option.selected_by_default,
        })
        .collect()
}
