// crates/formwork-core/src/runtime/editor.rs
// ============================================================================
// Module: Formwork Schema Editor
// Description: Add, update, remove, reorder, and option operations over schemas.
// Purpose: Apply user edits while enforcing schema invariants.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! Every editor operation is a total function from a schema value to a new
//! schema value: inputs are never mutated, and a failed operation leaves the
//! caller's schema untouched. The editor itself carries only the registry,
//! the monotonic token source used to mint fresh identifiers, and the
//! configured size limits.
//!
//! Delete semantics are idempotent: removing an absent field or option is a
//! successful no-op, while index and type violations are reported so a
//! caller (for example the drag controller) can decide to discard a stale
//! gesture.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::ChoiceOption;
use crate::core::FieldDefinition;
use crate::core::FieldId;
use crate::core::FieldType;
use crate::core::OptionId;
use crate::core::Schema;
use crate::core::field::Alignment;
use crate::core::field::HeadingLevel;
use crate::core::field::TextStyles;
use crate::core::field::ValidationBounds;
use crate::core::registry::FieldRegistry;

// ============================================================================
// SECTION: Editor Errors
// ============================================================================

/// Schema editor errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - Operations that fail leave the input schema unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// The requested field type tag is not recognized.
    #[error("invalid field type: {0}")]
    InvalidFieldType(String),
    /// No field matches the requested identifier.
    #[error("field not found: {0}")]
    FieldNotFound(FieldId),
    /// A reorder index is outside the valid range.
    #[error("index out of range: {index} (len {len})")]
    IndexOutOfRange {
        /// Offending index.
        index: usize,
        /// Current field count.
        len: usize,
    },
    /// The field's type has no option list.
    #[error("field {field_id} of type {field_type} does not support options")]
    OptionsUnsupported {
        /// Offending field identifier.
        field_id: FieldId,
        /// The field's type.
        field_type: FieldType,
    },
    /// A configured size limit would be exceeded.
    #[error("limit exceeded for {what}: max {max}")]
    LimitExceeded {
        /// Name of the limited quantity.
        what: &'static str,
        /// Configured maximum.
        max: usize,
    },
}

// ============================================================================
// SECTION: Token Source
// ============================================================================

/// Monotonic token source used to mint fresh field and option identifiers.
pub trait TokenSource {
    /// Returns the next token; successive calls return strictly increasing values.
    fn next_token(&mut self) -> u64;
}

/// Token source backed by a plain counter.
///
/// # Invariants
/// - Tokens start at 1 and increase by 1 per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceTokenSource {
    /// Next token to hand out.
    next: u64,
}

impl SequenceTokenSource {
    /// Creates a token source starting at 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next: 1,
        }
    }

    /// Creates a token source starting at `first`.
    ///
    /// Useful when resuming an editing session over a schema whose existing
    /// identifiers embed earlier tokens.
    #[must_use]
    pub const fn starting_at(first: u64) -> Self {
        Self {
            next: first,
        }
    }
}

impl Default for SequenceTokenSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenSource for SequenceTokenSource {
    fn next_token(&mut self) -> u64 {
        let token = self.next;
        self.next = self.next.saturating_add(1);
        token
    }
}

// ============================================================================
// SECTION: Editor Limits
// ============================================================================

/// Size limits enforced by the editor.
///
/// # Invariants
/// - Limits are hard caps; operations that would exceed them fail with
///   [`EditError::LimitExceeded`] and existing data is never truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorLimits {
    /// Maximum number of fields per schema.
    pub max_fields: usize,
    /// Maximum number of options per field.
    pub max_options: usize,
}

impl Default for EditorLimits {
    fn default() -> Self {
        Self {
            max_fields: DEFAULT_MAX_FIELDS,
            max_options: DEFAULT_MAX_OPTIONS,
        }
    }
}

/// Default cap on fields per schema.
const DEFAULT_MAX_FIELDS: usize = 128;
/// Default cap on options per field.
const DEFAULT_MAX_OPTIONS: usize = 32;

// ============================================================================
// SECTION: Field Patch
// ============================================================================

/// Partial update applied to one field.
///
/// Absent attributes (`None`) are left untouched. Present attributes are
/// applied only when the field's type recognizes them; everything outside
/// the capability set is silently dropped, mirroring per-type editors that
/// simply never expose the irrelevant controls.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldPatch {
    /// New display label.
    pub label: Option<String>,
    /// New body text for heading/paragraph elements.
    pub content: Option<String>,
    /// New heading level.
    pub heading_level: Option<HeadingLevel>,
    /// New horizontal alignment.
    pub alignment: Option<Alignment>,
    /// New inline style toggles.
    pub styles: Option<TextStyles>,
    /// New character counter toggle.
    pub show_character_count: Option<bool>,
    /// New length validation bounds.
    pub validation: Option<ValidationBounds>,
}

// ============================================================================
// SECTION: Reorder Primitive
// ============================================================================

/// Moves the field at `from` to `to`, shifting the fields in between.
///
/// Shared by [`SchemaEditor::reorder_field`] and the drag controller in
/// [`crate::runtime::reorder`].
///
/// # Errors
///
/// Returns [`EditError::IndexOutOfRange`] when either index is outside
/// `[0, fields.len())`.
pub fn move_field(schema: &Schema, from: usize, to: usize) -> Result<Schema, EditError> {
    let len = schema.fields.len();
    if from >= len {
        return Err(EditError::IndexOutOfRange {
            index: from,
            len,
        });
    }
    if to >= len {
        return Err(EditError::IndexOutOfRange {
            index: to,
            len,
        });
    }
    let mut next = schema.clone();
    if from != to {
        let field = next.fields.remove(from);
        next.fields.insert(to, field);
    }
    Ok(next)
}

// ============================================================================
// SECTION: Schema Editor
// ============================================================================

/// Schema editor applying validated operations over schema values.
///
/// # Invariants
/// - Operations never mutate their input schema; failures return the error
///   and leave the caller's value untouched.
/// - Minted identifiers are unique across the editor's lifetime because the
///   token source is strictly increasing, and never collide with ids already
///   present in the target schema (tokens embedded in existing ids are
///   skipped), so editing a reopened snapshot with a fresh editor is safe.
#[derive(Debug, Clone)]
pub struct SchemaEditor<T = SequenceTokenSource> {
    /// Registry driving capability checks and defaults.
    registry: FieldRegistry,
    /// Monotonic token source for fresh identifiers.
    tokens: T,
    /// Configured size limits.
    limits: EditorLimits,
}

impl SchemaEditor<SequenceTokenSource> {
    /// Creates an editor with a counter token source and default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::with_token_source(SequenceTokenSource::new(), EditorLimits::default())
    }
}

impl Default for SchemaEditor<SequenceTokenSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TokenSource> SchemaEditor<T> {
    /// Creates an editor with the provided token source and limits.
    #[must_use]
    pub fn with_token_source(tokens: T, limits: EditorLimits) -> Self {
        Self {
            registry: FieldRegistry::new(),
            tokens,
            limits,
        }
    }

    /// Returns the registry used by this editor.
    #[must_use]
    pub const fn registry(&self) -> &FieldRegistry {
        &self.registry
    }

    /// Returns the configured limits.
    #[must_use]
    pub const fn limits(&self) -> EditorLimits {
        self.limits
    }

    /// Creates an empty schema draft with the provided name.
    #[must_use]
    pub fn new_schema(&self, name: impl Into<String>) -> Schema {
        Schema::new(name)
    }

    /// Appends a fresh default field of the given type.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::LimitExceeded`] when the schema already holds
    /// the maximum number of fields.
    pub fn add_field(&mut self, schema: &Schema, field_type: FieldType) -> Result<Schema, EditError> {
        if schema.fields.len() >= self.limits.max_fields {
            return Err(EditError::LimitExceeded {
                what: "fields",
                max: self.limits.max_fields,
            });
        }
        let id = self.mint_field_id(schema);
        let field = self.registry.default_field(field_type, id);
        let mut next = schema.clone();
        next.fields.push(field);
        Ok(next)
    }

    /// Appends a fresh default field from a wire tag.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::InvalidFieldType`] when the tag is not
    /// recognized, or [`EditError::LimitExceeded`] when the schema is full.
    pub fn add_field_by_tag(&mut self, schema: &Schema, tag: &str) -> Result<Schema, EditError> {
        let field_type = self
            .registry
            .parse_tag(tag)
            .map_err(|_| EditError::InvalidFieldType(tag.to_string()))?;
        self.add_field(schema, field_type)
    }

    /// Merges a patch into the field matching `field_id`.
    ///
    /// Patch attributes outside the field type's capability set are silently
    /// dropped; the label is always applied.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::FieldNotFound`] when no field matches `field_id`.
    pub fn update_field(
        &self,
        schema: &Schema,
        field_id: &FieldId,
        patch: &FieldPatch,
    ) -> Result<Schema, EditError> {
        self.with_field(schema, field_id, |registry, field| {
            let caps = registry.capabilities(field.field_type);
            if let Some(label) = &patch.label {
                field.label.clone_from(label);
            }
            if caps.has_content && let Some(content) = &patch.content {
                field.content = Some(content.clone());
            }
            if caps.has_heading_level && let Some(level) = patch.heading_level {
                field.heading_level = Some(level);
            }
            if caps.has_alignment && let Some(alignment) = patch.alignment {
                field.alignment = Some(alignment);
            }
            if caps.has_styles && let Some(styles) = patch.styles {
                field.styles = Some(styles);
            }
            if caps.has_char_count && let Some(toggle) = patch.show_character_count {
                field.show_character_count = Some(toggle);
            }
            if caps.has_validation_bounds && let Some(bounds) = patch.validation {
                field.validation = Some(bounds);
            }
        })
    }

    /// Removes the field matching `field_id`.
    ///
    /// Idempotent: an absent identifier is a successful no-op.
    #[must_use]
    pub fn remove_field(&self, schema: &Schema, field_id: &FieldId) -> Schema {
        let mut next = schema.clone();
        next.fields.retain(|field| field.id != *field_id);
        next
    }

    /// Moves the field at `from` to `to`, shifting the fields in between.
    ///
    /// No-op when `from == to` (both indexes must still be in range).
    ///
    /// # Errors
    ///
    /// Returns [`EditError::IndexOutOfRange`] when either index is outside
    /// `[0, fields.len())`.
    pub fn reorder_field(&self, schema: &Schema, from: usize, to: usize) -> Result<Schema, EditError> {
        move_field(schema, from, to)
    }

    /// Appends a fresh option to the field matching `field_id`.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::FieldNotFound`] when no field matches,
    /// [`EditError::OptionsUnsupported`] when the field's type has no option
    /// list, or [`EditError::LimitExceeded`] when the option list is full.
    pub fn add_option(&mut self, schema: &Schema, field_id: &FieldId) -> Result<Schema, EditError> {
        let field = schema
            .field(field_id)
            .ok_or_else(|| EditError::FieldNotFound(field_id.clone()))?;
        self.ensure_options_supported(field)?;
        if field.options.len() >= self.limits.max_options {
            return Err(EditError::LimitExceeded {
                what: "options",
                max: self.limits.max_options,
            });
        }
        let option = ChoiceOption {
            id: self.mint_option_id(field),
            label: format!("Option {}", field.options.len() + 1),
            selected_by_default: false,
        };
        self.with_field(schema, field_id, |_, field| field.options.push(option))
    }

    /// Removes the option matching `option_id` from the field.
    ///
    /// Idempotent on the option identifier: an absent option is a successful
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::FieldNotFound`] when no field matches, or
    /// [`EditError::OptionsUnsupported`] when the field's type has no option
    /// list.
    pub fn remove_option(
        &self,
        schema: &Schema,
        field_id: &FieldId,
        option_id: &OptionId,
    ) -> Result<Schema, EditError> {
        let field = schema
            .field(field_id)
            .ok_or_else(|| EditError::FieldNotFound(field_id.clone()))?;
        self.ensure_options_supported(field)?;
        self.with_field(schema, field_id, |_, field| {
            field.options.retain(|option| option.id != *option_id);
        })
    }

    /// Renames the option matching `option_id`.
    ///
    /// An absent option identifier is a successful no-op.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::FieldNotFound`] when no field matches, or
    /// [`EditError::OptionsUnsupported`] when the field's type has no option
    /// list.
    pub fn rename_option(
        &self,
        schema: &Schema,
        field_id: &FieldId,
        option_id: &OptionId,
        label: impl Into<String>,
    ) -> Result<Schema, EditError> {
        let field = schema
            .field(field_id)
            .ok_or_else(|| EditError::FieldNotFound(field_id.clone()))?;
        self.ensure_options_supported(field)?;
        let label = label.into();
        self.with_field(schema, field_id, |_, field| {
            if let Some(option) = field.options.iter_mut().find(|option| option.id == *option_id) {
                option.label = label;
            }
        })
    }

    /// Toggles the default-selected flag of the option matching `option_id`.
    ///
    /// An absent option identifier is a successful no-op.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::FieldNotFound`] when no field matches, or
    /// [`EditError::OptionsUnsupported`] when the field's type has no option
    /// list.
    pub fn set_option_default(
        &self,
        schema: &Schema,
        field_id: &FieldId,
        option_id: &OptionId,
        selected: bool,
    ) -> Result<Schema, EditError> {
        let field = schema
            .field(field_id)
            .ok_or_else(|| EditError::FieldNotFound(field_id.clone()))?;
        self.ensure_options_supported(field)?;
        self.with_field(schema, field_id, |_, field| {
            if let Some(option) = field.options.iter_mut().find(|option| option.id == *option_id) {
                option.selected_by_default = selected;
            }
        })
    }

    /// Mints a field identifier absent from `schema`.
    ///
    /// Tokens already embedded in the schema's ids (for example after
    /// reopening a persisted snapshot with a fresh editor) are skipped, so
    /// minted ids never collide with existing fields.
    fn mint_field_id(&mut self, schema: &Schema) -> FieldId {
        loop {
            let id = FieldId::new(format!("fld-{:06}", self.tokens.next_token()));
            if schema.field(&id).is_none() {
                return id;
            }
        }
    }

    /// Mints an option identifier absent from `field`, skipping embedded tokens.
    fn mint_option_id(&mut self, field: &FieldDefinition) -> OptionId {
        loop {
            let id = OptionId::new(format!("opt-{:06}", self.tokens.next_token()));
            if field.option(&id).is_none() {
                return id;
            }
        }
    }

    /// Rejects fields whose type has no option list.
    fn ensure_options_supported(&self, field: &FieldDefinition) -> Result<(), EditError> {
        if self.registry.capabilities(field.field_type).has_options {
            return Ok(());
        }
        Err(EditError::OptionsUnsupported {
            field_id: field.id.clone(),
            field_type: field.field_type,
        })
    }

    /// Clones the schema and applies `apply` to the field matching `field_id`.
    fn with_field(
        &self,
        schema: &Schema,
        field_id: &FieldId,
        apply: impl FnOnce(&FieldRegistry, &mut FieldDefinition),
    ) -> Result<Schema, EditError> {
        let mut next = schema.clone();
        let Some(field) = next.fields.iter_mut().find(|field| field.id == *field_id) else {
            return Err(EditError::FieldNotFound(field_id.clone()));
        };
        apply(&self.registry, field);
        Ok(next)
    }
}
