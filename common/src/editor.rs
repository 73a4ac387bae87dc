//! Editing session state that sits on top of the form store.
//!
//! `EditorState` is pure view state (which card is expanded, which contextual
//! menu is open). `FormEditor` pairs it with a `FormDefinition` and applies
//! the side effects the builder UI expects, so the Yew component only forwards
//! messages.

use crate::error::FormError;
use crate::model::form::FormDefinition;
use crate::model::question::{Question, QuestionId, QuestionPatch, QuestionType};

/// At most one expanded question and at most one open menu.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorState {
    expanded: Option<QuestionId>,
    open_menu: Option<QuestionId>,
}

impl EditorState {
    pub fn expanded(&self) -> Option<&QuestionId> {
        self.expanded.as_ref()
    }

    pub fn is_expanded(&self, id: &QuestionId) -> bool {
        self.expanded.as_ref() == Some(id)
    }

    /// Expanding a question implicitly collapses the previous one.
    pub fn expand(&mut self, id: QuestionId) {
        self.expanded = Some(id);
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
    }

    /// Collapses `id` if it is expanded, expands it otherwise.
    pub fn toggle_expanded(&mut self, id: &QuestionId) {
        if self.is_expanded(id) {
            self.collapse();
        } else {
            self.expand(id.clone());
        }
    }

    pub fn open_menu(&self) -> Option<&QuestionId> {
        self.open_menu.as_ref()
    }

    pub fn is_menu_open(&self, id: &QuestionId) -> bool {
        self.open_menu.as_ref() == Some(id)
    }

    pub fn toggle_menu(&mut self, id: &QuestionId) {
        if self.is_menu_open(id) {
            self.open_menu = None;
        } else {
            self.open_menu = Some(id.clone());
        }
    }

    pub fn close_menu(&mut self) {
        self.open_menu = None;
    }

    /// Drops every selection that points at `id`.
    pub fn forget(&mut self, id: &QuestionId) {
        if self.is_expanded(id) {
            self.expanded = None;
        }
        if self.is_menu_open(id) {
            self.open_menu = None;
        }
    }
}

/// A form plus the view state of the editor working on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormEditor {
    pub form: FormDefinition,
    pub state: EditorState,
}

impl FormEditor {
    pub fn new(form: FormDefinition) -> Self {
        Self {
            form,
            state: EditorState::default(),
        }
    }

    /// Replaces the edited form and resets the view state.
    pub fn load(&mut self, form: FormDefinition) {
        self.form = form;
        self.state = EditorState::default();
    }

    /// Adds a question and makes it the expanded one.
    pub fn add_question(&mut self, kind: QuestionType) -> &Question {
        let id = self.form.add_question(kind).id.clone();
        self.state.close_menu();
        self.state.expand(id);
        &self.form.questions[self.form.len() - 1]
    }

    pub fn update_question(&mut self, id: &QuestionId, patch: &QuestionPatch) -> Result<(), FormError> {
        self.form.update_question(id, patch)
    }

    /// Applies raw text typed into a numeric input.
    pub fn update_numeric(&mut self, id: &QuestionId, field: NumericField, raw: &str) -> Result<(), FormError> {
        let patch = field.patch(raw)?;
        self.form.update_question(id, &patch)
    }

    pub fn delete_question(&mut self, id: &QuestionId) -> Result<Question, FormError> {
        let removed = self.form.delete_question(id)?;
        self.state.forget(id);
        Ok(removed)
    }

    pub fn duplicate_question(&mut self, id: &QuestionId) -> Result<&Question, FormError> {
        self.state.close_menu();
        self.form.duplicate_question(id)
    }

    /// Menu "Edit" entry: expand and close the menu.
    pub fn edit_question(&mut self, id: &QuestionId) -> Result<(), FormError> {
        if self.form.question(id).is_none() {
            return Err(FormError::NotFound(id.clone()));
        }
        self.state.close_menu();
        self.state.expand(id.clone());
        Ok(())
    }

    pub fn toggle_expanded(&mut self, id: &QuestionId) {
        self.state.close_menu();
        self.state.toggle_expanded(id);
    }

    pub fn move_question(&mut self, from: usize, to: usize) -> Result<(), FormError> {
        self.form.reorder_questions(from, to)
    }
}

/// Numeric settings edited through free text inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    MaxLength,
    MinSelections,
    MaxSelections,
    MinValue,
    MaxValue,
    MaxFileSizeMb,
    MaxFiles,
}

impl NumericField {
    /// Turns raw input into a patch for this field.
    ///
    /// Blank input clears optional fields and is rejected for mandatory ones.
    /// Anything that does not parse is rejected instead of being coerced.
    pub fn patch(self, raw: &str) -> Result<QuestionPatch, FormError> {
        let raw = raw.trim();
        let mut patch = QuestionPatch::default();
        match self {
            NumericField::MaxLength => patch.max_length = Some(parse_optional(raw)?),
            NumericField::MaxSelections => patch.max_selections = Some(parse_optional(raw)?),
            NumericField::MinValue => patch.min_value = Some(parse_optional(raw)?),
            NumericField::MaxValue => patch.max_value = Some(parse_optional(raw)?),
            NumericField::MinSelections => patch.min_selections = Some(parse_required(raw)?),
            NumericField::MaxFileSizeMb => patch.max_file_size_mb = Some(parse_required(raw)?),
            NumericField::MaxFiles => patch.max_files = Some(parse_required(raw)?),
        }
        Ok(patch)
    }
}

fn parse_optional<T: std::str::FromStr>(raw: &str) -> Result<Option<T>, FormError> {
    if raw.is_empty() {
        return Ok(None);
    }
    parse_required(raw).map(Some)
}

fn parse_required<T: std::str::FromStr>(raw: &str) -> Result<T, FormError> {
    raw.parse::<T>()
        .map_err(|_| FormError::Validation(format!("\"{}\" no es un número válido", raw)))
}
