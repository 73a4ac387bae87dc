//! Component state for the form builder.
//!
//! The form itself and the expanded/menu selections live in a
//! `common::editor::FormEditor`; this struct adds what only the browser needs
//! (DOM refs, preview viewport, save bookkeeping).

use yew::prelude::*;

use common::editor::FormEditor;
use common::model::form::FormDefinition;
use common::model::question::QuestionId;
use common::preview::Viewport;

use super::helpers::compute_md5;

/// Main state container for the `FormBuilderComponent`.
///
/// Fields are `pub` because they are accessed by `view` and `update` modules.
pub struct FormBuilderComponent {
    /// Form being edited plus the expanded question and open menu.
    pub editor: FormEditor,

    /// Width preset of the preview dialog.
    pub viewport: Viewport,

    /// Reference to the preview top-sheet container node.
    pub preview_dialog_ref: NodeRef,

    /// Whether the preview content is mounted. The sheet itself animates via CSS.
    pub preview_open: bool,

    /// A save request is in flight; save buttons are disabled meanwhile.
    pub saving: bool,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,

    /// MD5 of the form JSON at last load or successful save.
    pub original_md5: Option<String>,

    /// Last rejected edit, shown under the offending question.
    pub field_error: Option<(QuestionId, String)>,

    /// Bumped on every rejected edit; keys the inputs that submit on `change`.
    pub rejected_edits: u32,
}

impl FormBuilderComponent {
    pub fn new() -> Self {
        Self {
            editor: FormEditor::new(FormDefinition::default()),
            viewport: Viewport::default(),
            preview_dialog_ref: Default::default(),
            preview_open: false,
            saving: false,
            loaded: false,
            original_md5: None,
            field_error: None,
            rejected_edits: 0,
        }
    }

    /// Records the checksum of the snapshot that reached the server. Edits
    /// made while the request was in flight stay dirty.
    pub fn mark_saved(&mut self, snapshot_md5: String) {
        self.saving = false;
        self.original_md5 = Some(snapshot_md5);
    }

    /// True when the form differs from what was last loaded or saved.
    pub fn is_dirty(&self) -> bool {
        match &self.original_md5 {
            Some(orig) => orig != &compute_md5(&self.editor.form),
            None => !self.editor.form.is_empty(),
        }
    }

    pub fn error_for(&self, id: &QuestionId) -> Option<&str> {
        self.field_error
            .as_ref()
            .filter(|(err_id, _)| err_id == id)
            .map(|(_, message)| message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::question::QuestionType;

    #[test]
    fn edits_during_a_save_stay_dirty() {
        let mut component = FormBuilderComponent::new();
        component.editor.add_question(QuestionType::ShortText);
        let snapshot = compute_md5(&component.editor.form);
        component.saving = true;

        component.editor.add_question(QuestionType::Date);
        component.mark_saved(snapshot);

        assert!(!component.saving);
        assert!(component.is_dirty());
    }

    #[test]
    fn saving_the_current_form_clears_the_dirty_state() {
        let mut component = FormBuilderComponent::new();
        component.editor.add_question(QuestionType::Signature);
        assert!(component.is_dirty());

        let snapshot = compute_md5(&component.editor.form);
        component.mark_saved(snapshot);
        assert!(!component.is_dirty());
    }
}
