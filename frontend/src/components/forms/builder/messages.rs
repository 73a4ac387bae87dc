use common::editor::NumericField;
use common::model::form::FormDefinition;
use common::model::question::{QuestionId, QuestionPatch, QuestionType};
use common::preview::Viewport;
use common::requests::FormStatus;

#[derive(Clone)]
pub enum Msg {
    SetName(String),
    SetDescription(String),
    AddQuestion(QuestionType),
    UpdateQuestion(QuestionId, QuestionPatch),
    /// Raw text from a numeric input, parsed before it reaches the store.
    UpdateNumeric(QuestionId, NumericField, String),
    AddOption(QuestionId),
    UpdateOption(QuestionId, usize, String),
    RemoveOption(QuestionId, usize),
    ToggleExpanded(QuestionId),
    ToggleMenu(QuestionId),
    EditQuestion(QuestionId),
    DuplicateQuestion(QuestionId),
    DeleteQuestion(QuestionId),
    MoveQuestion { from: usize, to: usize },
    OpenPreview,
    ClosePreview,
    SetViewport(Viewport),
    SaveDraft,
    SaveAndActivate,
    /// Carries the MD5 of the snapshot that was sent.
    SaveSucceeded(FormStatus, String),
    SaveFailed(String),
    SetForm(FormDefinition),
}
