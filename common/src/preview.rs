//! Read-only projection of a form into what a respondent would see.
//!
//! The preview never writes back into the store; the frontend renders every
//! control produced here as disabled.

use crate::model::form::FormDefinition;
use crate::model::question::{Question, QuestionConfig, QuestionId};

pub const TEXT_PLACEHOLDER: &str = "Escribe aquí...";
pub const SELECT_PROMPT: &str = "Selecciona una opción...";
pub const OTHER_OPTION: &str = "Otra";
pub const EMPTY_FORM_MESSAGE: &str = "Todavía no se han añadido preguntas.";

/// Display width presets of the preview dialog. Only affects layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Viewport {
    #[default]
    Desktop,
    Mobile,
}

impl Viewport {
    pub fn toggle(self) -> Self {
        match self {
            Viewport::Desktop => Viewport::Mobile,
            Viewport::Mobile => Viewport::Desktop,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Viewport::Desktop => "Escritorio",
            Viewport::Mobile => "Móvil",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Viewport::Desktop => "desktop_windows",
            Viewport::Mobile => "smartphone",
        }
    }

    /// CSS width of the simulated device frame.
    pub fn frame_style(&self) -> &'static str {
        match self {
            Viewport::Desktop => "width:100%;max-width:672px;",
            Viewport::Mobile => "width:375px;",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewControl {
    TextInput { placeholder: String },
    TextArea { placeholder: String, rows: u32 },
    Select { prompt: &'static str, options: Vec<String> },
    CheckboxList { options: Vec<String> },
    NumberInput { unit_label: Option<String> },
    DateInput,
    YesNo { group: String, default_answer: Option<bool> },
    FileDrop { max_files: u32, max_file_size_mb: u32 },
    SignaturePad { legal_text: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewItem {
    pub question_id: QuestionId,
    /// 1-based.
    pub number: usize,
    pub label: String,
    pub required: bool,
    pub help_text: Option<String>,
    pub control: PreviewControl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewForm {
    pub title: String,
    pub description: Option<String>,
    pub items: Vec<PreviewItem>,
}

impl PreviewForm {
    pub fn project(form: &FormDefinition) -> Self {
        Self {
            title: form.name.clone(),
            description: non_blank(&form.description),
            items: form
                .questions
                .iter()
                .enumerate()
                .map(|(index, question)| project_question(index, question))
                .collect(),
        }
    }

    /// The (disabled) submit button only appears once there is something to answer.
    pub fn shows_submit(&self) -> bool {
        !self.items.is_empty()
    }
}

fn project_question(index: usize, question: &Question) -> PreviewItem {
    let control = match &question.config {
        QuestionConfig::ShortText(c) => PreviewControl::TextInput {
            placeholder: placeholder_or_default(&c.placeholder),
        },
        QuestionConfig::LongText(c) => PreviewControl::TextArea {
            placeholder: placeholder_or_default(&c.placeholder),
            rows: 3,
        },
        QuestionConfig::Dropdown(c) => {
            let mut options = c.options.clone();
            if c.allow_other {
                options.push(OTHER_OPTION.to_string());
            }
            PreviewControl::Select {
                prompt: SELECT_PROMPT,
                options,
            }
        }
        QuestionConfig::Checkboxes(c) => PreviewControl::CheckboxList {
            options: c.options.clone(),
        },
        QuestionConfig::Number(c) => PreviewControl::NumberInput {
            unit_label: non_blank(&c.unit_label),
        },
        QuestionConfig::Date(_) => PreviewControl::DateInput,
        QuestionConfig::YesNo(c) => PreviewControl::YesNo {
            group: format!("preview-{}", question.id),
            default_answer: c.default_answer,
        },
        QuestionConfig::FileUpload(c) => PreviewControl::FileDrop {
            max_files: c.max_files,
            max_file_size_mb: c.max_file_size_mb,
        },
        QuestionConfig::Signature(c) => PreviewControl::SignaturePad {
            legal_text: non_blank(&c.legal_text),
        },
    };

    PreviewItem {
        question_id: question.id.clone(),
        number: index + 1,
        label: question.text.clone(),
        required: question.required,
        help_text: question.help_text.as_deref().and_then(non_blank),
        control,
    }
}

fn non_blank(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

fn placeholder_or_default(placeholder: &str) -> String {
    non_blank(placeholder).unwrap_or_else(|| TEXT_PLACEHOLDER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::question::{QuestionPatch, QuestionType};

    #[test]
    fn viewport_toggles_between_two_presets() {
        let viewport = Viewport::default();
        assert_eq!(viewport, Viewport::Desktop);
        assert_eq!(viewport.toggle(), Viewport::Mobile);
        assert_eq!(viewport.toggle().toggle(), Viewport::Desktop);
    }

    #[test]
    fn empty_form_has_no_submit_button() {
        let preview = PreviewForm::project(&FormDefinition::default());
        assert!(preview.items.is_empty());
        assert!(!preview.shows_submit());
        assert_eq!(preview.description, None);
    }

    #[test]
    fn items_follow_form_order_and_flags() {
        let mut form = FormDefinition::new("Acceso a la obra");
        form.set_description("Indica cómo entrar.");
        let gate = form.add_question(QuestionType::ShortText).id.clone();
        form.add_question(QuestionType::YesNo);
        form.update_question(
            &gate,
            &QuestionPatch {
                required: Some(true),
                text: Some("Código de la puerta".to_string()),
                ..QuestionPatch::default()
            },
        )
        .unwrap();

        let preview = PreviewForm::project(&form);
        assert_eq!(preview.title, "Acceso a la obra");
        assert_eq!(preview.description.as_deref(), Some("Indica cómo entrar."));
        assert!(preview.shows_submit());
        assert_eq!(preview.items[0].number, 1);
        assert_eq!(preview.items[0].label, "Código de la puerta");
        assert!(preview.items[0].required);
        assert_eq!(
            preview.items[0].control,
            PreviewControl::TextInput {
                placeholder: TEXT_PLACEHOLDER.to_string()
            }
        );
        assert!(!preview.items[1].required);
        assert!(matches!(preview.items[1].control, PreviewControl::YesNo { .. }));
    }

    #[test]
    fn dropdown_lists_other_when_allowed() {
        let mut form = FormDefinition::default();
        let id = form.add_question(QuestionType::Dropdown).id.clone();
        form.update_question(
            &id,
            &QuestionPatch {
                allow_other: Some(true),
                ..QuestionPatch::default()
            },
        )
        .unwrap();

        match &PreviewForm::project(&form).items[0].control {
            PreviewControl::Select { options, .. } => {
                assert_eq!(options.len(), 4);
                assert_eq!(options.last().map(String::as_str), Some(OTHER_OPTION));
            }
            other => panic!("unexpected control {:?}", other),
        }
    }

    #[test]
    fn projection_does_not_touch_the_form() {
        let mut form = FormDefinition::default();
        form.add_question(QuestionType::Signature);
        let before = form.clone();
        let preview = PreviewForm::project(&form);
        assert!(matches!(
            preview.items[0].control,
            PreviewControl::SignaturePad { legal_text: Some(_) }
        ));
        assert_eq!(form, before);
    }

    #[test]
    fn choice_question_without_options_still_renders() {
        let mut form = FormDefinition::default();
        let id = form.add_question(QuestionType::Checkboxes).id.clone();
        while form.question(&id).and_then(Question::options).is_some_and(|o| !o.is_empty()) {
            form.remove_option(&id, 0).unwrap();
        }
        form.validate().unwrap();

        let preview = PreviewForm::project(&form);
        assert_eq!(preview.items[0].control, PreviewControl::CheckboxList { options: vec![] });
        assert!(preview.shows_submit());
    }
}
