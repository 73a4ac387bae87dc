//! Typed question definitions for authorization forms.
//!
//! A `Question` carries the fields every question shares (prompt, help text,
//! required flag) and a `QuestionConfig` holding the variant-specific settings.
//! The variant is chosen once by the palette and never changes afterwards:
//! `QuestionPatch` can only touch fields, never the tag.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::FormError;

/// Accepted shape for file-upload MIME patterns: `type/subtype` or `type/*`.
static MIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z]+/(\*|[a-z0-9][a-z0-9.+-]*)$").expect("MIME pattern regex is valid")
});

/// Opaque identifier of a question, unique within a form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    /// Allocates a fresh random id. Ids are never recycled.
    pub fn generate() -> Self {
        Self(format!("q-{}", Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QuestionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// The closed set of question kinds offered by the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    ShortText,
    LongText,
    Dropdown,
    Checkboxes,
    Number,
    Date,
    YesNo,
    FileUpload,
    Signature,
}

impl QuestionType {
    pub const ALL: [QuestionType; 9] = [
        QuestionType::ShortText,
        QuestionType::LongText,
        QuestionType::Dropdown,
        QuestionType::Checkboxes,
        QuestionType::Number,
        QuestionType::Date,
        QuestionType::YesNo,
        QuestionType::FileUpload,
        QuestionType::Signature,
    ];

    /// Wire name, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::ShortText => "short_text",
            QuestionType::LongText => "long_text",
            QuestionType::Dropdown => "dropdown",
            QuestionType::Checkboxes => "checkboxes",
            QuestionType::Number => "number",
            QuestionType::Date => "date",
            QuestionType::YesNo => "yes_no",
            QuestionType::FileUpload => "file_upload",
            QuestionType::Signature => "signature",
        }
    }

    /// Human readable label shown on cards and in the palette.
    pub fn label(&self) -> &'static str {
        match self {
            QuestionType::ShortText => "Texto corto",
            QuestionType::LongText => "Texto largo",
            QuestionType::Dropdown => "Lista desplegable",
            QuestionType::Checkboxes => "Casillas",
            QuestionType::Number => "Número",
            QuestionType::Date => "Fecha",
            QuestionType::YesNo => "Sí/No",
            QuestionType::FileUpload => "Subir archivo",
            QuestionType::Signature => "Firma",
        }
    }

    /// Prompt given to freshly created questions.
    pub fn default_text(&self) -> &'static str {
        match self {
            QuestionType::ShortText | QuestionType::LongText => "Escribe tu pregunta",
            QuestionType::Dropdown => "Selecciona una opción",
            QuestionType::Checkboxes => "Selecciona todas las que apliquen",
            QuestionType::Number => "Introduce un número",
            QuestionType::Date => "Selecciona una fecha",
            QuestionType::YesNo => "Pregunta de sí o no",
            QuestionType::FileUpload => "Sube un archivo",
            QuestionType::Signature => "Firma",
        }
    }

    pub fn has_options(&self) -> bool {
        matches!(self, QuestionType::Dropdown | QuestionType::Checkboxes)
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextConfig {
    #[serde(default)]
    pub placeholder: String,
    #[serde(default)]
    pub max_length: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownConfig {
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub allow_other: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckboxesConfig {
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub min_selections: u32,
    #[serde(default)]
    pub max_selections: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberConfig {
    #[serde(default)]
    pub placeholder: String,
    #[serde(default)]
    pub min_value: Option<i64>,
    #[serde(default)]
    pub max_value: Option<i64>,
    #[serde(default)]
    pub unit_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateConfig {
    #[serde(default)]
    pub placeholder: String,
    pub allow_past_dates: bool,
    pub allow_future_dates: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YesNoConfig {
    /// Answer preselected for the respondent, if any.
    #[serde(default)]
    pub default_answer: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileUploadConfig {
    pub allowed_file_types: BTreeSet<String>,
    /// Per-file limit in megabytes.
    pub max_file_size_mb: u32,
    pub max_files: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureConfig {
    /// Text shown above the signature pad.
    #[serde(default)]
    pub legal_text: String,
}

/// Variant-specific configuration. The tag doubles as the question type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionConfig {
    ShortText(TextConfig),
    LongText(TextConfig),
    Dropdown(DropdownConfig),
    Checkboxes(CheckboxesConfig),
    Number(NumberConfig),
    Date(DateConfig),
    YesNo(YesNoConfig),
    FileUpload(FileUploadConfig),
    Signature(SignatureConfig),
}

impl QuestionConfig {
    pub fn kind(&self) -> QuestionType {
        match self {
            QuestionConfig::ShortText(_) => QuestionType::ShortText,
            QuestionConfig::LongText(_) => QuestionType::LongText,
            QuestionConfig::Dropdown(_) => QuestionType::Dropdown,
            QuestionConfig::Checkboxes(_) => QuestionType::Checkboxes,
            QuestionConfig::Number(_) => QuestionType::Number,
            QuestionConfig::Date(_) => QuestionType::Date,
            QuestionConfig::YesNo(_) => QuestionType::YesNo,
            QuestionConfig::FileUpload(_) => QuestionType::FileUpload,
            QuestionConfig::Signature(_) => QuestionType::Signature,
        }
    }

    pub fn options(&self) -> Option<&[String]> {
        match self {
            QuestionConfig::Dropdown(c) => Some(&c.options),
            QuestionConfig::Checkboxes(c) => Some(&c.options),
            _ => None,
        }
    }

    pub fn options_mut(&mut self) -> Option<&mut Vec<String>> {
        match self {
            QuestionConfig::Dropdown(c) => Some(&mut c.options),
            QuestionConfig::Checkboxes(c) => Some(&mut c.options),
            _ => None,
        }
    }
}

/// One typed prompt inside a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    #[serde(default)]
    pub required: bool,
    pub config: QuestionConfig,
}

impl Question {
    /// Builds a question with a fresh id around an existing configuration.
    pub fn with_config(text: impl Into<String>, config: QuestionConfig) -> Self {
        Self {
            id: QuestionId::generate(),
            text: text.into(),
            help_text: None,
            required: false,
            config,
        }
    }

    pub fn kind(&self) -> QuestionType {
        self.config.kind()
    }

    pub fn options(&self) -> Option<&[String]> {
        self.config.options()
    }

    /// Checks every field against its declared domain.
    pub fn validate(&self) -> Result<(), FormError> {
        match &self.config {
            QuestionConfig::ShortText(c) | QuestionConfig::LongText(c) => {
                if c.max_length == Some(0) {
                    return Err(FormError::Validation(
                        "la longitud máxima debe ser mayor que 0".to_string(),
                    ));
                }
            }
            QuestionConfig::Checkboxes(c) => {
                if let Some(max) = c.max_selections {
                    if max < c.min_selections {
                        return Err(FormError::Validation(format!(
                            "el máximo de selecciones ({}) es menor que el mínimo ({})",
                            max, c.min_selections
                        )));
                    }
                }
            }
            QuestionConfig::Number(c) => {
                if let (Some(min), Some(max)) = (c.min_value, c.max_value) {
                    if min > max {
                        return Err(FormError::Validation(format!(
                            "el valor mínimo ({}) es mayor que el máximo ({})",
                            min, max
                        )));
                    }
                }
            }
            QuestionConfig::FileUpload(c) => {
                if c.max_file_size_mb == 0 {
                    return Err(FormError::Validation(
                        "el tamaño máximo de archivo debe ser mayor que 0".to_string(),
                    ));
                }
                if c.max_files == 0 {
                    return Err(FormError::Validation(
                        "el número máximo de archivos debe ser mayor que 0".to_string(),
                    ));
                }
                if let Some(bad) = c.allowed_file_types.iter().find(|t| !MIME_PATTERN.is_match(t)) {
                    return Err(FormError::Validation(format!(
                        "tipo de archivo no válido: {}",
                        bad
                    )));
                }
            }
            QuestionConfig::Dropdown(_)
            | QuestionConfig::Date(_)
            | QuestionConfig::YesNo(_)
            | QuestionConfig::Signature(_) => {}
        }
        Ok(())
    }

    /// Data for the collapsed card. `index` is the 0-based position in the form.
    pub fn summary(&self, index: usize) -> QuestionSummary {
        QuestionSummary {
            position: index + 1,
            text: self.text.clone(),
            type_label: self.kind().label(),
            option_count: self.kind().has_options().then(|| {
                match self.options().map_or(0, <[String]>::len) {
                    1 => "1 opción".to_string(),
                    n => format!("{} opciones", n),
                }
            }),
            required: self.required,
        }
    }
}

/// What the collapsed row of a question card shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSummary {
    /// 1-based position in the form.
    pub position: usize,
    pub text: String,
    pub type_label: &'static str,
    pub option_count: Option<String>,
    pub required: bool,
}

/// Partial update of a question.
///
/// `None` leaves a field untouched. Nullable settings use `Option<Option<_>>`
/// so `Some(None)` clears them. Fields that do not exist on the question's
/// variant are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionPatch {
    pub text: Option<String>,
    pub help_text: Option<Option<String>>,
    pub required: Option<bool>,
    pub placeholder: Option<String>,
    pub max_length: Option<Option<u32>>,
    pub options: Option<Vec<String>>,
    pub allow_other: Option<bool>,
    pub min_selections: Option<u32>,
    pub max_selections: Option<Option<u32>>,
    pub min_value: Option<Option<i64>>,
    pub max_value: Option<Option<i64>>,
    pub unit_label: Option<String>,
    pub allow_past_dates: Option<bool>,
    pub allow_future_dates: Option<bool>,
    pub default_answer: Option<Option<bool>>,
    pub allowed_file_types: Option<BTreeSet<String>>,
    pub max_file_size_mb: Option<u32>,
    pub max_files: Option<u32>,
    pub legal_text: Option<String>,
}

impl QuestionPatch {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn required(required: bool) -> Self {
        Self {
            required: Some(required),
            ..Self::default()
        }
    }

    pub fn options(options: Vec<String>) -> Self {
        Self {
            options: Some(options),
            ..Self::default()
        }
    }

    /// Merges the patch into `question` in place. Does not validate.
    pub fn apply_to(&self, question: &mut Question) {
        if let Some(text) = &self.text {
            question.text = text.clone();
        }
        if let Some(help_text) = &self.help_text {
            question.help_text = help_text.clone().filter(|h| !h.trim().is_empty());
        }
        if let Some(required) = self.required {
            question.required = required;
        }

        match &mut question.config {
            QuestionConfig::ShortText(c) | QuestionConfig::LongText(c) => {
                set(&mut c.placeholder, &self.placeholder);
                set(&mut c.max_length, &self.max_length);
            }
            QuestionConfig::Dropdown(c) => {
                set(&mut c.options, &self.options);
                set(&mut c.allow_other, &self.allow_other);
            }
            QuestionConfig::Checkboxes(c) => {
                set(&mut c.options, &self.options);
                set(&mut c.min_selections, &self.min_selections);
                set(&mut c.max_selections, &self.max_selections);
            }
            QuestionConfig::Number(c) => {
                set(&mut c.placeholder, &self.placeholder);
                set(&mut c.min_value, &self.min_value);
                set(&mut c.max_value, &self.max_value);
                set(&mut c.unit_label, &self.unit_label);
            }
            QuestionConfig::Date(c) => {
                set(&mut c.placeholder, &self.placeholder);
                set(&mut c.allow_past_dates, &self.allow_past_dates);
                set(&mut c.allow_future_dates, &self.allow_future_dates);
            }
            QuestionConfig::YesNo(c) => {
                set(&mut c.default_answer, &self.default_answer);
            }
            QuestionConfig::FileUpload(c) => {
                set(&mut c.allowed_file_types, &self.allowed_file_types);
                set(&mut c.max_file_size_mb, &self.max_file_size_mb);
                set(&mut c.max_files, &self.max_files);
            }
            QuestionConfig::Signature(c) => {
                set(&mut c.legal_text, &self.legal_text);
            }
        }
    }
}

fn set<T: Clone>(target: &mut T, value: &Option<T>) {
    if let Some(value) = value {
        *target = value.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::palette::new_question;

    #[test]
    fn serialized_config_is_tagged_with_the_question_type() {
        let question = new_question(QuestionType::YesNo);
        let json = serde_json::to_value(&question).unwrap();
        assert_eq!(json["config"]["type"], "yes_no");
        assert!(json.get("help_text").is_none());
    }

    #[test]
    fn patch_fields_of_other_variants_are_ignored() {
        let mut question = new_question(QuestionType::Signature);
        let before = question.config.clone();
        let patch = QuestionPatch {
            max_files: Some(9),
            allow_other: Some(true),
            ..QuestionPatch::default()
        };
        patch.apply_to(&mut question);
        assert_eq!(question.config, before);
    }

    #[test]
    fn blank_help_text_is_stored_as_none() {
        let mut question = new_question(QuestionType::ShortText);
        let patch = QuestionPatch {
            help_text: Some(Some("   ".to_string())),
            ..QuestionPatch::default()
        };
        patch.apply_to(&mut question);
        assert_eq!(question.help_text, None);
    }

    #[test]
    fn number_bounds_must_be_ordered() {
        let mut question = new_question(QuestionType::Number);
        QuestionPatch {
            min_value: Some(Some(10)),
            max_value: Some(Some(2)),
            ..QuestionPatch::default()
        }
        .apply_to(&mut question);
        assert!(matches!(question.validate(), Err(FormError::Validation(_))));
    }

    #[test]
    fn file_types_must_look_like_mime_patterns() {
        let mut question = new_question(QuestionType::FileUpload);
        assert!(question.validate().is_ok());

        let mut types = BTreeSet::new();
        types.insert("image/*".to_string());
        types.insert("pdf".to_string());
        QuestionPatch {
            allowed_file_types: Some(types),
            ..QuestionPatch::default()
        }
        .apply_to(&mut question);
        assert_eq!(
            question.validate(),
            Err(FormError::Validation("tipo de archivo no válido: pdf".to_string()))
        );
    }

    #[test]
    fn summary_counts_options_only_for_choice_questions() {
        let dropdown = new_question(QuestionType::Dropdown);
        let summary = dropdown.summary(0);
        assert_eq!(summary.position, 1);
        assert_eq!(summary.type_label, "Lista desplegable");
        assert_eq!(summary.option_count.as_deref(), Some("3 opciones"));

        let date = new_question(QuestionType::Date);
        assert_eq!(date.summary(4).option_count, None);

        let mut emptied = new_question(QuestionType::Checkboxes);
        QuestionPatch::options(vec![]).apply_to(&mut emptied);
        assert_eq!(emptied.summary(0).option_count.as_deref(), Some("0 opciones"));
    }
}
