//! Fixed catalog of creatable question types and their default settings.

use std::collections::BTreeSet;

use crate::model::question::{
    CheckboxesConfig, DateConfig, DropdownConfig, FileUploadConfig, NumberConfig, Question,
    QuestionConfig, QuestionType, SignatureConfig, TextConfig, YesNoConfig,
};

/// One row of the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub kind: QuestionType,
    pub label: &'static str,
    pub description: &'static str,
    /// Material icon name.
    pub icon: &'static str,
}

pub const PALETTE: [PaletteEntry; 9] = [
    PaletteEntry {
        kind: QuestionType::ShortText,
        label: "Texto corto",
        description: "Campo de texto de una línea",
        icon: "short_text",
    },
    PaletteEntry {
        kind: QuestionType::LongText,
        label: "Texto largo",
        description: "Área de texto de varias líneas",
        icon: "notes",
    },
    PaletteEntry {
        kind: QuestionType::Dropdown,
        label: "Lista desplegable",
        description: "Selección única entre opciones",
        icon: "arrow_drop_down_circle",
    },
    PaletteEntry {
        kind: QuestionType::Checkboxes,
        label: "Casillas",
        description: "Selección múltiple",
        icon: "check_box",
    },
    PaletteEntry {
        kind: QuestionType::Number,
        label: "Número",
        description: "Valor numérico con límites",
        icon: "tag",
    },
    PaletteEntry {
        kind: QuestionType::Date,
        label: "Fecha",
        description: "Selector de fecha",
        icon: "event",
    },
    PaletteEntry {
        kind: QuestionType::YesNo,
        label: "Sí/No",
        description: "Elección booleana",
        icon: "toggle_on",
    },
    PaletteEntry {
        kind: QuestionType::FileUpload,
        label: "Subir archivo",
        description: "Imágenes, PDF o documentos",
        icon: "upload_file",
    },
    PaletteEntry {
        kind: QuestionType::Signature,
        label: "Firma",
        description: "Captura de firma digital",
        icon: "draw",
    },
];

/// Hints listed under the palette.
pub const TIPS: [&str; 4] = [
    "Usa las flechas para reordenar las preguntas",
    "Haz clic en una pregunta para editarla",
    "Marca como \"Obligatoria\" los campos imprescindibles",
    "Añade texto de ayuda para guiar al cliente",
];

pub const DEFAULT_OPTION_COUNT: usize = 3;

pub fn entry(kind: QuestionType) -> &'static PaletteEntry {
    // PALETTE lists every variant in `QuestionType::ALL` order.
    &PALETTE[QuestionType::ALL
        .iter()
        .position(|k| *k == kind)
        .unwrap_or_default()]
}

/// Label given to the option appended at 0-based `index`.
pub fn option_label(index: usize) -> String {
    format!("Opción {}", index + 1)
}

pub fn default_config(kind: QuestionType) -> QuestionConfig {
    let default_options = || (0..DEFAULT_OPTION_COUNT).map(option_label).collect::<Vec<_>>();

    match kind {
        QuestionType::ShortText => QuestionConfig::ShortText(TextConfig {
            placeholder: String::new(),
            max_length: Some(255),
        }),
        QuestionType::LongText => QuestionConfig::LongText(TextConfig {
            placeholder: String::new(),
            max_length: Some(1000),
        }),
        QuestionType::Dropdown => QuestionConfig::Dropdown(DropdownConfig {
            options: default_options(),
            allow_other: false,
        }),
        QuestionType::Checkboxes => QuestionConfig::Checkboxes(CheckboxesConfig {
            options: default_options(),
            min_selections: 0,
            max_selections: None,
        }),
        QuestionType::Number => QuestionConfig::Number(NumberConfig {
            placeholder: String::new(),
            min_value: None,
            max_value: None,
            unit_label: String::new(),
        }),
        QuestionType::Date => QuestionConfig::Date(DateConfig {
            placeholder: String::new(),
            allow_past_dates: true,
            allow_future_dates: true,
        }),
        QuestionType::YesNo => QuestionConfig::YesNo(YesNoConfig::default()),
        QuestionType::FileUpload => QuestionConfig::FileUpload(FileUploadConfig {
            allowed_file_types: BTreeSet::from([
                "image/*".to_string(),
                "application/pdf".to_string(),
            ]),
            max_file_size_mb: 10,
            max_files: 5,
        }),
        QuestionType::Signature => QuestionConfig::Signature(SignatureConfig {
            legal_text: "Al firmar, acepto los términos y condiciones.".to_string(),
        }),
    }
}

/// A brand new question of `kind` with a fresh id and default settings.
pub fn new_question(kind: QuestionType) -> Question {
    Question::with_config(kind.default_text(), default_config(kind))
}
