use thiserror::Error;

use crate::model::question::QuestionId;

/// Recoverable failures raised by the form store and the editor helpers.
///
/// Every operation that returns one of these leaves the `FormDefinition`
/// exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// The mutation targeted a question id that is not part of the form.
    #[error("Pregunta no encontrada: {0}")]
    NotFound(QuestionId),

    /// A field value is outside its declared domain (e.g. `min_value > max_value`).
    #[error("Valor no válido: {0}")]
    Validation(String),

    /// An index-based operation (reorder, option editing) was out of range.
    #[error("Índice {index} fuera de rango (longitud {len})")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Failures reported by the external save collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SaveError {
    /// The form did not pass validation and was never sent.
    #[error("El formulario no es válido: {0}")]
    Invalid(#[from] FormError),

    /// The server answered with a non-success status. Contains its message.
    #[error("El servidor rechazó el formulario: {0}")]
    Rejected(String),

    /// The request could not be built or delivered.
    #[error("Error de red: {0}")]
    Transport(String),
}
