use crate::config::Config;
use crate::services::forms::repository::{self, RepositoryError};
use actix_web::{web, HttpResponse, Responder};
use common::requests::SaveFormRequest;
use log::{error, info, warn};

/// HTTP handler for `POST /api/forms/save`.
///
/// - `200 OK` once the form is stored.
/// - `400 Bad Request` when the form has no id or fails validation.
/// - `503 Service Unavailable` when the database cannot be written.
pub async fn process(payload: web::Json<SaveFormRequest>, config: web::Data<Config>) -> impl Responder {
    let request = payload.into_inner();
    match save_form(&config, &request) {
        Ok(()) => {
            info!(
                "Form {} saved as {} ({} questions)",
                request.form.id,
                request.status,
                request.form.len()
            );
            HttpResponse::Ok().body("Formulario guardado correctamente")
        }
        Err(e @ (RepositoryError::MissingId | RepositoryError::Invalid(_))) => {
            warn!("Rejected form {}: {}", request.form.id, e);
            HttpResponse::BadRequest().body(format!("Error al guardar formulario: {}", e))
        }
        Err(e) => {
            error!("Could not save form {}: {}", request.form.id, e);
            HttpResponse::ServiceUnavailable().body(format!("Error al guardar formulario: {}", e))
        }
    }
}

fn save_form(config: &Config, request: &SaveFormRequest) -> Result<(), RepositoryError> {
    let conn = repository::open(&config.db_path)?;
    repository::save_form(&conn, &request.form, request.status)
}
