use crate::config::Config;
use crate::services::forms::repository::{self, RepositoryError};
use actix_web::{web, HttpResponse, Responder};
use common::model::form::FormDefinition;
use log::error;

/// HTTP handler for `GET /api/forms/{form_id}`.
///
/// Returns the stored `FormDefinition` as JSON, `404` for unknown ids and
/// `503` on database errors.
pub async fn process(form_id: web::Path<String>, config: web::Data<Config>) -> impl Responder {
    match get_form(&config, &form_id) {
        Ok(form) => HttpResponse::Ok().json(form),
        Err(RepositoryError::NotFound(id)) => {
            HttpResponse::NotFound().body(format!("Formulario no encontrado: {}", id))
        }
        Err(e) => {
            error!("Could not load form {}: {}", form_id, e);
            HttpResponse::ServiceUnavailable().body(format!("Error al obtener formulario: {}", e))
        }
    }
}

fn get_form(config: &Config, form_id: &str) -> Result<FormDefinition, RepositoryError> {
    let conn = repository::open(&config.db_path)?;
    repository::find_form(&conn, form_id)
}
