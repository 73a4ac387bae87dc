use crate::config::Config;
use crate::services::forms::repository;
use actix_web::{web, HttpResponse, Responder};
use log::error;

/// HTTP handler for `GET /api/forms`: summaries of every stored form.
pub async fn process(config: web::Data<Config>) -> impl Responder {
    let result = repository::open(&config.db_path).and_then(|conn| repository::list_forms(&conn));
    match result {
        Ok(forms) => HttpResponse::Ok().json(forms),
        Err(e) => {
            error!("Could not list forms: {}", e);
            HttpResponse::ServiceUnavailable().body(format!("Error al listar formularios: {}", e))
        }
    }
}
