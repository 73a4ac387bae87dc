//! # Authorization Form Service Module
//!
//! HTTP side of the form builder's save collaborator. The browser edits a
//! `FormDefinition` entirely in memory; these endpoints persist snapshots of it
//! and hand them back.
//!
//! ## Sub-modules:
//! - `save`: stores a form as draft or active.
//! - `get`: returns one stored form.
//! - `list`: returns summaries of every stored form.
//! - `repository`: SQLite access shared by the handlers.

mod get;
mod list;
pub mod repository;
mod save;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

/// The base path for all form-related API endpoints.
const API_PATH: &str = "/api/forms";

/// Configures and returns the Actix `Scope` for all form routes.
///
/// # Registered Routes:
///
/// *   **`POST /save`** (`save::process`): body is a `SaveFormRequest`
///     (`{ form, status }`). Rejects forms without id or with invalid questions.
///
/// *   **`GET /{form_id}`** (`get::process`): the stored `FormDefinition`.
///
/// *   **`GET ""`** (`list::process`): `Vec<FormSummary>`, newest first.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/save", post().to(save::process))
        .route("/{form_id}", get().to(get::process))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use common::model::form::FormDefinition;
    use common::model::question::{QuestionPatch, QuestionType};
    use common::requests::{FormStatus, FormSummary, SaveFormRequest};

    fn test_config(dir: &tempfile::TempDir) -> Config {
        Config {
            db_path: dir.path().join("forms.sqlite"),
            open_browser: false,
            ..Config::default()
        }
    }

    fn sample_form() -> FormDefinition {
        let mut form = FormDefinition::new("Acceso y seguridad");
        form.id = "form-1".to_string();
        let pets = form.add_question(QuestionType::YesNo).id.clone();
        form.update_question(&pets, &QuestionPatch::text("¿Hay mascotas en la propiedad?"))
            .unwrap();
        form.add_question(QuestionType::Dropdown);
        form
    }

    #[actix_web::test]
    async fn saved_form_can_be_fetched_and_listed() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_config(&dir)))
                .service(configure_routes()),
        )
        .await;

        let form = sample_form();
        let req = test::TestRequest::post()
            .uri("/api/forms/save")
            .set_json(SaveFormRequest {
                form: form.clone(),
                status: FormStatus::Active,
            })
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/api/forms/form-1").to_request();
        let fetched: FormDefinition = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched, form);

        let req = test::TestRequest::get().uri("/api/forms").to_request();
        let listed: Vec<FormSummary> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].question_count, 2);
        assert_eq!(listed[0].status, FormStatus::Active);
    }

    #[actix_web::test]
    async fn invalid_forms_get_bad_request() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_config(&dir)))
                .service(configure_routes()),
        )
        .await;

        let mut form = sample_form();
        form.id.clear();
        let req = test::TestRequest::post()
            .uri("/api/forms/save")
            .set_json(SaveFormRequest {
                form,
                status: FormStatus::Draft,
            })
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn unknown_form_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_config(&dir)))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/forms/missing").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
