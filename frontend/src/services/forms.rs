//! Client for the form endpoints served by the backend (`/api/forms`).
//!
//! This is the builder's only I/O boundary: `save_draft` and
//! `save_and_activate` hand a snapshot of the form to the server, and
//! `load_form` fetches one back when the builder is opened on an existing form.

use common::error::SaveError;
use common::model::form::FormDefinition;
use common::requests::{FormStatus, SaveFormRequest};
use gloo_net::http::Request;

const API_PATH: &str = "/api/forms";

pub async fn save_draft(form: &FormDefinition) -> Result<(), SaveError> {
    save(form, FormStatus::Draft).await
}

pub async fn save_and_activate(form: &FormDefinition) -> Result<(), SaveError> {
    save(form, FormStatus::Active).await
}

/// Validates locally, then posts the form. Invalid forms never leave the browser.
async fn save(form: &FormDefinition, status: FormStatus) -> Result<(), SaveError> {
    form.validate()?;

    let request = SaveFormRequest {
        form: form.clone(),
        status,
    };
    let response = Request::post(&format!("{}/save", API_PATH))
        .json(&request)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;

    if response.ok() {
        Ok(())
    } else {
        Err(SaveError::Rejected(response.text().await.unwrap_or_default()))
    }
}

/// Fetches a stored form. Failures reuse `SaveError` so callers handle one type.
pub async fn load_form(form_id: &str) -> Result<FormDefinition, SaveError> {
    let response = Request::get(&form_url(form_id)?)
        .send()
        .await
        .map_err(transport)?;

    if !response.ok() {
        return Err(SaveError::Rejected(response.text().await.unwrap_or_default()));
    }
    response.json::<FormDefinition>().await.map_err(transport)
}

/// Path of one stored form. Ids come from the query string, so anything
/// beyond the characters of generated ids is refused rather than encoded.
fn form_url(form_id: &str) -> Result<String, SaveError> {
    let valid = !form_id.is_empty()
        && form_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        return Err(SaveError::Rejected(format!(
            "id de formulario no válido: {}",
            form_id
        )));
    }
    Ok(format!("{}/{}", API_PATH, form_id))
}

fn transport(err: gloo_net::Error) -> SaveError {
    SaveError::Transport(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_map_to_the_form_path() {
        assert_eq!(
            form_url("6f1c2a9e-0b7d-4f4e-9a51-2d8c3e1f7a60").unwrap(),
            "/api/forms/6f1c2a9e-0b7d-4f4e-9a51-2d8c3e1f7a60"
        );
        assert_eq!(form_url("form_1").unwrap(), "/api/forms/form_1");
    }

    #[test]
    fn ids_that_would_change_the_path_are_refused() {
        for id in ["../save", "a/b", "a?b=1", "a#b", "a%2Fb", ""] {
            assert!(matches!(form_url(id), Err(SaveError::Rejected(_))), "{id}");
        }
    }
}
