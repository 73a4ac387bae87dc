//! Update function for the form builder component.
//!
//! Elm-style: receives the current `FormBuilderComponent`, the `Context` and a
//! `Msg`, mutates the state and returns whether the view should re-render.
//!
//! Every edit goes through `FormEditor`, so a rejected edit leaves the form
//! untouched and only records the error for the card that caused it.

use uuid::Uuid;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::error::FormError;
use common::model::question::QuestionId;
use common::requests::FormStatus;

use crate::services::forms::{save_and_activate, save_draft};
use crate::tops_sheet::yw_material_top_sheet::{close_top_sheet, open_top_sheet};

use super::helpers::{compute_md5, set_window_dirty_flag, show_toast};
use super::messages::Msg;
use super::state::FormBuilderComponent;

/// Central update function for the component.
pub fn update(
    component: &mut FormBuilderComponent,
    ctx: &Context<FormBuilderComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SetName(name) => {
            component.editor.form.set_name(name);
            mark_dirty(component);
            true
        }
        Msg::SetDescription(description) => {
            component.editor.form.set_description(description);
            mark_dirty(component);
            true
        }
        Msg::AddQuestion(kind) => {
            component.editor.add_question(kind);
            component.field_error = None;
            mark_dirty(component);
            true
        }
        Msg::UpdateQuestion(id, patch) => {
            let result = component.editor.update_question(&id, &patch);
            record(component, &id, result)
        }
        Msg::UpdateNumeric(id, field, raw) => {
            let result = component.editor.update_numeric(&id, field, &raw);
            record(component, &id, result)
        }
        Msg::AddOption(id) => {
            let result = component.editor.form.add_option(&id).map(|_| ());
            record(component, &id, result)
        }
        Msg::UpdateOption(id, index, text) => {
            let result = component.editor.form.update_option(&id, index, text);
            record(component, &id, result)
        }
        Msg::RemoveOption(id, index) => {
            let result = component.editor.form.remove_option(&id, index).map(|_| ());
            record(component, &id, result)
        }
        Msg::ToggleExpanded(id) => {
            component.editor.toggle_expanded(&id);
            true
        }
        Msg::ToggleMenu(id) => {
            component.editor.state.toggle_menu(&id);
            true
        }
        Msg::EditQuestion(id) => {
            if let Err(err) = component.editor.edit_question(&id) {
                show_toast(&err.to_string());
            }
            true
        }
        Msg::DuplicateQuestion(id) => {
            let result = component.editor.duplicate_question(&id).map(|_| ());
            record(component, &id, result)
        }
        Msg::DeleteQuestion(id) => {
            match component.editor.delete_question(&id) {
                Ok(_) => {
                    if component.error_for(&id).is_some() {
                        component.field_error = None;
                    }
                    mark_dirty(component);
                }
                Err(err) => show_toast(&err.to_string()),
            }
            true
        }
        Msg::MoveQuestion { from, to } => {
            component.editor.state.close_menu();
            match component.editor.move_question(from, to) {
                Ok(()) => mark_dirty(component),
                Err(err) => show_toast(&err.to_string()),
            }
            true
        }
        Msg::OpenPreview => {
            component.editor.state.close_menu();
            component.preview_open = true;
            open_top_sheet(component.preview_dialog_ref.clone());
            true
        }
        Msg::ClosePreview => {
            component.preview_open = false;
            close_top_sheet(component.preview_dialog_ref.clone());
            true
        }
        Msg::SetViewport(viewport) => {
            component.viewport = viewport;
            true
        }
        Msg::SaveDraft => start_save(component, ctx, FormStatus::Draft),
        Msg::SaveAndActivate => start_save(component, ctx, FormStatus::Active),
        Msg::SaveSucceeded(status, snapshot_md5) => {
            component.mark_saved(snapshot_md5);
            mark_dirty(component);
            match status {
                FormStatus::Draft => show_toast("Borrador guardado."),
                FormStatus::Active => {
                    show_toast("Formulario guardado y activado.");
                    if let Some(on_back) = &ctx.props().on_back {
                        on_back.emit(());
                    }
                }
            }
            true
        }
        Msg::SaveFailed(message) => {
            component.saving = false;
            show_toast(&message);
            true
        }
        Msg::SetForm(form) => {
            component.editor.load(form);
            component.field_error = None;
            component.original_md5 = Some(compute_md5(&component.editor.form));
            set_window_dirty_flag(false);
            true
        }
    }
}

/// Stores the outcome of an edit aimed at question `id`.
fn record(component: &mut FormBuilderComponent, id: &QuestionId, result: Result<(), FormError>) -> bool {
    match result {
        Ok(()) => {
            if component.error_for(id).is_some() {
                component.field_error = None;
            }
            mark_dirty(component);
        }
        Err(err) => {
            component.field_error = Some((id.clone(), err.to_string()));
            component.rejected_edits = component.rejected_edits.wrapping_add(1);
        }
    }
    true
}

fn mark_dirty(component: &FormBuilderComponent) {
    set_window_dirty_flag(component.is_dirty());
}

/// Validates and posts a snapshot of the form. The result comes back as
/// `SaveSucceeded` / `SaveFailed`.
fn start_save(
    component: &mut FormBuilderComponent,
    ctx: &Context<FormBuilderComponent>,
    status: FormStatus,
) -> bool {
    if component.saving {
        return false;
    }
    if let Err(err) = component.editor.form.validate() {
        show_toast(&format!("No se puede guardar: {}", err));
        return false;
    }
    if component.editor.form.id.is_empty() {
        component.editor.form.id = Uuid::new_v4().to_string();
    }
    component.saving = true;

    let form = component.editor.form.clone();
    let snapshot_md5 = compute_md5(&form);
    gloo_console::log!(format!(
        "Guardando formulario ({}): {}",
        status,
        serde_json::to_string(&form).unwrap_or_default()
    ));

    let link = ctx.link().clone();
    spawn_local(async move {
        let result = match status {
            FormStatus::Draft => save_draft(&form).await,
            FormStatus::Active => save_and_activate(&form).await,
        };
        match result {
            Ok(()) => link.send_message(Msg::SaveSucceeded(status, snapshot_md5)),
            Err(err) => link.send_message(Msg::SaveFailed(format!("Error al guardar: {}", err))),
        }
    });
    true
}
