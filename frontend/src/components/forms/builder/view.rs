//! View rendering for the form builder.
//!
//! Layout: a top bar (form name, description, preview and save actions), the
//! question canvas on the left and the palette on the right. The preview lives
//! in a top sheet that is always mounted and slides in on demand.
//!
//! All user-facing text is in Spanish.

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use common::model::question::QuestionType;

use crate::components::forms::palette::PaletteComponent;

use super::dialogs::preview::preview_dialog;
use super::messages::Msg;
use super::question_card::question_card;
use super::state::FormBuilderComponent;

pub fn view(component: &FormBuilderComponent, ctx: &Context<FormBuilderComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="form-builder-root" style="display:flex;flex-direction:column;min-height:100vh;background:#f5f5f5;">
            { build_top_bar(component, ctx) }
            <div style="display:flex;gap:24px;padding:24px;align-items:flex-start;">
                <div style="flex:1;max-width:760px;margin:0 auto;">
                    { build_header_card(component, link) }
                    { build_canvas(component, link) }
                </div>
                <aside style="width:300px;position:sticky;top:24px;">
                    <PaletteComponent
                        on_select={link.callback(|kind: QuestionType| Msg::AddQuestion(kind))}
                    />
                </aside>
            </div>
            { preview_dialog(component, link) }
        </div>
    }
}

fn build_top_bar(component: &FormBuilderComponent, ctx: &Context<FormBuilderComponent>) -> Html {
    let link = ctx.link();
    let back = ctx.props().on_back.clone().map(|on_back| {
        icon_button("arrow_back", "Volver", Callback::from(move |_| on_back.emit(())), false)
    });

    html! {
        <div class="icon-toolbar" style="display:flex;align-items:center;gap:8px;padding:8px 24px;background:#fff;border-bottom:1px solid #e0e0e0;">
            { for back }
            <span style="font-weight:600;font-size:1.1rem;">{ component.editor.form.name.clone() }</span>
            {
                if component.is_dirty() {
                    html! {
                        <span
                            title="Cambios sin guardar"
                            style="width:8px;height:8px;background:#e53935;border-radius:50%;display:inline-block;"
                        />
                    }
                } else {
                    html! {}
                }
            }
            <span style="flex:1;" />
            { icon_button("visibility", "Vista previa", link.callback(|_| Msg::OpenPreview), false) }
            { icon_button("save", "Guardar borrador", link.callback(|_| Msg::SaveDraft), component.saving) }
            <button
                class="primary-btn"
                disabled={component.saving}
                onclick={link.callback(|_| Msg::SaveAndActivate)}
                style="padding:0.5rem 1rem;background:#1976d2;color:#fff;border:none;border-radius:4px;cursor:pointer;"
            >
                { if component.saving { "Guardando..." } else { "Guardar y activar" } }
            </button>
        </div>
    }
}

fn build_header_card(component: &FormBuilderComponent, link: &Scope<FormBuilderComponent>) -> Html {
    let form = &component.editor.form;
    html! {
        <div class="card" style="background:#fff;border-radius:8px;padding:16px;margin-bottom:16px;border-top:6px solid #1976d2;">
            <input
                class="form-name"
                value={form.name.clone()}
                placeholder="Nombre del formulario"
                style="width:100%;font-size:1.5rem;border:none;outline:none;"
                oninput={link.callback(|e: InputEvent| {
                    Msg::SetName(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
            <textarea
                class="form-description"
                value={form.description.clone()}
                placeholder="Descripción del formulario"
                rows="2"
                style="width:100%;margin-top:8px;border:none;outline:none;resize:vertical;"
                oninput={link.callback(|e: InputEvent| {
                    Msg::SetDescription(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                })}
            />
        </div>
    }
}

fn build_canvas(component: &FormBuilderComponent, link: &Scope<FormBuilderComponent>) -> Html {
    let questions = &component.editor.form.questions;
    if questions.is_empty() {
        return html! {
            <div class="empty-canvas" style="background:#fff;border:2px dashed #bdbdbd;border-radius:8px;padding:48px;text-align:center;color:#757575;">
                <span class="material-icons" style="font-size:48px;">{"post_add"}</span>
                <p>{"Tu formulario está vacío."}</p>
                <p>{"Elige un tipo de pregunta en la paleta para empezar."}</p>
            </div>
        };
    }

    let total = questions.len();
    html! {
        <div class="question-list" style="display:flex;flex-direction:column;gap:12px;">
            {
                for questions.iter().enumerate().map(|(index, question)| {
                    question_card(component, link, question, index, total)
                })
            }
        </div>
    }
}

/// Toolbar button with a material icon and a tooltip.
pub fn icon_button(icon: &str, title: &str, onclick: Callback<MouseEvent>, disabled: bool) -> Html {
    html! {
        <button class="icon-btn" title={title.to_string()} {onclick} {disabled}
            style="background:none;border:none;cursor:pointer;padding:6px;border-radius:4px;">
            <span class="material-icons">{ icon.to_string() }</span>
        </button>
    }
}
