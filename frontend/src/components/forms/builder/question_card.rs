//! One card per question on the canvas.
//!
//! Collapsed, a card shows the `QuestionSummary` row with move controls and a
//! contextual menu (Editar, Duplicar, Eliminar). Expanded, it shows the editing
//! form for the question's variant. Text edits are sent on `input`; settings
//! that can be rejected (numbers, MIME types) are sent on `change` so a half
//! typed value is never validated.

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use common::editor::NumericField;
use common::model::palette;
use common::model::question::{Question, QuestionConfig, QuestionId, QuestionPatch};

use super::helpers::{format_file_types, parse_file_types};
use super::messages::Msg;
use super::state::FormBuilderComponent;
use super::view::icon_button;

type Link = Scope<FormBuilderComponent>;

pub fn question_card(
    component: &FormBuilderComponent,
    link: &Link,
    question: &Question,
    index: usize,
    total: usize,
) -> Html {
    let expanded = component.editor.state.is_expanded(&question.id);
    let border = if expanded { "2px solid #1976d2" } else { "1px solid #e0e0e0" };

    html! {
        <div
            key={question.id.as_str().to_string()}
            class={classes!("question-card", expanded.then_some("expanded"))}
            style={format!("background:#fff;border-radius:8px;border:{};", border)}
        >
            { collapsed_row(component, link, question, index, total) }
            {
                if expanded {
                    expanded_editor(component, link, question)
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn collapsed_row(
    component: &FormBuilderComponent,
    link: &Link,
    question: &Question,
    index: usize,
    total: usize,
) -> Html {
    let summary = question.summary(index);
    let id = question.id.clone();
    let menu_open = component.editor.state.is_menu_open(&id);

    let on_toggle = {
        let id = id.clone();
        link.callback(move |_: MouseEvent| Msg::ToggleExpanded(id.clone()))
    };
    let on_menu = {
        let id = id.clone();
        link.callback(move |e: MouseEvent| {
            e.stop_propagation();
            Msg::ToggleMenu(id.clone())
        })
    };
    let move_to = move |to: usize| {
        link.callback(move |e: MouseEvent| {
            e.stop_propagation();
            Msg::MoveQuestion { from: index, to }
        })
    };

    html! {
        <div class="question-row" style="display:flex;align-items:center;gap:12px;padding:12px 16px;cursor:pointer;position:relative;" onclick={on_toggle}>
            <span class="question-number" style="color:#757575;min-width:24px;">{ format!("{}.", summary.position) }</span>
            <span class="material-icons" style="color:#1976d2;">{ palette::entry(question.kind()).icon }</span>
            <div style="flex:1;">
                <div style="font-weight:500;">
                    { summary.text.clone() }
                    if summary.required {
                        <span title="Obligatoria" style="color:#d32f2f;margin-left:4px;">{"*"}</span>
                    }
                </div>
                <div style="font-size:0.8rem;color:#757575;">
                    { summary.type_label }
                    if let Some(count) = &summary.option_count {
                        { format!(" · {}", count) }
                    }
                </div>
            </div>
            { icon_button("arrow_upward", "Subir", move_to(index.saturating_sub(1)), index == 0) }
            { icon_button("arrow_downward", "Bajar", move_to(index + 1), index + 1 >= total) }
            { icon_button("more_vert", "Más acciones", on_menu, false) }
            if menu_open {
                { context_menu(link, &id) }
            }
        </div>
    }
}

fn context_menu(link: &Link, id: &QuestionId) -> Html {
    let item = |icon: &'static str, label: &'static str, msg: fn(QuestionId) -> Msg| {
        let id = id.clone();
        let onclick = link.callback(move |e: MouseEvent| {
            e.stop_propagation();
            msg(id.clone())
        });
        html! {
            <button class="menu-item" {onclick}
                style="display:flex;align-items:center;gap:8px;width:100%;padding:8px 16px;background:none;border:none;cursor:pointer;text-align:left;">
                <span class="material-icons" style="font-size:18px;">{ icon }</span>
                { label }
            </button>
        }
    };

    html! {
        <div class="context-menu" style="position:absolute;right:16px;top:48px;background:#fff;box-shadow:0 2px 8px rgba(0,0,0,0.2);border-radius:4px;z-index:10;min-width:160px;">
            { item("edit", "Editar", Msg::EditQuestion) }
            { item("content_copy", "Duplicar", Msg::DuplicateQuestion) }
            { item("delete", "Eliminar", Msg::DeleteQuestion) }
        </div>
    }
}

fn expanded_editor(component: &FormBuilderComponent, link: &Link, question: &Question) -> Html {
    let id = &question.id;
    let on_done = {
        let id = id.clone();
        link.callback(move |_: MouseEvent| Msg::ToggleExpanded(id.clone()))
    };

    html! {
        <div class="question-editor" style="display:flex;flex-direction:column;gap:12px;padding:0 16px 16px 52px;">
            { labelled("Pregunta", text_input(link, id, &question.text, "", |v| QuestionPatch::text(v))) }
            {
                labelled("Texto de ayuda", text_input(
                    link,
                    id,
                    question.help_text.as_deref().unwrap_or_default(),
                    "Opcional",
                    |v| QuestionPatch { help_text: Some(Some(v)), ..QuestionPatch::default() },
                ))
            }
            { config_editor(link, question, component.rejected_edits) }
            if let Some(message) = component.error_for(id) {
                <div class="field-error" style="color:#d32f2f;font-size:0.85rem;">{ message }</div>
            }
            <div style="display:flex;align-items:center;justify-content:space-between;border-top:1px solid #eee;padding-top:12px;">
                { checkbox(link, id, "Obligatoria", question.required, QuestionPatch::required) }
                <button class="primary-btn" onclick={on_done}
                    style="padding:0.4rem 1rem;background:#1976d2;color:#fff;border:none;border-radius:4px;cursor:pointer;">
                    {"Listo"}
                </button>
            </div>
        </div>
    }
}

/// `revision` is folded into the keys of inputs sent on `change`, so a
/// rejected value is replaced by the stored one on the next render.
fn config_editor(link: &Link, question: &Question, revision: u32) -> Html {
    let id = &question.id;
    match &question.config {
        QuestionConfig::ShortText(c) | QuestionConfig::LongText(c) => html! {
            <>
                { labelled("Texto de ejemplo", text_input(link, id, &c.placeholder, "", placeholder_patch)) }
                { labelled("Longitud máxima", numeric_input(link, revision, id, NumericField::MaxLength, c.max_length)) }
            </>
        },
        QuestionConfig::Dropdown(c) => html! {
            <>
                { option_list(link, id, &c.options) }
                {
                    checkbox(link, id, "Permitir opción \"Otra\"", c.allow_other, |v| QuestionPatch {
                        allow_other: Some(v),
                        ..QuestionPatch::default()
                    })
                }
            </>
        },
        QuestionConfig::Checkboxes(c) => html! {
            <>
                { option_list(link, id, &c.options) }
                <div style="display:flex;gap:12px;">
                    { labelled("Mínimo de selecciones", numeric_input(link, revision, id, NumericField::MinSelections, Some(c.min_selections))) }
                    { labelled("Máximo de selecciones", numeric_input(link, revision, id, NumericField::MaxSelections, c.max_selections)) }
                </div>
            </>
        },
        QuestionConfig::Number(c) => html! {
            <>
                { labelled("Texto de ejemplo", text_input(link, id, &c.placeholder, "", placeholder_patch)) }
                <div style="display:flex;gap:12px;">
                    { labelled("Valor mínimo", numeric_input(link, revision, id, NumericField::MinValue, c.min_value)) }
                    { labelled("Valor máximo", numeric_input(link, revision, id, NumericField::MaxValue, c.max_value)) }
                </div>
                {
                    labelled("Unidad", text_input(link, id, &c.unit_label, "p. ej. m²", |v| QuestionPatch {
                        unit_label: Some(v),
                        ..QuestionPatch::default()
                    }))
                }
            </>
        },
        QuestionConfig::Date(c) => html! {
            <>
                { labelled("Texto de ejemplo", text_input(link, id, &c.placeholder, "", placeholder_patch)) }
                {
                    checkbox(link, id, "Permitir fechas pasadas", c.allow_past_dates, |v| QuestionPatch {
                        allow_past_dates: Some(v),
                        ..QuestionPatch::default()
                    })
                }
                {
                    checkbox(link, id, "Permitir fechas futuras", c.allow_future_dates, |v| QuestionPatch {
                        allow_future_dates: Some(v),
                        ..QuestionPatch::default()
                    })
                }
            </>
        },
        QuestionConfig::YesNo(c) => {
            let choice = |label: &'static str, answer: Option<bool>| {
                let id = id.clone();
                let selected = c.default_answer == answer;
                let onclick = link.callback(move |_: MouseEvent| {
                    Msg::UpdateQuestion(
                        id.clone(),
                        QuestionPatch {
                            default_answer: Some(answer),
                            ..QuestionPatch::default()
                        },
                    )
                });
                let style = if selected {
                    "padding:0.3rem 0.8rem;border:1px solid #1976d2;background:#e3f2fd;border-radius:4px;cursor:pointer;"
                } else {
                    "padding:0.3rem 0.8rem;border:1px solid #ccc;background:#fff;border-radius:4px;cursor:pointer;"
                };
                html! { <button {onclick} {style}>{ label }</button> }
            };
            labelled(
                "Respuesta por defecto",
                html! {
                    <div style="display:flex;gap:8px;">
                        { choice("Ninguna", None) }
                        { choice("Sí", Some(true)) }
                        { choice("No", Some(false)) }
                    </div>
                },
            )
        }
        QuestionConfig::FileUpload(c) => {
            let on_types = {
                let id = id.clone();
                link.callback(move |e: Event| {
                    let raw = e.target_unchecked_into::<HtmlInputElement>().value();
                    Msg::UpdateQuestion(
                        id.clone(),
                        QuestionPatch {
                            allowed_file_types: Some(parse_file_types(&raw)),
                            ..QuestionPatch::default()
                        },
                    )
                })
            };
            html! {
                <>
                    {
                        labelled("Tipos de archivo permitidos", html! {
                            <input
                                key={format!("file-types-{}", revision)}
                                value={format_file_types(&c.allowed_file_types)}
                                placeholder="image/*, application/pdf"
                                onchange={on_types}
                                style="width:100%;padding:6px;"
                            />
                        })
                    }
                    <div style="display:flex;gap:12px;">
                        { labelled("Tamaño máximo (MB)", numeric_input(link, revision, id, NumericField::MaxFileSizeMb, Some(c.max_file_size_mb))) }
                        { labelled("Máximo de archivos", numeric_input(link, revision, id, NumericField::MaxFiles, Some(c.max_files))) }
                    </div>
                </>
            }
        }
        QuestionConfig::Signature(c) => {
            let id = id.clone();
            let oninput = link.callback(move |e: InputEvent| {
                let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
                Msg::UpdateQuestion(
                    id.clone(),
                    QuestionPatch {
                        legal_text: Some(value),
                        ..QuestionPatch::default()
                    },
                )
            });
            labelled(
                "Texto legal",
                html! {
                    <textarea value={c.legal_text.clone()} rows="3" {oninput} style="width:100%;padding:6px;resize:vertical;" />
                },
            )
        }
    }
}

fn option_list(link: &Link, id: &QuestionId, options: &[String]) -> Html {
    let rows = options.iter().enumerate().map(|(index, option)| {
        let on_input = {
            let id = id.clone();
            link.callback(move |e: InputEvent| {
                let value = e.target_unchecked_into::<HtmlInputElement>().value();
                Msg::UpdateOption(id.clone(), index, value)
            })
        };
        let on_remove = {
            let id = id.clone();
            link.callback(move |_: MouseEvent| Msg::RemoveOption(id.clone(), index))
        };
        html! {
            <div class="option-row" style="display:flex;align-items:center;gap:8px;">
                <span class="material-icons" style="color:#9e9e9e;font-size:18px;">{"radio_button_unchecked"}</span>
                <input value={option.clone()} oninput={on_input} style="flex:1;padding:6px;" />
                { icon_button("close", "Eliminar opción", on_remove, false) }
            </div>
        }
    });

    let on_add = {
        let id = id.clone();
        link.callback(move |_: MouseEvent| Msg::AddOption(id.clone()))
    };

    labelled(
        "Opciones",
        html! {
            <div style="display:flex;flex-direction:column;gap:6px;">
                { for rows }
                <button onclick={on_add}
                    style="align-self:flex-start;background:none;border:none;color:#1976d2;cursor:pointer;padding:4px 0;">
                    {"+ Añadir opción"}
                </button>
            </div>
        },
    )
}

fn placeholder_patch(value: String) -> QuestionPatch {
    QuestionPatch {
        placeholder: Some(value),
        ..QuestionPatch::default()
    }
}

fn labelled(label: &'static str, control: Html) -> Html {
    html! {
        <label style="display:flex;flex-direction:column;gap:4px;flex:1;font-size:0.85rem;color:#616161;">
            { label }
            { control }
        </label>
    }
}

fn text_input(
    link: &Link,
    id: &QuestionId,
    value: &str,
    placeholder: &'static str,
    build: fn(String) -> QuestionPatch,
) -> Html {
    let id = id.clone();
    let oninput = link.callback(move |e: InputEvent| {
        let value = e.target_unchecked_into::<HtmlInputElement>().value();
        Msg::UpdateQuestion(id.clone(), build(value))
    });
    html! {
        <input value={value.to_string()} {placeholder} {oninput} style="width:100%;padding:6px;" />
    }
}

/// Plain text input: a `type="number"` field reports unparseable text as an
/// empty value, which would read as "clear" instead of being rejected.
fn numeric_input<T: ToString>(
    link: &Link,
    revision: u32,
    id: &QuestionId,
    field: NumericField,
    value: Option<T>,
) -> Html {
    let key = format!("{:?}-{}", field, revision);
    let id = id.clone();
    let onchange = link.callback(move |e: Event| {
        let raw = e.target_unchecked_into::<HtmlInputElement>().value();
        Msg::UpdateNumeric(id.clone(), field, raw)
    });
    html! {
        <input
            key={key}
            type="text"
            inputmode="numeric"
            value={value.map(|v| v.to_string()).unwrap_or_default()}
            {onchange}
            style="width:100%;padding:6px;"
        />
    }
}

fn checkbox(
    link: &Link,
    id: &QuestionId,
    label: &'static str,
    checked: bool,
    build: fn(bool) -> QuestionPatch,
) -> Html {
    let id = id.clone();
    let onchange = link.callback(move |e: Event| {
        let checked = e.target_unchecked_into::<HtmlInputElement>().checked();
        Msg::UpdateQuestion(id.clone(), build(checked))
    });
    html! {
        <label style="display:flex;align-items:center;gap:6px;cursor:pointer;">
            <input type="checkbox" {checked} {onchange} />
            { label }
        </label>
    }
}
