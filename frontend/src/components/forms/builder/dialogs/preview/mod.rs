//! Preview dialog: what a respondent would see, rendered from
//! `common::preview::PreviewForm`. Every control is disabled.

use yew::html::Scope;
use yew::prelude::*;

use common::preview::{PreviewControl, PreviewForm, PreviewItem, EMPTY_FORM_MESSAGE};

use crate::components::forms::builder::{FormBuilderComponent, Msg};
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;

pub fn preview_dialog(component: &FormBuilderComponent, link: &Scope<FormBuilderComponent>) -> Html {
    let viewport = component.viewport;
    let next = viewport.toggle();

    html! {
        <YwMaterialTopSheet node_ref={component.preview_dialog_ref.clone()}>
            <div style="position:fixed;top:0;left:0;width:100vw;height:100vh;background:rgba(0,0,0,0.85);z-index:9999;display:flex;flex-direction:column;align-items:center;overflow-y:auto;">
                <div style="display:flex;gap:8px;align-items:center;margin:24px 0 16px;">
                    <button
                        onclick={link.callback(move |_| Msg::SetViewport(next))}
                        title={format!("Ver en {}", next.label())}
                        style="display:flex;align-items:center;gap:6px;padding:0.5rem 1rem;background:#fff;border:none;border-radius:4px;cursor:pointer;"
                    >
                        <span class="material-icons">{ viewport.icon() }</span>
                        { viewport.label() }
                    </button>
                </div>
                <button
                    onclick={link.callback(|_| Msg::ClosePreview)}
                    style="position:absolute;top:24px;right:32px;z-index:10000;padding:0.5rem 1rem;font-size:1.5rem;background:#fff;border:none;border-radius:4px;cursor:pointer;"
                >
                    { "✕" }
                </button>
                {
                    if component.preview_open {
                        let preview = PreviewForm::project(&component.editor.form);
                        html! {
                            <div class="preview-frame" style={format!("{}background:#fff;border-radius:8px;padding:24px;margin-bottom:48px;", viewport.frame_style())}>
                                { render_preview(&preview) }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </YwMaterialTopSheet>
    }
}

fn render_preview(preview: &PreviewForm) -> Html {
    html! {
        <form onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
            <h2 style="margin-top:0;">{ preview.title.clone() }</h2>
            if let Some(description) = &preview.description {
                <p style="color:#616161;white-space:pre-wrap;">{ description.clone() }</p>
            }
            if preview.items.is_empty() {
                <p class="preview-empty" style="color:#9e9e9e;text-align:center;padding:32px 0;">{ EMPTY_FORM_MESSAGE }</p>
            } else {
                { for preview.items.iter().map(render_item) }
            }
            if preview.shows_submit() {
                <button type="submit" disabled=true
                    style="margin-top:16px;padding:0.5rem 1.5rem;background:#1976d2;color:#fff;border:none;border-radius:4px;opacity:0.6;">
                    {"Enviar"}
                </button>
            }
        </form>
    }
}

fn render_item(item: &PreviewItem) -> Html {
    html! {
        <div key={item.question_id.as_str().to_string()} class="preview-item" style="margin-bottom:20px;">
            <label style="display:block;font-weight:500;margin-bottom:4px;">
                { format!("{}. {}", item.number, item.label) }
                if item.required {
                    <span style="color:#d32f2f;margin-left:4px;">{"*"}</span>
                }
            </label>
            if let Some(help) = &item.help_text {
                <div style="font-size:0.8rem;color:#757575;margin-bottom:6px;">{ help.clone() }</div>
            }
            { render_control(&item.control) }
        </div>
    }
}

fn render_control(control: &PreviewControl) -> Html {
    const FIELD: &str = "width:100%;padding:8px;border:1px solid #ccc;border-radius:4px;box-sizing:border-box;";

    match control {
        PreviewControl::TextInput { placeholder } => html! {
            <input type="text" disabled=true placeholder={placeholder.clone()} style={FIELD} />
        },
        PreviewControl::TextArea { placeholder, rows } => html! {
            <textarea disabled=true placeholder={placeholder.clone()} rows={rows.to_string()} style={FIELD} />
        },
        PreviewControl::Select { prompt, options } => html! {
            <select disabled=true style={FIELD}>
                <option>{ *prompt }</option>
                { for options.iter().map(|option| html! { <option>{ option.clone() }</option> }) }
            </select>
        },
        PreviewControl::CheckboxList { options } => html! {
            <div style="display:flex;flex-direction:column;gap:4px;">
                {
                    for options.iter().map(|option| html! {
                        <label style="display:flex;align-items:center;gap:6px;">
                            <input type="checkbox" disabled=true />
                            { option.clone() }
                        </label>
                    })
                }
            </div>
        },
        PreviewControl::NumberInput { unit_label } => html! {
            <div style="display:flex;align-items:center;gap:8px;">
                <input type="number" disabled=true style={FIELD} />
                if let Some(unit) = unit_label {
                    <span style="color:#616161;">{ unit.clone() }</span>
                }
            </div>
        },
        PreviewControl::DateInput => html! {
            <input type="date" disabled=true style={FIELD} />
        },
        PreviewControl::YesNo { group, default_answer } => html! {
            <div style="display:flex;gap:16px;">
                <label><input type="radio" name={group.clone()} disabled=true checked={*default_answer == Some(true)} />{" Sí"}</label>
                <label><input type="radio" name={group.clone()} disabled=true checked={*default_answer == Some(false)} />{" No"}</label>
            </div>
        },
        PreviewControl::FileDrop { max_files, max_file_size_mb } => html! {
            <div style="border:2px dashed #bdbdbd;border-radius:8px;padding:24px;text-align:center;color:#9e9e9e;">
                <span class="material-icons" style="font-size:32px;">{"cloud_upload"}</span>
                <div>{"Arrastra archivos aquí o haz clic para seleccionarlos"}</div>
                <div style="font-size:0.8rem;">
                    { format!("Hasta {} archivo(s), {} MB máx. cada uno", max_files, max_file_size_mb) }
                </div>
            </div>
        },
        PreviewControl::SignaturePad { legal_text } => html! {
            <div>
                <div style="height:120px;border:1px solid #ccc;border-radius:4px;background:#fafafa;display:flex;align-items:center;justify-content:center;color:#bdbdbd;">
                    {"Firme aquí"}
                </div>
                if let Some(text) = legal_text {
                    <p style="font-size:0.8rem;color:#757575;">{ text.clone() }</p>
                }
            </div>
        },
    }
}
