//! Question-type palette shown beside the canvas.
//!
//! Stateless: clicking an entry emits its `QuestionType`; the builder decides
//! what to do with it.

use yew::prelude::*;

use common::model::palette::{PaletteEntry, PALETTE, TIPS};
use common::model::question::QuestionType;

#[derive(Properties, PartialEq)]
pub struct PaletteProps {
    pub on_select: Callback<QuestionType>,
}

pub struct PaletteComponent;

impl Component for PaletteComponent {
    type Message = ();
    type Properties = PaletteProps;

    fn create(_ctx: &Context<Self>) -> Self {
        PaletteComponent
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_select = &ctx.props().on_select;

        html! {
            <div class="palette" style="background:#fff;border-radius:8px;padding:16px;">
                <h3 style="margin:0 0 12px;font-size:1rem;">{"Tipos de pregunta"}</h3>
                <div style="display:flex;flex-direction:column;gap:6px;">
                    { for PALETTE.iter().map(|entry| palette_button(entry, on_select)) }
                </div>
                <div class="palette-tips" style="margin-top:16px;padding:12px;background:#e3f2fd;border-radius:4px;font-size:0.8rem;">
                    <strong>{"Consejos"}</strong>
                    <ul style="margin:6px 0 0;padding-left:18px;">
                        { for TIPS.iter().map(|tip| html! { <li>{ *tip }</li> }) }
                    </ul>
                </div>
            </div>
        }
    }
}

fn palette_button(entry: &PaletteEntry, on_select: &Callback<QuestionType>) -> Html {
    let kind = entry.kind;
    let onclick = on_select.reform(move |_: MouseEvent| kind);

    html! {
        <button
            class="palette-entry"
            title={entry.description}
            {onclick}
            style="display:flex;align-items:flex-start;gap:10px;padding:8px;background:none;border:1px solid #eee;border-radius:4px;cursor:pointer;text-align:left;"
        >
            <span class="material-icons" style="color:#1976d2;">{ entry.icon }</span>
            <span>
                <div style="font-weight:500;">{ entry.label }</div>
                <div style="font-size:0.75rem;color:#757575;">{ entry.description }</div>
            </span>
        </button>
    }
}
