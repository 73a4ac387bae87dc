//! Form builder: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `FormBuilderProps`, `FormBuilderComponent`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - On first render, load an existing form (if `form_id` is provided) or keep
//!   the blank one and notify users via toast messages (in Spanish).

use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::form::FormDefinition;

mod dialogs;
mod helpers;
mod messages;
mod props;
mod question_card;
mod state;
mod update;
mod view;

use helpers::show_toast;
pub use messages::Msg;
pub use props::FormBuilderProps;
pub use state::FormBuilderComponent;

use crate::services::forms::load_form;

impl Component for FormBuilderComponent {
    type Message = Msg;
    type Properties = FormBuilderProps;

    fn create(_ctx: &Context<Self>) -> Self {
        FormBuilderComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            if let Some(form_id) = &ctx.props().form_id {
                let link = ctx.link().clone();
                let form_id = form_id.clone();
                spawn_local(async move {
                    match load_form(&form_id).await {
                        Ok(form) => {
                            link.send_message(Msg::SetForm(form));
                            show_toast("Formulario cargado correctamente.");
                        }
                        Err(err) => {
                            gloo_console::error!(format!("No se pudo cargar {}: {}", form_id, err));
                            link.send_message(Msg::SetForm(FormDefinition::default()));
                            show_toast("Error cargando formulario. Se creó uno nuevo.");
                        }
                    }
                });
            }
        }
    }
}
