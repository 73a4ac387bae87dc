use crate::components::forms::builder::FormBuilderComponent;
use yew::{html, Component, Context, Html};

/// Root component. Opens the builder on `?form=<id>` when present, on a new
/// form otherwise.
pub struct App {
    form_id: Option<String>,
}

pub enum Msg {
    /// The builder finished (saved and activated); start over with a blank form.
    Back,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form_id: form_id_from_location(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Back => {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/");
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div>
                <FormBuilderComponent
                    form_id={self.form_id.clone()}
                    on_back={ctx.link().callback(|_: ()| Msg::Back)}
                />
            </div>
        }
    }
}

fn form_id_from_location() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    search
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| pair.strip_prefix("form="))
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}
