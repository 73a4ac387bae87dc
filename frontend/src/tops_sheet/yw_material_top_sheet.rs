use gloo_timers::future::TimeoutFuture;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;
use yew::{html, Component, Context, Html, NodeRef, Properties};

/// Class that slides the sheet into view (see `index.html`).
const SHOW_CLASS: &str = "show";

/// Delay before toggling the class so the sheet content is rendered first.
const TRANSITION_DELAY_MS: u32 = 50;

pub struct YwMaterialTopSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
}

impl Component for YwMaterialTopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <>
                <div class="top-sheet" id={self.id.clone()} ref={ctx.props().node_ref.clone()}>
                        { ctx.props().children.clone() }
                </div>
            </>
        }
    }
}

pub fn open_top_sheet(top_sheet_ref: NodeRef) {
    set_shown(top_sheet_ref, true);
}

pub fn close_top_sheet(top_sheet_ref: NodeRef) {
    set_shown(top_sheet_ref, false);
}

fn set_shown(top_sheet_ref: NodeRef, shown: bool) {
    spawn_local(async move {
        TimeoutFuture::new(TRANSITION_DELAY_MS).await;
        if let Some(top_sheet) = top_sheet_ref.cast::<HtmlElement>() {
            let classes = top_sheet.class_list();
            let _ = if shown {
                classes.add_1(SHOW_CLASS)
            } else {
                classes.remove_1(SHOW_CLASS)
            };
        }
    });
}
