//! Defines the properties for the `FormBuilderComponent`.

use yew::prelude::*;

/// Properties for the `FormBuilderComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct FormBuilderProps {
    /// Id of a stored form to open. Read once, on the first render.
    ///
    /// - `Some(id)`: the form is fetched from `/api/forms/{id}`; if that fails
    ///   the builder falls back to a blank form and says so in a toast.
    /// - `None` (the default): the builder starts on a blank form.
    #[prop_or_default]
    pub form_id: Option<String>,

    /// Navigation hook fired after a successful "save and activate" and by the
    /// back button.
    #[prop_or_default]
    pub on_back: Option<Callback<()>>,
}
