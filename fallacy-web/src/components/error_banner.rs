use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub message: AttrValue,
}

/// Persistent banner for failures that leave nothing else to show.
#[function_component(ErrorBanner)]
pub fn error_banner(p: &Props) -> Html {
    html! {
        <div class="error-banner" role="alert">{ p.message.clone() }</div>
    }
}
