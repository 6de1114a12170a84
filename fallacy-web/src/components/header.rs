use fallacy_core::DEFAULT_TITLE;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub home_href: AttrValue,
    pub on_home: Callback<()>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let onclick = {
        let cb = p.on_home.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            cb.emit(());
        })
    };
    html! {
        <header class="site-header">
            <h1><a href={p.home_href.clone()} {onclick}>{ DEFAULT_TITLE }</a></h1>
        </header>
    }
}
