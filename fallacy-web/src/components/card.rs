use fallacy_core::Fallacy;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub fallacy: Fallacy,
    pub on_open: Callback<String>,
}

#[function_component(FallacyCard)]
pub fn fallacy_card(p: &Props) -> Html {
    let onclick = {
        let cb = p.on_open.clone();
        let slug = p.fallacy.slug.clone();
        Callback::from(move |_: MouseEvent| cb.emit(slug.clone()))
    };
    let onkeydown = {
        let cb = p.on_open.clone();
        let slug = p.fallacy.slug.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" || e.key() == " " {
                e.prevent_default();
                cb.emit(slug.clone());
            }
        })
    };

    html! {
        <article
            class="fallacy-card"
            role="link"
            tabindex="0"
            data-slug={p.fallacy.slug.clone()}
            {onclick}
            {onkeydown}
        >
            <div class="card-icon" aria-hidden="true">{ p.fallacy.icon.clone() }</div>
            <h2 class="card-title">{ p.fallacy.title.clone() }</h2>
            <p class="card-subtitle">{ p.fallacy.subtitle.clone() }</p>
            <p class="card-tagline">{ p.fallacy.tagline.clone() }</p>
        </article>
    }
}
