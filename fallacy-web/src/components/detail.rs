use fallacy_core::{Attribution, Fallacy};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub fallacy: Fallacy,
    /// Zero-based position in the collection.
    pub position: usize,
    pub total: usize,
    pub on_back: Callback<()>,
    pub on_previous: Callback<()>,
    pub on_next: Callback<()>,
    pub on_share: Callback<()>,
    pub on_copy: Callback<()>,
}

fn attribution_html(attribution: Option<Attribution<'_>>) -> Html {
    let Some(attribution) = attribution else {
        return Html::default();
    };
    let name = attribution.name.to_string();
    html! {
        <p id="detail-source" class="detail-source">
            { "Source: " }
            if let Some(url) = attribution.url {
                <a
                    id="detail-source-link"
                    href={url.to_string()}
                    target="_blank"
                    rel="noopener noreferrer"
                >{ name }</a>
            } else {
                <span id="detail-source-name">{ name }</span>
            }
        </p>
    }
}

#[function_component(FallacyDetail)]
pub fn fallacy_detail(p: &Props) -> Html {
    let f = &p.fallacy;
    let on_back = p.on_back.reform(|_: MouseEvent| ());
    let on_previous = p.on_previous.reform(|_: MouseEvent| ());
    let on_next = p.on_next.reform(|_: MouseEvent| ());
    let on_share = p.on_share.reform(|_: MouseEvent| ());
    let on_copy = p.on_copy.reform(|_: MouseEvent| ());

    html! {
        <article id="detail-view" class="fallacy-detail" data-slug={f.slug.clone()}>
            <nav class="detail-nav" aria-label="Fallacy navigation">
                <button id="back-button" type="button" onclick={on_back}>{ "← All fallacies" }</button>
                <button id="previous-button" type="button" aria-label="Previous fallacy" onclick={on_previous}>{ "‹" }</button>
                <span class="detail-position">{ format!("{} / {}", p.position + 1, p.total) }</span>
                <button id="next-button" type="button" aria-label="Next fallacy" onclick={on_next}>{ "›" }</button>
            </nav>
            <div id="detail-icon" class="detail-icon" aria-hidden="true">{ f.icon.clone() }</div>
            <h1 id="detail-title">{ f.title.clone() }</h1>
            <p id="detail-subtitle" class="detail-subtitle">{ f.subtitle.clone() }</p>
            <p id="detail-tagline" class="detail-tagline">{ f.tagline.clone() }</p>
            <section class="detail-section">
                <h2>{ "What it is" }</h2>
                <p id="detail-description">{ f.description.clone() }</p>
            </section>
            <section class="detail-section">
                <h2>{ "Example" }</h2>
                <blockquote id="detail-example">{ f.example.clone() }</blockquote>
            </section>
            { attribution_html(f.attribution()) }
            <div class="detail-share">
                <button id="share-twitter" type="button" onclick={on_share}>{ "Share on Twitter" }</button>
                <button id="copy-link" type="button" onclick={on_copy}>{ "Copy link" }</button>
            </div>
            <p class="sr-only">{ "Use the left and right arrow keys to browse, Escape to return." }</p>
        </article>
    }
}
