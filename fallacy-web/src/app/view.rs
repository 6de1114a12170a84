use super::state::{AppState, LoadState};
use crate::components::catalogue::CatalogueView;
use crate::components::error_banner::ErrorBanner;
use crate::components::header::Header;
use crate::components::notice::{NoticeAction, NoticeStack};
use fallacy_core::{NavEvent, Notice};
use std::rc::Rc;
use yew::prelude::*;

pub fn render_app(state: &AppState) -> Html {
    let on_event = state.dispatcher();
    let home_href = AttrValue::from(crate::paths::base_path().home_url());
    let on_home = on_event.reform(|()| NavEvent::GoHome);

    let main = match &*state.load {
        LoadState::Loading => html! {
            <p class="loading" aria-busy="true">{ "Loading…" }</p>
        },
        LoadState::Failed(message) => html! { <ErrorBanner message={message.clone()} /> },
        LoadState::Ready(collection) => html! {
            <CatalogueView
                view={state.view()}
                collection={Rc::clone(collection)}
                on_event={on_event.clone()}
            />
        },
    };

    let notices: Vec<Notice> = state.notices.0.iter().cloned().collect();
    let on_fade = {
        let reducer = state.notices.clone();
        Callback::from(move |id| reducer.dispatch(NoticeAction::Fade(id)))
    };
    let on_dismiss = {
        let reducer = state.notices.clone();
        Callback::from(move |id| reducer.dispatch(NoticeAction::Dismiss(id)))
    };

    html! {
        <>
            <Header {home_href} {on_home} />
            <main id="main">{ main }</main>
            <NoticeStack {notices} {on_fade} {on_dismiss} />
        </>
    }
}
