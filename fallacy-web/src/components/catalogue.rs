use super::detail::FallacyDetail;
use super::grid::FallacyGrid;
use fallacy_core::{FallacyCollection, NavEvent, View};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub view: View,
    pub collection: Rc<FallacyCollection>,
    pub on_event: Callback<NavEvent>,
}

/// Home grid or detail view, depending on the controller's view.
#[function_component(CatalogueView)]
pub fn catalogue_view(p: &Props) -> Html {
    let detail = match p.view {
        View::Home => None,
        View::Detail(index) => p.collection.get(index).map(|f| (index, f)),
    };

    match detail {
        Some((position, fallacy)) => html! {
            <FallacyDetail
                fallacy={fallacy.clone()}
                {position}
                total={p.collection.len()}
                on_back={p.on_event.reform(|()| NavEvent::GoHome)}
                on_previous={p.on_event.reform(|()| NavEvent::NavigatePrevious)}
                on_next={p.on_event.reform(|()| NavEvent::NavigateNext)}
                on_share={p.on_event.reform(|()| NavEvent::ShareRequested)}
                on_copy={p.on_event.reform(|()| NavEvent::CopyLinkRequested)}
            />
        },
        None => html! {
            <FallacyGrid
                collection={Rc::clone(&p.collection)}
                on_open={p.on_event.reform(NavEvent::OpenItem)}
            />
        },
    }
}
