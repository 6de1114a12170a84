use super::card::FallacyCard;
use fallacy_core::FallacyCollection;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub collection: Rc<FallacyCollection>,
    pub on_open: Callback<String>,
}

/// One card per item, in collection order.
#[function_component(FallacyGrid)]
pub fn fallacy_grid(p: &Props) -> Html {
    html! {
        <section id="home-view" class="fallacy-grid" aria-label="Fallacies">
            { for p.collection.iter().map(|fallacy| html! {
                <FallacyCard
                    key={fallacy.slug.clone()}
                    fallacy={fallacy.clone()}
                    on_open={p.on_open.clone()}
                />
            }) }
        </section>
    }
}
