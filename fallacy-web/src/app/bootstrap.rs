use super::state::LoadState;
use crate::loader::LoadError;
use fallacy_core::FallacyCollection;
use fallacy_core::constants::LOAD_FAILURE_MESSAGE;
use std::rc::Rc;
use yew::AttrValue;

#[cfg(target_arch = "wasm32")]
use super::state::AppState;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

/// Map a load result onto the state the view renders.
#[must_use]
pub fn load_state(result: Result<FallacyCollection, LoadError>) -> LoadState {
    match result {
        Ok(collection) => LoadState::Ready(Rc::new(collection)),
        Err(err) => {
            log::error!("failed to load fallacies: {err}");
            LoadState::Failed(AttrValue::from(LOAD_FAILURE_MESSAGE))
        }
    }
}

/// Fetch the collection once on mount.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let load = app_state.load.clone();
    use_effect_with((), move |()| {
        wasm_bindgen_futures::spawn_local(async move {
            let url = crate::loader::data_url();
            let result = crate::loader::fetch_collection(&url).await;
            load.set(load_state(result));
        });
        || {}
    });
}
