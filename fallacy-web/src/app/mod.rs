#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

pub mod bootstrap;
pub mod routing;
pub mod state;
pub mod view;

pub use state::{AppState, LoadState};

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let app_state = state::use_app_state();
    bootstrap::use_bootstrap(&app_state);
    routing::use_route_sync(&app_state);
    routing::use_keyboard_shortcuts(&app_state);

    view::render_app(&app_state)
}
