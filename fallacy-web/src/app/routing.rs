//! Browser side of the controller: history, title, scroll, clipboard.

use super::state::LoadState;
use crate::components::notice::{NoticeAction, NoticeState};
use crate::dom;
use fallacy_core::constants::INITIAL_MARKER_META;
use fallacy_core::{Address, Effect, FallacyCollection, NavigationSurface};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::history::{BrowserHistory, History};

#[cfg(target_arch = "wasm32")]
use super::state::AppState;
#[cfg(target_arch = "wasm32")]
use fallacy_core::{Controller, NavEvent, NavKey};

/// Navigation effects applied to the real browser history.
pub struct BrowserSurface {
    history: BrowserHistory,
}

impl BrowserSurface {
    #[must_use]
    pub fn new() -> Self {
        Self {
            history: BrowserHistory::new(),
        }
    }
}

impl Default for BrowserSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationSurface for BrowserSurface {
    fn push_address(&mut self, url: &str, slug: Option<&str>) {
        self.history
            .push_with_state(url.to_string(), slug.map(str::to_string));
    }

    fn replace_address(&mut self, url: &str, slug: Option<&str>) {
        self.history
            .replace_with_state(url.to_string(), slug.map(str::to_string));
    }

    fn set_title(&mut self, title: &str) {
        if let Some(document) = dom::document() {
            document.set_title(title);
        }
    }

    fn scroll_to_top(&mut self) {
        if let Some(win) = dom::window() {
            win.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

/// Address currently shown by `history`.
#[must_use]
pub fn current_address(history: &BrowserHistory) -> Address {
    let location = history.location();
    Address::new(location.path(), location.query_str(), location.hash())
}

/// Slug a pre-rendered page asks to open, if any.
#[must_use]
pub fn initial_marker() -> Option<String> {
    dom::meta_content(INITIAL_MARKER_META)
}

/// Collection the browser listeners are keyed on; `None` until the load succeeds.
#[must_use]
pub fn ready_collection(load: &LoadState) -> Option<Rc<FallacyCollection>> {
    match load {
        LoadState::Ready(collection) => Some(Rc::clone(collection)),
        LoadState::Loading | LoadState::Failed(_) => None,
    }
}

/// Apply navigation effects to `surface`, returning the rest in order.
pub fn apply_navigation<S: NavigationSurface>(effects: Vec<Effect>, surface: &mut S) -> Vec<Effect> {
    effects
        .into_iter()
        .filter_map(|effect| effect.apply_to(surface))
        .collect()
}

/// Perform every effect of one controller step.
pub fn apply_effects(effects: Vec<Effect>, notices: &UseReducerHandle<NoticeState>) {
    let rest = apply_navigation(effects, &mut BrowserSurface::new());
    for effect in rest {
        match effect {
            Effect::CopyToClipboard(url) => copy_link(url, notices.clone()),
            Effect::OpenShareWindow(url) => crate::share::open_share_window(&url),
            other => log::debug!("unhandled effect {other:?}"),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn copy_link(url: String, notices: UseReducerHandle<NoticeState>) {
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = crate::share::copy_text(&url).await;
        notices.dispatch(NoticeAction::copy_result(outcome));
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn copy_link(url: String, notices: UseReducerHandle<NoticeState>) {
    log::warn!("clipboard unavailable outside the browser: {url}");
    notices.dispatch(NoticeAction::copy_result(fallacy_core::CopyOutcome::Failed));
}

/// Create the controller once the collection is ready, restore the initial
/// address and follow history traversal from then on.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_route_sync(state: &AppState) {
    let ready = ready_collection(&state.load);
    let state = state.clone();
    use_effect_with(ready, move |ready| {
        let listener = ready.as_ref().map(|collection| {
            let history = BrowserHistory::new();
            let controller = Controller::new(
                Rc::clone(collection),
                crate::paths::base_path(),
                &dom::origin(),
            );
            *state.controller.borrow_mut() = Some(controller);
            state.dispatch(NavEvent::Loaded {
                address: current_address(&history),
                marker: initial_marker(),
            });
            state.refresh.force_update();

            let listen_history = history.clone();
            history.listen(move || {
                state.dispatch(NavEvent::HistoryPopped(current_address(&listen_history)));
            })
        });
        move || drop(listener)
    });
}

/// Arrow keys and Escape in the detail view. Modified keys are left alone.
///
/// The listener is only registered once the collection has loaded.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_keyboard_shortcuts(state: &AppState) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let ready = ready_collection(&state.load);
    let state = state.clone();
    use_effect_with(ready, move |ready| {
        let document = ready.as_ref().and_then(|_| dom::document());
        let on_keydown = Closure::<dyn Fn(web_sys::KeyboardEvent)>::new(
            move |event: web_sys::KeyboardEvent| {
                if event.ctrl_key() || event.meta_key() || event.alt_key() || event.shift_key() {
                    return;
                }
                let Some(key) = NavKey::from_key(&event.key()) else {
                    return;
                };
                if !state.view().is_detail() {
                    return;
                }
                event.prevent_default();
                state.dispatch(NavEvent::Key(key));
            },
        );
        if let Some(doc) = &document {
            let _ = doc
                .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
        }
        move || {
            if let Some(doc) = document {
                let _ = doc.remove_event_listener_with_callback(
                    "keydown",
                    on_keydown.as_ref().unchecked_ref(),
                );
            }
            drop(on_keydown);
        }
    });
}
