use crate::components::notice::NoticeState;
use fallacy_core::{Controller, FallacyCollection, NavEvent, View};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Ready(Rc<FallacyCollection>),
    Failed(AttrValue),
}

/// Controller slot shared by the hooks; empty until the collection is ready.
pub type ControllerCell = Rc<RefCell<Option<Controller>>>;

#[derive(Clone)]
pub struct AppState {
    pub load: UseStateHandle<LoadState>,
    pub controller: ControllerCell,
    pub notices: UseReducerHandle<NoticeState>,
    pub refresh: UseForceUpdateHandle,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        load: use_state(|| LoadState::Loading),
        controller: use_mut_ref(|| None::<Controller>),
        notices: use_reducer(NoticeState::default),
        refresh: use_force_update(),
    }
}

impl AppState {
    /// Current view, or home while no controller exists.
    #[must_use]
    pub fn view(&self) -> View {
        self.controller
            .borrow()
            .as_ref()
            .map_or(View::Home, Controller::view)
    }

    /// Feed `event` to the controller and perform the resulting effects.
    ///
    /// The controller borrow ends before any effect runs, so effects that
    /// re-enter (history listeners) never observe it borrowed.
    pub fn dispatch(&self, event: NavEvent) {
        let effects = match self.controller.borrow_mut().as_mut() {
            Some(controller) => controller.handle(event),
            None => return,
        };
        if effects.is_empty() {
            return;
        }
        super::routing::apply_effects(effects, &self.notices);
        self.refresh.force_update();
    }

    #[must_use]
    pub fn dispatcher(&self) -> Callback<NavEvent> {
        let state = self.clone();
        Callback::from(move |event| state.dispatch(event))
    }
}
