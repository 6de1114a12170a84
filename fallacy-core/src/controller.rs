//! View/route controller.
//!
//! Owns which view is visible and what the address bar shows. Every input is a
//! [`NavEvent`] fed through [`Controller::handle`], which updates the view and
//! returns the side effects the host must perform, in order.

use crate::address::{Address, BasePath, is_canonical, resolve_slug};
use crate::constants::DEFAULT_TITLE;
use crate::data::{Fallacy, FallacyCollection};
use crate::share::tweet_intent_url;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    /// Index into the collection.
    Detail(usize),
}

impl View {
    #[must_use]
    pub const fn is_detail(self) -> bool {
        matches!(self, Self::Detail(_))
    }
}

/// Keyboard shortcuts available in the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Previous,
    Next,
    Home,
}

impl NavKey {
    /// Map a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "Left" => Some(Self::Previous),
            "ArrowRight" | "Right" => Some(Self::Next),
            "Escape" | "Esc" => Some(Self::Home),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    /// Collection loaded; resolve the initial address. `marker` is the slug a
    /// pre-rendered page asks to open when the address itself names none.
    Loaded {
        address: Address,
        marker: Option<String>,
    },
    OpenItem(String),
    NavigateNext,
    NavigatePrevious,
    GoHome,
    HistoryPopped(Address),
    Key(NavKey),
    CopyLinkRequested,
    ShareRequested,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// New history entry tagged with the slug (or `None` for home).
    PushAddress { url: String, slug: Option<String> },
    /// Rewrite the current history entry without adding one.
    ReplaceAddress { url: String, slug: Option<String> },
    SetTitle(String),
    ScrollToTop,
    CopyToClipboard(String),
    OpenShareWindow(String),
}

/// Host surface that performs navigation effects.
pub trait NavigationSurface {
    fn push_address(&mut self, url: &str, slug: Option<&str>);
    fn replace_address(&mut self, url: &str, slug: Option<&str>);
    fn set_title(&mut self, title: &str);
    fn scroll_to_top(&mut self);
}

impl Effect {
    /// Apply a navigation effect to `surface`.
    ///
    /// Effects outside the surface's concern (clipboard, share window) are
    /// handed back to the caller.
    pub fn apply_to<S: NavigationSurface + ?Sized>(self, surface: &mut S) -> Option<Self> {
        match self {
            Self::PushAddress { url, slug } => surface.push_address(&url, slug.as_deref()),
            Self::ReplaceAddress { url, slug } => surface.replace_address(&url, slug.as_deref()),
            Self::SetTitle(title) => surface.set_title(&title),
            Self::ScrollToTop => surface.scroll_to_top(),
            other @ (Self::CopyToClipboard(_) | Self::OpenShareWindow(_)) => return Some(other),
        }
        None
    }
}

/// Document title for the given item, or the home title.
#[must_use]
pub fn page_title(fallacy: Option<&Fallacy>) -> String {
    fallacy.map_or_else(
        || DEFAULT_TITLE.to_string(),
        |f| format!("{} - {DEFAULT_TITLE}", f.title),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AddressUpdate {
    Keep,
    Push,
    Replace,
}

#[derive(Debug, Clone)]
pub struct Controller {
    collection: Rc<FallacyCollection>,
    base: BasePath,
    origin: String,
    view: View,
    displayed: String,
}

impl Controller {
    /// Controller in the home view. `origin` (e.g. `https://example.org`)
    /// prefixes the displayed address when it is shared.
    #[must_use]
    pub fn new(collection: Rc<FallacyCollection>, base: BasePath, origin: &str) -> Self {
        let displayed = base.home_url();
        Self {
            collection,
            base,
            origin: origin.trim_end_matches('/').to_string(),
            view: View::Home,
            displayed,
        }
    }

    #[must_use]
    pub const fn view(&self) -> View {
        self.view
    }

    #[must_use]
    pub fn collection(&self) -> &FallacyCollection {
        &self.collection
    }

    #[must_use]
    pub const fn base(&self) -> &BasePath {
        &self.base
    }

    /// Item shown in the detail view.
    #[must_use]
    pub fn current(&self) -> Option<&Fallacy> {
        match self.view {
            View::Home => None,
            View::Detail(index) => self.collection.get(index),
        }
    }

    /// Path of the address the controller last wrote or accepted.
    #[must_use]
    pub fn displayed_path(&self) -> &str {
        &self.displayed
    }

    /// Full displayed address, as it would be shared.
    #[must_use]
    pub fn displayed_url(&self) -> String {
        format!("{}{}", self.origin, self.displayed)
    }

    #[must_use]
    pub fn title(&self) -> String {
        page_title(self.current())
    }

    pub fn handle(&mut self, event: NavEvent) -> Vec<Effect> {
        log::debug!("nav event {event:?} in {:?}", self.view);
        match event {
            NavEvent::Loaded { address, marker } => self.restore(&address, marker),
            NavEvent::HistoryPopped(address) => self.history_popped(&address),
            NavEvent::OpenItem(slug) => match self.collection.position_of_slug(&slug) {
                Some(index) => self.enter(View::Detail(index), AddressUpdate::Push),
                None => {
                    log::debug!("unknown slug {slug:?}, falling back to home");
                    self.go_home()
                }
            },
            NavEvent::NavigateNext => self.step(FallacyCollection::next_index),
            NavEvent::NavigatePrevious => self.step(FallacyCollection::previous_index),
            NavEvent::GoHome => self.go_home(),
            NavEvent::Key(key) => {
                if !self.view.is_detail() {
                    return Vec::new();
                }
                match key {
                    NavKey::Previous => self.step(FallacyCollection::previous_index),
                    NavKey::Next => self.step(FallacyCollection::next_index),
                    NavKey::Home => self.go_home(),
                }
            }
            NavEvent::CopyLinkRequested => {
                if self.view.is_detail() {
                    vec![Effect::CopyToClipboard(self.displayed_url())]
                } else {
                    Vec::new()
                }
            }
            NavEvent::ShareRequested => self
                .current()
                .map(|f| tweet_intent_url(&f.title, &self.displayed_url()))
                .map(Effect::OpenShareWindow)
                .into_iter()
                .collect(),
        }
    }

    fn resolve(&self, address: &Address, marker: Option<String>) -> View {
        resolve_slug(address, &self.base)
            .or(marker)
            .and_then(|slug| self.collection.position_of_slug(&slug))
            .map_or(View::Home, View::Detail)
    }

    fn slug_of(&self, view: View) -> Option<&str> {
        match view {
            View::Home => None,
            View::Detail(index) => self.collection.get(index).map(|f| f.slug.as_str()),
        }
    }

    fn restore(&mut self, address: &Address, marker: Option<String>) -> Vec<Effect> {
        let target = self.resolve(address, marker);
        let update = if is_canonical(address, &self.base, self.slug_of(target)) {
            AddressUpdate::Keep
        } else {
            AddressUpdate::Replace
        };
        self.view = target;
        self.displayed = address.path.clone();
        self.render(update)
    }

    fn history_popped(&mut self, address: &Address) -> Vec<Effect> {
        let target = self.resolve(address, None);
        let canonical = is_canonical(address, &self.base, self.slug_of(target));
        if target == self.view && canonical {
            self.displayed = address.path.clone();
            return Vec::new();
        }
        self.view = target;
        self.displayed = address.path.clone();
        self.render(if canonical {
            AddressUpdate::Keep
        } else {
            AddressUpdate::Replace
        })
    }

    fn go_home(&mut self) -> Vec<Effect> {
        if self.view == View::Home {
            return Vec::new();
        }
        self.enter(View::Home, AddressUpdate::Push)
    }

    fn step(&mut self, pick: fn(&FallacyCollection, usize) -> Option<usize>) -> Vec<Effect> {
        let View::Detail(index) = self.view else {
            return Vec::new();
        };
        match pick(&self.collection, index) {
            Some(next) => self.enter(View::Detail(next), AddressUpdate::Push),
            None => Vec::new(),
        }
    }

    fn enter(&mut self, target: View, update: AddressUpdate) -> Vec<Effect> {
        if target == self.view && target.is_detail() {
            return Vec::new();
        }
        self.view = target;
        self.render(update)
    }

    fn render(&mut self, update: AddressUpdate) -> Vec<Effect> {
        let slug = self.slug_of(self.view).map(str::to_string);
        let url = slug
            .as_deref()
            .map_or_else(|| self.base.home_url(), |s| self.base.item_url(s));
        let mut effects = Vec::with_capacity(3);
        match update {
            AddressUpdate::Keep => {}
            AddressUpdate::Push => effects.push(Effect::PushAddress {
                url: url.clone(),
                slug,
            }),
            AddressUpdate::Replace => effects.push(Effect::ReplaceAddress {
                url: url.clone(),
                slug,
            }),
        }
        if update != AddressUpdate::Keep {
            self.displayed = url;
        }
        effects.push(Effect::SetTitle(self.title()));
        if self.view.is_detail() {
            effects.push(Effect::ScrollToTop);
        }
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Fallacy, FallacyId};

    fn collection(slugs: &[&str]) -> Rc<FallacyCollection> {
        let items = slugs
            .iter()
            .enumerate()
            .map(|(i, slug)| Fallacy {
                id: FallacyId::Number((i as u64 + 1).into()),
                slug: (*slug).to_string(),
                icon: "*".into(),
                title: format!("Title {slug}"),
                subtitle: String::new(),
                tagline: String::new(),
                description: String::new(),
                example: String::new(),
                source: None,
                source_url: None,
            })
            .collect();
        Rc::new(FallacyCollection::from_fallacies(items).unwrap())
    }

    fn controller(slugs: &[&str]) -> Controller {
        Controller::new(collection(slugs), BasePath::root(), "https://example.org")
    }

    #[test]
    fn initial_canonical_address_keeps_history_untouched() {
        let mut c = controller(&["strawman", "motteandbailey"]);
        let effects = c.handle(NavEvent::Loaded {
            address: Address::parse("/motteandbailey"),
            marker: None,
        });
        assert_eq!(c.view(), View::Detail(1));
        assert_eq!(
            effects,
            vec![
                Effect::SetTitle("Title motteandbailey - Your Woke Fallacy Is".into()),
                Effect::ScrollToTop,
            ]
        );
    }

    #[test]
    fn initial_legacy_address_is_replaced_with_canonical_form() {
        let mut c = controller(&["strawman"]);
        let effects = c.handle(NavEvent::Loaded {
            address: Address::parse("/#/strawman"),
            marker: None,
        });
        assert_eq!(c.view(), View::Detail(0));
        assert_eq!(
            effects[0],
            Effect::ReplaceAddress {
                url: "/strawman".into(),
                slug: Some("strawman".into()),
            }
        );
        assert_eq!(c.displayed_path(), "/strawman");
    }

    #[test]
    fn unknown_initial_slug_falls_back_home() {
        let mut c = controller(&["strawman"]);
        let effects = c.handle(NavEvent::Loaded {
            address: Address::parse("/nope"),
            marker: None,
        });
        assert_eq!(c.view(), View::Home);
        assert_eq!(
            effects,
            vec![
                Effect::ReplaceAddress {
                    url: "/".into(),
                    slug: None,
                },
                Effect::SetTitle(DEFAULT_TITLE.into()),
            ]
        );
    }

    #[test]
    fn marker_only_applies_when_address_names_nothing() {
        let mut c = controller(&["strawman", "other"]);
        c.handle(NavEvent::Loaded {
            address: Address::parse("/strawman.html"),
            marker: Some("other".into()),
        });
        assert_eq!(c.view(), View::Detail(1));

        let mut c = controller(&["strawman", "other"]);
        c.handle(NavEvent::Loaded {
            address: Address::parse("/strawman"),
            marker: Some("other".into()),
        });
        assert_eq!(c.view(), View::Detail(0));
    }

    #[test]
    fn navigation_is_a_noop_at_home() {
        let mut c = controller(&["a", "b"]);
        assert!(c.handle(NavEvent::NavigateNext).is_empty());
        assert!(c.handle(NavEvent::NavigatePrevious).is_empty());
        assert!(c.handle(NavEvent::Key(NavKey::Next)).is_empty());
        assert!(c.handle(NavEvent::CopyLinkRequested).is_empty());
        assert!(c.handle(NavEvent::ShareRequested).is_empty());
        assert!(c.handle(NavEvent::GoHome).is_empty());
        assert_eq!(c.view(), View::Home);
    }

    #[test]
    fn open_pushes_canonical_address() {
        let mut c = controller(&["a", "b"]);
        let effects = c.handle(NavEvent::OpenItem("b".into()));
        assert_eq!(
            effects[0],
            Effect::PushAddress {
                url: "/b".into(),
                slug: Some("b".into()),
            }
        );
        assert_eq!(c.displayed_url(), "https://example.org/b");
        assert_eq!(
            c.handle(NavEvent::CopyLinkRequested),
            vec![Effect::CopyToClipboard("https://example.org/b".into())]
        );
    }

    #[test]
    fn open_unknown_slug_goes_home() {
        let mut c = controller(&["a"]);
        c.handle(NavEvent::OpenItem("a".into()));
        let effects = c.handle(NavEvent::OpenItem("missing".into()));
        assert_eq!(c.view(), View::Home);
        assert!(matches!(&effects[0], Effect::PushAddress { url, slug: None } if url == "/"));
    }

    #[test]
    fn popped_echo_of_own_push_is_ignored() {
        let mut c = controller(&["a", "b"]);
        c.handle(NavEvent::OpenItem("a".into()));
        assert!(c.handle(NavEvent::HistoryPopped(Address::parse("/a"))).is_empty());
        assert_eq!(c.view(), View::Detail(0));
    }

    #[test]
    fn popped_address_never_pushes() {
        let mut c = controller(&["a", "b"]);
        c.handle(NavEvent::OpenItem("a".into()));
        c.handle(NavEvent::OpenItem("b".into()));
        let effects = c.handle(NavEvent::HistoryPopped(Address::parse("/a")));
        assert_eq!(c.view(), View::Detail(0));
        assert!(
            !effects
                .iter()
                .any(|e| matches!(e, Effect::PushAddress { .. }))
        );
        let home = c.handle(NavEvent::HistoryPopped(Address::parse("/")));
        assert_eq!(c.view(), View::Home);
        assert_eq!(home, vec![Effect::SetTitle(DEFAULT_TITLE.into())]);
    }

    #[test]
    fn history_pop_to_legacy_form_is_normalized_by_replace() {
        let mut c = controller(&["a", "b"]);
        c.handle(NavEvent::OpenItem("a".into()));

        let effects = c.handle(NavEvent::HistoryPopped(Address::parse("/#/b")));
        assert_eq!(c.view(), View::Detail(1));
        assert_eq!(
            effects[0],
            Effect::ReplaceAddress {
                url: "/b".into(),
                slug: Some("b".into()),
            }
        );
        assert_eq!(c.displayed_path(), "/b");

        let effects = c.handle(NavEvent::HistoryPopped(Address::parse("/?slug=b")));
        assert_eq!(c.view(), View::Detail(1));
        assert_eq!(
            effects[0],
            Effect::ReplaceAddress {
                url: "/b".into(),
                slug: Some("b".into()),
            }
        );
        assert!(
            !effects
                .iter()
                .any(|e| matches!(e, Effect::PushAddress { .. }))
        );
    }

    #[test]
    fn keys_alias_navigation_operations() {
        let mut by_key = controller(&["a", "b", "c"]);
        let mut by_event = controller(&["a", "b", "c"]);
        by_key.handle(NavEvent::OpenItem("a".into()));
        by_event.handle(NavEvent::OpenItem("a".into()));

        assert_eq!(
            by_key.handle(NavEvent::Key(NavKey::Previous)),
            by_event.handle(NavEvent::NavigatePrevious)
        );
        assert_eq!(
            by_key.handle(NavEvent::Key(NavKey::Next)),
            by_event.handle(NavEvent::NavigateNext)
        );
        assert_eq!(
            by_key.handle(NavEvent::Key(NavKey::Home)),
            by_event.handle(NavEvent::GoHome)
        );
        assert_eq!(by_key.view(), by_event.view());
        assert_eq!(by_key.displayed_path(), by_event.displayed_path());
    }

    #[test]
    fn key_names_map_to_shortcuts() {
        assert_eq!(NavKey::from_key("ArrowLeft"), Some(NavKey::Previous));
        assert_eq!(NavKey::from_key("ArrowRight"), Some(NavKey::Next));
        assert_eq!(NavKey::from_key("Escape"), Some(NavKey::Home));
        assert_eq!(NavKey::from_key("Enter"), None);
    }

    #[test]
    fn share_builds_intent_for_current_item() {
        let mut c = controller(&["a"]);
        c.handle(NavEvent::OpenItem("a".into()));
        let effects = c.handle(NavEvent::ShareRequested);
        let [Effect::OpenShareWindow(url)] = effects.as_slice() else {
            panic!("expected share window, got {effects:?}");
        };
        assert!(url.starts_with("https://twitter.com/intent/tweet?text="));
        assert!(url.contains("url=https%3A%2F%2Fexample.org%2Fa"));
    }

    #[test]
    fn single_item_next_stays_put_without_history() {
        let mut c = controller(&["solo"]);
        c.handle(NavEvent::OpenItem("solo".into()));
        assert!(c.handle(NavEvent::NavigateNext).is_empty());
        assert_eq!(c.view(), View::Detail(0));
    }

    struct Recorder(Vec<String>);

    impl NavigationSurface for Recorder {
        fn push_address(&mut self, url: &str, _slug: Option<&str>) {
            self.0.push(format!("push {url}"));
        }
        fn replace_address(&mut self, url: &str, _slug: Option<&str>) {
            self.0.push(format!("replace {url}"));
        }
        fn set_title(&mut self, title: &str) {
            self.0.push(format!("title {title}"));
        }
        fn scroll_to_top(&mut self) {
            self.0.push("scroll".into());
        }
    }

    #[test]
    fn surface_receives_navigation_effects_only() {
        let mut recorder = Recorder(Vec::new());
        let leftover: Vec<_> = vec![
            Effect::PushAddress {
                url: "/a".into(),
                slug: Some("a".into()),
            },
            Effect::SetTitle("A".into()),
            Effect::ScrollToTop,
            Effect::CopyToClipboard("x".into()),
        ]
        .into_iter()
        .filter_map(|e| e.apply_to(&mut recorder))
        .collect();
        assert_eq!(recorder.0, vec!["push /a", "title A", "scroll"]);
        assert_eq!(leftover, vec![Effect::CopyToClipboard("x".into())]);
    }
}
