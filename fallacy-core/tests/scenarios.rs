use std::rc::Rc;

use fallacy_core::{
    Address, BasePath, Controller, CopyMethod, CopyOutcome, DEFAULT_TITLE, Effect, Fallacy,
    FallacyCollection, FallacyId, NavEvent, NavKey, NavigationSurface, NoticeBoard,
    SelectionCopier, View, copy_via_selection, resolve_copy, share::CopyError,
};

/// In-memory stand-in for the browser session history.
struct SessionHistory {
    entries: Vec<(String, Option<String>)>,
    index: usize,
    title: String,
    scrolls: usize,
}

impl SessionHistory {
    fn starting_at(url: &str) -> Self {
        Self {
            entries: vec![(url.to_string(), None)],
            index: 0,
            title: String::new(),
            scrolls: 0,
        }
    }

    fn current(&self) -> Address {
        Address::parse(&self.entries[self.index].0)
    }

    fn back(&mut self) -> Address {
        self.index = self.index.saturating_sub(1);
        self.current()
    }

    fn forward(&mut self) -> Address {
        self.index = (self.index + 1).min(self.entries.len() - 1);
        self.current()
    }

    fn run(&mut self, controller: &mut Controller, event: NavEvent) -> Vec<Effect> {
        controller
            .handle(event)
            .into_iter()
            .filter_map(|effect| effect.apply_to(self))
            .collect()
    }
}

impl NavigationSurface for SessionHistory {
    fn push_address(&mut self, url: &str, slug: Option<&str>) {
        self.entries.truncate(self.index + 1);
        self.entries.push((url.to_string(), slug.map(str::to_string)));
        self.index += 1;
    }

    fn replace_address(&mut self, url: &str, slug: Option<&str>) {
        self.entries[self.index] = (url.to_string(), slug.map(str::to_string));
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn scroll_to_top(&mut self) {
        self.scrolls += 1;
    }
}

fn item(id: u64, slug: &str, title: &str) -> Fallacy {
    Fallacy {
        id: FallacyId::Number(id.into()),
        slug: slug.to_string(),
        icon: "•".to_string(),
        title: title.to_string(),
        subtitle: String::new(),
        tagline: String::new(),
        description: String::new(),
        example: String::new(),
        source: None,
        source_url: None,
    }
}

fn two_items() -> Rc<FallacyCollection> {
    Rc::new(
        FallacyCollection::from_fallacies(vec![
            item(1, "strawman", "Strawman"),
            item(2, "motteandbailey", "Motte and Bailey"),
        ])
        .unwrap(),
    )
}

#[test]
fn load_wrap_and_escape_scenario() {
    let collection = two_items();
    let mut history = SessionHistory::starting_at("/motteandbailey");
    let mut controller = Controller::new(Rc::clone(&collection), BasePath::root(), "");

    let address = history.current();
    history.run(&mut controller, NavEvent::Loaded {
        address,
        marker: None,
    });
    assert_eq!(controller.current().unwrap().slug, "motteandbailey");
    assert_eq!(history.title, format!("Motte and Bailey - {DEFAULT_TITLE}"));
    assert_eq!(history.entries.len(), 1);

    history.run(&mut controller, NavEvent::Key(NavKey::Next));
    assert_eq!(controller.current().unwrap().slug, "strawman");
    assert_eq!(history.current().path, "/strawman");

    history.run(&mut controller, NavEvent::Key(NavKey::Home));
    assert_eq!(controller.view(), View::Home);
    assert_eq!(history.current().path, "/");
    assert_eq!(history.title, DEFAULT_TITLE);

    let grid: Vec<_> = controller
        .collection()
        .iter()
        .map(|f| f.slug.as_str())
        .collect();
    assert_eq!(grid, vec!["strawman", "motteandbailey"]);
}

#[test]
fn back_after_two_opens_restores_first_without_new_entry() {
    let collection = two_items();
    let mut history = SessionHistory::starting_at("/");
    let mut controller = Controller::new(Rc::clone(&collection), BasePath::root(), "");
    let address = history.current();
    history.run(&mut controller, NavEvent::Loaded {
        address,
        marker: None,
    });

    history.run(&mut controller, NavEvent::OpenItem("strawman".into()));
    history.run(&mut controller, NavEvent::OpenItem("motteandbailey".into()));
    assert_eq!(history.entries.len(), 3);

    let popped = history.back();
    history.run(&mut controller, NavEvent::HistoryPopped(popped));
    assert_eq!(controller.current().unwrap().slug, "strawman");
    assert_eq!(controller.displayed_path(), "/strawman");
    assert_eq!(history.entries.len(), 3);
    assert_eq!(history.index, 1);
    assert_eq!(history.entries[1].1.as_deref(), Some("strawman"));

    let popped = history.back();
    history.run(&mut controller, NavEvent::HistoryPopped(popped));
    assert_eq!(controller.view(), View::Home);

    let popped = history.forward();
    history.run(&mut controller, NavEvent::HistoryPopped(popped));
    assert_eq!(controller.current().unwrap().slug, "strawman");
    assert_eq!(history.entries.len(), 3);
}

#[test]
fn entering_detail_scrolls_to_top() {
    let collection = two_items();
    let mut history = SessionHistory::starting_at("/");
    let mut controller = Controller::new(collection, BasePath::root(), "");
    history.run(&mut controller, NavEvent::OpenItem("strawman".into()));
    history.run(&mut controller, NavEvent::NavigateNext);
    assert_eq!(history.scrolls, 2);
    history.run(&mut controller, NavEvent::GoHome);
    assert_eq!(history.scrolls, 2);
}

#[derive(Default)]
struct OffscreenField {
    attached: Vec<String>,
    removed: usize,
}

impl SelectionCopier for OffscreenField {
    fn attach(&mut self, text: &str) -> Result<(), CopyError> {
        self.attached.push(text.to_string());
        Ok(())
    }

    fn select_and_copy(&mut self) -> Result<(), CopyError> {
        Err(CopyError::Rejected("copy command disabled".into()))
    }

    fn detach(&mut self) {
        self.attached.pop();
        self.removed += 1;
    }
}

#[test]
fn copy_link_with_failing_clipboard_uses_fallback_and_notifies_once() {
    let collection = two_items();
    let mut history = SessionHistory::starting_at("/");
    let mut controller = Controller::new(collection, BasePath::root(), "https://example.org");
    history.run(&mut controller, NavEvent::OpenItem("strawman".into()));

    let leftover = history.run(&mut controller, NavEvent::CopyLinkRequested);
    let [Effect::CopyToClipboard(url)] = leftover.as_slice() else {
        panic!("expected a clipboard effect, got {leftover:?}");
    };
    assert_eq!(url, "https://example.org/strawman");

    let mut field = OffscreenField::default();
    let mut fallback_ran = false;
    let outcome = resolve_copy(Err(CopyError::Rejected("permission".into())), || {
        fallback_ran = true;
        copy_via_selection(&mut field, url)
    });
    let mut notices = NoticeBoard::new();
    notices.show(outcome.message(), outcome.tone());

    assert!(fallback_ran);
    assert!(field.attached.is_empty());
    assert_eq!(field.removed, 1);
    assert_eq!(outcome, CopyOutcome::Failed);
    assert_eq!(notices.len(), 1);
    assert_ne!(outcome, CopyOutcome::Copied(CopyMethod::Clipboard));
}
