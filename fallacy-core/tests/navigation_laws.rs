use std::rc::Rc;

use fallacy_core::{Address, BasePath, Controller, FallacyCollection, NavEvent, View, resolve_slug};

fn catalogue() -> Rc<FallacyCollection> {
    Rc::new(
        FallacyCollection::from_json(include_str!("../../fallacy-web/static/fallacies.json"))
            .expect("bundled catalogue is valid"),
    )
}

fn loaded_at(collection: &Rc<FallacyCollection>, base: &BasePath, url: &str) -> Controller {
    let mut controller = Controller::new(Rc::clone(collection), base.clone(), "");
    controller.handle(NavEvent::Loaded {
        address: Address::parse(url),
        marker: None,
    });
    controller
}

#[test]
fn bundled_catalogue_has_unique_url_safe_slugs() {
    let collection = catalogue();
    assert!(collection.len() >= 2);
    for fallacy in collection.iter() {
        assert!(fallacy_core::data::is_url_safe_slug(&fallacy.slug));
    }
}

#[test]
fn open_by_slug_round_trips_through_displayed_address() {
    let collection = catalogue();
    for base in [BasePath::root(), BasePath::new("/play")] {
        for fallacy in collection.iter() {
            let mut controller = Controller::new(Rc::clone(&collection), base.clone(), "");
            controller.handle(NavEvent::OpenItem(fallacy.slug.clone()));
            let shown = Address::parse(controller.displayed_path());
            assert_eq!(
                resolve_slug(&shown, &base).as_deref(),
                Some(fallacy.slug.as_str())
            );

            let reloaded = loaded_at(&collection, &base, controller.displayed_path());
            assert_eq!(reloaded.current().map(|f| &f.slug), Some(&fallacy.slug));
        }
    }
}

#[test]
fn unknown_slug_is_equivalent_to_no_slug() {
    let collection = catalogue();
    let base = BasePath::root();
    let unknown = loaded_at(&collection, &base, "/definitely-not-here");
    let none = loaded_at(&collection, &base, "/");
    assert_eq!(unknown.view(), View::Home);
    assert_eq!(unknown.view(), none.view());
    assert_eq!(unknown.displayed_path(), none.displayed_path());
    assert_eq!(unknown.title(), none.title());

    let differently_cased = loaded_at(&collection, &base, "/Strawman");
    assert_eq!(differently_cased.view(), View::Home);
}

#[test]
fn next_then_previous_is_identity_for_every_item() {
    let collection = catalogue();
    for fallacy in collection.iter() {
        let mut controller = Controller::new(Rc::clone(&collection), BasePath::root(), "");
        controller.handle(NavEvent::OpenItem(fallacy.slug.clone()));
        let start = controller.view();

        controller.handle(NavEvent::NavigateNext);
        controller.handle(NavEvent::NavigatePrevious);
        assert_eq!(controller.view(), start);

        controller.handle(NavEvent::NavigatePrevious);
        controller.handle(NavEvent::NavigateNext);
        assert_eq!(controller.view(), start);
    }
}

#[test]
fn navigation_wraps_at_both_ends() {
    let collection = catalogue();
    let last = collection.len() - 1;

    let mut controller = Controller::new(Rc::clone(&collection), BasePath::root(), "");
    controller.handle(NavEvent::OpenItem(collection.get(0).unwrap().slug.clone()));
    controller.handle(NavEvent::NavigatePrevious);
    assert_eq!(controller.view(), View::Detail(last));

    controller.handle(NavEvent::NavigateNext);
    assert_eq!(controller.view(), View::Detail(0));
}

#[test]
fn every_accepted_form_resolves_to_the_same_item() {
    let collection = catalogue();
    let base = BasePath::new("/play");
    for url in [
        "/play/kafkatrap",
        "/play/?slug=kafkatrap",
        "/play/?/kafkatrap",
        "/play/#/kafkatrap",
        "/play/index.html#/kafkatrap",
    ] {
        let controller = loaded_at(&collection, &base, url);
        assert_eq!(
            controller.current().map(|f| f.slug.as_str()),
            Some("kafkatrap"),
            "{url}"
        );
        assert_eq!(controller.displayed_path(), "/play/kafkatrap", "{url}");
    }
}
