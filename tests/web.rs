#![cfg(web_platform)]

// From the project root: wasm-pack test --firefox --headless

use std::cell::RefCell;
use std::rc::Rc;

use element_visibility::web::{describe_element, log_entries, observe, DEFAULT_TARGET};
use element_visibility::{IntersectionEntry, ObserverError, ObserverOptions, Root, Threshold};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::Element;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn insert_target(id: &str) -> Element {
    let document = document();
    let element = document.create_element("div").unwrap();
    element.set_id(id);
    element.set_class_name("card");
    document.body().unwrap().append_child(&element).unwrap();
    element
}

#[wasm_bindgen_test]
fn observes_present_element() {
    let element = insert_target(DEFAULT_TARGET.trim_start_matches('#'));
    assert_eq!(describe_element(&element), "div#my-element.card");

    let options = ObserverOptions::default().with_threshold(Threshold::list([0.0, 1.0]).unwrap());
    let handle = observe(DEFAULT_TARGET, &options, |_| ()).unwrap();
    drop(handle);

    element.remove();
}

async fn sleep(millis: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
async fn delivers_entries_for_visible_element() {
    let element = insert_target(DEFAULT_TARGET.trim_start_matches('#'));
    element
        .set_attribute("style", "position: fixed; top: 0; left: 0; width: 10px; height: 10px;")
        .unwrap();

    let seen = Rc::new(RefCell::new(Vec::<(String, bool)>::new()));
    let handle = observe(DEFAULT_TARGET, &ObserverOptions::default(), {
        let seen = Rc::clone(&seen);
        move |entries: Vec<IntersectionEntry<Element>>| {
            seen.borrow_mut().extend(entries.iter().map(|entry| {
                (describe_element(&entry.target).to_string(), entry.is_intersecting)
            }));
            log_entries(entries);
        }
    })
    .unwrap();

    // Nothing is delivered synchronously.
    assert!(seen.borrow().is_empty());

    for _ in 0..40 {
        if !seen.borrow().is_empty() {
            break;
        }
        sleep(25).await;
    }

    assert_eq!(seen.borrow().as_slice(), [("div#my-element.card".to_owned(), true)]);

    drop(handle);
    element.remove();
}

#[wasm_bindgen_test]
fn missing_target_is_reported() {
    let err = observe("#does-not-exist", &ObserverOptions::default(), |_| ()).unwrap_err();
    assert!(matches!(err, ObserverError::TargetNotFound { selector } if selector == "#does-not-exist"));
}

#[wasm_bindgen_test]
fn missing_root_is_reported() {
    let element = insert_target("observed-with-root");

    let options = ObserverOptions::default().with_root(Root::Selector("#no-root".into()));
    let err = observe("#observed-with-root", &options, |_| ()).unwrap_err();
    assert!(matches!(err, ObserverError::RootNotFound { .. }));

    element.remove();
}

#[wasm_bindgen_test]
fn observes_inside_root_element() {
    let root = insert_target("scroll-root");
    let child = document().create_element("div").unwrap();
    child.set_id("inside-root");
    root.append_child(&child).unwrap();

    let options = ObserverOptions::default()
        .with_root(Root::Selector("#scroll-root".into()))
        .with_root_margin("8px 0PX".parse().unwrap());
    let handle = observe("#inside-root", &options, |_| ()).unwrap();
    drop(handle);

    root.remove();
}

#[wasm_bindgen_test]
fn invalid_selector_is_a_host_error() {
    let err = observe("#", &ObserverOptions::default(), |_| ()).unwrap_err();
    assert!(matches!(err, ObserverError::Host(_)));
}
