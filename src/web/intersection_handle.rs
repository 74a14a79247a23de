use js_sys::Array;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    DomRectReadOnly, Element, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::entry::{IntersectionEntry, Rect};
use crate::error::ObserverError;
use crate::options::ObserverOptions;

/// A live observation of one element.
///
/// Dropping the handle disconnects the observer. Use [`forget`](Self::forget) to keep observing
/// for the lifetime of the page.
#[must_use = "dropping the handle stops the observation"]
pub struct IntersectionObserverHandle {
    observer: IntersectionObserver,
    _closure: Closure<dyn FnMut(Array)>,
}

impl IntersectionObserverHandle {
    pub(super) fn new<F>(
        element: &Element,
        root: Option<&Element>,
        options: &ObserverOptions,
        mut callback: F,
    ) -> Result<Self, ObserverError>
    where
        F: 'static + FnMut(Vec<IntersectionEntry<Element>>),
    {
        let closure = Closure::new(move |entries: Array| {
            let entries = entries
                .iter()
                .map(|entry| convert_entry(entry.unchecked_into()))
                .collect::<Vec<_>>();
            callback(entries);
        });

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&options.root_margin.to_string());
        init.set_threshold(&threshold_value(options.threshold.values()));
        init.set_root(root);

        let observer =
            IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)
                .map_err(|e| host_error!(e))?;
        observer.observe(element);

        Ok(Self { observer, _closure: closure })
    }

    /// Keep the observation alive until the page unloads.
    pub fn forget(self) {
        std::mem::forget(self)
    }
}

impl Drop for IntersectionObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect()
    }
}

fn threshold_value(values: &[f64]) -> JsValue {
    match values {
        [value] => JsValue::from_f64(*value),
        values => values.iter().copied().map(JsValue::from_f64).collect::<Array>().into(),
    }
}

fn convert_entry(entry: IntersectionObserverEntry) -> IntersectionEntry<Element> {
    IntersectionEntry {
        target: entry.target(),
        is_intersecting: entry.is_intersecting(),
        intersection_ratio: entry.intersection_ratio(),
        time: entry.time(),
        bounding_client_rect: convert_rect(&entry.bounding_client_rect()),
        intersection_rect: convert_rect(&entry.intersection_rect()),
        root_bounds: entry.root_bounds().as_ref().map(convert_rect),
    }
}

fn convert_rect(rect: &DomRectReadOnly) -> Rect {
    Rect::new(rect.x(), rect.y(), rect.width(), rect.height())
}
