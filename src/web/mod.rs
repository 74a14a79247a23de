//! Observation setup against the browser's `IntersectionObserver`.

mod intersection_handle;
#[cfg(feature = "start")]
mod start;

use smol_str::SmolStr;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

pub use self::intersection_handle::IntersectionObserverHandle;
#[cfg(feature = "start")]
pub use self::start::{init_logging, start};
use crate::entry::{describe_target, IntersectionEntry};
use crate::error::ObserverError;
use crate::options::{ObserverOptions, Root};
use crate::visibility::{self, VisibilityChange};

/// The element observed by the `start` entry point.
pub const DEFAULT_TARGET: &str = "#my-element";

/// Observe the first element matching `selector`.
///
/// `callback` runs asynchronously, once per batch of entries the browser delivers.
pub fn observe<F>(
    selector: &str,
    options: &ObserverOptions,
    callback: F,
) -> Result<IntersectionObserverHandle, ObserverError>
where
    F: 'static + FnMut(Vec<IntersectionEntry<Element>>),
{
    let document = document()?;

    let target = query(&document, selector)?
        .ok_or_else(|| ObserverError::TargetNotFound { selector: selector.to_owned() })?;

    let root = match &options.root {
        Root::Viewport => None,
        Root::Selector(selector) => Some(
            query(&document, selector)?
                .ok_or_else(|| ObserverError::RootNotFound { selector: selector.clone() })?,
        ),
    };

    tracing::debug!(
        "observing {} with root margin `{}` and threshold {:?}",
        describe_element(&target),
        options.root_margin,
        options.threshold.values(),
    );

    IntersectionObserverHandle::new(&target, root.as_ref(), options, callback)
}

/// The visibility callback: logs one line per entry.
pub fn log_entries(entries: Vec<IntersectionEntry<Element>>) {
    visibility::dispatch(entries, |change| {
        visibility::log_change(VisibilityChange {
            target: describe_element(&change.target),
            visibility: change.visibility,
        })
    });
}

pub fn describe_element(element: &Element) -> SmolStr {
    describe_target(&element.tag_name(), &element.id(), &element.class_name())
}

fn document() -> Result<Document, ObserverError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| host_error!(JsValue::from_str("no document in this context")).into())
}

fn query(document: &Document, selector: &str) -> Result<Option<Element>, ObserverError> {
    document.query_selector(selector).map_err(|e| host_error!(e).into())
}

/// Best-effort text of a thrown JS value.
pub(crate) fn js_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        String::from(error.message())
    } else if let Some(message) = value.as_string() {
        message
    } else {
        format!("{value:?}")
    }
}
