//! Log when a DOM element enters or leaves the viewport.
//!
//! In the browser, `web::observe` binds an element to an [`IntersectionObserver`] configured by
//! [`ObserverOptions`], and hands the browser's notifications to a callback as
//! [`IntersectionEntry`] values. The stock callback, `web::log_entries`, classifies each entry
//! and logs one line through [`tracing`]:
//!
//! ```text
//! Element is visible: div#my-element
//! Element is not visible: div#my-element
//! ```
//!
//! With the `start` feature the crate observes `#my-element` as soon as the WebAssembly module is
//! instantiated, writing its logs to the browser console.
//!
//! Everything outside the `web` module is independent of the browser, so the classification and
//! the option parsing can be used and tested natively:
//!
//! ```
//! use element_visibility::visibility::{dispatch, Visibility};
//! use element_visibility::IntersectionEntry;
//!
//! let entries = [true, false].map(|flag| IntersectionEntry::new("div#my-element", flag));
//! let mut seen = Vec::new();
//! dispatch(entries, |change| seen.push(change.visibility));
//! assert_eq!(seen, [Visibility::Visible, Visibility::Hidden]);
//! ```
//!
//! [`IntersectionObserver`]: https://developer.mozilla.org/en-US/docs/Web/API/IntersectionObserver

#[macro_use]
pub mod error;
pub mod entry;
pub mod options;
pub mod visibility;
#[cfg(web_platform)]
pub mod web;

pub use dpi;

pub use crate::entry::{IntersectionEntry, Rect};
pub use crate::error::ObserverError;
pub use crate::options::{ObserverOptions, Root, RootMargin, Threshold};
pub use crate::visibility::{Visibility, VisibilityChange};
