//! The notifications delivered to an observer's callback.

use std::fmt::Write;

use dpi::{LogicalPosition, LogicalSize};
use smol_str::SmolStr;

/// An axis-aligned rectangle in CSS pixels, relative to the viewport.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub position: LogicalPosition<f64>,
    pub size: LogicalSize<f64>,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { position: LogicalPosition::new(x, y), size: LogicalSize::new(width, height) }
    }

    pub fn area(&self) -> f64 {
        self.size.width * self.size.height
    }

    pub fn is_empty(&self) -> bool {
        self.size.width <= 0.0 || self.size.height <= 0.0
    }
}

/// A single change in how a target intersects the observer's root.
///
/// `T` identifies the target: a `web_sys::Element` in the browser, or anything else that names an
/// element when entries are built by hand.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry<T> {
    pub target: T,
    /// Whether the target crossed into the root at one of the configured thresholds.
    pub is_intersecting: bool,
    /// The fraction of the target's area inside the root, from `0.0` to `1.0`.
    pub intersection_ratio: f64,
    /// Milliseconds since the time origin at which the change was recorded.
    pub time: f64,
    pub bounding_client_rect: Rect,
    pub intersection_rect: Rect,
    /// `None` when the target and root are in different origins.
    pub root_bounds: Option<Rect>,
}

impl<T> IntersectionEntry<T> {
    /// An entry with only the fields the visibility callback looks at.
    pub fn new(target: T, is_intersecting: bool) -> Self {
        Self {
            target,
            is_intersecting,
            intersection_ratio: if is_intersecting { 1.0 } else { 0.0 },
            time: 0.0,
            bounding_client_rect: Rect::default(),
            intersection_rect: Rect::default(),
            root_bounds: None,
        }
    }

    /// Replace the target, keeping the rest of the entry.
    pub fn map_target<U>(self, f: impl FnOnce(T) -> U) -> IntersectionEntry<U> {
        IntersectionEntry {
            target: f(self.target),
            is_intersecting: self.is_intersecting,
            intersection_ratio: self.intersection_ratio,
            time: self.time,
            bounding_client_rect: self.bounding_client_rect,
            intersection_rect: self.intersection_rect,
            root_bounds: self.root_bounds,
        }
    }
}

/// A short CSS-selector-like name for an element, e.g. `div#my-element.card.wide`.
///
/// `class_name` is the element's space-separated `class` attribute.
pub fn describe_target(tag_name: &str, id: &str, class_name: &str) -> SmolStr {
    let mut name = tag_name.to_ascii_lowercase();
    if !id.is_empty() {
        name.push('#');
        name.push_str(id);
    }
    for class in class_name.split_ascii_whitespace() {
        let _ = write!(name, ".{class}");
    }
    SmolStr::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_area() {
        assert_eq!(Rect::new(10.0, 20.0, 4.0, 2.5).area(), 10.0);
        assert!(Rect::default().is_empty());
        assert!(!Rect::new(0.0, 0.0, 1.0, 1.0).is_empty());
    }

    #[test]
    fn target_names() {
        assert_eq!(describe_target("DIV", "my-element", ""), "div#my-element");
        assert_eq!(describe_target("SECTION", "", "  card  wide "), "section.card.wide");
        assert_eq!(describe_target("img", "hero", "lazy"), "img#hero.lazy");
    }

    #[test]
    fn map_target_keeps_geometry() {
        let mut entry = IntersectionEntry::new(7u32, true);
        entry.intersection_rect = Rect::new(0.0, 0.0, 3.0, 3.0);

        let mapped = entry.clone().map_target(|id| format!("#item-{id}"));
        assert_eq!(mapped.target, "#item-7");
        assert!(mapped.is_intersecting);
        assert_eq!(mapped.intersection_rect, entry.intersection_rect);
    }
}
