//! Classification of intersection entries into visibility transitions.

use std::fmt;

use crate::entry::IntersectionEntry;

/// Whether a target is inside the observer's root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    pub fn from_intersecting(is_intersecting: bool) -> Self {
        if is_intersecting {
            Visibility::Visible
        } else {
            Visibility::Hidden
        }
    }

    pub fn is_visible(self) -> bool {
        self == Visibility::Visible
    }
}

/// A target together with the visibility it just transitioned to.
///
/// The [`Display`](fmt::Display) implementation is the log line for the transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityChange<T> {
    pub target: T,
    pub visibility: Visibility,
}

impl<T> VisibilityChange<T> {
    pub fn classify(entry: IntersectionEntry<T>) -> Self {
        Self { visibility: Visibility::from_intersecting(entry.is_intersecting), target: entry.target }
    }
}

impl<T: fmt::Display> fmt::Display for VisibilityChange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.visibility {
            Visibility::Visible => write!(f, "Element is visible: {}", self.target),
            Visibility::Hidden => write!(f, "Element is not visible: {}", self.target),
        }
    }
}

/// Classify every entry and hand the result to `sink`, one change per entry and in order.
pub fn dispatch<T, I, F>(entries: I, mut sink: F)
where
    I: IntoIterator<Item = IntersectionEntry<T>>,
    F: FnMut(VisibilityChange<T>),
{
    for entry in entries {
        sink(VisibilityChange::classify(entry));
    }
}

/// Log a transition at `INFO` level.
pub fn log_change<T: fmt::Display>(change: VisibilityChange<T>) {
    tracing::info!("{change}");
}
