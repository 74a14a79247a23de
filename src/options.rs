//! Configuration of an intersection observer.
//!
//! These mirror the fields of the browser's [`IntersectionObserverInit`] dictionary and are
//! validated up front, so that a configuration the browser would reject with a `SyntaxError` or a
//! `RangeError` never reaches it.
//!
//! [`IntersectionObserverInit`]: https://developer.mozilla.org/en-US/docs/Web/API/IntersectionObserver/IntersectionObserver#options

use std::fmt;
use std::str::FromStr;

use crate::error::{ObserverError, RootMarginError, RootMarginErrorKind};

/// The area against which the target's visibility is measured.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Root {
    /// The top-level document's viewport.
    #[default]
    Viewport,
    /// The first element matching this CSS selector. It must be an ancestor of the target.
    Selector(String),
}

/// A single side of a [`RootMargin`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f64),
    Percent(f64),
}

impl Length {
    fn parse(token: &str) -> Option<Self> {
        if token == "0" {
            return Some(Length::Px(0.0));
        }

        if let Some(number) = strip_unit(token, "px") {
            parse_number(number).map(Length::Px)
        } else if let Some(number) = token.strip_suffix('%') {
            parse_number(number).map(Length::Percent)
        } else {
            None
        }
    }
}

// CSS units are ASCII case-insensitive.
fn strip_unit<'a>(token: &'a str, unit: &str) -> Option<&'a str> {
    let split = token.len().checked_sub(unit.len())?;
    let (number, suffix) = (token.get(..split)?, token.get(split..)?);
    suffix.eq_ignore_ascii_case(unit).then_some(number)
}

/// Parse a CSS `<number>`: an optional sign, digits with an optional fraction, and an optional
/// exponent. Unlike `f64::from_str` this rejects `5.`, `1.e2`, `inf` and `NaN`.
fn parse_number(number: &str) -> Option<f64> {
    let digits = |s: &str| s.bytes().take_while(u8::is_ascii_digit).count();

    let unsigned = number.strip_prefix(['+', '-']).unwrap_or(number);
    let integer = digits(unsigned);
    let mut rest = &unsigned[integer..];
    let mut fraction = 0;
    if let Some(after_dot) = rest.strip_prefix('.') {
        fraction = digits(after_dot);
        if fraction == 0 {
            return None;
        }
        rest = &after_dot[fraction..];
    }
    if integer == 0 && fraction == 0 {
        return None;
    }
    if let Some(exponent) = rest.strip_prefix(['e', 'E']) {
        let exponent = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
        if exponent.is_empty() || digits(exponent) != exponent.len() {
            return None;
        }
    } else if !rest.is_empty() {
        return None;
    }

    number.parse::<f64>().ok().filter(|value| value.is_finite())
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(value) => write!(f, "{value}px"),
            Length::Percent(value) => write!(f, "{value}%"),
        }
    }
}

/// Offsets that grow (or shrink, when negative) the root's bounding box before intersections are
/// computed.
///
/// Parsed from CSS margin shorthand: one to four lengths, applied to top, right, bottom and left
/// in the usual CSS order.
///
/// ```
/// use element_visibility::options::{Length, RootMargin};
///
/// let margin: RootMargin = "10px 5%".parse().unwrap();
/// assert_eq!(margin.top, Length::Px(10.0));
/// assert_eq!(margin.left, Length::Percent(5.0));
/// assert_eq!(margin.to_string(), "10px 5% 10px 5%");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootMargin {
    pub top: Length,
    pub right: Length,
    pub bottom: Length,
    pub left: Length,
}

impl RootMargin {
    pub const ZERO: Self = Self::uniform(Length::Px(0.0));

    pub const fn uniform(length: Length) -> Self {
        Self { top: length, right: length, bottom: length, left: length }
    }
}

impl Default for RootMargin {
    fn default() -> Self {
        Self::ZERO
    }
}

impl FromStr for RootMargin {
    type Err = RootMarginError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut lengths = [Length::Px(0.0); 4];
        let mut count = 0;

        for token in input.split_ascii_whitespace() {
            if count == lengths.len() {
                return Err(RootMarginError::new(input, RootMarginErrorKind::TooManyValues));
            }
            lengths[count] = Length::parse(token)
                .ok_or_else(|| RootMarginError::new(input, RootMarginErrorKind::InvalidLength))?;
            count += 1;
        }

        let [a, b, c, d] = lengths;
        let (top, right, bottom, left) = match count {
            0 => return Err(RootMarginError::new(input, RootMarginErrorKind::Empty)),
            1 => (a, a, a, a),
            2 => (a, b, a, b),
            3 => (a, b, c, b),
            _ => (a, b, c, d),
        };

        Ok(Self { top, right, bottom, left })
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RootMargin {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for RootMargin {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let input = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        input.parse().map_err(serde::de::Error::custom)
    }
}

/// The visible fraction(s) of the target at which the observer reports.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "ThresholdRepr", into = "ThresholdRepr"))]
pub struct Threshold(Vec<f64>);

impl Threshold {
    /// Report only once the target is fully visible.
    pub fn full() -> Self {
        Self(vec![1.0])
    }

    pub fn new(value: f64) -> Result<Self, ObserverError> {
        Self::list([value])
    }

    /// Build a threshold from several values.
    ///
    /// The values are sorted, and an empty list is equivalent to `[0.0]`, matching what the
    /// browser does with the same input.
    pub fn list<I: IntoIterator<Item = f64>>(values: I) -> Result<Self, ObserverError> {
        let mut values = values
            .into_iter()
            .map(|value| {
                if value.is_finite() && (0.0..=1.0).contains(&value) {
                    Ok(value)
                } else {
                    Err(ObserverError::InvalidThreshold(value))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        if values.is_empty() {
            values.push(0.0);
        }
        values.sort_by(f64::total_cmp);

        Ok(Self(values))
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::full()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum ThresholdRepr {
    Single(f64),
    List(Vec<f64>),
}

#[cfg(feature = "serde")]
impl TryFrom<ThresholdRepr> for Threshold {
    type Error = ObserverError;

    fn try_from(repr: ThresholdRepr) -> Result<Self, Self::Error> {
        match repr {
            ThresholdRepr::Single(value) => Threshold::new(value),
            ThresholdRepr::List(values) => Threshold::list(values),
        }
    }
}

#[cfg(feature = "serde")]
impl From<Threshold> for ThresholdRepr {
    fn from(threshold: Threshold) -> Self {
        if let [value] = threshold.0[..] {
            ThresholdRepr::Single(value)
        } else {
            ThresholdRepr::List(threshold.0)
        }
    }
}

/// The full observer configuration.
///
/// The default observes the viewport with no margin and reports when the target becomes fully
/// visible or stops being fully visible.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ObserverOptions {
    pub root: Root,
    pub root_margin: RootMargin,
    pub threshold: Threshold,
}

impl ObserverOptions {
    pub fn with_root(mut self, root: Root) -> Self {
        self.root = root;
        self
    }

    pub fn with_root_margin(mut self, root_margin: RootMargin) -> Self {
        self.root_margin = root_margin;
        self
    }

    pub fn with_threshold(mut self, threshold: Threshold) -> Self {
        self.threshold = threshold;
        self
    }
}
