use std::{error, fmt};

/// An error that may be generated when configuring or starting an observation.
#[derive(Debug)]
pub enum ObserverError {
    /// A threshold was not a finite number in `[0, 1]`.
    InvalidThreshold(f64),
    /// The root margin could not be parsed.
    InvalidRootMargin(RootMarginError),
    /// No element matched the target selector.
    TargetNotFound { selector: String },
    /// No element matched the root selector.
    RootNotFound { selector: String },
    /// The browser rejected the operation.
    Host(HostError),
}

/// The error type for a root margin that is not a valid CSS margin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootMarginError {
    input: String,
    reason: RootMarginErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RootMarginErrorKind {
    Empty,
    TooManyValues,
    InvalidLength,
}

/// The error type for when the browser throws while performing the requested operation.
#[derive(Debug)]
pub struct HostError {
    line: u32,
    file: &'static str,
    message: String,
}

impl From<RootMarginError> for ObserverError {
    fn from(value: RootMarginError) -> Self {
        Self::InvalidRootMargin(value)
    }
}

impl From<HostError> for ObserverError {
    fn from(value: HostError) -> Self {
        Self::Host(value)
    }
}

impl RootMarginError {
    pub(crate) fn new(input: &str, reason: RootMarginErrorKind) -> Self {
        Self { input: input.to_owned(), reason }
    }

    /// The rejected margin string.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl HostError {
    #[allow(dead_code)]
    pub(crate) fn new(line: u32, file: &'static str, message: String) -> HostError {
        HostError { line, file, message }
    }

    /// The message reported by the browser.
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[allow(unused_macros)]
macro_rules! host_error {
    ($error:expr) => {{
        crate::error::HostError::new(line!(), file!(), crate::web::js_message(&$error))
    }};
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.pad(&format!("host error at {}:{}: {}", self.file, self.line, self.message))
    }
}

impl fmt::Display for RootMarginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        let reason = match self.reason {
            RootMarginErrorKind::Empty => "expected at least one length",
            RootMarginErrorKind::TooManyValues => "expected at most four lengths",
            RootMarginErrorKind::InvalidLength => "lengths must be in pixels or percent",
        };
        write!(f, "invalid root margin `{}`: {reason}", self.input)
    }
}

impl fmt::Display for ObserverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            ObserverError::InvalidThreshold(value) => {
                write!(f, "threshold {value} is outside the range [0, 1]")
            },
            ObserverError::InvalidRootMargin(e) => e.fmt(f),
            ObserverError::TargetNotFound { selector } => {
                write!(f, "no element matches the target selector `{selector}`")
            },
            ObserverError::RootNotFound { selector } => {
                write!(f, "no element matches the root selector `{selector}`")
            },
            ObserverError::Host(e) => e.fmt(f),
        }
    }
}

impl error::Error for RootMarginError {}
impl error::Error for HostError {}
impl error::Error for ObserverError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ObserverError::InvalidRootMargin(e) => Some(e),
            ObserverError::Host(e) => Some(e),
            _ => None,
        }
    }
}
