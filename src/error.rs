use crate::parser::ParserId;
use std::fmt;

pub type Result<T> = std::result::Result<T, ArgumentParseError>;

/// An error returned when an argument parser rejects its input.
///
/// There are two kinds of errors every parser may produce:
/// * _Missing input_, when the queue was exhausted where a token was expected.
/// * _Invalid input_, when the head token is not an acceptable value. Numeric
/// parsers report this as [`NumberParseError`], other parsers wrap their own
/// error in `Custom`.
///
/// A failed parse never consumes input, so the offending token is still at
/// the head of the queue when one of these is returned.
///
/// Errors identify the parser but do not hold the context the parse ran
/// with. The caller passed that context in and still owns it, so rendering
/// code should pair the error with it.
#[derive(Debug, thiserror::Error)]
pub enum ArgumentParseError {
    #[error("no input was provided for {parser}")]
    NoInputProvided { parser: ParserId },
    #[error(transparent)]
    Number(#[from] NumberParseError),
    #[error("'{input}' is not a valid value for {parser}: {source}")]
    Custom {
        input: String,
        parser: ParserId,
        #[source]
        source: anyhow::Error,
    },
}

impl ArgumentParseError {
    /// Returns the parser which produced this error.
    pub fn parser(&self) -> ParserId {
        match self {
            ArgumentParseError::NoInputProvided { parser } => *parser,
            ArgumentParseError::Number(err) => err.parser(),
            ArgumentParseError::Custom { parser, .. } => *parser,
        }
    }

    /// Returns the rejected token, if there was one.
    pub fn input(&self) -> Option<&str> {
        match self {
            ArgumentParseError::NoInputProvided { .. } => None,
            ArgumentParseError::Number(err) => Some(err.input()),
            ArgumentParseError::Custom { input, .. } => Some(input),
        }
    }

    pub fn is_no_input(&self) -> bool {
        matches!(self, ArgumentParseError::NoInputProvided { .. })
    }

    /// Returns the numeric diagnostic, if this is one.
    pub fn as_number(&self) -> Option<&NumberParseError> {
        match self {
            ArgumentParseError::Number(err) => Some(err),
            _ => None,
        }
    }
}

/// The primitive number type a [`NumberParseError`] was produced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberKind {
    Double,
}

impl NumberKind {
    /// Human readable name of the number type.
    pub fn name(self) -> &'static str {
        match self {
            NumberKind::Double => "double",
        }
    }
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a token was rejected by a numeric parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberFailure {
    /// The token is not a number literal at all.
    Malformed,
    /// The token is a number, but not inside the accepted range.
    OutOfRange,
}

/// A token could not be parsed as a number inside `[min, max]`.
///
/// Carries everything needed to render a message without re-parsing the
/// input: the raw token, the configured bounds and the number type.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberParseError {
    input: String,
    min: f64,
    max: f64,
    parser: ParserId,
    kind: NumberKind,
    failure: NumberFailure,
}

impl NumberParseError {
    pub(crate) fn new(
        input: impl Into<String>,
        min: f64,
        max: f64,
        parser: ParserId,
        kind: NumberKind,
        failure: NumberFailure,
    ) -> Self {
        Self {
            input: input.into(),
            min,
            max,
            parser,
            kind,
            failure,
        }
    }

    /// Shorthand for a `f64` diagnostic.
    pub(crate) fn double(
        input: impl Into<String>,
        min: f64,
        max: f64,
        parser: ParserId,
        failure: NumberFailure,
    ) -> Self {
        Self::new(input, min, max, parser, NumberKind::Double, failure)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn parser(&self) -> ParserId {
        self.parser
    }

    pub fn kind(&self) -> NumberKind {
        self.kind
    }

    pub fn failure(&self) -> NumberFailure {
        self.failure
    }

    /// Name of the number type, e.g. `"double"`.
    pub fn number_type(&self) -> &'static str {
        self.kind.name()
    }

    /// Whether the lower bound actually constrains the value.
    pub fn has_min(&self) -> bool {
        self.min != f64::NEG_INFINITY
    }

    /// Whether the upper bound actually constrains the value.
    pub fn has_max(&self) -> bool {
        self.max != f64::INFINITY
    }
}

impl fmt::Display for NumberParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a valid {}", self.input, self.kind)?;
        match (self.has_min(), self.has_max()) {
            (true, true) => write!(f, " in the range [{}, {}]", self.min, self.max),
            (true, false) => write!(f, " greater than or equal to {}", self.min),
            (false, true) => write!(f, " less than or equal to {}", self.max),
            (false, false) => Ok(()),
        }
    }
}

impl std::error::Error for NumberParseError {}
