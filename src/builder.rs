use crate::argument::{CommandArgument, DoubleArgument};
use crate::parser::ArgumentParser;
use crate::parsers::DoubleParser;
use crate::provider::Suggestions;
use log::warn;

/// Collects the metadata shared by every argument kind.
///
/// Arguments are required unless configured otherwise. Every call to
/// `build` produces a new, independent argument from the current state.
pub struct ArgumentBuilder<C> {
    name: String,
    required: bool,
    default_value: Option<String>,
    suggestions: Option<Suggestions<C>>,
}

impl<C> ArgumentBuilder<C> {
    /// Creates a new `ArgumentBuilder` for an argument called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "argument names must not be empty");
        Self {
            name,
            required: true,
            default_value: None,
            suggestions: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    pub fn as_required(mut self) -> Self {
        self.required = true;
        self.default_value = None;
        self
    }

    pub fn as_optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Makes the argument optional, parsing `default` when no input is left.
    /// An empty `default` means there is none.
    pub fn as_optional_with_default(mut self, default: impl Into<String>) -> Self {
        let default = default.into();
        self.required = false;
        self.default_value = if default.is_empty() { None } else { Some(default) };
        self
    }

    pub fn with_suggestions(mut self, suggestions: Suggestions<C>) -> Self {
        self.suggestions = Some(suggestions);
        self
    }

    /// Finishes the argument with the given parser.
    pub fn build<P>(&self, parser: P) -> CommandArgument<C, P>
    where
        P: ArgumentParser<C>,
    {
        CommandArgument::new(
            self.name.clone(),
            self.required,
            self.default_value.clone(),
            parser,
            self.suggestions.clone(),
        )
    }
}

impl<C> Clone for ArgumentBuilder<C> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            required: self.required,
            default_value: self.default_value.clone(),
            suggestions: self.suggestions.clone(),
        }
    }
}

/// Builds a [`DoubleArgument`]. Both bounds default to the infinities.
pub struct DoubleArgumentBuilder<C> {
    common: ArgumentBuilder<C>,
    min: f64,
    max: f64,
}

impl<C> DoubleArgumentBuilder<C> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            common: ArgumentBuilder::new(name),
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
        }
    }

    pub fn with_min(mut self, min: f64) -> Self {
        self.min = min;
        self
    }

    pub fn with_max(mut self, max: f64) -> Self {
        self.max = max;
        self
    }

    pub fn as_required(mut self) -> Self {
        self.common = self.common.as_required();
        self
    }

    pub fn as_optional(mut self) -> Self {
        self.common = self.common.as_optional();
        self
    }

    pub fn as_optional_with_default(mut self, default: impl Into<String>) -> Self {
        self.common = self.common.as_optional_with_default(default);
        self
    }

    pub fn with_suggestions(mut self, suggestions: Suggestions<C>) -> Self {
        self.common = self.common.with_suggestions(suggestions);
        self
    }

    /// Builds the argument from the configured bounds.
    ///
    /// Bounds are not cross-checked: with `min > max` every number except
    /// `NaN` is rejected.
    pub fn build(&self) -> DoubleArgument<C> {
        if self.min > self.max {
            warn!(
                "argument '{}' has min {} > max {}, it will reject all numbers",
                self.common.name(),
                self.min,
                self.max
            );
        }
        let parser = DoubleParser::new(self.min, self.max);
        DoubleArgument::new(self.common.build(parser))
    }
}

impl<C> Clone for DoubleArgumentBuilder<C> {
    fn clone(&self) -> Self {
        Self {
            common: self.common.clone(),
            min: self.min,
            max: self.max,
        }
    }
}
