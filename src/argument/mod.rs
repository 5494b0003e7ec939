mod numbers;

use crate::error::Result;
use crate::parser::ArgumentParser;
use crate::provider::Suggestions;
use crate::InputQueue;
use log::debug;
use std::fmt;

pub use numbers::*;

/// Associates a value type with the parser used for it when nothing else is
/// configured.
pub trait Argument: Sized {
    type Parser: Default;
}

/// A named, immutable argument of a command, binding a parser to its metadata.
///
/// Built once through an [`ArgumentBuilder`](crate::ArgumentBuilder) and
/// reused for every parse.
pub struct CommandArgument<C, P> {
    name: String,
    required: bool,
    default_value: Option<String>,
    parser: P,
    suggestions: Option<Suggestions<C>>,
}

impl<C, P> CommandArgument<C, P>
where
    P: ArgumentParser<C>,
{
    pub(crate) fn new(
        name: String,
        required: bool,
        default_value: Option<String>,
        parser: P,
        suggestions: Option<Suggestions<C>>,
    ) -> Self {
        Self {
            name,
            required,
            default_value,
            parser,
            suggestions,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The textual default used when an optional argument gets no input.
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    pub fn has_default_value(&self) -> bool {
        self.default_value.is_some()
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }

    pub fn suggestions_provider(&self) -> Option<&Suggestions<C>> {
        self.suggestions.as_ref()
    }

    /// The name of the type produced by the parser, e.g. `f64`.
    pub fn value_type(&self) -> &'static str {
        std::any::type_name::<P::Output>()
    }

    /// Parses the next token with this argument's parser.
    pub fn parse(&self, ctx: &C, input: &mut InputQueue) -> Result<P::Output> {
        self.parser.parse(ctx, input)
    }

    /// Parses the next token, falling back to the default value when the
    /// queue is exhausted.
    ///
    /// Returns `Ok(None)` only for an optional argument without a default.
    /// A required argument without input fails with `NoInputProvided`.
    pub fn parse_or_default(&self, ctx: &C, input: &mut InputQueue) -> Result<Option<P::Output>> {
        if !input.is_empty() {
            return self.parser.parse(ctx, input).map(Some);
        }
        match &self.default_value {
            Some(default) => {
                debug!("argument '{}' has no input, using default '{}'", self.name, default);
                let mut default_input = InputQueue::new();
                default_input.push(default.as_str());
                self.parser.parse(ctx, &mut default_input).map(Some)
            }
            None if self.required => self.parser.parse(ctx, input).map(Some),
            None => Ok(None),
        }
    }

    /// Completions for `partial`, from the configured provider or else the
    /// parser itself.
    pub fn suggestions(&self, ctx: &C, partial: &str) -> Vec<String> {
        match &self.suggestions {
            Some(provider) => provider.suggest(ctx, partial),
            None => self.parser.suggestions(ctx, partial),
        }
    }

    pub fn is_context_free(&self) -> bool {
        self.parser.is_context_free()
    }
}

impl<C, P: Clone> Clone for CommandArgument<C, P> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            required: self.required,
            default_value: self.default_value.clone(),
            parser: self.parser.clone(),
            suggestions: self.suggestions.clone(),
        }
    }
}

impl<C, P: fmt::Debug> fmt::Debug for CommandArgument<C, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandArgument")
            .field("name", &self.name)
            .field("required", &self.required)
            .field("default_value", &self.default_value)
            .field("parser", &self.parser)
            .field("suggestions", &self.suggestions)
            .finish()
    }
}
