use super::{Argument, CommandArgument};
use crate::builder::DoubleArgumentBuilder;
use crate::parsers::DoubleParser;
use std::ops::Deref;

/// A `f64` argument bounded to `[min, max]`.
///
/// Dereferences to the underlying [`CommandArgument`] for parsing and the
/// common metadata.
#[derive(Debug)]
pub struct DoubleArgument<C> {
    argument: CommandArgument<C, DoubleParser>,
    min: f64,
    max: f64,
}

impl<C> DoubleArgument<C> {
    pub(crate) fn new(argument: CommandArgument<C, DoubleParser>) -> Self {
        let (min, max) = (argument.parser().min(), argument.parser().max());
        Self { argument, min, max }
    }

    pub fn builder(name: impl Into<String>) -> DoubleArgumentBuilder<C> {
        DoubleArgumentBuilder::new(name)
    }

    /// A required argument accepting any `f64`.
    pub fn of(name: impl Into<String>) -> Self {
        Self::builder(name).as_required().build()
    }

    /// An optional argument without a default value.
    pub fn optional(name: impl Into<String>) -> Self {
        Self::builder(name).as_optional().build()
    }

    /// An optional argument which falls back to `default`.
    pub fn optional_with_default(name: impl Into<String>, default: f64) -> Self {
        Self::builder(name)
            .as_optional_with_default(default.to_string())
            .build()
    }

    /// The smallest accepted value.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// The largest accepted value.
    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn into_inner(self) -> CommandArgument<C, DoubleParser> {
        self.argument
    }
}

impl<C> Deref for DoubleArgument<C> {
    type Target = CommandArgument<C, DoubleParser>;

    fn deref(&self) -> &Self::Target {
        &self.argument
    }
}

impl<C> Clone for DoubleArgument<C> {
    fn clone(&self) -> Self {
        Self {
            argument: self.argument.clone(),
            min: self.min,
            max: self.max,
        }
    }
}

impl Argument for f64 {
    type Parser = DoubleParser;
}
