//! Typed command arguments.
//!
//! An [`ArgumentParser`] turns tokens from an [`InputQueue`] into a typed value,
//! reporting rejected input as a structured [`ArgumentParseError`]. A
//! [`CommandArgument`] binds a parser to a name, a required flag, a default
//! value and an optional [`SuggestionProvider`].
//!
//! ```
//! use lieutenant_args::{DoubleArgument, InputQueue};
//!
//! let amount = DoubleArgument::<()>::builder("amount").with_min(0.0).with_max(10.0).build();
//!
//! let mut input = InputQueue::from("2.5 rest");
//! assert_eq!(amount.parse(&(), &mut input).unwrap(), 2.5);
//! assert_eq!(input.peek(), Some("rest"));
//! ```

mod argument;
mod builder;
mod error;
mod input;
mod parser;
pub mod parsers;
mod provider;

pub use argument::{Argument, CommandArgument, DoubleArgument};
pub use builder::{ArgumentBuilder, DoubleArgumentBuilder};
pub use error::{ArgumentParseError, NumberFailure, NumberKind, NumberParseError, Result};
pub use input::InputQueue;
pub use parser::{ArgumentParser, ParserId};
pub use provider::{SuggestionProvider, Suggestions};
