use crate::error::Result;
use crate::InputQueue;
use std::fmt;

/// Identifies the parser implementation which produced a value or an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParserId {
    name: &'static str,
}

impl ParserId {
    pub fn of<P: ?Sized>() -> Self {
        Self {
            name: std::any::type_name::<P>(),
        }
    }

    /// The fully qualified type name of the parser.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The type name without its module path or generic parameters.
    pub fn short_name(&self) -> &'static str {
        let base = self.name.split('<').next().unwrap_or(self.name);
        base.rsplit("::").next().unwrap_or(base)
    }
}

impl fmt::Display for ParserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Denotes a type which can parse a command _argument_ from a queue of tokens.
///
/// `C` is the context type commands are executed with. It is passed through
/// to the parser untouched; most parsers ignore it.
///
/// Implementations must uphold the following:
/// * On success, exactly the tokens making up the value are removed
/// from `input`.
/// * On failure, `input` is left untouched, so another parser may
/// try the same tokens.
/// * Malformed input is reported through the returned error, never
/// by panicking.
pub trait ArgumentParser<C> {
    type Output;

    fn parse(&self, ctx: &C, input: &mut InputQueue) -> Result<Self::Output>;

    /// Returns whether the result of `parse` depends only on the tokens,
    /// and not on `ctx`. Context free results may be cached or reordered.
    fn is_context_free(&self) -> bool {
        false
    }

    /// Completions for a partially typed token. Empty by default.
    fn suggestions(&self, _ctx: &C, _partial: &str) -> Vec<String> {
        Vec::new()
    }

    fn id(&self) -> ParserId {
        ParserId::of::<Self>()
    }
}

impl<C, P> ArgumentParser<C> for Box<P>
where
    P: ArgumentParser<C> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, ctx: &C, input: &mut InputQueue) -> Result<Self::Output> {
        (**self).parse(ctx, input)
    }

    fn is_context_free(&self) -> bool {
        (**self).is_context_free()
    }

    fn suggestions(&self, ctx: &C, partial: &str) -> Vec<String> {
        (**self).suggestions(ctx, partial)
    }

    fn id(&self) -> ParserId {
        (**self).id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArgumentParseError;

    struct Word;

    impl ArgumentParser<()> for Word {
        type Output = String;

        fn parse(&self, _ctx: &(), input: &mut InputQueue) -> Result<String> {
            input.remove().ok_or(ArgumentParseError::NoInputProvided {
                parser: self.id(),
            })
        }
    }

    #[test]
    fn short_name() {
        let id = ParserId::of::<Word>();
        assert_eq!(id.short_name(), "Word");
        assert_eq!(id.to_string(), "Word");
        assert!(id.name().ends_with("::Word"));

        let id = ParserId::of::<crate::parsers::Param<i32>>();
        assert_eq!(id.short_name(), "Param");
    }

    #[test]
    fn defaults() {
        let parser = Word;
        assert!(!parser.is_context_free());
        assert!(parser.suggestions(&(), "wo").is_empty());
    }

    #[test]
    fn boxed() {
        let parser: Box<dyn ArgumentParser<(), Output = String>> = Box::new(Word);
        let mut input = InputQueue::from("hello world");
        assert_eq!(parser.parse(&(), &mut input).unwrap(), "hello");
        assert_eq!(parser.id(), ParserId::of::<Word>());
        assert_eq!(input.len(), 1);
    }
}
