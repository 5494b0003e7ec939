use crate::error::{ArgumentParseError, Result};
use crate::parser::{ArgumentParser, ParserId};
use crate::InputQueue;
use std::marker::PhantomData;
use std::str::FromStr;

/// Parses a single token with the `FromStr` implementation of `T`.
///
/// Suitable for strings, integers and any domain type which can be read
/// from one word. Errors are reported as `ArgumentParseError::Custom`.
#[derive(Debug)]
pub struct Param<T> {
    param: PhantomData<fn() -> T>,
}

impl<T> Clone for Param<T> {
    fn clone(&self) -> Self {
        param()
    }
}

impl<T> Default for Param<T> {
    fn default() -> Self {
        param()
    }
}

impl<C, T> ArgumentParser<C> for Param<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    type Output = T;

    fn parse(&self, _ctx: &C, input: &mut InputQueue) -> Result<T> {
        let head = input.peek().ok_or(ArgumentParseError::NoInputProvided {
            parser: ParserId::of::<Self>(),
        })?;
        match T::from_str(head) {
            Ok(ok) => {
                input.remove();
                Ok(ok)
            }
            Err(err) => Err(ArgumentParseError::Custom {
                input: head.to_owned(),
                parser: ParserId::of::<Self>(),
                source: err.into(),
            }),
        }
    }

    fn is_context_free(&self) -> bool {
        true
    }
}

pub fn param<T>() -> Param<T> {
    Param {
        param: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers() {
        let parser = param::<i32>();
        let mut input = InputQueue::from("-32 x");
        assert_eq!(ArgumentParser::<()>::parse(&parser, &(), &mut input).unwrap(), -32);

        let err = ArgumentParser::<()>::parse(&parser, &(), &mut input).unwrap_err();
        assert_eq!(err.input(), Some("x"));
        assert!(matches!(err, ArgumentParseError::Custom { .. }));
        assert_eq!(input.len(), 1);
    }

    #[test]
    fn strings() {
        let parser = param::<String>();
        let mut input = InputQueue::from("player");
        assert_eq!(ArgumentParser::<()>::parse(&parser, &(), &mut input).unwrap(), "player");
        assert!(input.is_empty());
        assert!(ArgumentParser::<()>::parse(&parser, &(), &mut input)
            .unwrap_err()
            .is_no_input());
    }
}
