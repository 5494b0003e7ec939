use crate::error::{ArgumentParseError, NumberFailure, NumberParseError, Result};
use crate::parser::{ArgumentParser, ParserId};
use crate::InputQueue;
use log::trace;

/// Parses a single token as a `f64` inside the inclusive range `[min, max]`.
///
/// The bounds default to the infinities, so an unconfigured parser accepts
/// any literal `f64::from_str` accepts, including `inf` and `-Infinity`.
/// Only values strictly below `min` or strictly above `max` are rejected, so
/// `NaN` is always accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoubleParser {
    min: f64,
    max: f64,
}

impl DoubleParser {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Validates a single token without touching any queue.
    pub fn parse_token(&self, token: &str) -> std::result::Result<f64, NumberParseError> {
        let failure = match token.parse::<f64>() {
            Ok(value) if !(value < self.min || value > self.max) => return Ok(value),
            Ok(_) => NumberFailure::OutOfRange,
            Err(_) => NumberFailure::Malformed,
        };
        Err(NumberParseError::double(
            token,
            self.min,
            self.max,
            ParserId::of::<Self>(),
            failure,
        ))
    }
}

impl Default for DoubleParser {
    fn default() -> Self {
        Self::new(f64::NEG_INFINITY, f64::INFINITY)
    }
}

impl<C> ArgumentParser<C> for DoubleParser {
    type Output = f64;

    fn parse(&self, _ctx: &C, input: &mut InputQueue) -> Result<f64> {
        let head = input.peek().ok_or(ArgumentParseError::NoInputProvided {
            parser: ParserId::of::<Self>(),
        })?;

        match self.parse_token(head) {
            Ok(value) => {
                trace!("parsed double {} from '{}'", value, head);
                input.remove();
                Ok(value)
            }
            Err(err) => {
                trace!("rejected '{}': {:?}", head, err.failure());
                Err(err.into())
            }
        }
    }

    fn is_context_free(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn parse(parser: &DoubleParser, input: &mut InputQueue) -> Result<f64> {
        ArgumentParser::<()>::parse(parser, &(), input)
    }

    #[test]
    fn unconstrained() {
        let parser = DoubleParser::default();
        let mut input = InputQueue::from("3.14 next");
        assert_eq!(parse(&parser, &mut input).unwrap(), 3.14);
        assert_eq!(input.iter().collect::<Vec<_>>(), vec!["next"]);
    }

    #[test]
    fn out_of_range() {
        let parser = DoubleParser::new(0.0, 10.0);
        let mut input = InputQueue::from("15.0");

        let err = parse(&parser, &mut input).unwrap_err();
        let err = err.as_number().unwrap();
        assert_eq!(err.input(), "15.0");
        assert_eq!(err.min(), 0.0);
        assert_eq!(err.max(), 10.0);
        assert_eq!(err.failure(), NumberFailure::OutOfRange);
        assert_eq!(err.parser(), ParserId::of::<DoubleParser>());
        assert_eq!(input.peek(), Some("15.0"));
    }

    #[test]
    fn bounds_are_inclusive() {
        let parser = DoubleParser::new(0.0, 10.0);
        let mut input = InputQueue::from("0 10 -0.0001 10.0001");
        assert_eq!(parse(&parser, &mut input).unwrap(), 0.0);
        assert_eq!(parse(&parser, &mut input).unwrap(), 10.0);
        assert!(parse(&parser, &mut input).is_err());
        assert_eq!(input.len(), 2);
    }

    #[test]
    fn malformed() {
        let parser = DoubleParser::default();
        for token in &["abc", "1.2.3", "0x10", "1,5", "--1"] {
            let mut input = InputQueue::from(*token);
            let err = parse(&parser, &mut input).unwrap_err();
            assert_eq!(err.as_number().unwrap().failure(), NumberFailure::Malformed);
            assert_eq!(input.len(), 1);
        }
    }

    #[test]
    fn empty_input() {
        let parser = DoubleParser::new(1.0, 2.0);
        let mut input = InputQueue::new();
        let err = parse(&parser, &mut input).unwrap_err();
        assert!(err.is_no_input());
        assert_eq!(err.parser(), ParserId::of::<DoubleParser>());
        assert!(input.is_empty());
    }

    #[test]
    fn infinities_and_nan() {
        let parser = DoubleParser::default();
        let mut input = InputQueue::from("-Infinity inf 1e400 NaN");
        assert_eq!(parse(&parser, &mut input).unwrap(), f64::NEG_INFINITY);
        assert_eq!(parse(&parser, &mut input).unwrap(), f64::INFINITY);
        assert_eq!(parse(&parser, &mut input).unwrap(), f64::INFINITY);
        assert!(parse(&parser, &mut input).unwrap().is_nan());
        assert!(input.is_empty());
    }

    #[test]
    fn nan_passes_bounds() {
        let parser = DoubleParser::new(0.0, 10.0);
        let mut input = InputQueue::from("nan 11");
        assert!(parse(&parser, &mut input).unwrap().is_nan());
        assert_eq!(input.iter().collect::<Vec<_>>(), vec!["11"]);
    }

    #[test]
    fn inverted_bounds_only_pass_nan() {
        let parser = DoubleParser::new(10.0, 0.0);
        for token in &["-1", "0", "5", "10", "11", "-inf"] {
            assert!(parser.parse_token(token).is_err());
        }
        assert!(parser.parse_token("NaN").unwrap().is_nan());
    }

    #[test]
    fn context_free() {
        assert!(ArgumentParser::<()>::is_context_free(&DoubleParser::default()));
        assert!(ArgumentParser::<String>::is_context_free(&DoubleParser::new(1.0, 0.0)));
    }

    fn ordered(a: f64, b: f64) -> Option<(f64, f64)> {
        if a.is_nan() || b.is_nan() {
            return None;
        }
        Some(if a <= b { (a, b) } else { (b, a) })
    }

    #[quickcheck]
    fn accepts_values_in_range(a: f64, b: f64, v: f64) -> bool {
        let (min, max) = match ordered(a, b) {
            Some(bounds) => bounds,
            None => return true,
        };
        if v.is_nan() {
            return true;
        }
        let v = v.max(min).min(max);
        let parser = DoubleParser::new(min, max);
        let mut input: InputQueue = vec![v.to_string()].into_iter().collect();
        parse(&parser, &mut input).ok() == Some(v) && input.is_empty()
    }

    #[quickcheck]
    fn rejects_values_out_of_range(a: f64, b: f64, v: f64) -> bool {
        let (min, max) = match ordered(a, b) {
            Some(bounds) => bounds,
            None => return true,
        };
        if v.is_nan() || !(v < min || v > max) {
            return true;
        }
        let parser = DoubleParser::new(min, max);
        let mut input: InputQueue = vec![v.to_string(), "tail".to_owned()].into_iter().collect();
        match parse(&parser, &mut input) {
            Err(ArgumentParseError::Number(err)) => {
                err.min() == min && err.max() == max && err.input() == v.to_string() && input.len() == 2
            }
            _ => false,
        }
    }

    #[quickcheck]
    fn has_bounds_iff_finite(min: f64, max: f64) -> bool {
        let err = DoubleParser::new(min, max).parse_token("x").unwrap_err();
        err.has_min() == (min != f64::NEG_INFINITY) && err.has_max() == (max != f64::INFINITY)
    }
}
