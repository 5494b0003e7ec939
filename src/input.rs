use std::collections::VecDeque;

/// The input type, a queue of whitespace delimited tokens.
///
/// Parsers peek at the head of the queue and only remove it once the token
/// has been accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputQueue {
    tokens: VecDeque<String>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits `line` on whitespace into a queue of tokens.
    pub fn tokenize(line: &str) -> Self {
        line.split_whitespace().map(str::to_owned).collect()
    }

    /// Returns the next token without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<&str> {
        self.tokens.front().map(String::as_str)
    }

    /// Consumes and returns the next token.
    #[inline]
    pub fn remove(&mut self) -> Option<String> {
        self.tokens.pop_front()
    }

    pub fn push(&mut self, token: impl Into<String>) {
        self.tokens.push_back(token.into());
    }

    /// Returns the number of remaining tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns whether there are no more tokens to read.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

impl<'i> From<&'i str> for InputQueue {
    fn from(val: &'i str) -> Self {
        InputQueue::tokenize(val)
    }
}

impl From<VecDeque<String>> for InputQueue {
    fn from(tokens: VecDeque<String>) -> Self {
        Self { tokens }
    }
}

impl<S: Into<String>> std::iter::FromIterator<S> for InputQueue {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize() {
        let input = InputQueue::from("  tp  10\t20 30 ");
        assert_eq!(input.iter().collect::<Vec<_>>(), vec!["tp", "10", "20", "30"]);
        assert!(InputQueue::from("   ").is_empty());
    }

    #[test]
    fn peek_does_not_consume() {
        let mut input: InputQueue = vec!["a", "b"].into_iter().collect();
        assert_eq!(input.peek(), Some("a"));
        assert_eq!(input.peek(), Some("a"));
        assert_eq!(input.len(), 2);

        assert_eq!(input.remove().as_deref(), Some("a"));
        assert_eq!(input.peek(), Some("b"));
        assert_eq!(input.remove().as_deref(), Some("b"));
        assert_eq!(input.peek(), None);
        assert_eq!(input.remove(), None);
    }

    #[test]
    fn push() {
        let mut input = InputQueue::new();
        input.push("1.5");
        assert_eq!(input.len(), 1);
        assert_eq!(input.peek(), Some("1.5"));
    }
}
