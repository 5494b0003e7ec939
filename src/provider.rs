use std::fmt;
use std::sync::Arc;

/// Supplies completions for a partially typed argument.
///
/// Invoked by a completion engine, never by the parser itself.
pub trait SuggestionProvider<C> {
    fn suggest(&self, ctx: &C, partial: &str) -> Vec<String>;
}

impl<C, F> SuggestionProvider<C> for F
where
    F: Fn(&C, &str) -> Vec<String>,
{
    fn suggest(&self, ctx: &C, partial: &str) -> Vec<String> {
        self(ctx, partial)
    }
}

/// A shareable suggestion provider, as stored on a `CommandArgument`.
pub struct Suggestions<C>(Arc<dyn SuggestionProvider<C> + Send + Sync>);

impl<C> Suggestions<C> {
    pub fn new<P>(provider: P) -> Self
    where
        P: SuggestionProvider<C> + Send + Sync + 'static,
    {
        Self(Arc::new(provider))
    }

    /// Suggests every candidate starting with `partial`, in the given order.
    pub fn fixed<I, S>(candidates: I) -> Self
    where
        C: 'static,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let candidates: Vec<String> = candidates.into_iter().map(Into::into).collect();
        Self::new(move |_ctx: &C, partial: &str| {
            candidates
                .iter()
                .filter(|c| c.starts_with(partial))
                .cloned()
                .collect::<Vec<_>>()
        })
    }

    pub fn suggest(&self, ctx: &C, partial: &str) -> Vec<String> {
        self.0.suggest(ctx, partial)
    }
}

impl<C> Clone for Suggestions<C> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<C> fmt::Debug for Suggestions<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Suggestions(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_provider() {
        let provider: Suggestions<u32> =
            Suggestions::new(|ctx: &u32, partial: &str| vec![format!("{}{}", partial, ctx)]);
        assert_eq!(provider.suggest(&7, "x"), vec!["x7"]);
        assert_eq!(provider.clone().suggest(&1, ""), vec!["1"]);
    }

    #[test]
    fn fixed_filters_by_prefix() {
        let provider: Suggestions<()> = Suggestions::fixed(vec!["0.5", "1", "1.5", "10"]);
        assert_eq!(provider.suggest(&(), "1"), vec!["1", "1.5", "10"]);
        assert_eq!(provider.suggest(&(), ""), vec!["0.5", "1", "1.5", "10"]);
        assert!(provider.suggest(&(), "2").is_empty());
    }
}
