use crate::{context::QueryContext, rule::Permutation};

impl Permutation {
    /// True when every pair agrees with the context. An attribute the
    /// context does not carry never agrees; an empty permutation always
    /// matches.
    pub fn matches(&self, ctx: &QueryContext) -> bool {
        self.pairs
            .iter()
            .all(|pair| ctx.has(&pair.attribute, &pair.value))
    }

    /// True when each of `required` is named by at least one pair.
    pub fn has_required_attributes<I>(&self, required: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        required
            .into_iter()
            .all(|name| self.attributes().any(|attr| attr == name.as_ref()))
    }
}
