use crate::{context::WeightTable, rule::Permutation};

impl Permutation {
    /// Sum of the weights of every pair, repeats included.
    pub fn score(&self, weights: &WeightTable) -> u64 {
        self.attributes()
            .map(|attr| u64::from(weights.get(attr)))
            .sum()
    }
}
