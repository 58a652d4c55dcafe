//! Outcast detection: the noun least related to the others.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::WordNetError;
use crate::wordnet::WordNet;

/// Finds the outcast of a list of nouns.
#[derive(Debug, Clone, Copy)]
pub struct Outcast<'w> {
    wordnet: &'w WordNet,
}

impl<'w> Outcast<'w> {
    /// Creates an outcast finder over `wordnet`.
    pub fn new(wordnet: &'w WordNet) -> Self {
        Self { wordnet }
    }

    /// Returns the noun whose summed distance to every noun in `nouns` is
    /// largest. On ties the earliest such noun wins.
    ///
    /// Returns `None` when every sum is zero, which includes an empty list.
    pub fn outcast<'n>(&self, nouns: &[&'n str]) -> Result<Option<&'n str>, WordNetError> {
        let totals = self.totals(nouns)?;

        let mut best: Option<(&'n str, usize)> = None;
        for (&noun, total) in nouns.iter().zip(totals) {
            if total > best.map_or(0, |(_, t)| t) {
                best = Some((noun, total));
            }
        }
        Ok(best.map(|(noun, _)| noun))
    }

    /// Sum of distances from each noun to all of `nouns`, in input order.
    #[cfg(not(feature = "parallel"))]
    fn totals(&self, nouns: &[&str]) -> Result<Vec<usize>, WordNetError> {
        nouns.iter().map(|noun| self.total(noun, nouns)).collect()
    }

    #[cfg(feature = "parallel")]
    fn totals(&self, nouns: &[&str]) -> Result<Vec<usize>, WordNetError> {
        nouns.par_iter().map(|noun| self.total(noun, nouns)).collect()
    }

    fn total(&self, noun: &str, nouns: &[&str]) -> Result<usize, WordNetError> {
        nouns
            .iter()
            .map(|other| self.wordnet.distance(noun, other))
            .sum()
    }
}
