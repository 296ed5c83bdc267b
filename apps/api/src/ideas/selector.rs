//! Weighted selector — inverse-CDF sampling over a discrete distribution,
//! plus the marker-prefix weight policy that feeds it.

use rand::Rng;
use thiserror::Error;

use crate::ideas::corpus::Corpus;

#[derive(Debug, Error, PartialEq)]
pub enum SelectorError {
    #[error("Weight table is empty or carries no positive mass")]
    Degenerate,
}

/// Maps a line's leading marker to its selection weight.
/// `X ` entries are retired, `(A) `/`(B) ` are boosted, everything else
/// (including `(C) `) gets the default.
pub fn weight_for(raw_text: &str) -> f64 {
    if raw_text.starts_with("X ") {
        return 1.0;
    }
    if raw_text.starts_with("(A) ") {
        return 100.0;
    }
    if raw_text.starts_with("(B) ") {
        return 50.0;
    }
    10.0
}

/// Precomputed cumulative weight boundaries over a fixed traversal order.
///
/// `pick` draws `r` uniformly in `[0, total)` and returns the first entry
/// whose boundary is strictly greater than `r`; the strict comparison keeps
/// the final entry reachable for draws close to the total.
#[derive(Debug)]
pub struct WeightedPicker {
    boundaries: Vec<(f64, String)>,
    total: f64,
}

impl WeightedPicker {
    /// Builds the cumulative table. Entries with non-positive weight
    /// contribute no mass. Fails if no positive mass remains.
    pub fn new(entries: impl IntoIterator<Item = (String, f64)>) -> Result<Self, SelectorError> {
        let mut total = 0.0;
        let mut boundaries = Vec::new();
        for (identifier, weight) in entries {
            if weight <= 0.0 {
                continue;
            }
            total += weight;
            boundaries.push((total, identifier));
        }
        if boundaries.is_empty() {
            return Err(SelectorError::Degenerate);
        }
        Ok(WeightedPicker { boundaries, total })
    }

    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        let r = rng.gen::<f64>() * self.total;
        for (boundary, identifier) in &self.boundaries {
            if *boundary > r {
                return identifier;
            }
        }
        // Unreachable for r in [0, total); guard against pathological floats.
        &self.boundaries[self.boundaries.len() - 1].1
    }
}

/// Picks an identifier with probability proportional to its policy weight.
/// Falls back to a uniform pick if the weight table is degenerate.
pub fn weighted_identifier<'a, R: Rng + ?Sized>(corpus: &'a Corpus, rng: &mut R) -> Option<&'a str> {
    let table = corpus
        .iter()
        .map(|idea| (idea.identifier.clone(), weight_for(&idea.raw_text)));
    match WeightedPicker::new(table) {
        Ok(picker) => {
            let chosen = picker.pick(rng).to_string();
            corpus.get(&chosen).map(|idea| idea.identifier.as_str())
        }
        Err(SelectorError::Degenerate) => uniform_identifier(corpus, rng),
    }
}

/// Picks an identifier uniformly at random over the whole corpus.
pub fn uniform_identifier<'a, R: Rng + ?Sized>(corpus: &'a Corpus, rng: &mut R) -> Option<&'a str> {
    if corpus.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..corpus.len());
    corpus
        .iter()
        .nth(index)
        .map(|idea| idea.identifier.as_str())
}
