//! Trainer parameters.
use serde::{Deserialize, Serialize};

/// Thresholds and flags of the Punkt trainer.
///
/// Defaults are the ones of the reference Punkt implementation (NLTK).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerParameters {
    /// Minimal score for a type to be considered an abbreviation.
    pub abbrev_lower_bound: f64,
    /// Types seen at least this many times are never considered rare abbreviations.
    pub abbrev_backoff: usize,
    /// Minimal log-likelihood for a pair of types to be a collocation.
    pub collocation_lower_bound: f64,
    /// Minimal log-likelihood for a type to be a frequent sentence starter.
    pub sentence_starter_lower_bound: f64,
    /// Consider every word pair as a collocation candidate.
    pub include_all_collocations: bool,
    /// Consider pairs starting with an abbreviation as collocation candidates.
    pub include_abbrev_collocations: bool,
    /// Do not penalize abbreviations that also appear without a final period.
    pub ignore_abbrev_penalty: bool,
    /// Pairs seen at most this many times are never collocations.
    pub min_collocation_frequency: usize,
}

impl Default for TrainerParameters {
    fn default() -> Self {
        Self {
            abbrev_lower_bound: 0.3,
            abbrev_backoff: 5,
            collocation_lower_bound: 7.88,
            sentence_starter_lower_bound: 30.0,
            include_all_collocations: false,
            include_abbrev_collocations: false,
            ignore_abbrev_penalty: false,
            min_collocation_frequency: 1,
        }
    }
}
