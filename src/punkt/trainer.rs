/*! Unsupervised Punkt training.

Learns, from raw text only:
- abbreviation types (types that are strongly associated with a final period),
- collocations (pairs of types whose first one ends with a period that is not a sentence break, e.g. `19. júlí`),
- frequent sentence starters,
- the orthographic context of every type.

Training is deterministic: it only depends on the content of the text.
!*/
use std::collections::{HashMap, HashSet};

use log::debug;

use super::annotate;
use super::model::PunktModel;
use super::ortho::{self, Position, BEGIN_UC, MIDDLE_UC};
use super::params::TrainerParameters;
use super::stats::{col_log_likelihood, dunning_log_likelihood};
use super::token::{self, tokenize_words, Token, NUMBER};

/// Accumulates statistics over one or more texts, then builds a [PunktModel] in [Trainer::finalize].
pub struct Trainer {
    params: TrainerParameters,
    model: PunktModel,
    type_fdist: HashMap<String, usize>,
    nb_tokens: usize,
    nb_period_tokens: usize,
    nb_sentbreaks: usize,
    sent_starter_fdist: HashMap<String, usize>,
    collocation_fdist: HashMap<(String, String), usize>,
}

impl Trainer {
    pub fn new(params: TrainerParameters) -> Self {
        Self {
            params,
            model: PunktModel::default(),
            type_fdist: HashMap::new(),
            nb_tokens: 0,
            nb_period_tokens: 0,
            nb_sentbreaks: 0,
            sent_starter_fdist: HashMap::new(),
            collocation_fdist: HashMap::new(),
        }
    }

    fn count(&self, typ: &str) -> usize {
        self.type_fdist.get(typ).copied().unwrap_or(0)
    }

    /// Count of a type, with and without a final period.
    fn count_with_period(&self, typ: &str) -> usize {
        self.count(typ) + self.count(&format!("{typ}."))
    }

    /// Gather statistics from `text`.
    pub fn train(&mut self, text: &str) {
        let mut tokens = tokenize_words(text);
        debug!("training on {} tokens", tokens.len());

        for token in &tokens {
            *self.type_fdist.entry(token.typ().to_string()).or_insert(0) += 1;
            if token.period_final() {
                self.nb_period_tokens += 1;
            }
        }
        self.nb_tokens += tokens.len();

        let unique_types: HashSet<String> = tokens.iter().map(|t| t.typ().to_string()).collect();
        self.reclassify_abbrev_types(&unique_types);

        annotate::first_pass(&self.model, &mut tokens);
        self.collect_orthography(&tokens);
        self.nb_sentbreaks += tokens.iter().filter(|t| t.sentbreak).count();

        for pair in tokens.windows(2) {
            let (token, next) = (&pair[0], &pair[1]);
            if !token.period_final() {
                continue;
            }

            if self.is_rare_abbrev_type(token, next) {
                self.model.insert_abbrev(token.typ_no_period());
            }

            if Self::is_potential_sentence_starter(next, token) {
                *self
                    .sent_starter_fdist
                    .entry(next.typ().to_string())
                    .or_insert(0) += 1;
            }

            if self.is_potential_collocation(token, next) {
                let key = (
                    token.typ_no_period().to_string(),
                    next.typ_no_sentperiod().to_string(),
                );
                *self.collocation_fdist.entry(key).or_insert(0) += 1;
            }
        }
    }

    /// Add or remove abbreviations by scoring every period-final type (and every
    /// already known abbreviation) with a length/period weighted log-likelihood.
    fn reclassify_abbrev_types(&mut self, types: &HashSet<String>) {
        let n = self.nb_tokens as f64;

        for typ in types {
            if typ == NUMBER || !token::has_letter(typ) {
                continue;
            }

            let (candidate, is_add) = match typ.strip_suffix('.') {
                Some(stripped) => {
                    if self.model.is_abbrev(typ) {
                        continue;
                    }
                    (stripped, true)
                }
                None => {
                    if !self.model.is_abbrev(typ) {
                        continue;
                    }
                    (typ.as_str(), false)
                }
            };

            let nb_periods = candidate.matches('.').count() + 1;
            let nb_nonperiods = candidate.chars().count() + 1 - nb_periods;

            let with_period = self.count(&format!("{candidate}.")) as f64;
            let without_period = self.count(candidate) as f64;

            let ll = dunning_log_likelihood(
                with_period + without_period,
                self.nb_period_tokens as f64,
                with_period,
                n,
            );

            let f_length = (-(nb_nonperiods as f64)).exp();
            let f_periods = nb_periods as f64;
            let f_penalty = if self.params.ignore_abbrev_penalty {
                1.0
            } else {
                (nb_nonperiods as f64).powf(-without_period)
            };

            let score = ll * f_length * f_periods * f_penalty;

            if score >= self.params.abbrev_lower_bound {
                if is_add {
                    self.model.insert_abbrev(candidate);
                }
            } else if !is_add {
                self.model.remove_abbrev(candidate);
            }
        }
    }

    /// Record the (position, case) pairs each type is seen in.
    fn collect_orthography(&mut self, tokens: &[Token]) {
        let mut context = Position::Internal;

        for token in tokens {
            if token.parastart && context != Position::Unknown {
                context = Position::Initial;
            }
            if token.linestart && context == Position::Internal {
                context = Position::Unknown;
            }

            let flag = ortho::flag(context, token.first_case());
            if flag != 0 {
                self.model
                    .add_ortho_context(token.typ_no_sentperiod(), flag);
            }

            context = if token.sentbreak {
                if token.is_number() || token.is_initial() {
                    Position::Unknown
                } else {
                    Position::Initial
                }
            } else if token.ellipsis || token.abbr {
                Position::Unknown
            } else {
                Position::Internal
            };
        }
    }

    /// A sentence break on a rare type followed by internal punctuation or by a
    /// lowercase word that usually starts sentences in upper case hints at an abbreviation.
    fn is_rare_abbrev_type(&self, token: &Token, next: &Token) -> bool {
        if token.abbr || !token.sentbreak {
            return false;
        }

        let typ = token.typ_no_sentperiod();
        let count = self.count(typ) + self.count(token::without_last_char(typ));
        if self.model.is_abbrev(typ) || count >= self.params.abbrev_backoff {
            return false;
        }

        if next.tok().starts_with([',', ':', ';']) {
            return true;
        }

        if next.first_lower() {
            let next_ortho = self.model.ortho_context(next.typ_no_sentperiod());
            if (next_ortho & BEGIN_UC) != 0 && (next_ortho & MIDDLE_UC) == 0 {
                return true;
            }
        }

        false
    }

    fn is_potential_sentence_starter(token: &Token, previous: &Token) -> bool {
        previous.sentbreak && !(previous.is_number() || previous.is_initial()) && token.is_alpha()
    }

    fn is_potential_collocation(&self, token: &Token, next: &Token) -> bool {
        (self.params.include_all_collocations
            || (self.params.include_abbrev_collocations && token.abbr)
            || (token.sentbreak && (token.is_number() || token.is_initial())))
            && token.is_non_punct()
            && next.is_non_punct()
    }

    /// Types that are significantly more frequent after a sentence break.
    fn sentence_starters(&self) -> Vec<String> {
        let n = self.nb_tokens as f64;
        let nb_sentbreaks = self.nb_sentbreaks as f64;

        self.sent_starter_fdist
            .iter()
            .filter(|(typ, _)| !typ.is_empty())
            .filter_map(|(typ, &at_break)| {
                let typ_count = self.count_with_period(typ);
                if typ_count < at_break {
                    return None;
                }

                let ll = col_log_likelihood(nb_sentbreaks, typ_count as f64, at_break as f64, n);
                let significant = ll >= self.params.sentence_starter_lower_bound
                    && n / nb_sentbreaks > typ_count as f64 / at_break as f64;
                significant.then(|| typ.clone())
            })
            .collect()
    }

    /// Pairs of types that significantly co-occur across a period.
    fn collocations(&self) -> Vec<(String, String)> {
        let n = self.nb_tokens as f64;

        self.collocation_fdist
            .iter()
            .filter(|((_, second), _)| !self.model.is_sentence_starter(second))
            .filter_map(|((first, second), &col_count)| {
                let first_count = self.count_with_period(first);
                let second_count = self.count_with_period(second);

                let frequent = first_count > 1
                    && second_count > 1
                    && self.params.min_collocation_frequency < col_count
                    && col_count <= first_count.min(second_count);
                if !frequent {
                    return None;
                }

                let ll = col_log_likelihood(
                    first_count as f64,
                    second_count as f64,
                    col_count as f64,
                    n,
                );
                let significant = ll >= self.params.collocation_lower_bound
                    && n / first_count as f64 > second_count as f64 / col_count as f64;
                significant.then(|| (first.clone(), second.clone()))
            })
            .collect()
    }

    /// Compute sentence starters and collocations and return the trained model.
    pub fn finalize(mut self) -> PunktModel {
        self.model.clear_sentence_starters();
        for starter in self.sentence_starters() {
            self.model.insert_sentence_starter(&starter);
        }

        self.model.clear_collocations();
        for (first, second) in self.collocations() {
            self.model.insert_collocation(&first, &second);
        }

        debug!(
            "finalized model on {} tokens ({} sentence breaks)",
            self.nb_tokens, self.nb_sentbreaks
        );
        self.model
    }
}

impl Default for Trainer {
    fn default() -> Self {
        Self::new(TrainerParameters::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn train(text: &str) -> PunktModel {
        let mut trainer = Trainer::default();
        trainer.train(text);
        trainer.finalize()
    }

    /// A corpus where `stk.` is always followed by a lowercase word
    /// and real sentences end with lowercase words followed by capitalized ones.
    fn abbrev_corpus() -> String {
        let mut corpus = String::new();
        for i in 0..40 {
            corpus.push_str(&format!(
                "Hann keypti {i} stk. af brauði í versluninni. Hún seldi mjólk á markaðnum.\n"
            ));
        }
        corpus
    }

    #[test]
    fn learns_abbreviation() {
        let model = train(&abbrev_corpus());
        assert!(model.is_abbrev("stk"));
        assert!(!model.is_abbrev("versluninni"));
        assert!(!model.is_abbrev("markaðnum"));
    }

    #[test]
    fn ortho_context_is_recorded() {
        let model = train("Hann var þríkvæntur . Fyrsta kona hans var Þorbjörg .");
        // sentence initial, upper case
        assert_ne!(model.ortho_context("fyrsta") & ortho::BEGIN_UC, 0);
        // sentence internal, lower case
        assert_ne!(model.ortho_context("kona") & ortho::MIDDLE_LC, 0);
        // first token of a line is in unknown position
        assert_ne!(model.ortho_context("hann") & ortho::UNKNOWN_UC, 0);
    }

    #[test]
    fn no_abbreviation_from_sentence_ends() {
        let model = train("Hann var þríkvæntur . Fyrsta kona hans var Þorbjörg .");
        assert_eq!(model.nb_abbrevs(), 0);
        assert_eq!(model.nb_collocations(), 0);
    }

    #[test]
    fn deterministic() {
        let corpus = abbrev_corpus();
        assert_eq!(train(&corpus), train(&corpus));
    }
}
