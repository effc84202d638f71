//! Trained Punkt model and sentence segmentation.
use std::collections::{BTreeMap, BTreeSet};

use itertools::Itertools;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::annotate;
use super::ortho::OrthographicContext;
use super::params::TrainerParameters;
use super::token::{tokenize_words, Token};
use super::trainer::Trainer;
use crate::splitter::SentenceModel;
use crate::tokenize::is_non_word;

/// Characters that are moved back to the end of the previous sentence when they
/// directly follow a sentence break (`"Hello." she said`).
const CLOSING: &[char] = &['"', '\'', ')', ']', '}'];

/// Parameters learnt by the [Trainer].
///
/// Ordered collections keep the serialized form stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunktModel {
    abbrev_types: BTreeSet<String>,
    collocations: BTreeSet<(String, String)>,
    sentence_starters: BTreeSet<String>,
    ortho_context: BTreeMap<String, OrthographicContext>,
}

impl PunktModel {
    pub fn is_abbrev(&self, typ: &str) -> bool {
        self.abbrev_types.contains(typ)
    }

    pub fn is_collocation(&self, first: &str, second: &str) -> bool {
        self.collocations
            .contains(&(first.to_string(), second.to_string()))
    }

    pub fn is_sentence_starter(&self, typ: &str) -> bool {
        self.sentence_starters.contains(typ)
    }

    pub fn ortho_context(&self, typ: &str) -> OrthographicContext {
        self.ortho_context.get(typ).copied().unwrap_or(0)
    }

    pub fn abbrevs(&self) -> impl Iterator<Item = &str> {
        self.abbrev_types.iter().map(String::as_str)
    }

    pub fn collocations(&self) -> impl Iterator<Item = (&str, &str)> {
        self.collocations
            .iter()
            .map(|(a, b)| (a.as_str(), b.as_str()))
    }

    pub fn sentence_starters(&self) -> impl Iterator<Item = &str> {
        self.sentence_starters.iter().map(String::as_str)
    }

    pub fn nb_abbrevs(&self) -> usize {
        self.abbrev_types.len()
    }

    pub fn nb_collocations(&self) -> usize {
        self.collocations.len()
    }

    pub fn nb_sentence_starters(&self) -> usize {
        self.sentence_starters.len()
    }

    pub fn insert_abbrev(&mut self, typ: &str) {
        self.abbrev_types.insert(typ.to_string());
    }

    pub(crate) fn remove_abbrev(&mut self, typ: &str) {
        self.abbrev_types.remove(typ);
    }

    pub fn insert_collocation(&mut self, first: &str, second: &str) {
        self.collocations
            .insert((first.to_string(), second.to_string()));
    }

    pub(crate) fn clear_collocations(&mut self) {
        self.collocations.clear();
    }

    pub fn insert_sentence_starter(&mut self, typ: &str) {
        self.sentence_starters.insert(typ.to_string());
    }

    pub(crate) fn clear_sentence_starters(&mut self) {
        self.sentence_starters.clear();
    }

    pub(crate) fn add_ortho_context(&mut self, typ: &str, flag: OrthographicContext) {
        *self.ortho_context.entry(typ.to_string()).or_insert(0) |= flag;
    }

    /// First `max` learned abbreviations, collocations and sentence starters, for logging.
    pub fn summary(&self, max: usize) -> String {
        format!(
            "abbreviations: [{}] collocations: [{}] sentence starters: [{}]",
            self.abbrevs().take(max).join(", "),
            self.collocations()
                .take(max)
                .map(|(a, b)| format!("{a} {b}"))
                .join(", "),
            self.sentence_starters().take(max).join(", ")
        )
    }

    /// Tokenize and annotate `text` with both passes.
    fn annotate<'t>(&self, text: &'t str) -> Vec<Token<'t>> {
        let mut tokens = tokenize_words(text);
        annotate::first_pass(self, &mut tokens);
        annotate::second_pass(self, &mut tokens);
        tokens
    }

    /// Index of the last token that is moved back into the sentence ending at `tokens[idx]`.
    ///
    /// A run of closing quotes/brackets following a break belongs to the sentence it closes,
    /// provided the run is followed by whitespace, `--` or the end of the text.
    fn realign(text: &str, tokens: &[Token], idx: usize) -> usize {
        let mut last = idx;
        for (offset, token) in tokens[idx + 1..].iter().enumerate() {
            let is_closing = token.tok().chars().all(|c| CLOSING.contains(&c));
            let contiguous = offset == 0 || token.start() == tokens[last].end();
            if !is_closing || !contiguous {
                break;
            }
            last = idx + 1 + offset;
        }

        if last == idx {
            return idx;
        }

        let rest = &text[tokens[last].end()..];
        if rest.is_empty() || rest.starts_with(char::is_whitespace) || rest.starts_with("--") {
            last
        } else {
            idx
        }
    }

    /// Whether the break annotated on `tokens[idx]` is realized.
    ///
    /// Breaks need the token to be followed by whitespace, non-word punctuation or the end
    /// of the text. When the next token is glued to this one and is a break too (`what?!`),
    /// the break moves to it.
    fn is_boundary(text: &str, tokens: &[Token], idx: usize) -> bool {
        let token = &tokens[idx];
        if !token.sentbreak {
            return false;
        }

        if let Some(next) = tokens.get(idx + 1) {
            if next.start() == token.end() && next.sentbreak {
                return false;
            }
        }

        match text[token.end()..].chars().next() {
            None => true,
            Some(c) => c.is_whitespace() || is_non_word(c),
        }
    }

    /// Split `text` into sentences.
    ///
    /// Sentences are slices of `text`, in order, without leading or trailing whitespace.
    /// Only whitespace lies between two consecutive sentences.
    pub fn sentences<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let tokens = self.annotate(text);
        let mut sentences = Vec::new();
        let mut first = 0;
        let mut idx = 0;

        while idx < tokens.len() {
            if Self::is_boundary(text, &tokens, idx) {
                let last = Self::realign(text, &tokens, idx);
                sentences.push(&text[tokens[first].start()..tokens[last].end()]);
                first = last + 1;
                idx = last + 1;
            } else {
                idx += 1;
            }
        }

        if first < tokens.len() {
            sentences.push(&text[tokens[first].start()..tokens[tokens.len() - 1].end()]);
        }

        sentences
    }
}

impl SentenceModel for PunktModel {
    type Parameters = TrainerParameters;

    fn train(text: &str, params: &Self::Parameters) -> Self {
        let mut trainer = Trainer::new(params.clone());
        trainer.train(text);
        let model = trainer.finalize();
        info!(
            "learned {} abbreviations, {} collocations, {} sentence starters",
            model.nb_abbrevs(),
            model.nb_collocations(),
            model.nb_sentence_starters()
        );
        debug!("{}", model.summary(20));
        model
    }

    fn segment<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.sentences(text)
    }
}
