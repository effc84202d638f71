//! First and second annotation passes.
//!
//! The first pass marks sentence breaks, abbreviations and ellipses from the token
//! itself and the known abbreviations.
//! The second pass revisits period-final tokens using the token that follows them
//! (collocations, orthographic context, frequent sentence starters).
use super::model::PunktModel;
use super::ortho::{BEGIN_LC, MIDDLE_UC, ORTHO_LC, ORTHO_UC};
use super::token::{Token, NUMBER};

const SENT_END_CHARS: &[&str] = &[".", "?", "!"];

/// Tokens that can never start a sentence.
const NEVER_STARTERS: &str = ";:,.!?";

/// Outcome of the orthographic heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Starter {
    Yes,
    No,
    Unknown,
}

pub fn first_pass(model: &PunktModel, tokens: &mut [Token]) {
    for token in tokens.iter_mut() {
        first_pass_token(model, token);
    }
}

fn first_pass_token(model: &PunktModel, token: &mut Token) {
    let tok = token.tok();

    if SENT_END_CHARS.contains(&tok) {
        token.sentbreak = true;
    } else if token.is_ellipsis() {
        token.ellipsis = true;
    } else if token.period_final() && !tok.ends_with("..") {
        let candidate = tok[..tok.len() - 1].to_lowercase();
        let last_part = candidate.rsplit('-').next().unwrap_or(&candidate);
        if model.is_abbrev(&candidate) || model.is_abbrev(last_part) {
            token.abbr = true;
        } else {
            token.sentbreak = true;
        }
    }
}

/// Decide whether `token` starts a sentence, given the orthographic context of its type.
pub fn ortho_heuristic(model: &PunktModel, token: &Token) -> Starter {
    // substring of NEVER_STARTERS, as in NLTK: single marks and runs like `;:`
    if NEVER_STARTERS.contains(token.tok()) {
        return Starter::No;
    }

    let ortho = model.ortho_context(token.typ_no_sentperiod());

    if token.first_upper() && (ortho & ORTHO_LC) != 0 && (ortho & MIDDLE_UC) == 0 {
        return Starter::Yes;
    }

    if token.first_lower() && ((ortho & ORTHO_UC) != 0 || (ortho & BEGIN_LC) == 0) {
        return Starter::No;
    }

    Starter::Unknown
}

pub fn second_pass(model: &PunktModel, tokens: &mut [Token]) {
    for idx in 1..tokens.len() {
        let (head, tail) = tokens.split_at_mut(idx);
        second_pass_pair(model, &mut head[idx - 1], &tail[0]);
    }
}

fn second_pass_pair(model: &PunktModel, token: &mut Token, next: &Token) {
    if !token.period_final() {
        return;
    }

    let typ = token.typ_no_period().to_string();
    let next_typ = next.typ_no_sentperiod();
    let is_initial = token.is_initial();

    if model.is_collocation(&typ, next_typ) {
        token.sentbreak = false;
        token.abbr = true;
        return;
    }

    if (token.abbr || token.ellipsis) && !is_initial {
        if ortho_heuristic(model, next) == Starter::Yes {
            token.sentbreak = true;
            return;
        }

        if next.first_upper() && model.is_sentence_starter(next_typ) {
            token.sentbreak = true;
            return;
        }
    }

    if is_initial || typ == NUMBER {
        let starter = ortho_heuristic(model, next);

        if starter == Starter::No {
            token.sentbreak = false;
            token.abbr = true;
            return;
        }

        if starter == Starter::Unknown
            && is_initial
            && next.first_upper()
            && (model.ortho_context(next_typ) & ORTHO_LC) == 0
        {
            token.sentbreak = false;
            token.abbr = true;
        }
    }
}
