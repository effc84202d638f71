//! Annotated word tokens.
use lazy_static::lazy_static;
use regex::Regex;

use super::ortho::LetterCase;
use crate::tokenize;

lazy_static! {
    static ref RE_NUMBER: Regex = Regex::new(r"^-?[\.,]?\d[\d,\.-]*\.?$").unwrap();
    static ref RE_ELLIPSIS: Regex = Regex::new(r"^\.\.+$").unwrap();
    static ref RE_INITIAL: Regex = Regex::new(r"^[^\W\d]\.$").unwrap();
    static ref RE_ALPHA: Regex = Regex::new(r"^[^\W\d]+$").unwrap();
    static ref RE_NON_PUNCT: Regex = Regex::new(r"[^\W\d]").unwrap();
}

/// Type given to every numeric token.
pub const NUMBER: &str = "##number##";

/// Lowercased token, with numbers collapsed into [NUMBER].
pub fn token_type(tok: &str) -> String {
    let lower = tok.to_lowercase();
    if RE_NUMBER.is_match(&lower) {
        NUMBER.to_string()
    } else {
        lower
    }
}

/// Whether `s` contains at least one letter.
pub fn has_letter(s: &str) -> bool {
    RE_NON_PUNCT.is_match(s)
}

/// Drop the last character of `s`.
pub(crate) fn without_last_char(s: &str) -> &str {
    match s.char_indices().last() {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// A word token of some text, with the annotations the Punkt passes set on it.
#[derive(Debug, Clone)]
pub struct Token<'a> {
    tok: &'a str,
    start: usize,
    typ: String,
    /// First token of a paragraph (preceded by an empty line).
    pub parastart: bool,
    /// First token of a line.
    pub linestart: bool,
    pub sentbreak: bool,
    pub abbr: bool,
    pub ellipsis: bool,
}

impl<'a> Token<'a> {
    pub fn new(tok: &'a str, start: usize) -> Self {
        Self {
            tok,
            start,
            typ: token_type(tok),
            parastart: false,
            linestart: false,
            sentbreak: false,
            abbr: false,
            ellipsis: false,
        }
    }

    pub fn tok(&self) -> &'a str {
        self.tok
    }

    /// Byte offset of the token in the source text.
    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.start + self.tok.len()
    }

    pub fn typ(&self) -> &str {
        &self.typ
    }

    pub fn period_final(&self) -> bool {
        self.tok.ends_with('.')
    }

    /// Type with its final period removed, if it has one.
    pub fn typ_no_period(&self) -> &str {
        if self.typ.chars().count() > 1 && self.typ.ends_with('.') {
            &self.typ[..self.typ.len() - 1]
        } else {
            &self.typ
        }
    }

    /// Type with its final period removed if it marks a sentence break.
    pub fn typ_no_sentperiod(&self) -> &str {
        if self.sentbreak {
            self.typ_no_period()
        } else {
            &self.typ
        }
    }

    pub fn first_case(&self) -> LetterCase {
        match self.tok.chars().next() {
            Some(c) if c.is_uppercase() => LetterCase::Upper,
            Some(c) if c.is_lowercase() => LetterCase::Lower,
            _ => LetterCase::None,
        }
    }

    pub fn first_upper(&self) -> bool {
        self.first_case() == LetterCase::Upper
    }

    pub fn first_lower(&self) -> bool {
        self.first_case() == LetterCase::Lower
    }

    pub fn is_ellipsis(&self) -> bool {
        RE_ELLIPSIS.is_match(self.tok)
    }

    pub fn is_number(&self) -> bool {
        self.typ.starts_with(NUMBER)
    }

    /// Single letter followed by a period, e.g. `J.`
    pub fn is_initial(&self) -> bool {
        RE_INITIAL.is_match(self.tok)
    }

    pub fn is_alpha(&self) -> bool {
        RE_ALPHA.is_match(self.tok)
    }

    /// Type contains at least one letter.
    pub fn is_non_punct(&self) -> bool {
        has_letter(&self.typ)
    }
}

/// Split `text` into [Token]s, marking line and paragraph starts.
///
/// A paragraph starts after one or more blank lines.
pub fn tokenize_words(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut parastart = false;
    let mut offset = 0;

    for line in text.split('\n') {
        let line_offset = offset;
        offset += line.len() + 1;

        if line.trim().is_empty() {
            parastart = true;
            continue;
        }

        let mut spans = tokenize::token_spans(line).into_iter();
        if let Some((start, end)) = spans.next() {
            let mut first = Token::new(&line[start..end], line_offset + start);
            first.parastart = parastart;
            first.linestart = true;
            tokens.push(first);
            parastart = false;
        }
        tokens.extend(spans.map(|(start, end)| Token::new(&line[start..end], line_offset + start)));
    }

    tokens
}
