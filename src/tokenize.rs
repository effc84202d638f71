/*! Word tokenization

Language-agnostic word tokenizer used both to build corpus lines and to feed the Punkt trainer/segmenter.

Periods stay attached to the word they follow (`there.`, `Dr.`), since the sentence splitter learns
abbreviations and sentence boundaries from period-final tokens.
Other punctuation is split off:

```text
Hello there, (said) Dr. Smith... -- right?
Hello | there | , | ( | said | ) | Dr. | Smith | ... | -- | right | ?
```
!*/

/// Characters that cannot start a word.
const NON_WORD_START: &[char] = &['(', '"', '`', '{', '[', ':', ';', '&', '#', '*', '@', ')', '}', ']', '-', ','];

/// Characters that end a word and are tokens by themselves.
const NON_WORD: &[char] = &['?', '!', ')', '"', ';', '}', ']', '*', ':', '@', '\'', '(', '{', '['];

fn is_word_start(c: char) -> bool {
    !c.is_whitespace() && !NON_WORD_START.contains(&c)
}

pub(crate) fn is_non_word(c: char) -> bool {
    NON_WORD.contains(&c)
}

/// If a multi-character punctuation run (`--`, `..`) starts at `idx`, return its end.
fn multi_char_end(text: &str, idx: usize) -> Option<usize> {
    let rest = &text[idx..];
    let run = |c: char| idx + rest.find(|x| x != c).unwrap_or(rest.len());
    if rest.starts_with("--") {
        Some(run('-'))
    } else if rest.starts_with("..") {
        Some(run('.'))
    } else {
        None
    }
}

/// A comma ends a word when it is followed by the end of the text, whitespace,
/// a non-word character or a multi-character punctuation run.
fn comma_ends_word(text: &str, comma: usize) -> bool {
    let after = comma + 1;
    match text[after..].chars().next() {
        None => true,
        Some(c) => c.is_whitespace() || is_non_word(c) || multi_char_end(text, after).is_some(),
    }
}

/// Byte spans (`start..end`) of every token of `text`.
///
/// Every non-whitespace character of `text` belongs to exactly one span.
pub fn token_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut idx = 0;

    while let Some(c) = text[idx..].chars().next() {
        if c.is_whitespace() {
            idx += c.len_utf8();
            continue;
        }

        if let Some(end) = multi_char_end(text, idx) {
            spans.push((idx, end));
            idx = end;
            continue;
        }

        let mut end = idx + c.len_utf8();
        if is_word_start(c) {
            while let Some(next) = text[end..].chars().next() {
                if next.is_whitespace()
                    || is_non_word(next)
                    || multi_char_end(text, end).is_some()
                    || (next == ',' && comma_ends_word(text, end))
                {
                    break;
                }
                end += next.len_utf8();
            }
        }
        spans.push((idx, end));
        idx = end;
    }

    spans
}

/// Tokenize `text` into words and punctuation.
pub fn tokenize(text: &str) -> Vec<&str> {
    token_spans(text)
        .into_iter()
        .map(|(start, end)| &text[start..end])
        .collect()
}

/// Tokenize a paragraph and join tokens with single spaces, giving a corpus line.
pub fn tokenize_line(text: &str) -> String {
    tokenize(text).join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn periods_stay_attached() {
        let tokens = tokenize("Hello there. Dr. Smith arrived.");
        assert_eq!(tokens, vec!["Hello", "there.", "Dr.", "Smith", "arrived."]);
        assert!(!tokens.contains(&"."));
    }

    #[test]
    fn punctuation_is_split() {
        let tokens = tokenize("Önnur kona Þorbjörg Bergsdóttir (1807-1851) frá Eyvindarstöðum, í Sölvadal.");
        assert_eq!(
            tokens,
            vec![
                "Önnur",
                "kona",
                "Þorbjörg",
                "Bergsdóttir",
                "(",
                "1807-1851",
                ")",
                "frá",
                "Eyvindarstöðum",
                ",",
                "í",
                "Sölvadal."
            ]
        );
    }

    #[test]
    fn multi_char_punctuation() {
        assert_eq!(tokenize("wait... -- what?"), vec!["wait", "...", "--", "what", "?"]);
    }

    #[test]
    fn inner_commas_are_kept() {
        assert_eq!(tokenize("1,000,000 people,"), vec!["1,000,000", "people", ","]);
    }

    #[test]
    fn quotes() {
        assert_eq!(
            tokenize("\"Hello.\" she said"),
            vec!["\"", "Hello.", "\"", "she", "said"]
        );
    }

    #[test]
    fn idempotent() {
        let text = "Hans klaufi er ævintýri eftir H.C. Andersen. Hún var 32 árum yngri, sem var 72 ára!";
        assert_eq!(tokenize(text), tokenize(text));
    }

    #[test]
    fn comma_runs() {
        // the first comma of `,,` does not end the word
        assert_eq!(tokenize("(B,,]"), vec!["(", "B,", ",", "]"]);
        // so a joined line can tokenize differently
        assert_eq!(tokenize(&tokenize_line("(B,,]")), vec!["(", "B", ",", ",", "]"]);
    }

    #[test]
    fn spans_cover_non_whitespace() {
        let text = "  a (b) c.. d,e , f  ";
        let covered: String = token_spans(text)
            .into_iter()
            .map(|(s, e)| &text[s..e])
            .collect();
        let expected: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(covered, expected);
    }

    #[test]
    fn empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \n\t ").is_empty());
        assert_eq!(tokenize_line("   "), "");
    }
}
