//! Paragraph extraction from rendered article HTML.
use select::document::Document;
use select::predicate::Name;

/// Text of every `<p>` element of `html`, in document order.
///
/// Only text nodes are kept: nested markup (links, bold, references) is dropped
/// but its text is concatenated with the surrounding text.
pub fn paragraphs(html: &str) -> Vec<String> {
    let document = Document::from(html);
    document.find(Name("p")).map(|p| p.text()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_markup() {
        let html = r#"<div class="mw-parser-output">
            <table><tr><td>infobox</td></tr></table>
            <p><b>Hans klaufi</b> er <a href="/wiki/Ævintýri">ævintýri</a> eftir H.C. Andersen.</p>
            <h2>Saga</h2>
            <p>Hann var þríkvæntur.<sup>[1]</sup></p>
        </div>"#;

        assert_eq!(
            paragraphs(html),
            vec![
                "Hans klaufi er ævintýri eftir H.C. Andersen.",
                "Hann var þríkvæntur.[1]"
            ]
        );
    }

    #[test]
    fn no_paragraphs() {
        assert!(paragraphs("<ul><li>listi</li></ul>").is_empty());
        assert!(paragraphs("").is_empty());
    }

    #[test]
    fn empty_paragraph() {
        assert_eq!(paragraphs("<p><br></p><p>texti</p>"), vec!["", "texti"]);
    }

    #[test]
    fn malformed_html_is_tolerated() {
        assert_eq!(paragraphs("<p>opin <i>málsgrein"), vec!["opin málsgrein"]);
    }
}
