/*!
# IO utilities

Corpus writing/reading and trained model storage.

- Corpus files are named after the language (`icelandic.plain`) and hold one tokenized paragraph per line.
- Model files are named after the language code (`is.punkt.json`).
!*/
mod models;
pub mod reader;
pub mod writer;

pub use models::{model_filename, ModelStore};
pub use reader::read_corpus;
pub use writer::CorpusWriter;

/// Corpus file name for a language name.
pub fn corpus_filename(language: &str) -> String {
    format!("{}.plain", language)
}
