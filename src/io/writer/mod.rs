/*! Corpus writing utilities
!*/
mod textwriter;

pub use textwriter::CorpusWriter;
