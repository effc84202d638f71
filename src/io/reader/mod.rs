/*! Corpus reading utilities
!*/
mod corpus;

pub use corpus::read_corpus;
