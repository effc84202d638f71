/*! Filtering utilities

Filters decide whether a corpus line is kept.

Filters implement [filter::Filter]: they have no state, so two successive equal inputs give two equal outputs.
! */
mod filter;
mod paragraph;

pub use filter::Filter;
pub use paragraph::MinTokens;
