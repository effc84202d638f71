//! Wikipedia corpus collection and unsupervised sentence splitter training.
//!
//! - [pipelines::Collect] builds a plain text corpus from random articles of a [sources::Source],
//! - [pipelines::Train] trains a [splitter::SentenceModel] ([punkt::PunktModel]) on it,
//! - [verify] segments sample texts with trained models.
pub mod config;
pub mod error;
pub mod extract;
pub mod filtering;
pub mod io;
pub mod lang;
pub mod pipelines;
pub mod punkt;
pub mod sources;
pub mod splitter;
pub mod tokenize;
pub mod verify;
