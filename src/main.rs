//! # wikipunkt
//!
//! Collects a plain text corpus from random Wikipedia articles and trains
//! an unsupervised (Punkt) sentence splitter on it.
//!
//! ## Getting started
//!
//! ```sh
//! wikipunkt 0.1.0
//! Wikipedia corpus collection and sentence splitter training.
//!
//! USAGE:
//!     wikipunkt <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     collect    Collect a corpus from random Wikipedia articles
//!     help       Prints this message or the help of the given subcommand(s)
//!     run        Collect a corpus, then train a sentence splitter on it
//!     split      Split a text into sentences, one per line
//!     train      Train a sentence splitter on a collected corpus
//!     verify     Segment sample texts with trained models
//! ```
//!
//! `wikipunkt run` collects 1000 icelandic articles into `icelandic.plain`
//! and writes the trained model to `is.punkt.json`.
//! Set `RUST_LOG=info` to follow progress.
use std::io::Read;
use std::path::PathBuf;

use structopt::StructOpt;

use wikipunkt::config::Config;
use wikipunkt::error::Error;
use wikipunkt::io::{model_filename, ModelStore};
use wikipunkt::pipelines::{Collect, Pipeline, Train};
use wikipunkt::punkt::PunktModel;
use wikipunkt::splitter::SentenceModel;
use wikipunkt::verify::{self, Sample, SAMPLES};

#[macro_use]
extern crate log;

mod cli;

fn collect(config: &Config) -> Result<(), Error> {
    let source = config.source()?;
    Collect::new(&source, config).run()?;
    Ok(())
}

fn train(config: &Config) -> Result<(), Error> {
    Train::<PunktModel>::new(config).run()?;
    Ok(())
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Wikipunkt::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Wikipunkt::Run(r) => {
            let config = Config::try_from(&r)?;
            collect(&config)?;
            train(&config)?;
        }

        cli::Wikipunkt::Collect(c) => collect(&Config::try_from(&c)?)?,

        cli::Wikipunkt::Train(t) => train(&Config::try_from(&t)?)?,

        cli::Wikipunkt::Verify(v) => {
            let samples: Vec<Sample> = if v.langs.is_empty() {
                SAMPLES.to_vec()
            } else {
                v.langs
                    .iter()
                    .map(|code| {
                        verify::sample(code)
                            .copied()
                            .ok_or_else(|| Error::Config(format!("no sample text for {:?}", code)))
                    })
                    .collect::<Result<_, _>>()?
            };

            let store = ModelStore::new(&v.models_dir);
            let reports = verify::verify::<PunktModel>(&store, &samples)?;
            for report in &reports {
                println!("{}", report.render());
            }

            let failed: Vec<&str> = reports
                .iter()
                .filter(|r| !r.complete)
                .map(|r| r.code.as_str())
                .collect();
            if !failed.is_empty() {
                error!("incomplete segmentation for {:?}", failed);
                return Err(Error::Custom(format!(
                    "verification failed for {}",
                    failed.join(", ")
                )));
            }
        }

        cli::Wikipunkt::Split(s) => {
            let path = s
                .model
                .unwrap_or_else(|| PathBuf::from(model_filename(&s.code)));
            let model = PunktModel::load(&path)?;

            let text = match s.src {
                Some(src) => std::fs::read_to_string(src)?,
                None => {
                    let mut text = String::new();
                    std::io::stdin().read_to_string(&mut text)?;
                    text
                }
            };

            for sentence in model.segment(&text) {
                println!("{}", sentence);
            }
        }
    };
    Ok(())
}
