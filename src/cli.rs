//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use wikipunkt::config::Config;
use wikipunkt::error::Error;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "wikipunkt",
    about = "Wikipedia corpus collection and sentence splitter training."
)]
/// Holds every command that is callable by the `wikipunkt` command.
pub enum Wikipunkt {
    #[structopt(about = "Collect a corpus, then train a sentence splitter on it")]
    Run(Run),
    #[structopt(about = "Collect a corpus from random Wikipedia articles")]
    Collect(Collect),
    #[structopt(about = "Train a sentence splitter on a collected corpus")]
    Train(Train),
    #[structopt(about = "Segment sample texts with trained models")]
    Verify(Verify),
    #[structopt(about = "Split a text into sentences, one per line")]
    Split(Split),
}

#[derive(Debug, StructOpt)]
pub struct Language {
    #[structopt(
        short = "l",
        long = "lang",
        default_value = "is",
        help = "wikipedia language code"
    )]
    pub code: String,
    #[structopt(
        long = "language",
        help = "language name, used to name the corpus (guessed from the code if absent)"
    )]
    pub name: Option<String>,
    #[structopt(
        long = "corpus",
        parse(from_os_str),
        help = "corpus location (default: <language>.plain)"
    )]
    pub corpus: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
pub struct Fetch {
    #[structopt(
        short = "n",
        long = "articles",
        default_value = "1000",
        help = "number of random articles"
    )]
    pub articles: usize,
    #[structopt(
        long = "api-url",
        help = "MediaWiki API url, {lang} is replaced by the language code"
    )]
    pub api_url: Option<String>,
    #[structopt(long = "retries", default_value = "3", help = "attempts per query")]
    pub retries: usize,
    #[structopt(
        short = "t",
        long = "workers",
        default_value = "1",
        help = "number of fetching threads"
    )]
    pub workers: usize,
    #[structopt(
        long = "min-tokens",
        default_value = "1",
        help = "minimum number of tokens of a paragraph"
    )]
    pub min_tokens: usize,
}

#[derive(Debug, StructOpt)]
pub struct Run {
    #[structopt(flatten)]
    pub lang: Language,
    #[structopt(flatten)]
    pub fetch: Fetch,
    #[structopt(
        long = "model",
        parse(from_os_str),
        help = "model location (default: <code>.punkt.json)"
    )]
    pub model: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
pub struct Collect {
    #[structopt(flatten)]
    pub lang: Language,
    #[structopt(flatten)]
    pub fetch: Fetch,
}

#[derive(Debug, StructOpt)]
pub struct Train {
    #[structopt(flatten)]
    pub lang: Language,
    #[structopt(
        long = "model",
        parse(from_os_str),
        help = "model location (default: <code>.punkt.json)"
    )]
    pub model: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
pub struct Verify {
    #[structopt(
        long = "models-dir",
        parse(from_os_str),
        default_value = ".",
        help = "directory holding <code>.punkt.json models"
    )]
    pub models_dir: PathBuf,
    #[structopt(help = "language codes to verify (default: is ko hu)")]
    pub langs: Vec<String>,
}

#[derive(Debug, StructOpt)]
pub struct Split {
    #[structopt(
        short = "l",
        long = "lang",
        default_value = "is",
        help = "wikipedia language code"
    )]
    pub code: String,
    #[structopt(
        long = "model",
        parse(from_os_str),
        help = "model location (default: <code>.punkt.json)"
    )]
    pub model: Option<PathBuf>,
    #[structopt(parse(from_os_str), help = "text file (default: stdin)")]
    pub src: Option<PathBuf>,
}

impl Language {
    fn config(&self) -> Config {
        let mut config = match &self.name {
            Some(name) => Config::with_language(name, &self.code),
            None => Config::new(&self.code),
        };
        if let Some(corpus) = &self.corpus {
            config.corpus_path = corpus.clone();
        }
        config
    }
}

impl Fetch {
    fn apply(&self, config: &mut Config) {
        config.article_count = self.articles;
        config.api_url = self.api_url.clone();
        config.retries = self.retries;
        config.workers = self.workers;
        config.min_tokens = self.min_tokens;
    }
}

impl TryFrom<&Run> for Config {
    type Error = Error;
    fn try_from(run: &Run) -> Result<Self, Self::Error> {
        let mut config = run.lang.config();
        run.fetch.apply(&mut config);
        if let Some(model) = &run.model {
            config.model_path = model.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

impl TryFrom<&Collect> for Config {
    type Error = Error;
    fn try_from(collect: &Collect) -> Result<Self, Self::Error> {
        let mut config = collect.lang.config();
        collect.fetch.apply(&mut config);
        config.validate()?;
        Ok(config)
    }
}

impl TryFrom<&Train> for Config {
    type Error = Error;
    fn try_from(train: &Train) -> Result<Self, Self::Error> {
        let mut config = train.lang.config();
        if let Some(model) = &train.model {
            config.model_path = model.clone();
        }
        config.validate()?;
        Ok(config)
    }
}
