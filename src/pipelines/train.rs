//! Sentence splitter training pipeline.
//!
//! Reads the whole corpus, trains a [SentenceModel] in one pass and persists it.
//! The model file is only replaced once the new model is completely written.
use std::marker::PhantomData;
use std::path::PathBuf;

use log::info;

use crate::config::Config;
use crate::error::Error;
use crate::io::read_corpus;
use crate::pipelines::pipeline::Pipeline;
use crate::punkt::PunktModel;
use crate::splitter::SentenceModel;

pub struct Train<M: SentenceModel = PunktModel> {
    corpus: PathBuf,
    model: PathBuf,
    params: M::Parameters,
    phantom: PhantomData<M>,
}

impl<M: SentenceModel> Train<M> {
    pub fn new(config: &Config) -> Self {
        Self {
            corpus: config.corpus_path.clone(),
            model: config.model_path.clone(),
            params: M::Parameters::default(),
            phantom: PhantomData,
        }
    }

    /// Use custom trainer parameters.
    pub fn with_params(mut self, params: M::Parameters) -> Self {
        self.params = params;
        self
    }
}

impl<M: SentenceModel> Pipeline<M> for Train<M> {
    fn run(&self) -> Result<M, Error> {
        let text = read_corpus(&self.corpus)?;

        info!("training on {:?}", self.corpus);
        let model = M::train(&text, &self.params);

        model.save(&self.model)?;
        info!("model saved to {:?}", self.model);
        Ok(model)
    }
}
