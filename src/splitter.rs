/*! Sentence splitter capability.

The pipelines only rely on [SentenceModel], so that another unsupervised sentence boundary
detector can replace [crate::punkt::PunktModel] without touching collection or training code.

Models are persisted as JSON. Saving goes through a temporary file that is renamed once fully
written, so a model file always holds a complete model.
!*/
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::Error;

pub trait SentenceModel: Serialize + DeserializeOwned {
    /// Trainer settings.
    type Parameters: Default + Clone;

    /// Learn a model from unannotated text, in a single pass.
    fn train(text: &str, params: &Self::Parameters) -> Self;

    /// Split `text` into sentences, as ordered, contiguous slices of `text`.
    fn segment<'t>(&self, text: &'t str) -> Vec<&'t str>;

    /// Persist the model at `path`.
    fn save(&self, path: &Path) -> Result<(), Error> {
        let tmp = partial_path(path);
        debug!("writing model to {:?}", tmp);

        let mut writer = BufWriter::new(File::create(&tmp)?);
        serde_json::to_writer(&mut writer, self)?;
        writer.flush()?;
        drop(writer);

        std::fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Load a model saved with [SentenceModel::save].
    ///
    /// # Errors
    /// [Error::ModelNotFound] if there is no file at `path`,
    /// [Error::Serialization] if the file does not hold a model.
    fn load(path: &Path) -> Result<Self, Error> {
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::ModelNotFound(path.display().to_string()),
            _ => Error::Io(e),
        })?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}

/// `<path>.part`, where files are written before being moved to `path`.
pub(crate) fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".part");
    PathBuf::from(name)
}
