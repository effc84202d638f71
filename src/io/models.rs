//! Trained model storage, keyed by language code.
use std::path::{Path, PathBuf};

use log::info;

use crate::error::Error;
use crate::splitter::SentenceModel;

/// Model file name for a language code.
pub fn model_filename(lang: &str) -> String {
    format!("{}.punkt.json", lang)
}

/// Directory holding one model file per language.
pub struct ModelStore {
    dir: PathBuf,
}

impl ModelStore {
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
        }
    }

    pub fn path(&self, lang: &str) -> PathBuf {
        self.dir.join(model_filename(lang))
    }

    /// Load the model of `lang`.
    ///
    /// # Errors
    /// [Error::ModelNotFound] (holding `lang`) if no model has been trained for it.
    pub fn load<M: SentenceModel>(&self, lang: &str) -> Result<M, Error> {
        let path = self.path(lang);
        info!("[{}] loading model from {:?}", lang, path);
        M::load(&path).map_err(|e| match e {
            Error::ModelNotFound(_) => Error::ModelNotFound(lang.to_string()),
            e => e,
        })
    }

    pub fn save<M: SentenceModel>(&self, lang: &str, model: &M) -> Result<PathBuf, Error> {
        let path = self.path(lang);
        model.save(&path)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::punkt::PunktModel;

    #[test]
    fn nonexistent_language() {
        let dir = tempfile::tempdir().unwrap();
        let store = ModelStore::new(dir.path());
        match store.load::<PunktModel>("nonexistent_language") {
            Err(Error::ModelNotFound(lang)) => assert_eq!(lang, "nonexistent_language"),
            other => panic!("expected ModelNotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = ModelStore::new(dir.path());
        let mut model = PunktModel::default();
        model.insert_abbrev("stk");

        let path = store.save("is", &model).unwrap();
        assert_eq!(path, dir.path().join("is.punkt.json"));

        let loaded: PunktModel = store.load("is").unwrap();
        assert!(loaded.is_abbrev("stk"));
    }
}
