//! Corpus file writer.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::Error;
use crate::splitter::partial_path;

/// Writes corpus lines into `<dst>.part`, and moves the file to `dst` on [CorpusWriter::finish].
///
/// A run that fails before [CorpusWriter::finish] leaves `dst` untouched.
pub struct CorpusWriter {
    dst: PathBuf,
    tmp: PathBuf,
    text: BufWriter<File>,
    nb_lines: usize,
}

impl CorpusWriter {
    /// Create (or truncate) the temporary corpus file for `dst`.
    pub fn create(dst: &Path) -> Result<Self, Error> {
        let tmp = partial_path(dst);
        info!("creating {:?}", tmp);
        let text = BufWriter::new(File::create(&tmp)?);

        Ok(Self {
            dst: dst.to_path_buf(),
            tmp,
            text,
            nb_lines: 0,
        })
    }

    /// Write a newline-terminated line. `line` must not contain newlines.
    pub fn write_line(&mut self, line: &str) -> Result<(), Error> {
        self.text.write_all(line.as_bytes())?;
        self.text.write_all(b"\n")?;
        self.nb_lines += 1;
        Ok(())
    }

    /// number of lines written so far
    pub fn nb_lines(&self) -> usize {
        self.nb_lines
    }

    /// Flush and move the corpus to its final location.
    pub fn finish(mut self) -> Result<PathBuf, Error> {
        self.text.flush()?;
        debug!("renaming {:?} to {:?}", self.tmp, self.dst);
        std::fs::rename(&self.tmp, &self.dst)?;
        info!("wrote {} lines to {:?}", self.nb_lines, self.dst);
        Ok(self.dst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_and_finish() {
        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join("icelandic.plain");

        let mut cw = CorpusWriter::create(&dst).unwrap();
        cw.write_line("Hann var þríkvæntur .").unwrap();
        cw.write_line("Fyrsta kona hans var Þorbjörg .").unwrap();
        assert_eq!(cw.nb_lines(), 2);

        // nothing at the final location until finished
        assert!(!dst.exists());

        let path = cw.finish().unwrap();
        assert_eq!(path, dst);
        assert!(!partial_path(&dst).exists());
        assert_eq!(
            std::fs::read_to_string(&dst).unwrap(),
            "Hann var þríkvæntur .\nFyrsta kona hans var Þorbjörg .\n"
        );
    }

    #[test]
    fn overwrites_previous_corpus() {
        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join("icelandic.plain");
        std::fs::write(&dst, "old content\n").unwrap();

        let mut cw = CorpusWriter::create(&dst).unwrap();
        cw.write_line("new").unwrap();

        // old corpus is still there while writing
        assert_eq!(std::fs::read_to_string(&dst).unwrap(), "old content\n");

        cw.finish().unwrap();
        assert_eq!(std::fs::read_to_string(&dst).unwrap(), "new\n");
    }
}
