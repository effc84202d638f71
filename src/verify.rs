/*! Verification harness

Segments fixed sample texts with trained models, so that a human can eyeball the sentences,
and checks that every segmentation is complete: sentences are ordered slices of the (trimmed)
input, separated by whitespace only.
!*/
use log::{info, warn};

use crate::error::Error;
use crate::io::ModelStore;
use crate::splitter::SentenceModel;

/// Separator printed between sentences.
pub const SEPARATOR: &str = "\n-----\n";

/// Sample text of a language.
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub code: &'static str,
    pub name: &'static str,
    pub text: &'static str,
}

pub const SAMPLES: [Sample; 3] = [
    Sample {
        code: "is",
        name: "icelandic",
        text: "Hann var þríkvæntur. Fyrsta kona hans var Þorbjörg Þórarinsdóttir frá Múla í Aðaldal, f. 19. júlí 1786 á Myrká, d. 19. júlí 1846 á Völlum. Önnur kona Þorbjörg Bergsdóttir (1807-1851) frá Eyvindarstöðum í Sölvadal. Þriðja kona Guðrún Sigfúsdóttir (1812-1864). Hún var 32 árum yngri en brúðguminn, sem var 72 ára er hann kvæntist henni. Hans klaufi er ævintýri eftir H.C. Andersen. ",
    },
    Sample {
        code: "ko",
        name: "korean",
        text: "1월 20일(현지 시각), 아이티에서 12일 7.0의 강진에 이어 규모 5.9의 강한 지진(사진)이 다시 발생하였다.",
    },
    Sample {
        code: "hu",
        name: "hungarian",
        text: "II. József (Bécs, 1741. március 13. – Bécs, 1790. február 20.) osztrák főherceg, Mária Terézia és I. Ferenc császár legidősebb fia. 1765-től német-római császár, 1780-tól magyar és cseh király, az első uralkodó, aki a Habsburg–Lotaringiai-házból származott.",
    },
];

/// Sample for a language code.
pub fn sample(code: &str) -> Option<&'static Sample> {
    SAMPLES.iter().find(|s| s.code == code)
}

/// Segmentation of a sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub code: String,
    pub sentences: Vec<String>,
    /// Whether the sentences cover the sample exactly.
    pub complete: bool,
}

impl Report {
    /// Sentences joined by [SEPARATOR].
    pub fn render(&self) -> String {
        self.sentences.join(SEPARATOR)
    }
}

/// Check that `sentences` are non-empty, ordered and cover `input`,
/// with only whitespace in between.
pub fn is_complete(input: &str, sentences: &[&str]) -> bool {
    let mut rest = input.trim();
    for sentence in sentences {
        rest = rest.trim_start();
        if sentence.is_empty() || !rest.starts_with(sentence) {
            return false;
        }
        rest = &rest[sentence.len()..];
    }
    rest.trim().is_empty()
}

/// Segment `sample` with `model`.
pub fn check<M: SentenceModel>(model: &M, sample: &Sample) -> Report {
    let text = sample.text.trim();
    let sentences = model.segment(text);
    let complete = is_complete(text, &sentences);
    if !complete {
        warn!("[{}] incomplete segmentation", sample.code);
    }

    Report {
        code: sample.code.to_string(),
        sentences: sentences.into_iter().map(String::from).collect(),
        complete,
    }
}

/// Load the model of each sample's language from `store` and segment the sample.
///
/// # Errors
/// [Error::ModelNotFound] as soon as a language has no trained model.
pub fn verify<M: SentenceModel>(store: &ModelStore, samples: &[Sample]) -> Result<Vec<Report>, Error> {
    samples
        .iter()
        .map(|sample| {
            let model: M = store.load(sample.code)?;
            let report = check(&model, sample);
            info!(
                "[{}] {} sentences ({})",
                sample.name,
                report.sentences.len(),
                if report.complete { "complete" } else { "incomplete" }
            );
            Ok(report)
        })
        .collect()
}
