/*! Punkt sentence boundary detection

Implementation of Kiss and Strunk's unsupervised Punkt algorithm
(_Unsupervised Multilingual Sentence Boundary Detection_, 2006).

A [Trainer] learns abbreviations, collocations, frequent sentence starters and orthographic
context from raw text; the resulting [PunktModel] splits text into sentences.

```
use wikipunkt::punkt::PunktModel;
use wikipunkt::splitter::SentenceModel;

let model = PunktModel::train("Hann var þríkvæntur . Fyrsta kona hans var Þorbjörg .", &Default::default());
let sentences = model.segment("Hann var þríkvæntur. Fyrsta kona hans var Þorbjörg.");
assert_eq!(sentences, vec!["Hann var þríkvæntur.", "Fyrsta kona hans var Þorbjörg."]);
```
!*/
mod annotate;
mod model;
pub mod ortho;
mod params;
mod stats;
mod token;
mod trainer;

pub use model::PunktModel;
pub use params::TrainerParameters;
pub use trainer::Trainer;
