use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wikipunkt::punkt::PunktModel;
use wikipunkt::splitter::SentenceModel;
use wikipunkt::tokenize::tokenize_line;
use wikipunkt::verify::SAMPLES;

const NB_LINES: usize = 2000;

// synthetic corpus, tokenized the same way collected paragraphs are
fn corpus() -> String {
    (0..NB_LINES)
        .map(|i| {
            tokenize_line(&format!(
                "Hann keypti {i} stk. af brauði í versluninni, f. 19. júlí. Hún seldi mjólk (og ost) á markaðnum."
            ))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn train(c: &mut Criterion) {
    let corpus = corpus();
    c.bench_function("punkt train", |b| {
        b.iter(|| PunktModel::train(black_box(&corpus), &Default::default()))
    });
}

pub fn segment(c: &mut Criterion) {
    let model = PunktModel::train(&corpus(), &Default::default());
    let text = SAMPLES
        .iter()
        .map(|s| s.text)
        .collect::<Vec<_>>()
        .join(" ");
    c.bench_function("punkt segment", |b| {
        b.iter(|| model.segment(black_box(&text)).len())
    });
}

pub fn tokenize(c: &mut Criterion) {
    let text = SAMPLES[0].text;
    c.bench_function("tokenize line", |b| b.iter(|| tokenize_line(black_box(text))));
}

criterion_group!(benches, train, segment, tokenize);
criterion_main!(benches);
