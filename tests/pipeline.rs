use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use wikipunkt::config::Config;
use wikipunkt::error::Error;
use wikipunkt::io::ModelStore;
use wikipunkt::pipelines::{Collect, Pipeline, Train};
use wikipunkt::punkt::PunktModel;
use wikipunkt::sources::{Retry, Source};
use wikipunkt::splitter::SentenceModel;
use wikipunkt::verify::{self, SAMPLES};

/// In-memory wiki. Titles that have no page fail to render.
#[derive(Default)]
struct Wiki {
    titles: Vec<String>,
    pages: HashMap<String, String>,
}

impl Wiki {
    fn with_page(mut self, title: &str, html: &str) -> Self {
        self.titles.push(title.to_string());
        self.pages.insert(title.to_string(), html.to_string());
        self
    }

    fn with_missing_page(mut self, title: &str) -> Self {
        self.titles.push(title.to_string());
        self
    }
}

impl Source for Wiki {
    fn random_titles(&self, _lang: &str, count: usize) -> Result<Vec<String>, Error> {
        Ok(self.titles.iter().take(count).cloned().collect())
    }

    fn rendered_html(&self, title: &str, _lang: &str) -> Result<String, Error> {
        self.pages
            .get(title)
            .cloned()
            .ok_or_else(|| Error::RemoteFetch(format!("{title}: 503 Service Unavailable")))
    }
}

/// Fails every title query.
struct Down;

impl Source for Down {
    fn random_titles(&self, _lang: &str, _count: usize) -> Result<Vec<String>, Error> {
        Err(Error::RemoteFetch("connection refused".to_string()))
    }

    fn rendered_html(&self, _title: &str, _lang: &str) -> Result<String, Error> {
        Err(Error::RemoteFetch("connection refused".to_string()))
    }
}

fn config(dir: &Path, count: usize) -> Config {
    let mut config = Config::default();
    config.article_count = count;
    config.corpus_path = dir.join("icelandic.plain");
    config.model_path = dir.join("is.punkt.json");
    config
}

fn collect<S: Source>(source: &S, config: &Config) -> Result<wikipunkt::pipelines::CollectSummary, Error> {
    Collect::new(source, config)
        .with_retry(Retry::new(2, Duration::ZERO))
        .run()
}

fn corpus_lines(config: &Config) -> Vec<String> {
    std::fs::read_to_string(&config.corpus_path)
        .unwrap()
        .lines()
        .map(String::from)
        .collect()
}

#[test]
fn one_line_per_paragraph() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path(), 5);
    let wiki = (0..5).fold(Wiki::default(), |wiki, i| {
        wiki.with_page(
            &format!("Síða {i}"),
            &format!("<div class=\"mw-parser-output\"><p>Grein <b>númer</b> {i}.</p></div>"),
        )
    });

    let summary = collect(&wiki, &config).unwrap();
    assert_eq!(summary.collected, 5);
    assert_eq!(summary.paragraphs, 5);
    assert_eq!(
        corpus_lines(&config),
        (0..5).map(|i| format!("Grein númer {i}.")).collect::<Vec<_>>()
    );
}

#[test_log::test]
fn empty_paragraphs_are_suppressed() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path(), 2);
    let wiki = Wiki::default()
        .with_page("Tóm", "<div><p></p><p>  <br> </p></div>")
        .with_page("Engin", "<ul><li>listi</li></ul>");

    let summary = collect(&wiki, &config).unwrap();
    assert_eq!(summary.collected, 2);
    assert_eq!(summary.paragraphs, 0);
    assert_eq!(summary.dropped, 2);
    assert!(corpus_lines(&config).is_empty());

    // nothing to train on
    let res = Train::<PunktModel>::new(&config).run();
    assert!(matches!(res, Err(Error::EmptyCorpus(_))));
}

#[test_log::test]
fn failing_articles_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path(), 3);
    let wiki = Wiki::default()
        .with_page("Hekla", "<p>Hekla er eldfjall.</p>")
        .with_missing_page("Katla")
        .with_page("Askja", "<p>Askja er eldstöð.</p>");

    let summary = collect(&wiki, &config).unwrap();
    assert_eq!(summary.requested, 3);
    assert_eq!(summary.collected, 2);
    assert_eq!(summary.skipped, 1);
    assert_eq!(
        corpus_lines(&config),
        vec!["Hekla er eldfjall.", "Askja er eldstöð."]
    );
}

#[test]
fn title_query_failure_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path(), 3);

    assert!(matches!(collect(&Down, &config), Err(Error::RemoteFetch(_))));
    assert!(!config.corpus_path.exists());
}

#[test]
fn icelandic_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path(), 1);
    let wiki = Wiki::default().with_page(
        "Bóndi",
        "<p>Hann var þríkvæntur.</p><p>Fyrsta kona hans var Þorbjörg.</p>",
    );

    collect(&wiki, &config).unwrap();
    assert_eq!(
        corpus_lines(&config),
        vec!["Hann var þríkvæntur.", "Fyrsta kona hans var Þorbjörg."]
    );

    Train::<PunktModel>::new(&config).run().unwrap();
    let model: PunktModel = ModelStore::new(dir.path()).load("is").unwrap();
    assert_eq!(
        model.segment("Hann var þríkvæntur. Fyrsta kona hans var Þorbjörg."),
        vec!["Hann var þríkvæntur.", "Fyrsta kona hans var Þorbjörg."]
    );
}

/// Paragraphs where `stk.` is always followed by a lowercase word.
fn shop_wiki(nb_articles: usize) -> Wiki {
    (0..nb_articles).fold(Wiki::default(), |wiki, i| {
        wiki.with_page(
            &format!("Verslun {i}"),
            &format!(
                "<p>Hann keypti {i} stk. af brauði í versluninni. Hún seldi mjólk á markaðnum.</p>"
            ),
        )
    })
}

#[test_log::test]
fn learned_abbreviation_does_not_split() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path(), 40);

    collect(&shop_wiki(40), &config).unwrap();
    let model = Train::<PunktModel>::new(&config).run().unwrap();
    assert!(model.is_abbrev("stk"));

    assert_eq!(
        model.segment("Hann keypti 7 stk. af brauði í versluninni. Hún seldi mjólk á markaðnum."),
        vec![
            "Hann keypti 7 stk. af brauði í versluninni.",
            "Hún seldi mjólk á markaðnum."
        ]
    );
}

#[test]
fn training_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path(), 40);
    collect(&shop_wiki(40), &config).unwrap();

    Train::<PunktModel>::new(&config).run().unwrap();
    let first = std::fs::read(&config.model_path).unwrap();
    Train::<PunktModel>::new(&config).run().unwrap();
    let second = std::fs::read(&config.model_path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn verification_is_complete() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path(), 40);
    collect(&shop_wiki(40), &config).unwrap();
    let model = Train::<PunktModel>::new(&config).run().unwrap();

    let store = ModelStore::new(dir.path());
    for sample in &SAMPLES {
        store.save(sample.code, &model).unwrap();
    }

    let reports = verify::verify::<PunktModel>(&store, &SAMPLES).unwrap();
    assert_eq!(reports.len(), 3);
    for report in reports {
        assert!(report.complete, "{}", report.render());
    }
}

#[test]
fn missing_model() {
    let dir = tempfile::tempdir().unwrap();
    let store = ModelStore::new(dir.path());
    let res = store.load::<PunktModel>("nonexistent_language");
    assert!(matches!(res, Err(Error::ModelNotFound(lang)) if lang == "nonexistent_language"));
}
