//! MediaWiki API client.
//!
//! Uses two queries of the `api.php` endpoint:
//! - `action=query&list=random` to get random titles of the main (article) namespace,
//! - `action=parse&prop=text` to get the rendered HTML of an article.
use std::time::Duration;

use log::debug;
use reqwest::Url;
use serde::Deserialize;

use super::Source;
use crate::error::Error;

/// Default API endpoint. `{lang}` is replaced by the language code.
pub const API_URL: &str = "https://{lang}.wikipedia.org/w/api.php";

/// Maximum `rnlimit` allowed for regular clients.
const RANDOM_LIMIT: usize = 500;

const USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION"),
    " (sentence splitter corpus collection)"
);

#[derive(Debug, Deserialize)]
struct ApiError {
    code: String,
    info: String,
}

#[derive(Debug, Deserialize)]
struct RandomPage {
    title: String,
}

#[derive(Debug, Deserialize)]
struct RandomQuery {
    random: Vec<RandomPage>,
}

#[derive(Debug, Deserialize)]
struct RandomResponse {
    query: Option<RandomQuery>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ParsedPage {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ParseResponse {
    parse: Option<ParsedPage>,
    error: Option<ApiError>,
}

fn api_error(e: ApiError) -> Error {
    Error::RemoteFetch(format!("api error {}: {}", e.code, e.info))
}

/// Extract titles from a `list=random` response.
fn decode_random(body: &str) -> Result<Vec<String>, Error> {
    let response: RandomResponse = serde_json::from_str(body)
        .map_err(|e| Error::Parse(format!("invalid random titles response: {e}")))?;

    match (response.query, response.error) {
        (_, Some(e)) => Err(api_error(e)),
        (Some(query), None) => Ok(query.random.into_iter().map(|p| p.title).collect()),
        (None, None) => Err(Error::Parse("random titles response has no query".to_string())),
    }
}

/// Extract the rendered HTML from an `action=parse` response.
fn decode_parse(body: &str) -> Result<String, Error> {
    let response: ParseResponse = serde_json::from_str(body)
        .map_err(|e| Error::Parse(format!("invalid parse response: {e}")))?;

    match (response.parse, response.error) {
        (_, Some(e)) => Err(api_error(e)),
        (Some(page), None) => Ok(page.text),
        (None, None) => Err(Error::Parse("parse response has no text".to_string())),
    }
}

/// Wikipedia client, backed by a blocking [reqwest] client.
pub struct Wikipedia {
    client: reqwest::blocking::Client,
    api_url: String,
}

impl Wikipedia {
    /// Client for `https://<lang>.wikipedia.org`.
    pub fn new() -> Result<Self, Error> {
        Self::with_api_url(API_URL)
    }

    /// Client for another MediaWiki installation.
    /// `api_url` may contain a `{lang}` placeholder.
    pub fn with_api_url(api_url: &str) -> Result<Self, Error> {
        // fail early on malformed urls
        Url::parse(&api_url.replace("{lang}", "en"))?;

        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(60))
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.to_string(),
        })
    }

    fn endpoint(&self, lang: &str, params: &[(&str, &str)]) -> Result<Url, Error> {
        let mut url = Url::parse(&self.api_url.replace("{lang}", lang))?;
        url.query_pairs_mut()
            .extend_pairs(params)
            .append_pair("format", "json")
            .append_pair("formatversion", "2");
        Ok(url)
    }

    fn get(&self, url: Url) -> Result<String, Error> {
        debug!("GET {}", url);
        let response = self.client.get(url).send()?.error_for_status()?;
        Ok(response.text()?)
    }
}

impl Source for Wikipedia {
    fn random_titles(&self, lang: &str, count: usize) -> Result<Vec<String>, Error> {
        let mut titles = Vec::with_capacity(count);

        while titles.len() < count {
            let limit = (count - titles.len()).min(RANDOM_LIMIT).to_string();
            let url = self.endpoint(
                lang,
                &[
                    ("action", "query"),
                    ("list", "random"),
                    ("rnnamespace", "0"),
                    ("rnlimit", limit.as_str()),
                ],
            )?;

            let batch = decode_random(&self.get(url)?)?;
            if batch.is_empty() {
                return Err(Error::RemoteFetch(format!(
                    "[{}] no random titles returned",
                    lang
                )));
            }
            debug!("[{}] got {} random titles", lang, batch.len());
            titles.extend(batch);
        }

        titles.truncate(count);
        Ok(titles)
    }

    fn rendered_html(&self, title: &str, lang: &str) -> Result<String, Error> {
        let url = self.endpoint(
            lang,
            &[
                ("action", "parse"),
                ("page", title),
                ("prop", "text"),
                ("redirects", "1"),
            ],
        )?;
        decode_parse(&self.get(url)?)
    }
}
