use async_trait::async_trait;
use log::{debug, error};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("upstream service unreachable: {0}")]
    CommunicationError(String),
    #[error("upstream service answered with status {status}")]
    Upstream { status: u16, details: String },
    #[error("incorrect upstream response")]
    ResponseError,
    #[error("upstream response carried no text content")]
    EmptyContent,
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
            .filter(|text| !text.is_empty())
    }
}

#[mockall::automock]
#[async_trait]
pub trait Client: Send + Sync {
    /// Sends `prompt` to the generative-language service and returns the
    /// text of its first candidate.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

pub struct ClientImpl {
    url: String,
    api_key: String,
    client: reqwest::Client,
}

impl ClientImpl {
    fn new(url: String, api_key: String) -> Self {
        Self {
            url,
            api_key,
            client: reqwest::Client::new(),
        }
    }
}

pub fn create(url: String, api_key: String) -> impl Client {
    ClientImpl::new(url, api_key)
}

#[async_trait]
impl Client for ClientImpl {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let body = GenerateRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
        };

        debug!("Sending prompt of {} bytes upstream", prompt.len());
        let resp = self
            .client
            .post(&self.url)
            .query(&[("key", &self.api_key)])
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::CommunicationError(e.without_url().to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let details = resp.text().await.unwrap_or_default();
            error!("Upstream service answered with {}: {}", status, details);
            return Err(Error::Upstream {
                status: status.as_u16(),
                details,
            });
        }

        resp.json::<GenerateResponse>()
            .await
            .map_err(|_| Error::ResponseError)?
            .into_text()
            .ok_or(Error::EmptyContent)
    }
}
