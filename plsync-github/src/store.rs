//! GitHub contents-API implementation of [`RemoteStore`].
//!
//! Every read and write is keyed to one fixed branch. File bodies travel
//! base64-encoded in both directions; `sha` is the optimistic-update
//! version token.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::debug;
use serde::Deserialize;
use serde_json::json;

use plsync_sync::{RemoteFile, RemoteStore, StoreError};

use crate::{REQUEST_TIMEOUT_SECS, USER_AGENT};

const API_ROOT: &str = "https://api.github.com";

/// Destination store backed by the GitHub contents API.
pub struct GithubStore {
    agent: ureq::Agent,
    repo: String,
    branch: String,
    token: String,
}

#[derive(Debug, Deserialize)]
struct ContentsResponse {
    content: String,
    sha: String,
}

impl GithubStore {
    pub fn new(repo: impl Into<String>, branch: impl Into<String>, token: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build();
        Self {
            agent,
            repo: repo.into(),
            branch: branch.into(),
            token: token.into(),
        }
    }

    fn contents_url(&self, path: &str) -> String {
        format!("{API_ROOT}/repos/{}/contents/{path}", self.repo)
    }

    fn request(&self, method: &str, url: &str) -> ureq::Request {
        self.agent
            .request(method, url)
            .set("Authorization", &format!("Bearer {}", self.token))
            .set("Accept", "application/vnd.github+json")
            .set("User-Agent", USER_AGENT)
    }

    fn put_contents(&self, path: &str, payload: serde_json::Value) -> Result<(), StoreError> {
        let url = self.contents_url(path);
        self.request("PUT", &url)
            .send_json(payload)
            .map_err(store_error)?;
        Ok(())
    }
}

impl RemoteStore for GithubStore {
    fn get(&self, path: &str) -> Result<Option<RemoteFile>, StoreError> {
        let url = format!("{}?ref={}", self.contents_url(path), self.branch);
        let response = match self.request("GET", &url).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(404, _)) => return Ok(None),
            Err(err) => return Err(store_error(err)),
        };
        let contents: ContentsResponse = response
            .into_json()
            .map_err(|e| StoreError::Decode(e.to_string()))?;
        let body = decode_body(&contents.content)?;
        debug!("fetched {path} ({} bytes)", body.len());
        Ok(Some(RemoteFile {
            path: path.to_string(),
            body,
            sha: contents.sha,
        }))
    }

    fn create(&self, path: &str, body: &str, message: &str) -> Result<(), StoreError> {
        self.put_contents(
            path,
            json!({
                "message": message,
                "content": STANDARD.encode(body.as_bytes()),
                "branch": self.branch,
            }),
        )
    }

    fn update(&self, path: &str, body: &str, sha: &str, message: &str) -> Result<(), StoreError> {
        self.put_contents(
            path,
            json!({
                "message": message,
                "content": STANDARD.encode(body.as_bytes()),
                "branch": self.branch,
                "sha": sha,
            }),
        )
    }
}

fn store_error(err: ureq::Error) -> StoreError {
    match err {
        ureq::Error::Status(status, response) => StoreError::Api {
            status,
            message: response
                .into_string()
                .unwrap_or_else(|_| "unreadable response body".to_string()),
        },
        ureq::Error::Transport(transport) => StoreError::Transport(transport.to_string()),
    }
}

/// The contents API wraps base64 at 60 columns; strip all whitespace
/// before decoding.
fn decode_body(content: &str) -> Result<String, StoreError> {
    let compact: String = content.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| StoreError::Decode(format!("invalid base64: {e}")))?;
    String::from_utf8(bytes).map_err(|e| StoreError::Decode(format!("invalid UTF-8: {e}")))
}
