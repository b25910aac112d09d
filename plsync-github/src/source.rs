//! Raw-URL source fetcher.

use std::time::Duration;

use log::info;

use plsync_sync::{FetchError, SourceFetcher};

use crate::{REQUEST_TIMEOUT_SECS, USER_AGENT};

/// Plain HTTP GET of the source playlist.
pub struct HttpSource {
    agent: ureq::Agent,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build();
        Self {
            agent,
            url: url.into(),
        }
    }
}

impl SourceFetcher for HttpSource {
    fn fetch(&self) -> Result<String, FetchError> {
        info!("fetching source from {}", self.url);
        let response = self
            .agent
            .get(&self.url)
            .set("User-Agent", USER_AGENT)
            .call()
            .map_err(|err| match err {
                ureq::Error::Status(status, _) => FetchError::Status {
                    status,
                    url: self.url.clone(),
                },
                ureq::Error::Transport(transport) => FetchError::Transport(transport.to_string()),
            })?;
        response
            .into_string()
            .map_err(|err| FetchError::Transport(err.to_string()))
    }
}
