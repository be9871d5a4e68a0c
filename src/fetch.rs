use std::time::Duration;

use crate::config::FetchConfig;
use crate::error::{Result, StorelensError};

/// Read-only page retrieval
///
/// Returns the body of a successful response. Any failure, including a
/// non-2xx status or a blocked request, is an error.
pub trait Retriever {
    fn retrieve(&self, url: &str) -> Result<String>;
}

/// Retrieval over HTTP (ureq)
pub struct HttpRetriever {
    agent: ureq::Agent,
    user_agent: String,
}

impl HttpRetriever {
    pub fn new(config: &FetchConfig) -> Self {
        let agent = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
            .build()
            .into();
        Self {
            agent,
            user_agent: config.user_agent.clone(),
        }
    }
}

impl Retriever for HttpRetriever {
    fn retrieve(&self, url: &str) -> Result<String> {
        let response = self
            .agent
            .get(url)
            .header("User-Agent", &self.user_agent)
            .call()
            .map_err(|e| match e {
                ureq::Error::StatusCode(code) => StorelensError::HttpStatus(code),
                other => StorelensError::HttpError(other),
            })?;

        let html = response.into_body().read_to_string()?;
        Ok(html)
    }
}

/// Retriever that always fails, for offline analysis
pub struct OfflineRetriever;

impl Retriever for OfflineRetriever {
    fn retrieve(&self, _url: &str) -> Result<String> {
        Err(StorelensError::ExtractionError("retrieval disabled (offline mode)".into()))
    }
}

/// Coarse classification of a retrieval failure, for diagnostics only.
/// Every class leads to the same fallback path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetrievalFailure {
    Timeout,
    /// Access denied by the site (403/401/451)
    Blocked,
    Status(u16),
    Network,
    Other,
}

impl RetrievalFailure {
    pub fn classify(err: &StorelensError) -> Self {
        match err {
            StorelensError::HttpStatus(401 | 403 | 451) => RetrievalFailure::Blocked,
            StorelensError::HttpStatus(code) => RetrievalFailure::Status(*code),
            StorelensError::HttpError(ureq::Error::Timeout(_)) => RetrievalFailure::Timeout,
            StorelensError::HttpError(_) | StorelensError::IoError(_) => RetrievalFailure::Network,
            _ => RetrievalFailure::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_blocked_statuses() {
        for code in [401, 403, 451] {
            assert_eq!(
                RetrievalFailure::classify(&StorelensError::HttpStatus(code)),
                RetrievalFailure::Blocked
            );
        }
        assert_eq!(
            RetrievalFailure::classify(&StorelensError::HttpStatus(503)),
            RetrievalFailure::Status(503)
        );
    }

    #[test]
    fn test_offline_retriever_always_fails() {
        let err = OfflineRetriever.retrieve("https://example.com").unwrap_err();
        assert_eq!(RetrievalFailure::classify(&err), RetrievalFailure::Other);
    }
}
