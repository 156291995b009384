use cartlink_core::{ProcessingError, ProcessingErrorKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("endpoint not found: {url}")]
    NotFound { url: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("product handle not found")]
    HandleNotFound { url: String },

    #[error("storefront domain not found (expected an http:// or https:// URL)")]
    DomainExtractionFailed { url: String },

    #[error("invalid product endpoint \"{url}\": {reason}")]
    InvalidProductUrl { url: String, reason: String },
}

impl ScraperError {
    /// Classifies the error for the per-URL error report.
    #[must_use]
    pub fn kind(&self) -> ProcessingErrorKind {
        match self {
            ScraperError::HandleNotFound { .. } => ProcessingErrorKind::HandleNotFound,
            ScraperError::DomainExtractionFailed { .. } => {
                ProcessingErrorKind::DomainExtractionFailed
            }
            ScraperError::Deserialize { .. } => ProcessingErrorKind::ResponseParseFailed,
            ScraperError::Http(_)
            | ScraperError::NotFound { .. }
            | ScraperError::UnexpectedStatus { .. }
            | ScraperError::InvalidProductUrl { .. } => ProcessingErrorKind::FetchFailed,
        }
    }

    /// Wraps the error as a report entry attributed to the caller's input URL.
    #[must_use]
    pub fn to_processing_error(&self, source_url: &str) -> ProcessingError {
        ProcessingError {
            source_url: source_url.to_owned(),
            kind: self.kind(),
            message: self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_not_found_message_names_the_problem() {
        let err = ScraperError::HandleNotFound {
            url: "not-a-url".to_owned(),
        };
        let entry = err.to_processing_error("not-a-url");
        assert_eq!(entry.kind, ProcessingErrorKind::HandleNotFound);
        assert!(entry.message.contains("handle not found"), "{}", entry.message);
        assert_eq!(entry.source_url, "not-a-url");
    }

    #[test]
    fn http_status_errors_are_fetch_failures() {
        let not_found = ScraperError::NotFound {
            url: "https://a.com/products/x.js".to_owned(),
        };
        let server_error = ScraperError::UnexpectedStatus {
            status: 503,
            url: "https://a.com/products/x.js".to_owned(),
        };
        assert_eq!(not_found.kind(), ProcessingErrorKind::FetchFailed);
        assert_eq!(server_error.kind(), ProcessingErrorKind::FetchFailed);
        assert!(server_error.to_string().contains("503"));
    }

    #[test]
    fn deserialize_error_is_parse_failure() {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = ScraperError::Deserialize {
            context: "product x from https://a.com".to_owned(),
            source,
        };
        assert_eq!(err.kind(), ProcessingErrorKind::ResponseParseFailed);
    }
}
