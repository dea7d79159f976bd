//! Design source client.
//!
//! The design source is an external service that has already simplified
//! the native design file into the node tree consumed by the generator.
//! This client only moves bytes and parses JSON; all decision logic lives
//! downstream in `sprig-codegen`.

use std::path::Path;

use log::debug;
use sprig_core::DesignDocument;

use crate::error::Result;

/// HTTP client for a design source service.
pub struct DesignSource {
    agent: ureq::Agent,
    base_url: String,
    token: Option<String>,
}

impl DesignSource {
    /// Create a client for the given service base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            agent: ureq::Agent::new_with_defaults(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Attach an access token sent as a bearer credential.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Fetch the simplified document for a design file key.
    ///
    /// No retries: a failure is surfaced as a labeled error and the caller
    /// decides what to do with it.
    pub fn fetch_document(&self, file_key: &str) -> Result<DesignDocument> {
        let url = format!("{}/v1/files/{}/simplified", self.base_url, file_key);
        debug!("fetching design document from {url}");

        let mut request = self.agent.get(&url);
        if let Some(token) = &self.token {
            request = request.header("Authorization", &format!("Bearer {token}"));
        }

        let doc: DesignDocument = request.call()?.into_body().read_json()?;
        debug!(
            "fetched document with {} top-level nodes, {} vars",
            doc.nodes.len(),
            doc.vars.len()
        );
        Ok(doc)
    }
}

/// Load a simplified document from a local JSON file.
///
/// The file uses the same shape the design source returns, so trees can be
/// captured once and replayed offline.
pub fn load_document(path: impl AsRef<Path>) -> Result<DesignDocument> {
    let raw = std::fs::read_to_string(path.as_ref())?;
    let doc: DesignDocument = serde_json::from_str(&raw)?;
    debug!(
        "loaded document from {} with {} top-level nodes",
        path.as_ref().display(),
        doc.nodes.len()
    );
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use std::io::Write;

    #[test]
    fn loads_document_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "name": "Fixture",
                "nodes": [{{ "id": "1:1", "name": "Primary Button", "type": "FRAME", "text": "Go" }}]
            }}"#
        )
        .unwrap();

        let doc = load_document(file.path()).unwrap();
        assert_eq!(doc.name.as_deref(), Some("Fixture"));
        assert_eq!(doc.nodes.len(), 1);
        assert_eq!(doc.nodes[0].text.as_deref(), Some("Go"));
    }

    #[test]
    fn malformed_json_is_a_labeled_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load_document(file.path()).unwrap_err();
        assert!(matches!(err, FetchError::InvalidDocument(_)));
        assert!(err.to_string().starts_with("invalid design document"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_document("/nonexistent/sprig-fixture.json").unwrap_err();
        assert!(matches!(err, FetchError::Io(_)));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let source = DesignSource::new("https://design.example.com/");
        assert_eq!(source.base_url, "https://design.example.com");
    }
}
