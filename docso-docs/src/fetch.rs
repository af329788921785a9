use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

use crate::error::DocError;
use crate::model::Document;

/// Source of package documentation consulted on cache misses.
#[async_trait]
pub trait DocFetcher: Send + Sync {
    async fn fetch(&self, package: &str) -> Result<Document, DocError>;
}

/// Fetches documents from a mirror serving `<base>/<package>.json`.
///
/// Every request is bounded by the client timeout, so a stalled mirror
/// surfaces as [`DocError::Fetch`] instead of hanging the caller.
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFetcher {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, DocError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| DocError::fetch("<client>", source))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        })
    }

    fn document_url(&self, package: &str) -> String {
        format!("{}/{package}.json", self.base_url)
    }
}

#[async_trait]
impl DocFetcher for HttpFetcher {
    async fn fetch(&self, package: &str) -> Result<Document, DocError> {
        if !is_valid_package(package) {
            return Err(DocError::NotFound(package.to_owned()));
        }

        let url = self.document_url(package);
        debug!(%url, "fetching package documentation");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| DocError::fetch(package, source))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(DocError::NotFound(package.to_owned()));
        }

        let response = response
            .error_for_status()
            .map_err(|source| DocError::fetch(package, source))?;

        let mut document = response
            .json::<Document>()
            .await
            .map_err(|source| DocError::fetch(package, source))?;

        if document.package.is_empty() {
            document.package = package.to_owned();
        }

        Ok(document)
    }
}

/// Import-path shaped identifiers only: no empty or `..` segments.
pub fn is_valid_package(package: &str) -> bool {
    !package.is_empty()
        && package.split('/').all(|segment| {
            !segment.is_empty()
                && segment != "."
                && segment != ".."
                && segment
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-' | '~'))
        })
}
