use crate::client::SparqlClient;
use crate::error::SparqlError;
use reqwest::{StatusCode, Url};
use tracing::debug;

pub struct HealthManager<'a> {
    client: &'a SparqlClient,
}

impl<'a> HealthManager<'a> {
    pub(crate) fn new(client: &'a SparqlClient) -> Self {
        Self { client }
    }

    /// Sends an HTTP HEAD request to the endpoint.
    ///
    /// Succeeds on status 200 exactly; any other status or transport failure
    /// is an error. Cancellation is caller-driven: bound the returned future
    /// with `tokio::time::timeout` or drop it to abort the exchange.
    pub async fn ping(&self) -> Result<(), SparqlError> {
        let http = self.client.http()?;
        let url = Url::parse(self.client.endpoint())
            .map_err(|e| SparqlError::InvalidEndpoint(e.to_string()))?;

        let response = http.head(url).await?;
        debug!(
            status = %response.status(),
            headers = ?response.headers(),
            "ping response"
        );

        if response.status() != StatusCode::OK {
            return Err(SparqlError::UnexpectedStatus {
                status: response.status().as_u16(),
            });
        }
        Ok(())
    }

    pub async fn is_healthy(&self) -> bool {
        self.ping().await.is_ok()
    }
}
