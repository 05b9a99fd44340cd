use crate::config::ConnectionConfig;
use crate::error::{NetworkError, SparqlError};
use reqwest::{Response, Url};

/// The live transport resource: a pooled `reqwest::Client` bound to a
/// [`ConnectionConfig`] at construction time.
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    config: ConnectionConfig,
}

impl HttpClient {
    pub fn with_config(config: ConnectionConfig) -> Result<Self, SparqlError> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .tcp_keepalive(config.keep_alive)
            .pool_max_idle_per_host(config.max_idle_conns)
            .pool_idle_timeout(config.idle_conn_timeout)
            .build()
            .map_err(|e| SparqlError::Network(NetworkError::ConnectionFailed(e.to_string())))?;

        Ok(Self { client, config })
    }

    pub async fn head(&self, url: Url) -> Result<Response, SparqlError> {
        let response = self.client.head(url).send().await?;
        Ok(response)
    }

    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish()
    }
}
