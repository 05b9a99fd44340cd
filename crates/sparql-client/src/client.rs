use std::collections::HashMap;
use std::time::Duration;

use tracing::debug;

use crate::config::ConnectionConfig;
use crate::error::SparqlError;
use crate::http::HttpClient;
use crate::managers::HealthManager;
use crate::types::Uri;

/// A client for a remote SPARQL endpoint.
///
/// Owns a pooled HTTP transport shared by all requests issued through it.
/// The transport is configured once at construction via [`ClientOption`]s and
/// torn down by [`close`](SparqlClient::close); a closed client is never
/// reopened, and every request against it fails with
/// [`SparqlError::AlreadyClosed`].
#[derive(Debug)]
pub struct SparqlClient {
    endpoint: String,
    config: ConnectionConfig,
    prefixes: HashMap<String, Uri>,
    http: Option<HttpClient>,
}

/// A single construction-time configuration step.
///
/// Options apply in the order given to [`SparqlClient::new`]; when two options
/// target the same field the later one wins. A failing option aborts
/// construction without applying the remaining options.
pub struct ClientOption(Box<dyn FnOnce(&mut SparqlClient) -> Result<(), SparqlError> + Send>);

impl ClientOption {
    /// Sets the connection timeout. Also the TCP keep-alive interval.
    pub fn timeout(timeout: Duration) -> Self {
        Self(Box::new(move |client| {
            if timeout.is_zero() {
                return Err(SparqlError::Config(
                    "timeout must be greater than 0".to_string(),
                ));
            }
            client.config.connect_timeout = timeout;
            client.config.keep_alive = timeout;
            Ok(())
        }))
    }

    /// Sets the maximum number of idle pooled connections.
    pub fn max_idle_conns(n: usize) -> Self {
        Self(Box::new(move |client| {
            if n == 0 {
                return Err(SparqlError::Config(
                    "max idle connections must be greater than 0".to_string(),
                ));
            }
            client.config.max_idle_conns = n;
            Ok(())
        }))
    }

    /// Sets how long an idle pooled connection may live before eviction.
    pub fn idle_conn_timeout(timeout: Duration) -> Self {
        Self(Box::new(move |client| {
            if timeout.is_zero() {
                return Err(SparqlError::Config(
                    "idle connection timeout must be greater than 0".to_string(),
                ));
            }
            client.config.idle_conn_timeout = timeout;
            Ok(())
        }))
    }

    /// Registers a global PREFIX for all queries, overwriting any existing
    /// entry for `name`.
    pub fn prefix(name: impl Into<String>, uri: Uri) -> Self {
        let name = name.into();
        Self(Box::new(move |client| {
            if name.is_empty() {
                return Err(SparqlError::Config(
                    "prefix name must not be empty".to_string(),
                ));
            }
            client.prefixes.insert(name, uri);
            Ok(())
        }))
    }

    fn apply(self, client: &mut SparqlClient) -> Result<(), SparqlError> {
        (self.0)(client)
    }
}

impl std::fmt::Debug for ClientOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientOption").finish_non_exhaustive()
    }
}

impl SparqlClient {
    /// Builds a client for `endpoint`, applying `options` in order.
    ///
    /// The endpoint is not validated here; a malformed endpoint surfaces as
    /// [`SparqlError::InvalidEndpoint`] at request time. The first failing
    /// option aborts construction and no client is returned.
    pub fn new(
        endpoint: impl Into<String>,
        options: impl IntoIterator<Item = ClientOption>,
    ) -> Result<Self, SparqlError> {
        let mut client = Self {
            endpoint: endpoint.into(),
            config: ConnectionConfig::default(),
            prefixes: HashMap::new(),
            http: None,
        };

        for option in options {
            option.apply(&mut client)?;
        }
        client.config.validate().map_err(SparqlError::Config)?;

        client.http = Some(HttpClient::with_config(client.config.clone())?);
        debug!(endpoint = %client.endpoint, config = ?client.config, "sparql client configured");
        Ok(client)
    }

    /// Releases the connection pool.
    ///
    /// Idle pooled connections are closed; requests already in flight hold
    /// their own reference to the pool and finish naturally without being
    /// reused afterward. Closing is one-way: a second call fails with
    /// [`SparqlError::AlreadyClosed`].
    pub fn close(&mut self) -> Result<(), SparqlError> {
        let Some(http) = self.http.take() else {
            return Err(SparqlError::AlreadyClosed);
        };
        drop(http);
        debug!(endpoint = %self.endpoint, "connection pool released");
        Ok(())
    }

    /// Sends an HTTP HEAD request to the endpoint. See [`HealthManager::ping`].
    pub async fn ping(&self) -> Result<(), SparqlError> {
        self.health().ping().await
    }

    pub fn health(&self) -> HealthManager<'_> {
        HealthManager::new(self)
    }

    pub(crate) fn http(&self) -> Result<&HttpClient, SparqlError> {
        self.http.as_ref().ok_or(SparqlError::AlreadyClosed)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    pub fn prefixes(&self) -> &HashMap<String, Uri> {
        &self.prefixes
    }

    pub fn is_closed(&self) -> bool {
        self.http.is_none()
    }
}
