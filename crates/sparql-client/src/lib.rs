//! Client for SPARQL-over-HTTP query endpoints.
//!
//! Manages a pooled HTTP transport configured once at construction through
//! composable [`ClientOption`]s, registers query-language prefixes, and
//! exposes a HEAD-based liveness check. Query construction and result-set
//! parsing live elsewhere; this crate owns the connection lifecycle.
//!
//! ```no_run
//! use sparql_client::{ClientOption, SparqlClient, Uri};
//! use std::time::Duration;
//!
//! # async fn run() -> Result<(), sparql_client::SparqlError> {
//! let mut client = SparqlClient::new(
//!     "http://localhost:3030/ds/sparql",
//!     [
//!         ClientOption::timeout(Duration::from_secs(5)),
//!         ClientOption::prefix("foaf", Uri::new("http://xmlns.com/foaf/0.1/")),
//!     ],
//! )?;
//!
//! client.ping().await?;
//! client.close()?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
mod http;
pub mod managers;
pub mod types;

pub use client::{ClientOption, SparqlClient};
pub use config::ConnectionConfig;
pub use error::{NetworkError, SparqlError};
pub use http::HttpClient;
pub use managers::HealthManager;
pub use types::Uri;
