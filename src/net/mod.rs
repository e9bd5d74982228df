//! Networking modules for the remote REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` moves raw requests over the wire, `client` attaches the session
//! credential to each of them, and `auth`/`projects` are the typed endpoint
//! calls built on top. `types` defines the shared wire schema.

pub mod auth;
pub mod client;
pub mod error;
pub mod projects;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

/// Concrete client used by the browser build.
#[cfg(feature = "csr")]
pub type AppClient = client::ApiClient<transport::GlooTransport, crate::state::session::LocalStorage>;
