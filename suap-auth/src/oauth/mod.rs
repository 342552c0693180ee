//! OAuth 2.0 authorization-code flow against the SUAP identity provider.

pub(crate) mod client;

pub mod state;
pub mod token;

pub use client::{AuthorizationRequest, AuthorizationResponse, Client, ClientSettings};
