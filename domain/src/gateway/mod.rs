//! Gateways to external services.

pub mod suap;
