//! This module holds typed parameters for endpoint inputs.
//!
//! Query strings and form bodies are deserialized into these structs before they reach the
//! controllers.

pub(crate) mod report_card;
