//! OAuth token bundle and the token source seam.

mod tokens;

pub use tokens::{TokenBundle, TokenResponse, TokenSource};
