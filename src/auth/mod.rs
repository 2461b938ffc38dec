//! Authentication handling for Hugging Face Hub access
//!
//! Resolves the bearer token from the command line with an `HF_TOKEN`
//! environment fallback.
//!
//! # Examples
//!
//! ```rust,no_run
//! use hf_assets::auth::resolve_token_with;
//!
//! match resolve_token_with(None, |name| std::env::var(name).ok()) {
//!     Some(token) => println!("Token from {}", token.source()),
//!     None => println!("No token configured"),
//! }
//! ```

pub mod credentials;

// Re-export main public API
pub use credentials::{mask_token, normalize, resolve_token_with, ResolvedToken, TokenSource};
