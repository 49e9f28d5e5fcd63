//! Outbound AI integrations.
//!
//! - [`openai`] -- chat completions client and the [`CompletionProvider`] seam.
//! - [`copywriter`] -- ad-copy tasks built on top of a completion provider.
//! - [`speech`] -- speech synthesis (placeholder until a vendor is chosen).
//! - [`vendor`] -- REST clients for the creative-AI vendors.

pub mod copywriter;
pub mod error;
pub mod openai;
pub mod speech;
pub mod vendor;

pub use error::ProviderError;
pub use openai::{CompletionProvider, OpenAiClient};
pub use vendor::{VendorClient, VendorRegistry};
