//! Outbound webhook layer for copper-quill.
//!
//! Both non-trivial operations of the system - generating post content
//! and publishing it to LinkedIn - live behind externally hosted
//! webhooks. This crate owns the two outbound clients and the
//! response-shape normalization:
//!
//! - [`GenerationClient`] posts `{topic, style, length}` and extracts
//!   display text from whatever envelope the webhook returns
//! - [`PublishClient`] posts the content plus the caller's access token
//!   and relays the webhook's verdict
//!
//! Every call is a single attempt with a configurable timeout; failures
//! are reported synchronously and never retried.

pub mod config;
pub mod error;
pub mod generate;
pub mod publish;
pub mod reply;

pub use config::WebhookConfig;
pub use error::WebhookError;
pub use generate::{GenerationClient, GenerationRequest, PostLength, PostStyle};
pub use publish::PublishClient;
pub use reply::{WebhookReply, extract_content};
