//! Webhook backend implementations.

pub mod http;

pub use http::HttpWebhookBackend;
