//! Webhook delivery adapter.

mod http_sink;

pub use http_sink::HttpDeliverySink;
