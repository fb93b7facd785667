//! Client modules for external API interactions

pub mod sns;

pub use sns::{NotificationSink, PublishReceipt, SnsSink};
