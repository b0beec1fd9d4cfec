//! Centralized user-facing messaging.
//!
//! All console output flows through the [`Message`] catalog and the
//! `msg_*` macros, which route to `tracing` in debug mode and to plain
//! console output otherwise.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;

// Convenience functions for common message patterns
pub fn success(msg: Message) -> String {
    format!("✅ {}", msg)
}

pub fn error(msg: Message) -> String {
    format!("❌ {}", msg)
}

pub fn warning(msg: Message) -> String {
    format!("⚠️  {}", msg)
}

pub fn info(msg: Message) -> String {
    format!("ℹ️  {}", msg)
}

pub fn wrap_msg(msg: Message) -> String {
    format!("\n{}\n", msg)
}
