pub mod send_flow;

pub use send_flow::{ChatSession, FALLBACK_REPLY};
