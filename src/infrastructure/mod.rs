//! Infrastructure layer - External concerns
//!
//! This layer contains:
//! - Config: Configuration loading
//! - Http: The chatbot endpoint client
//! - Adapters: Front ends (console)

pub mod adapters;
pub mod config;
pub mod http;
