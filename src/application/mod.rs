//! Application layer - Send flow orchestration and its collaborators

pub mod bindings;
pub mod errors;
pub mod input;
pub mod panel;
pub mod services;
