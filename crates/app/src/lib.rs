//! Application wiring: one context per process, collaborators injected
//! explicitly.

pub mod context;

pub use context::AppContext;
