//! Access control

mod policy;

pub use policy::{AccessDecision, AccessPolicy, DENIED_REDIRECT};
