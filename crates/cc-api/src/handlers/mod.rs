//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod access;
pub mod admins;
pub mod auth;
pub mod communities;
pub mod events;
pub mod forms;
pub mod health;
pub mod submissions;
pub mod users;
pub mod zones;
