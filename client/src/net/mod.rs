//! Networking for the contact form.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` posts to the external form service and `types` defines its wire
//! schema. The site makes no other network calls.

pub mod api;
pub mod types;
