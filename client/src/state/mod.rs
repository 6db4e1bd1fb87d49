//! Client-side state modules.
//!
//! DESIGN
//! ======
//! The theme lives in `crate::theme`; everything else the site tracks is the
//! contact form.

pub mod contact;
