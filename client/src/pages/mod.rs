//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page is a static arrangement of `components` around content from
//! `crate::content`, wrapped in `PageShell`.

pub mod about;
pub mod contact;
pub mod home;
pub mod not_found;
pub mod products;
pub mod services;
