//! Utility helpers shared across page and component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Small pure helpers (colors, palettes, route names) kept apart from view
//! code so they can be unit tested natively.

pub mod color;
pub mod palette;
pub mod site_route;
