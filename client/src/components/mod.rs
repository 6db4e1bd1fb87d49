//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the shared page chrome and content sections. Only
//! `ThemeToggle` writes shared state; the rest read context or take static
//! content as props.

pub mod feature_grid;
pub mod floating_shapes;
pub mod footer;
pub mod hero;
pub mod nav_bar;
pub mod page_shell;
pub mod section_header;
pub mod stat_cards;
pub mod theme_toggle;
