//! Static page content.
//!
//! DESIGN
//! ======
//! Copy, card lists and decorative shape tables live here as `const` data so
//! pages stay pure layout. Nothing in this module changes at runtime.

pub mod about;
pub mod company;
pub mod products;
pub mod services;
pub mod shapes;


/// A titled card with an accent color (values, categories, teasers).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

/// A numeric highlight such as "15+ Team Members".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub color: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Product {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub tech: &'static [&'static str],
    pub status: &'static str,
    pub color: &'static str,
}

/// A product category card with its highlight count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Category {
    pub title: &'static str,
    pub count: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProcessStep {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactInfo {
    pub company: &'static str,
    pub legal_name: &'static str,
    pub location: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
}
