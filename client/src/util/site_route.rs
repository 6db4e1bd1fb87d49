//! Named site routes and their navigation labels.

#[cfg(test)]
#[path = "site_route_test.rs"]
mod site_route_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SiteRoute {
    Home,
    About,
    Services,
    Products,
    Contact,
}

impl SiteRoute {
    pub const ALL: [SiteRoute; 5] = [
        SiteRoute::Home,
        SiteRoute::About,
        SiteRoute::Services,
        SiteRoute::Products,
        SiteRoute::Contact,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Services => "/services",
            Self::Products => "/products",
            Self::Contact => "/contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Services => "Services",
            Self::Products => "Products",
            Self::Contact => "Contact Us",
        }
    }

    /// Map a location pathname to a route. Trailing slashes are ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let trimmed = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|route| route.path() == trimmed)
    }
}
