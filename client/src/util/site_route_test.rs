use super::*;

#[test]
fn every_route_maps_back_from_its_path() {
    for route in SiteRoute::ALL {
        assert_eq!(SiteRoute::from_path(route.path()), Some(route));
    }
}

#[test]
fn from_path_ignores_trailing_slash() {
    assert_eq!(SiteRoute::from_path("/about/"), Some(SiteRoute::About));
    assert_eq!(SiteRoute::from_path(""), Some(SiteRoute::Home));
}

#[test]
fn from_path_rejects_unknown_paths() {
    assert_eq!(SiteRoute::from_path("/blog"), None);
    assert_eq!(SiteRoute::from_path("/About"), None);
    assert_eq!(SiteRoute::from_path("/services/web"), None);
}

#[test]
fn contact_label_matches_nav_copy() {
    assert_eq!(SiteRoute::Contact.label(), "Contact Us");
    assert_eq!(SiteRoute::Home.label(), "Home");
}
