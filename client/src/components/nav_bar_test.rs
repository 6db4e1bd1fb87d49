use super::*;

#[test]
fn nav_links_start_with_home() {
    assert_eq!(NAV_LINKS[0], SiteRoute::Home);
    assert_eq!(NAV_LINKS[0].path(), "/");
}

#[test]
fn nav_links_cover_every_page_once() {
    for route in SiteRoute::ALL {
        assert_eq!(NAV_LINKS.iter().filter(|r| **r == route).count(), 1, "{route:?}");
    }
}
