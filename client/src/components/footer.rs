//! Site footer: contact details, links, services, socials.

use leptos::prelude::*;

use crate::content::company::{CONTACT, COPYRIGHT, FOOTER_SERVICES, SOCIAL_LINKS};
use crate::util::site_route::SiteRoute;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__grid">
                <div class="footer__column">
                    <h3 class="footer__brand">{CONTACT.company}</h3>
                    <p>{CONTACT.location}</p>
                    <p>{CONTACT.phone}</p>
                    <p>
                        <a href=format!("mailto:{}", CONTACT.email)>{CONTACT.email}</a>
                    </p>
                </div>
                <div class="footer__column">
                    <h4>"LINKS"</h4>
                    <ul>
                        {SiteRoute::ALL
                            .into_iter()
                            .filter(|route| *route != SiteRoute::Home)
                            .map(|route| view! { <li><a href=route.path()>{route.label()}</a></li> })
                            .collect_view()}
                    </ul>
                </div>
                <div class="footer__column">
                    <h4>"OUR SERVICES"</h4>
                    <ul>
                        {FOOTER_SERVICES
                            .into_iter()
                            .map(|service| view! { <li><a href=SiteRoute::Services.path()>{service}</a></li> })
                            .collect_view()}
                    </ul>
                </div>
                <div class="footer__column">
                    <h4>"Social Media Links"</h4>
                    <p>"Follow us on social media."</p>
                    <div class="footer__socials">
                        {SOCIAL_LINKS
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <a href=link.href target="_blank" rel="noopener noreferrer">
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
            <p class="footer__copyright">{COPYRIGHT}</p>
        </footer>
    }
}
