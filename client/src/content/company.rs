//! Company-wide copy: contact details, hero, footer lists.

use super::{ContactInfo, Feature, SocialLink};

pub const CONTACT: ContactInfo = ContactInfo {
    company: "Pich & Safe",
    legal_name: "Pich & Safe Consultancy Ltd",
    location: "Nairobi, Kenya",
    phone: "+254 700 000 000",
    email: "info@pichsafe.com",
};

pub const HERO_TITLE: &str = "Empowering Growth Through";
pub const HERO_HIGHLIGHT: &str = "Smart ICT Solutions";
pub const HERO_BODY: &str = "Pich & Safe Consultancy Ltd is a Kenyan-based ICT solutions company \
     dedicated to transforming businesses through innovative technology and strategic digital solutions.";

pub const CTA_TITLE: &str = "Are you ready to scale your business?";
pub const CTA_BODY: &str = "Get in touch and let us build something amazing together!";

/// Home page product teaser cards.
pub const HOME_PRODUCTS: [Feature; 3] = [
    Feature {
        title: "Web Development & Design",
        description: "Professional solutions tailored to your business needs with cutting-edge technology.",
        color: "#1e90ff",
    },
    Feature {
        title: "Digital Marketing Solutions",
        description: "Professional solutions tailored to your business needs with cutting-edge technology.",
        color: "#60a5fa",
    },
    Feature {
        title: "Cloud & Hosting Services",
        description: "Professional solutions tailored to your business needs with cutting-edge technology.",
        color: "#3b82f6",
    },
];

/// Services listed in the footer.
pub const FOOTER_SERVICES: [&str; 5] = [
    "Web Development & Design",
    "Social Media Marketing",
    "Domain & Hosting",
    "Mobile Development",
    "Cloud Solutions",
];

pub const SOCIAL_LINKS: [SocialLink; 2] = [
    SocialLink {
        label: "Instagram",
        href: "https://www.instagram.com/pichsafe",
    },
    SocialLink {
        label: "Facebook",
        href: "https://www.facebook.com/pichsafe",
    },
];

pub const COPYRIGHT: &str = "Copyright © Pich & Safe. All rights reserved.";
