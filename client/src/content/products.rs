//! Products page copy.

use super::{Category, Product};

pub const TITLE: &str = "Innovative";
pub const HIGHLIGHT: &str = "Digital Products";
pub const INTRO: &str = "Discover our portfolio of cutting-edge digital products designed to streamline \
     operations, enhance user experience, and drive business growth across various industries.";

pub const PRODUCTS: [Product; 6] = [
    Product {
        title: "Professional Website Development",
        category: "Web Development",
        description: "Custom-built responsive websites with modern design, SEO optimization, and content \
             management systems tailored for your business needs.",
        features: &[
            "Responsive Mobile-First Design",
            "SEO Optimization & Analytics",
            "Content Management System",
            "E-commerce Integration",
        ],
        tech: &["React", "Next.js", "WordPress", "Shopify"],
        status: "Live",
        color: "#3B82F6",
    },
    Product {
        title: "Digital Marketing Solutions",
        category: "Marketing Services",
        description: "Comprehensive digital marketing services including social media management, content \
             creation, and targeted advertising campaigns.",
        features: &[
            "Social Media Management",
            "Content Strategy & Creation",
            "Google Ads & Facebook Ads",
            "Performance Analytics & Reporting",
        ],
        tech: &["Google Analytics", "Facebook Business", "Canva", "Hootsuite"],
        status: "Live",
        color: "#8B5CF6",
    },
    Product {
        title: "Domain & Hosting Services",
        category: "Web Hosting",
        description: "Reliable domain registration and web hosting solutions with 99.9% uptime guarantee, \
             SSL certificates, and 24/7 technical support.",
        features: &[
            "Domain Registration & Management",
            "SSL Certificate Installation",
            "Daily Automated Backups",
            "24/7 Technical Support",
        ],
        tech: &["cPanel", "Let's Encrypt", "CloudFlare", "Linux"],
        status: "Live",
        color: "#10B981",
    },
    Product {
        title: "Business Consulting Services",
        category: "ICT Consulting",
        description: "Strategic ICT consulting to help businesses leverage technology for growth, digital \
             transformation, and operational efficiency.",
        features: &[
            "Technology Strategy Planning",
            "Digital Transformation Roadmap",
            "IT Infrastructure Assessment",
            "Process Optimization Consulting",
        ],
        tech: &["Microsoft 365", "Google Workspace", "Slack", "Zoom"],
        status: "Live",
        color: "#F59E0B",
    },
    Product {
        title: "Graphics Design & Branding",
        category: "Design Services",
        description: "Professional graphics design services including logo design, brand identity, \
             marketing materials, and visual content creation.",
        features: &[
            "Logo & Brand Identity Design",
            "Marketing Material Design",
            "Social Media Graphics",
            "Print & Digital Design",
        ],
        tech: &["Adobe Creative Suite", "Figma", "Canva", "Illustrator"],
        status: "Live",
        color: "#EC4899",
    },
    Product {
        title: "IT Support & Maintenance",
        category: "Technical Support",
        description: "Comprehensive IT support services including system maintenance, troubleshooting, \
             software updates, and network management.",
        features: &[
            "Remote Technical Support",
            "System Maintenance & Updates",
            "Network Setup & Management",
            "Software Installation & Training",
        ],
        tech: &["TeamViewer", "Windows Server", "Linux", "Network Tools"],
        status: "Live",
        color: "#EF4444",
    },
];

pub const CATEGORIES: [Category; 6] = [
    Category {
        title: "Web Development",
        count: "50+ Websites Built",
        description: "Custom websites, e-commerce platforms, and web applications",
        color: "#3B82F6",
    },
    Category {
        title: "Digital Marketing",
        count: "30+ Campaigns",
        description: "Social media marketing, content creation, and advertising",
        color: "#8B5CF6",
    },
    Category {
        title: "Hosting & Domains",
        count: "100+ Domains Managed",
        description: "Domain registration, web hosting, and SSL certificates",
        color: "#10B981",
    },
    Category {
        title: "ICT Consulting",
        count: "25+ Businesses Advised",
        description: "Technology strategy, digital transformation, and IT planning",
        color: "#F59E0B",
    },
    Category {
        title: "Graphics Design",
        count: "200+ Designs Created",
        description: "Logo design, branding, marketing materials, and visual content",
        color: "#EF4444",
    },
    Category {
        title: "IT Support",
        count: "24/7 Support Available",
        description: "Technical support, system maintenance, and troubleshooting",
        color: "#EC4899",
    },
];

/// Clamp a requested product index into the catalog.
pub fn clamp_selection(index: usize) -> usize {
    index.min(PRODUCTS.len() - 1)
}
