//! Services page copy.

use super::{ProcessStep, Service};

pub const TITLE: &str = "Comprehensive";
pub const HIGHLIGHT: &str = "ICT Solutions";
pub const INTRO: &str = "From web development to digital transformation, we offer a complete suite of \
     technology services designed to accelerate your business growth and digital presence.";

pub const SERVICES: [Service; 6] = [
    Service {
        title: "Web Development & Design",
        description: "Custom websites and web applications built with modern frameworks and responsive design principles.",
        features: &[
            "React/Next.js Development",
            "Responsive Design",
            "SEO Optimization",
            "Performance Optimization",
        ],
        color: "#3B82F6",
    },
    Service {
        title: "Digital Marketing",
        description: "Comprehensive digital marketing strategies to boost your online presence and drive conversions.",
        features: &[
            "Social Media Marketing",
            "Content Strategy",
            "PPC Campaigns",
            "Analytics & Reporting",
        ],
        color: "#8B5CF6",
    },
    Service {
        title: "Cloud Solutions",
        description: "Scalable cloud infrastructure and migration services for modern, efficient business operations.",
        features: &[
            "Cloud Migration",
            "Infrastructure Setup",
            "Scalability Planning",
            "Security Implementation",
        ],
        color: "#F59E0B",
    },
    Service {
        title: "Cybersecurity",
        description: "Advanced security measures to protect your digital assets and ensure business continuity.",
        features: &[
            "Security Audits",
            "Threat Assessment",
            "Data Protection",
            "Compliance Management",
        ],
        color: "#10B981",
    },
    Service {
        title: "Mobile Development",
        description: "Native and cross-platform mobile applications for iOS and Android devices.",
        features: &[
            "iOS Development",
            "Android Development",
            "Cross-platform Apps",
            "App Store Optimization",
        ],
        color: "#EF4444",
    },
    Service {
        title: "Data Solutions",
        description: "Database design, data analytics, and business intelligence solutions for informed decision-making.",
        features: &[
            "Database Design",
            "Data Analytics",
            "Business Intelligence",
            "Reporting Dashboards",
        ],
        color: "#EC4899",
    },
];

pub const PROCESS: [ProcessStep; 4] = [
    ProcessStep {
        title: "Discovery",
        description: "Understanding your needs and goals",
    },
    ProcessStep {
        title: "Planning",
        description: "Strategic roadmap and timeline",
    },
    ProcessStep {
        title: "Development",
        description: "Building your solution",
    },
    ProcessStep {
        title: "Launch",
        description: "Deployment and optimization",
    },
];
