//! About page copy.

use super::{Feature, Stat};

pub const TITLE: &str = "Transforming the Future of";
pub const HIGHLIGHT: &str = "Technology";
pub const INTRO: &str = "We are a passionate team of innovators, developers, and digital strategists \
     committed to delivering cutting-edge ICT solutions that empower businesses to thrive in the digital age.";

pub const VALUES: [Feature; 4] = [
    Feature {
        title: "Innovation",
        description: "Pushing boundaries with cutting-edge technology solutions",
        color: "#3B82F6",
    },
    Feature {
        title: "Excellence",
        description: "Delivering superior quality in every project we undertake",
        color: "#8B5CF6",
    },
    Feature {
        title: "Integrity",
        description: "Building trust through transparency and ethical practices",
        color: "#F59E0B",
    },
    Feature {
        title: "Creativity",
        description: "Crafting unique solutions tailored to your business needs",
        color: "#10B981",
    },
];

pub const STATS: [Stat; 4] = [
    Stat { number: "15+", label: "Team Members" },
    Stat { number: "5+", label: "Years Experience" },
    Stat { number: "100+", label: "Projects Completed" },
    Stat { number: "50+", label: "Happy Clients" },
];
