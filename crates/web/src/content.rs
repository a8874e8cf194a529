// =============================================================================
// Dexter Web - Static Site Content
// =============================================================================
// Table of Contents:
// 1. Company Identity
// 2. Icons
// 3. Home Page Tables
// 4. Services Page Tables
// 5. About Page Tables
// 6. Contact Tables
// 7. Footer Tables
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Company Identity
// -----------------------------------------------------------------------------

pub const COMPANY_NAME: &str = "Dexter Enterprises";
pub const COMPANY_LEGAL_NAME: &str = "Dexter Enterprises Ltd.";
pub const TAGLINE: &str =
    "Empowering businesses with innovative solutions for sustainable growth and success.";

pub const EMAIL: &str = "Dexterenterprises0302@gmail.com";
pub const PHONE: &str = "+1 587-839-4791";
pub const ADDRESS: &str = "#209-215,main st NW , Slave lake ,AB TOG 2A1";

/// Address as sent to the map embed. Differs from [`ADDRESS`] in spelling
/// so the lookup resolves.
pub const MAP_QUERY: &str = "#209-215 Main St NW, Slave Lake, AB T0G 2A1, Canada";

// -----------------------------------------------------------------------------
// 2. Icons
// -----------------------------------------------------------------------------

/// Inline glyph icons. The site ships no image assets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Globe,
    Search,
    TrendingUp,
    BarChart,
    Code,
    CheckCircle,
    Award,
    Mail,
    Phone,
    Home,
    Menu,
    Close,
    ChevronRight,
    ArrowRight,
    Instagram,
    Website,
}

impl Icon {
    pub const ALL: [Icon; 16] = [
        Icon::Globe,
        Icon::Search,
        Icon::TrendingUp,
        Icon::BarChart,
        Icon::Code,
        Icon::CheckCircle,
        Icon::Award,
        Icon::Mail,
        Icon::Phone,
        Icon::Home,
        Icon::Menu,
        Icon::Close,
        Icon::ChevronRight,
        Icon::ArrowRight,
        Icon::Instagram,
        Icon::Website,
    ];

    /// Text glyph rendered for the icon.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Globe => "🌐",
            Icon::Search => "🔍",
            Icon::TrendingUp => "📈",
            Icon::BarChart => "📊",
            Icon::Code => "💻",
            Icon::CheckCircle => "✅",
            Icon::Award => "🏆",
            Icon::Mail => "✉️",
            Icon::Phone => "📞",
            Icon::Home => "🏠",
            Icon::Menu => "☰",
            Icon::Close => "✕",
            Icon::ChevronRight => "›",
            Icon::ArrowRight => "→",
            Icon::Instagram => "📷",
            Icon::Website => "🔗",
        }
    }
}

// -----------------------------------------------------------------------------
// 3. Home Page Tables
// -----------------------------------------------------------------------------

/// A service card on the home page.
#[derive(Clone, Copy, Debug)]
pub struct ServiceHighlight {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICE_HIGHLIGHTS: [ServiceHighlight; 4] = [
    ServiceHighlight {
        icon: Icon::Globe,
        title: "Website Growth",
        description: "Boost your online presence with our strategic website growth solutions tailored to your business needs.",
    },
    ServiceHighlight {
        icon: Icon::Search,
        title: "SEO Support",
        description: "Increase your visibility and organic traffic with our proven SEO strategies and techniques.",
    },
    ServiceHighlight {
        icon: Icon::TrendingUp,
        title: "Business Strategy",
        description: "Get expert guidance on business development and strategic planning to achieve sustainable growth.",
    },
    ServiceHighlight {
        icon: Icon::Code,
        title: "Web Development",
        description: "Create stunning, functional websites with our professional web development services.",
    },
];

/// A "Why Choose Us" entry.
#[derive(Clone, Copy, Debug)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        title: "Expert Team",
        description: "Our team of experienced professionals is dedicated to delivering exceptional results for your business.",
    },
    Feature {
        title: "Customized Solutions",
        description: "We create tailored strategies that address your unique business challenges and goals.",
    },
    Feature {
        title: "Proven Results",
        description: "Our track record speaks for itself, with numerous success stories from satisfied clients.",
    },
    Feature {
        title: "Continuous Support",
        description: "We provide ongoing support to ensure your business continues to grow and evolve.",
    },
    Feature {
        title: "Data-Driven Approach",
        description: "Our strategies are backed by comprehensive data analysis and industry insights.",
    },
    Feature {
        title: "Innovative Techniques",
        description: "We stay ahead of the curve by implementing the latest tools and strategies in digital marketing.",
    },
];

// -----------------------------------------------------------------------------
// 4. Services Page Tables
// -----------------------------------------------------------------------------

/// A service category with the concrete offerings under it.
#[derive(Clone, Copy, Debug)]
pub struct ServiceCategory {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub offerings: [&'static str; 5],
}

pub const SERVICE_CATEGORIES: [ServiceCategory; 4] = [
    ServiceCategory {
        icon: Icon::Globe,
        title: "Website Growth",
        description: "Comprehensive solutions to help your website attract more visitors and convert them into customers.",
        offerings: [
            "Website Audit & Optimization",
            "Content Strategy & Creation",
            "Conversion Rate Optimization",
            "User Experience Enhancement",
            "Performance Optimization",
        ],
    },
    ServiceCategory {
        icon: Icon::Search,
        title: "SEO Support",
        description: "Expert SEO services to improve your search engine rankings and increase organic traffic.",
        offerings: [
            "Keyword Research & Strategy",
            "On-page SEO Optimization",
            "Off-page SEO & Link Building",
            "Technical SEO Audit",
            "Local SEO Optimization",
        ],
    },
    ServiceCategory {
        icon: Icon::BarChart,
        title: "Business Strategy",
        description: "Strategic business planning to help you achieve sustainable growth and success.",
        offerings: [
            "Market Research & Analysis",
            "Competitive Analysis",
            "Growth Strategy Development",
            "Business Process Optimization",
            "Strategic Partnership Planning",
        ],
    },
    ServiceCategory {
        icon: Icon::TrendingUp,
        title: "Digital Marketing",
        description: "Comprehensive digital marketing solutions to boost your online presence and reach your target audience.",
        offerings: [
            "Social Media Marketing",
            "Email Marketing Campaigns",
            "Pay-Per-Click Advertising",
            "Content Marketing",
            "Analytics & Reporting",
        ],
    },
];

// -----------------------------------------------------------------------------
// 5. About Page Tables
// -----------------------------------------------------------------------------

pub const STORY: [&str; 3] = [
    "Founded in 2015, Dexter Enterprises began with a simple mission: to help businesses navigate the increasingly complex digital landscape and achieve sustainable growth.",
    "What started as a small consulting firm has now grown into a comprehensive business solutions provider with a team of experts dedicated to delivering exceptional results for our clients.",
    "We believe in a personalized approach to business growth, understanding that each client has unique challenges and goals. This philosophy has allowed us to build long-lasting relationships with our clients based on trust, transparency, and results.",
];

#[derive(Clone, Copy, Debug)]
pub struct CompanyValue {
    pub name: &'static str,
    pub statement: &'static str,
}

pub const VALUES: [CompanyValue; 4] = [
    CompanyValue { name: "Excellence", statement: "We strive for excellence in everything we do." },
    CompanyValue { name: "Innovation", statement: "We embrace innovative solutions to complex problems." },
    CompanyValue { name: "Integrity", statement: "We operate with honesty and transparency." },
    CompanyValue { name: "Client-Centric", statement: "Our clients' success is our success." },
];

// -----------------------------------------------------------------------------
// 6. Contact Tables
// -----------------------------------------------------------------------------

#[derive(Clone, Copy, Debug)]
pub struct OpeningHours {
    pub days: &'static str,
    pub hours: &'static str,
}

pub const BUSINESS_HOURS: [OpeningHours; 3] = [
    OpeningHours { days: "Monday - Friday:", hours: "9:00 AM - 6:00 PM" },
    OpeningHours { days: "Saturday:", hours: "10:00 AM - 4:00 PM" },
    OpeningHours { days: "Sunday:", hours: "Closed" },
];

// -----------------------------------------------------------------------------
// 7. Footer Tables
// -----------------------------------------------------------------------------

/// An outbound social or organizational link.
#[derive(Clone, Copy, Debug)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

pub const SOCIAL_LINKS: [SocialLink; 2] = [
    SocialLink {
        label: "Instagram",
        href: "https://www.instagram.com/dexter_enterprises",
        icon: Icon::Instagram,
    },
    SocialLink {
        label: "Website",
        href: "https://dexterenterprises.org",
        icon: Icon::Website,
    },
];

pub const FOOTER_SERVICES: [&str; 5] = [
    "Website Growth",
    "SEO Support",
    "Business Strategy",
    "Digital Marketing",
    "Web Development",
];

pub const LEGAL_LINKS: [&str; 3] = ["Privacy Policy", "Terms of Service", "Cookie Policy"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_categories_have_distinct_titles() {
        let mut titles: Vec<_> = SERVICE_CATEGORIES.iter().map(|c| c.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), SERVICE_CATEGORIES.len());
    }

    #[test]
    fn test_icon_glyphs_are_distinct_and_inline() {
        let mut glyphs: Vec<_> = Icon::ALL.iter().map(|icon| icon.glyph()).collect();
        assert!(glyphs.iter().all(|g| !g.is_empty() && !g.contains('/')));
        glyphs.sort_unstable();
        glyphs.dedup();
        assert_eq!(glyphs.len(), Icon::ALL.len());
    }

    #[test]
    fn test_no_asset_files_are_referenced() {
        // Split so this file does not match itself
        let asset_path = concat!("/", "assets", "/");
        let img_tag = concat!("<", "img");
        let sources = [
            include_str!("content.rs"),
            include_str!("components/common.rs"),
            include_str!("components/nav.rs"),
            include_str!("pages/home.rs"),
            include_str!("../index.html"),
        ];
        for source in sources {
            assert!(!source.contains(asset_path));
            assert!(!source.contains(img_tag));
        }
    }
}
