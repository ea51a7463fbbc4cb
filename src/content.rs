// content.rs

use url::form_urlencoded;

/// Route strings the page links to. None of them are served here.
pub mod routes {
    pub const HOME: &str = "/";
    pub const DOCS: &str = "/docs";
    pub const BLOG: &str = "/blog";
    pub const SIGN_IN: &str = "/sign-in";
    pub const DEMO: &str = "/demo";
    pub const GET_STARTED: &str = "/get-started";
    pub const PLACEHOLDER: &str = "#";

    #[cfg(test)]
    pub const ALL: [&str; 7] = [HOME, DOCS, BLOG, SIGN_IN, DEMO, GET_STARTED, PLACEHOLDER];
}

pub const BRAND: &str = "LocalCV";

/// Stand-in image served by the external `/placeholder.svg` endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placeholder {
    pub width: u32,
    pub height: u32,
}

impl Placeholder {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn src(&self) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("height", &self.height.to_string())
            .append_pair("width", &self.width.to_string())
            .finish();
        format!("/placeholder.svg?{query}")
    }
}

pub const HERO_IMAGE: Placeholder = Placeholder::new(600, 800);
pub const DEMO_THUMBNAIL: Placeholder = Placeholder::new(1920, 1080);
pub const INTERACTIVE_DEMO_IMAGE: Placeholder = Placeholder::new(800, 1000);

#[derive(Debug)]
pub struct UseCase {
    pub title: &'static str,
    pub image: Placeholder,
    pub description: &'static str,
}

const USE_CASE_IMAGE: Placeholder = Placeholder::new(600, 400);

pub const USE_CASES: [UseCase; 6] = [
    UseCase {
        title: "Manufacturing QA",
        image: USE_CASE_IMAGE,
        description: "Detect defects and ensure quality control in real-time",
    },
    UseCase {
        title: "Retail Analytics",
        image: USE_CASE_IMAGE,
        description: "Track customer behavior and optimize store layouts",
    },
    UseCase {
        title: "Security Systems",
        image: USE_CASE_IMAGE,
        description: "Monitor and analyze security camera feeds",
    },
    UseCase {
        title: "Medical Imaging",
        image: USE_CASE_IMAGE,
        description: "Assist in diagnosis and medical image analysis",
    },
    UseCase {
        title: "Agriculture",
        image: USE_CASE_IMAGE,
        description: "Monitor crop health and optimize farming operations",
    },
    UseCase {
        title: "Smart Cities",
        image: USE_CASE_IMAGE,
        description: "Improve traffic flow and urban planning",
    },
];

/// `number` is display text, not a quantity.
#[derive(Debug)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
    pub sublabel: &'static str,
}

pub const STATS: [Stat; 3] = [
    Stat {
        number: "100%",
        label: "Local Processing",
        sublabel: "Complete data privacy",
    },
    Stat {
        number: "50x",
        label: "Faster Training",
        sublabel: "Than cloud solutions",
    },
    Stat {
        number: "24/7",
        label: "Availability",
        sublabel: "No internet required",
    },
];

#[derive(Debug)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        title: "Local GPU Training",
        description: "Train models using your own hardware for complete data privacy and control",
    },
    Feature {
        title: "Model Management",
        description: "Version control and experiment tracking built specifically for CV models",
    },
    Feature {
        title: "Easy Deployment",
        description: "Deploy models to production with just a few clicks",
    },
];

pub const DEMO_STEPS: [&str; 3] = ["Upload your image", "Select your model", "Get instant results"];

pub const CLIENT_LOGO_SLOTS: usize = 6;

#[derive(Debug)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: [FooterLink; 3],
}

const fn placeholder_link(label: &'static str) -> FooterLink {
    FooterLink {
        label,
        href: routes::PLACEHOLDER,
    }
}

pub const FOOTER_COLUMNS: [FooterColumn; 4] = [
    FooterColumn {
        heading: "Product",
        links: [
            placeholder_link("Features"),
            placeholder_link("Pricing"),
            placeholder_link("Case Studies"),
        ],
    },
    FooterColumn {
        heading: "Resources",
        links: [
            placeholder_link("Documentation"),
            placeholder_link("API Reference"),
            placeholder_link("Blog"),
        ],
    },
    FooterColumn {
        heading: "Company",
        links: [
            placeholder_link("About"),
            placeholder_link("Careers"),
            placeholder_link("Contact"),
        ],
    },
    FooterColumn {
        heading: "Legal",
        links: [
            placeholder_link("Privacy"),
            placeholder_link("Terms"),
            placeholder_link("Security"),
        ],
    },
];

pub fn copyright_line(year: i32) -> String {
    format!("© {year} {BRAND}. All rights reserved.")
}
