//! Static marketing copy for the site pages.

pub mod faq;
pub mod shop;
pub mod steps;

use serde::Serialize;

use crate::view::DisplayMode;

pub use faq::{FaqEntry, FAQ_ENTRIES};
pub use shop::{format_kit_price, KitOffer, KIT_OFFER};
pub use steps::{Step, STEPS};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Home,
    About,
    HowItWorks,
    RiskProfile,
    Products,
    Shop,
    Faq,
    Contact,
}

impl Section {
    pub const NAVIGATION: [Section; 8] = [
        Section::Home,
        Section::About,
        Section::HowItWorks,
        Section::RiskProfile,
        Section::Products,
        Section::Shop,
        Section::Faq,
        Section::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::HowItWorks => "how-it-works",
            Self::RiskProfile => "risk-profile",
            Self::Products => "products",
            Self::Shop => "shop",
            Self::Faq => "faq",
            Self::Contact => "contact",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Self::Home => "HOME",
            Self::About => "ABOUT US",
            Self::HowItWorks => "HOW IT WORKS",
            Self::RiskProfile => "RISK PROFILE",
            Self::Products => "PRODUCTS",
            Self::Shop => "SHOP",
            Self::Faq => "FAQS",
            Self::Contact => "CONTACT",
        }
    }

    /// Products live on their own page; every other section is an anchor on `/`.
    pub fn href(self) -> String {
        match self {
            Self::Products => "/products".to_string(),
            other => format!("/#{}", other.anchor()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: String,
    pub anchor: &'static str,
}

pub fn navigation() -> Vec<NavLink> {
    Section::NAVIGATION
        .iter()
        .map(|section| NavLink {
            label: section.nav_label(),
            href: section.href(),
            anchor: section.anchor(),
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Hero {
    pub headline: &'static str,
    pub tagline: &'static str,
    pub call_to_action: &'static str,
    pub video: &'static str,
}

pub const HERO: Hero = Hero {
    headline: "Your Perfect Skin Match Without the Guesswork",
    tagline: "Discover personalized skincare powered by modern science and everyday simplicity.",
    call_to_action: "Get Started",
    video: "videos/skincare-hero.mp4",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct About {
    pub heading: &'static str,
    pub subheading: &'static str,
    pub paragraphs: [&'static str; 3],
}

pub const ABOUT: About = About {
    heading: "About LumiLab",
    subheading: "Science meets self-care.",
    paragraphs: [
        "At LumiLab, we believe great skincare starts with understanding your skin, not guessing. \
         Our team of scientists and skincare lovers created LumiLab to bridge the gap between \
         personalization and simplicity, helping you discover what truly works for you.",
        "Through our skin microbiome testing kit and AI-driven LumiProfile, we deliver insights \
         that turn confusion into clarity, so your routine feels effortless, balanced, and \
         uniquely yours.",
        "We combine science, design, and empathy to make skincare smarter, calmer, and \
         beautifully simple.",
    ],
};

/// Badge and caption text that differ between demo and personal display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ModeCopy {
    pub risk_badge: Option<&'static str>,
    pub risk_caption: &'static str,
    pub recommendations_badge: Option<&'static str>,
    pub recommendations_caption: &'static str,
    pub show_calls_to_action: bool,
}

impl ModeCopy {
    pub fn for_mode(mode: DisplayMode) -> Self {
        match mode {
            DisplayMode::Demo => Self {
                risk_badge: Some("Demo data"),
                risk_caption: "This is a demo preview. Your actual profile appears after you \
                               complete the LumiLab test.",
                recommendations_badge: Some("Demo recommendations"),
                recommendations_caption: "These are sample recommendations. Your personalized \
                                          matches appear after completing the LumiLab test.",
                show_calls_to_action: true,
            },
            DisplayMode::Personal => Self {
                risk_badge: None,
                risk_caption: "Last updated: Recently. Re-test to refresh results.",
                recommendations_badge: None,
                recommendations_caption: "Personalized recommendations based on your skin \
                                          profile and test results.",
                show_calls_to_action: false,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Footer {
    pub closing_heading: &'static str,
    pub closing_body: &'static str,
    pub blurb: &'static str,
    pub quick_links: [FooterLink; 4],
    pub support_links: [FooterLink; 4],
    pub newsletter_blurb: &'static str,
    pub legal_links: [FooterLink; 3],
}

pub const FOOTER: Footer = Footer {
    closing_heading: "Ready to discover your perfect skincare routine?",
    closing_body: "Join thousands of women who've already transformed their skincare with \
                   personalized recommendations based on their unique skin microbiome.",
    blurb: "Personalized skincare powered by modern science and everyday simplicity. \
            Discover your skin's unique needs with our microbiome analysis.",
    quick_links: [
        FooterLink { label: "About Us", href: "/#about" },
        FooterLink { label: "How It Works", href: "/#how-it-works" },
        FooterLink { label: "Shop", href: "/#shop" },
        FooterLink { label: "FAQs", href: "/#faq" },
    ],
    support_links: [
        FooterLink { label: "Contact Us", href: "/#contact" },
        FooterLink { label: "Privacy Policy", href: "/privacy" },
        FooterLink { label: "Terms of Service", href: "/terms" },
        FooterLink { label: "Returns & Exchanges", href: "/returns" },
    ],
    newsletter_blurb: "Get the latest skincare tips and product updates.",
    legal_links: [
        FooterLink { label: "Privacy", href: "/privacy" },
        FooterLink { label: "Terms", href: "/terms" },
        FooterLink { label: "Cookies", href: "/cookies" },
    ],
};
