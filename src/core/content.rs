//! Literal copy for the landing page.
//!
//! Every section of the page renders one of these arrays, so changing the
//! marketing text never touches markup.

use serde::Serialize;
use serde_json::{Value, json};

pub const PRODUCT_NAME: &str = "Pixelforge";
pub const SITE_URL: &str = "https://pixelforge.app/";
pub const TAGLINE: &str = "Edit photos, design graphics and cut video right in your browser.";
pub const REPOSITORY_URL: &str = "https://github.com/pixelforge/pixelforge-landing";

/// In-page navigation anchor shown in the header and the mobile drawer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Features",
        href: "#features",
    },
    NavLink {
        label: "Pricing",
        href: "#pricing",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    /// Icon name under `/icons`.
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "layers",
        title: "Layer-Based Editing",
        description: "Non-destructive layers, masks and blend modes that feel like a desktop editor.",
    },
    Feature {
        icon: "sparkles",
        title: "AI Background Removal",
        description: "Cut out subjects in one click and drop them onto any backdrop.",
    },
    Feature {
        icon: "sliders",
        title: "Smart Filters",
        description: "Tune exposure, color and grain with presets you can tweak and save.",
    },
    Feature {
        icon: "users",
        title: "Real-time Collaboration",
        description: "Invite teammates to the same canvas and see every change as it happens.",
    },
    Feature {
        icon: "download",
        title: "Export Anywhere",
        description: "PNG, JPEG, WebP, SVG and MP4 in the sizes every platform expects.",
    },
    Feature {
        icon: "clock",
        title: "Version History",
        description: "Step back through every save and restore any earlier version.",
    },
];

/// What a pricing card's button does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CtaAction {
    /// Ask the parent to open the registration dialog.
    Register,
    /// Plain link, e.g. to the sales inbox.
    Link(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingTier {
    pub name: &'static str,
    /// Monthly price in whole US dollars.
    pub monthly_usd: u32,
    pub period: &'static str,
    pub description: &'static str,
    /// Feature line and whether the tier includes it.
    pub features: &'static [(&'static str, bool)],
    pub cta_text: &'static str,
    pub cta: CtaAction,
    pub highlighted: bool,
}

impl PricingTier {
    pub fn price_label(&self) -> String {
        format!("${}", self.monthly_usd)
    }
}

pub const PRICING_TIERS: &[PricingTier] = &[
    PricingTier {
        name: "Free",
        monthly_usd: 0,
        period: "forever",
        description: "For hobby projects and quick edits",
        features: &[
            ("5 projects", true),
            ("Core editing tools", true),
            ("Export up to 1080p", true),
            ("AI tools (10 credits/month)", true),
            ("Real-time collaboration", false),
            ("Brand kits", false),
            ("Priority support", false),
        ],
        cta_text: "Start Editing for Free",
        cta: CtaAction::Register,
        highlighted: false,
    },
    PricingTier {
        name: "Pro",
        monthly_usd: 12,
        period: "/month",
        description: "For creators who publish every week",
        features: &[
            ("Unlimited projects", true),
            ("Full editing suite", true),
            ("Export up to 4K", true),
            ("AI tools (unlimited)", true),
            ("Real-time collaboration", true),
            ("Brand kits", true),
            ("Priority support", false),
        ],
        cta_text: "Start Free Trial",
        cta: CtaAction::Register,
        highlighted: true,
    },
    PricingTier {
        name: "Team",
        monthly_usd: 29,
        period: "/user/month",
        description: "For studios and marketing teams",
        features: &[
            ("Everything in Pro", true),
            ("Shared asset library", true),
            ("SSO & SAML", true),
            ("Admin controls", true),
            ("Audit logs", true),
            ("Unlimited version history", true),
            ("Priority support", true),
        ],
        cta_text: "Contact Sales",
        cta: CtaAction::Link("mailto:sales@pixelforge.app"),
        highlighted: false,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
    pub external: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [FooterLink],
}

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        title: "Product",
        links: &[
            FooterLink {
                label: "Features",
                href: "#features",
                external: false,
            },
            FooterLink {
                label: "Pricing",
                href: "#pricing",
                external: false,
            },
        ],
    },
    FooterColumn {
        title: "Company",
        links: &[
            FooterLink {
                label: "GitHub",
                href: REPOSITORY_URL,
                external: true,
            },
            FooterLink {
                label: "Contact",
                href: "mailto:hello@pixelforge.app",
                external: true,
            },
        ],
    },
];

#[derive(Serialize)]
struct Offer<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    price: String,
    #[serde(rename = "priceCurrency")]
    price_currency: &'static str,
}

/// JSON-LD `SoftwareApplication` block for search engines, with one offer
/// per pricing tier.
pub fn structured_data() -> Value {
    let offers: Vec<Offer<'_>> = PRICING_TIERS
        .iter()
        .map(|tier| Offer {
            kind: "Offer",
            name: tier.name,
            price: tier.monthly_usd.to_string(),
            price_currency: "USD",
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "SoftwareApplication",
        "name": PRODUCT_NAME,
        "applicationCategory": "MultimediaApplication",
        "operatingSystem": "Web",
        "description": TAGLINE,
        "url": SITE_URL,
        "offers": offers,
        "featureList": FEATURES.iter().map(|f| f.title).collect::<Vec<_>>(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_tiers_one_highlighted() {
        assert_eq!(PRICING_TIERS.len(), 3);
        assert_eq!(PRICING_TIERS.iter().filter(|t| t.highlighted).count(), 1);
    }

    #[test]
    fn test_free_tier_opens_registration() {
        let free = PRICING_TIERS[0];
        assert_eq!(free.price_label(), "$0");
        assert_eq!(free.cta_text, "Start Editing for Free");
        assert_eq!(free.cta, CtaAction::Register);
    }

    #[test]
    fn test_team_tier_links_to_sales() {
        let team = PRICING_TIERS[2];
        assert_eq!(team.price_label(), "$29");
        assert_eq!(team.cta_text, "Contact Sales");
        assert!(matches!(team.cta, CtaAction::Link(href) if href.starts_with("mailto:")));
    }

    #[test]
    fn test_public_urls_come_from_constants() {
        assert_eq!(structured_data()["url"], SITE_URL);
        assert!(SITE_URL.starts_with("https://"));

        let repo_links: Vec<_> = FOOTER_COLUMNS
            .iter()
            .flat_map(|c| c.links.iter())
            .filter(|l| l.href == REPOSITORY_URL)
            .collect();
        assert_eq!(repo_links.len(), 1);
        assert!(repo_links[0].external);
    }

    #[test]
    fn test_six_features_with_unique_titles() {
        assert_eq!(FEATURES.len(), 6);
        let mut titles: Vec<_> = FEATURES.iter().map(|f| f.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), FEATURES.len());
    }

    #[test]
    fn test_nav_links_are_in_page_anchors() {
        assert!(NAV_LINKS.iter().all(|l| l.href.starts_with('#')));
    }

    #[test]
    fn test_structured_data_lists_every_tier() {
        let data = structured_data();
        assert_eq!(data["@type"], "SoftwareApplication");
        assert_eq!(data["name"], PRODUCT_NAME);

        let offers = data["offers"].as_array().unwrap();
        assert_eq!(offers.len(), PRICING_TIERS.len());
        assert_eq!(offers[1]["name"], "Pro");
        assert_eq!(offers[1]["price"], "12");
        assert_eq!(offers[1]["@type"], "Offer");
        assert_eq!(offers[0]["priceCurrency"], "USD");
    }

    #[test]
    fn test_structured_data_is_valid_json_text() {
        let text = structured_data().to_string();
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["featureList"].as_array().unwrap().len(), FEATURES.len());
    }
}
