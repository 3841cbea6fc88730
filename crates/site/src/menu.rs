//! Site navigation registry.
//!
//! The header and footer share one weighted link set; labels are translation
//! keys resolved at render time.

use serde::Serialize;

use crate::locale::Language;

/// A navigation link.
#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    /// Translation key suffix under `nav.` (e.g. "home" → `nav.home`).
    pub key: &'static str,
    /// Clean (prefix-free) path.
    pub path: &'static str,
    /// Sort weight (lower = earlier).
    pub weight: i32,
}

/// An external social profile link.
#[derive(Debug, Clone, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    /// Icon name for the stylesheet.
    pub icon: &'static str,
}

/// Registry of site navigation, frozen at startup.
#[derive(Debug)]
pub struct NavRegistry {
    links: Vec<NavLink>,
    social: Vec<SocialLink>,
}

impl NavRegistry {
    /// The built-in site navigation.
    pub fn builtin() -> Self {
        let mut links = vec![
            NavLink {
                key: "home",
                path: "/",
                weight: 0,
            },
            NavLink {
                key: "positions",
                path: "/positions",
                weight: 10,
            },
            NavLink {
                key: "about",
                path: "/about",
                weight: 20,
            },
            NavLink {
                key: "apply",
                path: "/apply",
                weight: 30,
            },
            NavLink {
                key: "contact",
                path: "/contact",
                weight: 40,
            },
        ];
        links.sort_by_key(|l| l.weight);

        let social = vec![
            SocialLink {
                label: "LinkedIn",
                href: "https://linkedin.com/company/digitalnomadstaiwan",
                icon: "linkedin",
            },
            SocialLink {
                label: "Facebook",
                href: "https://facebook.com/digitalnomadstaiwan",
                icon: "facebook",
            },
            SocialLink {
                label: "Instagram",
                href: "https://instagram.com/digitalnomadstaiwan",
                icon: "instagram",
            },
        ];

        Self { links, social }
    }

    /// Links in weight order.
    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn social(&self) -> &[SocialLink] {
        &self.social
    }

    /// Localized view of the nav for templates: label, href, active flag.
    pub fn localized(
        &self,
        translate: impl Fn(&str) -> String,
        language: Language,
        current_path: &str,
    ) -> Vec<LocalizedNavLink> {
        self.links
            .iter()
            .map(|link| LocalizedNavLink {
                label: translate(&format!("nav.{}", link.key)),
                href: language.href(link.path),
                active: link.path == current_path,
            })
            .collect()
    }
}

/// A nav link resolved for one language and request path.
#[derive(Debug, Clone, Serialize)]
pub struct LocalizedNavLink {
    pub label: String,
    pub href: String,
    pub active: bool,
}
