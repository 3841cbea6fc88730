//! SEO metadata and structured data.
//!
//! Builds per-page meta tags (description, Open Graph, Twitter Card),
//! canonical/hreflang links, JSON-LD blocks (Organization, WebSite,
//! JobPosting), and surfaces analytics ids for the base template.

use serde::Serialize;
use serde_json::{Value, json};

use crate::config::Config;
use crate::locale::Language;

/// Site identity used across structured data blocks.
const SITE_NAME: &str = "Digital Nomads Taiwan";
const SITE_DESCRIPTION: &str = "Join the vibrant community of digital nomads in Taiwan. \
     Discover co-working spaces, networking events, and resources for remote workers.";

/// Resolved meta tags for one page.
#[derive(Debug, Clone, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub image: String,
}

/// An hreflang alternate link.
#[derive(Debug, Clone, Serialize)]
pub struct Alternate {
    pub hreflang: &'static str,
    pub href: String,
}

/// SEO service, frozen at startup.
#[derive(Debug)]
pub struct SeoService {
    site_url: String,
    ga_measurement_id: Option<String>,
    gtm_container_id: Option<String>,
}

impl SeoService {
    pub fn new(config: &Config) -> Self {
        Self {
            site_url: config.site_url.trim_end_matches('/').to_string(),
            ga_measurement_id: config.ga_measurement_id.clone(),
            gtm_container_id: config.gtm_container_id.clone(),
        }
    }

    /// Meta tag configuration for a clean (prefix-free) path.
    ///
    /// Unknown paths fall back to the home configuration.
    pub fn page_meta(&self, path: &str) -> PageMeta {
        let (title, description, keywords, image) = match path {
            "/positions" => (
                "Open Positions - Digital Nomads Taiwan",
                "Explore volunteer roles with Digital Nomads Taiwan: event organizing, \
                 marketing, hosting, photography, video production, and more.",
                "positions, volunteer, recruitment, digital nomads Taiwan, community",
                "/static/asset/positions-hero.jpg",
            ),
            "/about" => (
                "About Us - Digital Nomads Taiwan",
                "The story, mission, and team behind Digital Nomads Taiwan, the \
                 island's largest community of remote workers.",
                "about, community, story, mission, digital nomads Taiwan",
                "/static/asset/community.jpg",
            ),
            "/contact" => (
                "Contact - Digital Nomads Taiwan",
                "Get in touch with Digital Nomads Taiwan by email or through our \
                 social channels.",
                "contact, email, social, digital nomads Taiwan",
                "/static/asset/hero-image.jpg",
            ),
            "/apply" => (
                "Apply - Digital Nomads Taiwan",
                "Apply to join the Digital Nomads Taiwan team. Tell us which role fits \
                 you and become part of our community.",
                "application, form, join, membership",
                "/static/asset/application.jpg",
            ),
            _ => (
                "Digital Nomads Taiwan - Remote Work Community",
                "Join Taiwan's premier digital nomad community. Connect with remote \
                 workers, find co-working spaces, and build your network in beautiful Taiwan.",
                "digital nomads, Taiwan, remote work, co-working, community, networking",
                "/static/asset/hero-image.jpg",
            ),
        };

        PageMeta {
            title: title.to_string(),
            description: description.to_string(),
            keywords: keywords.to_string(),
            image: format!("{}{image}", self.site_url),
        }
    }

    /// Canonical URL for a path in a given language.
    pub fn canonical(&self, path: &str, language: Language) -> String {
        format!("{}{}", self.site_url, language.href(path))
    }

    /// hreflang alternates for a path, including x-default.
    pub fn alternates(&self, path: &str) -> Vec<Alternate> {
        let mut alternates: Vec<Alternate> = Language::ALL
            .iter()
            .map(|language| Alternate {
                hreflang: language.html_lang(),
                href: self.canonical(path, *language),
            })
            .collect();
        alternates.push(Alternate {
            hreflang: "x-default",
            href: self.canonical(path, Language::En),
        });
        alternates
    }

    /// Organization structured data block.
    pub fn organization_jsonld(&self) -> Value {
        json!({
            "@context": "https://schema.org",
            "@type": "Organization",
            "name": SITE_NAME,
            "description": SITE_DESCRIPTION,
            "url": self.site_url,
            "logo": format!("{}/static/asset/Logo.png", self.site_url),
            "sameAs": [
                "https://facebook.com/digitalnomadstaiwan",
                "https://instagram.com/digitalnomadstaiwan",
                "https://linkedin.com/company/digitalnomadstaiwan",
            ],
        })
    }

    /// WebSite structured data block.
    pub fn website_jsonld(&self) -> Value {
        json!({
            "@context": "https://schema.org",
            "@type": "WebSite",
            "name": SITE_NAME,
            "url": self.site_url,
            "inLanguage": ["en", "zh-Hant"],
        })
    }

    /// JobPosting structured data for one visible listing.
    pub fn job_posting_jsonld(&self, id: &str, title: &str, description: &str) -> Value {
        json!({
            "@context": "https://schema.org",
            "@type": "JobPosting",
            "title": title,
            "description": description,
            "identifier": id,
            "employmentType": "VOLUNTEER",
            "hiringOrganization": {
                "@type": "Organization",
                "name": SITE_NAME,
                "url": self.site_url,
            },
            "jobLocation": {
                "@type": "Place",
                "address": { "@type": "PostalAddress", "addressCountry": "TW" },
            },
            "url": format!("{}/apply?position={}", self.site_url, urlencoding::encode(id)),
            "directApply": true,
        })
    }

    /// Insert all SEO context for a page render.
    ///
    /// `extra_jsonld` carries page-specific blocks (e.g. JobPostings) that
    /// join the Organization and WebSite blocks emitted on every page.
    pub fn inject(
        &self,
        context: &mut tera::Context,
        path: &str,
        language: Language,
        extra_jsonld: Vec<Value>,
    ) {
        context.insert("meta", &self.page_meta(path));
        context.insert("canonical", &self.canonical(path, language));
        context.insert("alternates", &self.alternates(path));

        let mut blocks = vec![self.organization_jsonld(), self.website_jsonld()];
        blocks.extend(extra_jsonld);
        let serialized: Vec<String> = blocks.iter().map(std::string::ToString::to_string).collect();
        context.insert("jsonld", &serialized);

        context.insert("ga_measurement_id", &self.ga_measurement_id);
        context.insert("gtm_container_id", &self.gtm_container_id);
    }
}
