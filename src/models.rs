use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "Nuvance Group — Thoughtful Interiors";
pub const DEFAULT_SUBTITLE: &str =
    "We craft warm, functional spaces — from residential to commercial. Modern design with lasting value.";
pub const DEFAULT_IMAGE: &str = "/nuvance-hero.jpg";

pub const EYEBROW: &str = "Bespoke interior design";
pub const IMAGE_ALT: &str = "Interior preview";
pub const THUMB_ALT: &str = "thumb";
pub const CAPTION_TITLE: &str = "Modern Living Room";
pub const CAPTION_DETAIL: &str = "3D layout & fit-out";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Cta {
    pub label: String,
    pub href: String,
}

impl Cta {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }

    pub fn default_primary() -> Self {
        Self::new("Get a Consultation", "/contact")
    }

    pub fn default_secondary() -> Self {
        Self::new("View Portfolio", "/portfolio")
    }
}

/// Where the hero image comes from. Either an asset bundled with the site
/// or a remote URL; both end up verbatim in `<img src>`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(from = "String", into = "String")]
pub enum ImageSource {
    Local(String),
    Remote(String),
}

impl ImageSource {
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.starts_with("https://") || s.starts_with("http://") || s.starts_with("//") {
            ImageSource::Remote(s.to_string())
        } else {
            ImageSource::Local(s.to_string())
        }
    }

    pub fn src(&self) -> &str {
        match self {
            ImageSource::Local(path) => path,
            ImageSource::Remote(url) => url,
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, ImageSource::Remote(_))
    }
}

impl Default for ImageSource {
    fn default() -> Self {
        ImageSource::Local(DEFAULT_IMAGE.to_string())
    }
}

impl From<String> for ImageSource {
    fn from(s: String) -> Self {
        ImageSource::parse(&s)
    }
}

impl From<ImageSource> for String {
    fn from(src: ImageSource) -> Self {
        match src {
            ImageSource::Local(s) | ImageSource::Remote(s) => s,
        }
    }
}

/// Fully resolved hero content. Built fresh for every render.
#[derive(Clone, Debug, PartialEq)]
pub struct HeroContent {
    pub title: String,
    pub subtitle: String,
    pub cta_primary: Cta,
    pub cta_secondary: Cta,
    pub image_src: ImageSource,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            subtitle: DEFAULT_SUBTITLE.to_string(),
            cta_primary: Cta::default_primary(),
            cta_secondary: Cta::default_secondary(),
            image_src: ImageSource::default(),
        }
    }
}

/// Partial hero content as supplied by a caller or by `content/hero.json`.
/// Every field falls back to its default on its own.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroOverrides {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub cta_primary: Option<Cta>,
    pub cta_secondary: Option<Cta>,
    pub image_src: Option<ImageSource>,
}

impl HeroOverrides {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Fields set on `self` win over the ones in `base`.
    pub fn or(self, base: HeroOverrides) -> HeroOverrides {
        HeroOverrides {
            title: self.title.or(base.title),
            subtitle: self.subtitle.or(base.subtitle),
            cta_primary: self.cta_primary.or(base.cta_primary),
            cta_secondary: self.cta_secondary.or(base.cta_secondary),
            image_src: self.image_src.or(base.image_src),
        }
    }

    pub fn resolve(self) -> HeroContent {
        HeroContent {
            title: self.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            subtitle: self.subtitle.unwrap_or_else(|| DEFAULT_SUBTITLE.to_string()),
            cta_primary: self.cta_primary.unwrap_or_else(Cta::default_primary),
            cta_secondary: self.cta_secondary.unwrap_or_else(Cta::default_secondary),
            image_src: self.image_src.unwrap_or_default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureIcon {
    Service,
    Team,
    Delivery,
}

impl FeatureIcon {
    /// Stroke paths for a 24x24 viewbox.
    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            FeatureIcon::Service => &["M3 7v10a2 2 0 002 2h14a2 2 0 002-2V7"],
            FeatureIcon::Team => &[
                "M12 8c1.657 0 3-.895 3-2s-1.343-2-3-2-3 .895-3 2 1.343 2 3 2z",
                "M12 14c4.418 0 8 1.79 8 4v2H4v-2c0-2.21 3.582-4 8-4z",
            ],
            FeatureIcon::Delivery => &["M3 10h4l3 8 4-16 3 8h4"],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feature {
    pub label: &'static str,
    pub icon: FeatureIcon,
}

pub const FEATURES: [Feature; 3] = [
    Feature { label: "End-to-end service", icon: FeatureIcon::Service },
    Feature { label: "Experienced team", icon: FeatureIcon::Team },
    Feature { label: "On-time delivery", icon: FeatureIcon::Delivery },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_overrides_resolve_to_defaults() {
        let content = HeroOverrides::default().resolve();
        assert_eq!(content, HeroContent::default());
        assert_eq!(content.cta_primary, Cta::new("Get a Consultation", "/contact"));
        assert_eq!(content.cta_secondary, Cta::new("View Portfolio", "/portfolio"));
        assert_eq!(content.image_src.src(), "/nuvance-hero.jpg");
    }

    #[test]
    fn defaults_are_non_empty() {
        let c = HeroContent::default();
        for s in [
            c.title.as_str(),
            c.subtitle.as_str(),
            c.cta_primary.label.as_str(),
            c.cta_primary.href.as_str(),
            c.cta_secondary.label.as_str(),
            c.cta_secondary.href.as_str(),
            c.image_src.src(),
        ] {
            assert!(!s.is_empty());
        }
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let content = HeroOverrides {
            cta_primary: Some(Cta::new("Book Now", "/book")),
            ..Default::default()
        }
        .resolve();

        assert_eq!(content.cta_primary.label, "Book Now");
        assert_eq!(content.cta_primary.href, "/book");
        assert_eq!(content.cta_secondary, Cta::default_secondary());
        assert_eq!(content.title, DEFAULT_TITLE);
    }

    #[test]
    fn json_uses_camel_case_and_fills_gaps() {
        let raw = r#"{
            "subtitle": "Calm rooms.",
            "ctaSecondary": { "label": "Our work", "href": "/work" },
            "imageSrc": "https://cdn.example.com/hero.jpg",
            "unknown": 1
        }"#;
        let content = HeroOverrides::from_json(raw).unwrap().resolve();

        assert_eq!(content.title, DEFAULT_TITLE);
        assert_eq!(content.subtitle, "Calm rooms.");
        assert_eq!(content.cta_primary, Cta::default_primary());
        assert_eq!(content.cta_secondary, Cta::new("Our work", "/work"));
        assert!(content.image_src.is_remote());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(HeroOverrides::from_json("{ \"title\": ").is_err());
        assert!(HeroOverrides::from_json("{ \"ctaPrimary\": \"nope\" }").is_err());
    }

    #[test]
    fn image_source_classification() {
        assert!(ImageSource::parse("https://x.io/a.jpg").is_remote());
        assert!(ImageSource::parse("http://x.io/a.jpg").is_remote());
        assert!(ImageSource::parse("//cdn.x.io/a.jpg").is_remote());
        assert_eq!(
            ImageSource::parse("/assets/room.png"),
            ImageSource::Local("/assets/room.png".into())
        );
    }

    #[test]
    fn explicit_overrides_win_over_config() {
        let config = HeroOverrides {
            title: Some("From config".into()),
            subtitle: Some("Config subtitle".into()),
            ..Default::default()
        };
        let merged = HeroOverrides {
            title: Some("From props".into()),
            ..Default::default()
        }
        .or(config)
        .resolve();

        assert_eq!(merged.title, "From props");
        assert_eq!(merged.subtitle, "Config subtitle");
    }

    #[test]
    fn exactly_three_features() {
        assert_eq!(FEATURES.len(), 3);
        assert_eq!(FEATURES[1].icon.paths().len(), 2);
    }
}
