use chrono::{DateTime, Datelike};
use serde::Serialize;

/// Reads a build-time environment variable, falling back to `$default`.
macro_rules! env_or {
    ($name:literal, $default:expr) => {
        match option_env!($name) {
            Some(value) => value,
            None => $default,
        }
    };
}

/// Site owner details and outbound links.
///
/// Values are fixed at build time (see `build.rs`) so the server render and the hydrated
/// bundle always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteConfig {
    pub owner: &'static str,
    pub tagline: &'static str,
    pub linkedin_url: &'static str,
    pub github_url: &'static str,
    pub email: &'static str,
    pub booking_url: Option<&'static str>,
}

pub const SITE: SiteConfig = SiteConfig {
    owner: env_or!("PORTFOLIO_OWNER", "Skylord 69"),
    tagline: env_or!(
        "PORTFOLIO_TAGLINE",
        "Strategic Architect of the Post-Human Future | AGI Design Strategist"
    ),
    linkedin_url: env_or!(
        "PORTFOLIO_LINKEDIN_URL",
        "https://linkedin.com/in/yourprofile"
    ),
    github_url: env_or!("PORTFOLIO_GITHUB_URL", "https://github.com/yourusername"),
    email: env_or!("PORTFOLIO_EMAIL", "your_email@example.com"),
    booking_url: option_env!("PORTFOLIO_BOOKING_URL"),
};

pub const BUILD_TIME: &str = env!("BUILD_TIME");

impl SiteConfig {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn profile_links(&self) -> [&'static str; 2] {
        [self.linkedin_url, self.github_url]
    }

    /// schema.org `Person` description for the page head.
    pub fn person_schema(&self) -> String {
        let person = PersonSchema {
            context: "https://schema.org",
            kind: "Person",
            name: self.owner,
            job_title: self.tagline,
            email: self.mailto(),
            same_as: self.profile_links(),
        };
        // only string fields, serialization can't fail
        serde_json::to_string(&person).unwrap_or_default()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PersonSchema {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    job_title: &'static str,
    email: String,
    same_as: [&'static str; 2],
}

/// Year of an RFC 3339 timestamp, if it parses.
pub fn year_of(timestamp: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|time| time.year())
}

/// Footer copyright year: the year the site was built.
pub fn copyright_year() -> i32 {
    year_of(BUILD_TIME).unwrap_or_else(|| {
        log::warn!("unparseable BUILD_TIME: {}", BUILD_TIME);
        chrono::Utc::now().year()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SiteConfig {
        SiteConfig {
            owner: "Ada",
            tagline: "Engineer",
            linkedin_url: "https://linkedin.com/in/ada",
            github_url: "https://github.com/ada",
            email: "ada@example.com",
            booking_url: None,
        }
    }

    #[test]
    fn test_mailto() {
        assert_eq!(config().mailto(), "mailto:ada@example.com");
    }

    #[test]
    fn test_person_schema() {
        let json: serde_json::Value =
            serde_json::from_str(&config().person_schema()).expect("schema should be JSON");
        assert_eq!(json["@context"], "https://schema.org");
        assert_eq!(json["@type"], "Person");
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["jobTitle"], "Engineer");
        assert_eq!(json["email"], "mailto:ada@example.com");
        assert_eq!(
            json["sameAs"],
            serde_json::json!(["https://linkedin.com/in/ada", "https://github.com/ada"])
        );
    }

    #[test]
    fn test_year_of() {
        assert_eq!(year_of("2025-06-01T12:30:00+00:00"), Some(2025));
        assert_eq!(year_of("not a timestamp"), None);
    }

    #[test]
    fn test_copyright_year_from_build() {
        assert!(year_of(BUILD_TIME).is_some());
        assert!(copyright_year() >= 2024);
    }

    #[test]
    fn test_site_defaults_are_links() {
        assert!(SITE.mailto().starts_with("mailto:"));
        for link in SITE.profile_links() {
            assert!(link.starts_with("https://"));
        }
    }
}
