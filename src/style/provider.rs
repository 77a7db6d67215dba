use crate::{
    core::constants::{
        DEFAULT_STYLE_SCHEME, FALLBACK_STYLE_ID, FALLBACK_STYLE_OWNER, OFFICIAL_STYLE_OWNER,
        STYLES_PATH,
    },
    style::{StyleInfo, StyleUrl},
    MapError, Result,
};
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

const TOKEN_CLASS: &str = "[A-Za-z0-9_-]+";

static MAPBOX: Lazy<StyleProvider> = Lazy::new(|| {
    StyleProvider::new(
        DEFAULT_STYLE_SCHEME,
        OFFICIAL_STYLE_OWNER,
        FALLBACK_STYLE_OWNER,
        FALLBACK_STYLE_ID,
    )
    .expect("built-in style provider is well-formed")
});

static TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^{TOKEN_CLASS}$")).expect("token pattern compiles"));

static SCHEME: Lazy<Regex> =
    Lazy::new(|| Regex::new("^[A-Za-z][A-Za-z0-9+.-]*$").expect("scheme pattern compiles"));

/// Outcome of [`StyleProvider::validate`].
///
/// Invalid results always carry the fallback identifier so callers can retry
/// with it directly.
#[derive(Debug)]
pub struct StyleValidation {
    pub is_valid: bool,
    pub error: Option<MapError>,
    pub fallback_style: Option<String>,
}

impl StyleValidation {
    fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
            fallback_style: None,
        }
    }

    fn invalid(error: MapError, fallback: &str) -> Self {
        Self {
            is_valid: false,
            error: Some(error),
            fallback_style: Some(fallback.to_string()),
        }
    }
}

/// Describes one style namespace: its scheme, the owner name reserved for
/// official styles and the style to fall back to.
///
/// All validation and resolution is a pure function of these three values and
/// the input string.
#[derive(Debug, Clone)]
pub struct StyleProvider {
    scheme: String,
    official_owner: String,
    fallback: String,
    pattern: Regex,
}

impl StyleProvider {
    pub fn new(
        scheme: &str,
        official_owner: &str,
        fallback_owner: &str,
        fallback_id: &str,
    ) -> Result<Self> {
        if !SCHEME.is_match(scheme) {
            return Err(MapError::Validation(format!("Invalid style scheme: {scheme:?}")));
        }
        for token in [official_owner, fallback_owner, fallback_id] {
            if !is_token(token) {
                return Err(MapError::Validation(format!("Invalid style token: {token:?}")));
            }
        }

        let pattern = Regex::new(&format!(
            "^{}://{STYLES_PATH}/({TOKEN_CLASS})/({TOKEN_CLASS})$",
            regex::escape(scheme)
        ))
        .map_err(|e| MapError::Validation(e.to_string()))?;

        Ok(Self {
            scheme: scheme.to_string(),
            official_owner: official_owner.to_string(),
            fallback: format!("{scheme}://{STYLES_PATH}/{fallback_owner}/{fallback_id}"),
            pattern,
        })
    }

    /// The `mapbox://styles/...` namespace used by the free functions.
    pub fn mapbox() -> &'static StyleProvider {
        &MAPBOX
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn official_owner(&self) -> &str {
        &self.official_owner
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn fallback_url(&self) -> StyleUrl {
        StyleUrl::from_validated(self.fallback.clone())
    }

    /// Exact, case-sensitive match against `<scheme>://styles/{owner}/{id}`.
    pub fn is_valid(&self, style_url: &str) -> bool {
        self.pattern.is_match(style_url)
    }

    pub fn parse(&self, style_url: &str) -> Result<StyleUrl> {
        if style_url.trim().is_empty() {
            return Err(MapError::Validation("Style URL is required".to_string()));
        }
        if !self.is_valid(style_url) {
            return Err(MapError::Validation(format!(
                "Invalid style URL format. Expected: {}://{STYLES_PATH}/{{owner}}/{{id}}",
                self.scheme
            )));
        }
        Ok(StyleUrl::from_validated(style_url.to_string()))
    }

    /// Builds an identifier from an owner and id token.
    pub fn make(&self, owner: &str, id: &str) -> Result<StyleUrl> {
        self.parse(&format!("{}://{STYLES_PATH}/{owner}/{id}", self.scheme))
    }

    pub fn validate(&self, style_url: &str) -> StyleValidation {
        match self.parse(style_url) {
            Ok(_) => StyleValidation::valid(),
            Err(err) => StyleValidation::invalid(err, &self.fallback),
        }
    }

    pub fn style_info(&self, style_url: &str) -> Option<StyleInfo> {
        let captures = self.pattern.captures(style_url)?;
        let owner = captures.get(1)?.as_str();
        let id = captures.get(2)?.as_str();

        Some(StyleInfo {
            owner: owner.to_string(),
            id: id.to_string(),
            is_official: owner == self.official_owner,
            provider: self.scheme.clone(),
        })
    }

    /// Picks the caller's style if valid, else the configured one if valid,
    /// else the fallback.
    pub fn resolve(&self, preferred: Option<&str>, configured: Option<&str>) -> String {
        if let Some(preferred) = preferred {
            if self.is_valid(preferred) {
                return preferred.to_string();
            }
            warn!("Ignoring invalid preferred style {preferred:?}");
        }

        if let Some(configured) = configured.filter(|style| !style.trim().is_empty()) {
            if self.is_valid(configured) {
                return configured.to_string();
            }
            warn!("Ignoring invalid configured style {configured:?}");
        }

        debug!("Using fallback style {}", self.fallback);
        self.fallback.clone()
    }
}

impl Default for StyleProvider {
    fn default() -> Self {
        Self::mapbox().clone()
    }
}

fn is_token(value: &str) -> bool {
    TOKEN.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generic() -> StyleProvider {
        StyleProvider::new("provider", "provider", "default", "streets").unwrap()
    }

    #[test]
    fn test_valid_urls() {
        let provider = StyleProvider::mapbox();
        for url in [
            "mapbox://styles/mapbox/streets-v12",
            "mapbox://styles/saku-0109/cmdb2t1uq03d301r447l5hnif",
            "mapbox://styles/username/styleid123abc",
            "mapbox://styles/under_score/A-Z",
        ] {
            assert!(provider.is_valid(url), "{url} should be valid");
        }
    }

    #[test]
    fn test_invalid_urls() {
        let provider = StyleProvider::mapbox();
        for url in [
            "",
            "not-a-url",
            "https://example.com/style.json",
            "mapbox://invalid",
            "mapbox://styles/",
            "mapbox://styles/user",
            "mapbox://styles/user/",
            "styles/user/style",
            "mapbox://styles/user/style/",
            "mapbox://styles/user/style/extra",
            " mapbox://styles/user/style",
            "mapbox://styles/user/style ",
            "mapbox://styles/user/style\n",
            "mapbox://styles/us.er/style",
            "mapbox://styles/user/st%79le",
            "MAPBOX://styles/user/style",
            "provider://styles/user/style",
        ] {
            assert!(!provider.is_valid(url), "{url:?} should be invalid");
        }
    }

    #[test]
    fn test_validate_blank() {
        let result = generic().validate("");
        assert!(!result.is_valid);
        assert_eq!(result.error.unwrap().to_string(), "Style URL is required");
        assert_eq!(
            result.fallback_style.as_deref(),
            Some("provider://styles/default/streets")
        );

        let result = generic().validate("   ");
        assert_eq!(result.error.unwrap().to_string(), "Style URL is required");
    }

    #[test]
    fn test_validate_malformed() {
        let result = StyleProvider::mapbox().validate("mapbox://styles/invalid");
        assert!(!result.is_valid);
        assert!(result
            .error
            .unwrap()
            .to_string()
            .contains("Invalid style URL format"));
        assert_eq!(
            result.fallback_style.as_deref(),
            Some("mapbox://styles/mapbox/streets-v12")
        );
    }

    #[test]
    fn test_validate_ok() {
        let result = StyleProvider::mapbox().validate("mapbox://styles/saku-0109/cmdb2t1uq03d301r447l5hnif");
        assert!(result.is_valid);
        assert!(result.error.is_none());
        assert!(result.fallback_style.is_none());
    }

    #[test]
    fn test_style_info() {
        let provider = generic();
        let info = provider.style_info("provider://styles/alice/abc123").unwrap();
        assert_eq!(info.owner, "alice");
        assert_eq!(info.id, "abc123");
        assert!(!info.is_official);
        assert_eq!(info.provider, "provider");

        assert!(provider.style_info("provider://styles/provider/x").unwrap().is_official);
        // exact match, not case-folded
        assert!(!provider.style_info("provider://styles/Provider/x").unwrap().is_official);
        assert!(provider.style_info("provider://styles/alice").is_none());
    }

    #[test]
    fn test_style_info_inverts_make() {
        let provider = StyleProvider::mapbox();
        for (owner, id) in [("alice", "abc123"), ("mapbox", "streets-v12"), ("a_b-c", "Z9")] {
            let url = provider.make(owner, id).unwrap();
            let info = provider.style_info(url.as_str()).unwrap();
            assert_eq!(info.owner, owner);
            assert_eq!(info.id, id);
        }
    }

    #[test]
    fn test_resolve_precedence() {
        let provider = StyleProvider::mapbox();
        let preferred = "mapbox://styles/alice/abc123";
        let configured = "mapbox://styles/bob/def456";

        assert_eq!(provider.resolve(Some(preferred), Some(configured)), preferred);
        assert_eq!(provider.resolve(Some("bad"), Some(configured)), configured);
        assert_eq!(provider.resolve(None, Some(configured)), configured);
        assert_eq!(provider.resolve(Some("bad"), Some("worse")), provider.fallback());
        assert_eq!(provider.resolve(None, None), provider.fallback());
        assert_eq!(provider.resolve(Some(""), Some("  ")), provider.fallback());
    }

    #[test]
    fn test_provider_rejects_bad_parts() {
        assert!(StyleProvider::new("", "o", "f", "i").is_err());
        assert!(StyleProvider::new("mapbox", "o/x", "f", "i").is_err());
        assert!(StyleProvider::new("mapbox", "o", "", "i").is_err());
        assert_eq!(generic().fallback(), "provider://styles/default/streets");
    }
}
