use mapframe::{
    get_style_info, is_valid_style_url, resolve_style, validate_style, StyleProvider, StyleUrl,
    FALLBACK_STYLE_URL,
};

/// Style identifier behaviour as seen by a caller of the public API
#[cfg(test)]
mod style_tests {
    use super::*;

    fn provider() -> StyleProvider {
        StyleProvider::new("provider", "provider", "default", "streets").unwrap()
    }

    /// A custom namespace parses user-owned styles
    #[test]
    fn test_custom_provider_user_style() {
        let provider = provider();
        let info = provider.style_info("provider://styles/alice/abc123").unwrap();

        assert_eq!(info.owner, "alice");
        assert_eq!(info.id, "abc123");
        assert!(!info.is_official);
        assert_eq!(info.provider, "provider");
    }

    /// Empty input is rejected with the fallback attached
    #[test]
    fn test_empty_style_falls_back() {
        let validation = provider().validate("");

        assert!(!validation.is_valid);
        assert_eq!(validation.error.unwrap().to_string(), "Style URL is required");
        assert_eq!(
            validation.fallback_style.as_deref(),
            Some("provider://styles/default/streets")
        );
    }

    #[test]
    fn test_default_namespace() {
        assert!(is_valid_style_url("mapbox://styles/mapbox/streets-v12"));
        assert!(is_valid_style_url("mapbox://styles/alice/ck_1-2"));
        assert!(!is_valid_style_url("https://styles/mapbox/streets-v12"));
        assert!(!is_valid_style_url("mapbox://styles/mapbox"));
        assert!(!is_valid_style_url("mapbox://styles/mapbox/streets v12"));
        assert!(!is_valid_style_url("mapbox://styles/mapbox/streets-v12/extra"));
        assert!(validate_style(FALLBACK_STYLE_URL).is_valid);
    }

    /// Invalid inputs always come back with the format hint
    #[test]
    fn test_invalid_style_message() {
        let validation = validate_style("not-a-style");
        let message = validation.error.unwrap().to_string();

        assert!(message.contains("mapbox://styles/{owner}/{id}"));
        assert_eq!(validation.fallback_style.as_deref(), Some(FALLBACK_STYLE_URL));
    }

    /// Resolution never yields an unusable identifier
    #[test]
    fn test_resolve_always_valid() {
        let inputs = [
            None,
            Some(""),
            Some("   "),
            Some("junk"),
            Some("mapbox://styles/mapbox/dark-v11"),
            Some("provider://styles/alice/abc123"),
        ];

        for preferred in inputs {
            for configured in inputs {
                let style = resolve_style(preferred, configured);
                assert!(is_valid_style_url(&style), "{preferred:?} / {configured:?} -> {style}");
            }
        }
    }

    #[test]
    fn test_resolve_precedence() {
        let dark = "mapbox://styles/mapbox/dark-v11";
        let mine = "mapbox://styles/alice/abc123";

        assert_eq!(resolve_style(Some(dark), Some(mine)), dark);
        assert_eq!(resolve_style(Some("junk"), Some(mine)), mine);
        assert_eq!(resolve_style(None, Some("junk")), FALLBACK_STYLE_URL);
        assert_eq!(resolve_style(None, None), FALLBACK_STYLE_URL);
    }

    /// Parsing then rebuilding gives back the input
    #[test]
    fn test_style_info_rebuilds_identifier() {
        let provider = provider();
        for style in [
            "provider://styles/alice/abc123",
            "provider://styles/provider/outdoors-v2",
            "provider://styles/a_b/c-d",
        ] {
            let info = provider.style_info(style).unwrap();
            let rebuilt = provider.make(&info.owner, &info.id).unwrap();
            assert_eq!(rebuilt.as_str(), style);
        }

        assert!(get_style_info("mapbox://styles/mapbox/light-v11").unwrap().is_official);
        assert!(get_style_info("provider://styles/alice/abc123").is_none());
    }

    #[test]
    fn test_style_url_serde() {
        let url: StyleUrl = serde_json::from_str(r#""mapbox://styles/alice/abc123""#).unwrap();
        assert_eq!(url.owner(), "alice");
        assert_eq!(
            serde_json::to_string(&url).unwrap(),
            r#""mapbox://styles/alice/abc123""#
        );

        assert!(serde_json::from_str::<StyleUrl>(r#""mapbox://nope""#).is_err());
    }
}
