use crate::{style::StyleProvider, MapError};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A well-formed style identifier, `<scheme>://styles/{owner}/{id}`.
///
/// Values only come out of [`StyleProvider::parse`] or [`StyleProvider::make`],
/// so holding a `StyleUrl` means the string already passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StyleUrl(String);

impl StyleUrl {
    /// Builds an identifier for the default provider from its two tokens.
    pub fn new(owner: &str, id: &str) -> crate::Result<Self> {
        StyleProvider::mapbox().make(owner, id)
    }

    /// Caller must have checked `raw` against the provider pattern.
    pub(crate) fn from_validated(raw: String) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn scheme(&self) -> &str {
        self.0.split_once("://").map_or("", |(scheme, _)| scheme)
    }

    pub fn owner(&self) -> &str {
        self.segments().0
    }

    pub fn id(&self) -> &str {
        self.segments().1
    }

    fn segments(&self) -> (&str, &str) {
        let path = self.0.split_once("://styles/").map_or("", |(_, path)| path);
        path.split_once('/').unwrap_or((path, ""))
    }
}

impl fmt::Display for StyleUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StyleUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for StyleUrl {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StyleProvider::mapbox().parse(s)
    }
}

impl TryFrom<String> for StyleUrl {
    type Error = MapError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StyleUrl> for String {
    fn from(url: StyleUrl) -> Self {
        url.0
    }
}

/// Read-only facts derived from a style identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleInfo {
    pub owner: String,
    pub id: String,
    pub is_official: bool,
    pub provider: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments() {
        let url: StyleUrl = "mapbox://styles/saku-0109/cmdb2t1uq03d301r447l5hnif"
            .parse()
            .unwrap();
        assert_eq!(url.scheme(), "mapbox");
        assert_eq!(url.owner(), "saku-0109");
        assert_eq!(url.id(), "cmdb2t1uq03d301r447l5hnif");
        assert_eq!(url.to_string(), "mapbox://styles/saku-0109/cmdb2t1uq03d301r447l5hnif");
    }

    #[test]
    fn test_new_rejects_bad_tokens() {
        assert_eq!(
            StyleUrl::new("alice", "abc123").unwrap().as_str(),
            "mapbox://styles/alice/abc123"
        );
        assert!(StyleUrl::new("", "abc").is_err());
        assert!(StyleUrl::new("alice", "a/b").is_err());
        assert!(StyleUrl::new("al ice", "abc").is_err());
    }

    #[test]
    fn test_serde_validates() {
        let url: StyleUrl = serde_json::from_str(r#""mapbox://styles/mapbox/dark-v11""#).unwrap();
        assert_eq!(url.id(), "dark-v11");
        assert_eq!(serde_json::to_string(&url).unwrap(), r#""mapbox://styles/mapbox/dark-v11""#);

        assert!(serde_json::from_str::<StyleUrl>(r#""mapbox://styles/user/""#).is_err());
    }
}
