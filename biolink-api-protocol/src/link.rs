use serde::{
    Deserialize,
    Serialize,
};

use crate::util::null_as_default;

/// One outbound link, as returned in the list from `GET /api/links`.
///
/// Only the `id` is required. Other fields that are missing or `null` are
/// empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub id: LinkId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default)]
    pub icon_type: IconType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
}

/// Identifier of a [`Link`].
///
/// Backends hand these out either as integers or as strings (e.g. UUIDs), so
/// both are accepted. The id is only used for keying rows, never parsed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LinkId {
    Number(i64),
    /// Integers that don't fit into an `i64`.
    Unsigned(u64),
    Text(String),
}

/// The kind of service a link points to.
///
/// Tags the UI doesn't know about are kept as [`IconType::Other`] and rendered
/// with neutral styling. `null` is read as an empty tag.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum IconType {
    Facebook,
    Discord,
    Steam,
    Github,
    Youtube,
    Other(String),
}

impl IconType {
    /// All recognized icon types.
    pub const KNOWN: [IconType; 5] = [
        IconType::Facebook,
        IconType::Discord,
        IconType::Steam,
        IconType::Github,
        IconType::Youtube,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            IconType::Facebook => "facebook",
            IconType::Discord => "discord",
            IconType::Steam => "steam",
            IconType::Github => "github",
            IconType::Youtube => "youtube",
            IconType::Other(tag) => tag,
        }
    }
}

impl Default for IconType {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for IconType {
    fn from(value: String) -> Self {
        // tags are matched exactly, like the server sends them.
        match value.as_str() {
            "facebook" => IconType::Facebook,
            "discord" => IconType::Discord,
            "steam" => IconType::Steam,
            "github" => IconType::Github,
            "youtube" => IconType::Youtube,
            _ => IconType::Other(value),
        }
    }
}

impl From<Option<String>> for IconType {
    fn from(value: Option<String>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

impl From<&str> for IconType {
    fn from(value: &str) -> Self {
        value.to_owned().into()
    }
}

impl From<IconType> for String {
    fn from(value: IconType) -> Self {
        match value {
            IconType::Other(tag) => tag,
            known => known.as_str().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        IconType,
        Link,
        LinkId,
    };

    #[test]
    fn it_decodes_a_numeric_id() {
        let link: Link = serde_json::from_str(
            r#"{"id":1,"url":"https://yt.com/c","icon_type":"youtube","title":"My YouTube"}"#,
        )
        .unwrap();

        assert_eq!(link.id, LinkId::Number(1));
        assert_eq!(link.url, "https://yt.com/c");
        assert_eq!(link.icon_type, IconType::Youtube);
        assert_eq!(link.title, "My YouTube");
    }

    #[test]
    fn it_decodes_a_string_id() {
        let link: Link = serde_json::from_str(
            r#"{"id":"5f0c6a9e-2b1d-4c7e-9a55-0d1b7f3e2c11","url":"https://github.com/jane","icon_type":"github","title":"GitHub"}"#,
        )
        .unwrap();

        assert_eq!(
            link.id,
            LinkId::Text("5f0c6a9e-2b1d-4c7e-9a55-0d1b7f3e2c11".to_owned())
        );
        assert_eq!(link.icon_type, IconType::Github);
    }

    #[test]
    fn it_decodes_ids_beyond_i64() {
        let link: Link = serde_json::from_str(r#"{"id":18446744073709551615}"#).unwrap();
        assert_eq!(link.id, LinkId::Unsigned(u64::MAX));

        let link: Link = serde_json::from_str(r#"{"id":-7}"#).unwrap();
        assert_eq!(link.id, LinkId::Number(-7));
    }

    #[test]
    fn it_keeps_unknown_icon_types() {
        let link: Link = serde_json::from_str(
            r#"{"id":2,"url":"https://example.com","icon_type":"mastodon","title":"Toots"}"#,
        )
        .unwrap();

        assert_eq!(link.icon_type, IconType::Other("mastodon".to_owned()));
        assert_eq!(link.icon_type.as_str(), "mastodon");
    }

    #[test]
    fn icon_types_are_case_sensitive() {
        assert_eq!(
            IconType::from("YouTube"),
            IconType::Other("YouTube".to_owned())
        );
    }

    #[test]
    fn it_defaults_missing_link_fields() {
        let link: Link = serde_json::from_str(r#"{"id":3}"#).unwrap();

        assert_eq!(link.icon_type, IconType::Other(String::new()));
        assert!(link.url.is_empty());
        assert!(link.title.is_empty());
    }

    #[test]
    fn it_treats_null_fields_like_missing_ones() {
        let link: Link = serde_json::from_str(
            r#"{"id":4,"url":null,"icon_type":null,"title":null}"#,
        )
        .unwrap();

        assert_eq!(link.id, LinkId::Number(4));
        assert_eq!(link.icon_type, IconType::default());
        assert!(link.url.is_empty());
        assert!(link.title.is_empty());
    }

    #[test]
    fn it_requires_an_id() {
        assert!(serde_json::from_str::<Link>(r#"{"url":"https://example.com"}"#).is_err());
    }

    #[test]
    fn it_encodes_icon_types_as_tags() {
        let json = serde_json::to_string(&[
            IconType::Discord,
            IconType::Other("twitch".to_owned()),
        ])
        .unwrap();
        assert_eq!(json, r#"["discord","twitch"]"#);
    }

    #[test]
    fn known_icon_types_round_trip_their_tag() {
        for icon_type in IconType::KNOWN {
            assert!(!matches!(icon_type, IconType::Other(_)));
            assert_eq!(IconType::from(icon_type.as_str()), icon_type);
        }
    }
}
