use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Pricing tier of a tool.
///
/// Parsing never fails: values outside the fixed set, `null` and a missing field all become
/// [`ToolStatus::Wip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToolStatus {
    Free,
    Freemium,
    Premium,
    #[default]
    Wip,
}

impl ToolStatus {
    pub const ALL: [Self; 4] = [Self::Free, Self::Freemium, Self::Premium, Self::Wip];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Freemium => "Freemium",
            Self::Premium => "Premium",
            Self::Wip => "WIP",
        }
    }

    /// CSS class of the status badge.
    #[must_use]
    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::Free => "badge-free",
            Self::Freemium => "badge-freemium",
            Self::Premium => "badge-premium",
            Self::Wip => "badge-wip",
        }
    }

    /// Paid tiers carry a pricing block on the detail page.
    #[must_use]
    pub const fn has_pricing(self) -> bool {
        matches!(self, Self::Freemium | Self::Premium)
    }
}

impl From<&str> for ToolStatus {
    fn from(s: &str) -> Self {
        match s {
            "Free" => Self::Free,
            "Freemium" => Self::Freemium,
            "Premium" => Self::Premium,
            _ => Self::Wip,
        }
    }
}

impl fmt::Display for ToolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for ToolStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ToolStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Lenient<String>>::deserialize(deserializer)?;
        Ok(match raw {
            Some(Lenient::Value(s)) => Self::from(s.as_str()),
            _ => Self::Wip,
        })
    }
}

/// One catalog entry.
///
/// Every field is optional on the wire. Absent or malformed lists and text become empty; a
/// `links` or `pricing` value that is not an object is dropped. A bad field never fails the
/// record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToolRecord {
    #[serde(deserialize_with = "text")]
    pub slug: String,
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(deserialize_with = "text")]
    pub description: String,
    pub status: ToolStatus,
    #[serde(deserialize_with = "list")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "object", skip_serializing_if = "Option::is_none")]
    pub links: Option<ToolLinks>,
    #[serde(deserialize_with = "list", skip_serializing_if = "Vec::is_empty")]
    pub quickstart: Vec<String>,
    #[serde(deserialize_with = "object", skip_serializing_if = "Option::is_none")]
    pub pricing: Option<Pricing>,
}

impl ToolRecord {
    /// Download link, `#` when absent.
    #[must_use]
    pub fn download_href(&self) -> &str {
        self.links.as_ref().and_then(|l| non_empty(l.download.as_deref())).unwrap_or("#")
    }

    /// Documentation link, `#` when absent.
    #[must_use]
    pub fn docs_href(&self) -> &str {
        self.links.as_ref().and_then(|l| non_empty(l.docs.as_deref())).unwrap_or("#")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolLinks {
    pub download: Option<String>,
    pub docs: Option<String>,
}

/// Tier comparison shown for paid tools.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Pricing {
    #[serde(deserialize_with = "list")]
    pub free_includes: Vec<String>,
    #[serde(deserialize_with = "list")]
    pub premium_includes: Vec<String>,
    #[serde(deserialize_with = "text")]
    pub starter_idea: String,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Accepts the expected shape or anything else, without failing the whole record.
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Value(T),
    Other(IgnoredAny),
}

fn list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Lenient::<Vec<String>>::deserialize(deserializer)? {
        Lenient::Value(items) => items,
        Lenient::Other(_) => Vec::new(),
    })
}

fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Lenient::<String>::deserialize(deserializer)? {
        Lenient::Value(s) => s,
        Lenient::Other(_) => String::new(),
    })
}

fn object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match Lenient::<T>::deserialize(deserializer)? {
        Lenient::Value(value) => Some(value),
        Lenient::Other(_) => None,
    })
}
