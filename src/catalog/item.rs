use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Recurrence bucket for an activity. The derived `Ord` follows the
/// canonical display order (daily first, yearly last).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    Daily,
    #[default]
    Weekly,
    Monthly,
    Semester,
    Yearly,
}

impl Cadence {
    pub const ALL: [Cadence; 5] = [
        Cadence::Daily,
        Cadence::Weekly,
        Cadence::Monthly,
        Cadence::Semester,
        Cadence::Yearly,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Cadence::Daily => "daily",
            Cadence::Weekly => "weekly",
            Cadence::Monthly => "monthly",
            Cadence::Semester => "semester",
            Cadence::Yearly => "yearly",
        }
    }

    /// Title-cased label for document headings.
    pub fn heading(self) -> &'static str {
        match self {
            Cadence::Daily => "Daily",
            Cadence::Weekly => "Weekly",
            Cadence::Monthly => "Monthly",
            Cadence::Semester => "Semester",
            Cadence::Yearly => "Yearly",
        }
    }

    /// Lenient parse for authored catalog data: anything unrecognized
    /// lands in the weekly bucket instead of failing the load.
    pub fn coerce(raw: &str) -> Self {
        raw.trim().parse().unwrap_or_default()
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Cadence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(Cadence::Daily),
            "weekly" => Ok(Cadence::Weekly),
            "monthly" => Ok(Cadence::Monthly),
            "semester" => Ok(Cadence::Semester),
            "yearly" => Ok(Cadence::Yearly),
            other => Err(format!("unknown cadence '{}'", other)),
        }
    }
}

fn cadence_or_weekly<'de, D>(deserializer: D) -> Result<Cadence, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(Cadence::coerce(&raw))
}

/// Category of interpersonal activity, independent of cadence.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum EngagementKind {
    Prayer,
    Gathering,
    Practice,
    Event,
    Study,
    Hospitality,
    Conversation,
    PublicTalk,
    VideoCall,
}

impl EngagementKind {
    pub const ALL: [EngagementKind; 9] = [
        EngagementKind::Prayer,
        EngagementKind::Gathering,
        EngagementKind::Practice,
        EngagementKind::Event,
        EngagementKind::Study,
        EngagementKind::Hospitality,
        EngagementKind::Conversation,
        EngagementKind::PublicTalk,
        EngagementKind::VideoCall,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EngagementKind::Prayer => "prayer",
            EngagementKind::Gathering => "gathering",
            EngagementKind::Practice => "practice",
            EngagementKind::Event => "event",
            EngagementKind::Study => "study",
            EngagementKind::Hospitality => "hospitality",
            EngagementKind::Conversation => "conversation",
            EngagementKind::PublicTalk => "public talk",
            EngagementKind::VideoCall => "video call",
        }
    }
}

impl fmt::Display for EngagementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EngagementKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "prayer" => Ok(EngagementKind::Prayer),
            "gathering" => Ok(EngagementKind::Gathering),
            "practice" => Ok(EngagementKind::Practice),
            "event" => Ok(EngagementKind::Event),
            "study" => Ok(EngagementKind::Study),
            "hospitality" => Ok(EngagementKind::Hospitality),
            "conversation" => Ok(EngagementKind::Conversation),
            "public-talk" | "public talk" => Ok(EngagementKind::PublicTalk),
            "video-call" | "video call" => Ok(EngagementKind::VideoCall),
            other => Err(format!("unknown engagement kind '{}'", other)),
        }
    }
}

/// Format of an activity (how it is run, as opposed to what it engages).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Practice,
    Gathering,
    Event,
}

impl ActivityType {
    pub fn label(self) -> &'static str {
        match self {
            ActivityType::Practice => "practice",
            ActivityType::Gathering => "gathering",
            ActivityType::Event => "event",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One authored activity in the catalog. Immutable for the process
/// lifetime once loaded.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CatalogItem {
    /// Unique identity key across the whole catalog
    pub id: String,

    /// Id of the contributor this rhythm comes from
    pub contributor: String,

    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, deserialize_with = "cadence_or_weekly")]
    pub cadence: Cadence,

    pub activity: ActivityType,

    pub kind: EngagementKind,

    /// Embeddable video reference, normalized at load time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,

    /// Extended narrative shown in the detail view
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,
}

impl CatalogItem {
    /// Case-folded text the free-text query is matched against.
    pub fn search_haystack(&self) -> String {
        format!("{} {} {}", self.title, self.description, self.contributor).to_lowercase()
    }
}

/// A person whose rhythms appear in the catalog, shown in the
/// introductions step.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Contributor {
    pub id: String,
    pub name: String,
    pub role: String,

    /// Why this example is worth studying
    #[serde(default)]
    pub why: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cadence_canonical_order() {
        let mut shuffled = vec![
            Cadence::Yearly,
            Cadence::Daily,
            Cadence::Semester,
            Cadence::Weekly,
            Cadence::Monthly,
        ];
        shuffled.sort();
        assert_eq!(shuffled, Cadence::ALL.to_vec());
    }

    #[test]
    fn test_cadence_coerce_unknown_to_weekly() {
        assert_eq!(Cadence::coerce("biannual"), Cadence::Weekly);
        assert_eq!(Cadence::coerce(""), Cadence::Weekly);
        assert_eq!(Cadence::coerce("  monthly "), Cadence::Monthly);
    }

    #[test]
    fn test_cadence_strict_parse_rejects_unknown() {
        assert!("biannual".parse::<Cadence>().is_err());
        assert_eq!("Daily".parse::<Cadence>(), Ok(Cadence::Daily));
    }

    #[test]
    fn test_engagement_kind_parse_both_spellings() {
        assert_eq!(
            "public-talk".parse::<EngagementKind>(),
            Ok(EngagementKind::PublicTalk)
        );
        assert_eq!(
            "video call".parse::<EngagementKind>(),
            Ok(EngagementKind::VideoCall)
        );
        assert!("karaoke".parse::<EngagementKind>().is_err());
    }

    #[test]
    fn test_item_cadence_coerced_during_deserialization() {
        let json = r#"{
            "id": "x1",
            "contributor": "paula",
            "title": "Coffee Chat",
            "cadence": "biannual",
            "activity": "practice",
            "kind": "conversation"
        }"#;
        let item: CatalogItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.cadence, Cadence::Weekly);
    }
}
