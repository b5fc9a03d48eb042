//! Static team catalog entries.

use serde::{Deserialize, Serialize};

/// A club in the bundled catalog.
///
/// Field names are camelCase in the catalog file and in the persisted
/// selection, so the same record round-trips through both.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub conference: String,
    pub logo: String,
    pub player_image: String,
    pub colors: TeamColors,
    pub stadium: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct TeamColors {
    pub primary: String,
    pub secondary: String,
}

impl Team {
    /// Key used by the remote stats feed for this team.
    pub fn stats_key(&self) -> String {
        self.id.to_string()
    }

    /// Case-insensitive name comparison, used to resolve opponents by name.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Catalog labels must match exactly; anything else is in no conference.
    pub fn conference_kind(&self) -> Option<Conference> {
        Conference::ALL.into_iter().find(|c| c.label() == self.conference)
    }
}

/// League partition used to group teams on the selection screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conference {
    Eastern,
    Western,
}

impl Conference {
    pub const ALL: [Conference; 2] = [Conference::Eastern, Conference::Western];

    /// Lenient parse for user input: trims and ignores case.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            l if l.eq_ignore_ascii_case("eastern") => Some(Conference::Eastern),
            l if l.eq_ignore_ascii_case("western") => Some(Conference::Western),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Conference::Eastern => "Eastern",
            Conference::Western => "Western",
        }
    }
}

impl std::fmt::Display for Conference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn miami() -> Team {
        Team {
            id: 1,
            name: "Inter Miami".to_string(),
            conference: "Eastern".to_string(),
            logo: "InterMiami".to_string(),
            player_image: "Messi".to_string(),
            colors: TeamColors {
                primary: "#F7B5CD".to_string(),
                secondary: "#231F20".to_string(),
            },
            stadium: "Chase Stadium".to_string(),
        }
    }

    #[test]
    fn test_team_parses_catalog_shape() {
        let json = r##"{
            "id": 1,
            "name": "Inter Miami",
            "conference": "Eastern",
            "logo": "InterMiami",
            "playerImage": "Messi",
            "colors": { "primary": "#F7B5CD", "secondary": "#231F20" },
            "stadium": "Chase Stadium"
        }"##;

        let team: Team = serde_json::from_str(json).expect("Failed to parse team JSON");
        assert_eq!(team, miami());
    }

    #[test]
    fn test_team_serializes_camel_case() {
        let value = serde_json::to_value(miami()).expect("Failed to serialize team");
        assert_eq!(value["playerImage"], "Messi");
        assert!(value.get("player_image").is_none());
    }

    #[test]
    fn test_name_matches_ignores_case() {
        let team = miami();
        assert!(team.name_matches("inter miami"));
        assert!(team.name_matches("INTER MIAMI"));
        assert!(!team.name_matches("Inter Miami CF"));
    }

    #[test]
    fn test_stats_key_is_stringified_id() {
        assert_eq!(miami().stats_key(), "1");
    }

    #[test]
    fn test_conference_from_label() {
        assert_eq!(Conference::from_label("Eastern"), Some(Conference::Eastern));
        assert_eq!(Conference::from_label("western"), Some(Conference::Western));
        assert_eq!(Conference::from_label("Central"), None);
        assert_eq!(miami().conference_kind(), Some(Conference::Eastern));
    }

    #[test]
    fn test_catalog_conference_is_exact() {
        for label in [" eastern", "Eastern ", "EASTERN", "eastern"] {
            let team = Team {
                conference: label.to_string(),
                ..miami()
            };
            assert_eq!(team.conference_kind(), None, "label {:?}", label);
        }
    }
}
