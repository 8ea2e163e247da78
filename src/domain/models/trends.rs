use serde::{Deserialize, Serialize};

/// Kind of entity a trend query aggregates over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Party,
    Member,
}

impl EntityType {
    /// Wire value for the `entity_type` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Party => "party",
            EntityType::Member => "member",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EntityType::Party => "Party",
            EntityType::Member => "Member",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "party" => Some(EntityType::Party),
            "member" => Some(EntityType::Member),
            _ => None,
        }
    }
}

/// The subject of a trend query and of autocomplete lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySelector {
    pub entity_type: EntityType,
    pub name: String,
}

/// Top keywords of one entity for one year.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrendEntry {
    pub year: i32,
    pub keywords: Vec<String>,
}

/// Wire shape of `GET /keywords/trends`: either the yearly entries, or an
/// object carrying an application-level notice (unknown entity, no data).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TrendsResponse {
    Entries(Vec<TrendEntry>),
    Notice {
        #[serde(default)]
        error: Option<String>,
        #[serde(default)]
        message: Option<String>,
    },
}

impl TrendsResponse {
    /// Entries in service order, or the service-provided notice text.
    pub fn into_result(self) -> Result<Vec<TrendEntry>, String> {
        match self {
            TrendsResponse::Entries(entries) => Ok(entries),
            TrendsResponse::Notice { error, message } => Err(error
                .or(message)
                .unwrap_or_else(|| "No trend data available".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_type_slugs_round_trip() {
        assert_eq!(EntityType::Party.as_str(), "party");
        assert_eq!(EntityType::Member.as_str(), "member");
        assert_eq!(EntityType::from_slug("party"), Some(EntityType::Party));
        assert_eq!(EntityType::from_slug("member"), Some(EntityType::Member));
        assert_eq!(EntityType::from_slug("committee"), None);
    }

    #[test]
    fn test_entries_body_parses_in_order() {
        let body: TrendsResponse = serde_json::from_str(
            r#"[{"year": 2019, "keywords": ["ανάπτυξη", "κρίση"]}, {"year": 2020, "keywords": []}]"#,
        )
        .unwrap();
        let entries = body.into_result().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].year, 2019);
        assert_eq!(entries[0].keywords, vec!["ανάπτυξη", "κρίση"]);
    }

    #[test]
    fn test_error_body_becomes_notice() {
        let body: TrendsResponse =
            serde_json::from_str(r#"{"error": "Entity not found"}"#).unwrap();
        assert_eq!(body.into_result().unwrap_err(), "Entity not found");
    }

    #[test]
    fn test_message_body_becomes_notice() {
        let body: TrendsResponse =
            serde_json::from_str(r#"{"message": "No data for this entity"}"#).unwrap();
        assert_eq!(body.into_result().unwrap_err(), "No data for this entity");
    }

    #[test]
    fn test_empty_object_gets_fallback_notice() {
        let body: TrendsResponse = serde_json::from_str("{}").unwrap();
        assert!(!body.into_result().unwrap_err().is_empty());
    }
}
