use serde::{Deserialize, Serialize};

use crate::normalization;

/// A single hackathon event submitted for insertion into the
/// `hackathons` table.
///
/// Every field the input file may omit is an explicit `Option`; the
/// validator decides which ones a record must carry before it is
/// eligible for insertion. Absent fields are left out of the insert
/// payload entirely so the table's own defaults apply.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Hackathon {
    /// The name provided. Must be unique after normalization.
    #[serde(
        default,
        deserialize_with = "normalization::deserialize_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,

    /// A free-form description of the event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The human-readable venue, e.g. "San Francisco, CA, USA".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continent: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    /// When the event starts, as ISO 8601 text with a `Z` marker or
    /// an explicit offset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    /// When the event ends; same format as `start_date`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    /// The category tags, e.g. `["AI", "Web3"]`. At least one is
    /// required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer_email: Option<String>,

    /// Free-form prize text, e.g. "$50,000". Not numeric.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prize_pool: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_online: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<u32>,
}

impl Hackathon {
    /// The name to show in progress output, even for records that
    /// fail validation because the name is missing.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }
}

#[cfg(test)]
pub(crate) fn sample_hackathon(name: &str) -> Hackathon {
    Hackathon {
        name: Some(name.to_string()),
        description: Some("A 48-hour hackathon".to_string()),
        location: Some("San Francisco, CA, USA".to_string()),
        city: Some("San Francisco".to_string()),
        country: Some("USA".to_string()),
        continent: Some("North America".to_string()),
        latitude: Some(37.7749),
        longitude: Some(-122.4194),
        start_date: Some("2025-03-15T09:00:00Z".to_string()),
        end_date: Some("2025-03-17T18:00:00Z".to_string()),
        categories: Some(vec!["AI".to_string(), "Web3".to_string()]),
        website_url: Some("https://example.com".to_string()),
        organizer_email: Some("organizer@example.com".to_string()),
        prize_pool: Some("$50,000".to_string()),
        is_online: Some(false),
        max_participants: Some(200),
    }
}
