use std::borrow::Cow;

use chrono::{DateTime, FixedOffset, NaiveDateTime};

use crate::errors::ValidationError;
use crate::hackathon::Hackathon;

/// Checks whether a record is eligible for insertion.
///
/// The checks run in a fixed order and stop at the first failure:
/// required fields, then the `categories` shape, then both temporal
/// fields. Pure; the record is never modified.
pub fn validate(hackathon: &Hackathon) -> Result<(), ValidationError> {
    require(&hackathon.name, "name")?;
    require(&hackathon.location, "location")?;
    require(&hackathon.latitude, "latitude")?;
    require(&hackathon.longitude, "longitude")?;
    require(&hackathon.start_date, "start_date")?;
    require(&hackathon.end_date, "end_date")?;
    require(&hackathon.continent, "continent")?;
    require(&hackathon.country, "country")?;
    require(&hackathon.city, "city")?;
    require(&hackathon.categories, "categories")?;

    match hackathon.categories {
        Some(ref categories) if !categories.is_empty() => {}
        _ => return Err(ValidationError::EmptyCategories),
    }

    for value in hackathon.start_date.iter().chain(hackathon.end_date.iter()) {
        parse_timestamp(value)?;
    }

    Ok(())
}

fn require<T>(value: &Option<T>, field: &'static str) -> Result<(), ValidationError> {
    if value.is_some() {
        Ok(())
    } else {
        Err(ValidationError::MissingField(field))
    }
}

/// Parses an ISO 8601 timestamp, treating a trailing `Z` as `+00:00`.
/// Offset-less timestamps are accepted and read as UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>, ValidationError> {
    let normalized = match value.strip_suffix('Z') {
        Some(rest) => Cow::Owned(format!("{}+00:00", rest)),
        None => Cow::Borrowed(value),
    };

    if let Ok(parsed) = DateTime::parse_from_rfc3339(&normalized) {
        return Ok(parsed);
    }

    normalized
        .parse::<NaiveDateTime>()
        .map(|naive| naive.and_utc().fixed_offset())
        .map_err(|_| ValidationError::InvalidDate)
}
