use chrono::{DateTime, NaiveDateTime, Utc};

use super::{non_empty, validators::REQUIRED, FieldErrors, FormData};
use crate::aggregate::START_TIME_FORMAT;
use crate::models::NewShow;

pub const INVALID_ID: &str = "Not a valid id";
pub const INVALID_DATETIME: &str = "Not a valid datetime value";

/// Formats a browser `datetime-local` input may submit, in addition to
/// the canonical `%Y-%m-%d %H:%M:%S`.
const ACCEPTED_FORMATS: [&str; 4] = [
    START_TIME_FORMAT,
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShowForm {
    pub artist_id: String,
    pub venue_id: String,
    pub start_time: String,
}

impl ShowForm {
    pub fn from_data(data: &FormData) -> Self {
        Self {
            artist_id: data.text("artist_id"),
            venue_id: data.text("venue_id"),
            start_time: data.text("start_time"),
        }
    }

    /// Blank form with the start time defaulted to `now`.
    pub fn starting_at(now: &DateTime<Utc>) -> Self {
        Self {
            start_time: now.format(START_TIME_FORMAT).to_string(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<NewShow, FieldErrors> {
        let mut errors = FieldErrors::default();
        let artist_id = errors.check("artist_id", parse_id(&self.artist_id));
        let venue_id = errors.check("venue_id", parse_id(&self.venue_id));
        let start_time = errors.check("start_time", parse_start_time(&self.start_time));

        match (artist_id, venue_id, start_time) {
            (Some(artist_id), Some(venue_id), Some(start_time)) => Ok(NewShow {
                venue_id,
                artist_id,
                start_time,
            }),
            _ => Err(errors),
        }
    }
}

fn parse_id(value: &str) -> Result<i64, String> {
    let value = non_empty(value).ok_or_else(|| REQUIRED.to_string())?;
    match value.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(INVALID_ID.to_string()),
    }
}

/// Submitted times carry no zone and are taken as UTC.
pub fn parse_start_time(value: &str) -> Result<DateTime<Utc>, String> {
    let value = non_empty(value).ok_or_else(|| REQUIRED.to_string())?;
    ACCEPTED_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&value, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| INVALID_DATETIME.to_string())
}
