use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{Genre, US_STATES};

pub const REQUIRED: &str = "This field is required.";
pub const INVALID_PHONE: &str = "Invalid phone number";
pub const INVALID_CHOICE: &str = "Not a valid choice";
pub const INVALID_GENRES: &str = "Wrong genres values";
pub const INVALID_URL: &str = "Invalid URL.";
pub const NOT_FACEBOOK: &str = "It must be a facebook link";

static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3}-[0-9]{3}-[0-9]{4}$").expect("phone pattern"));

// http(s)://host.tld[:port][/path][?query]
static URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^https?://(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z]{2,63}(?::[0-9]{1,5})?(?:[/?#]\S*)?$")
        .expect("url pattern")
});

pub fn required(value: &str) -> Result<String, String> {
    super::non_empty(value).ok_or_else(|| REQUIRED.to_string())
}

/// Accepts exactly `DDD-DDD-DDDD`.
pub fn phone(value: &str) -> Result<String, String> {
    let value = required(value)?;
    if PHONE.is_match(&value) {
        Ok(value)
    } else {
        Err(INVALID_PHONE.to_string())
    }
}

pub fn state(value: &str) -> Result<String, String> {
    let value = required(value)?;
    if US_STATES.contains(&value.as_str()) {
        Ok(value)
    } else {
        Err(INVALID_CHOICE.to_string())
    }
}

/// At least one genre, every one from the closed set.
pub fn genres(values: &[String]) -> Result<Vec<Genre>, String> {
    if values.iter().all(|v| v.trim().is_empty()) {
        return Err(REQUIRED.to_string());
    }
    let mut genres = Genre::parse_all(values).map_err(|_| INVALID_GENRES.to_string())?;
    // keep the first occurrence of each genre, in submitted order
    let mut seen = HashSet::new();
    genres.retain(|genre| seen.insert(*genre));
    Ok(genres)
}

pub fn url(value: &str) -> Result<String, String> {
    let value = required(value)?;
    if URL.is_match(&value) {
        Ok(value)
    } else {
        Err(INVALID_URL.to_string())
    }
}

/// Blank is accepted as absent; anything else must be a URL.
pub fn optional_url(value: &str) -> Result<Option<String>, String> {
    match super::non_empty(value) {
        Some(value) => url(&value).map(Some),
        None => Ok(None),
    }
}

pub fn facebook_link(value: &str) -> Result<String, String> {
    let value = url(value)?;
    if value.contains("fb") || value.contains("facebook") {
        Ok(value)
    } else {
        Err(NOT_FACEBOOK.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_trims() {
        assert_eq!(required("  Hop "), Ok("Hop".to_string()));
        assert_eq!(required("   "), Err(REQUIRED.to_string()));
    }

    #[test]
    fn test_phone_shape() {
        assert!(phone("500-500-5000").is_ok());
        assert!(phone(" 415-555-0199 ").is_ok());
        for bad in [
            "5005005000",
            "500-5000-500",
            "50-500-50000",
            "500-500-500a",
            "500-500-5000-",
            "(500) 500-5000",
            "500 500 5000",
            "",
        ] {
            assert!(phone(bad).is_err(), "{bad:?} should be rejected");
        }
        assert_eq!(phone("123"), Err(INVALID_PHONE.to_string()));
    }

    #[test]
    fn test_state_membership() {
        assert!(state("CA").is_ok());
        assert!(state("MI").is_ok());
        assert_eq!(state("ZZ"), Err(INVALID_CHOICE.to_string()));
        assert_eq!(state("ca"), Err(INVALID_CHOICE.to_string()));
    }

    #[test]
    fn test_genres_closed_set() {
        let ok = vec!["Jazz".to_string(), "R&B".to_string()];
        assert_eq!(genres(&ok), Ok(vec![Genre::Jazz, Genre::RhythmAndBlues]));

        let bad = vec!["Jazz".to_string(), "Polka".to_string()];
        assert_eq!(genres(&bad), Err(INVALID_GENRES.to_string()));

        assert_eq!(genres(&[]), Err(REQUIRED.to_string()));
    }

    #[test]
    fn test_genres_repeats_collapse() {
        let repeated: Vec<String> = ["Jazz", "Folk", "Jazz", "Folk", "Soul"]
            .iter()
            .map(|g| g.to_string())
            .collect();
        assert_eq!(
            genres(&repeated),
            Ok(vec![Genre::Jazz, Genre::Folk, Genre::Soul])
        );
    }

    #[test]
    fn test_url_shape() {
        assert!(url("https://www.themusicalhop.com").is_ok());
        assert!(url("http://example.org:8080/path?q=1").is_ok());
        assert!(url("not a url").is_err());
        assert!(url("https://localhost").is_err());
        assert!(url("www.example.com").is_err());
        assert!(url("ftp://files.example.com/a.png").is_err());
        assert_eq!(optional_url(""), Ok(None));
        assert_eq!(
            optional_url("https://img.example.com/a.png"),
            Ok(Some("https://img.example.com/a.png".to_string()))
        );
    }

    #[test]
    fn test_facebook_link() {
        assert!(facebook_link("https://www.facebook.com/TheMusicalHop").is_ok());
        assert!(facebook_link("https://fb.me/hop").is_ok());
        assert_eq!(
            facebook_link("https://twitter.com/hop"),
            Err(NOT_FACEBOOK.to_string())
        );
        assert_eq!(facebook_link("facebook"), Err(INVALID_URL.to_string()));
    }

    #[test]
    fn test_script_schemes_rejected() {
        assert_eq!(
            facebook_link("javascript://facebook.com/%0Aalert(document.cookie)"),
            Err(INVALID_URL.to_string())
        );
        assert_eq!(
            optional_url("javascript://example.com/%0Aalert(1)"),
            Err(INVALID_URL.to_string())
        );
        assert_eq!(
            optional_url("data://example.com/text/html,hi"),
            Err(INVALID_URL.to_string())
        );
        assert!(url("JAVASCRIPT://fb.com/x").is_err());
    }
}
