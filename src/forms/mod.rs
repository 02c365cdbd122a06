//! Submitted form parsing and field validation.
//!
//! Each form keeps the raw submitted strings so a failed submission can be
//! re-rendered as typed, and `validate` turns it into the typed record the
//! store accepts or a set of per-field errors.

use std::collections::BTreeMap;

pub mod artist;
pub mod show;
pub mod validators;
pub mod venue;

pub use artist::ArtistForm;
pub use show::ShowForm;
pub use venue::VenueForm;

/// Urlencoded form body with repeated keys preserved (multi-selects).
#[derive(Debug, Clone, Default)]
pub struct FormData {
    fields: Vec<(String, String)>,
}

impl FormData {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    /// First value submitted under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn get_all(&self, name: &str) -> Vec<String> {
        self.fields
            .iter()
            .filter(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
            .collect()
    }

    pub fn text(&self, name: &str) -> String {
        self.get(name).unwrap_or_default().to_string()
    }

    /// Checkbox semantics: absent means false.
    pub fn flag(&self, name: &str) -> bool {
        matches!(
            self.get(name).map(|v| v.trim().to_ascii_lowercase()).as_deref(),
            Some("y" | "yes" | "on" | "true" | "1")
        )
    }
}

/// Validation messages keyed by field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<&'static str, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    /// Records the outcome of one validator, passing the value through.
    pub fn check<T>(&mut self, field: &'static str, result: Result<T, String>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(message) => {
                self.add(field, message);
                None
            }
        }
    }
}

pub(crate) fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(pairs: &[(&str, &str)]) -> FormData {
        FormData::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_repeated_keys_are_kept() {
        let form = data(&[("genres", "Jazz"), ("name", "Hop"), ("genres", "Folk")]);
        assert_eq!(form.get_all("genres"), vec!["Jazz", "Folk"]);
        assert_eq!(form.get("genres"), Some("Jazz"));
        assert_eq!(form.text("missing"), "");
    }

    #[test]
    fn test_flag_values() {
        assert!(data(&[("seeking", "y")]).flag("seeking"));
        assert!(data(&[("seeking", "on")]).flag("seeking"));
        assert!(!data(&[("seeking", "no")]).flag("seeking"));
        assert!(!data(&[]).flag("seeking"));
    }

    #[test]
    fn test_field_errors_accumulate() {
        let mut errors = FieldErrors::default();
        assert!(errors.is_empty());
        assert_eq!(errors.check("phone", Ok::<_, String>(1)), Some(1));
        assert_eq!(errors.check::<()>("phone", Err("bad".into())), None);
        errors.add("phone", "worse");
        assert_eq!(errors.get("phone"), ["bad".to_string(), "worse".to_string()]);
        assert!(errors.get("name").is_empty());
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["phone"]);
    }
}
