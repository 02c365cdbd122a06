use super::{non_empty, validators, FieldErrors, FormData};
use crate::models::{Genre, NewVenue, Venue};

/// Raw fields of the venue listing form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VenueForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub image_link: String,
    pub facebook_link: String,
    pub website: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

impl VenueForm {
    pub fn from_data(data: &FormData) -> Self {
        Self {
            name: data.text("name"),
            city: data.text("city"),
            state: data.text("state"),
            address: data.text("address"),
            phone: data.text("phone"),
            genres: data.get_all("genres"),
            image_link: data.text("image_link"),
            facebook_link: data.text("facebook_link"),
            website: data.text("website"),
            seeking_talent: data.flag("seeking_talent"),
            seeking_description: data.text("seeking_description"),
        }
    }

    /// Pre-populates the edit form from a stored venue.
    pub fn from_venue(venue: &Venue) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone(),
            genres: Genre::labels(&venue.genres),
            image_link: venue.image_link.clone().unwrap_or_default(),
            facebook_link: venue.facebook_link.clone(),
            website: venue.website.clone().unwrap_or_default(),
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<NewVenue, FieldErrors> {
        let mut errors = FieldErrors::default();
        let name = errors.check("name", validators::required(&self.name));
        let city = errors.check("city", validators::required(&self.city));
        let state = errors.check("state", validators::state(&self.state));
        let address = errors.check("address", validators::required(&self.address));
        let phone = errors.check("phone", validators::phone(&self.phone));
        let genres = errors.check("genres", validators::genres(&self.genres));
        let image_link = errors.check("image_link", validators::optional_url(&self.image_link));
        let facebook_link = errors.check(
            "facebook_link",
            validators::facebook_link(&self.facebook_link),
        );
        let website = errors.check("website", validators::optional_url(&self.website));

        match (
            name,
            city,
            state,
            address,
            phone,
            genres,
            image_link,
            facebook_link,
            website,
        ) {
            (
                Some(name),
                Some(city),
                Some(state),
                Some(address),
                Some(phone),
                Some(genres),
                Some(image_link),
                Some(facebook_link),
                Some(website),
            ) => Ok(NewVenue {
                name,
                city,
                state,
                address,
                phone,
                genres,
                image_link,
                facebook_link,
                website,
                seeking_talent: self.seeking_talent,
                seeking_description: non_empty(&self.seeking_description),
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::validators::{INVALID_PHONE, NOT_FACEBOOK, REQUIRED};

    fn valid() -> VenueForm {
        VenueForm {
            name: "The Musical Hop".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "1015 Folsom Street".to_string(),
            phone: "123-123-1234".to_string(),
            genres: vec!["Jazz".to_string(), "Reggae".to_string()],
            image_link: String::new(),
            facebook_link: "https://www.facebook.com/TheMusicalHop".to_string(),
            website: "https://www.themusicalhop.com".to_string(),
            seeking_talent: true,
            seeking_description: "  ".to_string(),
        }
    }

    #[test]
    fn test_valid_form_builds_record() {
        let venue = valid().validate().unwrap();
        assert_eq!(venue.name, "The Musical Hop");
        assert_eq!(venue.genres, vec![Genre::Jazz, Genre::Reggae]);
        assert_eq!(venue.image_link, None);
        assert_eq!(venue.website.as_deref(), Some("https://www.themusicalhop.com"));
        assert!(venue.seeking_talent);
        assert_eq!(venue.seeking_description, None);
    }

    #[test]
    fn test_errors_reported_per_field() {
        let form = VenueForm {
            address: String::new(),
            phone: "1231231234".to_string(),
            facebook_link: "https://twitter.com/hop".to_string(),
            ..valid()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("address"), [REQUIRED.to_string()]);
        assert_eq!(errors.get("phone"), [INVALID_PHONE.to_string()]);
        assert_eq!(errors.get("facebook_link"), [NOT_FACEBOOK.to_string()]);
        assert!(errors.get("name").is_empty());
    }

    #[test]
    fn test_round_trips_through_stored_venue() {
        let venue = valid().validate().unwrap().into_venue(7);
        let form = VenueForm::from_venue(&venue);
        assert_eq!(form.validate().unwrap().into_venue(7), venue);
    }
}
