use super::{non_empty, validators, FieldErrors, FormData};
use crate::models::{Artist, Genre, NewArtist};

/// Raw fields of the artist listing form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub image_link: String,
    pub facebook_link: String,
    pub website: String,
    pub seeking_venue: bool,
    pub seeking_description: String,
}

impl ArtistForm {
    pub fn from_data(data: &FormData) -> Self {
        Self {
            name: data.text("name"),
            city: data.text("city"),
            state: data.text("state"),
            phone: data.text("phone"),
            genres: data.get_all("genres"),
            image_link: data.text("image_link"),
            facebook_link: data.text("facebook_link"),
            website: data.text("website"),
            seeking_venue: data.flag("seeking_venue"),
            seeking_description: data.text("seeking_description"),
        }
    }

    pub fn from_artist(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone(),
            genres: Genre::labels(&artist.genres),
            image_link: artist.image_link.clone().unwrap_or_default(),
            facebook_link: artist.facebook_link.clone(),
            website: artist.website.clone().unwrap_or_default(),
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<NewArtist, FieldErrors> {
        let mut errors = FieldErrors::default();
        let name = errors.check("name", validators::required(&self.name));
        let city = errors.check("city", validators::required(&self.city));
        let state = errors.check("state", validators::state(&self.state));
        let phone = errors.check("phone", validators::phone(&self.phone));
        let genres = errors.check("genres", validators::genres(&self.genres));
        let image_link = errors.check("image_link", validators::optional_url(&self.image_link));
        let facebook_link = errors.check(
            "facebook_link",
            validators::facebook_link(&self.facebook_link),
        );
        let website = errors.check("website", validators::optional_url(&self.website));

        match (name, city, state, phone, genres, image_link, facebook_link, website) {
            (
                Some(name),
                Some(city),
                Some(state),
                Some(phone),
                Some(genres),
                Some(image_link),
                Some(facebook_link),
                Some(website),
            ) => Ok(NewArtist {
                name,
                city,
                state,
                phone,
                genres,
                image_link,
                facebook_link,
                website,
                seeking_venue: self.seeking_venue,
                seeking_description: non_empty(&self.seeking_description),
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::validators::{INVALID_CHOICE, INVALID_GENRES, INVALID_URL, REQUIRED};

    fn data(pairs: &[(&str, &str)]) -> FormData {
        FormData::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_parses_submitted_fields() {
        let form = ArtistForm::from_data(&data(&[
            ("name", "Guns N Petals"),
            ("city", "San Francisco"),
            ("state", "CA"),
            ("phone", "326-123-5000"),
            ("genres", "Rock n Roll"),
            ("genres", "Punk"),
            ("facebook_link", "https://www.facebook.com/GunsNPetals"),
            ("seeking_venue", "y"),
            ("seeking_description", "Looking for shows in the Bay Area"),
        ]));

        let artist = form.validate().unwrap();
        assert_eq!(artist.genres, vec![Genre::RockNRoll, Genre::Punk]);
        assert!(artist.seeking_venue);
        assert_eq!(
            artist.seeking_description.as_deref(),
            Some("Looking for shows in the Bay Area")
        );
        assert_eq!(artist.website, None);
    }

    #[test]
    fn test_empty_submission_flags_required_fields() {
        let errors = ArtistForm::default().validate().unwrap_err();
        for field in ["name", "city", "state", "phone", "genres", "facebook_link"] {
            assert_eq!(errors.get(field), [REQUIRED.to_string()], "{field}");
        }
        assert!(errors.get("website").is_empty());
        assert!(errors.get("image_link").is_empty());
    }

    #[test]
    fn test_rejects_out_of_set_values() {
        let form = ArtistForm::from_data(&data(&[
            ("name", "Matt Quevado"),
            ("city", "New York"),
            ("state", "XX"),
            ("phone", "300-400-5000"),
            ("genres", "Jazz"),
            ("genres", "Dubstep"),
            ("facebook_link", "https://www.facebook.com/mattquevedo923251523"),
            ("website", "matt.example"),
        ]));
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("state"), [INVALID_CHOICE.to_string()]);
        assert_eq!(errors.get("genres"), [INVALID_GENRES.to_string()]);
        assert_eq!(errors.get("website"), [INVALID_URL.to_string()]);
        assert!(errors.get("phone").is_empty());
    }
}
