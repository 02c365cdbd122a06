use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::{Store, StoreError, StoreResult};
use crate::aggregate::name_matches;
use crate::models::{Artist, NewArtist, NewShow, NewVenue, Show, ShowListing, Venue};

#[derive(Default)]
struct Tables {
    venues: BTreeMap<i64, Venue>,
    artists: BTreeMap<i64, Artist>,
    shows: BTreeMap<i64, Show>,
    last_venue_id: i64,
    last_artist_id: i64,
    last_show_id: i64,
}

impl Tables {
    fn listing(&self, show: &Show) -> Option<ShowListing> {
        let venue = self.venues.get(&show.venue_id)?;
        let artist = self.artists.get(&show.artist_id)?;
        Some(ShowListing {
            id: show.id,
            venue_id: venue.id,
            venue_name: venue.name.clone(),
            venue_image_link: venue.image_link.clone(),
            artist_id: artist.id,
            artist_name: artist.name.clone(),
            artist_image_link: artist.image_link.clone(),
            start_time: show.start_time,
        })
    }

    fn listings<F>(&self, keep: F) -> Vec<ShowListing>
    where
        F: Fn(&Show) -> bool,
    {
        let mut listings: Vec<ShowListing> = self
            .shows
            .values()
            .filter(|show| keep(show))
            .filter_map(|show| self.listing(show))
            .collect();
        listings.sort_by(|a, b| a.start_time.cmp(&b.start_time).then(a.id.cmp(&b.id)));
        listings
    }
}

/// In-process store with the same observable behaviour as [`super::PgStore`]:
/// sequential ids starting at 1, venue deletion cascading to shows, and
/// foreign key checks on show inserts.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn list_venues(&self) -> StoreResult<Vec<Venue>> {
        let tables = self.tables.read().await;
        let mut venues: Vec<Venue> = tables.venues.values().cloned().collect();
        venues.sort_by(|a, b| {
            (&a.city, &a.state, a.id).cmp(&(&b.city, &b.state, b.id))
        });
        Ok(venues)
    }

    async fn search_venues(&self, term: &str) -> StoreResult<Vec<Venue>> {
        let tables = self.tables.read().await;
        Ok(tables
            .venues
            .values()
            .filter(|v| name_matches(&v.name, term))
            .cloned()
            .collect())
    }

    async fn get_venue(&self, id: i64) -> StoreResult<Option<Venue>> {
        Ok(self.tables.read().await.venues.get(&id).cloned())
    }

    async fn create_venue(&self, venue: NewVenue) -> StoreResult<Venue> {
        let mut tables = self.tables.write().await;
        tables.last_venue_id += 1;
        let venue = venue.into_venue(tables.last_venue_id);
        tables.venues.insert(venue.id, venue.clone());
        Ok(venue)
    }

    async fn update_venue(&self, id: i64, venue: NewVenue) -> StoreResult<Venue> {
        let mut tables = self.tables.write().await;
        let slot = tables.venues.get_mut(&id).ok_or(StoreError::NotFound)?;
        *slot = venue.into_venue(id);
        Ok(slot.clone())
    }

    async fn delete_venue(&self, id: i64) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        tables.venues.remove(&id).ok_or(StoreError::NotFound)?;
        tables.shows.retain(|_, show| show.venue_id != id);
        Ok(())
    }

    async fn list_artists(&self) -> StoreResult<Vec<Artist>> {
        Ok(self.tables.read().await.artists.values().cloned().collect())
    }

    async fn search_artists(&self, term: &str) -> StoreResult<Vec<Artist>> {
        let tables = self.tables.read().await;
        Ok(tables
            .artists
            .values()
            .filter(|a| name_matches(&a.name, term))
            .cloned()
            .collect())
    }

    async fn get_artist(&self, id: i64) -> StoreResult<Option<Artist>> {
        Ok(self.tables.read().await.artists.get(&id).cloned())
    }

    async fn create_artist(&self, artist: NewArtist) -> StoreResult<Artist> {
        let mut tables = self.tables.write().await;
        tables.last_artist_id += 1;
        let artist = artist.into_artist(tables.last_artist_id);
        tables.artists.insert(artist.id, artist.clone());
        Ok(artist)
    }

    async fn update_artist(&self, id: i64, artist: NewArtist) -> StoreResult<Artist> {
        let mut tables = self.tables.write().await;
        let slot = tables.artists.get_mut(&id).ok_or(StoreError::NotFound)?;
        *slot = artist.into_artist(id);
        Ok(slot.clone())
    }

    async fn list_shows(&self) -> StoreResult<Vec<ShowListing>> {
        Ok(self.tables.read().await.listings(|_| true))
    }

    async fn venue_shows(&self, venue_id: i64) -> StoreResult<Vec<ShowListing>> {
        Ok(self
            .tables
            .read()
            .await
            .listings(|show| show.venue_id == venue_id))
    }

    async fn artist_shows(&self, artist_id: i64) -> StoreResult<Vec<ShowListing>> {
        Ok(self
            .tables
            .read()
            .await
            .listings(|show| show.artist_id == artist_id))
    }

    async fn create_show(&self, show: NewShow) -> StoreResult<Show> {
        let mut tables = self.tables.write().await;
        if !tables.venues.contains_key(&show.venue_id) {
            return Err(StoreError::MissingReference("venue"));
        }
        if !tables.artists.contains_key(&show.artist_id) {
            return Err(StoreError::MissingReference("artist"));
        }
        tables.last_show_id += 1;
        let show = Show {
            id: tables.last_show_id,
            venue_id: show.venue_id,
            artist_id: show.artist_id,
            start_time: show.start_time,
        };
        tables.shows.insert(show.id, show.clone());
        Ok(show)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Genre;
    use chrono::{TimeZone, Utc};

    fn venue(name: &str, city: &str, state: &str) -> NewVenue {
        NewVenue {
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            address: "1 Main St".to_string(),
            phone: "123-456-7890".to_string(),
            genres: vec![Genre::Jazz],
            image_link: None,
            facebook_link: "https://www.facebook.com/venue".to_string(),
            website: None,
            seeking_talent: false,
            seeking_description: None,
        }
    }

    fn artist(name: &str) -> NewArtist {
        NewArtist {
            name: name.to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: "326-123-5000".to_string(),
            genres: vec![Genre::RockNRoll],
            image_link: Some("https://images.example.com/a.jpg".to_string()),
            facebook_link: "https://www.facebook.com/artist".to_string(),
            website: None,
            seeking_venue: true,
            seeking_description: Some("Looking for shows".to_string()),
        }
    }

    #[tokio::test]
    async fn test_venues_listed_by_locality() {
        let store = MemoryStore::new();
        store.create_venue(venue("B", "San Francisco", "CA")).await.unwrap();
        store.create_venue(venue("A", "New York", "NY")).await.unwrap();
        store.create_venue(venue("C", "San Francisco", "CA")).await.unwrap();

        let names: Vec<String> = store
            .list_venues()
            .await
            .unwrap()
            .into_iter()
            .map(|v| v.name)
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_update_missing_venue_is_not_found() {
        let store = MemoryStore::new();
        let result = store.update_venue(42, venue("X", "Austin", "TX")).await;
        assert!(matches!(result, Err(StoreError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_venue_cascades_to_shows() {
        let store = MemoryStore::new();
        let v = store.create_venue(venue("Hop", "Austin", "TX")).await.unwrap();
        let a = store.create_artist(artist("Guns N Petals")).await.unwrap();
        store
            .create_show(NewShow {
                venue_id: v.id,
                artist_id: a.id,
                start_time: Utc.with_ymd_and_hms(2030, 5, 21, 21, 30, 0).unwrap(),
            })
            .await
            .unwrap();

        store.delete_venue(v.id).await.unwrap();

        assert!(store.get_venue(v.id).await.unwrap().is_none());
        assert!(store.list_shows().await.unwrap().is_empty());
        assert!(store.artist_shows(a.id).await.unwrap().is_empty());
        assert!(matches!(
            store.delete_venue(v.id).await,
            Err(StoreError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_show_requires_existing_references() {
        let store = MemoryStore::new();
        let a = store.create_artist(artist("Matt Quevado")).await.unwrap();
        let result = store
            .create_show(NewShow {
                venue_id: 99,
                artist_id: a.id,
                start_time: Utc::now(),
            })
            .await;
        assert!(matches!(result, Err(StoreError::MissingReference("venue"))));
        assert!(store.list_shows().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_shows_joined_and_ordered_by_start() {
        let store = MemoryStore::new();
        let v = store.create_venue(venue("Hop", "Austin", "TX")).await.unwrap();
        let a = store.create_artist(artist("The Wild Sax Band")).await.unwrap();
        let later = Utc.with_ymd_and_hms(2035, 4, 1, 20, 0, 0).unwrap();
        let earlier = Utc.with_ymd_and_hms(2019, 6, 15, 23, 0, 0).unwrap();
        for start_time in [later, earlier] {
            store
                .create_show(NewShow {
                    venue_id: v.id,
                    artist_id: a.id,
                    start_time,
                })
                .await
                .unwrap();
        }

        let shows = store.venue_shows(v.id).await.unwrap();
        assert_eq!(shows.len(), 2);
        assert_eq!(shows[0].start_time, earlier);
        assert_eq!(shows[0].artist_name, "The Wild Sax Band");
        assert_eq!(
            shows[0].artist_image_link.as_deref(),
            Some("https://images.example.com/a.jpg")
        );
        assert_eq!(shows[1].venue_name, "Hop");
    }
}
