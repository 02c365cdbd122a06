//! Persistence for venues, artists and shows.
//!
//! Handlers never see a concrete database: they receive an `Arc<dyn Store>`
//! through [`crate::AppState`]. Every write runs in its own unit of work and
//! is rolled back when it fails.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Artist, NewArtist, NewShow, NewVenue, Show, ShowListing, Venue};

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,

    #[error("show references a missing {0}")]
    MissingReference(&'static str),

    #[error("stored value could not be decoded: {0}")]
    Corrupt(String),

    #[error("database error")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait Store: Send + Sync {
    /// All venues ordered by `(city, state)`, ties broken by id.
    async fn list_venues(&self) -> StoreResult<Vec<Venue>>;

    /// Venues whose name contains `term`, ignoring case.
    async fn search_venues(&self, term: &str) -> StoreResult<Vec<Venue>>;

    async fn get_venue(&self, id: i64) -> StoreResult<Option<Venue>>;

    async fn create_venue(&self, venue: NewVenue) -> StoreResult<Venue>;

    /// Replaces every field of venue `id`. Fails with `NotFound` if absent.
    async fn update_venue(&self, id: i64, venue: NewVenue) -> StoreResult<Venue>;

    /// Removes venue `id` together with its shows.
    async fn delete_venue(&self, id: i64) -> StoreResult<()>;

    /// All artists ordered by id.
    async fn list_artists(&self) -> StoreResult<Vec<Artist>>;

    async fn search_artists(&self, term: &str) -> StoreResult<Vec<Artist>>;

    async fn get_artist(&self, id: i64) -> StoreResult<Option<Artist>>;

    async fn create_artist(&self, artist: NewArtist) -> StoreResult<Artist>;

    async fn update_artist(&self, id: i64, artist: NewArtist) -> StoreResult<Artist>;

    /// Every show with both sides joined in, ordered by start time.
    async fn list_shows(&self) -> StoreResult<Vec<ShowListing>>;

    async fn venue_shows(&self, venue_id: i64) -> StoreResult<Vec<ShowListing>>;

    async fn artist_shows(&self, artist_id: i64) -> StoreResult<Vec<ShowListing>>;

    /// Fails with `MissingReference` when the venue or artist does not exist.
    async fn create_show(&self, show: NewShow) -> StoreResult<Show>;
}
