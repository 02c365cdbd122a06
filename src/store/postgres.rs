use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::FromRow;
use tracing::debug;

use super::{Store, StoreError, StoreResult};
use crate::models::{Artist, Genre, NewArtist, NewShow, NewVenue, Show, ShowListing, Venue};

const VENUE_COLUMNS: &str = "id, name, city, state, address, phone, genres, image_link, \
     facebook_link, website, seeking_talent, seeking_description";

const ARTIST_COLUMNS: &str = "id, name, city, state, phone, genres, image_link, \
     facebook_link, website, seeking_venue, seeking_description";

const SHOW_LISTING_SELECT: &str = "SELECT s.id, s.venue_id, v.name AS venue_name, \
     v.image_link AS venue_image_link, s.artist_id, a.name AS artist_name, \
     a.image_link AS artist_image_link, s.start_time \
     FROM shows s \
     JOIN venues v ON v.id = s.venue_id \
     JOIN artists a ON a.id = s.artist_id";

#[derive(FromRow)]
struct VenueRow {
    id: i64,
    name: String,
    city: String,
    state: String,
    address: String,
    phone: String,
    genres: Vec<String>,
    image_link: Option<String>,
    facebook_link: String,
    website: Option<String>,
    seeking_talent: bool,
    seeking_description: Option<String>,
}

impl TryFrom<VenueRow> for Venue {
    type Error = StoreError;

    fn try_from(row: VenueRow) -> Result<Self, Self::Error> {
        Ok(Venue {
            id: row.id,
            name: row.name,
            city: row.city,
            state: row.state,
            address: row.address,
            phone: row.phone,
            genres: decode_genres(&row.genres)?,
            image_link: row.image_link,
            facebook_link: row.facebook_link,
            website: row.website,
            seeking_talent: row.seeking_talent,
            seeking_description: row.seeking_description,
        })
    }
}

#[derive(FromRow)]
struct ArtistRow {
    id: i64,
    name: String,
    city: String,
    state: String,
    phone: String,
    genres: Vec<String>,
    image_link: Option<String>,
    facebook_link: String,
    website: Option<String>,
    seeking_venue: bool,
    seeking_description: Option<String>,
}

impl TryFrom<ArtistRow> for Artist {
    type Error = StoreError;

    fn try_from(row: ArtistRow) -> Result<Self, Self::Error> {
        Ok(Artist {
            id: row.id,
            name: row.name,
            city: row.city,
            state: row.state,
            phone: row.phone,
            genres: decode_genres(&row.genres)?,
            image_link: row.image_link,
            facebook_link: row.facebook_link,
            website: row.website,
            seeking_venue: row.seeking_venue,
            seeking_description: row.seeking_description,
        })
    }
}

fn decode_genres(raw: &[String]) -> StoreResult<Vec<Genre>> {
    Genre::parse_all(raw).map_err(|e| StoreError::Corrupt(e.to_string()))
}

fn decode_all<R, T>(rows: Vec<R>) -> StoreResult<Vec<T>>
where
    T: TryFrom<R, Error = StoreError>,
{
    rows.into_iter().map(T::try_from).collect()
}

/// Maps a foreign key violation on `shows` to the side that is missing.
fn classify_show_insert_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_foreign_key_violation() {
            let side = match db_err.constraint() {
                Some(name) if name.contains("artist") => "artist",
                _ => "venue",
            };
            return StoreError::MissingReference(side);
        }
    }
    StoreError::Database(err)
}

/// PostgreSQL-backed store. Schema lives in `migrations/`.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str, max_connections: u32) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!().run(&self.pool).await
    }

    async fn fetch_show_listings(
        &self,
        filter: &str,
        id: Option<i64>,
    ) -> StoreResult<Vec<ShowListing>> {
        let sql = format!("{SHOW_LISTING_SELECT} {filter} ORDER BY s.start_time, s.id");
        let mut query = sqlx::query_as::<_, ShowListing>(&sql);
        if let Some(id) = id {
            query = query.bind(id);
        }
        Ok(query.fetch_all(&self.pool).await?)
    }
}

#[async_trait]
impl Store for PgStore {
    async fn list_venues(&self) -> StoreResult<Vec<Venue>> {
        let sql = format!("SELECT {VENUE_COLUMNS} FROM venues ORDER BY city, state, id");
        let rows: Vec<VenueRow> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        decode_all(rows)
    }

    async fn search_venues(&self, term: &str) -> StoreResult<Vec<Venue>> {
        let sql = format!(
            "SELECT {VENUE_COLUMNS} FROM venues \
             WHERE strpos(lower(name), lower($1)) > 0 ORDER BY id"
        );
        let rows: Vec<VenueRow> = sqlx::query_as(&sql)
            .bind(term)
            .fetch_all(&self.pool)
            .await?;
        decode_all(rows)
    }

    async fn get_venue(&self, id: i64) -> StoreResult<Option<Venue>> {
        let sql = format!("SELECT {VENUE_COLUMNS} FROM venues WHERE id = $1");
        let row: Option<VenueRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(Venue::try_from).transpose()
    }

    async fn create_venue(&self, venue: NewVenue) -> StoreResult<Venue> {
        let sql = format!(
            "INSERT INTO venues (name, city, state, address, phone, genres, image_link, \
             facebook_link, website, seeking_talent, seeking_description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {VENUE_COLUMNS}"
        );
        let mut tx = self.pool.begin().await?;
        let row: VenueRow = sqlx::query_as(&sql)
            .bind(&venue.name)
            .bind(&venue.city)
            .bind(&venue.state)
            .bind(&venue.address)
            .bind(&venue.phone)
            .bind(Genre::labels(&venue.genres))
            .bind(&venue.image_link)
            .bind(&venue.facebook_link)
            .bind(&venue.website)
            .bind(venue.seeking_talent)
            .bind(&venue.seeking_description)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        debug!(venue_id = row.id, "Inserted venue");
        Venue::try_from(row)
    }

    async fn update_venue(&self, id: i64, venue: NewVenue) -> StoreResult<Venue> {
        let sql = format!(
            "UPDATE venues SET name = $1, city = $2, state = $3, address = $4, phone = $5, \
             genres = $6, image_link = $7, facebook_link = $8, website = $9, \
             seeking_talent = $10, seeking_description = $11 \
             WHERE id = $12 RETURNING {VENUE_COLUMNS}"
        );
        let mut tx = self.pool.begin().await?;
        let row: Option<VenueRow> = sqlx::query_as(&sql)
            .bind(&venue.name)
            .bind(&venue.city)
            .bind(&venue.state)
            .bind(&venue.address)
            .bind(&venue.phone)
            .bind(Genre::labels(&venue.genres))
            .bind(&venue.image_link)
            .bind(&venue.facebook_link)
            .bind(&venue.website)
            .bind(venue.seeking_talent)
            .bind(&venue.seeking_description)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        let row = row.ok_or(StoreError::NotFound)?;
        tx.commit().await?;
        Venue::try_from(row)
    }

    async fn delete_venue(&self, id: i64) -> StoreResult<()> {
        let mut tx = self.pool.begin().await?;
        // shows go with it through ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        tx.commit().await?;
        Ok(())
    }

    async fn list_artists(&self) -> StoreResult<Vec<Artist>> {
        let sql = format!("SELECT {ARTIST_COLUMNS} FROM artists ORDER BY id");
        let rows: Vec<ArtistRow> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        decode_all(rows)
    }

    async fn search_artists(&self, term: &str) -> StoreResult<Vec<Artist>> {
        let sql = format!(
            "SELECT {ARTIST_COLUMNS} FROM artists \
             WHERE strpos(lower(name), lower($1)) > 0 ORDER BY id"
        );
        let rows: Vec<ArtistRow> = sqlx::query_as(&sql)
            .bind(term)
            .fetch_all(&self.pool)
            .await?;
        decode_all(rows)
    }

    async fn get_artist(&self, id: i64) -> StoreResult<Option<Artist>> {
        let sql = format!("SELECT {ARTIST_COLUMNS} FROM artists WHERE id = $1");
        let row: Option<ArtistRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(Artist::try_from).transpose()
    }

    async fn create_artist(&self, artist: NewArtist) -> StoreResult<Artist> {
        let sql = format!(
            "INSERT INTO artists (name, city, state, phone, genres, image_link, \
             facebook_link, website, seeking_venue, seeking_description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {ARTIST_COLUMNS}"
        );
        let mut tx = self.pool.begin().await?;
        let row: ArtistRow = sqlx::query_as(&sql)
            .bind(&artist.name)
            .bind(&artist.city)
            .bind(&artist.state)
            .bind(&artist.phone)
            .bind(Genre::labels(&artist.genres))
            .bind(&artist.image_link)
            .bind(&artist.facebook_link)
            .bind(&artist.website)
            .bind(artist.seeking_venue)
            .bind(&artist.seeking_description)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        debug!(artist_id = row.id, "Inserted artist");
        Artist::try_from(row)
    }

    async fn update_artist(&self, id: i64, artist: NewArtist) -> StoreResult<Artist> {
        let sql = format!(
            "UPDATE artists SET name = $1, city = $2, state = $3, phone = $4, genres = $5, \
             image_link = $6, facebook_link = $7, website = $8, seeking_venue = $9, \
             seeking_description = $10 \
             WHERE id = $11 RETURNING {ARTIST_COLUMNS}"
        );
        let mut tx = self.pool.begin().await?;
        let row: Option<ArtistRow> = sqlx::query_as(&sql)
            .bind(&artist.name)
            .bind(&artist.city)
            .bind(&artist.state)
            .bind(&artist.phone)
            .bind(Genre::labels(&artist.genres))
            .bind(&artist.image_link)
            .bind(&artist.facebook_link)
            .bind(&artist.website)
            .bind(artist.seeking_venue)
            .bind(&artist.seeking_description)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        let row = row.ok_or(StoreError::NotFound)?;
        tx.commit().await?;
        Artist::try_from(row)
    }

    async fn list_shows(&self) -> StoreResult<Vec<ShowListing>> {
        self.fetch_show_listings("", None).await
    }

    async fn venue_shows(&self, venue_id: i64) -> StoreResult<Vec<ShowListing>> {
        self.fetch_show_listings("WHERE s.venue_id = $1", Some(venue_id))
            .await
    }

    async fn artist_shows(&self, artist_id: i64) -> StoreResult<Vec<ShowListing>> {
        self.fetch_show_listings("WHERE s.artist_id = $1", Some(artist_id))
            .await
    }

    async fn create_show(&self, show: NewShow) -> StoreResult<Show> {
        let mut tx = self.pool.begin().await?;
        let created: Show = sqlx::query_as(
            "INSERT INTO shows (venue_id, artist_id, start_time) VALUES ($1, $2, $3) \
             RETURNING id, venue_id, artist_id, start_time",
        )
        .bind(show.venue_id)
        .bind(show.artist_id)
        .bind(show.start_time)
        .fetch_one(&mut *tx)
        .await
        .map_err(classify_show_insert_error)?;
        tx.commit().await?;
        debug!(show_id = created.id, "Inserted show");
        Ok(created)
    }
}
