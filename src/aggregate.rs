//! Shapes raw store rows into what the pages display: venues grouped by
//! locality, search results, and shows split into past and upcoming.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

use crate::models::{Artist, ShowListing, Venue};

pub const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_start_time(start_time: &DateTime<Utc>) -> String {
    start_time.format(START_TIME_FORMAT).to_string()
}

/// Case-insensitive substring test used by name search.
pub fn name_matches(name: &str, term: &str) -> bool {
    name.to_lowercase().contains(&term.to_lowercase())
}

pub fn is_upcoming(start_time: &DateTime<Utc>, now: &DateTime<Utc>) -> bool {
    start_time >= now
}

/// Anything listed by id and name on the listing and search pages.
pub trait Listed {
    fn id(&self) -> i64;
    fn name(&self) -> &str;
}

impl Listed for Venue {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Listed for Artist {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListedItem {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocalityGroup {
    pub city: String,
    pub state: String,
    pub venues: Vec<ListedItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<ListedItem>,
}

/// Upcoming show totals keyed by venue or artist id.
#[derive(Debug, Default)]
pub struct UpcomingCounts(HashMap<i64, usize>);

impl UpcomingCounts {
    pub fn by_venue(shows: &[ShowListing], now: &DateTime<Utc>) -> Self {
        Self::tally(shows, now, |show| show.venue_id)
    }

    pub fn by_artist(shows: &[ShowListing], now: &DateTime<Utc>) -> Self {
        Self::tally(shows, now, |show| show.artist_id)
    }

    fn tally<F>(shows: &[ShowListing], now: &DateTime<Utc>, key: F) -> Self
    where
        F: Fn(&ShowListing) -> i64,
    {
        let mut counts = HashMap::new();
        for show in shows.iter().filter(|s| is_upcoming(&s.start_time, now)) {
            *counts.entry(key(show)).or_insert(0) += 1;
        }
        Self(counts)
    }

    pub fn get(&self, id: i64) -> usize {
        self.0.get(&id).copied().unwrap_or(0)
    }

    fn item<T: Listed>(&self, record: &T) -> ListedItem {
        ListedItem {
            id: record.id(),
            name: record.name().to_string(),
            num_upcoming_shows: self.get(record.id()),
        }
    }
}

/// Groups venues sharing a `(city, state)` pair in a single pass.
///
/// `venues` must already be ordered by `(city, state)`; equal localities are
/// only merged when they are adjacent.
pub fn group_by_locality(venues: &[Venue], counts: &UpcomingCounts) -> Vec<LocalityGroup> {
    let mut groups: Vec<LocalityGroup> = Vec::new();
    for venue in venues {
        match groups.last_mut() {
            Some(group) if group.city == venue.city && group.state == venue.state => {
                group.venues.push(counts.item(venue));
            }
            _ => groups.push(LocalityGroup {
                city: venue.city.clone(),
                state: venue.state.clone(),
                venues: vec![counts.item(venue)],
            }),
        }
    }
    groups
}

pub fn search_results<T: Listed>(records: &[T], counts: &UpcomingCounts) -> SearchResults {
    let data: Vec<ListedItem> = records.iter().map(|r| counts.item(r)).collect();
    SearchResults {
        count: data.len(),
        data,
    }
}

pub fn list_items<T: Listed>(records: &[T], counts: &UpcomingCounts) -> Vec<ListedItem> {
    records.iter().map(|r| counts.item(r)).collect()
}

/// Which side of a show the detail page is looking across to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counterpart {
    Artist,
    Venue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowSummary {
    pub id: i64,
    pub name: String,
    pub image_link: Option<String>,
    pub start_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PartitionedShows {
    pub past: Vec<ShowSummary>,
    pub upcoming: Vec<ShowSummary>,
}

fn summarize(show: &ShowListing, counterpart: Counterpart) -> ShowSummary {
    let (id, name, image_link) = match counterpart {
        Counterpart::Artist => (show.artist_id, &show.artist_name, &show.artist_image_link),
        Counterpart::Venue => (show.venue_id, &show.venue_name, &show.venue_image_link),
    };
    ShowSummary {
        id,
        name: name.clone(),
        image_link: image_link.clone(),
        start_time: format_start_time(&show.start_time),
    }
}

/// Splits shows on `now`: strictly earlier is past, everything else upcoming.
pub fn partition_shows(
    shows: &[ShowListing],
    now: &DateTime<Utc>,
    counterpart: Counterpart,
) -> PartitionedShows {
    let mut partitioned = PartitionedShows::default();
    for show in shows {
        let summary = summarize(show, counterpart);
        if is_upcoming(&show.start_time, now) {
            partitioned.upcoming.push(summary);
        } else {
            partitioned.past.push(summary);
        }
    }
    partitioned
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueDetail {
    #[serde(flatten)]
    pub venue: Venue,
    pub past_shows: Vec<ShowSummary>,
    pub upcoming_shows: Vec<ShowSummary>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl VenueDetail {
    pub fn assemble(venue: Venue, shows: &[ShowListing], now: &DateTime<Utc>) -> Self {
        let PartitionedShows { past, upcoming } =
            partition_shows(shows, now, Counterpart::Artist);
        Self {
            venue,
            past_shows_count: past.len(),
            upcoming_shows_count: upcoming.len(),
            past_shows: past,
            upcoming_shows: upcoming,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistDetail {
    #[serde(flatten)]
    pub artist: Artist,
    pub past_shows: Vec<ShowSummary>,
    pub upcoming_shows: Vec<ShowSummary>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl ArtistDetail {
    pub fn assemble(artist: Artist, shows: &[ShowListing], now: &DateTime<Utc>) -> Self {
        let PartitionedShows { past, upcoming } = partition_shows(shows, now, Counterpart::Venue);
        Self {
            artist,
            past_shows_count: past.len(),
            upcoming_shows_count: upcoming.len(),
            past_shows: past,
            upcoming_shows: upcoming,
        }
    }
}
