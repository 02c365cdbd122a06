pub mod artist;
pub mod genre;
pub mod show;
pub mod venue;

pub use artist::{Artist, NewArtist};
pub use genre::{Genre, UnknownGenre, US_STATES};
pub use show::{NewShow, Show, ShowListing};
pub use venue::{NewVenue, Venue};
