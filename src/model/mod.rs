//! Core domain models for the Audius API.
//!
//! Defines the primary entities: [`User`], [`Track`], [`Playlist`] and
//! [`Favourite`], plus the artwork records they carry.
//!
//! These are OUR types. Raw API responses live in [`crate::api::dto`] and are
//! converted here by [`crate::api::adapter`]; nothing else constructs them
//! from JSON.
//!
//! # Shape
//!
//! - [`Item`] is the shared shape of user-generated content and is composed
//!   into [`Track`] and [`Playlist`] rather than inherited
//! - Artwork fields are never optional: a missing image set is an
//!   [`Artwork::default()`] whose sizes are all `None`

mod artwork;
mod favourite;
mod genre;
mod item;
mod trending;
mod user;

pub use artwork::{Artwork, CoverPhoto};
pub use favourite::Favourite;
pub use genre::Genre;
pub use item::{Item, Playlist, RemixParent, Track, TrackElement};
pub use trending::TrendingTime;
pub use user::User;
