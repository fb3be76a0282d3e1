//! The church year: Easter, the season boundaries derived from it, and the
//! season of any given date.

mod anchors;
mod classify;
mod easter;
mod error;
mod season;
mod sunday;
mod util;

pub use self::anchors::YearAnchors;
pub use self::classify::classify;
pub use self::error::Error;
pub use self::season::{ordinal, LiturgicalColor, Season, SeasonDescriptor};
pub use self::sunday::nth_sunday;
