//! The creator data contract.
//!
//! Field names match the upstream payloads verbatim. Every struct here is
//! built by [`crate::validate::Validate`] from raw JSON and re-encodes with
//! `serde` to the same shape, absent fields becoming `null`.
//!
//! Only the top-level [`CreatorResult`] and [`CrawlError`] implement
//! `Deserialize`, and both route through the validator with default options.

mod crawl_error;
mod creator;
mod media;
mod profile;
mod shared;
mod trend;

pub use crawl_error::{CrawlError, CrawlErrorKind, CREATOR_HAS_NO_PROFILES, CREATOR_NOT_FOUND};
pub use creator::{CreatorConnectInfo, CreatorId, CreatorResult, Profiles};
pub use media::{TopVideoData, Video, VideoInfo, VideoProduct};
pub use profile::{Avatar, CreatorProfile, OccurredTopRank, PartneredBrand};
pub use shared::{Category, GpmRange, IndustryGroup, KeyValue, MetricValue, Numeric, SalePrice};
pub use trend::{CreatorProfileTrendData, TrendProfile, TrendStats};
