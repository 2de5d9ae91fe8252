use serde::Serialize;
use serde_json::Value;

use super::MetricValue;
use crate::validate::{ObjectReader, Validate, ValidateOptions, ValidationFailure};

/// One trend series as returned by the profile-trend endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreatorProfileTrendData {
    pub stats: Option<Vec<TrendStats>>,
}

impl Validate for CreatorProfileTrendData {
    const EXPECTED: &'static str = "trend data object";

    fn validate(raw: &Value, options: ValidateOptions) -> Result<Self, ValidationFailure> {
        let mut r = ObjectReader::new(raw, options)?;
        let trend = Self {
            stats: r.optional("stats")?,
        };
        r.finish()?;
        Ok(trend)
    }
}

/// Snapshot for the window `[start_timestamp, end_timestamp]` (unix seconds).
///
/// Windows are not checked for ordering or overlap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TrendStats {
    pub start_timestamp: Option<i64>,
    pub end_timestamp: Option<i64>,
    pub profile: Option<TrendProfile>,
}

impl Validate for TrendStats {
    const EXPECTED: &'static str = "trend stats object";

    fn validate(raw: &Value, options: ValidateOptions) -> Result<Self, ValidationFailure> {
        let mut r = ObjectReader::new(raw, options)?;
        let stats = Self {
            start_timestamp: r.optional("start_timestamp")?,
            end_timestamp: r.optional("end_timestamp")?,
            profile: r.optional("profile")?,
        };
        r.finish()?;
        Ok(stats)
    }
}

/// Metric deltas for a single trend window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TrendProfile {
    pub trend_ec_video_engagement_rate: Option<i64>,
    pub trend_ec_video_play_cnt: Option<String>,
    pub trend_follower: Option<String>,
    pub trend_gmv: Option<MetricValue>,
    pub trend_units_sold: Option<String>,
    pub trend_video_engagement_rate: Option<i64>,
    pub trend_video_play_cnt: Option<String>,
}

impl Validate for TrendProfile {
    const EXPECTED: &'static str = "trend profile object";

    fn validate(raw: &Value, options: ValidateOptions) -> Result<Self, ValidationFailure> {
        let mut r = ObjectReader::new(raw, options)?;
        let profile = Self {
            trend_ec_video_engagement_rate: r.optional("trend_ec_video_engagement_rate")?,
            trend_ec_video_play_cnt: r.optional("trend_ec_video_play_cnt")?,
            trend_follower: r.optional("trend_follower")?,
            trend_gmv: r.optional("trend_gmv")?,
            trend_units_sold: r.optional("trend_units_sold")?,
            trend_video_engagement_rate: r.optional("trend_video_engagement_rate")?,
            trend_video_play_cnt: r.optional("trend_video_play_cnt")?,
        };
        r.finish()?;
        Ok(profile)
    }
}
