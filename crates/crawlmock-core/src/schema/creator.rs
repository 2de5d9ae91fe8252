use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{CreatorProfile, CreatorProfileTrendData};
use crate::validate::{
    deserialize_validated, ObjectReader, Validate, ValidateOptions, ValidationFailure,
};

/// A crawled creator as posted to `POST /creators`.
///
/// `id`, `uniqueId` and `nickname` must be present as keys but may be `null`.
/// The camelCase `uniqueId` mirrors the upstream API and is kept verbatim on
/// the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreatorResult {
    pub id: Option<String>,
    #[serde(rename = "uniqueId")]
    pub unique_id: Option<String>,
    pub nickname: Option<String>,
    pub profiles: Option<Profiles>,
}

impl Validate for CreatorResult {
    const EXPECTED: &'static str = "creator result object";

    fn validate(raw: &Value, options: ValidateOptions) -> Result<Self, ValidationFailure> {
        let mut r = ObjectReader::new(raw, options)?;
        let creator = Self {
            id: r.nullable("id")?,
            unique_id: r.nullable("uniqueId")?,
            nickname: r.nullable("nickname")?,
            profiles: r.optional("profiles")?,
        };
        r.finish()?;
        Ok(creator)
    }
}

impl<'de> Deserialize<'de> for CreatorResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_validated(deserializer)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Profiles {
    pub creator_connect_info: Option<CreatorConnectInfo>,
    pub creator_profile: Option<CreatorProfile>,
    pub creator_profile_trend_data: Option<Vec<CreatorProfileTrendData>>,
}

impl Validate for Profiles {
    const EXPECTED: &'static str = "profiles object";

    fn validate(raw: &Value, options: ValidateOptions) -> Result<Self, ValidationFailure> {
        let mut r = ObjectReader::new(raw, options)?;
        let profiles = Self {
            creator_connect_info: r.optional("creator_connect_info")?,
            creator_profile: r.optional("creator_profile")?,
            creator_profile_trend_data: r.optional("creator_profile_trend_data")?,
        };
        r.finish()?;
        Ok(profiles)
    }
}

/// Cross-reference to the creator in the affiliate marketplace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreatorConnectInfo {
    pub creator_id: Option<String>,
}

impl Validate for CreatorConnectInfo {
    const EXPECTED: &'static str = "connect info object";

    fn validate(raw: &Value, options: ValidateOptions) -> Result<Self, ValidationFailure> {
        let mut r = ObjectReader::new(raw, options)?;
        let info = Self {
            creator_id: r.optional("creator_id")?,
        };
        r.finish()?;
        Ok(info)
    }
}

/// Element of the `GET /creator-ids` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatorId {
    pub id: String,
}

impl CreatorId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
