//! Top-performing videos and the products linked from them.

use serde::Serialize;
use serde_json::Value;

use super::SalePrice;
use crate::validate::{ObjectReader, Validate, ValidateOptions, ValidationFailure};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TopVideoData {
    pub comment_cnt: Option<i64>,
    pub item_id: Option<String>,
    pub like_cnt: Option<i64>,
    pub name: Option<String>,
    pub play_cnt: Option<i64>,
    pub release_date: Option<String>,
    pub video: Option<Video>,
    pub video_products: Option<Vec<VideoProduct>>,
}

impl Validate for TopVideoData {
    const EXPECTED: &'static str = "top video object";

    fn validate(raw: &Value, options: ValidateOptions) -> Result<Self, ValidationFailure> {
        let mut r = ObjectReader::new(raw, options)?;
        let data = Self {
            comment_cnt: r.optional("comment_cnt")?,
            item_id: r.optional("item_id")?,
            like_cnt: r.optional("like_cnt")?,
            name: r.optional("name")?,
            play_cnt: r.optional("play_cnt")?,
            release_date: r.optional("release_date")?,
            video: r.optional("video")?,
            video_products: r.optional("video_products")?,
        };
        r.finish()?;
        Ok(data)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Video {
    /// Seconds; fractional values are common.
    pub duration: Option<f64>,
    pub id: Option<String>,
    pub media_type: Option<String>,
    pub post_url: Option<String>,
    /// One entry per encode variant (quality/bitrate).
    pub video_infos: Option<Vec<VideoInfo>>,
}

impl Validate for Video {
    const EXPECTED: &'static str = "video object";

    fn validate(raw: &Value, options: ValidateOptions) -> Result<Self, ValidationFailure> {
        let mut r = ObjectReader::new(raw, options)?;
        let video = Self {
            duration: r.optional("duration")?,
            id: r.optional("id")?,
            media_type: r.optional("media_type")?,
            post_url: r.optional("post_url")?,
            video_infos: r.optional("video_infos")?,
        };
        r.finish()?;
        Ok(video)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VideoInfo {
    pub backup_url: Option<String>,
    pub bitrate: Option<i64>,
    pub file_hash: Option<String>,
    pub format: Option<String>,
    pub height: Option<i64>,
    pub main_url: Option<String>,
    pub size: Option<i64>,
    /// Unix seconds after which `main_url`/`backup_url` stop resolving.
    pub url_expire: Option<i64>,
    pub video_quality: Option<String>,
    pub width: Option<i64>,
}

impl Validate for VideoInfo {
    const EXPECTED: &'static str = "video encode object";

    fn validate(raw: &Value, options: ValidateOptions) -> Result<Self, ValidationFailure> {
        let mut r = ObjectReader::new(raw, options)?;
        let info = Self {
            backup_url: r.optional("backup_url")?,
            bitrate: r.optional("bitrate")?,
            file_hash: r.optional("file_hash")?,
            format: r.optional("format")?,
            height: r.optional("height")?,
            main_url: r.optional("main_url")?,
            size: r.optional("size")?,
            url_expire: r.optional("url_expire")?,
            video_quality: r.optional("video_quality")?,
            width: r.optional("width")?,
        };
        r.finish()?;
        Ok(info)
    }
}

/// A sellable product pinned to a video.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VideoProduct {
    pub image: Option<String>,
    pub max_sale_price: Option<SalePrice>,
    pub min_sale_price: Option<SalePrice>,
    pub name: Option<String>,
    pub product_id: Option<String>,
}

impl Validate for VideoProduct {
    const EXPECTED: &'static str = "video product object";

    fn validate(raw: &Value, options: ValidateOptions) -> Result<Self, ValidationFailure> {
        let mut r = ObjectReader::new(raw, options)?;
        let product = Self {
            image: r.optional("image")?,
            max_sale_price: r.optional("max_sale_price")?,
            min_sale_price: r.optional("min_sale_price")?,
            name: r.optional("name")?,
            product_id: r.optional("product_id")?,
        };
        r.finish()?;
        Ok(product)
    }
}
