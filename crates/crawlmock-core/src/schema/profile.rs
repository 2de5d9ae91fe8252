use serde::Serialize;
use serde_json::{Map, Value};

use super::{Category, GpmRange, IndustryGroup, KeyValue, MetricValue, Numeric, TopVideoData};
use crate::validate::{ObjectReader, Validate, ValidateOptions, ValidationFailure};

/// The analytics and metadata bundle for one creator.
///
/// Every attribute is independently optional. Counts the upstream API renders
/// for display (e.g. `"1.2K"`) stay strings; only fields the API sends as JSON
/// numbers are typed as numbers. Cross-field consistency is not enforced:
/// `has_collaborated == Some(false)` alongside a non-zero
/// `collaborated_brands_num` is accepted as sent.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreatorProfile {
    pub avatar: Option<Avatar>,
    pub avg_revenue_per_buyer: Option<MetricValue>,
    pub avg_revenue_per_buyer_range: Option<String>,
    pub bio: Option<String>,
    pub bio_url: Option<String>,
    pub bounded_partner_name_offline: Option<String>,
    pub category: Option<Vec<Category>>,
    pub collaborated_brands_num: Option<i64>,
    pub contact_info_available: Option<bool>,
    pub content_groups: Option<Vec<KeyValue>>,
    pub creator_bind_mcn_name: Option<String>,
    pub creator_oecuid: Option<String>,
    pub creator_permission_tag: Option<i64>,
    pub ec_live_avg_comment_cnt: Option<String>,
    pub ec_live_engagement: Option<i64>,
    pub ec_live_gpm: Option<GpmRange>,
    pub ec_live_gpm_reference: Option<bool>,
    pub ec_live_med_comment_cnt: Option<String>,
    pub ec_live_med_like_cnt: Option<String>,
    pub ec_live_med_share_cnt: Option<String>,
    pub ec_live_med_view_cnt: Option<String>,
    pub ec_live_streaming_cnt_30d: Option<String>,
    pub ec_top_video_data: Option<Vec<TopVideoData>>,
    pub ec_video_engagement: Option<i64>,
    pub ec_video_gpm: Option<GpmRange>,
    pub ec_video_gpm_reference: Option<bool>,
    pub ec_video_med_comment_cnt: Option<String>,
    pub ec_video_med_like_cnt: Option<String>,
    pub ec_video_med_share_cnt: Option<String>,
    pub ec_video_med_view_cnt: Option<String>,
    pub ec_video_play_cnt_med: Option<String>,
    pub ec_video_publish_cnt_30d: Option<String>,
    pub follower_ages_v2: Option<Vec<KeyValue>>,
    pub follower_cnt: Option<String>,
    pub follower_genders_v2: Option<Vec<KeyValue>>,
    pub follower_state_location: Option<Vec<KeyValue>>,
    pub gpm: Option<MetricValue>,
    pub gpm_range: Option<String>,
    pub gpm_reference: Option<bool>,
    pub handle: Option<String>,
    pub has_collaborated: Option<bool>,
    pub has_invited_before_90d: Option<bool>,
    pub industry_groups: Option<Vec<IndustryGroup>>,
    pub is_creator_blocked_by_shop: Option<bool>,
    pub is_ecom_authorized: Option<bool>,
    pub is_official_recommend: Option<bool>,
    pub is_show_recom_icon: Option<bool>,
    pub live_engagement: Option<i64>,
    pub live_gmv: Option<MetricValue>,
    pub live_med_comment_cnt: Option<String>,
    pub live_med_like_cnt: Option<String>,
    pub live_med_share_cnt: Option<String>,
    pub live_med_view_cnt: Option<String>,
    pub live_streaming_cnt_30d: Option<String>,
    pub med_commission_rate: Option<i64>,
    pub med_commission_rate_range: Option<String>,
    pub med_gmv_revenue: Option<MetricValue>,
    pub med_gmv_revenue_range: Option<String>,
    pub nickname: Option<String>,
    pub occurred_top_rank: Option<OccurredTopRank>,
    pub partnered_brand: Option<PartneredBrand>,
    pub product_cnt: Option<i64>,
    pub product_price_range: Option<String>,
    pub promoted_product_num: Option<String>,
    pub qr_code_schema: Option<String>,
    pub recommend_reason: Option<String>,
    pub sales_performance_end_time: Option<i64>,
    /// Sent as `1` on some profiles and `0.97` on others.
    pub sample_fulfillment_rate: Option<Numeric>,
    pub selection_region: Option<String>,
    pub shop_collect_status: Option<bool>,
    /// Element shape is undocumented upstream; carried through unvalidated.
    pub sorted_creator_labels: Option<Vec<Value>>,
    pub top_video_data: Option<Vec<TopVideoData>>,
    pub units_sold: Option<String>,
    pub units_sold_range: Option<String>,
    pub video_avg_view_cnt: Option<i64>,
    pub video_engagement: Option<i64>,
    pub video_gmv: Option<MetricValue>,
    pub video_med_comment_cnt: Option<String>,
    pub video_med_like_cnt: Option<String>,
    pub video_med_share_cnt: Option<String>,
    pub video_med_view_cnt: Option<String>,
    pub video_play_cnt_med: Option<String>,
    pub video_publish_cnt_30d: Option<String>,
}

impl Validate for CreatorProfile {
    const EXPECTED: &'static str = "creator profile object";

    fn validate(raw: &Value, options: ValidateOptions) -> Result<Self, ValidationFailure> {
        let mut r = ObjectReader::new(raw, options)?;
        let profile = Self {
            avatar: r.optional("avatar")?,
            avg_revenue_per_buyer: r.optional("avg_revenue_per_buyer")?,
            avg_revenue_per_buyer_range: r.optional("avg_revenue_per_buyer_range")?,
            bio: r.optional("bio")?,
            bio_url: r.optional("bio_url")?,
            bounded_partner_name_offline: r.optional("bounded_partner_name_offline")?,
            category: r.optional("category")?,
            collaborated_brands_num: r.optional("collaborated_brands_num")?,
            contact_info_available: r.optional("contact_info_available")?,
            content_groups: r.optional("content_groups")?,
            creator_bind_mcn_name: r.optional("creator_bind_mcn_name")?,
            creator_oecuid: r.optional("creator_oecuid")?,
            creator_permission_tag: r.optional("creator_permission_tag")?,
            ec_live_avg_comment_cnt: r.optional("ec_live_avg_comment_cnt")?,
            ec_live_engagement: r.optional("ec_live_engagement")?,
            ec_live_gpm: r.optional("ec_live_gpm")?,
            ec_live_gpm_reference: r.optional("ec_live_gpm_reference")?,
            ec_live_med_comment_cnt: r.optional("ec_live_med_comment_cnt")?,
            ec_live_med_like_cnt: r.optional("ec_live_med_like_cnt")?,
            ec_live_med_share_cnt: r.optional("ec_live_med_share_cnt")?,
            ec_live_med_view_cnt: r.optional("ec_live_med_view_cnt")?,
            ec_live_streaming_cnt_30d: r.optional("ec_live_streaming_cnt_30d")?,
            ec_top_video_data: r.optional("ec_top_video_data")?,
            ec_video_engagement: r.optional("ec_video_engagement")?,
            ec_video_gpm: r.optional("ec_video_gpm")?,
            ec_video_gpm_reference: r.optional("ec_video_gpm_reference")?,
            ec_video_med_comment_cnt: r.optional("ec_video_med_comment_cnt")?,
            ec_video_med_like_cnt: r.optional("ec_video_med_like_cnt")?,
            ec_video_med_share_cnt: r.optional("ec_video_med_share_cnt")?,
            ec_video_med_view_cnt: r.optional("ec_video_med_view_cnt")?,
            ec_video_play_cnt_med: r.optional("ec_video_play_cnt_med")?,
            ec_video_publish_cnt_30d: r.optional("ec_video_publish_cnt_30d")?,
            follower_ages_v2: r.optional("follower_ages_v2")?,
            follower_cnt: r.optional("follower_cnt")?,
            follower_genders_v2: r.optional("follower_genders_v2")?,
            follower_state_location: r.optional("follower_state_location")?,
            gpm: r.optional("gpm")?,
            gpm_range: r.optional("gpm_range")?,
            gpm_reference: r.optional("gpm_reference")?,
            handle: r.optional("handle")?,
            has_collaborated: r.optional("has_collaborated")?,
            has_invited_before_90d: r.optional("has_invited_before_90d")?,
            industry_groups: r.optional("industry_groups")?,
            is_creator_blocked_by_shop: r.optional("is_creator_blocked_by_shop")?,
            is_ecom_authorized: r.optional("is_ecom_authorized")?,
            is_official_recommend: r.optional("is_official_recommend")?,
            is_show_recom_icon: r.optional("is_show_recom_icon")?,
            live_engagement: r.optional("live_engagement")?,
            live_gmv: r.optional("live_gmv")?,
            live_med_comment_cnt: r.optional("live_med_comment_cnt")?,
            live_med_like_cnt: r.optional("live_med_like_cnt")?,
            live_med_share_cnt: r.optional("live_med_share_cnt")?,
            live_med_view_cnt: r.optional("live_med_view_cnt")?,
            live_streaming_cnt_30d: r.optional("live_streaming_cnt_30d")?,
            med_commission_rate: r.optional("med_commission_rate")?,
            med_commission_rate_range: r.optional("med_commission_rate_range")?,
            med_gmv_revenue: r.optional("med_gmv_revenue")?,
            med_gmv_revenue_range: r.optional("med_gmv_revenue_range")?,
            nickname: r.optional("nickname")?,
            occurred_top_rank: r.optional("occurred_top_rank")?,
            partnered_brand: r.optional("partnered_brand")?,
            product_cnt: r.optional("product_cnt")?,
            product_price_range: r.optional("product_price_range")?,
            promoted_product_num: r.optional("promoted_product_num")?,
            qr_code_schema: r.optional("qr_code_schema")?,
            recommend_reason: r.optional("recommend_reason")?,
            sales_performance_end_time: r.optional("sales_performance_end_time")?,
            sample_fulfillment_rate: r.optional("sample_fulfillment_rate")?,
            selection_region: r.optional("selection_region")?,
            shop_collect_status: r.optional("shop_collect_status")?,
            sorted_creator_labels: r.optional("sorted_creator_labels")?,
            top_video_data: r.optional("top_video_data")?,
            units_sold: r.optional("units_sold")?,
            units_sold_range: r.optional("units_sold_range")?,
            video_avg_view_cnt: r.optional("video_avg_view_cnt")?,
            video_engagement: r.optional("video_engagement")?,
            video_gmv: r.optional("video_gmv")?,
            video_med_comment_cnt: r.optional("video_med_comment_cnt")?,
            video_med_like_cnt: r.optional("video_med_like_cnt")?,
            video_med_share_cnt: r.optional("video_med_share_cnt")?,
            video_med_view_cnt: r.optional("video_med_view_cnt")?,
            video_play_cnt_med: r.optional("video_play_cnt_med")?,
            video_publish_cnt_30d: r.optional("video_publish_cnt_30d")?,
        };
        r.finish()?;
        Ok(profile)
    }
}

/// Avatar image URLs; each list holds CDN mirrors of the same image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Avatar {
    pub thumb_url_list: Option<Vec<String>>,
    pub url_list: Option<Vec<String>>,
}

impl Validate for Avatar {
    const EXPECTED: &'static str = "avatar object";

    fn validate(raw: &Value, options: ValidateOptions) -> Result<Self, ValidationFailure> {
        let mut r = ObjectReader::new(raw, options)?;
        let avatar = Self {
            thumb_url_list: r.optional("thumb_url_list")?,
            url_list: r.optional("url_list")?,
        };
        r.finish()?;
        Ok(avatar)
    }
}

/// Best leaderboard placement the creator has reached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OccurredTopRank {
    pub rank_type: Option<i64>,
    pub rank_period: Option<i64>,
    pub rank_content_type: Option<i64>,
    pub rank_date: Option<String>,
    pub rank_position: Option<i64>,
    pub indus_cate: Option<String>,
}

impl Validate for OccurredTopRank {
    const EXPECTED: &'static str = "top rank object";

    fn validate(raw: &Value, options: ValidateOptions) -> Result<Self, ValidationFailure> {
        let mut r = ObjectReader::new(raw, options)?;
        let rank = Self {
            rank_type: r.optional("rank_type")?,
            rank_period: r.optional("rank_period")?,
            rank_content_type: r.optional("rank_content_type")?,
            rank_date: r.optional("rank_date")?,
            rank_position: r.optional("rank_position")?,
            indus_cate: r.optional("indus_cate")?,
        };
        r.finish()?;
        Ok(rank)
    }
}

/// Brands the creator has worked with. Entries are objects of unspecified shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PartneredBrand {
    pub brand: Option<Vec<Map<String, Value>>>,
    pub value: Option<Vec<Map<String, Value>>>,
}

impl Validate for PartneredBrand {
    const EXPECTED: &'static str = "partnered brand object";

    fn validate(raw: &Value, options: ValidateOptions) -> Result<Self, ValidationFailure> {
        let mut r = ObjectReader::new(raw, options)?;
        let partnered = Self {
            brand: r.optional("brand")?,
            value: r.optional("value")?,
        };
        r.finish()?;
        Ok(partnered)
    }
}
