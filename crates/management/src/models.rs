//! Management domain types — campaigns, ad sets, ads, content, brands,
//! audiences, platform connections.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use uuid::Uuid;

use studio_core::types::{Objective, Platform};

// ─── Campaign ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub id: Uuid,
    pub name: String,
    pub objective: Objective,
    pub status: CampaignStatus,
    pub total_budget: Option<f64>,
    pub daily_budget: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub platforms: Vec<Platform>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    Draft,
    Review,
    Approved,
    Live,
    Paused,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdSet {
    pub id: Uuid,
    pub campaign_id: Uuid,
    pub name: String,
    pub status: CampaignStatus,
    pub platform: Platform,
    pub platform_id: Option<String>,
    pub daily_budget: Option<f64>,
    pub lifetime_budget: Option<f64>,
    pub bid_strategy: Option<String>,
    pub targeting: Option<Value>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ad {
    pub id: Uuid,
    pub ad_set_id: Uuid,
    pub name: String,
    pub status: CampaignStatus,
    pub headline: Option<String>,
    pub description: Option<String>,
    pub cta: Option<String>,
    pub url: Option<String>,
    pub platform_ad_id: Option<String>,
    pub review_status: Option<ReviewStatus>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdSetWithAds {
    #[serde(flatten)]
    pub ad_set: AdSet,
    pub ads: Vec<Ad>,
}

/// Full campaign view returned by the detail endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CampaignDetail {
    #[serde(flatten)]
    pub campaign: Campaign,
    pub ad_sets: Vec<AdSetWithAds>,
    pub ai_suggestions: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCampaignRequest {
    pub name: String,
    pub objective: Objective,
    #[serde(default)]
    pub total_budget: Option<f64>,
    #[serde(default)]
    pub daily_budget: Option<f64>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct UpdateCampaignRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub objective: Option<Objective>,
    #[serde(default)]
    pub total_budget: Option<f64>,
    #[serde(default)]
    pub daily_budget: Option<f64>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub platforms: Option<Vec<Platform>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CampaignPushResult {
    pub campaign_id: Uuid,
    pub status: String,
    pub platform_results: HashMap<String, Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CampaignSyncResult {
    pub campaign_id: Uuid,
    pub synced_platforms: HashMap<String, Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CampaignDuplicateResult {
    pub original_id: Uuid,
    pub new_id: Uuid,
    pub new_name: String,
}

// ─── Audience ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Audience {
    pub id: Uuid,
    pub name: String,
    pub kind: AudienceKind,
    pub platform: Platform,
    pub platform_audience_id: Option<String>,
    pub demographics: Option<Value>,
    pub interests: Option<Value>,
    pub behaviors: Option<Value>,
    pub size_estimate: Option<u64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AudienceKind {
    Saved,
    Custom,
    Lookalike,
}

// ─── Content ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub id: Uuid,
    pub content_type: ContentType,
    pub title: String,
    pub status: ContentStatus,
    pub platform: Option<Platform>,
    pub language: String,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub scheduled_date: Option<NaiveDate>,
    pub published_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    AdCopy,
    SocialPost,
    BlogArticle,
    Email,
    LandingPage,
    VideoScript,
    ProductDescription,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContentStatus {
    Draft,
    Review,
    Approved,
    Published,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandScoreBreakdown {
    pub tone: u8,
    pub vocabulary: u8,
    pub style: u8,
}

/// One generated copy variant, scored against the brand voice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentVariant {
    pub version: u32,
    pub headline: Option<String>,
    pub description: Option<String>,
    pub text: String,
    pub cta_text: Option<String>,
    pub brand_score: Option<u8>,
    pub brand_score_breakdown: Option<BrandScoreBreakdown>,
    pub character_count: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentRequest {
    pub content_type: ContentType,
    pub title: String,
    #[serde(default)]
    pub platform: Option<Platform>,
    #[serde(default)]
    pub brief: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentResponse {
    pub content_id: Uuid,
    pub variants: Vec<ContentVariant>,
    pub model_used: String,
    pub tokens_used: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentTemplate {
    pub id: Uuid,
    pub name: String,
    pub content_type: ContentType,
    pub industry: Option<String>,
    pub objective: Option<Objective>,
    pub prompt_structure: String,
    pub variable_fields: Option<Value>,
    pub example_output: Option<String>,
    pub is_public: bool,
    pub usage_count: u64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalendarItem {
    pub id: Uuid,
    pub title: String,
    pub content_type: ContentType,
    pub platform: Option<Platform>,
    pub status: ContentStatus,
    pub scheduled_date: NaiveDate,
}

// ─── Brand / platform connections / settings ───────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brand {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub voice_tone: Option<String>,
    pub voice_style: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub logo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformConnection {
    pub id: Uuid,
    pub platform: Platform,
    pub platform_account_id: Option<String>,
    pub account_name: Option<String>,
    pub status: ConnectionStatus,
    pub last_sync_at: Option<DateTime<Utc>>,
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    Active,
    Error,
    Disconnected,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrgSettings {
    pub name: String,
    pub billing_email: String,
    pub plan_tier: String,
}

// ─── Error payload ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
