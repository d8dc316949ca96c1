//! Analytics report types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

use studio_core::types::Platform;

/// Aggregate performance metrics over a reporting period.
#[derive(Debug, Clone, Serialize)]
pub struct MetricSummary {
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub spend: f64,
    pub revenue: f64,
    pub ctr: f64,
    pub cpc: f64,
    pub cpm: f64,
    pub cpa: f64,
    pub roas: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DailyTrendPoint {
    pub date: NaiveDate,
    pub impressions: u64,
    pub clicks: u64,
    pub spend: f64,
    pub conversions: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsOverview {
    pub summary: MetricSummary,
    pub by_platform: HashMap<Platform, MetricSummary>,
    pub daily_trend: Vec<DailyTrendPoint>,
    pub top_campaigns: Vec<TopCampaignRow>,
}

/// Percentage change of each headline metric vs the previous period.
#[derive(Debug, Clone, Serialize)]
pub struct MetricChanges {
    pub impressions: f64,
    pub clicks: f64,
    pub conversions: f64,
    pub spend: f64,
    pub revenue: f64,
    pub ctr: f64,
    pub roas: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub current: MetricSummary,
    pub previous: MetricSummary,
    pub changes: MetricChanges,
    pub by_platform_current: HashMap<Platform, MetricSummary>,
    pub by_platform_previous: HashMap<Platform, MetricSummary>,
    pub daily_current: Vec<DailyTrendPoint>,
    pub daily_previous: Vec<DailyTrendPoint>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopCampaignRow {
    pub campaign_id: Uuid,
    pub campaign_name: String,
    pub status: String,
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub spend: f64,
    pub revenue: f64,
    pub roas: f64,
    pub ctr: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopCampaignsReport {
    pub campaigns: Vec<TopCampaignRow>,
    pub total_campaigns: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdSetBreakdown {
    pub ad_set_name: String,
    pub platform: Platform,
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub spend: f64,
    pub revenue: f64,
    pub ctr: f64,
    pub roas: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CampaignAnalytics {
    pub campaign_id: Uuid,
    pub campaign_name: String,
    pub summary: MetricSummary,
    pub by_platform: HashMap<Platform, MetricSummary>,
    pub daily_trend: Vec<DailyTrendPoint>,
    pub ad_set_breakdown: Vec<AdSetBreakdown>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Trend,
    Anomaly,
    Recommendation,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InsightSeverity {
    Info,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub severity: InsightSeverity,
    pub title: String,
    pub description: String,
    pub metric: String,
    pub value: Option<f64>,
    pub suggestion: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InsightsReport {
    pub insights: Vec<Insight>,
    pub generated_at: DateTime<Utc>,
    pub period: String,
}
