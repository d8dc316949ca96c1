//! Synthetic analytics generator.
//!
//! A daily trend is seeded once at startup (weekends dip, weekdays vary)
//! and every report derives from it, so dashboards stay consistent
//! across reads while still looking alive.

use chrono::{Datelike, Duration, Utc, Weekday};
use rand::Rng;
use std::collections::HashMap;
use tracing::info;
use uuid::Uuid;

use studio_core::config::AnalyticsConfig;
use studio_core::types::Platform;

use crate::models::*;

const WEEKEND_FACTOR: f64 = 0.75;

/// Share of (impressions, clicks, conversions, spend, revenue) each
/// platform contributes, plus its fixed rate-card metrics.
const PLATFORM_SPLITS: &[(Platform, [f64; 5], [f64; 4])] = &[
    (Platform::Meta, [0.48, 0.44, 0.42, 0.45, 0.44], [2.7, 0.52, 6.1, 18.50]),
    (Platform::Google, [0.38, 0.42, 0.44, 0.40, 0.46], [3.3, 0.61, 7.2, 16.80]),
    (Platform::Tiktok, [0.10, 0.09, 0.08, 0.10, 0.06], [1.8, 0.38, 4.5, 22.40]),
    (Platform::Linkedin, [0.04, 0.05, 0.06, 0.05, 0.04], [1.5, 2.10, 14.8, 32.00]),
];

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn safe_div(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        0.0
    } else {
        a / b
    }
}

pub struct AnalyticsService {
    config: AnalyticsConfig,
    trend: Vec<DailyTrendPoint>,
    summary: MetricSummary,
    by_platform: HashMap<Platform, MetricSummary>,
    top_campaigns: Vec<TopCampaignRow>,
}

impl AnalyticsService {
    pub fn new(config: AnalyticsConfig) -> Self {
        let trend = generate_trend(config.trend_days);
        let summary = summarize(&trend, config.avg_order_value);
        let by_platform = split_by_platform(&summary);
        let top_campaigns = canned_top_campaigns();
        info!(
            days = config.trend_days,
            impressions = summary.impressions,
            "Analytics service seeded"
        );
        Self {
            config,
            trend,
            summary,
            by_platform,
            top_campaigns,
        }
    }

    pub fn overview(&self) -> AnalyticsOverview {
        AnalyticsOverview {
            summary: self.summary.clone(),
            by_platform: self.by_platform.clone(),
            daily_trend: self.trend.clone(),
            top_campaigns: Vec::new(),
        }
    }

    /// Current period vs the preceding period of the same length.
    pub fn compare(&self) -> ComparisonReport {
        let daily_previous = generate_trend(self.config.trend_days);
        let previous = MetricSummary {
            impressions: (self.summary.impressions as f64 * 0.82).round() as u64,
            clicks: (self.summary.clicks as f64 * 0.88).round() as u64,
            conversions: (self.summary.conversions as f64 * 0.76).round() as u64,
            spend: round2(self.summary.spend * 0.91),
            revenue: (self.summary.revenue * 0.72).round(),
            ctr: 2.4,
            cpc: 0.58,
            cpm: 6.2,
            cpa: 19.8,
            roas: 2.8,
        };
        let changes = MetricChanges {
            impressions: pct_change(previous.impressions as f64, self.summary.impressions as f64),
            clicks: pct_change(previous.clicks as f64, self.summary.clicks as f64),
            conversions: pct_change(previous.conversions as f64, self.summary.conversions as f64),
            spend: pct_change(previous.spend, self.summary.spend),
            revenue: pct_change(previous.revenue, self.summary.revenue),
            ctr: pct_change(previous.ctr, self.summary.ctr),
            roas: pct_change(previous.roas, self.summary.roas),
        };
        ComparisonReport {
            current: self.summary.clone(),
            previous,
            changes,
            by_platform_current: self.by_platform.clone(),
            by_platform_previous: self.by_platform.clone(),
            daily_current: self.trend.clone(),
            daily_previous,
        }
    }

    pub fn top_campaigns(&self) -> TopCampaignsReport {
        TopCampaignsReport {
            campaigns: self.top_campaigns.clone(),
            total_campaigns: self.top_campaigns.len(),
        }
    }

    /// Per-campaign report. Unknown campaigns borrow the profile of the
    /// best-known campaign so the dashboard always renders.
    pub fn campaign_analytics(&self, campaign_id: Uuid, campaign_name: &str) -> CampaignAnalytics {
        let row = self
            .top_campaigns
            .iter()
            .find(|r| r.campaign_name == campaign_name)
            .unwrap_or(&self.top_campaigns[0]);

        let summary = MetricSummary {
            impressions: row.impressions,
            clicks: row.clicks,
            conversions: row.conversions,
            spend: row.spend,
            revenue: row.revenue,
            ctr: row.ctr,
            cpc: round2(safe_div(row.spend, row.clicks as f64)),
            cpm: round2(safe_div(row.spend, row.impressions as f64) * 1000.0),
            cpa: round2(safe_div(row.spend, row.conversions as f64)),
            roas: row.roas,
        };

        let by_platform: HashMap<Platform, MetricSummary> = self
            .by_platform
            .iter()
            .filter(|(p, _)| matches!(p, Platform::Meta | Platform::Google))
            .map(|(p, m)| (*p, m.clone()))
            .collect();

        let breakdown_splits: &[(&str, Platform, [f64; 5], f64, f64)] = &[
            ("UK — Outdoor Enthusiasts 25-54", Platform::Meta, [0.45, 0.42, 0.40, 0.45, 0.42], 2.8, 3.6),
            ("UK — Google Shopping & Search", Platform::Google, [0.38, 0.40, 0.42, 0.38, 0.44], 3.4, 4.2),
            ("TikTok — Young Hikers 18-35", Platform::Tiktok, [0.17, 0.18, 0.18, 0.17, 0.14], 1.9, 2.3),
        ];
        let ad_set_breakdown = breakdown_splits
            .iter()
            .map(|(name, platform, s, ctr, roas)| AdSetBreakdown {
                ad_set_name: name.to_string(),
                platform: *platform,
                impressions: (row.impressions as f64 * s[0]).round() as u64,
                clicks: (row.clicks as f64 * s[1]).round() as u64,
                conversions: (row.conversions as f64 * s[2]).round() as u64,
                spend: (row.spend * s[3]).round(),
                revenue: (row.revenue * s[4]).round(),
                ctr: *ctr,
                roas: *roas,
            })
            .collect();

        CampaignAnalytics {
            campaign_id,
            campaign_name: row.campaign_name.clone(),
            summary,
            by_platform,
            daily_trend: self.trend.iter().take(14).cloned().collect(),
            ad_set_breakdown,
        }
    }

    pub fn insights(&self) -> InsightsReport {
        let today = Utc::now().date_naive();
        let start = today - Duration::days(self.config.trend_days as i64);
        InsightsReport {
            insights: canned_insights(),
            generated_at: Utc::now(),
            period: format!("{start} to {today}"),
        }
    }

    /// Renders the daily trend as CSV, one row per day per platform.
    pub fn export_csv(&self) -> String {
        let mut csv =
            String::from("date,platform,impressions,clicks,spend,conversions,revenue\n");
        for point in &self.trend {
            for (platform, shares, _) in PLATFORM_SPLITS {
                let conversions = (point.conversions as f64 * shares[2]).round();
                let revenue = (conversions * self.config.avg_order_value * shares[4] / shares[2])
                    .round();
                csv.push_str(&format!(
                    "{},{},{},{},{:.2},{},{}\n",
                    point.date,
                    format!("{platform:?}").to_lowercase(),
                    (point.impressions as f64 * shares[0]).round() as u64,
                    (point.clicks as f64 * shares[1]).round() as u64,
                    point.spend * shares[3],
                    conversions as u64,
                    revenue as u64,
                ));
            }
        }
        csv
    }
}

fn pct_change(previous: f64, current: f64) -> f64 {
    round1(safe_div(current - previous, previous) * 100.0)
}

fn generate_trend(days: u32) -> Vec<DailyTrendPoint> {
    let mut rng = rand::thread_rng();
    let today = Utc::now().date_naive();
    let mut trend = Vec::with_capacity(days as usize + 1);
    for i in (0..=days as i64).rev() {
        let date = today - Duration::days(i);
        let base = 2800.0 + rng.gen::<f64>() * 800.0;
        let weekend = matches!(date.weekday(), Weekday::Sat | Weekday::Sun);
        let factor = if weekend { WEEKEND_FACTOR } else { 1.0 };
        let impressions = ((base * 55.0 + rng.gen::<f64>() * 15_000.0) * factor).round() as u64;
        let clicks = (impressions as f64 * (0.025 + rng.gen::<f64>() * 0.012)).round() as u64;
        let spend = round2((base * 1.1 + rng.gen::<f64>() * 300.0) * factor);
        let conversions = (clicks as f64 * (0.035 + rng.gen::<f64>() * 0.02)).round() as u64;
        trend.push(DailyTrendPoint {
            date,
            impressions,
            clicks,
            spend,
            conversions,
        });
    }
    trend
}

fn summarize(trend: &[DailyTrendPoint], avg_order_value: f64) -> MetricSummary {
    let impressions: u64 = trend.iter().map(|d| d.impressions).sum();
    let clicks: u64 = trend.iter().map(|d| d.clicks).sum();
    let conversions: u64 = trend.iter().map(|d| d.conversions).sum();
    let spend: f64 = round2(trend.iter().map(|d| d.spend).sum());
    let revenue = conversions as f64 * avg_order_value;
    MetricSummary {
        impressions,
        clicks,
        conversions,
        spend,
        revenue,
        ctr: round2(safe_div(clicks as f64, impressions as f64) * 100.0),
        cpc: round2(safe_div(spend, clicks as f64)),
        cpm: round2(safe_div(spend, impressions as f64) * 1000.0),
        cpa: round2(safe_div(spend, conversions as f64)),
        roas: round1(safe_div(revenue, spend)),
    }
}

fn split_by_platform(total: &MetricSummary) -> HashMap<Platform, MetricSummary> {
    PLATFORM_SPLITS
        .iter()
        .map(|(platform, shares, rates)| {
            let [imp, clk, conv, spend, rev] = shares;
            let [ctr, cpc, cpm, cpa] = rates;
            (
                *platform,
                MetricSummary {
                    impressions: (total.impressions as f64 * imp).round() as u64,
                    clicks: (total.clicks as f64 * clk).round() as u64,
                    conversions: (total.conversions as f64 * conv).round() as u64,
                    spend: round2(total.spend * spend),
                    revenue: (total.revenue * rev).round(),
                    ctr: *ctr,
                    cpc: *cpc,
                    cpm: *cpm,
                    cpa: *cpa,
                    roas: round1(safe_div(total.revenue * rev, total.spend * spend)),
                },
            )
        })
        .collect()
}

fn canned_top_campaigns() -> Vec<TopCampaignRow> {
    let rows: &[(&str, &str, u64, u64, u64, f64, f64, f64, f64)] = &[
        ("Spring/Summer 2026 — New Season Drop", "live", 1_850_000, 55_500, 2_442, 27_000.0, 207_570.0, 7.7, 3.0),
        ("Hillwalker Gore-Tex — UK & Ireland Push", "live", 1_420_000, 42_600, 1_704, 30_800.0, 144_840.0, 4.7, 3.0),
        ("Retargeting — Cart Abandoners & Browsers", "live", 320_000, 16_000, 1_280, 8_400.0, 108_800.0, 13.0, 5.0),
        ("Trango Heritage Collection — Brand Campaign", "live", 980_000, 19_600, 392, 12_600.0, 33_320.0, 2.6, 2.0),
        ("Winter Clearance Sale — Up to 50% Off", "completed", 2_850_000, 85_500, 4_275, 52_000.0, 363_375.0, 7.0, 3.0),
        ("Wandermoor Wind Smock — Product Launch", "paused", 540_000, 18_900, 567, 12_500.0, 48_195.0, 3.9, 3.5),
    ];
    rows.iter()
        .map(
            |(name, status, impressions, clicks, conversions, spend, revenue, roas, ctr)| {
                TopCampaignRow {
                    campaign_id: Uuid::new_v4(),
                    campaign_name: name.to_string(),
                    status: status.to_string(),
                    impressions: *impressions,
                    clicks: *clicks,
                    conversions: *conversions,
                    spend: *spend,
                    revenue: *revenue,
                    roas: *roas,
                    ctr: *ctr,
                }
            },
        )
        .collect()
}

fn canned_insights() -> Vec<Insight> {
    let rows: &[(InsightKind, InsightSeverity, &str, &str, &str, Option<f64>, &str)] = &[
        (
            InsightKind::Trend,
            InsightSeverity::Info,
            "Retargeting delivers highest ROAS",
            "Cart abandoner retargeting campaign is returning 13.0x ROAS, by far the \
             best-performing campaign. Consider increasing daily budget from £400 to £600.",
            "roas",
            Some(13.0),
            "Scale retargeting budget by 50% and add browse-abandoner segment for similar performance.",
        ),
        (
            InsightKind::Anomaly,
            InsightSeverity::Warning,
            "TikTok CPA trending upward",
            "TikTok cost per acquisition has risen 18% over the past 7 days (£18.90 to £22.40). \
             The Hillwalker rain test video is seeing fatigue after 28 days.",
            "cpa",
            Some(18.0),
            "Refresh TikTok creative with new UGC-style content. Consider a Lake District POV \
             hike video to re-engage the 18-35 audience.",
        ),
        (
            InsightKind::Recommendation,
            InsightSeverity::Info,
            "Shift budget from LinkedIn to Google",
            "Google delivers 3.8x ROAS vs LinkedIn at 1.2x. The Trango heritage story works \
             better as a search/shopping campaign than a B2B awareness play.",
            "roas",
            None,
            "Reduce LinkedIn spend by 40% and redirect to Google Shopping for the Trango collection.",
        ),
        (
            InsightKind::Trend,
            InsightSeverity::Info,
            "Hillwalker 2.0 outselling classic model",
            "The Hillwalker 2.0 Gemini 3-in-1 variant accounts for 62% of Hillwalker campaign \
             conversions despite being a higher price point (£240 vs £190).",
            "conversions",
            Some(62.0),
            "Feature the Hillwalker 2.0 Gemini more prominently in creative. The 3-in-1 value \
             proposition resonates strongly.",
        ),
        (
            InsightKind::Anomaly,
            InsightSeverity::Warning,
            "Weekend conversion rate drop in Scotland",
            "Scotland geo-segment shows 35% lower conversion rate on weekends despite stable \
             traffic. Likely due to customers being outdoors rather than shopping.",
            "conversions",
            Some(-35.0),
            "Implement dayparting for Scottish audience: reduce weekend bids by 30%, boost \
             Monday-Tuesday bids by 15% to capture post-weekend purchase intent.",
        ),
    ];
    rows.iter()
        .map(|(kind, severity, title, description, metric, value, suggestion)| Insight {
            kind: *kind,
            severity: *severity,
            title: title.to_string(),
            description: description.to_string(),
            metric: metric.to_string(),
            value: *value,
            suggestion: suggestion.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AnalyticsService {
        AnalyticsService::new(AnalyticsConfig {
            trend_days: 30,
            avg_order_value: 85.0,
        })
    }

    #[test]
    fn overview_totals_match_the_trend() {
        let svc = service();
        let overview = svc.overview();
        assert_eq!(overview.daily_trend.len(), 31);
        let impressions: u64 = overview.daily_trend.iter().map(|d| d.impressions).sum();
        assert_eq!(overview.summary.impressions, impressions);
        let conversions: u64 = overview.daily_trend.iter().map(|d| d.conversions).sum();
        assert_eq!(overview.summary.revenue, conversions as f64 * 85.0);
        assert_eq!(overview.by_platform.len(), 4);
    }

    #[test]
    fn repeated_reads_are_consistent() {
        let svc = service();
        let a = svc.overview();
        let b = svc.overview();
        assert_eq!(a.summary.impressions, b.summary.impressions);
        assert_eq!(a.summary.spend, b.summary.spend);
    }

    #[test]
    fn comparison_changes_are_derived_from_both_periods() {
        let svc = service();
        let report = svc.compare();
        assert!(report.current.impressions > report.previous.impressions);
        assert!(report.changes.impressions > 0.0);
        assert_eq!(report.daily_previous.len(), report.daily_current.len());
    }

    #[test]
    fn top_campaigns_report_is_stable() {
        let svc = service();
        let report = svc.top_campaigns();
        assert_eq!(report.total_campaigns, 6);
        let best = report
            .campaigns
            .iter()
            .max_by(|a, b| a.roas.total_cmp(&b.roas))
            .unwrap();
        assert!(best.campaign_name.starts_with("Retargeting"));
        assert_eq!(best.roas, 13.0);
    }

    #[test]
    fn campaign_analytics_falls_back_for_unknown_names() {
        let svc = service();
        let id = Uuid::new_v4();
        let report = svc.campaign_analytics(id, "No Such Campaign");
        assert_eq!(report.campaign_id, id);
        assert_eq!(report.campaign_name, "Spring/Summer 2026 — New Season Drop");
        assert_eq!(report.ad_set_breakdown.len(), 3);
        assert_eq!(report.daily_trend.len(), 14);
    }

    #[test]
    fn campaign_summary_derives_unit_costs() {
        let svc = service();
        let report =
            svc.campaign_analytics(Uuid::new_v4(), "Retargeting — Cart Abandoners & Browsers");
        assert_eq!(report.summary.cpa, round2(8_400.0 / 1_280.0));
        assert_eq!(report.summary.cpc, round2(8_400.0 / 16_000.0));
    }

    #[test]
    fn insights_cover_the_reporting_period() {
        let svc = service();
        let report = svc.insights();
        assert_eq!(report.insights.len(), 5);
        assert!(report.period.contains(" to "));
        assert!(report
            .insights
            .iter()
            .any(|i| i.severity == InsightSeverity::Warning));
    }

    #[test]
    fn csv_export_has_a_row_per_day_per_platform() {
        let svc = service();
        let csv = svc.export_csv();
        let lines: Vec<&str> = csv.trim_end().lines().collect();
        assert_eq!(
            lines[0],
            "date,platform,impressions,clicks,spend,conversions,revenue"
        );
        assert_eq!(lines.len(), 1 + 31 * 4);
    }
}
