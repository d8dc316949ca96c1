//! In-memory management store backed by DashMap.
//!
//! Production: replace with PostgreSQL (sqlx) or similar ACID store.
//! This provides the same API surface for development and demos, seeded
//! with the Berghaus outdoor-clothing dataset.

use chrono::{Duration, NaiveDate, Utc};
use dashmap::DashMap;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use studio_core::error::{StudioError, StudioResult};
use studio_core::types::{Objective, Platform};

use crate::models::*;

/// Lifecycle actions a campaign can go through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampaignAction {
    Submit,
    Approve,
    Launch,
    Pause,
}

impl CampaignAction {
    fn allowed_from(self) -> &'static [CampaignStatus] {
        match self {
            CampaignAction::Submit => &[CampaignStatus::Draft],
            CampaignAction::Approve => &[CampaignStatus::Review],
            CampaignAction::Launch => &[CampaignStatus::Approved, CampaignStatus::Paused],
            CampaignAction::Pause => &[CampaignStatus::Live],
        }
    }

    fn target(self) -> CampaignStatus {
        match self {
            CampaignAction::Submit => CampaignStatus::Review,
            CampaignAction::Approve => CampaignStatus::Approved,
            CampaignAction::Launch => CampaignStatus::Live,
            CampaignAction::Pause => CampaignStatus::Paused,
        }
    }
}

/// Thread-safe in-memory store for the management domain.
pub struct ManagementStore {
    campaigns: DashMap<Uuid, Campaign>,
    ad_sets: DashMap<Uuid, AdSet>,
    ads: DashMap<Uuid, Ad>,
    audiences: DashMap<Uuid, Audience>,
    content: DashMap<Uuid, Content>,
    templates: DashMap<Uuid, ContentTemplate>,
    brands: DashMap<Uuid, Brand>,
    connections: DashMap<Uuid, PlatformConnection>,
    org_name: String,
}

fn days_ago(n: i64) -> NaiveDate {
    (Utc::now() - Duration::days(n)).date_naive()
}

impl ManagementStore {
    pub fn new(org_name: &str) -> Self {
        let store = Self {
            campaigns: DashMap::new(),
            ad_sets: DashMap::new(),
            ads: DashMap::new(),
            audiences: DashMap::new(),
            content: DashMap::new(),
            templates: DashMap::new(),
            brands: DashMap::new(),
            connections: DashMap::new(),
            org_name: org_name.to_string(),
        };
        store.seed_campaigns();
        store.seed_audiences();
        store.seed_content();
        store.seed_brand();
        store.seed_connections();
        info!(org = org_name, "Management store initialized (in-memory, demo data)");
        store
    }

    // ─── Campaigns ─────────────────────────────────────────────────────────

    pub fn list_campaigns(&self) -> Vec<Campaign> {
        let mut campaigns: Vec<Campaign> =
            self.campaigns.iter().map(|r| r.value().clone()).collect();
        campaigns.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        campaigns
    }

    pub fn get_campaign(&self, id: Uuid) -> Option<Campaign> {
        self.campaigns.get(&id).map(|r| r.value().clone())
    }

    pub fn campaign_detail(&self, id: Uuid) -> Option<CampaignDetail> {
        let campaign = self.get_campaign(id)?;
        let mut ad_sets: Vec<AdSetWithAds> = self
            .ad_sets
            .iter()
            .filter(|r| r.value().campaign_id == id)
            .map(|r| {
                let ad_set = r.value().clone();
                let mut ads: Vec<Ad> = self
                    .ads
                    .iter()
                    .filter(|a| a.value().ad_set_id == ad_set.id)
                    .map(|a| a.value().clone())
                    .collect();
                ads.sort_by(|a, b| a.created_at.cmp(&b.created_at));
                AdSetWithAds { ad_set, ads }
            })
            .collect();
        ad_sets.sort_by(|a, b| a.ad_set.created_at.cmp(&b.ad_set.created_at));

        Some(CampaignDetail {
            campaign,
            ad_sets,
            ai_suggestions: Some(json!({
                "recommended_budget_increase": "20%",
                "suggested_audiences": ["lookalike_purchasers", "gore_tex_browsers"],
                "creative_refresh":
                    "Hillwalker 2.0 Gemini imagery performs 34% better than classic model",
            })),
        })
    }

    pub fn create_campaign(&self, req: CreateCampaignRequest) -> Campaign {
        let now = Utc::now();
        let campaign = Campaign {
            id: Uuid::new_v4(),
            name: req.name,
            objective: req.objective,
            status: CampaignStatus::Draft,
            total_budget: req.total_budget,
            daily_budget: req.daily_budget,
            start_date: req.start_date,
            end_date: req.end_date,
            platforms: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        info!(campaign_id = %campaign.id, name = %campaign.name, "Campaign created");
        self.campaigns.insert(campaign.id, campaign.clone());
        campaign
    }

    pub fn update_campaign(&self, id: Uuid, req: UpdateCampaignRequest) -> Option<Campaign> {
        self.campaigns.get_mut(&id).map(|mut entry| {
            let c = entry.value_mut();
            if let Some(name) = req.name {
                c.name = name;
            }
            if let Some(objective) = req.objective {
                c.objective = objective;
            }
            if let Some(budget) = req.total_budget {
                c.total_budget = Some(budget);
            }
            if let Some(daily) = req.daily_budget {
                c.daily_budget = Some(daily);
            }
            if let Some(start) = req.start_date {
                c.start_date = Some(start);
            }
            if let Some(end) = req.end_date {
                c.end_date = Some(end);
            }
            if let Some(platforms) = req.platforms {
                c.platforms = platforms;
            }
            c.updated_at = Utc::now();
            c.clone()
        })
    }

    pub fn delete_campaign(&self, id: Uuid) -> bool {
        let removed = self.campaigns.remove(&id).is_some();
        if removed {
            let set_ids: Vec<Uuid> = self
                .ad_sets
                .iter()
                .filter(|r| r.value().campaign_id == id)
                .map(|r| *r.key())
                .collect();
            for set_id in set_ids {
                self.ad_sets.remove(&set_id);
                let ad_ids: Vec<Uuid> = self
                    .ads
                    .iter()
                    .filter(|a| a.value().ad_set_id == set_id)
                    .map(|a| *a.key())
                    .collect();
                for ad_id in ad_ids {
                    self.ads.remove(&ad_id);
                }
            }
            info!(campaign_id = %id, "Campaign deleted");
        }
        removed
    }

    /// Applies a lifecycle action, enforcing valid transitions.
    pub fn transition_campaign(
        &self,
        id: Uuid,
        action: CampaignAction,
    ) -> StudioResult<Campaign> {
        let mut entry = self
            .campaigns
            .get_mut(&id)
            .ok_or_else(|| StudioError::NotFound(format!("campaign {id}")))?;
        let c = entry.value_mut();
        if !action.allowed_from().contains(&c.status) {
            return Err(StudioError::Validation(format!(
                "cannot {action:?} a campaign in {:?} state",
                c.status
            )));
        }
        c.status = action.target();
        c.updated_at = Utc::now();
        info!(campaign_id = %id, ?action, status = ?c.status, "Campaign transitioned");
        Ok(c.clone())
    }

    pub fn duplicate_campaign(&self, id: Uuid) -> Option<CampaignDuplicateResult> {
        let original = self.get_campaign(id)?;
        let now = Utc::now();
        let copy = Campaign {
            id: Uuid::new_v4(),
            name: format!("{} (Copy)", original.name),
            status: CampaignStatus::Draft,
            platforms: Vec::new(),
            created_at: now,
            updated_at: now,
            ..original
        };
        let result = CampaignDuplicateResult {
            original_id: id,
            new_id: copy.id,
            new_name: copy.name.clone(),
        };
        info!(campaign_id = %id, new_id = %copy.id, "Campaign duplicated");
        self.campaigns.insert(copy.id, copy);
        Some(result)
    }

    /// Pushes the campaign definition out to its connected platforms.
    /// Demo mode: returns canned per-platform acknowledgements.
    pub fn push_campaign(&self, id: Uuid) -> Option<CampaignPushResult> {
        let campaign = self.get_campaign(id)?;
        let platform_results = campaign
            .platforms
            .iter()
            .map(|p| {
                (
                    format!("{p:?}").to_lowercase(),
                    json!({
                        "status": "pushed",
                        "platform_campaign_id": format!("c_{}_{}", p.display_name().to_lowercase(), id.simple()),
                    }),
                )
            })
            .collect();
        Some(CampaignPushResult {
            campaign_id: id,
            status: "pushed".to_string(),
            platform_results,
        })
    }

    pub fn sync_campaign(&self, id: Uuid) -> Option<CampaignSyncResult> {
        let campaign = self.get_campaign(id)?;
        let synced_platforms = campaign
            .platforms
            .iter()
            .map(|p| {
                (
                    format!("{p:?}").to_lowercase(),
                    json!({ "status": "synced", "platform_status": "active" }),
                )
            })
            .collect();
        Some(CampaignSyncResult {
            campaign_id: id,
            synced_platforms,
        })
    }

    // ─── Audiences ─────────────────────────────────────────────────────────

    pub fn list_audiences(&self) -> Vec<Audience> {
        let mut audiences: Vec<Audience> =
            self.audiences.iter().map(|r| r.value().clone()).collect();
        audiences.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        audiences
    }

    // ─── Content ───────────────────────────────────────────────────────────

    pub fn list_content(&self) -> Vec<Content> {
        let mut content: Vec<Content> = self.content.iter().map(|r| r.value().clone()).collect();
        content.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        content
    }

    pub fn list_templates(&self) -> Vec<ContentTemplate> {
        let mut templates: Vec<ContentTemplate> =
            self.templates.iter().map(|r| r.value().clone()).collect();
        templates.sort_by(|a, b| b.usage_count.cmp(&a.usage_count));
        templates
    }

    pub fn calendar(&self) -> Vec<CalendarItem> {
        let mut items: Vec<CalendarItem> = self
            .content
            .iter()
            .filter_map(|r| {
                let c = r.value();
                c.scheduled_date.map(|date| CalendarItem {
                    id: c.id,
                    title: c.title.clone(),
                    content_type: c.content_type,
                    platform: c.platform,
                    status: c.status,
                    scheduled_date: date,
                })
            })
            .collect();
        items.sort_by(|a, b| a.scheduled_date.cmp(&b.scheduled_date));
        items
    }

    /// Generates scored copy variants for a brief and files the result in
    /// the content library. Demo mode: the variants are canned.
    pub fn generate_content(&self, req: GenerateContentRequest) -> GenerateContentResponse {
        let now = Utc::now();
        let content = Content {
            id: Uuid::new_v4(),
            content_type: req.content_type,
            title: req.title,
            status: ContentStatus::Draft,
            platform: req.platform,
            language: "en".to_string(),
            category: Some("generated".to_string()),
            tags: Vec::new(),
            scheduled_date: None,
            published_date: None,
            created_at: now,
            updated_at: now,
        };
        let content_id = content.id;
        self.content.insert(content_id, content);
        info!(content_id = %content_id, "Content generated");

        GenerateContentResponse {
            content_id,
            variants: canned_variants(),
            model_used: "claude-sonnet-4-5".to_string(),
            tokens_used: Some(2100),
        }
    }

    // ─── Brands / connections / settings ───────────────────────────────────

    pub fn list_brands(&self) -> Vec<Brand> {
        self.brands.iter().map(|r| r.value().clone()).collect()
    }

    pub fn list_connections(&self) -> Vec<PlatformConnection> {
        let mut connections: Vec<PlatformConnection> =
            self.connections.iter().map(|r| r.value().clone()).collect();
        connections.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        connections
    }

    pub fn settings(&self) -> OrgSettings {
        OrgSettings {
            name: self.org_name.clone(),
            billing_email: "digital@berghaus.com".to_string(),
            plan_tier: "enterprise".to_string(),
        }
    }

    // ─── Seed data ─────────────────────────────────────────────────────────

    fn seed_campaigns(&self) {
        let rows: Vec<(
            &str,
            Objective,
            CampaignStatus,
            f64,
            f64,
            Option<(i64, i64)>,
            Vec<Platform>,
            i64,
        )> = vec![
            (
                "Spring/Summer 2026 — New Season Drop",
                Objective::Conversions,
                CampaignStatus::Live,
                45_000.0,
                1_500.0,
                Some((18, -12)),
                vec![Platform::Meta, Platform::Google],
                25,
            ),
            (
                "Hillwalker Gore-Tex — UK & Ireland Push",
                Objective::Conversions,
                CampaignStatus::Live,
                32_000.0,
                1_100.0,
                Some((28, -5)),
                vec![Platform::Meta, Platform::Google, Platform::Tiktok],
                32,
            ),
            (
                "Trango Heritage Collection — Brand Campaign",
                Objective::Awareness,
                CampaignStatus::Live,
                28_000.0,
                900.0,
                Some((14, -20)),
                vec![Platform::Meta, Platform::Linkedin],
                18,
            ),
            (
                "Extrem Range — Mountaineering Enthusiasts",
                Objective::Traffic,
                CampaignStatus::Approved,
                18_000.0,
                600.0,
                Some((3, -30)),
                vec![Platform::Google],
                8,
            ),
            (
                "Retargeting — Cart Abandoners & Browsers",
                Objective::Conversions,
                CampaignStatus::Live,
                12_000.0,
                400.0,
                Some((30, -3)),
                vec![Platform::Meta],
                35,
            ),
            (
                "Winter Clearance Sale — Up to 50% Off",
                Objective::Conversions,
                CampaignStatus::Completed,
                55_000.0,
                1_800.0,
                Some((65, 35)),
                vec![Platform::Meta, Platform::Google, Platform::Tiktok],
                70,
            ),
            (
                "Summer Hiking Essentials — Tech Tees & Shorts",
                Objective::Conversions,
                CampaignStatus::Draft,
                22_000.0,
                750.0,
                None,
                vec![],
                2,
            ),
            (
                "Wandermoor Wind Smock — Product Launch",
                Objective::Traffic,
                CampaignStatus::Paused,
                15_000.0,
                500.0,
                Some((40, 10)),
                vec![Platform::Meta, Platform::Google],
                45,
            ),
        ];

        let mut hillwalker_id = None;
        let mut season_id = None;
        for (name, objective, status, budget, daily, dates, platforms, created_days) in rows {
            let id = Uuid::new_v4();
            let created = Utc::now() - Duration::days(created_days);
            self.campaigns.insert(
                id,
                Campaign {
                    id,
                    name: name.to_string(),
                    objective,
                    status,
                    total_budget: Some(budget),
                    daily_budget: Some(daily),
                    start_date: dates.map(|(s, _)| days_ago(s)),
                    end_date: dates.map(|(_, e)| days_ago(e)),
                    platforms,
                    created_at: created,
                    updated_at: Utc::now(),
                },
            );
            if name.starts_with("Hillwalker") {
                hillwalker_id = Some(id);
            }
            if name.starts_with("Spring/Summer") {
                season_id = Some(id);
            }
        }

        if let Some(campaign_id) = season_id {
            self.seed_ad_set(
                campaign_id,
                "UK — Outdoor Enthusiasts 25-54",
                Platform::Meta,
                Some("act_berghaus_01/adset_ss26_uk"),
                900.0,
                "lowest_cost",
                json!({
                    "geo_locations": { "countries": ["GB"] },
                    "age_min": 25, "age_max": 54,
                    "interests": ["hiking", "outdoor activities", "trail running"],
                }),
                &[
                    (
                        "Carousel — New Season Collection",
                        "New Season. New Adventures.",
                        "Lightweight, breathable gear built for spring & summer trails. Shop the new collection.",
                    ),
                    (
                        "Video — Trail Running Edit",
                        "Built for the Trail",
                        "Sweat-wicking Tech Tees and lightweight layers — tested on Britain's toughest trails.",
                    ),
                ],
            );
            self.seed_ad_set(
                campaign_id,
                "UK — Google Shopping & Search",
                Platform::Google,
                Some("customers/berghaus/campaigns/ss26"),
                600.0,
                "target_roas",
                json!({
                    "geo_locations": { "countries": ["GB"] },
                    "keywords": ["hiking jackets", "outdoor clothing", "waterproof jacket"],
                }),
                &[(
                    "Search — New Season Jackets",
                    "Berghaus New Season 2026 — Shop Now",
                    "Lightweight jackets, Tech Tees & trail-ready gear. Free delivery over £80.",
                )],
            );
        }

        if let Some(campaign_id) = hillwalker_id {
            self.seed_ad_set(
                campaign_id,
                "UK — Hillwalker Awareness",
                Platform::Meta,
                Some("act_berghaus_01/adset_hw_uk"),
                500.0,
                "lowest_cost",
                json!({
                    "geo_locations": { "countries": ["GB"] },
                    "age_min": 30, "age_max": 60,
                    "interests": ["hillwalking", "Lake District", "Scottish Highlands"],
                }),
                &[(
                    "Single Image — Hillwalker on Ridge",
                    "The Hillwalker. Trusted Since Day One.",
                    "Two-layer Gore-Tex shell. Breathable. Waterproof. Built for British hills. From £190.",
                )],
            );
            self.seed_ad_set(
                campaign_id,
                "TikTok — Young Hikers 18-35",
                Platform::Tiktok,
                None,
                250.0,
                "lowest_cost",
                json!({
                    "geo_locations": { "countries": ["GB"] },
                    "age_min": 18, "age_max": 35,
                    "interests": ["hiking", "outdoors", "adventure travel"],
                }),
                &[(
                    "Video — Hillwalker Rain Test",
                    "POV: It starts raining and you're wearing a Hillwalker",
                    "Gore-Tex. Enough said.",
                )],
            );
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn seed_ad_set(
        &self,
        campaign_id: Uuid,
        name: &str,
        platform: Platform,
        platform_id: Option<&str>,
        daily_budget: f64,
        bid_strategy: &str,
        targeting: serde_json::Value,
        ads: &[(&str, &str, &str)],
    ) {
        let set_id = Uuid::new_v4();
        let created = Utc::now() - Duration::days(18);
        self.ad_sets.insert(
            set_id,
            AdSet {
                id: set_id,
                campaign_id,
                name: name.to_string(),
                status: CampaignStatus::Live,
                platform,
                platform_id: platform_id.map(str::to_string),
                daily_budget: Some(daily_budget),
                lifetime_budget: None,
                bid_strategy: Some(bid_strategy.to_string()),
                targeting: Some(targeting),
                created_at: created,
            },
        );
        for (idx, (ad_name, headline, description)) in ads.iter().enumerate() {
            let ad_id = Uuid::new_v4();
            self.ads.insert(
                ad_id,
                Ad {
                    id: ad_id,
                    ad_set_id: set_id,
                    name: ad_name.to_string(),
                    status: CampaignStatus::Live,
                    headline: Some(headline.to_string()),
                    description: Some(description.to_string()),
                    cta: Some("shop_now".to_string()),
                    url: Some("https://www.berghaus.com".to_string()),
                    platform_ad_id: Some(format!("ad_bh_{:03}", idx + 1)),
                    review_status: Some(ReviewStatus::Approved),
                    created_at: created + Duration::minutes(idx as i64 * 15),
                },
            );
        }
    }

    fn seed_audiences(&self) {
        let rows: Vec<(&str, AudienceKind, Platform, Option<u64>, i64)> = vec![
            ("UK Hillwalkers & Hikers 30-60", AudienceKind::Saved, Platform::Meta, Some(2_800_000), 40),
            ("UK Trail Runners 18-40", AudienceKind::Saved, Platform::Meta, Some(1_450_000), 38),
            ("Cart Abandoners — Last 14 Days", AudienceKind::Custom, Platform::Meta, Some(45_000), 50),
            ("Product Page Browsers — Gore-Tex", AudienceKind::Custom, Platform::Meta, Some(128_000), 35),
            ("Ireland — Outdoor Enthusiasts", AudienceKind::Saved, Platform::Google, Some(380_000), 30),
            ("Mountaineering Enthusiasts — UK", AudienceKind::Saved, Platform::Google, Some(620_000), 25),
        ];
        for (name, kind, platform, size, created_days) in rows {
            let id = Uuid::new_v4();
            self.audiences.insert(
                id,
                Audience {
                    id,
                    name: name.to_string(),
                    kind,
                    platform,
                    platform_audience_id: None,
                    demographics: None,
                    interests: None,
                    behaviors: None,
                    size_estimate: size,
                    created_at: Utc::now() - Duration::days(created_days),
                },
            );
        }
    }

    fn seed_content(&self) {
        let rows: Vec<(&str, ContentType, ContentStatus, Option<Platform>, Option<i64>, i64)> = vec![
            ("Spring/Summer '26 — Carousel Ad Copy", ContentType::AdCopy, ContentStatus::Approved, Some(Platform::Meta), Some(18), 22),
            ("Hillwalker Gore-Tex — Search Ad Copy", ContentType::AdCopy, ContentStatus::Approved, Some(Platform::Google), Some(28), 30),
            ("Trango Heritage — Instagram Story Sequence", ContentType::SocialPost, ContentStatus::Published, Some(Platform::Meta), Some(14), 16),
            ("New Season Launch — Customer Email", ContentType::Email, ContentStatus::Published, None, Some(18), 20),
            ("Extrem Range — Google Ads Copy", ContentType::AdCopy, ContentStatus::Review, Some(Platform::Google), None, 5),
            ("TikTok — Hillwalker Rain Test Script", ContentType::SocialPost, ContentStatus::Approved, Some(Platform::Tiktok), Some(25), 28),
            ("Wandermoor Wind Smock — PDP Copy", ContentType::ProductDescription, ContentStatus::Approved, None, Some(38), 42),
            ("Summer Hiking Essentials — Pre-launch Teaser", ContentType::Email, ContentStatus::Draft, None, Some(-5), 3),
        ];
        for (title, content_type, status, platform, scheduled, created_days) in rows {
            let id = Uuid::new_v4();
            self.content.insert(
                id,
                Content {
                    id,
                    content_type,
                    title: title.to_string(),
                    status,
                    platform,
                    language: "en".to_string(),
                    category: None,
                    tags: Vec::new(),
                    scheduled_date: scheduled.map(days_ago),
                    published_date: (status == ContentStatus::Published)
                        .then(|| scheduled.map(days_ago))
                        .flatten(),
                    created_at: Utc::now() - Duration::days(created_days),
                    updated_at: Utc::now(),
                },
            );
        }

        let templates: Vec<(&str, ContentType, Option<Objective>, &str, &str, bool, u64, i64)> = vec![
            (
                "Seasonal Collection Launch",
                ContentType::AdCopy,
                Some(Objective::Conversions),
                "Write compelling ad copy for a new seasonal outdoor clothing collection launch. Emphasise technical features and adventure lifestyle.",
                "New Season. New Adventures. Lightweight, breathable gear built for the trail.",
                true,
                312,
                120,
            ),
            (
                "Technical Product Feature",
                ContentType::AdCopy,
                Some(Objective::Conversions),
                "Write product-focused ad copy highlighting technical specifications and materials (Gore-Tex, Polartec, Hydroshell etc).",
                "Two-layer Gore-Tex shell. Breathable. Waterproof. Built for British hills.",
                true,
                245,
                100,
            ),
            (
                "Heritage Brand Story",
                ContentType::SocialPost,
                Some(Objective::Engagement),
                "Create a social media post telling the story behind an iconic product. Reference expeditions, heritage, and British outdoor culture.",
                "In 1986, we designed the Trango for the British K2 expedition. An icon was born.",
                false,
                28,
                30,
            ),
            (
                "UGC-Style TikTok Script",
                ContentType::SocialPost,
                Some(Objective::Awareness),
                "Write a short-form video script in UGC/POV style for outdoor clothing. Keep it authentic, Gen-Z friendly, not overly polished.",
                "POV: It starts raining and you're wearing a Hillwalker. *smiles in Gore-Tex*",
                true,
                189,
                60,
            ),
        ];
        for (name, content_type, objective, prompt, example, public, usage, created_days) in templates {
            let id = Uuid::new_v4();
            self.templates.insert(
                id,
                ContentTemplate {
                    id,
                    name: name.to_string(),
                    content_type,
                    industry: Some("outdoor_apparel".to_string()),
                    objective,
                    prompt_structure: prompt.to_string(),
                    variable_fields: None,
                    example_output: Some(example.to_string()),
                    is_public: public,
                    usage_count: usage,
                    created_at: Utc::now() - Duration::days(created_days),
                },
            );
        }
    }

    fn seed_brand(&self) {
        let id = Uuid::new_v4();
        self.brands.insert(
            id,
            Brand {
                id,
                name: "Berghaus".to_string(),
                description: Some(
                    "Outdoor clothing & equipment since 1966. Born in the North East of England."
                        .to_string(),
                ),
                voice_tone: Some("Confident, adventurous, authentic, no-nonsense".to_string()),
                voice_style: Some(
                    "Direct and active. Short punchy sentences mixed with technical product \
                     detail. Heritage references woven naturally. British outdoor voice — never \
                     preachy, always practical."
                        .to_string(),
                ),
                primary_color: Some("#000000".to_string()),
                secondary_color: Some("#FFB3C7".to_string()),
                logo_url: None,
                created_at: Utc::now() - Duration::days(90),
                updated_at: Utc::now(),
            },
        );
    }

    fn seed_connections(&self) {
        let rows: Vec<(Platform, &str, &str, i64, i64)> = vec![
            (Platform::Meta, "act_berghaus_uk", "Berghaus UK — Meta Ads", 0, 90),
            (Platform::Google, "842-119-5523", "Berghaus UK — Google Ads", 0, 85),
            (Platform::Tiktok, "berghaus_uk_ads", "Berghaus UK — TikTok Ads", 1, 60),
            (Platform::Linkedin, "urn:li:sponsoredAccount:berghaus", "Berghaus — LinkedIn", 1, 45),
        ];
        for (platform, account_id, account_name, sync_days, created_days) in rows {
            let id = Uuid::new_v4();
            self.connections.insert(
                id,
                PlatformConnection {
                    id,
                    platform,
                    platform_account_id: Some(account_id.to_string()),
                    account_name: Some(account_name.to_string()),
                    status: ConnectionStatus::Active,
                    last_sync_at: Some(Utc::now() - Duration::days(sync_days)),
                    error_message: None,
                    created_at: Utc::now() - Duration::days(created_days),
                },
            );
        }
    }
}

/// The canned copy variants served by the demo content generator.
fn canned_variants() -> Vec<ContentVariant> {
    let variants = [
        (
            "New Season. New Adventures.",
            "Lightweight, breathable gear built for spring & summer trails. Free delivery over £80.",
            "The mountain doesn't care what you're wearing. But you should. Our Spring/Summer '26 \
             collection brings sweat-wicking Tech Tees, ultralight wind smocks, and trail-ready \
             shorts — all tested on Britain's toughest terrain. From the Lakes to the Highlands, \
             gear up for the season ahead.",
            "Shop New Season",
            94u8,
            (96u8, 92u8, 94u8),
        ),
        (
            "Built for the Trail. Proven on the Mountain.",
            "Technical outdoor clothing engineered for every adventure. Berghaus Spring/Summer '26.",
            "Forty years of expedition heritage in every stitch. Our new season range pairs \
             cutting-edge fabric technology with the no-nonsense durability Berghaus is known \
             for. Polartec® fleeces. Gore-Tex® shells. Sweat-wicking baselayers. Whatever the \
             forecast, you're ready.",
            "Explore the Range",
            91,
            (93, 88, 92),
        ),
        (
            "Less Weight. More Mountain.",
            "Ultralight layers that pack down small and perform big. New for SS26.",
            "Pack light, go further. Our Spring/Summer collection strips back the weight without \
             cutting corners on performance. The Wandermoor Wind Smock weighs just 280g. The \
             Tech Tee dries in half the time of cotton. This is outdoor clothing that works as \
             hard as you do.",
            "Shop SS26",
            88,
            (90, 85, 89),
        ),
    ];

    variants
        .iter()
        .enumerate()
        .map(|(i, (headline, description, text, cta, score, (tone, vocabulary, style)))| {
            ContentVariant {
                version: i as u32 + 1,
                headline: Some(headline.to_string()),
                description: Some(description.to_string()),
                text: text.to_string(),
                cta_text: Some(cta.to_string()),
                brand_score: Some(*score),
                brand_score_breakdown: Some(BrandScoreBreakdown {
                    tone: *tone,
                    vocabulary: *vocabulary,
                    style: *style,
                }),
                character_count: Some(text.chars().count()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_demo_dataset() {
        let store = ManagementStore::new("Berghaus UK");
        assert_eq!(store.list_campaigns().len(), 8);
        assert_eq!(store.list_audiences().len(), 6);
        assert_eq!(store.list_content().len(), 8);
        assert_eq!(store.list_templates().len(), 4);
        assert_eq!(store.list_brands().len(), 1);
        assert_eq!(store.list_connections().len(), 4);
    }

    #[test]
    fn campaign_lifecycle_happy_path() {
        let store = ManagementStore::new("test");
        let campaign = store.create_campaign(CreateCampaignRequest {
            name: "Lifecycle".to_string(),
            objective: Objective::Conversions,
            total_budget: Some(10_000.0),
            daily_budget: Some(500.0),
            start_date: None,
            end_date: None,
        });
        assert_eq!(campaign.status, CampaignStatus::Draft);

        let c = store
            .transition_campaign(campaign.id, CampaignAction::Submit)
            .unwrap();
        assert_eq!(c.status, CampaignStatus::Review);
        let c = store
            .transition_campaign(campaign.id, CampaignAction::Approve)
            .unwrap();
        assert_eq!(c.status, CampaignStatus::Approved);
        let c = store
            .transition_campaign(campaign.id, CampaignAction::Launch)
            .unwrap();
        assert_eq!(c.status, CampaignStatus::Live);
        let c = store
            .transition_campaign(campaign.id, CampaignAction::Pause)
            .unwrap();
        assert_eq!(c.status, CampaignStatus::Paused);
    }

    #[test]
    fn invalid_transition_is_rejected() {
        let store = ManagementStore::new("test");
        let campaign = store.create_campaign(CreateCampaignRequest {
            name: "Invalid".to_string(),
            objective: Objective::Traffic,
            total_budget: None,
            daily_budget: None,
            start_date: None,
            end_date: None,
        });
        let err = store
            .transition_campaign(campaign.id, CampaignAction::Launch)
            .unwrap_err();
        assert!(matches!(err, StudioError::Validation(_)));
    }

    #[test]
    fn detail_includes_ad_sets_and_ads() {
        let store = ManagementStore::new("test");
        let hillwalker = store
            .list_campaigns()
            .into_iter()
            .find(|c| c.name.starts_with("Hillwalker"))
            .unwrap();
        let detail = store.campaign_detail(hillwalker.id).unwrap();
        assert_eq!(detail.ad_sets.len(), 2);
        assert!(detail.ad_sets.iter().any(|s| !s.ads.is_empty()));
        assert!(detail.ai_suggestions.is_some());
    }

    #[test]
    fn delete_cascades_to_ad_sets() {
        let store = ManagementStore::new("test");
        let hillwalker = store
            .list_campaigns()
            .into_iter()
            .find(|c| c.name.starts_with("Hillwalker"))
            .unwrap();
        assert!(store.delete_campaign(hillwalker.id));
        assert!(store.campaign_detail(hillwalker.id).is_none());
        assert!(!store.delete_campaign(hillwalker.id));
    }

    #[test]
    fn duplicate_copies_as_draft() {
        let store = ManagementStore::new("test");
        let original = store.list_campaigns().pop().unwrap();
        let result = store.duplicate_campaign(original.id).unwrap();
        assert!(result.new_name.ends_with("(Copy)"));
        let copy = store.get_campaign(result.new_id).unwrap();
        assert_eq!(copy.status, CampaignStatus::Draft);
        assert!(copy.platforms.is_empty());
    }

    #[test]
    fn generate_files_content_in_library() {
        let store = ManagementStore::new("test");
        let before = store.list_content().len();
        let resp = store.generate_content(GenerateContentRequest {
            content_type: ContentType::AdCopy,
            title: "SS26 copy".to_string(),
            platform: Some(Platform::Meta),
            brief: None,
        });
        assert_eq!(resp.variants.len(), 3);
        assert!(resp.variants[0].brand_score >= resp.variants[2].brand_score);
        assert_eq!(store.list_content().len(), before + 1);
    }

    #[test]
    fn calendar_lists_only_scheduled_content() {
        let store = ManagementStore::new("test");
        let calendar = store.calendar();
        assert_eq!(calendar.len(), 7);
        let mut sorted = calendar.clone();
        sorted.sort_by(|a, b| a.scheduled_date.cmp(&b.scheduled_date));
        assert_eq!(
            calendar.iter().map(|c| c.scheduled_date).collect::<Vec<_>>(),
            sorted.iter().map(|c| c.scheduled_date).collect::<Vec<_>>()
        );
    }
}
