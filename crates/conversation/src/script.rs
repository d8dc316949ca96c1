//! Script model and the campaign-build conversation script.
//!
//! A script is built once per session from the seed (product name) and is
//! immutable afterwards. Steps run strictly in order; a step carrying a gate
//! only runs when the most recent choice matches, otherwise it is skipped
//! with no delay.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::message::{
    AnalysisItem, CampaignSummary, ChannelPlan, Choice, CreativeImage, Message,
    PlatformPublishState, PublishState,
};
use crate::persona::PersonaId;

/// The value of a resolved choice, used to gate conditional steps.
/// Compared by exact equality only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ChoiceValue(String);

impl ChoiceValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ChoiceValue {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ChoiceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One scheduled unit of a script.
#[derive(Debug, Clone)]
pub struct Step {
    /// Time to wait before the message becomes visible.
    pub delay: Duration,
    pub message: Message,
    /// When set, the step only runs if the last resolved choice equals
    /// this value.
    pub gate: Option<ChoiceValue>,
}

/// An immutable, ordered list of steps for one session.
#[derive(Debug, Clone)]
pub struct Script {
    steps: Arc<[Step]>,
}

impl Script {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps: steps.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Returns a copy of this script with every delay multiplied by
    /// `factor`. Used to speed demos up or slow them down.
    pub fn scale_delays(&self, factor: f64) -> Self {
        if factor == 1.0 {
            return self.clone();
        }
        let steps: Vec<Step> = self
            .steps
            .iter()
            .map(|s| Step {
                delay: s.delay.mul_f64(factor),
                message: s.message.clone(),
                gate: s.gate.clone(),
            })
            .collect();
        Self::new(steps)
    }
}

// ─── Step constructors ─────────────────────────────────────────────────────

fn say(delay_ms: u64, persona: PersonaId, text: impl Into<String>) -> Step {
    Step {
        delay: Duration::from_millis(delay_ms),
        message: Message::PersonaText {
            persona,
            text: text.into(),
        },
        gate: None,
    }
}

fn ask(delay_ms: u64, options: &[(&str, &str)]) -> Step {
    Step {
        delay: Duration::from_millis(delay_ms),
        message: Message::ChoiceSet {
            choices: options
                .iter()
                .map(|(label, value)| Choice::new(*label, *value))
                .collect(),
        },
        gate: None,
    }
}

fn publishing(delay_ms: u64, platforms: &[(&str, PublishState)]) -> Step {
    Step {
        delay: Duration::from_millis(delay_ms),
        message: Message::PublishingStatus {
            platforms: platforms
                .iter()
                .map(|(name, state)| PlatformPublishState {
                    platform: name.to_string(),
                    state: *state,
                })
                .collect(),
        },
        gate: None,
    }
}

fn gated(value: &str, mut step: Step) -> Step {
    step.gate = Some(ChoiceValue::from(value));
    step
}

// ─── The campaign-build script ─────────────────────────────────────────────

/// Builds the full campaign-build conversation for one session,
/// substituting `product_name` into the persona text. Pure and
/// deterministic for a given seed.
pub fn build_script(product_name: &str) -> Script {
    use PublishState::{Live, Pending, Publishing};

    let steps = vec![
        // Maya greets and asks for the objective.
        say(800, PersonaId::Maya, format!(
            "Great — let's build a killer campaign for **{product_name}**. I'm Maya, \
             your Chief Strategist. I'll coordinate the whole team.\n\nFirst things \
             first: **what's the primary goal?**"
        )),
        ask(400, &[
            ("Drive sales & conversions", "conversions"),
            ("Build brand awareness", "awareness"),
            ("Drive traffic to product page", "traffic"),
            ("Generate leads", "leads"),
        ]),
        // Nova pulls research. Gated on the conversions objective.
        gated("conversions", say(1200, PersonaId::Nova, format!(
            "I'm Nova, your Research Analyst. Let me pull insights on \
             **{product_name}** while Maya plans the strategy.\n\n**Researching \
             market context...**\n\nI've analysed your previous campaigns, \
             competitor activity, and current market trends. Here's what I found:"
        ))),
        Step {
            delay: Duration::from_millis(1500),
            message: Message::AnalysisTable {
                title: "Campaign Intelligence".to_string(),
                items: vec![
                    analysis("Best past campaign", "Hillwalker UK Push", Some("4.7x ROAS")),
                    analysis("Top audience segment", "UK Hikers 30-55", Some("+34% conv. rate")),
                    analysis("Best channel", "Google Shopping", Some("3.8x ROAS")),
                    analysis("Peak buying season", "Now — Spring/Summer", Some("↑ 22% YoY")),
                    analysis("Competitor activity", "The North Face running similar", Some("£45K/mo spend")),
                    analysis("Content gap", "Video content on TikTok", Some("Underinvested")),
                ],
            },
            gate: None,
        },
        // Maya presents the strategy and hands over to Alex.
        say(2000, PersonaId::Maya, format!(
            "Based on Nova's research, here's my recommended strategy:\n\n\
             **Campaign: {product_name}**\n**Objective:** Drive conversions (sales)\n\
             **Duration:** 21 days\n**Markets:** UK & Ireland\n\n**Channel Mix:**\n\
             - **Meta (Instagram + Facebook):** 40% of budget — carousel ads + video, targeting hikers 25-55\n\
             - **Google Shopping + Search:** 35% — high-intent product searches\n\
             - **TikTok:** 15% — UGC-style video for 18-35 segment\n\
             - **Snapchat:** 10% — story ads for younger outdoor enthusiasts\n\n\
             I'm handing over to Alex for detailed media planning. \
             **What budget are we working with?**"
        )),
        ask(400, &[
            ("£10,000 — £20,000", "15000"),
            ("£20,000 — £40,000", "30000"),
            ("£40,000 — £60,000", "50000"),
            ("£60,000+", "75000"),
        ]),
        // Alex lays out the media plan for the mid-range budget.
        gated("30000", say(1500, PersonaId::Alex,
            "Alex here — Media Planner. With a **£30,000 budget over 21 days**, \
             here's the optimal split:\n\n\
             | Channel | Daily | Total | Strategy |\n\
             |---------|-------|-------|----------|\n\
             | Meta | £571 | £12,000 | Carousel + Video, Lookalike audiences |\n\
             | Google | £500 | £10,500 | Shopping + Brand Search + Dynamic |\n\
             | TikTok | £214 | £4,500 | UGC creator-style, Spark Ads |\n\
             | Snapchat | £143 | £3,000 | Story ads, AR try-on filter |\n\n\
             **Expected results** (based on your historical data):\n\
             - **1.2M — 1.8M impressions**\n\
             - **36,000 — 54,000 clicks**\n\
             - **1,400 — 2,100 conversions**\n\
             - **Projected ROAS: 4.2x — 5.8x**\n\n\
             Now let's get creative. Luna, over to you!",
        )),
        // Luna sets creative direction, Kai checks brand alignment.
        say(2000, PersonaId::Luna,
            "Luna here — Creative Director. Let me set the visual and conceptual \
             direction.\n\n**Creative Concept: \"Built Different\"**\n\nThe idea: \
             Show the product in its natural element — real mountains, real \
             weather, real performance. No studio shots. Raw, authentic, \
             aspirational.\n\n**Visual Direction:**\n\
             - Moody mountain landscapes, early morning light\n\
             - Product in action — rain, wind, trail\n\
             - Close-up texture shots of Gore-Tex fabric\n\
             - Lifestyle POV angles for TikTok/Snapchat\n\n\
             Let me check with Kai on brand alignment before we go further...",
        ),
        say(1200, PersonaId::Kai,
            "Kai — Brand Guardian here. I've checked Luna's direction against \
             Berghaus brand guidelines:\n\n\
             ✅ **Tone:** Confident & adventurous — on brand\n\
             ✅ **Visual style:** Authentic outdoor settings — matches guidelines\n\
             ✅ **Typography:** Primary font Dazzed, accent highlight pink #FFB3C7\n\
             ✅ **Logo placement:** Bottom-right, min clearance zone\n\
             ⚠️ **One note:** Ensure product is visible within first 3 seconds of \
             video content (brand requirement)\n\n\
             **Brand alignment score: 96/100** — Approved. Go ahead, Luna.",
        ),
        // Sam pitches three headline directions.
        say(1800, PersonaId::Sam, format!(
            "Sam — Copywriter. Here are 3 headline directions, scored against \
             your brand voice:\n\n\
             **Option 1** — Score: 95%\n\
             > *\"Built Different. Tested on Every Ridge in Britain.\"*\n\
             > Body: The new {product_name}. Three-layer Gore-Tex. 280g lighter \
             than last gen. From the Lakes to the Highlands, this is the jacket \
             that keeps going when the weather says stop.\n\n\
             **Option 2** — Score: 91%\n\
             > *\"The Mountain Doesn't Care. You Should.\"*\n\
             > Body: Introducing the {product_name}. Engineered for the worst \
             conditions, designed for the longest days. Waterproof. Breathable. \
             Unstoppable.\n\n\
             **Option 3** — Score: 88%\n\
             > *\"Every Layer. Every Condition. One Jacket.\"*\n\
             > Body: Meet the next generation. The {product_name} gives you three \
             ways to wear it — shell, insulated, or both. Because British weather \
             doesn't pick one mood.\n\n\
             I recommend **Option 1** — highest brand alignment and the strongest \
             hook for conversion campaigns. Ready to see visuals?"
        )),
        ask(400, &[
            ("Generate images for all 3", "all_images"),
            ("Go with Option 1", "option_1"),
            ("I want to tweak the copy", "tweak"),
        ]),
        // Aria generates the visuals.
        gated("all_images", say(2500, PersonaId::Aria,
            "Aria — Art Director. I'm generating campaign visuals using \
             **Gemini Imagen**. Creating 4 images across different formats...\n\n\
             🎨 Generating hero image (1200×628)...\n\
             🎨 Generating Instagram story (1080×1920)...\n\
             🎨 Generating product close-up (1080×1080)...\n\
             🎨 Generating TikTok thumbnail (1080×1920)...",
        )),
        Step {
            delay: Duration::from_millis(3000),
            message: Message::ImageSet {
                images: vec![
                    image(
                        "https://placehold.co/600x314/1a1a2e/FFB3C7?text=Hero%3A+Hiker+on+Ridge%0AMoody+Dawn+Light&font=raleway",
                        "Hero — Hiker on misty ridge, dawn light, product in focus",
                    ),
                    image(
                        "https://placehold.co/540x960/2d3436/FFB3C7?text=Story%3A+Rain+on%0AGore-Tex+Close-up&font=raleway",
                        "Story — Rain droplets on Gore-Tex fabric, macro detail",
                    ),
                    image(
                        "https://placehold.co/540x540/1a1a2e/ffffff?text=Square%3A+Product%0AFlat+Lay+3-in-1&font=raleway",
                        "Square — Product flat lay, 3-in-1 system exploded view",
                    ),
                    image(
                        "https://placehold.co/540x960/0a3d62/FFB3C7?text=TikTok%3A+POV%0ATrail+Running&font=raleway",
                        "TikTok — POV trail running shot, first-person view",
                    ),
                ],
            },
            gate: None,
        },
        say(800, PersonaId::Aria,
            "All 4 visuals generated. These are optimised for each platform's \
             aspect ratio and can be used directly. Kai has reviewed them — \
             **brand score: 94/100**.\n\nShall I create more variations or are \
             we ready to build the final campaign?",
        ),
        ask(400, &[
            ("Build the campaign — let's go!", "build"),
            ("Generate more image variants", "more_images"),
            ("Adjust creative direction", "adjust"),
        ]),
        // Maya assembles the launch package.
        gated("build", say(2000, PersonaId::Maya,
            "Maya here — I've assembled everything from the team into a complete \
             campaign. Here's your launch package:",
        )),
        Step {
            delay: Duration::from_millis(1000),
            message: Message::CampaignCard {
                campaign: CampaignSummary {
                    name: format!("{product_name} — \"Built Different\" Campaign"),
                    objective: "Conversions (Sales)".to_string(),
                    budget: "£30,000 over 21 days".to_string(),
                    channels: vec![
                        channel("Meta", "£12,000", "Carousel + Video", "UK Hikers 25-55, Lookalike"),
                        channel("Google", "£10,500", "Shopping + Search + Dynamic", "High-intent searches"),
                        channel("TikTok", "£4,500", "UGC Spark Ads", "Outdoor 18-35"),
                        channel("Snapchat", "£3,000", "Story + AR Filter", "Adventure 18-30"),
                    ],
                    headline: "Built Different. Tested on Every Ridge in Britain.".to_string(),
                    brand_score: 95,
                    expected_roas: "4.2x — 5.8x".to_string(),
                    expected_conversions: "1,400 — 2,100".to_string(),
                    images_generated: 4,
                    agents_involved: vec![
                        "Maya".to_string(),
                        "Nova".to_string(),
                        "Alex".to_string(),
                        "Luna".to_string(),
                        "Kai".to_string(),
                        "Sam".to_string(),
                        "Aria".to_string(),
                    ],
                },
            },
            gate: None,
        },
        say(800, PersonaId::Maya,
            "Everything's ready. 7 AI agents collaborated to build this campaign. \
             Want to **publish to all platforms now**, or make adjustments?",
        ),
        ask(400, &[
            ("Publish to all platforms NOW", "publish"),
            ("Schedule for tomorrow 9 AM", "schedule"),
            ("I want to adjust something", "adjust_final"),
        ]),
        // Alex publishes; the status list updates in place as platforms
        // come online.
        gated("publish", say(1500, PersonaId::Alex,
            "Alex here — deploying to all platforms now. Sit tight...",
        )),
        publishing(500, &[
            ("Meta (Instagram + Facebook)", Publishing),
            ("Google Ads (Shopping + Search)", Pending),
            ("TikTok Ads", Pending),
            ("Snapchat Ads", Pending),
        ]),
        publishing(2000, &[
            ("Meta (Instagram + Facebook)", Live),
            ("Google Ads (Shopping + Search)", Publishing),
            ("TikTok Ads", Publishing),
            ("Snapchat Ads", Pending),
        ]),
        publishing(2000, &[
            ("Meta (Instagram + Facebook)", Live),
            ("Google Ads (Shopping + Search)", Live),
            ("TikTok Ads", Live),
            ("Snapchat Ads", Publishing),
        ]),
        publishing(1500, &[
            ("Meta (Instagram + Facebook)", Live),
            ("Google Ads (Shopping + Search)", Live),
            ("TikTok Ads", Live),
            ("Snapchat Ads", Live),
        ]),
        // Wrap-up.
        say(1000, PersonaId::Maya, format!(
            "**All platforms are live!** 🎉\n\nYour \"{product_name}\" campaign is \
             now running across 4 platforms. Here's what happens next:\n\n\
             - **Max** (Data Analyst) is monitoring performance in real-time\n\
             - **Kai** (Brand Guardian) will flag any platform review issues\n\
             - You'll get a **daily performance briefing** at 9 AM\n\
             - I'll suggest **optimisations** as data comes in\n\n\
             Your first performance snapshot will be ready in ~2 hours once the \
             platforms start serving. Anything else you need?"
        )),
        ask(400, &[
            ("Create another campaign", "new"),
            ("View campaign dashboard", "dashboard"),
            ("That's all — thanks team!", "done"),
        ]),
    ];

    Script::new(steps)
}

fn analysis(label: &str, value: &str, delta: Option<&str>) -> AnalysisItem {
    AnalysisItem {
        label: label.to_string(),
        value: value.to_string(),
        delta: delta.map(str::to_string),
    }
}

fn image(url: &str, caption: &str) -> CreativeImage {
    CreativeImage {
        url: url.to_string(),
        caption: caption.to_string(),
    }
}

fn channel(name: &str, budget: &str, formats: &str, audience: &str) -> ChannelPlan {
    ChannelPlan {
        name: name.to_string(),
        budget: budget.to_string(),
        formats: formats.to_string(),
        audience: audience.to_string(),
    }
}

// ─── Seed extraction ───────────────────────────────────────────────────────

const LEAD_IN_WORDS: [&str; 4] = ["for", "launch", "campaign", "promote"];
const ARTICLE_WORDS: [&str; 4] = ["our", "the", "a", "new"];
const MAX_NAME_LEN: usize = 60;

/// Pulls a product name out of a free-text campaign prompt.
///
/// Takes the text after the last lead-in word ("for", "launch", etc.),
/// drops leading articles, stops at the first dash or sentence end, and
/// title-cases the result. Falls back to a generic name when nothing
/// usable is found.
pub fn extract_product_name(prompt: &str) -> String {
    let words: Vec<&str> = prompt.split_whitespace().collect();

    let lead_in = words.iter().rposition(|w| {
        let w = w.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase();
        LEAD_IN_WORDS.contains(&w.as_str())
    });

    let Some(pos) = lead_in else {
        return "New Product Campaign".to_string();
    };

    let mut rest = &words[pos + 1..];
    while let Some(first) = rest.first() {
        if ARTICLE_WORDS.contains(&first.to_lowercase().as_str()) {
            rest = &rest[1..];
        } else {
            break;
        }
    }

    let mut name_words: Vec<String> = Vec::new();
    for word in rest {
        if matches!(*word, "-" | "—" | "–") {
            break;
        }
        let trimmed = word.trim_end_matches(|c: char| matches!(c, '.' | ',' | '!' | '?'));
        if !trimmed.is_empty() {
            name_words.push(title_case(trimmed));
        }
        if trimmed.len() != word.len() {
            break;
        }
    }

    if name_words.is_empty() {
        return "New Product Campaign".to_string();
    }

    let name = name_words.join(" ");
    name.chars().take(MAX_NAME_LEN).collect()
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_is_deterministic_for_a_seed() {
        let a = build_script("Hillwalker 2.0");
        let b = build_script("Hillwalker 2.0");
        assert_eq!(a.len(), b.len());
        for (x, y) in a.steps().iter().zip(b.steps()) {
            assert_eq!(x.message, y.message);
            assert_eq!(x.delay, y.delay);
            assert_eq!(x.gate, y.gate);
        }
    }

    #[test]
    fn seed_is_substituted_into_persona_text() {
        let script = build_script("Wandermoor Smock");
        let first = script.get(0).unwrap();
        match &first.message {
            Message::PersonaText { text, .. } => assert!(text.contains("Wandermoor Smock")),
            other => panic!("expected persona text, got {other:?}"),
        }
    }

    #[test]
    fn gated_steps_carry_their_choice_value() {
        let script = build_script("Test");
        let gates: Vec<&str> = script
            .steps()
            .iter()
            .filter_map(|s| s.gate.as_ref().map(ChoiceValue::as_str))
            .collect();
        assert_eq!(gates, vec!["conversions", "30000", "all_images", "build", "publish"]);
    }

    #[test]
    fn every_choice_set_is_preceded_by_a_persona_step() {
        // A choice set with no persona step before it would double-pause.
        let script = build_script("Test");
        let mut last_was_choice = false;
        for step in script.steps() {
            let is_choice = step.message.is_choice_set();
            assert!(!(is_choice && last_was_choice), "back-to-back choice sets");
            last_was_choice = is_choice;
        }
    }

    #[test]
    fn delay_scaling_multiplies_every_step() {
        let script = build_script("Test").scale_delays(0.5);
        assert_eq!(
            script.get(0).unwrap().delay,
            std::time::Duration::from_millis(400)
        );
    }

    #[test]
    fn extracts_product_name_from_prompt() {
        let name = extract_product_name(
            "I want to launch a campaign for our new Berghaus Hillwalker 2.0 \
             Gore-Tex jacket — it's a 3-in-1 waterproof jacket",
        );
        assert_eq!(name, "Berghaus Hillwalker 2.0 Gore-Tex Jacket");
    }

    #[test]
    fn extraction_stops_at_sentence_end() {
        let name = extract_product_name("Promote the Extrem Smock. Focus on mountaineers.");
        assert_eq!(name, "Extrem Smock");
    }

    #[test]
    fn extraction_falls_back_without_lead_in() {
        assert_eq!(extract_product_name("hello there"), "New Product Campaign");
    }
}
