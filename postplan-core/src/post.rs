//! The post record and its option sets.
//!
//! `PostRecord` keeps `platform`, `type` and `status` as open strings: the
//! plan file is hand-editable and may carry values outside the known sets.
//! The enums below are the closed sets the generator draws from; content
//! synthesis matches record strings back against them and silently degrades
//! when nothing matches (see `content`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default posting time for generated records.
pub const DEFAULT_TIME: &str = "09:00";

/// A single scheduled post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    /// Calendar date, YYYY-MM-DD
    pub date: String,
    /// Wall-clock time of day, HH:MM
    #[serde(default = "default_time")]
    pub time: String,
    pub platform: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub title: String,
    pub body: String,
    /// Space-separated tokens
    pub hashtags: String,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_time() -> String {
    DEFAULT_TIME.to_string()
}

fn default_status() -> String {
    PostStatus::Draft.as_str().to_string()
}

/// Target social network for a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    Vk,
    Telegram,
    Instagram,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Vk, Platform::Telegram, Platform::Instagram];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Vk => "VK",
            Platform::Telegram => "Telegram",
            Platform::Instagram => "Instagram",
        }
    }

    /// Exact-label lookup. `None` for anything outside the set.
    pub fn parse(s: &str) -> Option<Platform> {
        Platform::ALL.into_iter().find(|p| p.as_str() == s)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content category of a post, driving title and hashtag templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    Advice,
    ListingReview,
    DealStory,
    MarketAnalysis,
    BuyerFaq,
    MortgageRates,
    DistrictComparison,
}

impl ContentType {
    pub const ALL: [ContentType; 7] = [
        ContentType::Advice,
        ContentType::ListingReview,
        ContentType::DealStory,
        ContentType::MarketAnalysis,
        ContentType::BuyerFaq,
        ContentType::MortgageRates,
        ContentType::DistrictComparison,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Advice => "Advice",
            ContentType::ListingReview => "Listing Review",
            ContentType::DealStory => "Deal Story",
            ContentType::MarketAnalysis => "Market Analysis",
            ContentType::BuyerFaq => "Buyer FAQ",
            ContentType::MortgageRates => "Mortgage/Rates",
            ContentType::DistrictComparison => "District Comparison",
        }
    }

    /// Exact-label lookup. `None` for anything outside the set.
    pub fn parse(s: &str) -> Option<ContentType> {
        ContentType::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Voice style for generated post bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    Expert,
    Friendly,
    LightHumor,
}

impl Tone {
    pub const ALL: [Tone; 3] = [Tone::Expert, Tone::Friendly, Tone::LightHumor];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Expert => "Expert",
            Tone::Friendly => "Friendly",
            Tone::LightHumor => "Light humor",
        }
    }

    pub fn parse(s: &str) -> Option<Tone> {
        Tone::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Workflow status of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostStatus {
    Draft,
    Ready,
    Published,
}

impl PostStatus {
    pub const ALL: [PostStatus; 3] = [PostStatus::Draft, PostStatus::Ready, PostStatus::Published];

    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "Draft",
            PostStatus::Ready => "Ready",
            PostStatus::Published => "Published",
        }
    }

    pub fn parse(s: &str) -> Option<PostStatus> {
        PostStatus::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
