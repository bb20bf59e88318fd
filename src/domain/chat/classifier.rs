//! Keyword scoring used by the rule-based responder.
//!
//! Both tables are ordered and the order is part of the behaviour:
//! intents are first-match-wins, and category ties go to the earlier row.

use crate::domain::ticket::Category;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    ReportIssue,
    TrackIssue,
    Faq,
    ContactAdmin,
    Troubleshooting,
}

impl Intent {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReportIssue => "report_issue",
            Self::TrackIssue => "track_issue",
            Self::Faq => "faq",
            Self::ContactAdmin => "contact_admin",
            Self::Troubleshooting => "troubleshooting",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const INTENT_KEYWORDS: &[(Intent, &[&str])] = &[
    (
        Intent::ReportIssue,
        &["report", "submit", "file", "lodge", "complaint", "issue", "problem", "broken", "not working"],
    ),
    (
        Intent::TrackIssue,
        &["status", "track", "update", "my complaint", "my issue", "last complaint", "progress"],
    ),
    (
        Intent::Faq,
        &["how", "what", "when", "where", "who", "why", "faq", "help", "guide"],
    ),
    (
        Intent::ContactAdmin,
        &["contact", "admin", "speak", "talk", "human", "representative"],
    ),
    (
        Intent::Troubleshooting,
        &["fix", "troubleshoot", "solve", "myself", "before reporting", "steps"],
    ),
];

const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Electrical,
        &["light", "bulb", "power", "electricity", "outlet", "switch", "fuse", "wiring"],
    ),
    (
        Category::Plumbing,
        &["leak", "pipe", "water", "toilet", "faucet", "drain", "flood", "plumbing"],
    ),
    (
        Category::Network,
        &["wifi", "internet", "network", "connection", "router", "slow", "down"],
    ),
    (
        Category::Cleanliness,
        &["dirty", "clean", "trash", "garbage", "spill", "mess", "sanitation"],
    ),
    (
        Category::ClassroomEquipment,
        &["projector", "whiteboard", "computer", "desk", "chair", "ac", "equipment"],
    ),
];

pub fn detect_intent(text: &str) -> Intent {
    let lowered = text.trim().to_lowercase();
    INTENT_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lowered.contains(kw)))
        .map_or(Intent::Faq, |(intent, _)| *intent)
}

pub fn suggest_category(text: &str) -> Category {
    let lowered = text.to_lowercase();
    let mut best = (Category::Other, 0usize);
    for (category, keywords) in CATEGORY_KEYWORDS {
        let score = keywords.iter().filter(|kw| lowered.contains(*kw)).count();
        if score > best.1 {
            best = (*category, score);
        }
    }
    best.0
}
