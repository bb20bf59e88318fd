/// One row of the administrator-maintained FAQ table.
#[derive(Debug, Clone)]
pub struct FaqEntry {
    pub id: i64,
    pub question: String,
    pub answer: String,
    /// Comma separated.
    pub keywords: String,
    pub category: String,
    pub is_active: bool,
}

impl FaqEntry {
    pub fn keywords(&self) -> impl Iterator<Item = String> + '_ {
        self.keywords
            .split(',')
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
    }

    /// `lowered` must already be lower-cased.
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords().any(|k| lowered.contains(&k))
    }
}

/// Answers consulted when no FAQ row matches, in priority order.
pub const BUILTIN_ANSWERS: &[(&[&str], &str)] = &[
    (
        &["how to report", "submit issue", "report a problem"],
        "To report an issue, go to Issues > Submit Issue and fill in the form with title, description, category, and location.",
    ),
    (
        &["where to report", "report location"],
        "You can report issues from the Submit Issue page accessible from your dashboard or the navigation menu.",
    ),
    (
        &["how long", "resolution time", "when will it be fixed"],
        "Resolution time depends on priority. Critical issues are addressed first. You can track your issue status in the Issues section.",
    ),
    (
        &["electrical", "lights", "power"],
        "For electrical issues like lights or power, select 'Electrical' as the category when reporting. Include building and room number.",
    ),
    (
        &["plumbing", "leak", "water"],
        "For plumbing issues, select 'Plumbing' as the category. If it's urgent (flooding), mark priority as High or Critical.",
    ),
    (
        &["wifi", "internet", "network"],
        "For WiFi or network issues, select 'Network' category. Try restarting your device before reporting.",
    ),
];

pub const NOT_SURE_ANSWER: &str = "I'm not sure about that. You can submit an issue from the Issues menu, or contact admin for help.";
