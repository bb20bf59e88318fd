// src/domain/chat/services.rs
use std::sync::Arc;

use tracing::warn;

use crate::domain::chat::classifier::{Intent, detect_intent, suggest_category};
use crate::domain::chat::faq::{BUILTIN_ANSWERS, NOT_SURE_ANSWER};
use crate::domain::chat::repository::FaqRepository;
use crate::domain::ticket::TicketReadRepository;
use crate::domain::user::UserId;

const EMPTY_MESSAGE_ANSWER: &str = "Please type a message.";
const NO_TICKETS_ANSWER: &str =
    "You haven't reported any issues yet. Go to Submit Issue to report one.";
const CONTACT_ADMIN_ANSWER: &str = "To contact admin, please use the Contact or Help section, or email your campus admin. You can also check your issue status in the Issues dashboard.";
const TROUBLESHOOTING_ANSWER: &str = "Before reporting: 1) Check if it's a simple fix (e.g., restart device for WiFi). 2) Note the exact location. 3) Take a photo if safe. If the problem persists, submit an issue with these details.";

/// Deterministic responder used when no remote backend produced an answer.
/// It always yields some text; lookup failures degrade to the generic answer.
pub struct RuleBasedResponder {
    tickets: Arc<dyn TicketReadRepository>,
    faqs: Arc<dyn FaqRepository>,
}

impl RuleBasedResponder {
    pub fn new(tickets: Arc<dyn TicketReadRepository>, faqs: Arc<dyn FaqRepository>) -> Self {
        Self { tickets, faqs }
    }

    pub async fn respond(&self, user: UserId, message: &str) -> String {
        let message = message.trim();
        if message.is_empty() {
            return EMPTY_MESSAGE_ANSWER.to_string();
        }

        match detect_intent(message) {
            Intent::ReportIssue => {
                let category = suggest_category(message);
                format!(
                    "To report this issue, go to **Submit Issue** from the menu. Based on your description, I suggest category: **{}**. Fill in the form and upload a photo if possible.",
                    category.display_name()
                )
            }
            Intent::TrackIssue => self.latest_ticket_answer(user).await,
            Intent::ContactAdmin => CONTACT_ADMIN_ANSWER.to_string(),
            Intent::Troubleshooting => TROUBLESHOOTING_ANSWER.to_string(),
            Intent::Faq => self.faq_answer(message).await,
        }
    }

    async fn latest_ticket_answer(&self, user: UserId) -> String {
        match self.tickets.latest_reported_by(user).await {
            Ok(Some(ticket)) => format!(
                "Your latest issue: **{}** — Status: **{}**. View full details in the Issues section.",
                ticket.title.as_str(),
                ticket.status.display_name()
            ),
            Ok(None) => NO_TICKETS_ANSWER.to_string(),
            Err(err) => {
                warn!(error = %err, user_id = %user, "latest ticket lookup failed");
                NOT_SURE_ANSWER.to_string()
            }
        }
    }

    async fn faq_answer(&self, message: &str) -> String {
        let lowered = message.to_lowercase();

        match self.faqs.list_active().await {
            Ok(entries) => {
                if let Some(entry) = entries.iter().find(|entry| entry.matches(&lowered)) {
                    return entry.answer.clone();
                }
            }
            Err(err) => warn!(error = %err, "faq lookup failed, using built-in answers"),
        }

        BUILTIN_ANSWERS
            .iter()
            .find(|(keys, _)| keys.iter().any(|k| lowered.contains(k)))
            .map_or_else(|| NOT_SURE_ANSWER.to_string(), |(_, answer)| (*answer).to_string())
    }
}
