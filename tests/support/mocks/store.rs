// tests/support/mocks/store.rs
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use campuscare_core::domain::{
    audit::{AuditEntry, AuditLogRepository, AuditRecord, NewAuditEntry},
    chat::{ChatExchange, ChatExchangeRepository, FaqEntry, FaqRepository, NewChatExchange},
    errors::{DomainError, DomainResult},
    notification::{NewNotification, Notification, NotificationRepository},
    ticket::{
        AssignmentUpdate, NewTicket, StatusCounts, Ticket, TicketFilter, TicketId,
        TicketReadRepository, TicketScope, TicketTransition, TicketWriteRepository,
    },
    user::{User, UserId, UserRepository},
};

#[derive(Default)]
struct State {
    tickets: BTreeMap<i64, Ticket>,
    audit: Vec<AuditEntry>,
    notifications: Vec<Notification>,
    exchanges: Vec<ChatExchange>,
    faqs: Vec<FaqEntry>,
    users: HashMap<i64, User>,
    next_id: i64,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn push_audit(&mut self, ticket_id: TicketId, record: AuditRecord) -> AuditEntry {
        let entry = AuditEntry::from_record(self.next_id(), ticket_id, record);
        self.audit.push(entry.clone());
        entry
    }
}

/// In-memory stand-in for every repository, sharing one lock so that multi-row
/// writes are atomic the way the Postgres transactions are.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
    audit_down: AtomicBool,
    notifications_down: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Audit rows fail to persist. Ticket writes carry their audit row, so they
    /// roll back as a whole.
    pub fn fail_audit_writes(&self, down: bool) {
        self.audit_down.store(down, Ordering::SeqCst);
    }

    pub fn fail_notification_writes(&self, down: bool) {
        self.notifications_down.store(down, Ordering::SeqCst);
    }

    fn audit_available(&self) -> DomainResult<()> {
        if self.audit_down.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("audit log unavailable".into()));
        }
        Ok(())
    }

    pub fn add_user(&self, user: User) {
        let mut state = self.state.lock().unwrap();
        state.users.insert(user.id.0, user);
    }

    pub fn add_faq(&self, question: &str, answer: &str, keywords: &str, is_active: bool) {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        state.faqs.push(FaqEntry {
            id,
            question: question.into(),
            answer: answer.into(),
            keywords: keywords.into(),
            category: "general".into(),
            is_active,
        });
    }

    pub fn ticket(&self, id: i64) -> Option<Ticket> {
        self.state.lock().unwrap().tickets.get(&id).cloned()
    }

    pub fn audit_for(&self, ticket_id: i64) -> Vec<AuditEntry> {
        self.state
            .lock()
            .unwrap()
            .audit
            .iter()
            .filter(|entry| i64::from(entry.ticket_id) == ticket_id)
            .cloned()
            .collect()
    }

    pub fn notifications_for(&self, user_id: i64) -> Vec<Notification> {
        self.state
            .lock()
            .unwrap()
            .notifications
            .iter()
            .filter(|n| n.recipient_id.0 == user_id)
            .cloned()
            .collect()
    }

    pub fn ticket_count(&self) -> usize {
        self.state.lock().unwrap().tickets.len()
    }

    pub fn exchange_count(&self) -> usize {
        self.state.lock().unwrap().exchanges.len()
    }
}

fn newest_first<T>(items: &mut [T], key: impl Fn(&T) -> (chrono::DateTime<chrono::Utc>, i64)) {
    items.sort_by(|a, b| key(b).cmp(&key(a)));
}

#[async_trait]
impl TicketWriteRepository for InMemoryStore {
    async fn insert(&self, ticket: NewTicket, audit: AuditRecord) -> DomainResult<Ticket> {
        self.audit_available()?;
        let mut state = self.state.lock().unwrap();
        let id = TicketId::new(state.next_id())?;
        let created = Ticket {
            id,
            title: ticket.title,
            description: ticket.description,
            category: ticket.category,
            priority: ticket.priority,
            status: audit.new_status,
            location: ticket.location,
            image: ticket.image,
            reporter_id: ticket.reporter_id,
            assignee_id: None,
            resolution_notes: String::new(),
            resolved_at: None,
            created_at: ticket.created_at,
            updated_at: ticket.created_at,
        };
        state.tickets.insert(i64::from(id), created.clone());
        state.push_audit(id, audit);
        Ok(created)
    }

    async fn apply_transition(&self, transition: TicketTransition) -> DomainResult<Ticket> {
        self.audit_available()?;
        let mut state = self.state.lock().unwrap();
        let ticket = state
            .tickets
            .get_mut(&i64::from(transition.id))
            .ok_or_else(|| DomainError::NotFound("ticket not found".into()))?;
        if ticket.status != transition.expected_status
            || ticket.assignee_id != transition.expected_assignee
        {
            return Err(DomainError::Conflict("ticket changed underneath".into()));
        }
        ticket.status = transition.new_status;
        ticket.resolution_notes = transition.resolution_notes;
        ticket.resolved_at = transition.resolved_at;
        ticket.updated_at = transition.updated_at;
        let updated = ticket.clone();
        state.push_audit(transition.id, transition.audit);
        Ok(updated)
    }

    async fn update_assignment(&self, update: AssignmentUpdate) -> DomainResult<Ticket> {
        let mut state = self.state.lock().unwrap();
        let ticket = state
            .tickets
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("ticket not found".into()))?;
        if ticket.updated_at != update.original_updated_at {
            return Err(DomainError::Conflict("ticket was modified".into()));
        }
        ticket.assignee_id = update.assignee_id;
        ticket.priority = update.priority;
        ticket.updated_at = update.updated_at;
        Ok(ticket.clone())
    }
}

#[async_trait]
impl TicketReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: TicketId) -> DomainResult<Option<Ticket>> {
        Ok(self.state.lock().unwrap().tickets.get(&i64::from(id)).cloned())
    }

    async fn latest_reported_by(&self, reporter: UserId) -> DomainResult<Option<Ticket>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .tickets
            .values()
            .filter(|t| t.reporter_id == reporter)
            .max_by_key(|t| (t.created_at, i64::from(t.id)))
            .cloned())
    }

    async fn list(&self, filter: &TicketFilter) -> DomainResult<Vec<Ticket>> {
        let state = self.state.lock().unwrap();
        let mut tickets: Vec<Ticket> = state
            .tickets
            .values()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect();
        newest_first(&mut tickets, |t| (t.created_at, i64::from(t.id)));
        tickets.truncate(filter.limit as usize);
        Ok(tickets)
    }

    async fn count_by_status(&self, scope: TicketScope) -> DomainResult<StatusCounts> {
        let state = self.state.lock().unwrap();
        let mut counts = StatusCounts::default();
        for ticket in state.tickets.values().filter(|t| scope.contains(t)) {
            counts.record(ticket.status, 1);
        }
        Ok(counts)
    }
}

#[async_trait]
impl AuditLogRepository for InMemoryStore {
    async fn append(&self, entry: NewAuditEntry) -> DomainResult<AuditEntry> {
        self.audit_available()?;
        let mut state = self.state.lock().unwrap();
        Ok(state.push_audit(entry.ticket_id, entry.record))
    }

    async fn history(&self, ticket_id: TicketId) -> DomainResult<Vec<AuditEntry>> {
        let state = self.state.lock().unwrap();
        let mut entries: Vec<AuditEntry> = state
            .audit
            .iter()
            .filter(|e| e.ticket_id == ticket_id)
            .cloned()
            .collect();
        newest_first(&mut entries, |e| (e.created_at, e.id));
        Ok(entries)
    }
}

#[async_trait]
impl NotificationRepository for InMemoryStore {
    async fn insert(&self, notification: NewNotification) -> DomainResult<Notification> {
        if self.notifications_down.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("notification store unavailable".into()));
        }
        let mut state = self.state.lock().unwrap();
        let created = Notification {
            id: state.next_id(),
            recipient_id: notification.recipient_id,
            title: notification.title,
            body: notification.body,
            link: notification.link,
            is_read: false,
            created_at: notification.created_at,
        };
        state.notifications.push(created.clone());
        Ok(created)
    }

    async fn list_for_recipient(
        &self,
        recipient: UserId,
        limit: u32,
    ) -> DomainResult<Vec<Notification>> {
        let state = self.state.lock().unwrap();
        let mut items: Vec<Notification> = state
            .notifications
            .iter()
            .filter(|n| n.is_addressed_to(recipient))
            .cloned()
            .collect();
        newest_first(&mut items, |n| (n.created_at, n.id));
        items.truncate(limit as usize);
        Ok(items)
    }

    async fn unread_count(&self, recipient: UserId) -> DomainResult<u64> {
        let state = self.state.lock().unwrap();
        Ok(state
            .notifications
            .iter()
            .filter(|n| n.is_addressed_to(recipient) && !n.is_read)
            .count() as u64)
    }

    async fn mark_read(&self, id: i64, recipient: UserId) -> DomainResult<Option<Notification>> {
        let mut state = self.state.lock().unwrap();
        Ok(state
            .notifications
            .iter_mut()
            .find(|n| n.id == id && n.is_addressed_to(recipient))
            .map(|n| {
                n.is_read = true;
                n.clone()
            }))
    }
}

#[async_trait]
impl ChatExchangeRepository for InMemoryStore {
    async fn append(&self, exchange: NewChatExchange) -> DomainResult<ChatExchange> {
        let mut state = self.state.lock().unwrap();
        let stored = ChatExchange {
            id: state.next_id(),
            user_id: exchange.user_id,
            message: exchange.message,
            response: exchange.response,
            backend: exchange.backend,
            created_at: exchange.created_at,
        };
        state.exchanges.push(stored.clone());
        Ok(stored)
    }

    async fn recent_for_user(&self, user: UserId, limit: u32) -> DomainResult<Vec<ChatExchange>> {
        let state = self.state.lock().unwrap();
        let mut items: Vec<ChatExchange> = state
            .exchanges
            .iter()
            .filter(|e| e.user_id == user)
            .cloned()
            .collect();
        newest_first(&mut items, |e| (e.created_at, e.id));
        items.truncate(limit as usize);
        Ok(items)
    }
}

#[async_trait]
impl FaqRepository for InMemoryStore {
    async fn list_active(&self) -> DomainResult<Vec<FaqEntry>> {
        let state = self.state.lock().unwrap();
        let mut entries: Vec<FaqEntry> =
            state.faqs.iter().filter(|f| f.is_active).cloned().collect();
        entries.sort_by(|a, b| a.question.cmp(&b.question));
        Ok(entries)
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.state.lock().unwrap().users.get(&id.0).cloned())
    }
}
