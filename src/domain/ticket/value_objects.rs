// src/domain/ticket/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

pub const MAX_TITLE_CHARS: usize = 200;
pub const MAX_BUILDING_CHARS: usize = 100;
pub const MAX_ROOM_CHARS: usize = 50;
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;
pub const ALLOWED_IMAGE_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/gif", "image/webp"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TicketId(i64);

impl TicketId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("ticket id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<TicketId> for i64 {
    fn from(value: TicketId) -> Self {
        value.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketTitle(String);

impl TicketTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        if value.chars().count() > MAX_TITLE_CHARS {
            return Err(DomainError::Validation(format!(
                "title must be at most {MAX_TITLE_CHARS} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketDescription(String);

impl TicketDescription {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("description cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    building: String,
    room: String,
}

impl Location {
    pub fn new(building: impl Into<String>, room: impl Into<String>) -> DomainResult<Self> {
        let building = building.into().trim().to_string();
        let room = room.into().trim().to_string();
        if building.chars().count() > MAX_BUILDING_CHARS {
            return Err(DomainError::Validation(format!(
                "building must be at most {MAX_BUILDING_CHARS} characters"
            )));
        }
        if room.chars().count() > MAX_ROOM_CHARS {
            return Err(DomainError::Validation(format!(
                "room must be at most {MAX_ROOM_CHARS} characters"
            )));
        }
        Ok(Self { building, room })
    }

    pub fn building(&self) -> &str {
        &self.building
    }

    pub fn room(&self) -> &str {
        &self.room
    }
}

/// Metadata of an uploaded photo. The bytes themselves live in external media storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    file_name: String,
    content_type: String,
    size_bytes: u64,
}

impl ImageAttachment {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        size_bytes: u64,
    ) -> DomainResult<Self> {
        let file_name = file_name.into();
        let content_type = content_type.into().to_ascii_lowercase();
        if file_name.trim().is_empty() {
            return Err(DomainError::Validation("image file name cannot be empty".into()));
        }
        if !ALLOWED_IMAGE_TYPES.contains(&content_type.as_str()) {
            return Err(DomainError::Validation(
                "please upload a valid image (JPEG, PNG, GIF, WebP)".into(),
            ));
        }
        if size_bytes > MAX_IMAGE_BYTES {
            return Err(DomainError::Validation("image size must be under 5MB".into()));
        }
        Ok(Self {
            file_name,
            content_type,
            size_bytes,
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub const fn size_bytes(&self) -> u64 {
        self.size_bytes
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Electrical,
    Network,
    Cleanliness,
    Plumbing,
    ClassroomEquipment,
    Other,
}

impl Category {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Electrical => "electrical",
            Self::Network => "network",
            Self::Cleanliness => "cleanliness",
            Self::Plumbing => "plumbing",
            Self::ClassroomEquipment => "classroom_equipment",
            Self::Other => "other",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Electrical => "Electrical",
            Self::Network => "Network",
            Self::Cleanliness => "Cleanliness",
            Self::Plumbing => "Plumbing",
            Self::ClassroomEquipment => "Classroom Equipment",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "electrical" => Ok(Self::Electrical),
            "network" => Ok(Self::Network),
            "cleanliness" => Ok(Self::Cleanliness),
            "plumbing" => Ok(Self::Plumbing),
            "classroom_equipment" => Ok(Self::ClassroomEquipment),
            "other" => Ok(Self::Other),
            other => Err(DomainError::Validation(format!("unknown category '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Priority {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            other => Err(DomainError::Validation(format!("unknown priority '{other}'"))),
        }
    }
}

/// Lifecycle state of a ticket.
///
/// The only legal moves are forward: `pending -> in_progress`,
/// `pending -> resolved` and `in_progress -> resolved`. `resolved` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    #[default]
    Pending,
    InProgress,
    Resolved,
}

impl TicketStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Resolved)
    }

    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::InProgress | Self::Resolved) | (Self::InProgress, Self::Resolved)
        )
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            other => Err(DomainError::Validation(format!("unknown status '{other}'"))),
        }
    }
}
