//! Command domain entity
//!
//! An order ticket (a tab) opened against a business. Commands are created and
//! closed by the point-of-sale flow; this service only reads them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::business::BusinessId;

/// Unique identifier for a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommandId(pub Uuid);

impl CommandId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CommandId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for CommandId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CommandId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An open or closed order ticket
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Command {
    pub id: CommandId,
    pub business_id: BusinessId,
    /// Table or tab label shown to staff
    pub table: Option<String>,
    pub closed: bool,
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
}

impl Command {
    pub fn is_open(&self) -> bool {
        !self.closed
    }
}

/// Filter for listing a business's commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandFilter {
    pub business_id: BusinessId,
    /// `None` returns both open and closed commands
    pub closed: Option<bool>,
}

impl CommandFilter {
    pub fn matches(&self, command: &Command) -> bool {
        command.business_id == self.business_id
            && self.closed.map_or(true, |closed| command.closed == closed)
    }
}
