use std::fmt;

use abi::{PolicyConfig, ReservationStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::policy::{can_approve_at, can_deny_at, can_edit_with, can_return_to_handling_at};

/// A staff-side transition a reservation may go through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Approve,
    Deny,
    ReturnToHandling,
    Edit,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::Approve,
        Action::Deny,
        Action::ReturnToHandling,
        Action::Edit,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Action::Approve => "approve",
            Action::Deny => "deny",
            Action::ReturnToHandling => "return_to_handling",
            Action::Edit => "edit",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which actions one reservation allows, all decided against the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationActions {
    pub approve: bool,
    pub deny: bool,
    pub return_to_handling: bool,
    pub edit: bool,
    pub evaluated_at: DateTime<Utc>,
}

impl ReservationActions {
    pub fn evaluate(
        status: ReservationStatus,
        end: DateTime<Utc>,
        now: DateTime<Utc>,
        config: &PolicyConfig,
    ) -> Self {
        Self {
            approve: can_approve_at(status, end, now),
            deny: can_deny_at(status, end, now),
            return_to_handling: can_return_to_handling_at(status, end, now),
            edit: can_edit_with(status, end, now, config),
            evaluated_at: now,
        }
    }

    pub fn permits(&self, action: Action) -> bool {
        match action {
            Action::Approve => self.approve,
            Action::Deny => self.deny,
            Action::ReturnToHandling => self.return_to_handling,
            Action::Edit => self.edit,
        }
    }

    /// Permitted actions, in `Action::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = Action> + '_ {
        Action::ALL.into_iter().filter(|a| self.permits(*a))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}
