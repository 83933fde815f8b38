//! # Types
//!
//! Data structures shared by the engine, the raw boundary and the summary.
//!
//! ## Design decisions
//!
//! ### Window phase vs. lifecycle status
//!
//! [`WindowPhase`] is the position of `now` relative to the presale window.
//! It is resolved exactly once per evaluation by [`WindowPhase::at`], and
//! every time-sensitive predicate goes through it.
//!
//! [`CampaignStatus`] is the lifecycle phase reported to callers. It is a
//! derived value: recomputed on every evaluation, never stored.
//!
//! ### Status as a forward-only machine
//!
//! ```text
//! Pending ──► Active ──► Success ──► Executed
//!                   └──► Failed
//! ```
//!
//! Observations may skip states (a campaign first seen after its close is
//! reported as `Success`, `Failed` or `Executed` directly) but never move
//! backwards. `Executed` is terminal.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, StatusError};

/// Immutable snapshot of a presale campaign.
///
/// Timestamps are Unix seconds. Amounts are in the funding asset's smallest
/// unit (wei for ETH). Only constructible through [`CampaignRecord::new`] or
/// the raw boundary, so a record in hand always has a valid window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CampaignRecord {
    pub id: String,
    pub dao_id: String,
    pub share_token_symbol: Option<String>,
    start_time: u64,
    end_time: u64,
    funding_goal: u128,
    current_balance: u128,
}

impl CampaignRecord {
    /// Build a record, rejecting windows that close before they open.
    pub fn new(
        start_time: u64,
        end_time: u64,
        funding_goal: u128,
        current_balance: u128,
    ) -> Result<Self> {
        if end_time < start_time {
            return Err(StatusError::InvalidWindow {
                start: start_time,
                end: end_time,
            });
        }
        Ok(CampaignRecord {
            id: String::new(),
            dao_id: String::new(),
            share_token_symbol: None,
            start_time,
            end_time,
            funding_goal,
            current_balance,
        })
    }

    pub fn with_ids(mut self, id: impl Into<String>, dao_id: impl Into<String>) -> Self {
        self.id = id.into();
        self.dao_id = dao_id.into();
        self
    }

    pub fn with_share_token_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.share_token_symbol = Some(symbol.into());
        self
    }

    pub fn start_time(&self) -> u64 {
        self.start_time
    }

    pub fn end_time(&self) -> u64 {
        self.end_time
    }

    pub fn funding_goal(&self) -> u128 {
        self.funding_goal
    }

    pub fn current_balance(&self) -> u128 {
        self.current_balance
    }

    /// `true` when the raised balance meets or exceeds the goal.
    ///
    /// For callers that attest `goal_achieved` from the record instead of
    /// from the chain.
    pub fn goal_reached(&self) -> bool {
        self.current_balance >= self.funding_goal
    }
}

/// Privileged finalization state, as read from the chain.
///
/// Unknown values are coalesced to `false` before they get here; the engine
/// only ever sees definite booleans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExecutionFlags {
    pub can_execute: bool,
    pub executed: bool,
    pub goal_achieved: bool,
}

impl ExecutionFlags {
    pub fn new(executed: bool, can_execute: bool, goal_achieved: bool) -> Self {
        ExecutionFlags {
            can_execute,
            executed,
            goal_achieved,
        }
    }

    /// Coalesce possibly-unavailable flags, treating unknown as `false`.
    pub fn coalesce(
        executed: Option<bool>,
        can_execute: Option<bool>,
        goal_achieved: Option<bool>,
    ) -> Self {
        ExecutionFlags::new(
            executed.unwrap_or(false),
            can_execute.unwrap_or(false),
            goal_achieved.unwrap_or(false),
        )
    }
}

/// Where `now` falls relative to the half-open window `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowPhase {
    /// `now < start`
    ComingSoon,
    /// `start <= now < end`
    Active,
    /// `now >= end`
    Ended,
}

impl WindowPhase {
    /// Resolve the record against `now`. Boundary instants belong to the later phase.
    pub fn at(record: &CampaignRecord, now: u64) -> Self {
        if now < record.start_time {
            WindowPhase::ComingSoon
        } else if now < record.end_time {
            WindowPhase::Active
        } else {
            WindowPhase::Ended
        }
    }

    pub fn is_coming_soon(self) -> bool {
        self == WindowPhase::ComingSoon
    }

    pub fn is_active(self) -> bool {
        self == WindowPhase::Active
    }

    pub fn is_ended(self) -> bool {
        self == WindowPhase::Ended
    }
}

/// Lifecycle status of a campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignStatus {
    /// Presale window has not opened yet.
    Pending,
    /// Accepting funds.
    Active,
    /// Window closed with the goal met; finalization not taken yet.
    Success,
    /// Window closed without meeting the goal.
    Failed,
    /// Finalization action performed. Terminal.
    Executed,
}

impl CampaignStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Active => "ACTIVE",
            Self::Success => "SUCCESS",
            Self::Failed => "FAILED",
            Self::Executed => "EXECUTED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Executed)
    }

    /// Whether a later observation may report `next` after `self`.
    ///
    /// Repeating the same status is always allowed. Skipping ahead is allowed
    /// because observations are sampled. `Success` and `Failed` never swap,
    /// `Failed` never reaches `Executed`, and nothing leaves `Executed`.
    pub fn can_transition_to(&self, next: CampaignStatus) -> bool {
        use CampaignStatus::*;

        if *self == next {
            return true;
        }
        matches!(
            (*self, next),
            (Pending, Active)
                | (Pending, Success)
                | (Pending, Failed)
                | (Pending, Executed)
                | (Active, Success)
                | (Active, Failed)
                | (Active, Executed)
                | (Success, Executed)
        )
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
