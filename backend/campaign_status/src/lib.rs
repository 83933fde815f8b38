//! # Campaign Status
//!
//! Derives the lifecycle of a DAO token presale ("campaign") from a snapshot
//! of its window, goal and balance plus the on-chain finalization flags.
//!
//! | Concern        | Entry Point(s)                                        |
//! |----------------|-------------------------------------------------------|
//! | Ingestion      | [`raw::decode_campaign`], [`raw::RawCampaign`], [`raw::RawExecutionFlags`] |
//! | Status         | [`derive_status`], [`status_for_phase`], [`WindowPhase::at`] |
//! | Goal progress  | [`percent_of_goal`], [`percent_of_goal_with_precision`] |
//! | Countdowns     | [`time_remaining`], [`time_until_start`], `format_*` |
//! | Card view      | [`CampaignSummary::evaluate`]                         |
//! | Configuration  | [`StatusConfig::from_env`], [`StatusConfig::load`]    |
//!
//! ## Architecture
//!
//! External data is validated once in [`raw`]; past that boundary a
//! [`CampaignRecord`] always has `start_time <= end_time` and non-negative
//! amounts, and [`ExecutionFlags`] are definite booleans. The [`engine`] is
//! a set of pure functions taking an explicit `now`: no clock reads, no
//! shared state, no caching. The only wall-clock access lives in
//! [`clock::SystemClock`].

pub mod clock;
pub mod config;
pub mod engine;
pub mod errors;
pub mod format;
pub mod raw;
pub mod summary;
pub mod types;

#[cfg(test)]
mod test_status;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::StatusConfig;
pub use engine::{
    derive_status, format_time_remaining, format_time_until_start, is_ending_soon, is_new,
    percent_of_goal, percent_of_goal_with_precision, status_for_phase, time_remaining,
    time_until_start,
};
pub use errors::{Result, StatusError};
pub use format::{format_duration_short, format_units, Percent};
pub use summary::{CampaignSummary, CardAction};
pub use types::{CampaignRecord, CampaignStatus, ExecutionFlags, WindowPhase};
