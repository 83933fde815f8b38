//! Campaign status engine.
//!
//! Pure functions over a [`CampaignRecord`], [`ExecutionFlags`] and an
//! explicit `now` (Unix seconds). Nothing here reads a clock, holds state or
//! caches results, so every function is safe to call from any thread.

use std::time::Duration;

use tracing::{trace, warn};

use crate::config::StatusConfig;
use crate::format::{format_duration_short, pow10, Percent};
use crate::types::{CampaignRecord, CampaignStatus, ExecutionFlags, WindowPhase};

/// Derive the lifecycle status of `record` at `now`.
///
/// The window is resolved once via [`WindowPhase::at`] and handed to
/// [`status_for_phase`].
pub fn derive_status(record: &CampaignRecord, now: u64, flags: ExecutionFlags) -> CampaignStatus {
    let phase = WindowPhase::at(record, now);
    let status = status_for_phase(phase, flags);
    trace!(
        campaign = %record.id,
        now,
        ?phase,
        ?flags,
        %status,
        "derived campaign status"
    );
    status
}

/// Map an already-resolved window phase and flags to a status.
///
/// Execution flags only count once the window has ended: a campaign cannot be
/// finalized while it is still accepting funds, so an `executed` flag seen
/// earlier (clock skew, stale reads) is ignored. `can_execute` never affects
/// the status.
pub fn status_for_phase(phase: WindowPhase, flags: ExecutionFlags) -> CampaignStatus {
    if flags.executed && !phase.is_ended() {
        warn!(?phase, "ignoring executed flag before the presale window closed");
    }
    match phase {
        WindowPhase::ComingSoon => CampaignStatus::Pending,
        WindowPhase::Active => CampaignStatus::Active,
        WindowPhase::Ended if flags.executed => CampaignStatus::Executed,
        WindowPhase::Ended if flags.goal_achieved => CampaignStatus::Success,
        WindowPhase::Ended => CampaignStatus::Failed,
    }
}

/// Raised balance as a whole percent of the goal, rounded half-up.
///
/// Returns `None` when the goal is zero. Overfunded campaigns report more
/// than 100.
pub fn percent_of_goal(record: &CampaignRecord) -> Option<u128> {
    percent_of_goal_with_precision(record, 0).map(|p| p.scaled)
}

/// Raised balance as a percent of the goal with `precision` fraction digits,
/// rounded half-up. Returns `None` when the goal is zero.
///
/// `precision` above 18 is clamped to 18.
pub fn percent_of_goal_with_precision(record: &CampaignRecord, precision: u32) -> Option<Percent> {
    let goal = record.funding_goal();
    if goal == 0 {
        trace!(campaign = %record.id, "percent of goal undefined for zero goal");
        return None;
    }

    let precision = precision.min(18);
    let scale = 100 * pow10(precision);
    let balance = record.current_balance();

    let whole = (balance / goal).saturating_mul(scale);
    let frac = scaled_fraction(balance % goal, goal, scale);

    Some(Percent {
        scaled: whole.saturating_add(frac),
        precision,
    })
}

/// `round_half_up(rem * scale / goal)` for `rem < goal`, without overflowing.
fn scaled_fraction(rem: u128, goal: u128, scale: u128) -> u128 {
    let (mut rem, mut goal) = (rem, goal);
    // Halving both sides keeps the ratio to well within display precision.
    while rem.checked_mul(scale).is_none() {
        rem >>= 1;
        goal >>= 1;
    }
    let numer = rem * scale;
    let quotient = numer / goal;
    if numer % goal >= goal - goal / 2 {
        quotient + 1
    } else {
        quotient
    }
}

/// Time left until the window closes, floored at zero.
pub fn time_remaining(record: &CampaignRecord, now: u64) -> Duration {
    Duration::from_secs(record.end_time().saturating_sub(now))
}

/// Time left until the window opens, floored at zero.
pub fn time_until_start(record: &CampaignRecord, now: u64) -> Duration {
    Duration::from_secs(record.start_time().saturating_sub(now))
}

/// Compact rendering of [`time_remaining`], e.g. `2d 4h`.
pub fn format_time_remaining(record: &CampaignRecord, now: u64) -> String {
    format_duration_short(time_remaining(record, now))
}

/// Compact rendering of [`time_until_start`], e.g. `35m`.
pub fn format_time_until_start(record: &CampaignRecord, now: u64) -> String {
    format_duration_short(time_until_start(record, now))
}

/// `true` within `config.new_window_secs` after the window opens.
///
/// A presentation hint, not a lifecycle phase.
pub fn is_new(record: &CampaignRecord, now: u64, config: &StatusConfig) -> bool {
    now >= record.start_time() && now - record.start_time() < config.new_window_secs
}

/// `true` while active with at most `config.ending_soon_secs` left.
pub fn is_ending_soon(record: &CampaignRecord, now: u64, config: &StatusConfig) -> bool {
    WindowPhase::at(record, now).is_active()
        && record.end_time() - now <= config.ending_soon_secs
}
