//! One-shot evaluation of everything a campaign card shows.
//!
//! [`CampaignSummary::evaluate`] resolves the window once and derives the
//! status, countdown headline, raised/percent labels, the attention flag and
//! which actions the presentation layer should offer. Rendering is left to
//! the caller.

use serde::Serialize;
use tracing::debug;

use crate::clock::Clock;
use crate::config::StatusConfig;
use crate::engine::{
    format_time_remaining, format_time_until_start, is_ending_soon, is_new,
    percent_of_goal_with_precision, status_for_phase,
};
use crate::format::{format_percent_label, format_raised, Percent};
use crate::types::{CampaignRecord, CampaignStatus, ExecutionFlags, WindowPhase};

/// Actions a campaign card may offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardAction {
    /// Contribute to an active presale.
    Buy,
    /// Trade the share token after a successful presale.
    Swap,
    /// Ragequit held shares after a successful presale.
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CampaignSummary {
    pub campaign_id: String,
    pub now: u64,
    pub phase: WindowPhase,
    pub status: CampaignStatus,
    /// `Presale Ends in ...` / `Presale Starts in ...`; absent once ended.
    pub headline: Option<String>,
    pub raised_label: String,
    pub percent_of_goal: Option<Percent>,
    /// Shown only while active.
    pub percent_label: Option<String>,
    /// Shown only once ended.
    pub status_label: Option<String>,
    pub is_new: bool,
    pub is_ending_soon: bool,
    /// Coming soon, ending soon or new.
    pub needs_attention: bool,
    pub actions: Vec<CardAction>,
}

impl CampaignSummary {
    /// Evaluate `record` at `now`.
    ///
    /// `member_shares` is the connected member's share balance, `None` when
    /// unknown or disconnected.
    pub fn evaluate(
        record: &CampaignRecord,
        flags: ExecutionFlags,
        member_shares: Option<u128>,
        now: u64,
        config: &StatusConfig,
    ) -> Self {
        let phase = WindowPhase::at(record, now);
        let status = status_for_phase(phase, flags);

        let headline = match phase {
            WindowPhase::Active => Some(format!(
                "Presale Ends in {}",
                format_time_remaining(record, now)
            )),
            WindowPhase::ComingSoon => Some(format!(
                "Presale Starts in {}",
                format_time_until_start(record, now)
            )),
            WindowPhase::Ended => None,
        };

        let raised_label = if status == CampaignStatus::Success {
            "Reached Goal".to_string()
        } else {
            format_raised(
                record.current_balance(),
                &config.asset_symbol,
                config.asset_decimals,
                config.display_decimals,
            )
        };

        let percent = percent_of_goal_with_precision(record, config.percent_precision);
        let percent_label = phase.is_active().then(|| format_percent_label(percent));
        let status_label = phase.is_ended().then(|| status.to_string());

        let new = is_new(record, now, config);
        let ending_soon = is_ending_soon(record, now, config);
        let needs_attention = phase.is_coming_soon() || ending_soon || new;

        let actions = available_actions(status, member_shares.unwrap_or(0));

        debug!(
            campaign = %record.id,
            %status,
            ?actions,
            needs_attention,
            "evaluated campaign summary"
        );

        CampaignSummary {
            campaign_id: record.id.clone(),
            now,
            phase,
            status,
            headline,
            raised_label,
            percent_of_goal: percent,
            percent_label,
            status_label,
            is_new: new,
            is_ending_soon: ending_soon,
            needs_attention,
            actions,
        }
    }

    /// Evaluate against `clock`, read exactly once.
    pub fn evaluate_now(
        record: &CampaignRecord,
        flags: ExecutionFlags,
        member_shares: Option<u128>,
        clock: &dyn Clock,
        config: &StatusConfig,
    ) -> Self {
        Self::evaluate(record, flags, member_shares, clock.now(), config)
    }
}

/// Buy while active; swap after success; exit after success for members
/// holding shares.
pub fn available_actions(status: CampaignStatus, member_shares: u128) -> Vec<CardAction> {
    match status {
        CampaignStatus::Active => vec![CardAction::Buy],
        CampaignStatus::Success if member_shares > 0 => vec![CardAction::Swap, CardAction::Exit],
        CampaignStatus::Success => vec![CardAction::Swap],
        CampaignStatus::Pending | CampaignStatus::Failed | CampaignStatus::Executed => Vec::new(),
    }
}
