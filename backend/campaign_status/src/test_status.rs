use std::time::Duration;

use crate::engine::{derive_status, percent_of_goal, status_for_phase, time_remaining};
use crate::invariants::{
    assert_all_record_invariants, assert_status_matches_phase, assert_valid_status_transition,
};
use crate::types::{CampaignRecord, CampaignStatus, ExecutionFlags, WindowPhase};

const START: u64 = 100;
const END: u64 = 200;

fn campaign(goal: u128, balance: u128) -> CampaignRecord {
    CampaignRecord::new(START, END, goal, balance)
        .unwrap()
        .with_ids("0xyeeter", "0xdao")
}

fn all_flags() -> Vec<ExecutionFlags> {
    let mut flags = Vec::new();
    for executed in [false, true] {
        for can_execute in [false, true] {
            for goal_achieved in [false, true] {
                flags.push(ExecutionFlags::new(executed, can_execute, goal_achieved));
            }
        }
    }
    flags
}

#[test]
fn test_scenario_a_active_window() {
    let record = campaign(1_000, 0);
    let flags = ExecutionFlags::new(false, false, false);
    assert_eq!(derive_status(&record, 150, flags), CampaignStatus::Active);
}

#[test]
fn test_scenario_b_goal_met() {
    let record = campaign(1_000, 1_200);
    let flags = ExecutionFlags::new(false, false, true);
    assert_eq!(derive_status(&record, 250, flags), CampaignStatus::Success);
    assert_eq!(percent_of_goal(&record), Some(120));
}

#[test]
fn test_scenario_c_goal_missed() {
    let record = campaign(1_000, 400);
    let flags = ExecutionFlags::new(false, false, false);
    assert_eq!(derive_status(&record, 250, flags), CampaignStatus::Failed);
    assert_eq!(percent_of_goal(&record), Some(40));
}

#[test]
fn test_scenario_d_executed() {
    let record = campaign(1_000, 1_200);
    let flags = ExecutionFlags::new(true, false, true);
    assert_eq!(derive_status(&record, 250, flags), CampaignStatus::Executed);
}

#[test]
fn test_pending_ignores_flags() {
    let record = campaign(1_000, 0);
    for flags in all_flags() {
        for now in [0, 50, START - 1] {
            assert_eq!(derive_status(&record, now, flags), CampaignStatus::Pending);
        }
    }
}

#[test]
fn test_active_ignores_flags() {
    let record = campaign(1_000, 1_500);
    for flags in all_flags() {
        for now in [START, 150, END - 1] {
            assert_eq!(derive_status(&record, now, flags), CampaignStatus::Active);
        }
    }
}

#[test]
fn test_executed_dominates_once_ended() {
    let record = campaign(1_000, 0);
    for flags in all_flags().into_iter().filter(|f| f.executed) {
        for now in [END, END + 1, u64::MAX] {
            assert_eq!(derive_status(&record, now, flags), CampaignStatus::Executed);
        }
    }
}

#[test]
fn test_success_with_pending_execution() {
    // An available but untaken finalization leaves the campaign at SUCCESS.
    let record = campaign(1_000, 1_000);
    let flags = ExecutionFlags::new(false, true, true);
    assert_eq!(derive_status(&record, END, flags), CampaignStatus::Success);
}

#[test]
fn test_failed_when_goal_not_attested() {
    // The engine trusts the attested flag, not the record balance.
    let record = campaign(1_000, 5_000);
    let flags = ExecutionFlags::new(false, true, false);
    assert_eq!(derive_status(&record, END, flags), CampaignStatus::Failed);
}

#[test]
fn test_end_boundary_belongs_to_ended() {
    let record = campaign(1_000, 0);
    let flags = ExecutionFlags::default();
    assert_eq!(derive_status(&record, END - 1, flags), CampaignStatus::Active);
    assert_eq!(derive_status(&record, END, flags), CampaignStatus::Failed);
    assert_eq!(time_remaining(&record, END), Duration::ZERO);
}

#[test]
fn test_start_boundary_belongs_to_active() {
    let record = campaign(1_000, 0);
    let flags = ExecutionFlags::default();
    assert_eq!(derive_status(&record, START - 1, flags), CampaignStatus::Pending);
    assert_eq!(derive_status(&record, START, flags), CampaignStatus::Active);
}

#[test]
fn test_zero_length_window_skips_active() {
    let record = CampaignRecord::new(100, 100, 1, 1).unwrap();
    let flags = ExecutionFlags::new(false, false, true);
    assert_eq!(derive_status(&record, 99, flags), CampaignStatus::Pending);
    assert_eq!(derive_status(&record, 100, flags), CampaignStatus::Success);
}

#[test]
fn test_idempotent() {
    let record = campaign(1_000, 1_200);
    for flags in all_flags() {
        for now in [0, START, 150, END, 10_000] {
            assert_eq!(
                derive_status(&record, now, flags),
                derive_status(&record, now, flags)
            );
        }
    }
}

#[test]
fn test_status_always_matches_phase() {
    let record = campaign(1_000, 1_200);
    for flags in all_flags() {
        for now in 0..=300 {
            let phase = WindowPhase::at(&record, now);
            let status = derive_status(&record, now, flags);
            assert_eq!(status, status_for_phase(phase, flags));
            assert_status_matches_phase(phase, status);
            assert_all_record_invariants(&record, now);
        }
    }
}

#[test]
fn test_lifecycle_walk_only_moves_forward() {
    let record = campaign(1_000, 1_200);
    // Flags as a caller would observe them over time: goal attested after
    // close, then execution.
    let timeline = [
        (50, ExecutionFlags::default()),
        (150, ExecutionFlags::default()),
        (200, ExecutionFlags::new(false, true, true)),
        (260, ExecutionFlags::new(false, true, true)),
        (300, ExecutionFlags::new(true, false, true)),
        (400, ExecutionFlags::new(true, false, true)),
    ];

    let statuses: Vec<CampaignStatus> = timeline
        .iter()
        .map(|(now, flags)| derive_status(&record, *now, *flags))
        .collect();
    assert_eq!(
        statuses,
        vec![
            CampaignStatus::Pending,
            CampaignStatus::Active,
            CampaignStatus::Success,
            CampaignStatus::Success,
            CampaignStatus::Executed,
            CampaignStatus::Executed,
        ]
    );
    for pair in statuses.windows(2) {
        assert_valid_status_transition(pair[0], pair[1]);
    }
}
