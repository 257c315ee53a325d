//! Integration tests for standard and exception group pairing.

use std::collections::{HashMap, HashSet};
use tournament_scheduler::{
    pair_exception_group, pair_standard_group, MatchCandidate, Participant, ParticipantId,
    ScheduleError,
};
use uuid::Uuid;

fn roster(n: usize) -> Vec<Participant> {
    let tournament_id = Uuid::new_v4();
    (0..n)
        .map(|i| Participant::new(tournament_id, format!("Team {i}")))
        .collect()
}

fn match_counts(matches: &[MatchCandidate]) -> HashMap<ParticipantId, usize> {
    let mut counts = HashMap::new();
    for m in matches {
        for p in &m.participants {
            *counts.entry(p.id).or_insert(0) += 1;
        }
    }
    counts
}

/// Every unordered pair appears at most once.
fn assert_unique_pairs(matches: &[MatchCandidate]) {
    let mut seen = HashSet::new();
    for m in matches {
        let mut ids = [m.participants[0].id, m.participants[1].id];
        ids.sort();
        assert!(
            seen.insert(ids),
            "duplicate match between {} and {}",
            m.participants[0].name,
            m.participants[1].name
        );
    }
}

fn assert_counts(group: &[Participant], counts: &HashMap<ParticipantId, usize>, expected: usize) {
    for p in group {
        assert_eq!(
            counts.get(&p.id).copied().unwrap_or(0),
            expected,
            "{} should have exactly {expected} matches",
            p.name
        );
    }
}

/// Exactly one participant has `minimum + 1` matches, the rest `minimum`.
fn assert_counts_with_one_extra(
    group: &[Participant],
    counts: &HashMap<ParticipantId, usize>,
    minimum: usize,
) {
    let mut extras = 0;
    for p in group {
        let count = counts.get(&p.id).copied().unwrap_or(0);
        if count == minimum + 1 {
            extras += 1;
        } else {
            assert_eq!(count, minimum, "{} should have exactly {minimum} matches", p.name);
        }
    }
    assert_eq!(extras, 1, "exactly one participant should absorb the extra match");
}

#[test]
fn standard_group_of_four_is_a_full_round_robin() {
    let group = roster(4);
    let matches = pair_standard_group(&group);

    assert_eq!(matches.len(), 6);
    assert_counts(&group, &match_counts(&matches), 3);
    assert_unique_pairs(&matches);
}

#[test]
fn standard_group_of_five_is_a_full_round_robin() {
    let group = roster(5);
    let matches = pair_standard_group(&group);

    assert_eq!(matches.len(), 10);
    assert_counts(&group, &match_counts(&matches), 4);
    assert_unique_pairs(&matches);
}

#[test]
fn standard_group_of_eight_is_a_full_round_robin() {
    let group = roster(8);
    let matches = pair_standard_group(&group);

    assert_eq!(matches.len(), 28);
    assert_counts(&group, &match_counts(&matches), 7);
    assert_unique_pairs(&matches);
}

#[test]
fn local_ids_are_sequential_per_group() {
    let matches = pair_standard_group(&roster(4));
    for (i, m) in matches.iter().enumerate() {
        assert_eq!(m.local_id, i);
    }
}

#[test]
fn exception_group_of_five_with_three_minimum_matches() {
    let group = roster(5);
    let matches = pair_exception_group(&group, 3).unwrap();

    // 5 * 3 is odd: one participant plays a fourth match.
    assert_eq!(matches.len(), 8);
    assert_counts_with_one_extra(&group, &match_counts(&matches), 3);
    assert_unique_pairs(&matches);
}

#[test]
fn exception_group_of_six_with_three_minimum_matches_splits_in_half() {
    let group = roster(6);
    let matches = pair_exception_group(&group, 3).unwrap();

    assert_eq!(matches.len(), 9);
    assert_counts(&group, &match_counts(&matches), 3);
    assert_unique_pairs(&matches);

    // Even split: every match crosses the halves.
    let first_half: HashSet<_> = group[..3].iter().map(|p| p.id).collect();
    for m in &matches {
        let crossings = m
            .participants
            .iter()
            .filter(|p| first_half.contains(&p.id))
            .count();
        assert_eq!(crossings, 1, "match must pair opposite halves");
    }
}

#[test]
fn exception_group_of_seven_with_three_minimum_matches() {
    let group = roster(7);
    let matches = pair_exception_group(&group, 3).unwrap();

    assert_eq!(matches.len(), 11);
    assert_counts_with_one_extra(&group, &match_counts(&matches), 3);
    assert_unique_pairs(&matches);
}

#[test]
fn exception_group_of_six_with_four_minimum_matches() {
    let group = roster(6);
    let matches = pair_exception_group(&group, 4).unwrap();

    assert_eq!(matches.len(), 12);
    assert_counts(&group, &match_counts(&matches), 4);
    assert_unique_pairs(&matches);
}

#[test]
fn exception_group_of_eight_with_four_minimum_matches_splits_in_half() {
    let group = roster(8);
    let matches = pair_exception_group(&group, 4).unwrap();

    assert_eq!(matches.len(), 16);
    assert_counts(&group, &match_counts(&matches), 4);
    assert_unique_pairs(&matches);
}

#[test]
fn exception_group_of_thirteen_with_nine_minimum_matches() {
    let group = roster(13);
    let matches = pair_exception_group(&group, 9).unwrap();

    // 13 * 9 is odd: one participant plays a tenth match.
    assert_counts_with_one_extra(&group, &match_counts(&matches), 9);
    assert_unique_pairs(&matches);
}

#[test]
fn exception_group_of_fifteen_with_ten_minimum_matches() {
    let group = roster(15);
    let matches = pair_exception_group(&group, 10).unwrap();

    assert_counts(&group, &match_counts(&matches), 10);
    assert_unique_pairs(&matches);
}

#[test]
fn group_too_small_for_minimum_matches_is_infeasible() {
    // Three participants cannot each meet three distinct opponents.
    let group = roster(3);
    assert_eq!(
        pair_exception_group(&group, 3),
        Err(ScheduleError::InfeasibleDegreeSequence {
            group_size: 3,
            minimum_matches: 3,
        })
    );
}

#[test]
fn single_participant_group_is_infeasible() {
    let group = roster(1);
    assert_eq!(
        pair_exception_group(&group, 1),
        Err(ScheduleError::InfeasibleDegreeSequence {
            group_size: 1,
            minimum_matches: 1,
        })
    );
}
