//! Pairing: round-robin generation for standard groups and reduced pairings
//! for exception groups.
//!
//! Standard groups (size `minimum_matches + 1`) get a full round-robin.
//! Exception groups get a reduced pairing: a bipartite fill when the group
//! splits evenly in half, otherwise a degree-sequence realization over the
//! complement of the round-robin graph.

use crate::models::{MatchCandidate, Participant, ScheduleError};
use std::collections::HashSet;

/// Full round-robin over a standard group: one match per unordered pair,
/// `C(n, 2)` matches total, every participant in exactly `n - 1` of them.
pub fn pair_standard_group(group: &[Participant]) -> Vec<MatchCandidate> {
    let mut matches = Vec::new();
    let mut local_id = 0;

    for i in 0..group.len() {
        for j in (i + 1)..group.len() {
            matches.push(MatchCandidate::new(
                local_id,
                group[i].clone(),
                group[j].clone(),
            ));
            local_id += 1;
        }
    }

    matches
}

/// Reduced pairing for a group whose size differs from `minimum_matches + 1`.
///
/// Every participant ends with `minimum_matches` matches, except that when
/// `group.len() * minimum_matches` is odd one participant (the first) absorbs
/// the parity imbalance with exactly one extra match.
///
/// Fails with [`ScheduleError::InfeasibleDegreeSequence`] when no such
/// pairing exists, e.g. a leftover group too small to give each member
/// `minimum_matches` distinct opponents.
pub fn pair_exception_group(
    group: &[Participant],
    minimum_matches: u32,
) -> Result<Vec<MatchCandidate>, ScheduleError> {
    if group.len() == 2 * minimum_matches as usize {
        Ok(pair_even_split(group, minimum_matches))
    } else {
        pair_with_removals(group, minimum_matches)
    }
}

/// Even-split case (`g == 2 * minimum_matches`): pair each first-half
/// participant against second-half participants until both sides reach
/// `minimum_matches`. No participant meets a same-half opponent.
fn pair_even_split(group: &[Participant], minimum_matches: u32) -> Vec<MatchCandidate> {
    let half = minimum_matches as usize;
    let target = minimum_matches as usize;

    let mut matches = Vec::new();
    let mut local_id = 0;
    // Match count per participant, indexed by position in the group.
    let mut counts = vec![0usize; group.len()];

    for i in 0..half {
        for j in half..group.len() {
            if counts[i] == target || counts[j] == target {
                continue;
            }
            matches.push(MatchCandidate::new(
                local_id,
                group[i].clone(),
                group[j].clone(),
            ));
            local_id += 1;
            counts[i] += 1;
            counts[j] += 1;
        }
    }

    matches
}

/// General case: build the full round-robin, then remove enough matches that
/// each participant's count drops from `g - 1` to its target.
fn pair_with_removals(
    group: &[Participant],
    minimum_matches: u32,
) -> Result<Vec<MatchCandidate>, ScheduleError> {
    let g = group.len();
    let infeasible = ScheduleError::InfeasibleDegreeSequence {
        group_size: g,
        minimum_matches,
    };

    // One participant needs an extra match when the total degree is odd.
    let has_extra = (g * minimum_matches as usize) % 2 != 0;

    // Matches to remove per participant: full round-robin degree minus target.
    // A target above g - 1 means the group cannot supply enough opponents.
    let mut removal_counts = Vec::with_capacity(g);
    for i in 0..g {
        let target = if has_extra && i == 0 {
            minimum_matches as usize + 1
        } else {
            minimum_matches as usize
        };
        match (g - 1).checked_sub(target) {
            Some(count) => removal_counts.push(count),
            None => return Err(infeasible),
        }
    }

    let removal_edges = realize_removal_edges(&removal_counts, minimum_matches)?;
    let removed: HashSet<(usize, usize)> = removal_edges
        .into_iter()
        .map(|(i, j)| if i < j { (i, j) } else { (j, i) })
        .collect();

    let mut matches = Vec::new();
    let mut local_id = 0;
    for i in 0..g {
        for j in (i + 1)..g {
            if removed.contains(&(i, j)) {
                continue;
            }
            matches.push(MatchCandidate::new(
                local_id,
                group[i].clone(),
                group[j].clone(),
            ));
            local_id += 1;
        }
    }

    Ok(matches)
}

/// Greedy (Havel-Hakimi style) realization of a graph with the given degree
/// sequence, returned as edges between positions in the sequence.
///
/// Repeatedly connects the vertex with the largest remaining degree to the
/// vertices with the next-largest degrees. Errors when the sequence is not
/// graphical: a vertex demands more edges than there are partners left, or a
/// chosen partner has no remaining capacity.
fn realize_removal_edges(
    removal_counts: &[usize],
    minimum_matches: u32,
) -> Result<Vec<(usize, usize)>, ScheduleError> {
    struct Vertex {
        id: usize,
        degree: usize,
    }

    let infeasible = ScheduleError::InfeasibleDegreeSequence {
        group_size: removal_counts.len(),
        minimum_matches,
    };

    let mut vertices: Vec<Vertex> = removal_counts
        .iter()
        .enumerate()
        .map(|(id, &degree)| Vertex { id, degree })
        .collect();

    let mut edges = Vec::new();
    loop {
        vertices.sort_by(|a, b| b.degree.cmp(&a.degree));
        let d = vertices[0].degree;
        if d == 0 {
            break;
        }
        if d > vertices.len() - 1 {
            return Err(infeasible);
        }

        let u = vertices[0].id;
        for v in &mut vertices[1..=d] {
            if v.degree == 0 {
                return Err(infeasible);
            }
            edges.push((u, v.id));
            v.degree -= 1;
        }
        vertices[0].degree = 0;
    }

    Ok(edges)
}
