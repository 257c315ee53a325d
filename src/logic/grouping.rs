//! Group partitioning: split the roster into groups sized for a round-robin.

use crate::models::Participant;

/// Split participants into groups of `minimum_matches + 1`, in roster order.
///
/// If the participants remaining before a cut would leave a leftover of more
/// than one full group but less than two, no cut is made: all remaining
/// participants form one final oversized group. A leftover of exactly one
/// group size is an ordinary full group; a smaller leftover becomes a final
/// undersized group (the exception pairer decides whether it is feasible).
///
/// The groups partition the input exactly: order preserved, no overlaps.
pub fn create_groups(participants: &[Participant], minimum_matches: u32) -> Vec<Vec<Participant>> {
    let group_size = minimum_matches as usize + 1;
    let mut groups = Vec::new();

    let mut i = 0;
    while i < participants.len() {
        let remaining = participants.len() - i;

        if remaining > group_size && remaining < 2 * group_size {
            // One final large group instead of a full group plus a stub.
            groups.push(participants[i..].to_vec());
            break;
        }

        let end = (i + group_size).min(participants.len());
        groups.push(participants[i..end].to_vec());
        i += group_size;
    }

    groups
}
