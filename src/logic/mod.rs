//! Scheduling logic: grouping, pairing, time/field assignment, generation.

mod assignment;
mod generate;
mod grouping;
mod pairing;
mod validation;

pub use assignment::assign_times_and_fields;
pub use generate::generate_schedule;
pub use grouping::create_groups;
pub use pairing::{pair_exception_group, pair_standard_group};
pub use validation::{validate_tournament, MATCH_INTERVAL_RANGE, MINIMUM_MATCHES_RANGE};
