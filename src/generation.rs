//! Generators of approval profiles over the projects of an instance.
//!
//! * [`sampling`] draws random profiles.
//! * [`enumeration`] lists every possible profile of a given size.

pub mod enumeration;
pub mod sampling;

pub use enumeration::{get_all_approval_profiles, AllApprovalProfiles};
pub use sampling::{
    get_random_approval_profile, get_random_approval_profile_seeded,
    get_random_approval_profile_with_rng,
};
