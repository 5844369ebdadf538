use log::{info, trace};
use num::{BigUint, One, ToPrimitive, Zero};
use snafu::prelude::*;
use std::rc::Rc;

use pb_election::instance::Instance;
use pb_election::profile::ApprovalProfile;
use pb_election::ApprovalBallot;

use crate::{EnumerationOverflowSnafu, PbResult};

/// Every approval profile of a fixed number of ballots over an instance.
///
/// Each ballot ranges independently over the 2^p subsets of the p projects,
/// the empty subset included, so there are (2^p)^n profiles of n ballots.
/// They are computed one at a time from their index and never stored, so
/// only the first few of a huge enumeration cost anything.
///
/// Profile `i` reads `i` as n digits in base 2^p, the first ballot being the
/// most significant digit. Within a digit, bit j set means that the j-th
/// project of the instance is approved. The first profile is made of empty
/// ballots, the last one approves everything.
#[derive(Debug, Clone)]
pub struct AllApprovalProfiles {
    instance: Rc<Instance>,
    num_ballots: usize,
    next: BigUint,
    total: BigUint,
}

/// Lists all the approval profiles of `num_ballots` ballots.
///
/// The count of profiles is exact whatever its size. Fails only if the
/// number of projects times the number of ballots does not fit in a `usize`.
/// Calling it again gives a new, independent iterator.
pub fn get_all_approval_profiles(
    instance: &Rc<Instance>,
    num_ballots: usize,
) -> PbResult<AllApprovalProfiles> {
    let num_projects = instance.len();
    let bits = num_projects
        .checked_mul(num_ballots)
        .context(EnumerationOverflowSnafu {
            num_projects,
            num_ballots,
        })?;
    let total = BigUint::one() << bits;
    info!(
        "get_all_approval_profiles: 2^{} profiles of {} ballots over {} projects",
        bits, num_ballots, num_projects
    );
    Ok(AllApprovalProfiles {
        instance: instance.clone(),
        num_ballots,
        next: BigUint::zero(),
        total,
    })
}

impl AllApprovalProfiles {
    /// The number of profiles of the whole enumeration.
    pub fn total(&self) -> &BigUint {
        &self.total
    }

    /// The number of profiles not yet produced.
    pub fn remaining(&self) -> BigUint {
        &self.total - &self.next
    }

    /// The profile at the given position of the enumeration, whatever the
    /// state of the iterator.
    pub fn profile_at(&self, index: &BigUint) -> Option<ApprovalProfile> {
        if index >= &self.total {
            return None;
        }
        let digits = index.to_u64_digits();
        let bit = |k: usize| -> bool {
            digits
                .get(k / 64)
                .map_or(false, |word| (word >> (k % 64)) & 1 == 1)
        };
        let p = self.instance.len();
        let ballots = (0..self.num_ballots).map(|i| {
            let offset = p * (self.num_ballots - 1 - i);
            self.instance
                .iter()
                .enumerate()
                .filter(|(j, _)| bit(offset + j))
                .map(|(_, project)| project.clone())
                .collect::<ApprovalBallot>()
        });
        // Subsets of the instance, with no bound set: always valid.
        Some(
            ApprovalProfile::builder()
                .instance(&self.instance)
                .build_unchecked(ballots),
        )
    }
}

impl Iterator for AllApprovalProfiles {
    type Item = ApprovalProfile;

    fn next(&mut self) -> Option<ApprovalProfile> {
        let res = self.profile_at(&self.next)?;
        trace!("AllApprovalProfiles::next: profile {}", self.next);
        self.next += 1u32;
        Some(res)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining().to_usize();
        (remaining.unwrap_or(usize::MAX), remaining)
    }

    fn nth(&mut self, n: usize) -> Option<ApprovalProfile> {
        self.next = (&self.next + n).min(self.total.clone());
        self.next()
    }
}
