use log::info;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::rc::Rc;

use pb_election::instance::{Instance, Project};
use pb_election::profile::ApprovalProfile;
use pb_election::ApprovalBallot;

use crate::PbResult;

/// Draws an approval profile of `num_ballots` ballots from the thread-local
/// generator.
///
/// Each ballot is drawn independently: its size k is uniform in `0..=p` for
/// an instance of p projects, then the k approved projects are a uniform
/// subset of size k. Every subset, the empty one included, can come out.
pub fn get_random_approval_profile(
    instance: &Rc<Instance>,
    num_ballots: usize,
) -> PbResult<ApprovalProfile> {
    get_random_approval_profile_with_rng(instance, num_ballots, &mut rand::rng())
}

/// Same as [`get_random_approval_profile`], reproducible from the seed.
pub fn get_random_approval_profile_seeded(
    instance: &Rc<Instance>,
    num_ballots: usize,
    seed: u64,
) -> PbResult<ApprovalProfile> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    get_random_approval_profile_with_rng(instance, num_ballots, &mut rng)
}

pub fn get_random_approval_profile_with_rng<R: Rng + ?Sized>(
    instance: &Rc<Instance>,
    num_ballots: usize,
    rng: &mut R,
) -> PbResult<ApprovalProfile> {
    info!(
        "get_random_approval_profile: {} ballots over {} projects",
        num_ballots,
        instance.len()
    );
    let ballots: Vec<ApprovalBallot> = (0..num_ballots)
        .map(|_| random_ballot(instance.projects(), rng))
        .collect();
    let profile = ApprovalProfile::builder()
        .instance(instance)
        .build_with(ballots)?;
    Ok(profile)
}

fn random_ballot<R: Rng + ?Sized>(projects: &[Project], rng: &mut R) -> ApprovalBallot {
    let size = rng.random_range(0..=projects.len());
    index::sample(rng, projects.len(), size)
        .into_iter()
        .map(|i| projects[i].clone())
        .collect()
}
