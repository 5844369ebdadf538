//! Multiprofiles: the distinct ballots of an election, each with the number
//! of voters who cast it.

use log::debug;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use crate::ballot::*;
use crate::builder::ProfileBuilder;
use crate::config::*;
use crate::instance::{Instance, Project};
use crate::profile::{self, Profile};

/// A multiset of frozen ballots of one declared kind `B`.
///
/// The distinct ballots are kept in the order in which they were first
/// added, each with a strictly positive count. Validation follows the same
/// rules as for [`Profile`].
#[derive(Debug, Clone)]
pub struct MultiProfile<B: Ballot> {
    config: ProfileConfig<B>,
    entries: Vec<(AnyFrozenBallot, usize)>,
    // Position of each distinct ballot in `entries`.
    index: HashMap<AnyFrozenBallot, usize>,
}

pub type ApprovalMultiProfile = MultiProfile<ApprovalBallot>;
pub type CardinalMultiProfile = MultiProfile<CardinalBallot>;
pub type CumulativeMultiProfile = MultiProfile<CumulativeBallot>;
pub type OrdinalMultiProfile = MultiProfile<OrdinalBallot>;

impl<B: Ballot> PartialEq for MultiProfile<B> {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config && self.entries == other.entries
    }
}

impl<B: Ballot> Default for MultiProfile<B> {
    fn default() -> Self {
        MultiProfile::with_config(ProfileConfig::default())
    }
}

impl<B: Ballot> MultiProfile<B> {
    pub fn new() -> Self {
        MultiProfile::default()
    }

    pub fn builder() -> ProfileBuilder<B> {
        ProfileBuilder::new()
    }

    pub fn with_config(config: ProfileConfig<B>) -> Self {
        MultiProfile {
            config,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// A multiprofile with the default configuration counting the ballots.
    pub fn from_ballots<T: Into<AnyFrozenBallot>>(
        ballots: impl IntoIterator<Item = T>,
    ) -> ElectionResult<Self> {
        let mut res = MultiProfile::new();
        res.extend(ballots)?;
        Ok(res)
    }

    /// Folds a profile: the configuration is copied and the ballots are
    /// frozen and counted without being checked again.
    pub fn from_profile(profile: &Profile<B>) -> Self {
        let mut res = MultiProfile::with_config(profile.config().clone());
        for ballot in profile.iter() {
            res.add_unchecked(ballot.freeze(), 1);
        }
        debug!(
            "from_profile: {} ballots folded into {} distinct ones",
            profile.len(),
            res.len()
        );
        res
    }

    fn add_unchecked(&mut self, ballot: AnyFrozenBallot, count: usize) {
        match self.index.get(&ballot) {
            Some(&pos) => self.entries[pos].1 += count,
            None => {
                self.index.insert(ballot.clone(), self.entries.len());
                self.entries.push((ballot, count));
            }
        }
    }

    pub fn config(&self) -> &ProfileConfig<B> {
        &self.config
    }

    pub fn instance(&self) -> Option<&Rc<Instance>> {
        self.config.instance.as_ref()
    }

    pub fn set_instance(&mut self, instance: Option<Rc<Instance>>) {
        self.config.instance = instance;
    }

    pub fn ballot_type(&self) -> BallotKind {
        self.config.ballot_type()
    }

    pub fn ballot_validation(&self) -> bool {
        self.config.ballot_validation
    }

    pub fn set_ballot_validation(&mut self, enabled: bool) {
        self.config.ballot_validation = enabled;
    }

    pub fn bounds(&self) -> &B::Bounds {
        &self.config.bounds
    }

    pub fn bounds_mut(&mut self) -> &mut B::Bounds {
        &mut self.config.bounds
    }

    /// Counts one more occurrence of the ballot.
    pub fn append(&mut self, ballot: impl Into<AnyFrozenBallot>) -> ElectionResult<()> {
        let ballot = ballot.into();
        self.config.validate_frozen(&ballot)?;
        self.add_unchecked(ballot, 1);
        Ok(())
    }

    /// Counts all the ballots, or none of them if one is rejected.
    pub fn extend<T: Into<AnyFrozenBallot>>(
        &mut self,
        ballots: impl IntoIterator<Item = T>,
    ) -> ElectionResult<()> {
        let ballots: Vec<AnyFrozenBallot> = ballots.into_iter().map(|b| b.into()).collect();
        for b in ballots.iter() {
            self.config.validate_frozen(b)?;
        }
        for b in ballots {
            self.add_unchecked(b, 1);
        }
        Ok(())
    }

    /// The number of distinct ballots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The sum of the counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// The number of voters, i.e. the sum of the counts.
    pub fn num_ballots(&self) -> usize {
        self.total()
    }

    /// How many times the ballot was cast, 0 if never.
    pub fn count_of(&self, ballot: impl Into<AnyFrozenBallot>) -> usize {
        self.index
            .get(&ballot.into())
            .map(|&pos| self.entries[pos].1)
            .unwrap_or(0)
    }

    pub fn contains(&self, ballot: impl Into<AnyFrozenBallot>) -> bool {
        self.index.contains_key(&ballot.into())
    }

    /// The distinct ballots and their counts, in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, (AnyFrozenBallot, usize)> {
        self.entries.iter()
    }

    pub fn get_index(&self, index: usize) -> Option<&(AnyFrozenBallot, usize)> {
        self.entries.get(index)
    }

    /// Expands the multiprofile back into a profile.
    pub fn to_profile(&self) -> Profile<B> {
        Profile::from_multiprofile(self)
    }

    // Each distinct ballot, repeated as many times as it is counted.
    fn weighted(&self) -> impl Iterator<Item = &AnyFrozenBallot> + '_ {
        self.entries
            .iter()
            .flat_map(|(b, count)| std::iter::repeat(b).take(*count))
    }
}

impl<'a, B: Ballot> IntoIterator for &'a MultiProfile<B> {
    type Item = &'a (AnyFrozenBallot, usize);
    type IntoIter = std::slice::Iter<'a, (AnyFrozenBallot, usize)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<B: Ballot> From<&Profile<B>> for MultiProfile<B> {
    fn from(profile: &Profile<B>) -> Self {
        MultiProfile::from_profile(profile)
    }
}

impl MultiProfile<ApprovalBallot> {
    pub fn approved_projects(&self) -> BTreeSet<Project> {
        profile::approved_projects(self.entries.iter().map(|(b, _)| b.projects()))
    }

    pub fn is_party_list(&self) -> bool {
        profile::is_party_list(self.entries.iter().map(|(b, _)| b.projects()))
    }

    pub fn is_trivial(&self) -> ElectionResult<bool> {
        profile::is_trivial(self.instance(), &self.approved_projects())
    }

    /// The number of voters approving the project, counts included.
    pub fn approval_score(&self, project: &Project) -> usize {
        self.entries
            .iter()
            .filter(|(b, _)| b.projects().any(|p| p == project))
            .map(|(_, count)| count)
            .sum()
    }
}

impl<B: ScoredBallot> MultiProfile<B> {
    /// The sum of the scores given to the project, counts included.
    pub fn total_score(&self, project: &Project) -> Numeric {
        self.weighted()
            .filter_map(|b| b.scores().and_then(|s| s.get(project)))
            .fold(integer(0), |acc, s| acc + s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ApprovalProfile;

    fn num(n: i64) -> Numeric {
        integer(n)
    }

    fn projects(n: usize) -> Vec<Project> {
        (0..n)
            .map(|i| Project::new(&format!("p{}", i), num(2)))
            .collect()
    }

    #[test]
    fn counts_distinct_ballots() {
        let _ = env_logger::builder().is_test(true).try_init();
        let ps = projects(6);
        let b1 = FrozenApprovalBallot::new([ps[0].clone(), ps[1].clone()]);
        let b2 = FrozenApprovalBallot::new([ps[1].clone(), ps[2].clone()]);
        let b3 = FrozenApprovalBallot::new([ps[3].clone()]);
        let b4 = FrozenApprovalBallot::new([ps[4].clone(), ps[5].clone()]);

        let mut multi = ApprovalMultiProfile::from_ballots([&b1, &b2, &b3, &b4]).unwrap();
        assert_eq!(multi.len(), 4);
        assert_eq!(multi.total(), 4);
        multi.append(&b1).unwrap();
        assert_eq!(multi.len(), 4);
        assert_eq!(multi.total(), 5);
        assert_eq!(multi.count_of(&b1), 2);
        assert_eq!(multi.count_of(&b3), 1);
        assert_eq!(multi.count_of(FrozenApprovalBallot::new([ps[0].clone()])), 0);
        // Names are ignored when counting.
        multi.append(b2.clone().with_name("voter 7")).unwrap();
        assert_eq!(multi.count_of(&b2), 2);
        assert!(multi.contains(ApprovalBallot::new([ps[3].clone()])));
        assert_eq!(multi.get_index(0).map(|(b, c)| (b == &b1, *c)), Some((true, 2)));
        assert_eq!(multi.num_ballots(), 6);
    }

    #[test]
    fn folds_and_expands_profiles() {
        let ps = projects(4);
        let b1 = ApprovalBallot::new([ps[0].clone(), ps[1].clone()]);
        let b2 = ApprovalBallot::new([ps[2].clone(), ps[3].clone()]);
        let ballots: Vec<&ApprovalBallot> = std::iter::repeat(&b1)
            .take(4)
            .chain(std::iter::repeat(&b2).take(10))
            .collect();
        let profile = ApprovalProfile::from_ballots(ballots).unwrap();
        let multi = profile.as_multiprofile();
        assert_eq!(multi.len(), 2);
        assert_eq!(multi.total(), 14);
        assert_eq!(multi.config(), profile.config());

        let back = multi.to_profile();
        assert_eq!(back, profile);
        assert_eq!(MultiProfile::from(&back), multi);

        let copy = multi.clone();
        assert_eq!(copy, multi);
    }

    #[test]
    fn validation_is_atomic() {
        let ps = projects(3);
        let mut multi = CardinalMultiProfile::builder()
            .legal_score(Some(num(0)), Some(num(5)))
            .build_multi();
        let ok = FrozenCardinalBallot::new([(ps[0].clone(), num(3))]);
        let bad = FrozenCardinalBallot::new([(ps[0].clone(), num(6))]);
        assert!(multi.extend([&ok, &ok, &bad]).is_err());
        assert!(multi.is_empty());
        assert_eq!(
            multi.append(FrozenApprovalBallot::new([ps[1].clone()])),
            Err(ElectionError::TypeValidation {
                expected: BallotKind::Cardinal,
                found: BallotKind::Approval
            })
        );
        multi.extend([&ok, &ok]).unwrap();
        assert_eq!(multi.len(), 1);
        assert_eq!(multi.total(), 2);
        assert_eq!(multi.total_score(&ps[0]), num(6));

        multi.set_ballot_validation(false);
        multi.append(&bad).unwrap();
        assert_eq!(multi.total_score(&ps[0]), num(12));
    }

    #[test]
    fn approval_queries_use_counts() {
        let ps = projects(4);
        let instance = Rc::new(Instance::new(ps.clone(), num(4)).unwrap());
        let b1 = FrozenApprovalBallot::new([ps[0].clone(), ps[1].clone()]);
        let b2 = FrozenApprovalBallot::new([ps[2].clone()]);
        let mut multi = ApprovalMultiProfile::builder()
            .instance(&instance)
            .build_multi_with([&b1, &b1, &b1, &b2])
            .unwrap();
        assert_eq!(multi.approval_score(&ps[0]), 3);
        assert_eq!(multi.approval_score(&ps[2]), 1);
        assert_eq!(multi.approval_score(&ps[3]), 0);
        assert!(multi.is_party_list());
        assert_eq!(multi.approved_projects().len(), 3);
        assert_eq!(multi.is_trivial(), Ok(false));
        instance.set_budget_limit(num(6));
        assert_eq!(multi.is_trivial(), Ok(true));

        multi
            .append(FrozenApprovalBallot::new([ps[1].clone(), ps[2].clone()]))
            .unwrap();
        assert!(!multi.is_party_list());
    }
}
