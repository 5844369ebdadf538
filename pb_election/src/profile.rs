//! Profiles: the ordered list of the ballots cast in an election.

use log::debug;
use std::collections::{BTreeSet, HashMap};
use std::ops::{Add, Deref, Mul, MulAssign};
use std::rc::Rc;

use crate::ballot::*;
use crate::builder::ProfileBuilder;
use crate::config::*;
use crate::instance::{Instance, Project};
use crate::multiprofile::MultiProfile;

/// An ordered list of ballots of one declared kind `B`.
///
/// Read access goes through the slice of [`AnyBallot`] the profile derefs to
/// (`len`, `iter`, indexing, ...). Every mutation is validated against the
/// [`ProfileConfig`] first, and a rejected mutation leaves the profile as it
/// was.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile<B: Ballot> {
    config: ProfileConfig<B>,
    ballots: Vec<AnyBallot>,
}

pub type ApprovalProfile = Profile<ApprovalBallot>;
pub type CardinalProfile = Profile<CardinalBallot>;
pub type CumulativeProfile = Profile<CumulativeBallot>;
pub type OrdinalProfile = Profile<OrdinalBallot>;

impl<B: Ballot> Default for Profile<B> {
    fn default() -> Self {
        Profile::with_config(ProfileConfig::default())
    }
}

// Negative indices count from the end.
fn resolve_index(index: isize, len: usize) -> Option<usize> {
    let idx = if index < 0 {
        len as isize + index
    } else {
        index
    };
    if idx >= 0 && (idx as usize) < len {
        Some(idx as usize)
    } else {
        None
    }
}

fn repeated(ballots: &[AnyBallot], times: usize) -> Vec<AnyBallot> {
    ballots
        .iter()
        .cloned()
        .cycle()
        .take(ballots.len() * times)
        .collect()
}

impl<B: Ballot> Profile<B> {
    pub fn new() -> Self {
        Profile::default()
    }

    pub fn builder() -> ProfileBuilder<B> {
        ProfileBuilder::new()
    }

    pub fn with_config(config: ProfileConfig<B>) -> Self {
        Profile {
            config,
            ballots: Vec::new(),
        }
    }

    // The ballots are stored without validation.
    pub(crate) fn from_trusted(config: ProfileConfig<B>, ballots: Vec<AnyBallot>) -> Self {
        Profile { config, ballots }
    }

    /// A profile with the default configuration holding the given ballots.
    pub fn from_ballots<T: Into<AnyBallot>>(
        ballots: impl IntoIterator<Item = T>,
    ) -> ElectionResult<Self> {
        let mut res = Profile::new();
        res.extend(ballots)?;
        Ok(res)
    }

    /// Expands a multiprofile: each distinct ballot is repeated as many times
    /// as it was counted, in the order the distinct ballots were first seen.
    pub fn from_multiprofile(multiprofile: &MultiProfile<B>) -> Self {
        let mut ballots: Vec<AnyBallot> = Vec::with_capacity(multiprofile.total());
        for (ballot, count) in multiprofile.iter() {
            let thawed = ballot.thaw();
            ballots.extend(std::iter::repeat(thawed).take(*count));
        }
        debug!(
            "from_multiprofile: {} distinct ballots expanded to {}",
            multiprofile.len(),
            ballots.len()
        );
        Profile {
            config: multiprofile.config().clone(),
            ballots,
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

    /// Turns the checks on or off for all the following mutations.
    /// Ballots already in the profile are not checked again.
    pub fn set_ballot_validation(&mut self, enabled: bool) {
        self.config.ballot_validation = enabled;
    }

    pub fn bounds(&self) -> &B::Bounds {
        &self.config.bounds
    }

    pub fn bounds_mut(&mut self) -> &mut B::Bounds {
        &mut self.config.bounds
    }

    /// The number of voters. For a profile, one ballot per voter.
    pub fn num_ballots(&self) -> usize {
        self.ballots.len()
    }

    pub fn append(&mut self, ballot: impl Into<AnyBallot>) -> ElectionResult<()> {
        let ballot = ballot.into();
        self.config.validate(&ballot)?;
        self.ballots.push(ballot);
        Ok(())
    }

    /// Inserts before `index`, like a list insert: negative indices count from
    /// the end and out-of-range indices are clamped.
    pub fn insert(&mut self, index: isize, ballot: impl Into<AnyBallot>) -> ElectionResult<()> {
        let ballot = ballot.into();
        self.config.validate(&ballot)?;
        let len = self.ballots.len() as isize;
        let idx = if index < 0 { len + index } else { index };
        self.ballots.insert(idx.clamp(0, len) as usize, ballot);
        Ok(())
    }

    pub fn get(&self, index: isize) -> Option<&AnyBallot> {
        resolve_index(index, self.ballots.len()).map(|idx| &self.ballots[idx])
    }

    /// Replaces the ballot at `index`, returning the previous one.
    pub fn set(&mut self, index: isize, ballot: impl Into<AnyBallot>) -> ElectionResult<AnyBallot> {
        let len = self.ballots.len();
        let idx = resolve_index(index, len).ok_or(ElectionError::IndexOutOfRange { index, len })?;
        let ballot = ballot.into();
        self.config.validate(&ballot)?;
        Ok(std::mem::replace(&mut self.ballots[idx], ballot))
    }

    pub fn remove(&mut self, index: isize) -> ElectionResult<AnyBallot> {
        let len = self.ballots.len();
        let idx = resolve_index(index, len).ok_or(ElectionError::IndexOutOfRange { index, len })?;
        Ok(self.ballots.remove(idx))
    }

    pub fn pop(&mut self) -> Option<AnyBallot> {
        self.ballots.pop()
    }

    /// Appends all the ballots, or none of them if one is rejected.
    pub fn extend<T: Into<AnyBallot>>(
        &mut self,
        ballots: impl IntoIterator<Item = T>,
    ) -> ElectionResult<()> {
        let ballots: Vec<AnyBallot> = ballots.into_iter().map(|b| b.into()).collect();
        for b in ballots.iter() {
            self.config.validate(b)?;
        }
        self.ballots.extend(ballots);
        Ok(())
    }

    /// A new profile with the configuration of `self`, holding the ballots of
    /// `self` followed by those of `other`.
    pub fn concat(&self, other: &Profile<B>) -> ElectionResult<Profile<B>> {
        let mut res = self.clone();
        res.extend(other)?;
        Ok(res)
    }

    /// A new profile holding `times` copies of the ballots, one after the other.
    pub fn repeat(&self, times: usize) -> Profile<B> {
        Profile {
            config: self.config.clone(),
            ballots: repeated(&self.ballots, times),
        }
    }

    /// Folds the profile into a multiprofile with the same configuration.
    pub fn as_multiprofile(&self) -> MultiProfile<B> {
        MultiProfile::from_profile(self)
    }
}

impl<B: Ballot> Deref for Profile<B> {
    type Target = [AnyBallot];

    fn deref(&self) -> &[AnyBallot] {
        &self.ballots
    }
}

impl<'a, B: Ballot> IntoIterator for &'a Profile<B> {
    type Item = &'a AnyBallot;
    type IntoIter = std::slice::Iter<'a, AnyBallot>;

    fn into_iter(self) -> Self::IntoIter {
        self.ballots.iter()
    }
}

impl<B: Ballot> From<&MultiProfile<B>> for Profile<B> {
    fn from(multiprofile: &MultiProfile<B>) -> Self {
        Profile::from_multiprofile(multiprofile)
    }
}

impl<'a, B: Ballot> Add<&'a Profile<B>> for &'a Profile<B> {
    type Output = ElectionResult<Profile<B>>;

    fn add(self, other: &'a Profile<B>) -> ElectionResult<Profile<B>> {
        self.concat(other)
    }
}

impl<B: Ballot> Mul<usize> for &Profile<B> {
    type Output = Profile<B>;

    fn mul(self, times: usize) -> Profile<B> {
        self.repeat(times)
    }
}

impl<B: Ballot> MulAssign<usize> for Profile<B> {
    fn mul_assign(&mut self, times: usize) {
        self.ballots = repeated(&self.ballots, times);
    }
}

// ********* Queries shared with multiprofiles **********

// The ballots are given with their multiplicity.

pub(crate) fn approved_projects<'a>(
    ballots: impl IntoIterator<Item = Box<dyn Iterator<Item = &'a Project> + 'a>>,
) -> BTreeSet<Project> {
    ballots.into_iter().flatten().cloned().collect()
}

/// True if any two approval sets are either equal or disjoint.
pub(crate) fn is_party_list<'a>(
    ballots: impl IntoIterator<Item = Box<dyn Iterator<Item = &'a Project> + 'a>>,
) -> bool {
    let mut groups: Vec<BTreeSet<&Project>> = Vec::new();
    let mut group_of: HashMap<&Project, usize> = HashMap::new();
    for ballot in ballots {
        let approved: BTreeSet<&Project> = ballot.collect();
        let existing = approved.iter().find_map(|p| group_of.get(p).copied());
        match existing {
            Some(g) if groups[g] != approved => {
                debug!(
                    "is_party_list: {:?} overlaps the group {:?}",
                    approved, groups[g]
                );
                return false;
            }
            Some(_) => {}
            None => {
                for p in approved.iter() {
                    group_of.insert(*p, groups.len());
                }
                groups.push(approved);
            }
        }
    }
    true
}

pub(crate) fn is_trivial(
    instance: Option<&Rc<Instance>>,
    approved: &BTreeSet<Project>,
) -> ElectionResult<bool> {
    let instance = instance.ok_or(ElectionError::MissingInstance {})?;
    Ok(instance.is_feasible(approved.iter()))
}

impl Profile<ApprovalBallot> {
    /// All the projects approved by at least one voter.
    pub fn approved_projects(&self) -> BTreeSet<Project> {
        approved_projects(self.ballots.iter().map(|b| b.projects()))
    }

    /// True if the voters split into groups with identical approval sets,
    /// the sets of different groups being disjoint.
    pub fn is_party_list(&self) -> bool {
        is_party_list(self.ballots.iter().map(|b| b.projects()))
    }

    /// True if all the approved projects fit in the budget of the instance.
    /// The budget limit is read at call time.
    pub fn is_trivial(&self) -> ElectionResult<bool> {
        is_trivial(self.instance(), &self.approved_projects())
    }

    /// The number of voters approving the project.
    pub fn approval_score(&self, project: &Project) -> usize {
        self.ballots
            .iter()
            .filter(|b| b.projects().any(|p| p == project))
            .count()
    }
}

impl<B: ScoredBallot> Profile<B> {
    /// Scores every project of `projects` that a ballot does not score yet
    /// with `default_score`. Existing scores are kept and nothing is validated.
    pub fn complete(&mut self, projects: &[Project], default_score: Numeric) {
        for ballot in self.ballots.iter_mut() {
            if let Some(scores) = ballot.scores_mut() {
                scores.complete(projects.iter(), &default_score);
            }
        }
    }

    /// The sum of the scores given to the project.
    pub fn total_score(&self, project: &Project) -> Numeric {
        self.ballots
            .iter()
            .filter_map(|b| b.scores().and_then(|s| s.get(project)))
            .fold(integer(0), |acc, s| acc + s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(n: i64) -> Numeric {
        integer(n)
    }

    fn projects(n: usize, cost: i64) -> Vec<Project> {
        (0..n)
            .map(|i| Project::new(&format!("p{}", i), num(cost)))
            .collect()
    }

    fn init_logs() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn sequence_operations() {
        init_logs();
        let ps = projects(3, 1);
        let b1 = ApprovalBallot::new([ps[0].clone()]);
        let b2 = ApprovalBallot::new([ps[1].clone()]);
        let b3 = ApprovalBallot::new([ps[2].clone()]);

        let empty = ApprovalProfile::new();
        let mut profile = (&empty + &ApprovalProfile::from_ballots([&b1, &b2]).unwrap()).unwrap();
        assert_eq!(profile.len(), 2);
        profile *= 3;
        assert_eq!(profile.len(), 6);
        profile.append(&b3).unwrap();
        assert_eq!(profile.len(), 7);
        profile.insert(1, &b1).unwrap();
        assert_eq!(profile[1], b1);
        assert_eq!(profile[2], b2);
        assert_eq!(profile.len(), 8);
        assert_eq!(profile.set(0, &b3).unwrap(), b1);
        assert_eq!(profile[0], b3);
        profile
            .extend(&ApprovalProfile::from_ballots([&b1, &b1]).unwrap())
            .unwrap();
        assert_eq!(profile.len(), 10);
        assert_eq!(profile.get(-1).unwrap(), &b1);
        assert_eq!(profile.get(-2).unwrap(), &b1);
        profile.extend([b2.clone(), b2.clone()]).unwrap();
        assert_eq!(profile.len(), 12);
        assert_eq!(profile.get(-1).unwrap(), &b2);
        assert_eq!(profile.get(-2).unwrap(), &b2);
        assert!(profile.get(12).is_none());
        assert!(profile.get(-13).is_none());
        assert_eq!(
            profile.set(12, &b1),
            Err(ElectionError::IndexOutOfRange { index: 12, len: 12 })
        );
        assert_eq!(profile.remove(-1).unwrap(), b2);
        assert_eq!(profile.pop().unwrap(), b2);
        assert_eq!(profile.num_ballots(), 10);
    }

    #[test]
    fn insert_clamps_like_a_list() {
        let ps = projects(3, 1);
        let b: Vec<OrdinalBallot> = ps.iter().map(|p| OrdinalBallot::new([p.clone()])).collect();
        let mut profile = OrdinalProfile::from_ballots([&b[0]]).unwrap();
        profile.insert(100, &b[1]).unwrap();
        profile.insert(-100, &b[2]).unwrap();
        assert_eq!(profile[0], b[2]);
        assert_eq!(profile[2], b[1]);
        profile.insert(-1, &b[0]).unwrap();
        assert_eq!(profile[2], b[0]);
        assert_eq!(profile[3], b[1]);
    }

    #[test]
    fn concat_and_repeat_preserve_order() {
        let ps = projects(4, 1);
        let ballots: Vec<ApprovalBallot> =
            ps.iter().map(|p| ApprovalBallot::new([p.clone()])).collect();
        let first = ApprovalProfile::from_ballots(&ballots[..2]).unwrap();
        let second = ApprovalProfile::from_ballots(&ballots[2..]).unwrap();
        let both = first.concat(&second).unwrap();
        assert_eq!(both.len(), 4);
        for (i, b) in ballots.iter().enumerate() {
            assert_eq!(both[i], *b);
        }
        let tripled = &both * 3;
        assert_eq!(tripled.len(), 12);
        for copy in 0..3 {
            for (i, b) in ballots.iter().enumerate() {
                assert_eq!(tripled[copy * 4 + i], *b);
            }
        }
        assert!((&both * 0).is_empty());
        assert_eq!(tripled.config(), both.config());
    }

    #[test]
    fn copy_keeps_configuration() {
        let instance = Rc::new(Instance::new([Project::new("qsd", num(1))], num(1)).unwrap());
        let profile1 = ApprovalProfile::builder()
            .instance(&instance)
            .ballot_validation(false)
            .build();
        let profile2 = profile1.clone();
        assert_eq!(profile1, profile2);
        assert!(Rc::ptr_eq(profile2.instance().unwrap(), &instance));
        assert!(!profile2.ballot_validation());
    }

    #[test]
    fn type_validation_rejects_other_kinds() {
        init_logs();
        let ps = projects(3, 2);
        let card = CardinalBallot::new([(ps[1].clone(), num(5)), (ps[2].clone(), num(2))]);
        let mut profile =
            ApprovalProfile::from_ballots([ApprovalBallot::new([ps[0].clone()])]).unwrap();

        assert_eq!(
            profile.append(&card),
            Err(ElectionError::TypeValidation {
                expected: BallotKind::Approval,
                found: BallotKind::Cardinal
            })
        );
        assert_eq!(profile.len(), 1);
        assert!(profile.insert(0, &card).is_err());
        assert!(profile.set(0, &card).is_err());
        assert!(profile.extend([AnyBallot::from(&card)]).is_err());
        assert_eq!(profile.len(), 1);
        assert!(ApprovalProfile::from_ballots([&card]).is_err());

        profile.set_ballot_validation(false);
        profile.append(&card).unwrap();
        assert_eq!(profile.len(), 2);
        assert_eq!(profile[1].kind(), BallotKind::Cardinal);
    }

    #[test]
    fn rejected_extend_changes_nothing() {
        let ps = projects(3, 2);
        let mut profile = ApprovalProfile::builder()
            .legal_length(Some(1), Some(2))
            .build();
        let ok = ApprovalBallot::new([ps[0].clone()]);
        let too_long = ApprovalBallot::new(ps.clone());
        let res = profile.extend([&ok, &ok, &too_long]);
        assert!(matches!(res, Err(ElectionError::LegalityViolation { .. })));
        assert!(profile.is_empty());
        profile.extend([&ok, &ok]).unwrap();
        assert_eq!(profile.len(), 2);
    }

    #[test]
    fn approval_legality_bounds() {
        let ps = projects(10, 2);
        let instance = Rc::new(Instance::new(ps.clone(), num(1)).unwrap());
        let mut profile = ApprovalProfile::builder()
            .instance(&instance)
            .legal_cost(Some(num(2)), Some(num(9)))
            .legal_length(Some(1), Some(4))
            .build();
        profile
            .append(ApprovalBallot::new(ps[..2].to_vec()))
            .unwrap();
        // Five projects: too long and too expensive.
        assert!(matches!(
            profile.append(ApprovalBallot::new(ps[..5].to_vec())),
            Err(ElectionError::LegalityViolation { .. })
        ));
        // Empty ballots are too short.
        assert!(profile.append(ApprovalBallot::default()).is_err());
        assert_eq!(profile.len(), 1);
        profile.set_ballot_validation(false);
        profile.append(ApprovalBallot::default()).unwrap();
        assert_eq!(profile.len(), 2);
    }

    #[test]
    fn party_list_and_triviality() {
        init_logs();
        let ps = projects(10, 2);
        let instance = Rc::new(Instance::new(ps.clone(), num(1)).unwrap());
        let b1 = ApprovalBallot::new([ps[0].clone(), ps[1].clone()]);
        let b2 = ApprovalBallot::new([ps[2].clone(), ps[3].clone()]);
        let b3 = ApprovalBallot::new([ps[4].clone(), ps[5].clone()]);

        let ballots: Vec<&ApprovalBallot> = std::iter::repeat(&b1)
            .take(5)
            .chain(std::iter::repeat(&b2).take(8))
            .chain(std::iter::repeat(&b3).take(5))
            .collect();
        let mut profile = ApprovalProfile::builder()
            .instance(&instance)
            .build_with(ballots)
            .unwrap();
        assert_eq!(profile.len(), 18);
        assert!(profile.is_party_list());
        profile
            .append(ApprovalBallot::new([ps[0].clone(), ps[4].clone()]))
            .unwrap();
        assert!(!profile.is_party_list());

        assert_eq!(profile.approved_projects().len(), 6);
        assert_eq!(profile.approval_score(&ps[0]), 6);
        assert_eq!(profile.approval_score(&ps[9]), 0);

        // Six projects of cost 2 fit in a budget of 12 only.
        instance.set_budget_limit(num(12));
        assert_eq!(profile.is_trivial(), Ok(true));
        instance.set_budget_limit(num(3));
        assert_eq!(profile.is_trivial(), Ok(false));

        assert_eq!(
            ApprovalProfile::new().is_trivial(),
            Err(ElectionError::MissingInstance {})
        );
    }

    #[test]
    fn party_list_with_empty_and_singletons() {
        let ps = projects(3, 1);
        let profile = ApprovalProfile::from_ballots([
            ApprovalBallot::default(),
            ApprovalBallot::new([ps[0].clone()]),
            ApprovalBallot::default(),
            ApprovalBallot::new([ps[1].clone(), ps[2].clone()]),
        ])
        .unwrap();
        assert!(profile.is_party_list());
        let nested = ApprovalProfile::from_ballots([
            ApprovalBallot::new([ps[1].clone()]),
            ApprovalBallot::new([ps[1].clone(), ps[2].clone()]),
        ])
        .unwrap();
        assert!(!nested.is_party_list());
    }

    #[test]
    fn cardinal_profile_validation_and_completion() {
        let ps = projects(10, 2);
        let scores = |vals: [i64; 5]| -> CardinalBallot {
            CardinalBallot::new((1..6).map(|i| (ps[i].clone(), num(vals[i - 1]))))
        };
        let b1 = scores([4, 74, 12, 7, -41]);
        let b2 = scores([41, 4, 68, 7, 0]);

        let mut bounded = CardinalProfile::builder()
            .legal_score(Some(num(2)), Some(num(9)))
            .legal_length(Some(3), Some(10))
            .build();
        assert!(matches!(
            bounded.append(&b1),
            Err(ElectionError::LegalityViolation {
                kind: BallotKind::Cardinal,
                ..
            })
        ));
        bounded.append(scores([2, 3, 4, 5, 9])).unwrap();
        assert_eq!(bounded.len(), 1);
        assert!(bounded
            .append(ApprovalBallot::new([ps[1].clone(), ps[2].clone()]))
            .is_err());
        assert!(bounded
            .append(CumulativeBallot::new([(ps[1].clone(), num(3))]))
            .is_err());

        let mut profile = CardinalProfile::from_ballots([&b1, &b2]).unwrap();
        assert_eq!(profile[0], b1);
        assert_eq!(profile[1], b2);
        let distinct = |p: &CardinalProfile| -> usize {
            p.iter()
                .flat_map(|b| b.projects())
                .collect::<BTreeSet<_>>()
                .len()
        };
        assert_eq!(distinct(&profile), 5);
        profile.complete(&ps, fraction(1, 5));
        assert_eq!(distinct(&profile), 10);
        let first = profile[0].scores().unwrap();
        assert_eq!(first.get(&ps[1]), Some(num(4)));
        assert_eq!(first.get(&ps[0]), Some(fraction(1, 5)));
        assert_eq!(profile.total_score(&ps[1]), num(45));
        assert_eq!(profile.total_score(&ps[9]), fraction(2, 5));
    }

    #[test]
    fn cumulative_total_score_bounds() {
        let ps = projects(3, 2);
        let mut profile = CumulativeProfile::builder()
            .legal_score(Some(num(0)), Some(num(9)))
            .legal_total_score(Some(num(0)), Some(num(10)))
            .build();
        profile
            .append(CumulativeBallot::new([
                (ps[0].clone(), num(5)),
                (ps[1].clone(), num(5)),
            ]))
            .unwrap();
        let over = CumulativeBallot::new([
            (ps[0].clone(), num(5)),
            (ps[1].clone(), num(5)),
            (ps[2].clone(), num(1)),
        ]);
        assert!(matches!(
            profile.append(&over),
            Err(ElectionError::LegalityViolation {
                kind: BallotKind::Cumulative,
                ..
            })
        ));
        assert!(profile
            .append(CardinalBallot::new([(ps[0].clone(), num(1))]))
            .is_err());

        profile.complete(&ps, num(1));
        assert_eq!(profile[0].scores().unwrap().total_score(), num(11));
        assert_eq!(profile.len(), 1);
    }

    #[test]
    fn large_costs_and_fine_fractions_stay_exact() {
        let big = i64::MAX / 2 + 1;
        let ps = vec![Project::new("a", num(big)), Project::new("b", num(big))];
        let ballot = ApprovalBallot::new(ps.clone());

        let mut unbounded = ApprovalProfile::new();
        unbounded.append(&ballot).unwrap();
        assert_eq!(ballot.total_cost(), num(big) + num(big));

        let mut bounded = ApprovalProfile::builder()
            .legal_cost(None, Some(num(i64::MAX)))
            .build();
        assert!(matches!(
            bounded.append(&ballot),
            Err(ElectionError::LegalityViolation { .. })
        ));

        // The sum of 1/k for k in 2..60 is about 3.66.
        let spread = CumulativeBallot::new(
            (2..60).map(|k| (Project::new(&format!("q{}", k), num(1)), fraction(1, k))),
        );
        let mut loose = CumulativeProfile::builder()
            .legal_total_score(None, Some(num(10)))
            .build();
        loose.append(&spread).unwrap();
        let mut tight = CumulativeProfile::builder()
            .legal_total_score(None, Some(num(3)))
            .build();
        assert!(tight.append(&spread).is_err());
        assert!(tight.is_empty());
    }

    #[test]
    fn ordinal_length_bounds() {
        let ps = projects(10, 2);
        let mut profile = OrdinalProfile::builder()
            .legal_length(Some(1), Some(3))
            .build();
        profile
            .extend([
                OrdinalBallot::new(ps[0..3].to_vec()),
                OrdinalBallot::new(ps[4..6].to_vec()),
            ])
            .unwrap();
        assert!(profile.append(OrdinalBallot::default()).is_err());
        assert!(profile.append(OrdinalBallot::new(ps.clone())).is_err());
        assert!(profile
            .append(ApprovalBallot::new([ps[0].clone()]))
            .is_err());
        assert_eq!(profile.len(), 2);
        assert_eq!(profile.ballot_type(), BallotKind::Ordinal);
    }

    #[test]
    fn frozen_ballots_are_accepted() {
        let ps = projects(2, 1);
        let frozen = FrozenApprovalBallot::new([ps[0].clone()]).with_name("v1");
        let mut profile = ApprovalProfile::new();
        profile.append(frozen.clone()).unwrap();
        assert_eq!(profile[0], frozen.thaw());
        assert_eq!(profile[0].meta().name.as_deref(), Some("v1"));
    }
}
