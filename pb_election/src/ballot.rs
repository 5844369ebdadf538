//! Ballots: what a single voter says about the projects.
//!
//! Each kind comes in a mutable form, used while the intent of the voter is
//! being assembled, and a frozen form. Frozen ballots cannot be changed once
//! built and are hashable, which makes them usable as keys of a
//! [`MultiProfile`](crate::multiprofile::MultiProfile).
//!
//! Equality and hashing only look at the content of a ballot. The descriptive
//! [`BallotMeta`] travels with the ballot but is ignored by both.

use std::collections::{btree_map, btree_set, BTreeMap, BTreeSet};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut};

use crate::config::*;
use crate::instance::Project;

/// Descriptive data attached to a ballot.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct BallotMeta {
    /// A label for the ballot, such as a voter id.
    pub name: Option<String>,
    /// Free-form annotations (district, age group, ...).
    ///
    /// Keys and values are both strings: numbers, dates or nested data are
    /// stored in their text form and parsed back by whoever reads them.
    pub meta: BTreeMap<String, String>,
}

/// The capabilities shared by the four mutable ballot kinds.
///
/// Profiles are generic over this trait: the implementing type is the kind
/// of ballot the profile is declared to hold.
pub trait Ballot: Clone + fmt::Debug + PartialEq + Into<AnyBallot> {
    const KIND: BallotKind;
    type Frozen: Clone + fmt::Debug + Eq + Hash + Deref<Target = Self> + Into<AnyFrozenBallot>;
    /// The legality bounds a profile of this kind can enforce.
    type Bounds: Clone + fmt::Debug + Default + PartialEq;

    fn freeze(&self) -> Self::Frozen;
    fn from_any(ballot: &AnyBallot) -> Option<&Self>;
    fn from_any_frozen(ballot: &AnyFrozenBallot) -> Option<&Self>;
    fn check_legality(&self, bounds: &Self::Bounds) -> ElectionResult<()>;
    fn meta(&self) -> &BallotMeta;
}

/// Ballots made of a score per project: cardinal and cumulative ballots.
pub trait ScoredBallot: Ballot {}

impl ScoredBallot for CardinalBallot {}
impl ScoredBallot for CumulativeBallot {}

// ********* Approval **********

/// The set of projects approved by a voter.
#[derive(Debug, Clone, Default)]
pub struct ApprovalBallot {
    projects: BTreeSet<Project>,
    info: BallotMeta,
}

impl ApprovalBallot {
    pub fn new(projects: impl IntoIterator<Item = Project>) -> ApprovalBallot {
        ApprovalBallot {
            projects: projects.into_iter().collect(),
            info: BallotMeta::default(),
        }
    }

    pub fn with_name(mut self, name: &str) -> ApprovalBallot {
        self.info.name = Some(name.to_string());
        self
    }

    pub fn with_meta(mut self, key: &str, value: &str) -> ApprovalBallot {
        self.info.meta.insert(key.to_string(), value.to_string());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.info.name.as_deref()
    }

    /// Adds a project. Returns false if it was already approved.
    pub fn insert(&mut self, project: Project) -> bool {
        self.projects.insert(project)
    }

    pub fn remove(&mut self, project: &Project) -> bool {
        self.projects.remove(project)
    }

    pub fn contains(&self, project: &Project) -> bool {
        self.projects.contains(project)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn iter(&self) -> btree_set::Iter<'_, Project> {
        self.projects.iter()
    }

    pub fn total_cost(&self) -> Numeric {
        crate::instance::total_cost(self.projects.iter())
    }

    pub fn is_disjoint(&self, other: &ApprovalBallot) -> bool {
        self.projects.is_disjoint(&other.projects)
    }

    pub fn freeze(&self) -> FrozenApprovalBallot {
        FrozenApprovalBallot(self.clone())
    }
}

impl PartialEq for ApprovalBallot {
    fn eq(&self, other: &ApprovalBallot) -> bool {
        self.projects == other.projects
    }
}

impl Eq for ApprovalBallot {}

impl<'a> IntoIterator for &'a ApprovalBallot {
    type Item = &'a Project;
    type IntoIter = btree_set::Iter<'a, Project>;

    fn into_iter(self) -> Self::IntoIter {
        self.projects.iter()
    }
}

impl FromIterator<Project> for ApprovalBallot {
    fn from_iter<I: IntoIterator<Item = Project>>(iter: I) -> Self {
        ApprovalBallot::new(iter)
    }
}

/// An approval ballot that cannot change anymore.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrozenApprovalBallot(ApprovalBallot);

impl FrozenApprovalBallot {
    pub fn new(projects: impl IntoIterator<Item = Project>) -> FrozenApprovalBallot {
        FrozenApprovalBallot(ApprovalBallot::new(projects))
    }

    pub fn with_name(self, name: &str) -> FrozenApprovalBallot {
        FrozenApprovalBallot(self.0.with_name(name))
    }

    pub fn with_meta(self, key: &str, value: &str) -> FrozenApprovalBallot {
        FrozenApprovalBallot(self.0.with_meta(key, value))
    }

    pub fn thaw(&self) -> ApprovalBallot {
        self.0.clone()
    }
}

impl Hash for FrozenApprovalBallot {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.projects.hash(state);
    }
}

impl Deref for FrozenApprovalBallot {
    type Target = ApprovalBallot;

    fn deref(&self) -> &ApprovalBallot {
        &self.0
    }
}

// ********* Cardinal **********

/// A score given by a voter to each project of the ballot.
#[derive(Debug, Clone, Default)]
pub struct CardinalBallot {
    scores: BTreeMap<Project, Numeric>,
    info: BallotMeta,
}

impl CardinalBallot {
    pub fn new(scores: impl IntoIterator<Item = (Project, Numeric)>) -> CardinalBallot {
        CardinalBallot {
            scores: scores.into_iter().collect(),
            info: BallotMeta::default(),
        }
    }

    pub fn with_name(mut self, name: &str) -> CardinalBallot {
        self.info.name = Some(name.to_string());
        self
    }

    pub fn with_meta(mut self, key: &str, value: &str) -> CardinalBallot {
        self.info.meta.insert(key.to_string(), value.to_string());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.info.name.as_deref()
    }

    /// Sets the score of a project, returning the previous one if any.
    pub fn insert(&mut self, project: Project, score: Numeric) -> Option<Numeric> {
        self.scores.insert(project, score)
    }

    pub fn remove(&mut self, project: &Project) -> Option<Numeric> {
        self.scores.remove(project)
    }

    pub fn get(&self, project: &Project) -> Option<Numeric> {
        self.scores.get(project).cloned()
    }

    pub fn contains(&self, project: &Project) -> bool {
        self.scores.contains_key(project)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Project, Numeric> {
        self.scores.iter()
    }

    pub fn projects(&self) -> btree_map::Keys<'_, Project, Numeric> {
        self.scores.keys()
    }

    pub fn total_score(&self) -> Numeric {
        self.scores
            .values()
            .fold(integer(0), |acc, s| acc + s)
    }

    /// Gives `default_score` to every project in `projects` that has no score yet.
    /// Existing scores are kept.
    pub fn complete<'a>(
        &mut self,
        projects: impl IntoIterator<Item = &'a Project>,
        default_score: &Numeric,
    ) {
        for p in projects {
            self.scores
                .entry(p.clone())
                .or_insert_with(|| default_score.clone());
        }
    }

    pub fn freeze(&self) -> FrozenCardinalBallot {
        FrozenCardinalBallot(self.clone())
    }
}

impl PartialEq for CardinalBallot {
    fn eq(&self, other: &CardinalBallot) -> bool {
        self.scores == other.scores
    }
}

impl Eq for CardinalBallot {}

impl<'a> IntoIterator for &'a CardinalBallot {
    type Item = (&'a Project, &'a Numeric);
    type IntoIter = btree_map::Iter<'a, Project, Numeric>;

    fn into_iter(self) -> Self::IntoIter {
        self.scores.iter()
    }
}

/// A cardinal ballot that cannot change anymore.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrozenCardinalBallot(CardinalBallot);

impl FrozenCardinalBallot {
    pub fn new(scores: impl IntoIterator<Item = (Project, Numeric)>) -> FrozenCardinalBallot {
        FrozenCardinalBallot(CardinalBallot::new(scores))
    }

    pub fn with_name(self, name: &str) -> FrozenCardinalBallot {
        FrozenCardinalBallot(self.0.with_name(name))
    }

    pub fn with_meta(self, key: &str, value: &str) -> FrozenCardinalBallot {
        FrozenCardinalBallot(self.0.with_meta(key, value))
    }

    pub fn thaw(&self) -> CardinalBallot {
        self.0.clone()
    }
}

impl Hash for FrozenCardinalBallot {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.scores.hash(state);
    }
}

impl Deref for FrozenCardinalBallot {
    type Target = CardinalBallot;

    fn deref(&self) -> &CardinalBallot {
        &self.0
    }
}

// ********* Cumulative **********

/// A cardinal ballot whose scores are points distributed by the voter.
///
/// It reads and edits like a [`CardinalBallot`], but it is a kind of its own:
/// it never equals a cardinal ballot and profiles tell the two apart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CumulativeBallot(CardinalBallot);

impl CumulativeBallot {
    pub fn new(scores: impl IntoIterator<Item = (Project, Numeric)>) -> CumulativeBallot {
        CumulativeBallot(CardinalBallot::new(scores))
    }

    pub fn with_name(self, name: &str) -> CumulativeBallot {
        CumulativeBallot(self.0.with_name(name))
    }

    pub fn with_meta(self, key: &str, value: &str) -> CumulativeBallot {
        CumulativeBallot(self.0.with_meta(key, value))
    }

    pub fn freeze(&self) -> FrozenCumulativeBallot {
        FrozenCumulativeBallot(self.clone())
    }
}

impl Deref for CumulativeBallot {
    type Target = CardinalBallot;

    fn deref(&self) -> &CardinalBallot {
        &self.0
    }
}

impl DerefMut for CumulativeBallot {
    fn deref_mut(&mut self) -> &mut CardinalBallot {
        &mut self.0
    }
}

/// A cumulative ballot that cannot change anymore.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrozenCumulativeBallot(CumulativeBallot);

impl FrozenCumulativeBallot {
    pub fn new(scores: impl IntoIterator<Item = (Project, Numeric)>) -> FrozenCumulativeBallot {
        FrozenCumulativeBallot(CumulativeBallot::new(scores))
    }

    pub fn with_name(self, name: &str) -> FrozenCumulativeBallot {
        FrozenCumulativeBallot(self.0.with_name(name))
    }

    pub fn with_meta(self, key: &str, value: &str) -> FrozenCumulativeBallot {
        FrozenCumulativeBallot(self.0.with_meta(key, value))
    }

    pub fn thaw(&self) -> CumulativeBallot {
        self.0.clone()
    }
}

impl Hash for FrozenCumulativeBallot {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0 .0.scores.hash(state);
    }
}

impl Deref for FrozenCumulativeBallot {
    type Target = CumulativeBallot;

    fn deref(&self) -> &CumulativeBallot {
        &self.0
    }
}

// ********* Ordinal **********

/// A ranking of projects, the most preferred first.
///
/// A project appears at most once. Building a ballot from a sequence with
/// repetitions keeps the first occurrence of each project.
#[derive(Debug, Clone, Default)]
pub struct OrdinalBallot {
    ranking: Vec<Project>,
    info: BallotMeta,
}

impl OrdinalBallot {
    pub fn new(ranking: impl IntoIterator<Item = Project>) -> OrdinalBallot {
        let mut res = OrdinalBallot::default();
        for p in ranking {
            res.push(p);
        }
        res
    }

    pub fn with_name(mut self, name: &str) -> OrdinalBallot {
        self.info.name = Some(name.to_string());
        self
    }

    pub fn with_meta(mut self, key: &str, value: &str) -> OrdinalBallot {
        self.info.meta.insert(key.to_string(), value.to_string());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.info.name.as_deref()
    }

    /// Ranks a project last. Returns false, and changes nothing, if the
    /// project is already ranked.
    pub fn push(&mut self, project: Project) -> bool {
        if self.contains(&project) {
            return false;
        }
        self.ranking.push(project);
        true
    }

    /// Ranks a project at the given position (clamped to the end of the ranking).
    /// Returns false, and changes nothing, if the project is already ranked.
    pub fn insert(&mut self, index: usize, project: Project) -> bool {
        if self.contains(&project) {
            return false;
        }
        let index = index.min(self.ranking.len());
        self.ranking.insert(index, project);
        true
    }

    pub fn remove(&mut self, project: &Project) -> bool {
        match self.position(project) {
            Some(idx) => {
                self.ranking.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, project: &Project) -> bool {
        self.ranking.contains(project)
    }

    /// The rank of a project, 0 being the most preferred.
    pub fn position(&self, project: &Project) -> Option<usize> {
        self.ranking.iter().position(|p| p == project)
    }

    pub fn at(&self, index: usize) -> Option<&Project> {
        self.ranking.get(index)
    }

    pub fn len(&self) -> usize {
        self.ranking.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranking.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Project> {
        self.ranking.iter()
    }

    pub fn freeze(&self) -> FrozenOrdinalBallot {
        FrozenOrdinalBallot(self.clone())
    }
}

impl PartialEq for OrdinalBallot {
    fn eq(&self, other: &OrdinalBallot) -> bool {
        self.ranking == other.ranking
    }
}

impl Eq for OrdinalBallot {}

impl<'a> IntoIterator for &'a OrdinalBallot {
    type Item = &'a Project;
    type IntoIter = std::slice::Iter<'a, Project>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranking.iter()
    }
}

impl FromIterator<Project> for OrdinalBallot {
    fn from_iter<I: IntoIterator<Item = Project>>(iter: I) -> Self {
        OrdinalBallot::new(iter)
    }
}

/// An ordinal ballot that cannot change anymore.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrozenOrdinalBallot(OrdinalBallot);

impl FrozenOrdinalBallot {
    pub fn new(ranking: impl IntoIterator<Item = Project>) -> FrozenOrdinalBallot {
        FrozenOrdinalBallot(OrdinalBallot::new(ranking))
    }

    pub fn with_name(self, name: &str) -> FrozenOrdinalBallot {
        FrozenOrdinalBallot(self.0.with_name(name))
    }

    pub fn with_meta(self, key: &str, value: &str) -> FrozenOrdinalBallot {
        FrozenOrdinalBallot(self.0.with_meta(key, value))
    }

    pub fn thaw(&self) -> OrdinalBallot {
        self.0.clone()
    }
}

impl Hash for FrozenOrdinalBallot {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.ranking.hash(state);
    }
}

impl Deref for FrozenOrdinalBallot {
    type Target = OrdinalBallot;

    fn deref(&self) -> &OrdinalBallot {
        &self.0
    }
}

// ********* Tagged variants **********

/// A ballot of any kind, as stored in a profile.
///
/// Ballots of different kinds never compare equal.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum AnyBallot {
    Approval(ApprovalBallot),
    Cardinal(CardinalBallot),
    Cumulative(CumulativeBallot),
    Ordinal(OrdinalBallot),
}

/// A frozen ballot of any kind, as stored in a multiprofile.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub enum AnyFrozenBallot {
    Approval(FrozenApprovalBallot),
    Cardinal(FrozenCardinalBallot),
    Cumulative(FrozenCumulativeBallot),
    Ordinal(FrozenOrdinalBallot),
}

impl AnyBallot {
    pub fn kind(&self) -> BallotKind {
        match self {
            AnyBallot::Approval(_) => BallotKind::Approval,
            AnyBallot::Cardinal(_) => BallotKind::Cardinal,
            AnyBallot::Cumulative(_) => BallotKind::Cumulative,
            AnyBallot::Ordinal(_) => BallotKind::Ordinal,
        }
    }

    /// The projects mentioned by the ballot, whatever its kind.
    pub fn projects(&self) -> Box<dyn Iterator<Item = &Project> + '_> {
        match self {
            AnyBallot::Approval(b) => Box::new(b.iter()),
            AnyBallot::Cardinal(b) => Box::new(b.projects()),
            AnyBallot::Cumulative(b) => Box::new(b.projects()),
            AnyBallot::Ordinal(b) => Box::new(b.iter()),
        }
    }

    pub fn meta(&self) -> &BallotMeta {
        match self {
            AnyBallot::Approval(b) => &b.info,
            AnyBallot::Cardinal(b) => &b.info,
            AnyBallot::Cumulative(b) => &b.0.info,
            AnyBallot::Ordinal(b) => &b.info,
        }
    }

    /// The scores of a cardinal or cumulative ballot.
    pub fn scores_mut(&mut self) -> Option<&mut CardinalBallot> {
        match self {
            AnyBallot::Cardinal(b) => Some(b),
            AnyBallot::Cumulative(b) => Some(&mut **b),
            _ => None,
        }
    }

    pub fn scores(&self) -> Option<&CardinalBallot> {
        match self {
            AnyBallot::Cardinal(b) => Some(b),
            AnyBallot::Cumulative(b) => Some(&**b),
            _ => None,
        }
    }

    pub fn freeze(&self) -> AnyFrozenBallot {
        match self {
            AnyBallot::Approval(b) => AnyFrozenBallot::Approval(b.freeze()),
            AnyBallot::Cardinal(b) => AnyFrozenBallot::Cardinal(b.freeze()),
            AnyBallot::Cumulative(b) => AnyFrozenBallot::Cumulative(b.freeze()),
            AnyBallot::Ordinal(b) => AnyFrozenBallot::Ordinal(b.freeze()),
        }
    }
}

impl AnyFrozenBallot {
    pub fn kind(&self) -> BallotKind {
        self.thaw_ref().kind()
    }

    pub fn projects(&self) -> Box<dyn Iterator<Item = &Project> + '_> {
        match self {
            AnyFrozenBallot::Approval(b) => Box::new(b.iter()),
            AnyFrozenBallot::Cardinal(b) => Box::new(b.projects()),
            AnyFrozenBallot::Cumulative(b) => Box::new(b.projects()),
            AnyFrozenBallot::Ordinal(b) => Box::new(b.iter()),
        }
    }

    pub fn scores(&self) -> Option<&CardinalBallot> {
        match self {
            AnyFrozenBallot::Cardinal(b) => Some(&**b),
            AnyFrozenBallot::Cumulative(b) => Some(&***b),
            _ => None,
        }
    }

    pub fn meta(&self) -> &BallotMeta {
        self.thaw_ref().meta()
    }

    pub fn thaw(&self) -> AnyBallot {
        self.thaw_ref().to_any()
    }

    fn thaw_ref(&self) -> AnyBallotRef<'_> {
        match self {
            AnyFrozenBallot::Approval(b) => AnyBallotRef::Approval(&**b),
            AnyFrozenBallot::Cardinal(b) => AnyBallotRef::Cardinal(&**b),
            AnyFrozenBallot::Cumulative(b) => AnyBallotRef::Cumulative(&**b),
            AnyFrozenBallot::Ordinal(b) => AnyBallotRef::Ordinal(&**b),
        }
    }
}

// Borrowed view of the content of a frozen ballot.
enum AnyBallotRef<'a> {
    Approval(&'a ApprovalBallot),
    Cardinal(&'a CardinalBallot),
    Cumulative(&'a CumulativeBallot),
    Ordinal(&'a OrdinalBallot),
}

impl<'a> AnyBallotRef<'a> {
    fn kind(&self) -> BallotKind {
        match self {
            AnyBallotRef::Approval(_) => BallotKind::Approval,
            AnyBallotRef::Cardinal(_) => BallotKind::Cardinal,
            AnyBallotRef::Cumulative(_) => BallotKind::Cumulative,
            AnyBallotRef::Ordinal(_) => BallotKind::Ordinal,
        }
    }

    fn meta(&self) -> &'a BallotMeta {
        match self {
            AnyBallotRef::Approval(b) => &b.info,
            AnyBallotRef::Cardinal(b) => &b.info,
            AnyBallotRef::Cumulative(b) => &b.0.info,
            AnyBallotRef::Ordinal(b) => &b.info,
        }
    }

    fn to_any(&self) -> AnyBallot {
        match self {
            AnyBallotRef::Approval(b) => AnyBallot::Approval((*b).clone()),
            AnyBallotRef::Cardinal(b) => AnyBallot::Cardinal((*b).clone()),
            AnyBallotRef::Cumulative(b) => AnyBallot::Cumulative((*b).clone()),
            AnyBallotRef::Ordinal(b) => AnyBallot::Ordinal((*b).clone()),
        }
    }
}

impl From<AnyFrozenBallot> for AnyBallot {
    fn from(ballot: AnyFrozenBallot) -> AnyBallot {
        ballot.thaw()
    }
}

impl From<&AnyBallot> for AnyBallot {
    fn from(ballot: &AnyBallot) -> AnyBallot {
        ballot.clone()
    }
}

impl From<&AnyFrozenBallot> for AnyFrozenBallot {
    fn from(ballot: &AnyFrozenBallot) -> AnyFrozenBallot {
        ballot.clone()
    }
}

impl From<AnyBallot> for AnyFrozenBallot {
    fn from(ballot: AnyBallot) -> AnyFrozenBallot {
        ballot.freeze()
    }
}

impl From<&AnyBallot> for AnyFrozenBallot {
    fn from(ballot: &AnyBallot) -> AnyFrozenBallot {
        ballot.freeze()
    }
}

// Wires one kind into the tagged variants and the Ballot trait.
macro_rules! ballot_kind {
    ($variant:ident, $ballot:ty, $frozen:ty, $bounds:ty) => {
        impl Ballot for $ballot {
            const KIND: BallotKind = BallotKind::$variant;
            type Frozen = $frozen;
            type Bounds = $bounds;

            fn freeze(&self) -> $frozen {
                <$ballot>::freeze(self)
            }

            fn from_any(ballot: &AnyBallot) -> Option<&$ballot> {
                match ballot {
                    AnyBallot::$variant(b) => Some(b),
                    _ => None,
                }
            }

            fn from_any_frozen(ballot: &AnyFrozenBallot) -> Option<&$ballot> {
                match ballot {
                    AnyFrozenBallot::$variant(b) => Some(&**b),
                    _ => None,
                }
            }

            fn check_legality(&self, bounds: &$bounds) -> ElectionResult<()> {
                bounds.check(self)
            }

            fn meta(&self) -> &BallotMeta {
                AnyBallotRef::$variant(self).meta()
            }
        }

        impl From<$ballot> for AnyBallot {
            fn from(ballot: $ballot) -> AnyBallot {
                AnyBallot::$variant(ballot)
            }
        }

        impl From<&$ballot> for AnyBallot {
            fn from(ballot: &$ballot) -> AnyBallot {
                AnyBallot::$variant(ballot.clone())
            }
        }

        impl From<$frozen> for AnyBallot {
            fn from(ballot: $frozen) -> AnyBallot {
                AnyBallot::$variant(ballot.thaw())
            }
        }

        impl From<$frozen> for AnyFrozenBallot {
            fn from(ballot: $frozen) -> AnyFrozenBallot {
                AnyFrozenBallot::$variant(ballot)
            }
        }

        impl From<&$frozen> for AnyFrozenBallot {
            fn from(ballot: &$frozen) -> AnyFrozenBallot {
                AnyFrozenBallot::$variant(ballot.clone())
            }
        }

        impl From<&$frozen> for AnyBallot {
            fn from(ballot: &$frozen) -> AnyBallot {
                AnyBallot::$variant(ballot.thaw())
            }
        }

        impl From<$ballot> for AnyFrozenBallot {
            fn from(ballot: $ballot) -> AnyFrozenBallot {
                AnyFrozenBallot::$variant(ballot.freeze())
            }
        }

        impl From<&$ballot> for AnyFrozenBallot {
            fn from(ballot: &$ballot) -> AnyFrozenBallot {
                AnyFrozenBallot::$variant(ballot.freeze())
            }
        }

        impl PartialEq<$ballot> for AnyBallot {
            fn eq(&self, other: &$ballot) -> bool {
                matches!(self, AnyBallot::$variant(b) if b == other)
            }
        }

        impl PartialEq<$frozen> for AnyFrozenBallot {
            fn eq(&self, other: &$frozen) -> bool {
                matches!(self, AnyFrozenBallot::$variant(b) if b == other)
            }
        }
    };
}

ballot_kind!(Approval, ApprovalBallot, FrozenApprovalBallot, ApprovalBounds);
ballot_kind!(Cardinal, CardinalBallot, FrozenCardinalBallot, CardinalBounds);
ballot_kind!(
    Cumulative,
    CumulativeBallot,
    FrozenCumulativeBallot,
    CumulativeBounds
);
ballot_kind!(Ordinal, OrdinalBallot, FrozenOrdinalBallot, OrdinalBounds);
