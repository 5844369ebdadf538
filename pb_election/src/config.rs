// ********* Shared data structures ***********

use log::debug;
use num::BigInt;
use snafu::prelude::*;
use std::fmt::Display;
use std::rc::Rc;

use crate::ballot::{
    AnyBallot, AnyFrozenBallot, ApprovalBallot, Ballot, CardinalBallot, CumulativeBallot,
    OrdinalBallot,
};
use crate::instance::Instance;

/// The number type used for costs, budget limits and scores.
///
/// Rationals are exact, which gives ballots a total equality and a stable hash.
/// Numerator and denominator are unbounded, so sums of costs or scores never
/// overflow.
pub type Numeric = num::BigRational;

/// An integer as a [`Numeric`].
pub fn integer(n: i64) -> Numeric {
    Numeric::from_integer(BigInt::from(n))
}

/// The fraction `numer / denom`, reduced. Panics if `denom` is zero.
pub fn fraction(numer: i64, denom: i64) -> Numeric {
    Numeric::new(BigInt::from(numer), BigInt::from(denom))
}

/// The four formats in which a voter can express preferences.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Ord, PartialOrd)]
pub enum BallotKind {
    /// A set of approved projects.
    Approval,
    /// A score for each project, without constraint between scores.
    Cardinal,
    /// A score for each project, with bounds on the sum of the scores.
    Cumulative,
    /// A ranking of projects, from most to least preferred.
    Ordinal,
}

impl Display for BallotKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BallotKind::Approval => "approval",
            BallotKind::Cardinal => "cardinal",
            BallotKind::Cumulative => "cumulative",
            BallotKind::Ordinal => "ordinal",
        };
        write!(f, "{}", s)
    }
}

/// Errors raised while building instances or feeding ballots into profiles.
///
/// All of them are rejected-mutation failures: the collection that raised
/// them is left exactly as it was before the call.
#[derive(Debug, Snafu, PartialEq, Eq, Clone)]
#[snafu(visibility(pub(crate)))]
pub enum ElectionError {
    #[snafu(display("expected a {expected} ballot, found a {found} ballot"))]
    TypeValidation {
        expected: BallotKind,
        found: BallotKind,
    },
    #[snafu(display("{kind} ballot violates {constraint} (found {value})"))]
    LegalityViolation {
        kind: BallotKind,
        constraint: String,
        value: String,
    },
    #[snafu(display("two projects share the name {name}"))]
    DuplicateProject { name: String },
    #[snafu(display("project {name} has a negative cost ({cost})"))]
    NegativeCost { name: String, cost: String },
    #[snafu(display("the profile is not attached to an instance"))]
    MissingInstance {},
    #[snafu(display("index {index} is out of range for {len} ballots"))]
    IndexOutOfRange { index: isize, len: usize },
}

pub type ElectionResult<T> = Result<T, ElectionError>;

// ********* Legality bounds **********

// Every bound is optional; None means unbounded on that side.

#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct ApprovalBounds {
    /// Bounds on the total cost of the approved projects.
    pub legal_min_cost: Option<Numeric>,
    pub legal_max_cost: Option<Numeric>,
    /// Bounds on the number of approved projects.
    pub legal_min_length: Option<usize>,
    pub legal_max_length: Option<usize>,
}

#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct CardinalBounds {
    /// Bounds on every individual score.
    pub legal_min_score: Option<Numeric>,
    pub legal_max_score: Option<Numeric>,
    /// Bounds on the number of scored projects.
    pub legal_min_length: Option<usize>,
    pub legal_max_length: Option<usize>,
}

#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct CumulativeBounds {
    pub cardinal: CardinalBounds,
    /// Bounds on the sum of the scores of a ballot.
    pub legal_min_total_score: Option<Numeric>,
    pub legal_max_total_score: Option<Numeric>,
}

#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct OrdinalBounds {
    /// Bounds on the length of the ranking.
    pub legal_min_length: Option<usize>,
    pub legal_max_length: Option<usize>,
}

fn check_range<T: PartialOrd + Display>(
    kind: BallotKind,
    (min_name, max_name): (&str, &str),
    value: &T,
    min: Option<&T>,
    max: Option<&T>,
) -> ElectionResult<()> {
    if let Some(min) = min {
        ensure!(
            value >= min,
            LegalityViolationSnafu {
                kind,
                constraint: format!("{} = {}", min_name, min),
                value: value.to_string(),
            }
        );
    }
    if let Some(max) = max {
        ensure!(
            value <= max,
            LegalityViolationSnafu {
                kind,
                constraint: format!("{} = {}", max_name, max),
                value: value.to_string(),
            }
        );
    }
    Ok(())
}

impl ApprovalBounds {
    pub fn check(&self, ballot: &ApprovalBallot) -> ElectionResult<()> {
        check_range(
            BallotKind::Approval,
            ("legal_min_length", "legal_max_length"),
            &ballot.len(),
            self.legal_min_length.as_ref(),
            self.legal_max_length.as_ref(),
        )?;
        if self.legal_min_cost.is_none() && self.legal_max_cost.is_none() {
            return Ok(());
        }
        check_range(
            BallotKind::Approval,
            ("legal_min_cost", "legal_max_cost"),
            &ballot.total_cost(),
            self.legal_min_cost.as_ref(),
            self.legal_max_cost.as_ref(),
        )
    }
}

impl CardinalBounds {
    pub fn check(&self, ballot: &CardinalBallot) -> ElectionResult<()> {
        self.check_as(BallotKind::Cardinal, ballot)
    }

    fn check_as(&self, kind: BallotKind, ballot: &CardinalBallot) -> ElectionResult<()> {
        check_range(
            kind,
            ("legal_min_length", "legal_max_length"),
            &ballot.len(),
            self.legal_min_length.as_ref(),
            self.legal_max_length.as_ref(),
        )?;
        for (_, score) in ballot.iter() {
            check_range(
                kind,
                ("legal_min_score", "legal_max_score"),
                score,
                self.legal_min_score.as_ref(),
                self.legal_max_score.as_ref(),
            )?;
        }
        Ok(())
    }
}

impl CumulativeBounds {
    pub fn check(&self, ballot: &CumulativeBallot) -> ElectionResult<()> {
        self.cardinal.check_as(BallotKind::Cumulative, ballot)?;
        if self.legal_min_total_score.is_none() && self.legal_max_total_score.is_none() {
            return Ok(());
        }
        check_range(
            BallotKind::Cumulative,
            ("legal_min_total_score", "legal_max_total_score"),
            &ballot.total_score(),
            self.legal_min_total_score.as_ref(),
            self.legal_max_total_score.as_ref(),
        )
    }
}

impl OrdinalBounds {
    pub fn check(&self, ballot: &OrdinalBallot) -> ElectionResult<()> {
        check_range(
            BallotKind::Ordinal,
            ("legal_min_length", "legal_max_length"),
            &ballot.len(),
            self.legal_min_length.as_ref(),
            self.legal_max_length.as_ref(),
        )
    }
}

// ********* Profile configuration **********

/// What a profile or a multiprofile checks when ballots come in.
///
/// `ballot_validation` can be switched off to store ballots of the wrong kind
/// or outside of the bounds on purpose, e.g. to build malformed fixtures.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileConfig<B: Ballot> {
    /// The election the ballots refer to, shared with other profiles.
    pub instance: Option<Rc<Instance>>,
    pub ballot_validation: bool,
    pub bounds: B::Bounds,
}

impl<B: Ballot> Default for ProfileConfig<B> {
    fn default() -> Self {
        ProfileConfig {
            instance: None,
            ballot_validation: true,
            bounds: B::Bounds::default(),
        }
    }
}

impl<B: Ballot> ProfileConfig<B> {
    /// The kind of ballots a profile with this configuration accepts.
    pub fn ballot_type(&self) -> BallotKind {
        B::KIND
    }

    /// Checks that the ballot is of kind `B` exactly, then that it respects
    /// the bounds. Kinds never stand in for each other: a cardinal profile
    /// rejects a cumulative ballot, although both carry scores.
    /// Does nothing when validation is off.
    pub fn validate(&self, ballot: &AnyBallot) -> ElectionResult<()> {
        if !self.ballot_validation {
            return Ok(());
        }
        let res = B::from_any(ballot)
            .context(TypeValidationSnafu {
                expected: B::KIND,
                found: ballot.kind(),
            })
            .and_then(|b| b.check_legality(&self.bounds));
        if let Err(e) = &res {
            debug!("validate: rejected ballot {:?}: {}", ballot, e);
        }
        res
    }

    /// Same as [`ProfileConfig::validate`] for frozen ballots.
    pub fn validate_frozen(&self, ballot: &AnyFrozenBallot) -> ElectionResult<()> {
        if !self.ballot_validation {
            return Ok(());
        }
        let res = B::from_any_frozen(ballot)
            .context(TypeValidationSnafu {
                expected: B::KIND,
                found: ballot.kind(),
            })
            .and_then(|b| b.check_legality(&self.bounds));
        if let Err(e) = &res {
            debug!("validate_frozen: rejected ballot {:?}: {}", ballot, e);
        }
        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Project;

    fn project(name: &str, cost: i64) -> Project {
        Project::new(name, integer(cost))
    }

    #[test]
    fn approval_bounds_cost_and_length() {
        let ballot = ApprovalBallot::new([project("a", 2), project("b", 3)]);
        let bounds = ApprovalBounds {
            legal_min_cost: Some(integer(5)),
            legal_max_cost: Some(integer(5)),
            legal_min_length: Some(2),
            legal_max_length: Some(2),
        };
        assert_eq!(bounds.check(&ballot), Ok(()));

        let too_expensive = ApprovalBounds {
            legal_max_cost: Some(integer(4)),
            ..Default::default()
        };
        let err = too_expensive.check(&ballot).unwrap_err();
        assert!(matches!(
            err,
            ElectionError::LegalityViolation {
                kind: BallotKind::Approval,
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "approval ballot violates legal_max_cost = 4 (found 5)"
        );
    }

    #[test]
    fn unbounded_accepts_everything() {
        let ballot = CardinalBallot::new([(project("a", 1), integer(-1000))]);
        assert_eq!(CardinalBounds::default().check(&ballot), Ok(()));
        assert_eq!(
            OrdinalBounds::default().check(&OrdinalBallot::default()),
            Ok(())
        );
    }

    #[test]
    fn cumulative_bounds_total_score() {
        let ballot = CumulativeBallot::new([
            (project("a", 1), integer(3)),
            (project("b", 1), integer(4)),
        ]);
        let bounds = CumulativeBounds {
            cardinal: CardinalBounds {
                legal_max_score: Some(integer(4)),
                ..Default::default()
            },
            legal_max_total_score: Some(integer(6)),
            ..Default::default()
        };
        let err = bounds.check(&ballot).unwrap_err();
        assert!(matches!(
            err,
            ElectionError::LegalityViolation {
                kind: BallotKind::Cumulative,
                ..
            }
        ));
        let relaxed = CumulativeBounds {
            legal_max_total_score: Some(integer(7)),
            ..bounds
        };
        assert_eq!(relaxed.check(&ballot), Ok(()));
    }

    #[test]
    fn config_checks_kind_then_bounds() {
        let ballot: AnyBallot = OrdinalBallot::new([project("a", 1), project("b", 1)]).into();
        let mut config: ProfileConfig<OrdinalBallot> = ProfileConfig::default();
        assert_eq!(config.ballot_type(), BallotKind::Ordinal);
        assert_eq!(config.validate(&ballot), Ok(()));

        config.bounds.legal_max_length = Some(1);
        assert!(matches!(
            config.validate(&ballot),
            Err(ElectionError::LegalityViolation { .. })
        ));

        let approval: AnyBallot = ApprovalBallot::new([project("a", 1)]).into();
        assert_eq!(
            config.validate(&approval),
            Err(ElectionError::TypeValidation {
                expected: BallotKind::Ordinal,
                found: BallotKind::Approval
            })
        );
        assert_eq!(
            config.validate_frozen(&approval.freeze()),
            Err(ElectionError::TypeValidation {
                expected: BallotKind::Ordinal,
                found: BallotKind::Approval
            })
        );

        config.ballot_validation = false;
        assert_eq!(config.validate(&approval), Ok(()));
        assert_eq!(config.validate(&ballot), Ok(()));
    }

    #[test]
    fn scored_kinds_do_not_stand_in_for_each_other() {
        let scores = [(project("a", 1), integer(2))];
        let cumulative: AnyBallot = CumulativeBallot::new(scores.clone()).into();
        let cardinal: AnyBallot = CardinalBallot::new(scores).into();

        let cardinal_config: ProfileConfig<CardinalBallot> = ProfileConfig::default();
        assert_eq!(cardinal_config.validate(&cardinal), Ok(()));
        assert_eq!(
            cardinal_config.validate(&cumulative),
            Err(ElectionError::TypeValidation {
                expected: BallotKind::Cardinal,
                found: BallotKind::Cumulative
            })
        );
        assert!(cardinal_config
            .validate_frozen(&cumulative.freeze())
            .is_err());

        let cumulative_config: ProfileConfig<CumulativeBallot> = ProfileConfig::default();
        assert_eq!(
            cumulative_config.validate(&cardinal),
            Err(ElectionError::TypeValidation {
                expected: BallotKind::Cumulative,
                found: BallotKind::Cardinal
            })
        );
    }
}
