use std::rc::Rc;

pub use crate::ballot::*;
pub use crate::config::*;
use crate::instance::Instance;
use crate::multiprofile::MultiProfile;
use crate::profile::Profile;

/// A builder for profiles and multiprofiles.
///
/// It collects the configuration first, then produces an empty collection or
/// one filled with ballots that are all checked against that configuration.
///
/// ```
/// use std::rc::Rc;
/// use pb_election::builder::ProfileBuilder;
/// use pb_election::instance::{Instance, Project};
/// use pb_election::{integer, ApprovalBallot, ElectionError};
///
/// let projects = vec![
///     Project::new("park", integer(3)),
///     Project::new("library", integer(4)),
/// ];
/// let instance = Rc::new(Instance::new(projects.clone(), integer(5))?);
///
/// let profile = ProfileBuilder::<ApprovalBallot>::new()
///     .instance(&instance)
///     .legal_length(Some(1), None)
///     .build_with([
///         ApprovalBallot::new([projects[0].clone()]),
///         ApprovalBallot::new(projects.clone()),
///     ])?;
/// assert_eq!(profile.len(), 2);
///
/// # Ok::<(), ElectionError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ProfileBuilder<B: Ballot> {
    config: ProfileConfig<B>,
}

impl<B: Ballot> Default for ProfileBuilder<B> {
    fn default() -> Self {
        ProfileBuilder {
            config: ProfileConfig::default(),
        }
    }
}

impl<B: Ballot> ProfileBuilder<B> {
    pub fn new() -> ProfileBuilder<B> {
        ProfileBuilder::default()
    }

    pub fn instance(self, instance: &Rc<Instance>) -> ProfileBuilder<B> {
        ProfileBuilder {
            config: ProfileConfig {
                instance: Some(instance.clone()),
                ..self.config
            },
        }
    }

    pub fn ballot_validation(self, enabled: bool) -> ProfileBuilder<B> {
        ProfileBuilder {
            config: ProfileConfig {
                ballot_validation: enabled,
                ..self.config
            },
        }
    }

    /// Replaces all the legality bounds at once.
    pub fn bounds(self, bounds: B::Bounds) -> ProfileBuilder<B> {
        ProfileBuilder {
            config: ProfileConfig {
                bounds,
                ..self.config
            },
        }
    }

    pub fn config(&self) -> &ProfileConfig<B> {
        &self.config
    }

    pub fn build(self) -> Profile<B> {
        Profile::with_config(self.config)
    }

    /// Builds a profile holding the ballots, in order.
    pub fn build_with<T: Into<AnyBallot>>(
        self,
        ballots: impl IntoIterator<Item = T>,
    ) -> ElectionResult<Profile<B>> {
        let mut res = self.build();
        res.extend(ballots)?;
        Ok(res)
    }

    /// Builds a profile holding the ballots as they are, without checking
    /// them. For callers that produce ballots known to be of kind `B` and
    /// within the bounds, such as generators.
    pub fn build_unchecked(self, ballots: impl IntoIterator<Item = B>) -> Profile<B> {
        Profile::from_trusted(self.config, ballots.into_iter().map(Into::into).collect())
    }

    pub fn build_multi(self) -> MultiProfile<B> {
        MultiProfile::with_config(self.config)
    }

    /// Builds a multiprofile counting the ballots.
    pub fn build_multi_with<T: Into<AnyFrozenBallot>>(
        self,
        ballots: impl IntoIterator<Item = T>,
    ) -> ElectionResult<MultiProfile<B>> {
        let mut res = self.build_multi();
        res.extend(ballots)?;
        Ok(res)
    }

    fn map_bounds(mut self, f: impl FnOnce(&mut B::Bounds)) -> ProfileBuilder<B> {
        f(&mut self.config.bounds);
        self
    }
}

impl ProfileBuilder<ApprovalBallot> {
    /// Bounds on the total cost of a ballot.
    pub fn legal_cost(self, min: Option<Numeric>, max: Option<Numeric>) -> Self {
        self.map_bounds(|b| {
            b.legal_min_cost = min;
            b.legal_max_cost = max;
        })
    }

    /// Bounds on the number of approved projects.
    pub fn legal_length(self, min: Option<usize>, max: Option<usize>) -> Self {
        self.map_bounds(|b| {
            b.legal_min_length = min;
            b.legal_max_length = max;
        })
    }
}

impl ProfileBuilder<CardinalBallot> {
    pub fn legal_score(self, min: Option<Numeric>, max: Option<Numeric>) -> Self {
        self.map_bounds(|b| {
            b.legal_min_score = min;
            b.legal_max_score = max;
        })
    }

    pub fn legal_length(self, min: Option<usize>, max: Option<usize>) -> Self {
        self.map_bounds(|b| {
            b.legal_min_length = min;
            b.legal_max_length = max;
        })
    }
}

impl ProfileBuilder<CumulativeBallot> {
    pub fn legal_score(self, min: Option<Numeric>, max: Option<Numeric>) -> Self {
        self.map_bounds(|b| {
            b.cardinal.legal_min_score = min;
            b.cardinal.legal_max_score = max;
        })
    }

    pub fn legal_length(self, min: Option<usize>, max: Option<usize>) -> Self {
        self.map_bounds(|b| {
            b.cardinal.legal_min_length = min;
            b.cardinal.legal_max_length = max;
        })
    }

    /// Bounds on the sum of the scores of a ballot.
    pub fn legal_total_score(self, min: Option<Numeric>, max: Option<Numeric>) -> Self {
        self.map_bounds(|b| {
            b.legal_min_total_score = min;
            b.legal_max_total_score = max;
        })
    }
}

impl ProfileBuilder<OrdinalBallot> {
    pub fn legal_length(self, min: Option<usize>, max: Option<usize>) -> Self {
        self.map_bounds(|b| {
            b.legal_min_length = min;
            b.legal_max_length = max;
        })
    }
}
