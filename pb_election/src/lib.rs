/*!
Data model for participatory budgeting elections.

An [`instance::Instance`] describes what is being decided: the projects with
their costs, and the budget limit. Voters express their preferences through
ballots of four kinds (approval, cardinal, cumulative and ordinal, see
[`ballot`]), collected either in a [`profile::Profile`], one ballot per voter,
or in a [`multiprofile::MultiProfile`], one entry per distinct ballot with its
count.

Profiles check every incoming ballot against their [`ProfileConfig`]: the
ballot must be of the declared kind and respect the legality bounds. This can
be switched off.

```
use std::rc::Rc;
use pb_election::instance::{Instance, Project};
use pb_election::profile::ApprovalProfile;
use pb_election::{integer, ApprovalBallot, ElectionError};

let park = Project::new("park", integer(300));
let bikes = Project::new("bike lanes", integer(500));
let instance = Rc::new(Instance::new(
    [park.clone(), bikes.clone()],
    integer(600),
)?);

let mut profile = ApprovalProfile::builder().instance(&instance).build();
profile.append(ApprovalBallot::new([park.clone()]))?;
profile.append(ApprovalBallot::new([park.clone(), bikes.clone()]))?;

assert_eq!(profile.approval_score(&park), 2);
assert_eq!(profile.is_trivial()?, false);
let multi = profile.as_multiprofile();
assert_eq!(multi.len(), 2);
# Ok::<(), ElectionError>(())
```

More details in the [`manual`] and the [`quick_start`].
*/

mod config;

pub mod ballot;
pub mod builder;
pub mod instance;
pub mod manual;
pub mod multiprofile;
pub mod profile;
pub mod quick_start;

pub use crate::ballot::*;
pub use crate::config::*;
