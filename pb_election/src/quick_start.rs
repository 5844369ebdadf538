/*!

# Quick start

This example goes through a small election end to end: three projects, a
budget of 10, and four voters using cumulative ballots with 10 points each.

```
use std::rc::Rc;
use pb_election::instance::{Instance, Project};
use pb_election::profile::CumulativeProfile;
use pb_election::{integer, CumulativeBallot, ElectionError};

let num = integer;
let school = Project::new("school roof", num(6)).with_categories(&["education"]);
let trees = Project::new("trees", num(3)).with_categories(&["environment"]);
let bench = Project::new("benches", num(2)).with_targets(&["seniors"]);
let instance = Rc::new(Instance::new(
    [school.clone(), trees.clone(), bench.clone()],
    num(10),
)?);

let mut profile = CumulativeProfile::builder()
    .instance(&instance)
    .legal_score(Some(num(0)), None)
    .legal_total_score(None, Some(num(10)))
    .build();

profile.append(CumulativeBallot::new([(school.clone(), num(7)), (trees.clone(), num(3))]))?;
profile.append(CumulativeBallot::new([(trees.clone(), num(10))]))?;
profile.append(CumulativeBallot::new([(school.clone(), num(5)), (bench.clone(), num(5))]))?;
profile.append(CumulativeBallot::new([(trees.clone(), num(10))]))?;

// Eleven points is one too many.
let greedy = CumulativeBallot::new([(school.clone(), num(6)), (bench.clone(), num(5))]);
assert!(matches!(
    profile.append(greedy),
    Err(ElectionError::LegalityViolation { .. })
));

assert_eq!(profile.total_score(&trees), num(23));
assert_eq!(profile.total_score(&school), num(12));

// Two voters cast the same ballot.
let multi = profile.as_multiprofile();
assert_eq!(multi.len(), 3);
assert_eq!(multi.total(), 4);
assert_eq!(multi.total_score(&trees), num(23));
# Ok::<(), ElectionError>(())
```

Profiles only hold the data. Selecting the projects to fund is left to
voting rules built on top of them.
*/
