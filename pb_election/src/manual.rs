/*!

This is the long-form manual for `pb_election` and `pabutools`.

## Numbers

All costs, budget limits and scores are [`Numeric`](crate::Numeric) values:
exact rationals with unbounded numerator and denominator (`num::BigRational`),
so sums never overflow. `integer(3)` is the integer 3, `fraction(3, 2)` is
one and a half.

## Ballot kinds

* `approval` a set of projects. Legality: total cost and number of projects.
* `cardinal` a score per project. Legality: each score and number of projects.
* `cumulative` like cardinal, plus bounds on the sum of the scores.
* `ordinal` a ranking without repetition. Legality: length of the ranking.

Each kind exists in a mutable form (`ApprovalBallot`, ...) and a frozen form
(`FrozenApprovalBallot`, ...). Both carry an optional name and free-form
metadata, which never take part in equality:

```
use pb_election::instance::Project;
use pb_election::{integer, ApprovalBallot};

let p = Project::new("p", integer(1));
let a = ApprovalBallot::new([p.clone()]).with_name("alice");
let b = ApprovalBallot::new([p]).with_name("bob");
assert_eq!(a, b);
assert_eq!(a.freeze(), b.freeze());
```

## Validation

A profile declares the kind of ballots it holds through its type parameter.
When validation is on (the default), every ballot added by `append`,
`insert`, `set` or `extend` is checked:

1. its kind must be exactly the declared kind, otherwise the call fails with
   `ElectionError::TypeValidation`. A cumulative ballot is not accepted by a
   cardinal profile.
2. it must respect every bound that is set, otherwise the call fails with
   `ElectionError::LegalityViolation`, naming the bound.

A failed call leaves the profile unchanged, `extend` included.
Validation can be turned off with `set_ballot_validation(false)`, after which
anything is accepted, including ballots of other kinds.

```
use pb_election::instance::Project;
use pb_election::profile::ApprovalProfile;
use pb_election::{integer, ApprovalBallot, CardinalBallot};

let p = Project::new("p", integer(10));
let mut profile = ApprovalProfile::builder()
    .legal_cost(None, Some(integer(5)))
    .build();
assert!(profile.append(ApprovalBallot::new([p.clone()])).is_err());
assert!(profile.append(CardinalBallot::new([(p.clone(), integer(1))])).is_err());
assert!(profile.is_empty());

profile.set_ballot_validation(false);
profile.append(ApprovalBallot::new([p])).unwrap();
assert_eq!(profile.len(), 1);
```

## Profiles and multiprofiles

A `Profile` is an ordered sequence: it supports indexing (negative indices
count from the end in `get`, `set`, `insert` and `remove`), concatenation with
`+` and repetition with `*`.

A `MultiProfile` keeps one entry per distinct frozen ballot, with the number
of times it was cast. The entries are in first-seen order.
`Profile::as_multiprofile` and `MultiProfile::to_profile` convert between the
two and keep the configuration.

## Settings files

The legality bounds can be read from a JSON file by the `pabutools` crate:

```json
{
  "ballotValidation": true,
  "legalMinLength": 1,
  "legalMaxCost": "2500/2"
}
```

Numbers may be written as JSON integers or as strings holding an integer or
a fraction.
*/
