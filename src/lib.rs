/*!
Participatory budgeting toolkit.

The data model (instances, ballots, profiles) lives in the [`pb_election`]
crate and is re-exported here. This crate adds:

* [`generation`]: random and exhaustive generators of approval profiles,
* [`settings`]: reading legality bounds from JSON settings files.
*/

use snafu::prelude::*;

pub use pb_election::*;

pub mod generation;
pub mod settings;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum PbError {
    #[snafu(display("{source}"))]
    Election { source: ElectionError },
    #[snafu(display("Error opening settings file {path}"))]
    OpeningSettings {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing settings: {source}"))]
    ParsingSettings { source: serde_json::Error },
    #[snafu(display("Not a number: {value}"))]
    ParsingNumber { value: String },
    #[snafu(display(
        "Cannot enumerate the profiles of {num_ballots} ballots over {num_projects} projects"
    ))]
    EnumerationOverflow {
        num_projects: usize,
        num_ballots: usize,
    },
}

impl From<ElectionError> for PbError {
    fn from(source: ElectionError) -> PbError {
        PbError::Election { source }
    }
}

pub type PbResult<T> = Result<T, PbError>;
