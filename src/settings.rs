//! Reading the configuration of profiles from JSON settings files.
//!
//! All the keys are optional:
//!
//! ```json
//! {
//!   "ballotValidation": true,
//!   "legalMinCost": 0,
//!   "legalMaxCost": "2500/2",
//!   "legalMinLength": 1,
//!   "legalMaxLength": "5",
//!   "legalMinScore": -1,
//!   "legalMaxScore": 10,
//!   "legalMinTotalScore": 0,
//!   "legalMaxTotalScore": 20
//! }
//! ```
//!
//! Numbers are JSON integers, or strings holding an integer or a fraction.
//! Keys that do not apply to a ballot kind are ignored for that kind.

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value as JSValue;
use snafu::prelude::*;
use std::fs;

use pb_election::builder::ProfileBuilder;
use pb_election::{
    integer, ApprovalBounds, Ballot, CardinalBounds, CumulativeBounds, Numeric, OrdinalBounds,
};

use crate::{OpeningSettingsSnafu, ParsingNumberSnafu, ParsingSettingsSnafu, PbResult};

#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileSettings {
    #[serde(rename = "ballotValidation")]
    pub ballot_validation: Option<bool>,
    #[serde(rename = "legalMinCost")]
    pub legal_min_cost: Option<JSValue>,
    #[serde(rename = "legalMaxCost")]
    pub legal_max_cost: Option<JSValue>,
    #[serde(rename = "legalMinLength")]
    pub legal_min_length: Option<JSValue>,
    #[serde(rename = "legalMaxLength")]
    pub legal_max_length: Option<JSValue>,
    #[serde(rename = "legalMinScore")]
    pub legal_min_score: Option<JSValue>,
    #[serde(rename = "legalMaxScore")]
    pub legal_max_score: Option<JSValue>,
    #[serde(rename = "legalMinTotalScore")]
    pub legal_min_total_score: Option<JSValue>,
    #[serde(rename = "legalMaxTotalScore")]
    pub legal_max_total_score: Option<JSValue>,
}

pub fn read_settings(path: &str) -> PbResult<ProfileSettings> {
    let contents = fs::read_to_string(path).context(OpeningSettingsSnafu { path })?;
    debug!("read_settings: {} bytes from {}", contents.len(), path);
    parse_settings(&contents)
}

pub fn parse_settings(contents: &str) -> PbResult<ProfileSettings> {
    serde_json::from_str(contents).context(ParsingSettingsSnafu {})
}

fn read_js_numeric(x: &Option<JSValue>) -> PbResult<Option<Numeric>> {
    match x {
        None | Some(JSValue::Null) => Ok(None),
        Some(JSValue::Number(n)) => n
            .as_i64()
            .map(|i| Some(integer(i)))
            .context(ParsingNumberSnafu {
                value: n.to_string(),
            }),
        Some(JSValue::String(s)) => s
            .trim()
            .parse::<Numeric>()
            .ok()
            .map(Some)
            .context(ParsingNumberSnafu { value: s.clone() }),
        Some(v) => None.context(ParsingNumberSnafu {
            value: v.to_string(),
        }),
    }
}

fn read_js_int(x: &Option<JSValue>) -> PbResult<Option<usize>> {
    match x {
        None | Some(JSValue::Null) => Ok(None),
        Some(JSValue::Number(n)) => n
            .as_u64()
            .map(|i| Some(i as usize))
            .context(ParsingNumberSnafu {
                value: n.to_string(),
            }),
        Some(JSValue::String(s)) => s
            .trim()
            .parse::<usize>()
            .ok()
            .map(Some)
            .context(ParsingNumberSnafu { value: s.clone() }),
        Some(v) => None.context(ParsingNumberSnafu {
            value: v.to_string(),
        }),
    }
}

/// Bounds of one ballot kind that can be read from the settings.
pub trait FromSettings: Sized {
    fn from_settings(settings: &ProfileSettings) -> PbResult<Self>;
}

impl FromSettings for ApprovalBounds {
    fn from_settings(settings: &ProfileSettings) -> PbResult<Self> {
        Ok(ApprovalBounds {
            legal_min_cost: read_js_numeric(&settings.legal_min_cost)?,
            legal_max_cost: read_js_numeric(&settings.legal_max_cost)?,
            legal_min_length: read_js_int(&settings.legal_min_length)?,
            legal_max_length: read_js_int(&settings.legal_max_length)?,
        })
    }
}

impl FromSettings for CardinalBounds {
    fn from_settings(settings: &ProfileSettings) -> PbResult<Self> {
        Ok(CardinalBounds {
            legal_min_score: read_js_numeric(&settings.legal_min_score)?,
            legal_max_score: read_js_numeric(&settings.legal_max_score)?,
            legal_min_length: read_js_int(&settings.legal_min_length)?,
            legal_max_length: read_js_int(&settings.legal_max_length)?,
        })
    }
}

impl FromSettings for CumulativeBounds {
    fn from_settings(settings: &ProfileSettings) -> PbResult<Self> {
        Ok(CumulativeBounds {
            cardinal: CardinalBounds::from_settings(settings)?,
            legal_min_total_score: read_js_numeric(&settings.legal_min_total_score)?,
            legal_max_total_score: read_js_numeric(&settings.legal_max_total_score)?,
        })
    }
}

impl FromSettings for OrdinalBounds {
    fn from_settings(settings: &ProfileSettings) -> PbResult<Self> {
        Ok(OrdinalBounds {
            legal_min_length: read_js_int(&settings.legal_min_length)?,
            legal_max_length: read_js_int(&settings.legal_max_length)?,
        })
    }
}

impl ProfileSettings {
    pub fn approval_bounds(&self) -> PbResult<ApprovalBounds> {
        ApprovalBounds::from_settings(self)
    }

    pub fn cardinal_bounds(&self) -> PbResult<CardinalBounds> {
        CardinalBounds::from_settings(self)
    }

    pub fn cumulative_bounds(&self) -> PbResult<CumulativeBounds> {
        CumulativeBounds::from_settings(self)
    }

    pub fn ordinal_bounds(&self) -> PbResult<OrdinalBounds> {
        OrdinalBounds::from_settings(self)
    }

    /// Sets the bounds and the validation flag of the builder. The instance
    /// is left as it is; a missing `ballotValidation` key keeps the builder's
    /// value.
    pub fn apply<B>(&self, builder: ProfileBuilder<B>) -> PbResult<ProfileBuilder<B>>
    where
        B: Ballot,
        B::Bounds: FromSettings,
    {
        let bounds = B::Bounds::from_settings(self)?;
        debug!("apply: {} bounds {:?}", B::KIND, bounds);
        let validation = self
            .ballot_validation
            .unwrap_or(builder.config().ballot_validation);
        Ok(builder.bounds(bounds).ballot_validation(validation))
    }
}
