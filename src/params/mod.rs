//! Parameter objects: one validated, single-use bundle of typed fields per
//! remote operation.
//!
//! Each object is built through a smart constructor that computes cross-field
//! defaults (e.g. read-only access for every requested type) and rejects
//! inconsistent combinations immediately, before any channel call is shaped.
//! Serialization wraps every field through the envelope encoder into a
//! field-name → envelope map.

pub mod auth;
pub mod delete;
pub mod read;
pub mod write;

pub use auth::AuthorizationParams;
pub use delete::{DeleteByUuidParams, DeleteParams};
pub use read::{AggregateDataParams, HealthDataParams, IntervalDataParams, StepsIntervalParams};
pub use write::{
    AudiogramParams, BloodOxygenParams, BloodPressureParams, InsulinDeliveryParams, MealParams,
    MenstrualFlowParams, Nutrients, WorkoutParams, WriteHealthDataParams,
};

use serde_json::{Map, Value};

use crate::envelope::{wrap, ParamValue};
use crate::error::{Error, Result};

/// Default `wait_timeout` in seconds.
pub const DEFAULT_WAIT_TIMEOUT: f64 = 25.0;

/// A parameter object that can be serialized into the wire argument blob.
pub trait WrappedParams {
    /// Seconds the channel should wait for a reply. Passed through unchanged.
    fn wait_timeout(&self) -> f64;

    /// Wrap every field into an envelope and serialize the whole map.
    fn to_wrapped(&self) -> Result<String>;
}

/// Validate the positivity constraint on `wait_timeout`.
pub(crate) fn check_timeout(seconds: f64) -> Result<f64> {
    if seconds > 0.0 {
        Ok(seconds)
    } else {
        Err(Error::NonPositiveTimeout(seconds))
    }
}

/// Ordered field-name → envelope map under construction.
pub(crate) struct WrappedFields {
    map: Map<String, Value>,
}

impl WrappedFields {
    pub(crate) fn new() -> Self {
        WrappedFields { map: Map::new() }
    }

    pub(crate) fn push(&mut self, name: &str, value: ParamValue) -> Result<()> {
        let envelope = wrap(&value)?;
        self.map.insert(name.to_string(), serde_json::to_value(envelope)?);
        Ok(())
    }

    pub(crate) fn into_json(self) -> Result<String> {
        Ok(serde_json::to_string(&Value::Object(self.map))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_timeout_rejects_zero_and_negative() {
        assert!(check_timeout(25.0).is_ok());
        assert!(matches!(
            check_timeout(0.0),
            Err(Error::NonPositiveTimeout(_))
        ));
        assert!(check_timeout(-1.5).is_err());
    }

    #[test]
    fn wrapped_fields_preserve_insertion_order() {
        let mut fields = WrappedFields::new();
        fields.push("b_field", ParamValue::Int(1)).unwrap();
        fields.push("a_field", ParamValue::Int(2)).unwrap();
        let json = fields.into_json().unwrap();
        assert!(json.find("b_field").unwrap() < json.find("a_field").unwrap());
    }
}
