//! Parameters for delete operations.

use chrono::{DateTime, Utc};

use crate::envelope::ParamValue;
use crate::error::Result;
use crate::types::HealthDataType;

use super::{check_timeout, WrappedFields, WrappedParams, DEFAULT_WAIT_TIMEOUT};

/// Delete every record of one type inside a time window.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteParams {
    data_type: HealthDataType,
    start_time: DateTime<Utc>,
    end_time: Option<DateTime<Utc>>,
    wait_timeout: f64,
}

impl DeleteParams {
    pub fn new(data_type: HealthDataType, start_time: DateTime<Utc>) -> Self {
        DeleteParams {
            data_type,
            start_time,
            end_time: None,
            wait_timeout: DEFAULT_WAIT_TIMEOUT,
        }
    }

    pub fn end_time(mut self, end_time: DateTime<Utc>) -> Self {
        self.end_time = Some(end_time);
        self
    }

    pub fn with_wait_timeout(mut self, seconds: f64) -> Result<Self> {
        self.wait_timeout = check_timeout(seconds)?;
        Ok(self)
    }
}

impl WrappedParams for DeleteParams {
    fn wait_timeout(&self) -> f64 {
        self.wait_timeout
    }

    fn to_wrapped(&self) -> Result<String> {
        let mut fields = WrappedFields::new();
        fields.push("types", ParamValue::from_enum(self.data_type))?;
        fields.push("start_time", ParamValue::Date(self.start_time))?;
        fields.push("end_time", ParamValue::opt_date(self.end_time))?;
        fields.push("wait_timeout", ParamValue::Float(self.wait_timeout))?;
        fields.into_json()
    }
}

/// Delete one record by its store-assigned UUID. The data type is required
/// by HealthKit and ignored by Health Connect.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteByUuidParams {
    uuid: String,
    data_type: Option<HealthDataType>,
    wait_timeout: f64,
}

impl DeleteByUuidParams {
    pub fn new(uuid: impl Into<String>) -> Self {
        DeleteByUuidParams {
            uuid: uuid.into(),
            data_type: None,
            wait_timeout: DEFAULT_WAIT_TIMEOUT,
        }
    }

    pub fn data_type(mut self, data_type: HealthDataType) -> Self {
        self.data_type = Some(data_type);
        self
    }

    pub fn with_wait_timeout(mut self, seconds: f64) -> Result<Self> {
        self.wait_timeout = check_timeout(seconds)?;
        Ok(self)
    }
}

impl WrappedParams for DeleteByUuidParams {
    fn wait_timeout(&self) -> f64 {
        self.wait_timeout
    }

    fn to_wrapped(&self) -> Result<String> {
        let mut fields = WrappedFields::new();
        fields.push("uuid", ParamValue::Str(self.uuid.clone()))?;
        match self.data_type {
            Some(t) => fields.push("types", ParamValue::from_enum(t))?,
            None => fields.push("types", ParamValue::None)?,
        }
        fields.push("wait_timeout", ParamValue::Float(self.wait_timeout))?;
        fields.into_json()
    }
}
