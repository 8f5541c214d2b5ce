//! Parameters for read-type operations (interval steps, data points,
//! aggregates).

use chrono::{DateTime, Utc};

use crate::envelope::ParamValue;
use crate::error::Result;
use crate::types::{HealthDataType, RecordingMethod};

use super::{check_timeout, WrappedFields, WrappedParams, DEFAULT_WAIT_TIMEOUT};

// ============================================================================
// StepsIntervalParams
// ============================================================================

/// Time window for a total-steps query.
#[derive(Debug, Clone, PartialEq)]
pub struct StepsIntervalParams {
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    include_manual_entry: bool,
    wait_timeout: f64,
}

impl StepsIntervalParams {
    pub fn new(start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        StepsIntervalParams {
            start_time,
            end_time,
            include_manual_entry: true,
            wait_timeout: DEFAULT_WAIT_TIMEOUT,
        }
    }

    pub fn include_manual_entry(mut self, include: bool) -> Self {
        self.include_manual_entry = include;
        self
    }

    pub fn with_wait_timeout(mut self, seconds: f64) -> Result<Self> {
        self.wait_timeout = check_timeout(seconds)?;
        Ok(self)
    }
}

impl WrappedParams for StepsIntervalParams {
    fn wait_timeout(&self) -> f64 {
        self.wait_timeout
    }

    fn to_wrapped(&self) -> Result<String> {
        let mut fields = WrappedFields::new();
        fields.push("start_time", ParamValue::Date(self.start_time))?;
        fields.push("end_time", ParamValue::Date(self.end_time))?;
        fields.push(
            "include_manual_entry",
            ParamValue::Bool(self.include_manual_entry),
        )?;
        fields.push("wait_timeout", ParamValue::Float(self.wait_timeout))?;
        fields.into_json()
    }
}

// ============================================================================
// HealthDataParams
// ============================================================================

/// Data-point query over a time window, optionally filtered by how the
/// points were recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthDataParams {
    types: Vec<HealthDataType>,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    recording_method: Vec<RecordingMethod>,
    wait_timeout: f64,
}

impl HealthDataParams {
    /// An omitted `recording_method` filter becomes an empty list; the wire
    /// form still carries its element type so the remote side can tell an
    /// empty filter from an untyped one.
    pub fn new(
        types: Vec<HealthDataType>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        recording_method: Option<Vec<RecordingMethod>>,
    ) -> Self {
        HealthDataParams {
            types,
            start_time,
            end_time,
            recording_method: recording_method.unwrap_or_default(),
            wait_timeout: DEFAULT_WAIT_TIMEOUT,
        }
    }

    pub fn with_wait_timeout(mut self, seconds: f64) -> Result<Self> {
        self.wait_timeout = check_timeout(seconds)?;
        Ok(self)
    }
}

impl WrappedParams for HealthDataParams {
    fn wait_timeout(&self) -> f64 {
        self.wait_timeout
    }

    fn to_wrapped(&self) -> Result<String> {
        let mut fields = WrappedFields::new();
        fields.push("types", ParamValue::enum_list(&self.types))?;
        fields.push("start_time", ParamValue::Date(self.start_time))?;
        fields.push("end_time", ParamValue::Date(self.end_time))?;
        fields.push(
            "recording_method",
            ParamValue::enum_list(&self.recording_method),
        )?;
        fields.push("wait_timeout", ParamValue::Float(self.wait_timeout))?;
        fields.into_json()
    }
}

// ============================================================================
// IntervalDataParams
// ============================================================================

/// Data-point query bucketed into fixed-size intervals (seconds).
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalDataParams {
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    types: Vec<HealthDataType>,
    interval: i64,
    recording_method: Vec<RecordingMethod>,
    wait_timeout: f64,
}

impl IntervalDataParams {
    pub fn new(
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        types: Vec<HealthDataType>,
        interval: i64,
        recording_method: Option<Vec<RecordingMethod>>,
    ) -> Self {
        IntervalDataParams {
            start_time,
            end_time,
            types,
            interval,
            recording_method: recording_method.unwrap_or_default(),
            wait_timeout: DEFAULT_WAIT_TIMEOUT,
        }
    }

    pub fn with_wait_timeout(mut self, seconds: f64) -> Result<Self> {
        self.wait_timeout = check_timeout(seconds)?;
        Ok(self)
    }
}

impl WrappedParams for IntervalDataParams {
    fn wait_timeout(&self) -> f64 {
        self.wait_timeout
    }

    fn to_wrapped(&self) -> Result<String> {
        let mut fields = WrappedFields::new();
        fields.push("start_time", ParamValue::Date(self.start_time))?;
        fields.push("end_time", ParamValue::Date(self.end_time))?;
        fields.push("types", ParamValue::enum_list(&self.types))?;
        fields.push("interval", ParamValue::Int(self.interval))?;
        fields.push(
            "recording_method",
            ParamValue::enum_list(&self.recording_method),
        )?;
        fields.push("wait_timeout", ParamValue::Float(self.wait_timeout))?;
        fields.into_json()
    }
}

// ============================================================================
// AggregateDataParams
// ============================================================================

/// Aggregate query over a time window.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateDataParams {
    types: Vec<HealthDataType>,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    activity_segment_duration: i64,
    include_manual_entry: bool,
    wait_timeout: f64,
}

impl AggregateDataParams {
    pub fn new(
        types: Vec<HealthDataType>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Self {
        AggregateDataParams {
            types,
            start_time,
            end_time,
            activity_segment_duration: 1,
            include_manual_entry: true,
            wait_timeout: DEFAULT_WAIT_TIMEOUT,
        }
    }

    pub fn activity_segment_duration(mut self, duration: i64) -> Self {
        self.activity_segment_duration = duration;
        self
    }

    pub fn include_manual_entry(mut self, include: bool) -> Self {
        self.include_manual_entry = include;
        self
    }

    pub fn with_wait_timeout(mut self, seconds: f64) -> Result<Self> {
        self.wait_timeout = check_timeout(seconds)?;
        Ok(self)
    }
}

impl WrappedParams for AggregateDataParams {
    fn wait_timeout(&self) -> f64 {
        self.wait_timeout
    }

    fn to_wrapped(&self) -> Result<String> {
        let mut fields = WrappedFields::new();
        fields.push("types", ParamValue::enum_list(&self.types))?;
        fields.push("start_time", ParamValue::Date(self.start_time))?;
        fields.push("end_time", ParamValue::Date(self.end_time))?;
        fields.push(
            "activity_segment_duration",
            ParamValue::Int(self.activity_segment_duration),
        )?;
        fields.push(
            "include_manual_entry",
            ParamValue::Bool(self.include_manual_entry),
        )?;
        fields.push("wait_timeout", ParamValue::Float(self.wait_timeout))?;
        fields.into_json()
    }
}
