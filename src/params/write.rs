//! Parameters for write-type operations (records saved into the native
//! health store).

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::envelope::ParamValue;
use crate::error::Result;
use crate::types::{
    HealthDataType, HealthDataUnit, InsulinDeliveryReason, MealType, MenstrualFlow,
    RecordingMethod, WorkoutActivityType,
};

use super::{check_timeout, WrappedFields, WrappedParams, DEFAULT_WAIT_TIMEOUT};

// ============================================================================
// BloodOxygenParams
// ============================================================================

/// A blood oxygen saturation record.
#[derive(Debug, Clone, PartialEq)]
pub struct BloodOxygenParams {
    saturation: f64,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    recording_method: RecordingMethod,
    wait_timeout: f64,
}

impl BloodOxygenParams {
    pub fn new(saturation: f64, start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        BloodOxygenParams {
            saturation,
            start_time,
            end_time,
            recording_method: RecordingMethod::Unknown,
            wait_timeout: DEFAULT_WAIT_TIMEOUT,
        }
    }

    pub fn recording_method(mut self, method: RecordingMethod) -> Self {
        self.recording_method = method;
        self
    }

    pub fn with_wait_timeout(mut self, seconds: f64) -> Result<Self> {
        self.wait_timeout = check_timeout(seconds)?;
        Ok(self)
    }
}

impl WrappedParams for BloodOxygenParams {
    fn wait_timeout(&self) -> f64 {
        self.wait_timeout
    }

    fn to_wrapped(&self) -> Result<String> {
        let mut fields = WrappedFields::new();
        fields.push("saturation", ParamValue::Float(self.saturation))?;
        fields.push("start_time", ParamValue::Date(self.start_time))?;
        fields.push("end_time", ParamValue::Date(self.end_time))?;
        fields.push(
            "recording_method",
            ParamValue::from_enum(self.recording_method),
        )?;
        fields.push("wait_timeout", ParamValue::Float(self.wait_timeout))?;
        fields.into_json()
    }
}

// ============================================================================
// BloodPressureParams
// ============================================================================

/// A blood pressure record (systolic/diastolic, mmHg).
#[derive(Debug, Clone, PartialEq)]
pub struct BloodPressureParams {
    systolic: i64,
    diastolic: i64,
    start_time: DateTime<Utc>,
    recording_method: RecordingMethod,
    wait_timeout: f64,
}

impl BloodPressureParams {
    pub fn new(systolic: i64, diastolic: i64, start_time: DateTime<Utc>) -> Self {
        BloodPressureParams {
            systolic,
            diastolic,
            start_time,
            recording_method: RecordingMethod::Unknown,
            wait_timeout: DEFAULT_WAIT_TIMEOUT,
        }
    }

    pub fn recording_method(mut self, method: RecordingMethod) -> Self {
        self.recording_method = method;
        self
    }

    pub fn with_wait_timeout(mut self, seconds: f64) -> Result<Self> {
        self.wait_timeout = check_timeout(seconds)?;
        Ok(self)
    }
}

impl WrappedParams for BloodPressureParams {
    fn wait_timeout(&self) -> f64 {
        self.wait_timeout
    }

    fn to_wrapped(&self) -> Result<String> {
        let mut fields = WrappedFields::new();
        fields.push("systolic", ParamValue::Int(self.systolic))?;
        fields.push("diastolic", ParamValue::Int(self.diastolic))?;
        fields.push("start_time", ParamValue::Date(self.start_time))?;
        fields.push(
            "recording_method",
            ParamValue::from_enum(self.recording_method),
        )?;
        fields.push("wait_timeout", ParamValue::Float(self.wait_timeout))?;
        fields.into_json()
    }
}

// ============================================================================
// WriteHealthDataParams
// ============================================================================

/// A generic numeric health data point.
#[derive(Debug, Clone, PartialEq)]
pub struct WriteHealthDataParams {
    value: f64,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    data_type: HealthDataType,
    unit: HealthDataUnit,
    recording_method: RecordingMethod,
    wait_timeout: f64,
}

impl WriteHealthDataParams {
    pub fn new(
        value: f64,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        data_type: HealthDataType,
    ) -> Self {
        WriteHealthDataParams {
            value,
            start_time,
            end_time,
            data_type,
            unit: HealthDataUnit::NoUnit,
            recording_method: RecordingMethod::Unknown,
            wait_timeout: DEFAULT_WAIT_TIMEOUT,
        }
    }

    pub fn unit(mut self, unit: HealthDataUnit) -> Self {
        self.unit = unit;
        self
    }

    pub fn recording_method(mut self, method: RecordingMethod) -> Self {
        self.recording_method = method;
        self
    }

    pub fn with_wait_timeout(mut self, seconds: f64) -> Result<Self> {
        self.wait_timeout = check_timeout(seconds)?;
        Ok(self)
    }
}

impl WrappedParams for WriteHealthDataParams {
    fn wait_timeout(&self) -> f64 {
        self.wait_timeout
    }

    fn to_wrapped(&self) -> Result<String> {
        let mut fields = WrappedFields::new();
        fields.push("value", ParamValue::Float(self.value))?;
        fields.push("start_time", ParamValue::Date(self.start_time))?;
        fields.push("end_time", ParamValue::Date(self.end_time))?;
        fields.push("types", ParamValue::from_enum(self.data_type))?;
        fields.push("unit", ParamValue::from_enum(self.unit))?;
        fields.push(
            "recording_method",
            ParamValue::from_enum(self.recording_method),
        )?;
        fields.push("wait_timeout", ParamValue::Float(self.wait_timeout))?;
        fields.into_json()
    }
}

// ============================================================================
// WorkoutParams
// ============================================================================

/// A workout session with optional totals.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutParams {
    activity_type: WorkoutActivityType,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    total_energy_burned: Option<i64>,
    total_energy_burned_unit: HealthDataUnit,
    total_distance: Option<i64>,
    total_distance_unit: HealthDataUnit,
    title: Option<String>,
    recording_method: RecordingMethod,
    wait_timeout: f64,
}

impl WorkoutParams {
    pub fn new(
        activity_type: WorkoutActivityType,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Self {
        WorkoutParams {
            activity_type,
            start_time,
            end_time,
            total_energy_burned: None,
            total_energy_burned_unit: HealthDataUnit::Kilocalorie,
            total_distance: None,
            total_distance_unit: HealthDataUnit::Meter,
            title: None,
            recording_method: RecordingMethod::Unknown,
            wait_timeout: DEFAULT_WAIT_TIMEOUT,
        }
    }

    pub fn total_energy_burned(mut self, value: i64, unit: HealthDataUnit) -> Self {
        self.total_energy_burned = Some(value);
        self.total_energy_burned_unit = unit;
        self
    }

    pub fn total_distance(mut self, value: i64, unit: HealthDataUnit) -> Self {
        self.total_distance = Some(value);
        self.total_distance_unit = unit;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn recording_method(mut self, method: RecordingMethod) -> Self {
        self.recording_method = method;
        self
    }

    pub fn with_wait_timeout(mut self, seconds: f64) -> Result<Self> {
        self.wait_timeout = check_timeout(seconds)?;
        Ok(self)
    }
}

impl WrappedParams for WorkoutParams {
    fn wait_timeout(&self) -> f64 {
        self.wait_timeout
    }

    fn to_wrapped(&self) -> Result<String> {
        let mut fields = WrappedFields::new();
        fields.push("activity_type", ParamValue::from_enum(self.activity_type))?;
        fields.push("start_time", ParamValue::Date(self.start_time))?;
        fields.push("end_time", ParamValue::Date(self.end_time))?;
        fields.push(
            "total_energy_burned",
            ParamValue::opt_int(self.total_energy_burned),
        )?;
        fields.push(
            "total_energy_burned_unit",
            ParamValue::from_enum(self.total_energy_burned_unit),
        )?;
        fields.push("total_distance", ParamValue::opt_int(self.total_distance))?;
        fields.push(
            "total_distance_unit",
            ParamValue::from_enum(self.total_distance_unit),
        )?;
        fields.push("title", ParamValue::opt_str(self.title.clone()))?;
        fields.push(
            "recording_method",
            ParamValue::from_enum(self.recording_method),
        )?;
        fields.push("wait_timeout", ParamValue::Float(self.wait_timeout))?;
        fields.into_json()
    }
}

// ============================================================================
// MealParams
// ============================================================================

/// Generates the optional nutrient fields plus their serialization, keeping
/// the field list and the wire field names in one place.
macro_rules! nutrients {
    ($($field:ident),* $(,)?) => {
        /// Optional nutrient amounts for a meal record. All fields are
        /// grams/milligrams per the remote side's unit conventions; absent
        /// fields wrap as `none`.
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct Nutrients {
            $(pub $field: Option<f64>,)*
        }

        impl Nutrients {
            fn push_fields(&self, fields: &mut WrappedFields) -> Result<()> {
                $(fields.push(stringify!($field), ParamValue::opt_float(self.$field))?;)*
                Ok(())
            }
        }
    };
}

nutrients!(
    calories_consumed,
    carbohydrates,
    protein,
    fat_total,
    caffeine,
    vitamin_a,
    b1_thiamin,
    b2_riboflavin,
    b3_niacin,
    b5_pantothenic_acid,
    b6_pyridoxine,
    b7_biotin,
    b9_folate,
    b12_cobalamin,
    vitamin_c,
    vitamin_d,
    vitamin_e,
    vitamin_k,
    calcium,
    cholesterol,
    chloride,
    chromium,
    copper,
    fat_unsaturated,
    fat_monounsaturated,
    fat_polyunsaturated,
    fat_saturated,
    fat_trans_monoenoic,
    fiber,
    iodine,
    iron,
    magnesium,
    manganese,
    molybdenum,
    phosphorus,
    potassium,
    selenium,
    sodium,
    sugar,
    water,
    zinc,
);

/// A meal record with its nutrient breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct MealParams {
    meal_type: MealType,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    name: Option<String>,
    nutrients: Nutrients,
    recording_method: RecordingMethod,
    wait_timeout: f64,
}

impl MealParams {
    pub fn new(
        meal_type: MealType,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        nutrients: Nutrients,
    ) -> Self {
        MealParams {
            meal_type,
            start_time,
            end_time,
            name: None,
            nutrients,
            recording_method: RecordingMethod::Unknown,
            wait_timeout: DEFAULT_WAIT_TIMEOUT,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn recording_method(mut self, method: RecordingMethod) -> Self {
        self.recording_method = method;
        self
    }

    pub fn with_wait_timeout(mut self, seconds: f64) -> Result<Self> {
        self.wait_timeout = check_timeout(seconds)?;
        Ok(self)
    }
}

impl WrappedParams for MealParams {
    fn wait_timeout(&self) -> f64 {
        self.wait_timeout
    }

    fn to_wrapped(&self) -> Result<String> {
        let mut fields = WrappedFields::new();
        fields.push("meal_type", ParamValue::from_enum(self.meal_type))?;
        fields.push("start_time", ParamValue::Date(self.start_time))?;
        fields.push("end_time", ParamValue::Date(self.end_time))?;
        fields.push("name", ParamValue::opt_str(self.name.clone()))?;
        self.nutrients.push_fields(&mut fields)?;
        fields.push(
            "recording_method",
            ParamValue::from_enum(self.recording_method),
        )?;
        fields.push("wait_timeout", ParamValue::Float(self.wait_timeout))?;
        fields.into_json()
    }
}

// ============================================================================
// AudiogramParams
// ============================================================================

/// A hearing-sensitivity audiogram. HealthKit only.
#[derive(Debug, Clone, PartialEq)]
pub struct AudiogramParams {
    frequencies: Vec<f64>,
    left_ear_sensitivities: Vec<f64>,
    right_ear_sensitivities: Vec<f64>,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    metadata: Option<Map<String, Value>>,
    wait_timeout: f64,
}

impl AudiogramParams {
    pub fn new(
        frequencies: Vec<f64>,
        left_ear_sensitivities: Vec<f64>,
        right_ear_sensitivities: Vec<f64>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Self {
        AudiogramParams {
            frequencies,
            left_ear_sensitivities,
            right_ear_sensitivities,
            start_time,
            end_time,
            metadata: None,
            wait_timeout: DEFAULT_WAIT_TIMEOUT,
        }
    }

    pub fn metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn with_wait_timeout(mut self, seconds: f64) -> Result<Self> {
        self.wait_timeout = check_timeout(seconds)?;
        Ok(self)
    }
}

fn float_list(values: &[f64]) -> ParamValue {
    ParamValue::List(values.iter().map(|v| ParamValue::Float(*v)).collect())
}

impl WrappedParams for AudiogramParams {
    fn wait_timeout(&self) -> f64 {
        self.wait_timeout
    }

    fn to_wrapped(&self) -> Result<String> {
        let mut fields = WrappedFields::new();
        fields.push("frequencies", float_list(&self.frequencies))?;
        fields.push(
            "left_ear_sensitivities",
            float_list(&self.left_ear_sensitivities),
        )?;
        fields.push(
            "right_ear_sensitivities",
            float_list(&self.right_ear_sensitivities),
        )?;
        fields.push("start_time", ParamValue::Date(self.start_time))?;
        fields.push("end_time", ParamValue::Date(self.end_time))?;
        match &self.metadata {
            Some(map) => fields.push("metadata", ParamValue::Dict(map.clone()))?,
            None => fields.push("metadata", ParamValue::None)?,
        }
        fields.push("wait_timeout", ParamValue::Float(self.wait_timeout))?;
        fields.into_json()
    }
}

// ============================================================================
// MenstrualFlowParams
// ============================================================================

/// A menstrual flow record.
#[derive(Debug, Clone, PartialEq)]
pub struct MenstrualFlowParams {
    flow: MenstrualFlow,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    is_start_of_cycle: bool,
    recording_method: RecordingMethod,
    wait_timeout: f64,
}

impl MenstrualFlowParams {
    pub fn new(
        flow: MenstrualFlow,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        is_start_of_cycle: bool,
    ) -> Self {
        MenstrualFlowParams {
            flow,
            start_time,
            end_time,
            is_start_of_cycle,
            recording_method: RecordingMethod::Unknown,
            wait_timeout: DEFAULT_WAIT_TIMEOUT,
        }
    }

    pub fn recording_method(mut self, method: RecordingMethod) -> Self {
        self.recording_method = method;
        self
    }

    pub fn with_wait_timeout(mut self, seconds: f64) -> Result<Self> {
        self.wait_timeout = check_timeout(seconds)?;
        Ok(self)
    }
}

impl WrappedParams for MenstrualFlowParams {
    fn wait_timeout(&self) -> f64 {
        self.wait_timeout
    }

    fn to_wrapped(&self) -> Result<String> {
        let mut fields = WrappedFields::new();
        fields.push("flow", ParamValue::from_enum(self.flow))?;
        fields.push("start_time", ParamValue::Date(self.start_time))?;
        fields.push("end_time", ParamValue::Date(self.end_time))?;
        fields.push(
            "is_start_of_cycle",
            ParamValue::Bool(self.is_start_of_cycle),
        )?;
        fields.push(
            "recording_method",
            ParamValue::from_enum(self.recording_method),
        )?;
        fields.push("wait_timeout", ParamValue::Float(self.wait_timeout))?;
        fields.into_json()
    }
}

// ============================================================================
// InsulinDeliveryParams
// ============================================================================

/// An insulin delivery record. HealthKit only on the remote side, but the
/// gate lives there; the library serializes it like any other write.
#[derive(Debug, Clone, PartialEq)]
pub struct InsulinDeliveryParams {
    units: f64,
    reason: InsulinDeliveryReason,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    wait_timeout: f64,
}

impl InsulinDeliveryParams {
    pub fn new(
        units: f64,
        reason: InsulinDeliveryReason,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Self {
        InsulinDeliveryParams {
            units,
            reason,
            start_time,
            end_time,
            wait_timeout: DEFAULT_WAIT_TIMEOUT,
        }
    }

    pub fn with_wait_timeout(mut self, seconds: f64) -> Result<Self> {
        self.wait_timeout = check_timeout(seconds)?;
        Ok(self)
    }
}

impl WrappedParams for InsulinDeliveryParams {
    fn wait_timeout(&self) -> f64 {
        self.wait_timeout
    }

    fn to_wrapped(&self) -> Result<String> {
        let mut fields = WrappedFields::new();
        fields.push("units", ParamValue::Float(self.units))?;
        fields.push("reason", ParamValue::from_enum(self.reason))?;
        fields.push("start_time", ParamValue::Date(self.start_time))?;
        fields.push("end_time", ParamValue::Date(self.end_time))?;
        fields.push("wait_timeout", ParamValue::Float(self.wait_timeout))?;
        fields.into_json()
    }
}
