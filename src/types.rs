//! Domain enumerations shared by parameter objects and the client.
//!
//! Every enum that crosses the wire implements [`WireEnum`], pairing its
//! scalar wire value with the class name the remote dispatcher uses to
//! resolve it back into symbolic form. Fields typed with these enums are
//! checked at compile time; there are no runtime "is this an instance of"
//! checks anywhere in the library.

use crate::envelope::WireEnum;

// ============================================================================
// Platform
// ============================================================================

/// The platform the client is running on. Local gating only; never
/// serialized into an envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Android,
    Ios,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
        }
    }
}

// ============================================================================
// Health data types
// ============================================================================

/// A readable/writable health data category, covering both the HealthKit
/// and Health Connect type lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HealthDataType {
    ActiveEnergyBurned,
    Audiogram,
    BloodGlucose,
    BloodOxygen,
    BloodPressureDiastolic,
    BloodPressureSystolic,
    BodyFatPercentage,
    BodyMassIndex,
    BodyTemperature,
    DistanceDelta,
    HeartRate,
    Height,
    InsulinDelivery,
    MenstruationFlow,
    Nutrition,
    RespiratoryRate,
    RestingHeartRate,
    SleepSession,
    Steps,
    TotalCaloriesBurned,
    Water,
    Weight,
    Workout,
}

impl WireEnum for HealthDataType {
    const CLASS_NAME: &'static str = "HealthDataType";

    fn wire_value(self) -> &'static str {
        match self {
            HealthDataType::ActiveEnergyBurned => "ACTIVE_ENERGY_BURNED",
            HealthDataType::Audiogram => "AUDIOGRAM",
            HealthDataType::BloodGlucose => "BLOOD_GLUCOSE",
            HealthDataType::BloodOxygen => "BLOOD_OXYGEN",
            HealthDataType::BloodPressureDiastolic => "BLOOD_PRESSURE_DIASTOLIC",
            HealthDataType::BloodPressureSystolic => "BLOOD_PRESSURE_SYSTOLIC",
            HealthDataType::BodyFatPercentage => "BODY_FAT_PERCENTAGE",
            HealthDataType::BodyMassIndex => "BODY_MASS_INDEX",
            HealthDataType::BodyTemperature => "BODY_TEMPERATURE",
            HealthDataType::DistanceDelta => "DISTANCE_DELTA",
            HealthDataType::HeartRate => "HEART_RATE",
            HealthDataType::Height => "HEIGHT",
            HealthDataType::InsulinDelivery => "INSULIN_DELIVERY",
            HealthDataType::MenstruationFlow => "MENSTRUATION_FLOW",
            HealthDataType::Nutrition => "NUTRITION",
            HealthDataType::RespiratoryRate => "RESPIRATORY_RATE",
            HealthDataType::RestingHeartRate => "RESTING_HEART_RATE",
            HealthDataType::SleepSession => "SLEEP_SESSION",
            HealthDataType::Steps => "STEPS",
            HealthDataType::TotalCaloriesBurned => "TOTAL_CALORIES_BURNED",
            HealthDataType::Water => "WATER",
            HealthDataType::Weight => "WEIGHT",
            HealthDataType::Workout => "WORKOUT",
        }
    }
}

/// Workout activity category for workout writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutActivityType {
    AmericanFootball,
    Badminton,
    Baseball,
    Basketball,
    Biking,
    Boxing,
    Dancing,
    Golf,
    Hiking,
    Pilates,
    Rowing,
    Running,
    Soccer,
    StrengthTraining,
    Swimming,
    TableTennis,
    Tennis,
    Volleyball,
    Walking,
    Yoga,
    Other,
}

impl WireEnum for WorkoutActivityType {
    const CLASS_NAME: &'static str = "WorkoutActivityType";

    fn wire_value(self) -> &'static str {
        match self {
            WorkoutActivityType::AmericanFootball => "AMERICAN_FOOTBALL",
            WorkoutActivityType::Badminton => "BADMINTON",
            WorkoutActivityType::Baseball => "BASEBALL",
            WorkoutActivityType::Basketball => "BASKETBALL",
            WorkoutActivityType::Biking => "BIKING",
            WorkoutActivityType::Boxing => "BOXING",
            WorkoutActivityType::Dancing => "DANCING",
            WorkoutActivityType::Golf => "GOLF",
            WorkoutActivityType::Hiking => "HIKING",
            WorkoutActivityType::Pilates => "PILATES",
            WorkoutActivityType::Rowing => "ROWING",
            WorkoutActivityType::Running => "RUNNING",
            WorkoutActivityType::Soccer => "SOCCER",
            WorkoutActivityType::StrengthTraining => "STRENGTH_TRAINING",
            WorkoutActivityType::Swimming => "SWIMMING",
            WorkoutActivityType::TableTennis => "TABLE_TENNIS",
            WorkoutActivityType::Tennis => "TENNIS",
            WorkoutActivityType::Volleyball => "VOLLEYBALL",
            WorkoutActivityType::Walking => "WALKING",
            WorkoutActivityType::Yoga => "YOGA",
            WorkoutActivityType::Other => "OTHER",
        }
    }
}

// ============================================================================
// Units and access levels
// ============================================================================

/// Measurement unit attached to writes. Primarily relevant on HealthKit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HealthDataUnit {
    BeatsPerMinute,
    Count,
    DegreeCelsius,
    Gram,
    InternationalUnit,
    Kilocalorie,
    Kilogram,
    Liter,
    Meter,
    MilligramPerDeciliter,
    MillimeterOfMercury,
    Minute,
    NoUnit,
    Percent,
    RespirationsPerMinute,
}

impl WireEnum for HealthDataUnit {
    const CLASS_NAME: &'static str = "HealthDataUnit";

    fn wire_value(self) -> &'static str {
        match self {
            HealthDataUnit::BeatsPerMinute => "BEATS_PER_MINUTE",
            HealthDataUnit::Count => "COUNT",
            HealthDataUnit::DegreeCelsius => "DEGREE_CELSIUS",
            HealthDataUnit::Gram => "GRAM",
            HealthDataUnit::InternationalUnit => "INTERNATIONAL_UNIT",
            HealthDataUnit::Kilocalorie => "KILOCALORIE",
            HealthDataUnit::Kilogram => "KILOGRAM",
            HealthDataUnit::Liter => "LITER",
            HealthDataUnit::Meter => "METER",
            HealthDataUnit::MilligramPerDeciliter => "MILLIGRAM_PER_DECILITER",
            HealthDataUnit::MillimeterOfMercury => "MILLIMETER_OF_MERCURY",
            HealthDataUnit::Minute => "MINUTE",
            HealthDataUnit::NoUnit => "NO_UNIT",
            HealthDataUnit::Percent => "PERCENT",
            HealthDataUnit::RespirationsPerMinute => "RESPIRATIONS_PER_MINUTE",
        }
    }
}

/// Access level requested for a data type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataAccess {
    Read,
    Write,
    ReadWrite,
}

impl WireEnum for DataAccess {
    const CLASS_NAME: &'static str = "DataAccess";

    fn wire_value(self) -> &'static str {
        match self {
            DataAccess::Read => "READ",
            DataAccess::Write => "WRITE",
            DataAccess::ReadWrite => "READ_WRITE",
        }
    }
}

/// How a measurement was captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordingMethod {
    Active,
    Automatic,
    Manual,
    Unknown,
}

impl WireEnum for RecordingMethod {
    const CLASS_NAME: &'static str = "RecordingMethod";

    fn wire_value(self) -> &'static str {
        match self {
            RecordingMethod::Active => "active",
            RecordingMethod::Automatic => "automatic",
            RecordingMethod::Manual => "manual",
            RecordingMethod::Unknown => "unknown",
        }
    }
}

// ============================================================================
// Record-specific enums
// ============================================================================

/// Meal category for nutrition writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    Unknown,
}

impl WireEnum for MealType {
    const CLASS_NAME: &'static str = "MealType";

    fn wire_value(self) -> &'static str {
        match self {
            MealType::Breakfast => "BREAKFAST",
            MealType::Lunch => "LUNCH",
            MealType::Dinner => "DINNER",
            MealType::Snack => "SNACK",
            MealType::Unknown => "UNKNOWN",
        }
    }
}

/// Menstrual flow heaviness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenstrualFlow {
    Unspecified,
    None,
    Light,
    Medium,
    Heavy,
}

impl WireEnum for MenstrualFlow {
    const CLASS_NAME: &'static str = "MenstrualFlow";

    fn wire_value(self) -> &'static str {
        match self {
            MenstrualFlow::Unspecified => "UNSPECIFIED",
            MenstrualFlow::None => "NONE",
            MenstrualFlow::Light => "LIGHT",
            MenstrualFlow::Medium => "MEDIUM",
            MenstrualFlow::Heavy => "HEAVY",
        }
    }
}

/// Why insulin was delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsulinDeliveryReason {
    Basal,
    Bolus,
}

impl WireEnum for InsulinDeliveryReason {
    const CLASS_NAME: &'static str = "InsulinDeliveryReason";

    fn wire_value(self) -> &'static str {
        match self {
            InsulinDeliveryReason::Basal => "BASAL",
            InsulinDeliveryReason::Bolus => "BOLUS",
        }
    }
}

// ============================================================================
// Device permissions
// ============================================================================

/// A device-level runtime permission (distinct from per-type data access).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    ActivityRecognition,
    Location,
}

impl WireEnum for Permission {
    const CLASS_NAME: &'static str = "Permission";

    fn wire_value(self) -> &'static str {
        match self {
            Permission::ActivityRecognition => "activity_recognition",
            Permission::Location => "location",
        }
    }
}

/// Outcome of a permission request, parsed from the remote reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionStatus {
    Granted,
    Denied,
    PermanentlyDenied,
}

impl PermissionStatus {
    /// Parse a reply string. Unrecognized replies yield `None`.
    pub fn from_reply(reply: &str) -> Option<Self> {
        match reply {
            "granted" => Some(PermissionStatus::Granted),
            "denied" => Some(PermissionStatus::Denied),
            "permanentlyDenied" => Some(PermissionStatus::PermanentlyDenied),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_status_parses_known_replies() {
        assert_eq!(
            PermissionStatus::from_reply("granted"),
            Some(PermissionStatus::Granted)
        );
        assert_eq!(
            PermissionStatus::from_reply("permanentlyDenied"),
            Some(PermissionStatus::PermanentlyDenied)
        );
        assert_eq!(PermissionStatus::from_reply("maybe"), None);
    }

    #[test]
    fn wire_values_are_stable() {
        assert_eq!(HealthDataType::Steps.wire_value(), "STEPS");
        assert_eq!(DataAccess::ReadWrite.wire_value(), "READ_WRITE");
        assert_eq!(RecordingMethod::Automatic.wire_value(), "automatic");
        assert_eq!(HealthDataUnit::NoUnit.wire_value(), "NO_UNIT");
    }
}
