//! Envelope encoder: reduces typed parameter values into the tagged JSON
//! structure `{value, type, subtype, class_name}` that the remote dispatcher
//! reconstructs into its own symbolic form.
//!
//! The encoder is a pure, total function over a closed union of supported
//! input shapes. Enum members never cross the wire as opaque objects (they
//! reduce to their wire scalar plus the originating class name) and datetimes
//! always reduce to integer milliseconds since epoch.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

// ============================================================================
// Wire tags
// ============================================================================

/// Discriminator tag describing the reduced shape of an envelope's `value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    Bool,
    Int,
    Float,
    Str,
    List,
    Dict,
    Enum,
    Date,
    None,
}

// ============================================================================
// WireEnum — the seam between domain enums and the encoder
// ============================================================================

/// A domain enumeration that can cross the wire.
///
/// `CLASS_NAME` names the enumeration for the remote side's symbol lookup;
/// `wire_value` is the scalar that replaces the member in `value`.
pub trait WireEnum: Copy {
    const CLASS_NAME: &'static str;

    fn wire_value(self) -> &'static str;
}

// ============================================================================
// ParamValue — closed union of supported inputs
// ============================================================================

/// A typed parameter value accepted by the encoder.
///
/// One variant per supported input category. Anything outside this union is
/// unrepresentable, so "unsupported value" can only arise from the residual
/// runtime checks in [`wrap`]: plain-list homogeneity and float finiteness.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Reduced to integer milliseconds since epoch.
    Date(DateTime<Utc>),
    /// A single enum member, reduced to its wire scalar.
    Enum {
        class_name: &'static str,
        value: &'static str,
    },
    /// A homogeneous list of members of one enum type. Carries its class
    /// name even when empty, so an empty filter list still tells the remote
    /// side what element type it holds.
    EnumList {
        class_name: &'static str,
        values: Vec<&'static str>,
    },
    /// A plain list of primitives or maps. Enum members, dates, and nested
    /// lists are rejected at wrap time; enum lists go through [`EnumList`](Self::EnumList).
    List(Vec<ParamValue>),
    /// A key-value map, passed through shallow. Never recursively re-wrapped.
    Dict(Map<String, Value>),
}

impl ParamValue {
    /// Wrap a single enum member.
    pub fn from_enum<E: WireEnum>(member: E) -> Self {
        ParamValue::Enum {
            class_name: E::CLASS_NAME,
            value: member.wire_value(),
        }
    }

    /// Wrap a slice of members of one enum type. The class name comes from
    /// the type, so this works for empty slices too.
    pub fn enum_list<E: WireEnum>(members: &[E]) -> Self {
        ParamValue::EnumList {
            class_name: E::CLASS_NAME,
            values: members.iter().map(|m| m.wire_value()).collect(),
        }
    }

    /// `Some(f)` → `Float(f)`, `None` → `None`.
    pub fn opt_float(value: Option<f64>) -> Self {
        value.map(ParamValue::Float).unwrap_or(ParamValue::None)
    }

    /// `Some(i)` → `Int(i)`, `None` → `None`.
    pub fn opt_int(value: Option<i64>) -> Self {
        value.map(ParamValue::Int).unwrap_or(ParamValue::None)
    }

    /// `Some(s)` → `Str(s)`, `None` → `None`.
    pub fn opt_str(value: Option<String>) -> Self {
        value.map(ParamValue::Str).unwrap_or(ParamValue::None)
    }

    /// `Some(d)` → `Date(d)`, `None` → `None`.
    pub fn opt_date(value: Option<DateTime<Utc>>) -> Self {
        value.map(ParamValue::Date).unwrap_or(ParamValue::None)
    }
}

// ============================================================================
// Envelope — the wire unit
// ============================================================================

/// The self-describing wire unit produced by [`wrap`].
///
/// Serializes bit-exact as
/// `{"value": <reduced>, "type": <tag>, "subtype": <tag-or-null>, "class_name": <string-or-null>}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    /// The primitive-reduced payload. Never an enum object or date object.
    pub value: Value,
    /// Tag matching the reduced shape of `value`.
    #[serde(rename = "type")]
    pub type_tag: TypeTag,
    /// `Some(Enum)` only for lists of enum members.
    pub subtype: Option<TypeTag>,
    /// The originating enumeration's name, for enum and enum-list values.
    pub class_name: Option<&'static str>,
}

impl Envelope {
    fn plain(value: Value, type_tag: TypeTag) -> Self {
        Envelope {
            value,
            type_tag,
            subtype: None,
            class_name: None,
        }
    }
}

// ============================================================================
// wrap
// ============================================================================

/// Reduce a [`ParamValue`] to its [`Envelope`].
///
/// Pure and deterministic. The only failures are a plain list holding a
/// member the wire format cannot describe element-wise (enum, date, nested
/// list) and a non-finite float, which JSON cannot represent.
pub fn wrap(value: &ParamValue) -> Result<Envelope> {
    let envelope = match value {
        ParamValue::None => Envelope::plain(Value::Null, TypeTag::None),
        ParamValue::Bool(b) => Envelope::plain(Value::Bool(*b), TypeTag::Bool),
        ParamValue::Int(i) => Envelope::plain(Value::from(*i), TypeTag::Int),
        ParamValue::Float(f) => Envelope::plain(finite_float(*f)?, TypeTag::Float),
        ParamValue::Str(s) => Envelope::plain(Value::String(s.clone()), TypeTag::Str),
        ParamValue::Date(d) => Envelope::plain(Value::from(d.timestamp_millis()), TypeTag::Date),
        ParamValue::Enum { class_name, value } => Envelope {
            value: Value::String((*value).to_string()),
            type_tag: TypeTag::Enum,
            subtype: None,
            class_name: Some(class_name),
        },
        ParamValue::EnumList { class_name, values } => Envelope {
            value: Value::Array(values.iter().map(|v| Value::String((*v).to_string())).collect()),
            type_tag: TypeTag::List,
            subtype: Some(TypeTag::Enum),
            class_name: Some(class_name),
        },
        ParamValue::List(items) => {
            let mut reduced = Vec::with_capacity(items.len());
            for item in items {
                reduced.push(reduce_list_element(item)?);
            }
            Envelope::plain(Value::Array(reduced), TypeTag::List)
        }
        ParamValue::Dict(map) => Envelope::plain(Value::Object(map.clone()), TypeTag::Dict),
    };
    Ok(envelope)
}

/// JSON has no NaN or infinity; a non-finite float would serialize as
/// `null` under a `float` tag, so it is rejected instead.
fn finite_float(f: f64) -> Result<Value> {
    if f.is_finite() {
        Ok(Value::from(f))
    } else {
        Err(Error::UnsupportedValue("non-finite float"))
    }
}

/// Shallow reduction for plain-list elements. Only shapes the wire format
/// can carry without per-element metadata are allowed.
fn reduce_list_element(item: &ParamValue) -> Result<Value> {
    match item {
        ParamValue::None => Ok(Value::Null),
        ParamValue::Bool(b) => Ok(Value::Bool(*b)),
        ParamValue::Int(i) => Ok(Value::from(*i)),
        ParamValue::Float(f) => finite_float(*f),
        ParamValue::Str(s) => Ok(Value::String(s.clone())),
        ParamValue::Dict(map) => Ok(Value::Object(map.clone())),
        ParamValue::Enum { .. } | ParamValue::EnumList { .. } => Err(Error::UnsupportedValue(
            "enum member in plain list (use ParamValue::enum_list)",
        )),
        ParamValue::Date(_) => Err(Error::UnsupportedValue("datetime in plain list")),
        ParamValue::List(_) => Err(Error::UnsupportedValue("nested list")),
    }
}

// ============================================================================
// Tests
// ============================================================================
