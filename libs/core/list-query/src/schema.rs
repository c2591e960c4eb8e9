use chrono::{DateTime, NaiveDate, Utc};
use database::mongodb::{to_bson_datetime, uuid_to_bson};
use mongodb::bson::Bson;
use uuid::Uuid;

use crate::error::QueryError;
use crate::operator::OperatorSet;

/// Storage type of a filterable field; drives value coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Float,
    Boolean,
    /// UUID reference; malformed values are rejected as invalid ids
    Id,
    /// RFC 3339 timestamp or `YYYY-MM-DD`, compared as a BSON date
    DateTime,
    /// String restricted to the listed values
    Enum(&'static [&'static str]),
}

impl FieldKind {
    /// Converts a raw query value into the BSON stored for this kind.
    pub fn coerce(&self, field: &str, raw: &str) -> Result<Bson, QueryError> {
        let raw = raw.trim();
        let invalid = |expected: &'static str| QueryError::InvalidValue {
            field: field.to_string(),
            value: raw.to_string(),
            expected,
        };

        match self {
            FieldKind::String => Ok(Bson::String(raw.to_string())),
            FieldKind::Integer => raw
                .parse::<i64>()
                .map(Bson::Int64)
                .map_err(|_| invalid("số nguyên")),
            FieldKind::Float => raw
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(Bson::Double)
                .ok_or_else(|| invalid("số")),
            FieldKind::Boolean => match raw.to_ascii_lowercase().as_str() {
                "true" | "1" => Ok(Bson::Boolean(true)),
                "false" | "0" => Ok(Bson::Boolean(false)),
                _ => Err(invalid("true hoặc false")),
            },
            FieldKind::Id => Uuid::parse_str(raw)
                .map(uuid_to_bson)
                .map_err(|_| QueryError::InvalidId {
                    field: field.to_string(),
                    value: raw.to_string(),
                }),
            FieldKind::DateTime => DateTime::parse_from_rfc3339(raw)
                .map(|dt| dt.with_timezone(&Utc))
                .ok()
                .or_else(|| {
                    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                        .ok()
                        .and_then(|d| d.and_hms_opt(0, 0, 0))
                        .map(|naive| naive.and_utc())
                })
                .map(to_bson_datetime)
                .ok_or_else(|| invalid("thời gian RFC 3339")),
            FieldKind::Enum(allowed) => allowed
                .iter()
                .find(|v| **v == raw)
                .map(|v| Bson::String((*v).to_string()))
                .ok_or_else(|| invalid("một giá trị hợp lệ")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

/// Fields and operators one list endpoint accepts.
///
/// ```
/// use list_query::{FieldKind, FilterSchema, OperatorSet};
///
/// let schema = FilterSchema::new(OperatorSet::Comparison)
///     .field("rating", FieldKind::Integer)
///     .field("createdAt", FieldKind::DateTime);
/// assert!(schema.is_sortable("rating"));
/// assert!(!schema.is_sortable("comment"));
/// ```
#[derive(Debug, Clone)]
pub struct FilterSchema {
    pub operators: OperatorSet,
    fields: Vec<FieldSpec>,
}

/// Timestamps every collection carries; always sortable.
const TIMESTAMP_FIELDS: [&str; 2] = ["createdAt", "updatedAt"];

impl FilterSchema {
    pub fn new(operators: OperatorSet) -> Self {
        Self {
            operators,
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, name: &'static str, kind: FieldKind) -> Self {
        self.fields.push(FieldSpec { name, kind });
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn is_sortable(&self, name: &str) -> bool {
        TIMESTAMP_FIELDS.contains(&name) || self.get(name).is_some()
    }
}
