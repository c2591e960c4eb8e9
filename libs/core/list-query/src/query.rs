use mongodb::bson::Bson;
use std::str::FromStr;
use tracing::debug;

use crate::config::PaginationConfig;
use crate::error::QueryError;
use crate::operator::Operator;
use crate::schema::FilterSchema;

const RESERVED_KEYS: [&str; 4] = ["page", "limit", "sort", "fields"];
const DEFAULT_SORT_FIELD: &str = "createdAt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_i32(&self) -> i32 {
        match self {
            SortDirection::Asc => 1,
            SortDirection::Desc => -1,
        }
    }
}

/// Page number plus page size; `limit == None` returns every match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub limit: Option<u64>,
}

impl Pagination {
    /// `page` falls back to 1 when missing, non-numeric or below 1.
    /// `limit` falls back to the default when missing, non-numeric or
    /// negative; `0` disables pagination.
    pub fn parse(page: Option<&str>, limit: Option<&str>, config: &PaginationConfig) -> Self {
        let page = page
            .and_then(|p| p.trim().parse::<i64>().ok())
            .filter(|p| *p >= 1)
            .map_or(1, |p| p as u64);

        let limit = match limit.and_then(|l| l.trim().parse::<i64>().ok()) {
            Some(0) => None,
            Some(l) if l > 0 => Some(l as u64),
            _ => Some(config.default_limit).filter(|l| *l > 0),
        };

        Self { page, limit }
    }

    /// Capped at `i64::MAX`, the largest skip the server accepts.
    pub fn skip(&self) -> u64 {
        self.limit.map_or(0, |limit| {
            (self.page - 1)
                .saturating_mul(limit)
                .min(i64::MAX as u64)
        })
    }
}

/// One `field op value` restriction.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub field: String,
    pub op: Operator,
    pub value: Bson,
}

/// Parsed list request.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub conditions: Vec<Condition>,
    pub sort: Vec<(String, SortDirection)>,
    pub fields: Option<Vec<String>>,
    pub pagination: Pagination,
}

impl ListQuery {
    pub fn parse(
        pairs: &[(String, String)],
        schema: &FilterSchema,
        config: &PaginationConfig,
    ) -> Result<Self, QueryError> {
        let reserved = |key: &str| {
            pairs
                .iter()
                .rev()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        };

        let pagination = Pagination::parse(reserved("page"), reserved("limit"), config);
        let sort = parse_sort(reserved("sort"), schema);
        let fields = reserved("fields").map(split_list).filter(|f| !f.is_empty());

        let mut conditions = Vec::new();
        for (key, value) in pairs {
            if RESERVED_KEYS.contains(&key.as_str()) {
                continue;
            }
            if let Some(condition) = parse_condition(key, value, schema)? {
                conditions.push(condition);
            }
        }

        Ok(Self {
            conditions,
            sort,
            fields,
            pagination,
        })
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_sort(raw: Option<&str>, schema: &FilterSchema) -> Vec<(String, SortDirection)> {
    let mut sort: Vec<(String, SortDirection)> = Vec::new();
    for token in raw.map(split_list).unwrap_or_default() {
        let (name, direction) = match token.strip_prefix('-') {
            Some(name) => (name, SortDirection::Desc),
            None => (token.trim_start_matches('+'), SortDirection::Asc),
        };
        if !schema.is_sortable(name) {
            debug!(field = name, "Ignoring unknown sort field");
            continue;
        }
        if sort.iter().all(|(existing, _)| existing != name) {
            sort.push((name.to_string(), direction));
        }
    }

    if sort.is_empty() {
        sort.push((DEFAULT_SORT_FIELD.to_string(), SortDirection::Desc));
    }
    sort
}

/// Splits `name[op]` into its parts; a plain key is equality.
fn split_key(key: &str) -> (&str, Option<&str>) {
    match key.split_once('[') {
        Some((name, rest)) if rest.ends_with(']') => (name, Some(&rest[..rest.len() - 1])),
        _ => (key, None),
    }
}

fn parse_condition(
    key: &str,
    raw: &str,
    schema: &FilterSchema,
) -> Result<Option<Condition>, QueryError> {
    let (name, op_token) = split_key(key);
    let Some(spec) = schema.get(name) else {
        debug!(field = name, "Ignoring unknown filter field");
        return Ok(None);
    };

    let op = match op_token {
        None => Operator::Eq,
        Some(token) => {
            let op = Operator::from_str(token).map_err(|_| QueryError::UnknownOperator {
                field: name.to_string(),
                op: token.to_string(),
            })?;
            if !schema.operators.allows(op) {
                return Err(QueryError::OperatorNotAllowed {
                    field: name.to_string(),
                    op: token.to_string(),
                });
            }
            op
        }
    };

    let value = if op.takes_list() {
        let items = split_list(raw)
            .iter()
            .map(|item| spec.kind.coerce(name, item))
            .collect::<Result<Vec<_>, _>>()?;
        Bson::Array(items)
    } else {
        spec.kind.coerce(name, raw)?
    };

    Ok(Some(Condition {
        field: name.to_string(),
        op,
        value,
    }))
}
