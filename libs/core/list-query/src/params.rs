use serde::Deserialize;
use utoipa::IntoParams;

/// Reserved list parameters, for OpenAPI documentation. Handlers read the
/// raw pairs instead so that `field[op]=value` filters survive.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Page number, from 1
    pub page: Option<u64>,
    /// Page size; `0` returns every match
    pub limit: Option<u64>,
    /// Comma-separated fields, `-` prefix for descending (default `-createdAt`)
    pub sort: Option<String>,
    /// Comma-separated fields to return; `_id` is always included
    pub fields: Option<String>,
}
