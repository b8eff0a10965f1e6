use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use ferrous_doh_domain::{DnsQuery, DohResponse, DomainError};
use tracing::{debug, instrument, warn};

use crate::{dto::DnsQueryParams, errors::ApiError, state::AppState};

#[instrument(skip(state), name = "api_dns_query")]
pub async fn dns_query(
    State(state): State<AppState>,
    params: Result<Query<DnsQueryParams>, QueryRejection>,
) -> Result<Json<DohResponse>, ApiError> {
    // Rejections are answered with the same `{error}` body as other invalid input.
    let Query(params) = params.map_err(|rejection| {
        debug!(error = %rejection.body_text(), "Rejected query string");
        DomainError::MalformedQuery(rejection.body_text())
    })?;

    let query = DnsQuery::from_params(params.name.as_deref(), params.record_type.as_deref())
        .inspect_err(|e| debug!(error = %e, "Rejected query"))?;

    match state.resolve_query.execute(&query).await {
        Ok(records) => {
            debug!(
                domain = %query.domain,
                record_type = %query.record_type,
                answers = records.len(),
                "Query answered"
            );
            Ok(Json(DohResponse::from_records(&records)))
        }
        Err(e) => {
            warn!(
                domain = %query.domain,
                record_type = %query.record_type,
                error = %e,
                "Resolution failed"
            );
            Err(e.into())
        }
    }
}
