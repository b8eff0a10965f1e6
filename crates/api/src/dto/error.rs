use serde::Serialize;

/// Body of a 400 response. Differs from the DoH envelope on purpose: existing
/// clients read `error` for request problems.
#[derive(Serialize, Debug, Clone)]
pub struct ErrorResponse {
    pub error: String,
}
