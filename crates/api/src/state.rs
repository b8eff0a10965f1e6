use ferrous_doh_application::use_cases::ResolveQueryUseCase;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub resolve_query: Arc<ResolveQueryUseCase>,
}
