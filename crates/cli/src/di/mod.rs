use ferrous_doh_api::AppState;
use ferrous_doh_application::use_cases::ResolveQueryUseCase;
use ferrous_doh_domain::Config;
use ferrous_doh_infrastructure::dns::HickoryDnsLookup;
use std::sync::Arc;
use tracing::info;

pub fn build_app_state(config: &Config) -> anyhow::Result<AppState> {
    let lookup = Arc::new(HickoryDnsLookup::from_source(config.resolver.source)?);
    info!(source = config.resolver.source.as_str(), "DNS lookup initialized");

    Ok(AppState {
        resolve_query: Arc::new(ResolveQueryUseCase::new(lookup)),
    })
}
