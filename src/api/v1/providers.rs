//! Providers endpoint handler

use axum::Json;
use tracing::debug;

use crate::api::types::{ProviderInfo, ProvidersResponse};
use crate::domain::ProviderKind;

/// GET /v1/providers
pub async fn list_providers() -> Json<ProvidersResponse> {
    debug!("Listing providers");

    Json(ProvidersResponse::new(
        ProviderKind::all()
            .into_iter()
            .map(ProviderInfo::from_domain)
            .collect(),
    ))
}
