use actix_web::{web, HttpResponse};

use hl_core::{AccessPolicy, DomainError};

use crate::dto::CredentialResponse;
use crate::handlers::ApiError;
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Handler for GET /api/v1/credentials/me
///
/// 404 when the caller has not registered a credential.
pub async fn get_own(
    state: web::Data<AppState>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError> {
    AccessPolicy::authenticated().authorize(&auth.identity(), None)?;

    let credential = state
        .credential_service
        .get_credentials(auth.account_id)
        .await?
        .ok_or_else(|| DomainError::NotFound {
            resource: format!("Credentials for account {}", auth.account_id),
        })?;

    Ok(HttpResponse::Ok().json(CredentialResponse::from(credential)))
}
