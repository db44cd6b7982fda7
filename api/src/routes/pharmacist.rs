use actix_web::{web, HttpResponse};
use validator::Validate;

use hl_core::{AccessPolicy, Credential, PharmacistRegistration, Role};

use crate::dto::{CredentialResponse, PharmacistCredentialRequest};
use crate::handlers::{handle_validation_errors, ApiError};
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Handler for POST /api/v1/pharmacist/credentials
pub async fn register_credentials(
    state: web::Data<AppState>,
    auth: AuthContext,
    request: web::Json<PharmacistCredentialRequest>,
) -> Result<HttpResponse, ApiError> {
    AccessPolicy::roles(&[Role::Pharmacist]).authorize(&auth.identity(), None)?;

    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return Ok(handle_validation_errors(&errors));
    }

    let credential = state
        .credential_service
        .register_pharmacist(auth.account_id, PharmacistRegistration::from(request))
        .await?;

    Ok(HttpResponse::Created().json(CredentialResponse::from(Credential::Pharmacist(
        credential,
    ))))
}
