//! Doctor routes: patient lookup and credential registration

use actix_web::{web, HttpResponse};
use validator::Validate;

use hl_core::{AccessPolicy, Credential, DoctorRegistration, Role};

use crate::dto::{CredentialResponse, DoctorCredentialRequest};
use crate::handlers::{handle_validation_errors, ApiError};
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Handler for GET /api/v1/doctor/patient/{healthId}
///
/// Open to doctors, pharmacists and patients. `{healthId}` may also be an
/// account id.
pub async fn get_patient(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    AccessPolicy::roles(&[Role::Doctor, Role::Pharmacist, Role::Patient])
        .authorize(&auth.identity(), None)?;

    let profile = state
        .profile_service
        .get_patient_profile(&path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(profile))
}

/// Handler for POST /api/v1/doctor/credentials
///
/// # Responses
///
/// * `201 Created` with the stored credential
/// * `403` caller is not a doctor
/// * `409` registration number already used, or a credential already exists
pub async fn register_credentials(
    state: web::Data<AppState>,
    auth: AuthContext,
    request: web::Json<DoctorCredentialRequest>,
) -> Result<HttpResponse, ApiError> {
    AccessPolicy::roles(&[Role::Doctor]).authorize(&auth.identity(), None)?;

    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return Ok(handle_validation_errors(&errors));
    }

    let credential = state
        .credential_service
        .register_doctor(auth.account_id, DoctorRegistration::from(request))
        .await?;

    Ok(HttpResponse::Created().json(CredentialResponse::from(Credential::Doctor(credential))))
}
