//! Patient-facing routes: own profile, profile completion, records access

use actix_web::{web, HttpResponse};
use validator::Validate;

use hl_core::{AccessPolicy, ProfileDetails, Role};
use hl_shared::{ApiResponse, MessageResponse};

use crate::dto::{CompleteProfileRequest, OwnProfileResponse};
use crate::handlers::{handle_validation_errors, ApiError};
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Handler for GET /api/v1/patient/profile
///
/// Any authenticated account may read its own profile. The response carries
/// the public card URL the mobile app encodes as a QR code.
pub async fn get_profile(
    state: web::Data<AppState>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError> {
    AccessPolicy::authenticated().authorize(&auth.identity(), None)?;

    let profile = state.profile_service.get_own_profile(auth.account_id).await?;

    Ok(HttpResponse::Ok().json(OwnProfileResponse::new(profile, &state.public_base_url)))
}

/// Handler for POST /api/v1/patient/complete-profile
///
/// Replaces the caller's profile fields and marks the profile complete.
pub async fn complete_profile(
    state: web::Data<AppState>,
    auth: AuthContext,
    request: web::Json<CompleteProfileRequest>,
) -> Result<HttpResponse, ApiError> {
    AccessPolicy::authenticated().authorize(&auth.identity(), None)?;

    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return Ok(handle_validation_errors(&errors));
    }

    let profile = state
        .profile_service
        .complete_profile(auth.account_id, ProfileDetails::from(request))
        .await?;

    Ok(HttpResponse::Ok()
        .json(ApiResponse::success(profile).with_message("Profile completed successfully.")))
}

/// Handler for GET /api/v1/patient/{id}/records
///
/// Only the patient identified by `{id}` may read these records.
pub async fn records(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let target = path.into_inner();

    if let Err(e) = AccessPolicy::roles(&[Role::Patient])
        .owner_only()
        .authorize(&auth.identity(), Some(&target))
    {
        log::warn!(
            "Records access denied for {} ({}) on {}",
            auth.account_id,
            auth.role,
            target
        );
        return Err(e.into());
    }

    let message = state
        .profile_service
        .records_access_message(auth.account_id)
        .await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new(message)))
}
