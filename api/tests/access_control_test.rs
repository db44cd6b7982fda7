//! Bearer-token authentication and role/ownership checks on protected routes

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};

use common::{bearer, test_context, token_config};
use hl_api::create_app;
use hl_core::{Role, TokenService, TokenServiceConfig};

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_missing_token_is_unauthorized() {
        let ctx = test_context();
        let app = test::init_service(create_app(ctx.state.clone(), &ctx.settings)).await;

        let req = test::TestRequest::get()
            .uri("/api/v1/patient/profile")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "invalid_token");
    }

    #[actix_web::test]
    async fn test_tampered_token_is_unauthorized() {
        let ctx = test_context();
        let account = ctx
            .active_account("Kamal", "kamal@example.com", Role::Patient)
            .await;
        let app = test::init_service(create_app(ctx.state.clone(), &ctx.settings)).await;

        let mut tampered = account.token.clone();
        tampered.push('x');

        let req = test::TestRequest::get()
            .uri("/api/v1/patient/profile")
            .insert_header(bearer(&tampered))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "invalid_token");
    }

    #[actix_web::test]
    async fn test_expired_token_is_reported_as_expired() {
        let ctx = test_context();
        let summary = ctx
            .active_account("Lakmal", "lakmal@example.com", Role::Patient)
            .await;
        let account = ctx.state.auth_service.find_account(summary.id).await.unwrap();

        let stale_issuer = TokenService::new(TokenServiceConfig {
            expiry_seconds: -120,
            ..token_config()
        });
        let expired = stale_issuer.issue(&account).unwrap();

        let app = test::init_service(create_app(ctx.state.clone(), &ctx.settings)).await;
        let req = test::TestRequest::get()
            .uri("/api/v1/patient/profile")
            .insert_header(bearer(&expired))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "token_expired");
    }

    #[actix_web::test]
    async fn test_token_from_another_secret_is_rejected() {
        let ctx = test_context();
        let summary = ctx
            .active_account("Saman", "saman@example.com", Role::Doctor)
            .await;
        let account = ctx.state.auth_service.find_account(summary.id).await.unwrap();

        let foreign = TokenService::new(TokenServiceConfig {
            jwt_secret: "some-other-secret-entirely-000000".to_string(),
            ..token_config()
        })
        .issue(&account)
        .unwrap();

        let app = test::init_service(create_app(ctx.state.clone(), &ctx.settings)).await;
        let req = test::TestRequest::get()
            .uri("/api/v1/credentials/me")
            .insert_header(bearer(&foreign))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_patient_cannot_register_doctor_credentials() {
        let ctx = test_context();
        let patient = ctx
            .active_account("Ayesha", "ayesha@example.com", Role::Patient)
            .await;
        let app = test::init_service(create_app(ctx.state.clone(), &ctx.settings)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/doctor/credentials")
            .insert_header(bearer(&patient.token))
            .set_json(json!({
                "medicalRegNumber": "SLMC-0001",
                "specialization": "General Practice"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "insufficient_permissions");
    }

    #[actix_web::test]
    async fn test_records_are_self_scoped() {
        let ctx = test_context();
        let owner = ctx
            .active_account("Upeksha", "upeksha@example.com", Role::Patient)
            .await;
        let other = ctx
            .active_account("Janaka", "janaka@example.com", Role::Patient)
            .await;
        let app = test::init_service(create_app(ctx.state.clone(), &ctx.settings)).await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/patient/{}/records", owner.id))
            .insert_header(bearer(&owner.token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["message"],
            format!(
                "Access granted for Upeksha (Role: PATIENT). Viewing records for ID: {}.",
                owner.id
            )
        );

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/patient/{}/records", owner.id))
            .insert_header(bearer(&other.token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "not_resource_owner");
    }

    #[actix_web::test]
    async fn test_doctor_cannot_read_patient_records_route() {
        let ctx = test_context();
        let patient = ctx
            .active_account("Sunil", "sunil@example.com", Role::Patient)
            .await;
        let doctor = ctx
            .active_account("Dr. Perera", "perera@example.com", Role::Doctor)
            .await;
        let app = test::init_service(create_app(ctx.state.clone(), &ctx.settings)).await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/patient/{}/records", patient.id))
            .insert_header(bearer(&doctor.token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "insufficient_permissions");
    }

    #[actix_web::test]
    async fn test_unknown_route_is_json_not_found() {
        let ctx = test_context();
        let app = test::init_service(create_app(ctx.state.clone(), &ctx.settings)).await;

        let req = test::TestRequest::get().uri("/nothing/here").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "resource_not_found");
    }

    #[actix_web::test]
    async fn test_health_check() {
        let ctx = test_context();
        let app = test::init_service(create_app(ctx.state.clone(), &ctx.settings)).await;

        for uri in ["/health", "/api/v1/health"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["status"], "healthy");
        }
    }
}
