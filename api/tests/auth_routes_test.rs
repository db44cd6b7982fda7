//! Signup, verification, resend, login and password change over HTTP

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};

use common::{latest_code, test_context, PASSWORD};
use hl_api::create_app;
use hl_core::Role;

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_signup_verify_login_flow() {
        let ctx = test_context();
        let app = test::init_service(create_app(ctx.state.clone(), &ctx.settings)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/signup")
            .set_json(json!({
                "name": "Nimali Silva",
                "email": "nimali@example.com",
                "password": PASSWORD,
                "role": "patient"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(
            body["message"],
            "User registered successfully. Please verify your email."
        );
        assert_eq!(body["data"]["healthId"], "HL-PNT01");
        assert_eq!(body["data"]["role"], "PATIENT");

        let code = latest_code(&ctx.mail, "nimali@example.com");
        let req = test::TestRequest::post()
            .uri("/api/v1/auth/verify")
            .set_json(json!({ "email": "nimali@example.com", "verificationCode": code }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["isActive"], true);
        assert_eq!(body["isVerificationComplete"], false);
        assert_eq!(body["healthId"], "HL-PNT01");
        assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({ "email": "nimali@example.com", "password": PASSWORD }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["email"], "nimali@example.com");
        assert_eq!(body["name"], "Nimali Silva");
    }

    #[actix_web::test]
    async fn test_signup_validation_errors_list_fields() {
        let ctx = test_context();
        let app = test::init_service(create_app(ctx.state.clone(), &ctx.settings)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/signup")
            .set_json(json!({
                "name": "   ",
                "email": "not-an-email",
                "password": "short"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "validation_error");
        assert!(body["details"]["name"].is_array());
        assert!(body["details"]["email"].is_array());
        assert!(body["details"]["password"].is_array());
        assert_eq!(ctx.mail.get_message_count(), 0);
    }

    #[actix_web::test]
    async fn test_signup_rejects_unknown_role() {
        let ctx = test_context();
        let app = test::init_service(create_app(ctx.state.clone(), &ctx.settings)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/signup")
            .set_json(json!({
                "name": "Kasun",
                "email": "kasun@example.com",
                "password": PASSWORD,
                "role": "ADMIN"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "validation_error");
    }

    #[actix_web::test]
    async fn test_malformed_json_is_a_validation_error() {
        let ctx = test_context();
        let app = test::init_service(create_app(ctx.state.clone(), &ctx.settings)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{\"email\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "validation_error");
    }

    #[actix_web::test]
    async fn test_signup_conflicts_with_active_account() {
        let ctx = test_context();
        ctx.active_account("Amal", "amal@example.com", Role::Patient)
            .await;
        let app = test::init_service(create_app(ctx.state.clone(), &ctx.settings)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/signup")
            .set_json(json!({
                "name": "Amal Again",
                "email": "amal@example.com",
                "password": PASSWORD
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "email_already_registered");
    }

    #[actix_web::test]
    async fn test_resignup_keeps_health_id() {
        let ctx = test_context();
        let app = test::init_service(create_app(ctx.state.clone(), &ctx.settings)).await;

        let signup = |name: &'static str| {
            test::TestRequest::post()
                .uri("/api/v1/auth/signup")
                .set_json(json!({
                    "name": name,
                    "email": "ruwan@example.com",
                    "password": PASSWORD,
                    "role": "DOCTOR"
                }))
                .to_request()
        };

        let first: Value = test::call_and_read_body_json(&app, signup("Ruwan")).await;
        let second: Value = test::call_and_read_body_json(&app, signup("Dr. Ruwan")).await;

        assert_eq!(first["data"]["healthId"], "HL-DCT01");
        assert_eq!(second["data"]["healthId"], first["data"]["healthId"]);
        assert_eq!(second["data"]["reusedExisting"], true);
    }

    #[actix_web::test]
    async fn test_wrong_code_is_rejected() {
        let ctx = test_context();
        ctx.signup("Sahan", "sahan@example.com", Role::Patient).await;
        let app = test::init_service(create_app(ctx.state.clone(), &ctx.settings)).await;

        let code = latest_code(&ctx.mail, "sahan@example.com");
        let wrong = if code == "000000" { "111111" } else { "000000" };

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/verify")
            .set_json(json!({ "email": "sahan@example.com", "code": wrong }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "invalid_verification_code");
    }

    #[actix_web::test]
    async fn test_verify_twice_reports_already_verified() {
        let ctx = test_context();
        ctx.signup("Dilini", "dilini@example.com", Role::Patient).await;
        let code = latest_code(&ctx.mail, "dilini@example.com");
        let app = test::init_service(create_app(ctx.state.clone(), &ctx.settings)).await;

        let verify = || {
            test::TestRequest::post()
                .uri("/api/v1/auth/verify")
                .set_json(json!({ "email": "dilini@example.com", "code": code }))
                .to_request()
        };

        let resp = test::call_service(&app, verify()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = test::call_service(&app, verify()).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "account_already_verified");
    }

    #[actix_web::test]
    async fn test_verify_unknown_email_is_not_found() {
        let ctx = test_context();
        let app = test::init_service(create_app(ctx.state.clone(), &ctx.settings)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/verify")
            .set_json(json!({ "email": "nobody@example.com", "code": "123456" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "account_not_found");
    }

    #[actix_web::test]
    async fn test_resend_replaces_code() {
        let ctx = test_context();
        ctx.signup("Tharindu", "tharindu@example.com", Role::Pharmacist)
            .await;
        let app = test::init_service(create_app(ctx.state.clone(), &ctx.settings)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/resend-otp")
            .set_json(json!({ "email": "tharindu@example.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Verification code resent successfully.");
        assert_eq!(ctx.mail.get_message_count(), 2);

        let code = latest_code(&ctx.mail, "tharindu@example.com");
        let req = test::TestRequest::post()
            .uri("/api/v1/auth/verify")
            .set_json(json!({ "email": "tharindu@example.com", "code": code }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_mail_failure_surfaces_as_service_unavailable() {
        let ctx = test_context();
        ctx.mail.set_simulate_failure(true);
        let app = test::init_service(create_app(ctx.state.clone(), &ctx.settings)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/signup")
            .set_json(json!({
                "name": "Iresha",
                "email": "iresha@example.com",
                "password": PASSWORD
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "email_delivery_failure");
    }

    #[actix_web::test]
    async fn test_login_on_unverified_account_is_forbidden() {
        let ctx = test_context();
        ctx.signup("Chamari", "chamari@example.com", Role::Patient)
            .await;
        let app = test::init_service(create_app(ctx.state.clone(), &ctx.settings)).await;

        for password in [PASSWORD, "definitely-wrong"] {
            let req = test::TestRequest::post()
                .uri("/api/v1/auth/login")
                .set_json(json!({ "email": "chamari@example.com", "password": password }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::FORBIDDEN);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], "account_not_active");
        }
    }

    #[actix_web::test]
    async fn test_login_with_wrong_password_is_unauthorized() {
        let ctx = test_context();
        ctx.active_account("Nuwan", "nuwan@example.com", Role::Patient)
            .await;
        let app = test::init_service(create_app(ctx.state.clone(), &ctx.settings)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({ "email": "nuwan@example.com", "password": "wrong-password" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "invalid_credentials");
    }

    #[actix_web::test]
    async fn test_change_password_then_login_with_new_password() {
        let ctx = test_context();
        ctx.active_account("Hasini", "hasini@example.com", Role::Patient)
            .await;
        let app = test::init_service(create_app(ctx.state.clone(), &ctx.settings)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/change-password")
            .set_json(json!({
                "email": "hasini@example.com",
                "oldPassword": PASSWORD,
                "newPassword": "a-brand-new-password"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Password changed successfully.");

        let login = |password: &str| {
            test::TestRequest::post()
                .uri("/api/v1/auth/login")
                .set_json(json!({ "email": "hasini@example.com", "password": password }))
                .to_request()
        };
        let resp = test::call_service(&app, login(PASSWORD)).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let resp = test::call_service(&app, login("a-brand-new-password")).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_change_password_with_wrong_old_password() {
        let ctx = test_context();
        ctx.active_account("Pradeep", "pradeep@example.com", Role::Doctor)
            .await;
        let app = test::init_service(create_app(ctx.state.clone(), &ctx.settings)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/change-password")
            .set_json(json!({
                "email": "pradeep@example.com",
                "oldPassword": "not-the-password",
                "newPassword": "a-brand-new-password"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
