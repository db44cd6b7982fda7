//! Shared wiring for the API integration tests: real services over
//! in-memory repositories, the mock mailer and the fast mock hasher.

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;

use hl_api::{AppState, HttpSettings};
use hl_core::{
    AuthResponse, AuthService, CredentialService, HealthIdAllocator, MockAccountRepository,
    MockCredentialRepository, MockPasswordHasher, MockSequenceRepository, ProfileService, Role,
    SignupCommand, TokenService, TokenServiceConfig, VerificationService,
    VerificationServiceConfig,
};
use hl_infra::MockMailService;

pub const PUBLIC_BASE_URL: &str = "https://healthlink.test";
pub const PASSWORD: &str = "correct-horse-battery";

pub struct TestContext {
    pub state: web::Data<AppState>,
    pub settings: HttpSettings,
    pub mail: MockMailService,
    pub token_service: Arc<TokenService>,
}

pub fn token_config() -> TokenServiceConfig {
    TokenServiceConfig {
        jwt_secret: "integration-test-secret-0123456789".to_string(),
        ..Default::default()
    }
}

pub fn test_context() -> TestContext {
    let accounts = Arc::new(MockAccountRepository::new());
    let credentials = Arc::new(MockCredentialRepository::new());
    let sequences = Arc::new(MockSequenceRepository::new());
    let mail = MockMailService::new();

    let verification_service = Arc::new(VerificationService::new(
        Arc::new(mail.clone()),
        VerificationServiceConfig::default(),
    ));
    let token_service = Arc::new(TokenService::new(token_config()));

    let auth_service = Arc::new(AuthService::new(
        accounts.clone(),
        Arc::new(HealthIdAllocator::new(sequences)),
        verification_service,
        Arc::clone(&token_service),
        Arc::new(MockPasswordHasher),
    ));

    let state = web::Data::new(AppState {
        auth_service,
        profile_service: Arc::new(ProfileService::new(accounts.clone())),
        credential_service: Arc::new(CredentialService::new(accounts, credentials)),
        token_service: Arc::clone(&token_service),
        public_base_url: PUBLIC_BASE_URL.to_string(),
    });

    TestContext {
        state,
        settings: HttpSettings::default(),
        mail,
        token_service,
    }
}

/// The six-digit code in the latest verification email sent to `email`
pub fn latest_code(mail: &MockMailService, email: &str) -> String {
    mail.sent()
        .iter()
        .rev()
        .filter(|sent| sent.to == email && sent.email.subject.contains("Verify"))
        .find_map(|sent| {
            sent.email
                .text
                .split_whitespace()
                .map(|word| word.trim_matches(|c: char| !c.is_ascii_digit()))
                .find(|word| word.len() == 6 && word.chars().all(|c| c.is_ascii_digit()))
                .map(str::to_string)
        })
        .expect("no verification code was mailed")
}

impl TestContext {
    /// Sign up without verifying
    pub async fn signup(&self, name: &str, email: &str, role: Role) {
        self.state
            .auth_service
            .signup(SignupCommand {
                name: name.to_string(),
                email: email.to_string(),
                password: PASSWORD.to_string(),
                role: Some(role),
            })
            .await
            .expect("signup failed");
    }

    /// Sign up and verify, returning the token-bearing summary
    pub async fn active_account(&self, name: &str, email: &str, role: Role) -> AuthResponse {
        self.signup(name, email, role).await;
        let code = latest_code(&self.mail, email);
        self.state
            .auth_service
            .verify(email, &code)
            .await
            .expect("verification failed")
    }
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}
