//! Test harness wiring the auth service over in-memory collaborators

use std::sync::Arc;

use crate::repositories::{MockAccountRepository, MockSequenceRepository};
use crate::services::auth::{AuthService, MockPasswordHasher, SignupCommand};
use crate::services::health_id::HealthIdAllocator;
use crate::services::token::{TokenService, TokenServiceConfig};
use crate::services::verification::tests::mocks::MockMailService;
use crate::services::verification::{VerificationService, VerificationServiceConfig};
use crate::domain::entities::account::Role;

pub struct Harness {
    pub service: AuthService,
    pub accounts: MockAccountRepository,
    pub sequences: MockSequenceRepository,
    pub mail: MockMailService,
    pub tokens: Arc<TokenService>,
}

pub fn harness() -> Harness {
    harness_with_mail(MockMailService::new())
}

pub fn harness_with_mail(mail: MockMailService) -> Harness {
    let accounts = MockAccountRepository::new();
    let sequences = MockSequenceRepository::new();
    let tokens = Arc::new(TokenService::new(TokenServiceConfig {
        jwt_secret: "auth-service-test-secret".to_string(),
        ..Default::default()
    }));
    let verification = Arc::new(VerificationService::new(
        Arc::new(mail.clone()),
        VerificationServiceConfig::default(),
    ));

    let service = AuthService::new(
        Arc::new(accounts.clone()),
        Arc::new(HealthIdAllocator::new(Arc::new(sequences.clone()))),
        verification,
        Arc::clone(&tokens),
        Arc::new(MockPasswordHasher),
    );

    Harness {
        service,
        accounts,
        sequences,
        mail,
        tokens,
    }
}

pub fn signup_command(email: &str, password: &str, role: Option<Role>) -> SignupCommand {
    SignupCommand {
        name: "Jane Doe".to_string(),
        email: email.to_string(),
        password: password.to_string(),
        role,
    }
}
