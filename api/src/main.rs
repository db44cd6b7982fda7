use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use log::info;

use hl_api::{create_app, AppState, HttpSettings};
use hl_core::{
    AccountRepository, AuthService, CredentialRepository, CredentialService, HealthIdAllocator,
    PasswordHasherTrait, ProfileService, SequenceRepository, TokenService, TokenServiceConfig,
    VerificationService, VerificationServiceConfig,
};
use hl_infra::{
    create_mail_service, BcryptPasswordHasher, DatabasePool, MySqlAccountRepository,
    MySqlCredentialRepository, MySqlSequenceRepository,
};
use hl_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    env_logger::init_from_env(env_logger::Env::new().default_filter_or(config.logging.level.as_str()));

    info!("Starting HealthLink API Server ({})", config.environment);

    let database = DatabasePool::new(&config.database)
        .await
        .context("Failed to connect to database")?;
    if config.database.run_migrations {
        database
            .run_migrations()
            .await
            .context("Failed to run database migrations")?;
    }
    info!("{}", database.get_statistics());

    let pool = database.get_pool().clone();
    let accounts: Arc<dyn AccountRepository> = Arc::new(MySqlAccountRepository::new(pool.clone()));
    let sequences: Arc<dyn SequenceRepository> = Arc::new(MySqlSequenceRepository::new(pool.clone()));
    let credentials: Arc<dyn CredentialRepository> = Arc::new(MySqlCredentialRepository::new(pool));

    let mail_service = create_mail_service(&config.mail, &config.verification)
        .context("Failed to configure mail service")?;
    let verification_service = Arc::new(VerificationService::new(
        mail_service,
        VerificationServiceConfig::from(&config.verification),
    ));
    let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&config.auth.jwt)));
    let hasher: Arc<dyn PasswordHasherTrait> = Arc::new(BcryptPasswordHasher::new());

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&accounts),
        Arc::new(HealthIdAllocator::new(sequences)),
        verification_service,
        Arc::clone(&token_service),
        hasher,
    ));
    let profile_service = Arc::new(ProfileService::new(Arc::clone(&accounts)));
    let credential_service = Arc::new(CredentialService::new(accounts, credentials));

    let state = web::Data::new(AppState {
        auth_service,
        profile_service,
        credential_service,
        token_service,
        public_base_url: config.server.public_base_url.clone(),
    });
    let settings = HttpSettings {
        environment: config.environment,
        cors: config.cors.clone(),
        max_payload_size: config.server.max_payload_size,
    };

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(state.clone(), &settings));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await?;

    database.close().await;
    info!("Server stopped");
    Ok(())
}
