pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::email;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::application::helpers::UserIdentityResolver;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;

use crate::email::adapter::outgoing::smtp_sender::SmtpEmailSender;
use crate::email::application::ports::outgoing::{ContactNotifier, EmailSender};
use crate::email::application::services::ContactEmailService;

use crate::modules::media::adapter::outgoing::{CdnAssetStorage, CdnConfig};
use crate::modules::media::application::domain::policies::upload_policy::UploadPolicy;
use crate::modules::media::application::media_use_cases::MediaUseCases;
use crate::modules::media::application::service::{DeleteImageService, UploadImagesService};

use crate::modules::portfolio::adapter::outgoing::{
    Argon2Hasher, PortfolioQueryPostgres, PortfolioRepositoryPostgres, ProfileSourcePostgres,
    RedisVisitorTracker,
};
use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::modules::portfolio::application::ports::outgoing::{
    PasswordHasher, ProfileSource, VisitorTracker,
};
use crate::modules::portfolio::application::service::{
    CreatePortfolioService, CustomizePortfolioService, DeletePortfolioService,
    DuplicatePortfolioService, EditSectionsService, GetPortfolioService,
    GetPublicPortfolioService, ListPortfoliosService, PublishPortfolioService,
    RecordShareService, RenderPortfolioService, SubmitContactService, UnpublishPortfolioService,
};

use crate::modules::template::adapter::outgoing::{
    TemplateQueryPostgres, TemplateRepositoryPostgres,
};
use crate::modules::template::application::ports::outgoing::TemplateQuery;
use crate::modules::template::application::service::{
    CreateTemplateService, DeleteTemplateService, GetTemplateService, ListTemplatesService,
    PatchTemplateService,
};
use crate::modules::template::application::template_use_cases::TemplateUseCases;

use crate::shared::api::{custom_json_config, json_config_with_limit};

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use deadpool_redis::{Config, Runtime};

use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub template: TemplateUseCases,
    pub portfolio: PortfolioUseCases,
    pub media: MediaUseCases,
    pub user_identity_resolver: UserIdentityResolver,
}

fn required(key: &str) -> anyhow::Result<String> {
    env::var(key).with_context(|| format!("{key} is not set in .env file"))
}

fn smtp_sender(from_email: &str) -> anyhow::Result<SmtpEmailSender> {
    if env::var("RUST_ENV").as_deref() == Ok("test") {
        // Local Mailpit
        let host = env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
        let port: u16 = env::var("SMTP_PORT")
            .unwrap_or_else(|_| "1025".to_string())
            .parse()
            .context("Invalid SMTP_PORT")?;

        Ok(SmtpEmailSender::new_local(&host, port, from_email))
    } else {
        let smtp_server = required("SMTP_SERVER")?;
        let smtp_user = required("SMTP_USERNAME")?;
        let smtp_pass = required("SMTP_PASSWORD")?;

        SmtpEmailSender::new(&smtp_server, &smtp_user, &smtp_pass, from_email)
            .context("SMTP relay setup failed")
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    if dotenvy::from_filename(format!(".env.{rust_env}")).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = required("DATABASE_URL")?;
    let host = required("HOST")?;
    let port = required("PORT")?;
    let redis_url = required("REDIS_URL")?;
    let from_email = required("EMAIL_FROM")?;

    let server_url = format!("{host}:{port}");
    info!(address = %server_url, environment = %rust_env, "Configuration loaded");

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let db_arc = Arc::new(
        Database::connect(opt)
            .await
            .context("Failed to connect to database")?,
    );

    // Redis connection
    let redis_arc = Arc::new(
        Config::from_url(&redis_url)
            .create_pool(Some(Runtime::Tokio1))
            .context("Failed to create Redis pool")?,
    );

    // Outgoing adapters
    let template_repo = TemplateRepositoryPostgres::new(Arc::clone(&db_arc));
    let template_query = TemplateQueryPostgres::new(Arc::clone(&db_arc));
    let template_query_arc: Arc<dyn TemplateQuery + Send + Sync> =
        Arc::new(template_query.clone());

    let portfolio_repo = PortfolioRepositoryPostgres::new(Arc::clone(&db_arc));
    let portfolio_query = PortfolioQueryPostgres::new(Arc::clone(&db_arc));
    let profile_source: Arc<dyn ProfileSource + Send + Sync> =
        Arc::new(ProfileSourcePostgres::new(Arc::clone(&db_arc)));
    let password_hasher: Arc<dyn PasswordHasher + Send + Sync> =
        Arc::new(Argon2Hasher::from_env());
    let visitor_tracker: Arc<dyn VisitorTracker + Send + Sync> =
        Arc::new(RedisVisitorTracker::new(Arc::clone(&redis_arc)));

    let email_sender: Arc<dyn EmailSender + Send + Sync> = Arc::new(smtp_sender(&from_email)?);
    let contact_notifier: Arc<dyn ContactNotifier + Send + Sync> =
        Arc::new(ContactEmailService::new(email_sender));

    let cdn_config = CdnConfig::from_env()?;
    info!(cloud = %cdn_config.cloud_name, "CDN configured");
    let cdn_storage = CdnAssetStorage::new(cdn_config)?;
    let upload_policy = UploadPolicy::from_env();
    let upload_limit = upload_policy.max_request_bytes();

    let jwt_service = JwtTokenService::new(JwtConfig::from_env()?);
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));

    // Use cases
    let template = TemplateUseCases {
        create: Arc::new(CreateTemplateService::new(template_repo.clone())),
        patch: Arc::new(PatchTemplateService::new(template_repo.clone())),
        delete: Arc::new(DeleteTemplateService::new(template_repo)),
        get: Arc::new(GetTemplateService::new(template_query.clone())),
        list: Arc::new(ListTemplatesService::new(template_query)),
    };

    let portfolio = PortfolioUseCases {
        create: Arc::new(CreatePortfolioService::new(
            portfolio_repo.clone(),
            Arc::clone(&template_query_arc),
            Arc::clone(&profile_source),
        )),
        get: Arc::new(GetPortfolioService::new(portfolio_query.clone())),
        list: Arc::new(ListPortfoliosService::new(portfolio_query.clone())),
        customize: Arc::new(CustomizePortfolioService::new(
            portfolio_query.clone(),
            portfolio_repo.clone(),
            Arc::clone(&template_query_arc),
            Arc::clone(&password_hasher),
        )),
        edit_sections: Arc::new(EditSectionsService::new(
            portfolio_query.clone(),
            portfolio_repo.clone(),
            Arc::clone(&template_query_arc),
        )),
        publish: Arc::new(PublishPortfolioService::new(
            portfolio_query.clone(),
            portfolio_repo.clone(),
            Arc::clone(&template_query_arc),
            Arc::clone(&profile_source),
        )),
        unpublish: Arc::new(UnpublishPortfolioService::new(
            portfolio_query.clone(),
            portfolio_repo.clone(),
        )),
        duplicate: Arc::new(DuplicatePortfolioService::new(
            portfolio_query.clone(),
            portfolio_repo.clone(),
        )),
        delete: Arc::new(DeletePortfolioService::new(
            portfolio_query.clone(),
            portfolio_repo.clone(),
        )),
        render: Arc::new(RenderPortfolioService::new(
            portfolio_query.clone(),
            Arc::clone(&template_query_arc),
        )),
        get_public: Arc::new(GetPublicPortfolioService::new(
            portfolio_query.clone(),
            portfolio_repo.clone(),
            Arc::clone(&template_query_arc),
            password_hasher,
            visitor_tracker,
        )),
        record_share: Arc::new(RecordShareService::new(
            portfolio_query.clone(),
            portfolio_repo.clone(),
        )),
        submit_contact: Arc::new(SubmitContactService::new(
            portfolio_query,
            portfolio_repo,
            profile_source,
            contact_notifier,
        )),
    };

    let media = MediaUseCases {
        upload: Arc::new(UploadImagesService::new(
            cdn_storage.clone(),
            upload_policy.clone(),
        )),
        delete: Arc::new(DeleteImageService::new(cdn_storage, upload_policy)),
    };

    let state = AppState {
        template,
        portfolio,
        media,
        user_identity_resolver: UserIdentityResolver::new(Arc::new(user_query)),
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let openapi = ApiDoc::openapi();

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .app_data(custom_json_config())
            .configure(|cfg| init_routes(cfg, upload_limit))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {server_url}"))?
    .run()
    .await
    .context("Server error")
}

/// `upload_limit` caps JSON bodies on the media scope only; everything else
/// keeps the default limit.
fn init_routes(cfg: &mut web::ServiceConfig, upload_limit: usize) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Templates
    cfg.service(crate::modules::template::adapter::incoming::web::routes::list_templates_handler);
    cfg.service(crate::modules::template::adapter::incoming::web::routes::get_template_handler);
    cfg.service(
        crate::modules::template::adapter::incoming::web::routes::admin_list_templates_handler,
    );
    cfg.service(crate::modules::template::adapter::incoming::web::routes::admin_get_template_handler);
    cfg.service(crate::modules::template::adapter::incoming::web::routes::create_template_handler);
    cfg.service(crate::modules::template::adapter::incoming::web::routes::patch_template_handler);
    cfg.service(crate::modules::template::adapter::incoming::web::routes::delete_template_handler);
    // Portfolios
    cfg.service(crate::modules::portfolio::adapter::incoming::web::routes::create_portfolio_handler);
    cfg.service(crate::modules::portfolio::adapter::incoming::web::routes::list_portfolios_handler);
    cfg.service(crate::modules::portfolio::adapter::incoming::web::routes::render_portfolio_handler);
    cfg.service(crate::modules::portfolio::adapter::incoming::web::routes::get_portfolio_handler);
    cfg.service(
        crate::modules::portfolio::adapter::incoming::web::routes::customize_portfolio_handler,
    );
    cfg.service(crate::modules::portfolio::adapter::incoming::web::routes::edit_section_handler);
    cfg.service(crate::modules::portfolio::adapter::incoming::web::routes::publish_portfolio_handler);
    cfg.service(
        crate::modules::portfolio::adapter::incoming::web::routes::unpublish_portfolio_handler,
    );
    cfg.service(
        crate::modules::portfolio::adapter::incoming::web::routes::duplicate_portfolio_handler,
    );
    cfg.service(crate::modules::portfolio::adapter::incoming::web::routes::delete_portfolio_handler);
    // Public portfolio pages
    cfg.service(
        crate::modules::portfolio::adapter::incoming::web::routes::get_public_portfolio_handler,
    );
    cfg.service(crate::modules::portfolio::adapter::incoming::web::routes::record_share_handler);
    cfg.service(crate::modules::portfolio::adapter::incoming::web::routes::submit_contact_handler);
    // Media
    cfg.service(
        web::scope("/api/media")
            .app_data(json_config_with_limit(upload_limit))
            .service(crate::modules::media::adapter::incoming::web::routes::upload_images_handler)
            .service(crate::modules::media::adapter::incoming::web::routes::delete_image_handler),
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
