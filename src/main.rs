use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use chrono::Duration;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use notes_server::auth::password::CredentialHasher;
use notes_server::auth::token::TokenService;
use notes_server::config::Config;
use notes_server::routes;
use notes_server::spellcheck::SpellChecker;
use notes_server::store::postgres::PgStore;
use notes_server::store::{CredentialStore, NewUser, StoreError};
use notes_server::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::auth::login_for_access_token,
        routes::auth::current_user_info,
        routes::notes::create_note,
        routes::notes::list_notes,
        routes::notes::get_note,
        routes::notes::update_note,
        routes::notes::delete_note,
    ),
    components(schemas(
        notes_server::models::user::LoginForm,
        notes_server::models::user::TokenResponse,
        notes_server::models::user::UserOut,
        notes_server::models::note::NoteForm,
        notes_server::models::note::NoteRead,
        notes_server::error::ErrorBody,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Token issuance & identity"),
        (name = "Notes", description = "Personal notes CRUD with optional spell-checking")
    ),
    security(("bearer" = []))
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            utoipa::openapi::security::SecurityScheme::Http(
                utoipa::openapi::security::Http::new(
                    utoipa::openapi::security::HttpAuthScheme::Bearer,
                ),
            ),
        );
    }
}

/// Seed the fixed development accounts if they are not present yet.
async fn seed_users(
    store: &dyn CredentialStore,
    hasher: &CredentialHasher,
) -> Result<(), StoreError> {
    let defaults = [
        ("user1", "password1"),
        ("user2", "password2"),
        ("admin", "admin123"),
    ];
    for (username, password) in defaults {
        if store.get_by_username(username).await?.is_none() {
            let password_hash = hasher.hash(password).expect("Failed to hash seed password");
            store
                .insert(NewUser {
                    username: username.to_string(),
                    email: None,
                    password_hash,
                })
                .await?;
            tracing::info!("seeded user {username}");
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("notes_server=debug,tower_http=debug")
        .init();

    let config = Config::from_env();

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!("./src/db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    let store = Arc::new(PgStore::new(pool));
    let hasher = CredentialHasher::new();
    seed_users(store.as_ref(), &hasher)
        .await
        .expect("Failed to seed users");

    let cors = if config.cors_origins == "*" {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers(tower_http::cors::Any)
            .allow_credentials(true)
    };

    let state = AppState {
        users: store.clone(),
        notes: store,
        tokens: TokenService::new(
            &config.jwt_secret,
            Duration::minutes(config.token_ttl_minutes),
        ),
        hasher,
        speller: SpellChecker::new(&config.speller_url),
    };

    let app = routes::api_router(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .expect("Failed to bind listen address");
    tracing::info!("Listening on {}", config.listen_addr);
    tracing::info!("Swagger UI at http://{}/docs/", config.listen_addr);
    axum::serve(listener, app).await.expect("Server error");
}
