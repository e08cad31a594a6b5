//! Example wiring the full client stack: config, token store, session,
//! interceptor and the typed APIs
//!
//! Run with: cargo run --example auth_flow_demo
//!
//! Expects a reachable backend; set API_BASE_URL (and optionally
//! COURSELANE_EMAIL / COURSELANE_PASSWORD) in the environment or a .env file.

use std::sync::Arc;

use cl_client::{ApiClient, AuthenticationApi, CourseApi};
use cl_core::domain::value_objects::auth::SignInPayload;
use cl_core::domain::value_objects::course::CourseQuery;
use cl_core::session::AuthSession;
use cl_core::stores::token::MemoryTokenStore;
use cl_shared::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = ApiConfig::from_env();
    println!("Using API at {}", config.joined_base_url());

    // Composition root: one token store shared by the session and the client
    let token_store = Arc::new(MemoryTokenStore::new());
    let session = Arc::new(AuthSession::new(token_store.clone()));
    session.initialize().await;

    let client = Arc::new(ApiClient::from_config(
        &config,
        token_store,
        session.clone(),
    )?);
    let auth = AuthenticationApi::new(client.clone());
    let courses = CourseApi::new(client.clone());

    let email = std::env::var("COURSELANE_EMAIL").unwrap_or_default();
    let password = std::env::var("COURSELANE_PASSWORD").unwrap_or_default();
    if !email.is_empty() {
        let response = auth
            .sign_in(&SignInPayload { email, password })
            .await?;
        session.set_token(&response.access_token).await?;
        println!("Signed in, session authenticated: {}", session.is_authenticated().await);
    } else {
        println!("No credentials configured, browsing anonymously");
    }

    let listing = courses.available_courses(&CourseQuery::default()).await?;
    println!(
        "Page {}/{}: {} course(s)",
        listing.meta.page,
        listing.meta.pages,
        listing.available_courses.len()
    );
    for course in &listing.available_courses {
        println!("  [{:.1}] {} - {}", course.rating, course.title, course.price);
    }

    Ok(())
}
