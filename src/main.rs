use chrono::Local;
use dotenvy::dotenv;
use orgdesk::{
    app::AdminConsole,
    config::{
        app::load_default_config,
        database::{create_connection, create_tables, ensure_sqlite_dir, get_database_url},
        users::configured_accounts,
    },
    core::{dashboard::format_dashboard_summary, groups::seed_groups, store::CollectionStore},
    errors::{Error, Result},
    identity::{LocalIdentityProvider, hash_password},
    storage::DatabaseStorage,
};
use std::env;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // `orgdesk hash-password <password>` prints a hash for config.toml and exits
    let args: Vec<String> = env::args().skip(1).collect();
    if args.first().map(String::as_str) == Some("hash-password") {
        let password = args.get(1).ok_or_else(|| Error::Config {
            message: "usage: orgdesk hash-password <password>".to_string(),
        })?;
        println!("{}", hash_password(password)?);
        return Ok(());
    }

    // 3. Load the application configuration
    let app_config = load_default_config()
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;

    // 4. Initialize database
    let database_url = get_database_url();
    ensure_sqlite_dir(&database_url)?;
    let db = create_connection(&database_url)
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    create_tables(&db)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to create tables: {}", e))?;

    // 5. Seed groups on first run
    let store = CollectionStore::new(
        DatabaseStorage::new(db),
        app_config.storage.namespace.clone(),
    );
    seed_groups(&store, &app_config.groups)
        .await
        .inspect_err(|e| error!("Failed to seed groups: {}", e))?;

    // 6. Build the identity provider
    let identity = LocalIdentityProvider::new(configured_accounts(&app_config));
    if identity.account_count() == 0 {
        warn!("No accounts configured; nobody can sign in.");
    }
    let mut console = AdminConsole::new(store, identity);

    // 7. Sign in and print the dashboard
    let (Ok(email), Ok(password)) = (env::var("ORGDESK_EMAIL"), env::var("ORGDESK_PASSWORD"))
    else {
        info!("Set ORGDESK_EMAIL and ORGDESK_PASSWORD to sign in and print the dashboard.");
        return Ok(());
    };
    console
        .sign_in(&email, &password)
        .await
        .inspect_err(|e| error!("Sign-in failed: {}", e))?;

    let snapshot = console.dashboard(Local::now().date_naive()).await?;
    println!("{}", format_dashboard_summary(&snapshot));

    console.sign_out().await?;
    Ok(())
}
