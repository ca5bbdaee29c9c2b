use rand::Rng;
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;
use tracing::{info, warn};

use crate::{
    config::Config,
    data::user::{CreateUserParam, UserRepository},
    error::AppError,
    service::auth,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is
/// up-to-date before the application touches it.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect or migrate
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer backed by the same Sqlite database.
///
/// Sessions expire after a week of inactivity.
///
/// # Returns
/// - `Ok(layer)` - Session layer ready to attach to the router
/// - `Err(AppError)` - Session table migration failed
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool().clone();

    let store = SqliteStore::new(pool);
    store
        .migrate()
        .await
        .map_err(|err| AppError::InternalError(format!("session store migration failed: {}", err)))?;

    let layer = SessionManagerLayer::new(store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(layer)
}

/// Seeds the bootstrap admin account when the database has none.
///
/// Uses `ADMIN_EMAIL`/`ADMIN_PASSWORD` from configuration; with either one
/// missing the check only logs a warning, so a fresh deployment without
/// credentials still starts.
pub async fn check_for_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let user_repo = UserRepository::new(db);

    if user_repo.admin_exists().await? {
        return Ok(());
    }

    let (Some(email), Some(password)) = (&config.admin_email, &config.admin_password) else {
        warn!("no admin account exists and ADMIN_EMAIL/ADMIN_PASSWORD are not set");
        return Ok(());
    };

    let password_hash = auth::hash_password(password)?;
    let public_id: i64 = rand::rng().random_range(10_000_000..100_000_000);

    let admin = user_repo
        .create(CreateUserParam {
            public_id,
            external_id: format!("admin-{}", public_id),
            email: email.clone(),
            password_hash,
            name: "Administrator".to_string(),
            role: "admin".to_string(),
        })
        .await?;

    info!("seeded bootstrap admin account {} ({})", admin.id, email);

    Ok(())
}
