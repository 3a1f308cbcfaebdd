use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{config::Config, error::Error};

/// Connect to the database and run migrations
///
/// The returned connection is the single process-wide handle to the store; it is
/// placed in [`crate::server::model::app::AppState`] and dropped on shutdown.
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Connected to database and applied migrations");

    Ok(db)
}
