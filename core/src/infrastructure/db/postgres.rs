use sea_orm::{DatabaseConnection, SqlxPostgresConnector};
use sqlx::postgres::PgPoolOptions;
use tracing::info;

pub struct PostgresConfig {
    pub database_url: String,
}

/// Connection handle shared by every repository. Runs the embedded
/// migrations on startup before handing out connections.
pub struct Postgres {
    db: DatabaseConnection,
}

impl Postgres {
    pub async fn new(config: PostgresConfig) -> Result<Self, anyhow::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(&config.database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("Database migrations applied");

        let db = SqlxPostgresConnector::from_sqlx_postgres_pool(pool);
        Ok(Self { db })
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }
}
