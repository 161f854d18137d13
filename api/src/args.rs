use aadhar_homes_core::domain::common::{AadharHomesConfig, AuthConfig, DatabaseConfig};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "aadhar-homes-api", version, about = "Aadhar Homes listings API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub auth: AuthArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "port", env = "PORT", default_value_t = 5000)]
    pub port: u16,

    #[arg(long = "root-path", env = "SERVER_ROOT_PATH", default_value = "/api")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(long = "db-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(long = "db-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "db-user", env = "DATABASE_USER", default_value = "postgres")]
    pub username: String,

    #[arg(long = "db-password", env = "DATABASE_PASSWORD", default_value = "postgres")]
    pub password: String,

    #[arg(long = "db-name", env = "DATABASE_NAME", default_value = "aadhar_homes")]
    pub name: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct AuthArgs {
    #[arg(long = "jwt-secret", env = "JWT_SECRET")]
    pub jwt_secret: String,

    /// Token lifetime in seconds; defaults to 30 days.
    #[arg(long = "jwt-expires-in", env = "JWT_EXPIRES_IN", default_value_t = 2_592_000)]
    pub token_ttl_secs: i64,
}

impl From<Args> for AadharHomesConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                host: args.database.host,
                port: args.database.port,
                username: args.database.username,
                password: args.database.password,
                name: args.database.name,
            },
            auth: AuthConfig {
                jwt_secret: args.auth.jwt_secret,
                token_ttl_secs: args.auth.token_ttl_secs,
            },
        }
    }
}
