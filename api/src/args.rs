use ayurveda_core::domain::common::{AyurvedaConfig, CatalogConfig};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "ayurveda-api", version, about = "Ayurveda food scanner API")]
pub struct Args {
    #[arg(long, env = "ENV", default_value = "development")]
    pub env: String,

    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Prefix for every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "/api")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// Used when RUST_LOG is not set.
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct CatalogArgs {
    #[arg(
        long = "catalog-seed",
        env = "CATALOG_SEED",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub seed: bool,

    /// JSON file with extra foods merged into the catalog at startup.
    #[arg(long = "catalog-file", env = "CATALOG_FILE")]
    pub file: Option<String>,
}

#[cfg(test)]
impl Default for Args {
    fn default() -> Self {
        Self {
            env: "test".to_string(),
            server: ServerArgs {
                host: "127.0.0.1".to_string(),
                port: 0,
                root_path: "/api".to_string(),
                allowed_origins: vec!["http://localhost:5173".to_string()],
            },
            log: LogArgs {
                filter: "info".to_string(),
                json: false,
            },
            catalog: CatalogArgs {
                seed: true,
                file: None,
            },
        }
    }
}

impl From<Args> for AyurvedaConfig {
    fn from(args: Args) -> Self {
        AyurvedaConfig {
            catalog: CatalogConfig {
                seed: args.catalog.seed,
                file: args.catalog.file,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_allowed_origins() {
        let args = Args::parse_from([
            "ayurveda-api",
            "--allowed-origins",
            "http://a.test,http://b.test",
            "--catalog-seed",
            "false",
        ]);

        assert_eq!(
            args.server.allowed_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
        assert!(!args.catalog.seed);
    }

    #[test]
    fn test_args_into_config() {
        let mut args = Args::default();
        args.catalog.file = Some("foods.json".to_string());

        let config = AyurvedaConfig::from(args);

        assert!(config.catalog.seed);
        assert_eq!(config.catalog.file.as_deref(), Some("foods.json"));
    }
}
