//! Server settings loaded via OrthoConfig.
//!
//! Values come from `--flag` arguments, `USERS_API_*` environment variables,
//! and configuration files, in OrthoConfig's usual precedence.

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_RUN_MIGRATIONS: bool = true;

/// Settings controlling where the server listens and which store it uses.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USERS_API")]
pub struct ServerSettings {
    /// Socket address to bind, e.g. `127.0.0.1:8080`.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection URL. Without one, users live in memory.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Apply pending migrations before serving.
    pub run_migrations: Option<bool>,
}

impl ServerSettings {
    /// Address to bind, falling back to all interfaces on port 8080.
    #[must_use]
    pub fn bind_addr(&self) -> &str {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Pool size, falling back to the default.
    #[must_use]
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections.unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }

    /// Whether to migrate before serving; on unless explicitly disabled.
    #[must_use]
    pub fn run_migrations(&self) -> bool {
        self.run_migrations.unwrap_or(DEFAULT_RUN_MIGRATIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 4] = [
        "USERS_API_BIND_ADDR",
        "USERS_API_DATABASE_URL",
        "USERS_API_DB_MAX_CONNECTIONS",
        "USERS_API_RUN_MIGRATIONS",
    ];

    fn load(args: &[&str]) -> ServerSettings {
        let argv = std::iter::once(OsString::from("users-backend"))
            .chain(args.iter().map(OsString::from));
        ServerSettings::load_from_iter(argv).expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_nothing_is_set() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load(&[]);

        assert_eq!(settings.bind_addr(), DEFAULT_BIND_ADDR);
        assert!(settings.database_url.is_none());
        assert_eq!(settings.db_max_connections(), DEFAULT_DB_MAX_CONNECTIONS);
        assert_eq!(settings.run_migrations, None);
        assert!(settings.run_migrations());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("USERS_API_BIND_ADDR", Some("127.0.0.1:9000".to_owned())),
            (
                "USERS_API_DATABASE_URL",
                Some("postgres://localhost/users".to_owned()),
            ),
            ("USERS_API_DB_MAX_CONNECTIONS", Some("4".to_owned())),
            ("USERS_API_RUN_MIGRATIONS", Some("false".to_owned())),
        ]);

        let settings = load(&[]);

        assert_eq!(settings.bind_addr(), "127.0.0.1:9000");
        assert_eq!(
            settings.database_url.as_deref(),
            Some("postgres://localhost/users")
        );
        assert_eq!(settings.db_max_connections(), 4);
        assert!(!settings.run_migrations());
    }

    #[rstest]
    fn cli_arguments_override_environment() {
        let _guard = lock_env([
            ("USERS_API_BIND_ADDR", Some("127.0.0.1:9000".to_owned())),
            ("USERS_API_DATABASE_URL", None),
            ("USERS_API_DB_MAX_CONNECTIONS", None),
            ("USERS_API_RUN_MIGRATIONS", None),
        ]);

        let settings = load(&["--bind-addr", "127.0.0.1:7000"]);

        assert_eq!(settings.bind_addr(), "127.0.0.1:7000");
    }
}
