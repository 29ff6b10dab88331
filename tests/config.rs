#[cfg(test)]
mod tests {
    use roster::db::db::Db;
    use roster::libs::config::{Config, DatabaseConfig, DbTarget, DB_FILE_NAME, DB_PATH_ENV};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl ConfigTestContext {
        fn config_path(&self) -> PathBuf {
            self.temp_dir.path().join("config.json")
        }
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            ConfigTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test]
    fn test_database_defaults() {
        let database = DatabaseConfig::default();
        assert_eq!(database.path, DB_FILE_NAME);
        assert!(database.check_liveness);
        assert!(Config::default().database.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_reads_as_default(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.config_path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_round_trip(ctx: &mut ConfigTestContext) {
        let config = Config {
            database: Some(DatabaseConfig {
                path: "/var/lib/roster/students.db".to_string(),
                check_liveness: false,
            }),
        };
        config.save_to(&ctx.config_path()).unwrap();

        let loaded = Config::read_from(&ctx.config_path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_check_liveness_defaults_on(ctx: &mut ConfigTestContext) {
        fs::write(ctx.config_path(), r#"{ "database": { "path": ":memory:" } }"#).unwrap();

        let config = Config::read_from(&ctx.config_path()).unwrap();
        let database = config.database.unwrap();
        assert_eq!(database.path, ":memory:");
        assert!(database.check_liveness);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_empty_config_omits_database(ctx: &mut ConfigTestContext) {
        Config::default().save_to(&ctx.config_path()).unwrap();
        let raw = fs::read_to_string(ctx.config_path()).unwrap();
        assert!(!raw.contains("database"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_config_is_an_error(ctx: &mut ConfigTestContext) {
        fs::write(ctx.config_path(), "{ not json").unwrap();
        assert!(Config::read_from(&ctx.config_path()).is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_target_resolution(ctx: &mut ConfigTestContext) {
        let memory = DatabaseConfig {
            path: ":memory:".to_string(),
            check_liveness: true,
        };
        assert_eq!(memory.target().unwrap(), DbTarget::InMemory);

        let file = ctx.temp_dir.path().join("students.db");
        let absolute = DatabaseConfig {
            path: file.to_string_lossy().to_string(),
            check_liveness: true,
        };
        assert_eq!(absolute.target().unwrap(), DbTarget::File(file.clone()));

        let mut db = Db::from_config(&absolute).unwrap();
        assert!(db.test_connection());
        assert!(file.exists());
    }

    #[test]
    fn test_env_overrides_path() {
        std::env::set_var(DB_PATH_ENV, ":memory:");
        let config = Config {
            database: Some(DatabaseConfig {
                path: "/somewhere/else.db".to_string(),
                check_liveness: false,
            }),
        };
        let database = config.database_config();
        std::env::remove_var(DB_PATH_ENV);

        assert_eq!(database.path, ":memory:");
        assert!(!database.check_liveness);
    }
}
