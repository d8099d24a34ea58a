#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use taskdeck::libs::config::Config;
    use taskdeck::libs::highlight::MAX_SOON_DAYS;
    use taskdeck::libs::query::StatusFilter;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            ConfigTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_gives_defaults(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.temp_dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.soon_days, 3);
        assert_eq!(config.default_status, StatusFilter::Active);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_back(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join("config.json");
        let config = Config {
            database: Some(PathBuf::from("/srv/tasks/tasks.db")),
            soon_days: 5,
            default_status: StatusFilter::All,
        };

        config.save_to(&path).unwrap();

        assert_eq!(Config::read_from(&path).unwrap(), config);
        assert_eq!(config.database_path().unwrap(), PathBuf::from("/srv/tasks/tasks.db"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_file_fills_defaults(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join("config.json");
        fs::write(&path, r#"{"default_status": "done"}"#).unwrap();

        let config = Config::read_from(&path).unwrap();
        assert_eq!(config.default_status, StatusFilter::Done);
        assert_eq!(config.soon_days, 3);
        assert_eq!(config.database, None);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_file_is_an_error(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = Config::read_from(&path).unwrap_err();
        assert!(err.to_string().contains("config.json"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_out_of_range_soon_days_is_rejected(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join("config.json");

        fs::write(&path, r#"{ "soon_days": 1000000000 }"#).unwrap();
        let err = Config::read_from(&path).unwrap_err();
        assert!(err.to_string().contains("soon_days"));

        fs::write(&path, r#"{ "soon_days": -1 }"#).unwrap();
        assert!(Config::read_from(&path).is_err());

        fs::write(&path, format!(r#"{{ "soon_days": {} }}"#, MAX_SOON_DAYS)).unwrap();
        assert_eq!(Config::read_from(&path).unwrap().soon_days, MAX_SOON_DAYS);
    }
}
