#[cfg(test)]
mod tests {
    use taskdeck::db::db::Db;
    use taskdeck::db::migrations::{get_db_version, init_with_migrations, needs_migration, MigrationManager};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct MigrationTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            MigrationTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl MigrationTestContext {
        fn db_path(&self) -> std::path::PathBuf {
            self.temp_dir.path().join("tasks.db")
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migrations_run_on_open(ctx: &mut MigrationTestContext) {
        let db = Db::open(ctx.db_path()).unwrap();

        assert_eq!(get_db_version(&db.conn).unwrap(), MigrationManager::new().latest_version());
        assert!(!needs_migration(&db.conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_fresh_database_needs_migration(ctx: &mut MigrationTestContext) {
        let conn = Db::open_without_migrations(ctx.db_path()).unwrap();

        assert_eq!(get_db_version(&conn).unwrap(), 0);
        assert!(needs_migration(&conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migrations_are_idempotent(ctx: &mut MigrationTestContext) {
        let mut conn = Db::open_without_migrations(ctx.db_path()).unwrap();
        init_with_migrations(&mut conn).unwrap();
        init_with_migrations(&mut conn).unwrap();

        let history = MigrationManager::new().get_migration_history(&conn).unwrap();
        assert_eq!(history.len(), 1);

        drop(conn);
        Db::open(ctx.db_path()).unwrap();
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_history(ctx: &mut MigrationTestContext) {
        let mut conn = Db::open_without_migrations(ctx.db_path()).unwrap();
        let manager = MigrationManager::new();
        manager.run_migrations(&mut conn).unwrap();

        let history = manager.get_migration_history(&conn).unwrap();
        assert!(!history.is_empty());
        for (i, (version, name, applied_at)) in history.iter().enumerate() {
            assert_eq!(*version as usize, i + 1);
            assert!(!name.is_empty());
            assert!(!applied_at.is_empty());
        }
        assert_eq!(history[0].1, "create_tasks");
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_schema_rejects_unknown_priority(ctx: &mut MigrationTestContext) {
        let db = Db::open(ctx.db_path()).unwrap();

        let result = db.conn.execute(
            "INSERT INTO tasks (title, priority, created_at, updated_at) VALUES ('x', 'Urgent', '', '')",
            [],
        );
        assert!(result.is_err());
    }
}
