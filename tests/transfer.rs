#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use std::fs;
    use taskdeck::db::tasks::Tasks;
    use taskdeck::libs::query::{StatusFilter, TaskQuery};
    use taskdeck::libs::task::{NewTask, Priority, Task};
    use taskdeck::libs::transfer::{export_csv, import_csv, ImportSummary};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TransferTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for TransferTestContext {
        fn setup() -> Self {
            TransferTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl TransferTestContext {
        fn store(&self, name: &str) -> Tasks {
            Tasks::open(self.temp_dir.path().join(name)).unwrap()
        }
    }

    fn content(task: &Task) -> (String, Option<String>, Option<String>, Priority, Option<NaiveDate>) {
        (
            task.title.clone(),
            task.details.clone(),
            task.category.clone(),
            task.priority,
            task.due_date,
        )
    }

    fn all() -> TaskQuery {
        TaskQuery::new().status(StatusFilter::All)
    }

    #[test_context(TransferTestContext)]
    #[test]
    fn test_export_then_import_keeps_task_content(ctx: &mut TransferTestContext) {
        let mut source = ctx.store("source.db");
        source
            .create_many(&[
                NewTask::new("Plain"),
                NewTask::new("Quoted \"title\", with comma")
                    .details("line one\nline two")
                    .category("misc")
                    .priority(Priority::Low),
                NewTask::new("Deadline")
                    .category("work")
                    .priority(Priority::High)
                    .due_date(NaiveDate::from_ymd_opt(2025, 12, 31)),
            ])
            .unwrap();
        let exported = source.fetch(&all()).unwrap();

        let csv_path = ctx.temp_dir.path().join("tasks.csv");
        export_csv(&csv_path, &exported).unwrap();

        let mut target = ctx.store("target.db");
        target.create(&NewTask::new("Already here")).unwrap();
        let summary = import_csv(&mut target, &csv_path).unwrap();
        assert_eq!(summary, ImportSummary { imported: 3, skipped: 0 });

        let imported = target.fetch(&all()).unwrap();
        assert_eq!(imported.len(), 4);
        assert_eq!(
            imported[1..].iter().map(content).collect::<Vec<_>>(),
            exported.iter().map(content).collect::<Vec<_>>()
        );
        let order: Vec<i64> = imported.iter().map(|t| t.order_index).collect();
        assert_eq!(order, vec![1, 2, 3, 4]);
    }

    #[test_context(TransferTestContext)]
    #[test]
    fn test_export_header(ctx: &mut TransferTestContext) {
        let csv_path = ctx.temp_dir.path().join("empty.csv");
        export_csv(&csv_path, &[]).unwrap();

        let written = fs::read_to_string(&csv_path).unwrap();
        assert_eq!(
            written.lines().next(),
            Some("id,title,details,category,priority,due_date,is_done,created_at,updated_at,order_index")
        );
    }

    #[test_context(TransferTestContext)]
    #[test]
    fn test_import_coerces_bad_values(ctx: &mut TransferTestContext) {
        let csv_path = ctx.temp_dir.path().join("messy.csv");
        fs::write(
            &csv_path,
            "title,priority,due_date,is_done\n\
             Keep me,urgent,31/12/2025,1\n\
             ,High,2025-01-01,0\n\
             Also keep,low,2025-02-30,0\n",
        )
        .unwrap();

        let mut tasks = ctx.store("tasks.db");
        let summary = import_csv(&mut tasks, &csv_path).unwrap();
        assert_eq!(summary, ImportSummary { imported: 2, skipped: 1 });

        let imported = tasks.fetch(&all()).unwrap();
        assert_eq!(imported[0].title, "Keep me");
        assert_eq!(imported[0].priority, Priority::Medium);
        assert_eq!(imported[0].due_date, None);
        assert!(!imported[0].is_done);
        assert_eq!(imported[1].title, "Also keep");
        assert_eq!(imported[1].priority, Priority::Low);
        assert_eq!(imported[1].due_date, None);
    }

    #[test_context(TransferTestContext)]
    #[test]
    fn test_import_missing_file_writes_nothing(ctx: &mut TransferTestContext) {
        let mut tasks = ctx.store("tasks.db");
        tasks.create(&NewTask::new("Existing")).unwrap();

        let result = import_csv(&mut tasks, &ctx.temp_dir.path().join("nope.csv"));

        assert!(result.is_err());
        assert_eq!(tasks.fetch(&all()).unwrap().len(), 1);
    }
}
