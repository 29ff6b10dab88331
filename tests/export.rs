#[cfg(test)]
mod tests {
    use roster::db::{db::Db, students::Students};
    use roster::libs::export::{ExportFormat, Exporter};
    use roster::libs::student::Student;
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
        students: Vec<Student>,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let mut db = Db::in_memory();
            let mut repo = Students::new(&mut db);
            assert!(repo.add(&Student::new("S2", "Bob, Jr.", "bob@x.com", "0987654321", "Math", 72.0)));
            assert!(repo.add(&Student::new("S1", "Ann", "ann@x.com", "1234567890", "CS", 88.5)));
            let students = repo.list();

            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
                students,
            }
        }
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_csv_export(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("students.csv");
        Exporter::new(ExportFormat::Csv, Some(path.clone())).export(&ctx.students).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(&headers[0], "Roll Number");
        assert_eq!(&headers[5], "Marks");

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "S1");
        assert_eq!(&rows[0][5], "88.5");
        assert_eq!(&rows[1][1], "Bob, Jr.");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_json_export(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("students.json");
        Exporter::new(ExportFormat::Json, Some(path.clone())).export(&ctx.students).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let exported: Vec<Student> = serde_json::from_str(&raw).unwrap();
        assert_eq!(exported, ctx.students);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_empty_roster_exports_header_only(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("empty.csv");
        Exporter::new(ExportFormat::Csv, Some(path.clone())).export(&[]).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert_eq!(raw.lines().count(), 1);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_csv_and_json_keep_exact_marks(ctx: &mut ExportTestContext) {
        let students = vec![Student::new("S1", "Ann", "ann@x.com", "1234567890", "CS", 88.25)];
        let csv_path = ctx.temp_dir.path().join("precise.csv");
        let json_path = ctx.temp_dir.path().join("precise.json");
        Exporter::new(ExportFormat::Csv, Some(csv_path.clone())).export(&students).unwrap();
        Exporter::new(ExportFormat::Json, Some(json_path.clone())).export(&students).unwrap();

        let mut reader = csv::Reader::from_path(&csv_path).unwrap();
        let row = reader.records().next().unwrap().unwrap();
        assert_eq!(&row[5], "88.25");
        assert_eq!(row[5].parse::<f64>().unwrap(), 88.25);

        let exported: Vec<Student> = serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(exported[0].score, 88.25);
    }
}
