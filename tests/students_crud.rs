#[cfg(test)]
mod tests {
    use roster::db::{db::Db, students::Students};
    use roster::libs::config::DbTarget;
    use roster::libs::student::Student;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StudentsTestContext {
        _temp_dir: TempDir,
        db: Db,
    }

    impl TestContext for StudentsTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(DbTarget::File(temp_dir.path().join("students.db")), true);
            StudentsTestContext { _temp_dir: temp_dir, db }
        }
    }

    fn ann() -> Student {
        Student::new("S1", "Ann", "ann@x.com", "1234567890", "CS", 88.5)
    }

    #[test_context(StudentsTestContext)]
    #[test]
    fn test_student_lifecycle(ctx: &mut StudentsTestContext) {
        let mut students = Students::new(&mut ctx.db);

        assert!(students.add(&ann()));
        let all = students.list();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, "S1");
        assert_eq!(all[0].score, 88.5);

        // Duplicate id
        assert!(!students.add(&ann()));
        assert_eq!(students.count(), 1);

        let mut updated = ann();
        updated.score = 91.0;
        assert!(students.update(&updated));
        assert_eq!(students.list()[0].score, 91.0);

        assert!(students.delete("S1"));
        assert!(students.list().is_empty());
    }

    #[test_context(StudentsTestContext)]
    #[test]
    fn test_duplicate_add_keeps_stored_record(ctx: &mut StudentsTestContext) {
        let mut students = Students::new(&mut ctx.db);
        assert!(students.add(&ann()));

        let impostor = Student::new("S1", "Bob", "bob@x.com", "0987654321", "Math", 10.0);
        assert!(!students.add(&impostor));

        let stored = students.get("S1").unwrap();
        assert_eq!(stored.name, "Ann");
        assert_eq!(stored.course, "CS");
    }

    #[test_context(StudentsTestContext)]
    #[test]
    fn test_get_preserves_all_fields(ctx: &mut StudentsTestContext) {
        let mut students = Students::new(&mut ctx.db);
        let student = Student::builder()
            .id("S42")
            .name("Grace Hopper")
            .email("grace.hopper@navy.mil")
            .phone("5551234567")
            .course("Compilers")
            .score(100.0)
            .build();
        assert!(students.add(&student));

        let stored = students.get("S42").unwrap();
        assert_eq!(stored.id, student.id);
        assert_eq!(stored.name, student.name);
        assert_eq!(stored.email, student.email);
        assert_eq!(stored.phone, student.phone);
        assert_eq!(stored.course, student.course);
        assert_eq!(stored.score, student.score);
        assert!(stored.created_at.is_some());
        assert!(stored.updated_at.is_some());
        assert!(students.exists("S42"));
        assert!(students.get("S43").is_none());
    }

    #[test_context(StudentsTestContext)]
    #[test]
    fn test_missing_id_changes_nothing(ctx: &mut StudentsTestContext) {
        let mut students = Students::new(&mut ctx.db);
        assert!(students.add(&ann()));

        let ghost = Student::new("S9", "Ghost", "ghost@x.com", "1111111111", "CS", 50.0);
        assert!(!students.update(&ghost));
        assert!(!students.delete("S9"));

        let all = students.list();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], students.get("S1").unwrap());
        assert_eq!(all[0].score, 88.5);
    }

    #[test_context(StudentsTestContext)]
    #[test]
    fn test_invalid_records_never_reach_storage(ctx: &mut StudentsTestContext) {
        let mut students = Students::new(&mut ctx.db);

        let bad_email = Student { email: "ann.x.com".to_string(), ..ann() };
        let bad_phone = Student { phone: "12345".to_string(), ..ann() };
        let too_high = Student { score: 100.5, ..ann() };
        let negative = Student { score: -1.0, ..ann() };
        let blank_name = Student { name: "  ".to_string(), ..ann() };

        for student in [&bad_email, &bad_phone, &too_high, &negative, &blank_name] {
            assert!(!students.add(student));
        }
        assert_eq!(students.count(), 0);

        assert!(students.add(&ann()));
        assert!(!students.update(&too_high));
        assert_eq!(students.get("S1").unwrap().score, 88.5);
    }

    #[test_context(StudentsTestContext)]
    #[test]
    fn test_list_is_ordered_by_id(ctx: &mut StudentsTestContext) {
        let mut students = Students::new(&mut ctx.db);
        for id in ["S3", "S1", "S2"] {
            assert!(students.add(&Student { id: id.to_string(), ..ann() }));
        }

        let ids: Vec<String> = students.list().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["S1", "S2", "S3"]);
    }

    #[test_context(StudentsTestContext)]
    #[test]
    fn test_score_boundaries_are_accepted(ctx: &mut StudentsTestContext) {
        let mut students = Students::new(&mut ctx.db);
        assert!(students.add(&Student { id: "LOW".to_string(), score: 0.0, ..ann() }));
        assert!(students.add(&Student { id: "HIGH".to_string(), score: 100.0, ..ann() }));
        assert_eq!(students.count(), 2);
    }

    #[test_context(StudentsTestContext)]
    #[test]
    fn test_update_replaces_every_mutable_field(ctx: &mut StudentsTestContext) {
        let mut students = Students::new(&mut ctx.db);
        assert!(students.add(&ann()));
        let before = students.get("S1").unwrap();

        let changed = Student {
            name: "Ann Marie".to_string(),
            email: "ann.marie@y.org".to_string(),
            phone: "5550001111".to_string(),
            course: "Physics".to_string(),
            score: 73.25,
            ..before.clone()
        };
        assert!(students.update(&changed));

        let after = students.get("S1").unwrap();
        assert_eq!(after.id, "S1");
        assert_eq!(after.name, "Ann Marie");
        assert_eq!(after.email, "ann.marie@y.org");
        assert_eq!(after.phone, "5550001111");
        assert_eq!(after.course, "Physics");
        assert_eq!(after.score, 73.25);
        assert_eq!(after.created_at, before.created_at);

        let created = after.created_at.unwrap();
        let updated = after.updated_at.unwrap();
        assert!(updated >= created);
        assert!(updated >= before.updated_at.unwrap());
        assert_eq!(students.count(), 1);
    }
}
