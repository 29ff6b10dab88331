use super::formatter::format_score;
use super::student::Student;
use prettytable::{row, Table};

pub const COLUMN_NAMES: [&str; 6] = ["Roll Number", "Name", "Email", "Phone", "Course", "Marks"];

pub struct View {}

impl View {
    pub fn students(students: &[Student]) {
        Self::students_table(students).printstd();
    }

    /// Builds the table printed by [`View::students`].
    pub fn students_table(students: &[Student]) -> Table {
        let mut table = Table::new();

        let [id, name, email, phone, course, marks] = COLUMN_NAMES;
        table.add_row(row![id, name, email, phone, course, marks]);
        for student in students {
            table.add_row(row![
                student.id,
                student.name,
                student.email,
                student.phone,
                student.course,
                format_score(student.score)
            ]);
        }

        table
    }
}
