//! Reply rendering
//!
//! Turns engine replies into localized message text.

use std::collections::HashMap;
use crate::models::Student;
use crate::state::Reply;
use super::loader::{I18n, TranslationParams};

impl I18n {
    /// Render a reply in the given language
    pub fn render(&self, reply: &Reply, lang: &str) -> String {
        match reply {
            Reply::AskName => self.t("commands.start.ask_name", lang, None),
            Reply::AskAge => self.t("registration.ask_age", lang, None),
            Reply::AskGrade => self.t("registration.ask_grade", lang, None),
            Reply::InvalidName => self.t("validation.invalid_name", lang, None),
            Reply::InvalidAge => self.t("validation.invalid_age", lang, None),
            Reply::InvalidGrade => self.t("validation.invalid_grade", lang, None),
            Reply::Saved(student) => {
                self.t("registration.saved", lang, Some(&student_params(student)))
            }
            Reply::SaveFailed => self.t("errors.save_failed", lang, None),
            Reply::Help => self.t("commands.help.text", lang, None),
            Reply::StudentList(students) => self.render_student_list(students, lang),
            Reply::NoStudents => self.t("commands.list.empty", lang, None),
            Reply::ListFailed => self.t("errors.list_failed", lang, None),
            Reply::Cancelled => self.t("commands.cancel.done", lang, None),
            Reply::NothingToCancel => self.t("commands.cancel.nothing", lang, None),
            Reply::UseCommands => self.t("messages.use_commands", lang, None),
            Reply::InternalError => self.t("errors.internal", lang, None),
        }
    }

    fn render_student_list(&self, students: &[Student], lang: &str) -> String {
        if students.is_empty() {
            return self.t("commands.list.empty", lang, None);
        }

        let mut lines = Vec::with_capacity(students.len() + 1);
        lines.push(self.tp("commands.list.title", lang, students.len() as i64, None));
        for student in students {
            lines.push(self.t("commands.list.entry", lang, Some(&student_params(student))));
        }

        lines.join("\n")
    }
}

fn student_params(student: &Student) -> TranslationParams {
    HashMap::from([
        ("id".to_string(), student.id.to_string()),
        ("name".to_string(), student.name.clone()),
        ("age".to_string(), student.age.to_string()),
        ("grade".to_string(), student.grade.clone()),
    ])
}
