//! Student model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A committed student record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub grade: String,
}

/// A finished intake waiting to be stored; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudent {
    pub name: String,
    pub age: u32,
    pub grade: String,
}

impl NewStudent {
    pub fn into_student(self, id: i64) -> Student {
        Student {
            id,
            name: self.name,
            age: i64::from(self.age),
            grade: self.grade,
        }
    }
}
