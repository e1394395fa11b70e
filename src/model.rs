use serde::{Deserialize, Serialize};

/// Grade labels accepted by the student form, in display order.
pub const GRADE_LABELS: [&str; 12] = [
    "1st Grade",
    "2nd Grade",
    "3rd Grade",
    "4th Grade",
    "5th Grade",
    "6th Grade",
    "7th Grade",
    "8th Grade",
    "9th Grade",
    "10th Grade",
    "11th Grade",
    "12th Grade",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    SchoolAdmin,
    Teacher,
    Student,
    Parent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StaffType {
    #[serde(rename = "teacher")]
    Teacher,
    #[serde(rename = "non-teacher")]
    NonTeacher,
}

impl StaffType {
    pub fn parse(value: &str) -> Option<StaffType> {
        match value {
            "teacher" => Some(StaffType::Teacher),
            "non-teacher" => Some(StaffType::NonTeacher),
            _ => None,
        }
    }
}

impl Default for StaffType {
    fn default() -> StaffType {
        StaffType::Teacher
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct School {
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub admin_id: String,
    pub created_at: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub school_id: String,
    pub staff_type: StaffType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    pub subjects: Vec<String>,
    pub employee_id: String,
    pub created_at: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub school_id: String,
    pub student_id: String,
    pub grade: String,
    pub parent_ids: Vec<String>,
    pub date_of_birth: String,
    pub emergency_contact: String,
    pub created_at: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parent {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub school_id: String,
    pub children_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    pub phone: String,
    pub created_at: String,
    pub is_active: bool,
}

/// Session-visible identity. Carries no secret material.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_id: Option<String>,
}

// Form payloads. Required fields arrive as plain strings ("" when the field
// was left out) and are validated when the store builds the record.

#[derive(Debug, Clone, Default)]
pub struct StaffDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub staff_type: StaffType,
    pub department: Option<String>,
    pub subjects: Vec<String>,
    pub employee_id: String,
}

#[derive(Debug, Clone, Default)]
pub struct StaffPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub staff_type: Option<StaffType>,
    pub department: Option<String>,
    pub subjects: Option<Vec<String>>,
    pub employee_id: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct StudentDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub student_id: String,
    pub grade: String,
    pub parent_ids: Vec<String>,
    pub date_of_birth: String,
    pub emergency_contact: String,
}

#[derive(Debug, Clone, Default)]
pub struct StudentPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub student_id: Option<String>,
    pub grade: Option<String>,
    pub parent_ids: Option<Vec<String>>,
    pub date_of_birth: Option<String>,
    pub emergency_contact: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ParentDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub children_ids: Vec<String>,
    pub occupation: Option<String>,
    pub phone: String,
}

#[derive(Debug, Clone, Default)]
pub struct ParentPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub children_ids: Option<Vec<String>>,
    pub occupation: Option<String>,
    pub phone: Option<String>,
}
