use std::fmt;

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::model::{
    Parent, ParentDraft, ParentPatch, Role, Staff, StaffDraft, StaffPatch, Student, StudentDraft,
    StudentPatch, GRADE_LABELS,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A required form field is missing, empty, or malformed.
    Validation { field: &'static str },
    /// The update/remove target is not in the collection.
    NotFound { id: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Validation { field } => write!(f, "invalid or missing field: {field}"),
            StoreError::NotFound { id } => write!(f, "record not found: {id}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Store-assigned bookkeeping for a new record. Callers never pick ids.
pub struct RecordMeta {
    pub id: String,
    pub school_id: String,
    pub created_at: String,
}

/// A search box input, folded once so per-row matching stays cheap.
pub struct SearchTerm {
    raw: String,
    folded: String,
}

impl SearchTerm {
    pub fn new(raw: &str) -> SearchTerm {
        SearchTerm {
            raw: raw.to_string(),
            folded: raw.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    fn folded_hit(&self, field: &str) -> bool {
        field.to_lowercase().contains(&self.folded)
    }

    /// Phone numbers are matched as typed, no normalization.
    fn literal_hit(&self, field: &str) -> bool {
        field.contains(&self.raw)
    }
}

pub trait Record: Clone {
    type Draft;
    type Patch;

    fn build(meta: RecordMeta, draft: Self::Draft) -> Result<Self, StoreError>;
    fn merge(&mut self, patch: Self::Patch) -> Result<(), StoreError>;
    fn id(&self) -> &str;
    fn school_id(&self) -> &str;
    fn matches(&self, term: &SearchTerm) -> bool;
}

fn required(field: &'static str, value: &str) -> Result<String, StoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(StoreError::Validation { field });
    }
    Ok(trimmed.to_string())
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn valid_grade(value: &str) -> Result<String, StoreError> {
    let grade = required("grade", value)?;
    if !GRADE_LABELS.contains(&grade.as_str()) {
        return Err(StoreError::Validation { field: "grade" });
    }
    Ok(grade)
}

fn valid_birth_date(value: &str) -> Result<String, StoreError> {
    let date = required("dateOfBirth", value)?;
    if NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_err() {
        return Err(StoreError::Validation {
            field: "dateOfBirth",
        });
    }
    Ok(date)
}

impl Record for Staff {
    type Draft = StaffDraft;
    type Patch = StaffPatch;

    fn build(meta: RecordMeta, draft: StaffDraft) -> Result<Staff, StoreError> {
        let first_name = required("firstName", &draft.first_name)?;
        let last_name = required("lastName", &draft.last_name)?;
        let email = required("email", &draft.email)?;
        let employee_id = required("employeeId", &draft.employee_id)?;

        Ok(Staff {
            id: meta.id,
            email,
            first_name,
            last_name,
            // Every staff row carries the teacher role; staffType is the
            // distinction the screens actually use.
            role: Role::Teacher,
            school_id: meta.school_id,
            staff_type: draft.staff_type,
            department: optional(draft.department),
            subjects: draft.subjects,
            employee_id,
            created_at: meta.created_at,
            is_active: true,
        })
    }

    fn merge(&mut self, patch: StaffPatch) -> Result<(), StoreError> {
        if let Some(v) = patch.first_name {
            self.first_name = required("firstName", &v)?;
        }
        if let Some(v) = patch.last_name {
            self.last_name = required("lastName", &v)?;
        }
        if let Some(v) = patch.email {
            self.email = required("email", &v)?;
        }
        if let Some(v) = patch.staff_type {
            self.staff_type = v;
        }
        if let Some(v) = patch.department {
            self.department = optional(Some(v));
        }
        if let Some(v) = patch.subjects {
            self.subjects = v;
        }
        if let Some(v) = patch.employee_id {
            self.employee_id = required("employeeId", &v)?;
        }
        Ok(())
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn school_id(&self) -> &str {
        &self.school_id
    }

    fn matches(&self, term: &SearchTerm) -> bool {
        term.folded_hit(&self.first_name)
            || term.folded_hit(&self.last_name)
            || term.folded_hit(&self.email)
    }
}

impl Record for Student {
    type Draft = StudentDraft;
    type Patch = StudentPatch;

    fn build(meta: RecordMeta, draft: StudentDraft) -> Result<Student, StoreError> {
        let first_name = required("firstName", &draft.first_name)?;
        let last_name = required("lastName", &draft.last_name)?;
        let email = required("email", &draft.email)?;
        let student_id = required("studentId", &draft.student_id)?;
        let grade = valid_grade(&draft.grade)?;
        let date_of_birth = valid_birth_date(&draft.date_of_birth)?;
        let emergency_contact = required("emergencyContact", &draft.emergency_contact)?;

        Ok(Student {
            id: meta.id,
            email,
            first_name,
            last_name,
            role: Role::Student,
            school_id: meta.school_id,
            student_id,
            grade,
            parent_ids: draft.parent_ids,
            date_of_birth,
            emergency_contact,
            created_at: meta.created_at,
            is_active: true,
        })
    }

    fn merge(&mut self, patch: StudentPatch) -> Result<(), StoreError> {
        if let Some(v) = patch.first_name {
            self.first_name = required("firstName", &v)?;
        }
        if let Some(v) = patch.last_name {
            self.last_name = required("lastName", &v)?;
        }
        if let Some(v) = patch.email {
            self.email = required("email", &v)?;
        }
        if let Some(v) = patch.student_id {
            self.student_id = required("studentId", &v)?;
        }
        if let Some(v) = patch.grade {
            self.grade = valid_grade(&v)?;
        }
        if let Some(v) = patch.parent_ids {
            self.parent_ids = v;
        }
        if let Some(v) = patch.date_of_birth {
            self.date_of_birth = valid_birth_date(&v)?;
        }
        if let Some(v) = patch.emergency_contact {
            self.emergency_contact = required("emergencyContact", &v)?;
        }
        Ok(())
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn school_id(&self) -> &str {
        &self.school_id
    }

    fn matches(&self, term: &SearchTerm) -> bool {
        term.folded_hit(&self.first_name)
            || term.folded_hit(&self.last_name)
            || term.folded_hit(&self.student_id)
            || term.folded_hit(&self.grade)
    }
}

impl Record for Parent {
    type Draft = ParentDraft;
    type Patch = ParentPatch;

    fn build(meta: RecordMeta, draft: ParentDraft) -> Result<Parent, StoreError> {
        let first_name = required("firstName", &draft.first_name)?;
        let last_name = required("lastName", &draft.last_name)?;
        let email = required("email", &draft.email)?;
        let phone = required("phone", &draft.phone)?;

        Ok(Parent {
            id: meta.id,
            email,
            first_name,
            last_name,
            role: Role::Parent,
            school_id: meta.school_id,
            children_ids: draft.children_ids,
            occupation: optional(draft.occupation),
            phone,
            created_at: meta.created_at,
            is_active: true,
        })
    }

    fn merge(&mut self, patch: ParentPatch) -> Result<(), StoreError> {
        if let Some(v) = patch.first_name {
            self.first_name = required("firstName", &v)?;
        }
        if let Some(v) = patch.last_name {
            self.last_name = required("lastName", &v)?;
        }
        if let Some(v) = patch.email {
            self.email = required("email", &v)?;
        }
        if let Some(v) = patch.children_ids {
            self.children_ids = v;
        }
        if let Some(v) = patch.occupation {
            self.occupation = optional(Some(v));
        }
        if let Some(v) = patch.phone {
            self.phone = required("phone", &v)?;
        }
        Ok(())
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn school_id(&self) -> &str {
        &self.school_id
    }

    fn matches(&self, term: &SearchTerm) -> bool {
        term.folded_hit(&self.first_name)
            || term.folded_hit(&self.last_name)
            || term.folded_hit(&self.email)
            || term.literal_hit(&self.phone)
    }
}

fn now_stamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Insertion-ordered collection of one entity kind. Queries are scoped by
/// school id; mutations either fully apply or leave the row untouched.
pub struct EntityStore<T: Record> {
    rows: Vec<T>,
}

impl<T: Record> EntityStore<T> {
    pub fn new() -> EntityStore<T> {
        EntityStore { rows: Vec::new() }
    }

    pub fn seeded(rows: Vec<T>) -> EntityStore<T> {
        EntityStore { rows }
    }

    pub fn list(&self, scope: &str) -> Vec<&T> {
        self.rows.iter().filter(|r| r.school_id() == scope).collect()
    }

    pub fn search(&self, scope: &str, term: &str) -> Vec<&T> {
        let needle = SearchTerm::new(term);
        if needle.is_empty() {
            return self.list(scope);
        }
        self.rows
            .iter()
            .filter(|r| r.school_id() == scope && r.matches(&needle))
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.rows.iter().find(|r| r.id() == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        self.rows.iter_mut().find(|r| r.id() == id)
    }

    pub fn count(&self, scope: &str) -> usize {
        self.rows.iter().filter(|r| r.school_id() == scope).count()
    }

    pub fn add(&mut self, scope: &str, draft: T::Draft) -> Result<T, StoreError> {
        let meta = RecordMeta {
            id: Uuid::new_v4().to_string(),
            school_id: scope.to_string(),
            created_at: now_stamp(),
        };
        let row = T::build(meta, draft)?;
        self.rows.push(row.clone());
        Ok(row)
    }

    pub fn update(&mut self, id: &str, patch: T::Patch) -> Result<T, StoreError> {
        let Some(idx) = self.rows.iter().position(|r| r.id() == id) else {
            return Err(StoreError::NotFound { id: id.to_string() });
        };
        // Merge a copy first so a failed patch leaves the row untouched.
        let mut updated = self.rows[idx].clone();
        updated.merge(patch)?;
        self.rows[idx] = updated.clone();
        Ok(updated)
    }

    pub fn remove(&mut self, id: &str) -> Result<(), StoreError> {
        let Some(idx) = self.rows.iter().position(|r| r.id() == id) else {
            return Err(StoreError::NotFound { id: id.to_string() });
        };
        self.rows.remove(idx);
        Ok(())
    }
}

// Guardian/child id lists live on both sides of the relationship. These keep
// the two sides consistent for ids that resolve; ids that do not resolve are
// legal data and are left alone.

pub fn link_guardians(parents: &mut EntityStore<Parent>, student_id: &str, guardian_ids: &[String]) {
    for guardian_id in guardian_ids {
        if let Some(parent) = parents.get_mut(guardian_id) {
            if !parent.children_ids.iter().any(|c| c == student_id) {
                parent.children_ids.push(student_id.to_string());
            }
        }
    }
}

pub fn unlink_student(parents: &mut EntityStore<Parent>, student_id: &str) {
    for parent in &mut parents.rows {
        parent.children_ids.retain(|c| c != student_id);
    }
}

pub fn link_children(students: &mut EntityStore<Student>, parent_id: &str, child_ids: &[String]) {
    for child_id in child_ids {
        if let Some(student) = students.get_mut(child_id) {
            if !student.parent_ids.iter().any(|p| p == parent_id) {
                student.parent_ids.push(parent_id.to_string());
            }
        }
    }
}

pub fn unlink_parent(students: &mut EntityStore<Student>, parent_id: &str) {
    for student in &mut students.rows {
        student.parent_ids.retain(|p| p != parent_id);
    }
}
