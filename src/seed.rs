//! Demo fixtures the daemon starts with. Ids and dates are the hand-assigned
//! values the console has always shipped; records created at runtime get
//! store-assigned uuids instead.

use crate::model::{Parent, Role, School, Staff, StaffType, Student};

pub fn schools() -> Vec<School> {
    vec![
        School {
            id: "school-1".to_string(),
            name: "Greenwood Elementary".to_string(),
            address: "123 Oak Street, Springfield, IL".to_string(),
            phone: "(555) 123-4567".to_string(),
            email: "info@greenwood.edu".to_string(),
            admin_id: "2".to_string(),
            created_at: "2024-01-15".to_string(),
            is_active: true,
        },
        School {
            id: "school-2".to_string(),
            name: "Riverside High School".to_string(),
            address: "456 River Road, Springfield, IL".to_string(),
            phone: "(555) 987-6543".to_string(),
            email: "info@riverside.edu".to_string(),
            admin_id: "3".to_string(),
            created_at: "2024-01-20".to_string(),
            is_active: true,
        },
    ]
}

pub fn staff() -> Vec<Staff> {
    vec![
        Staff {
            id: "staff-1".to_string(),
            email: "mary.teacher@greenwood.edu".to_string(),
            first_name: "Mary".to_string(),
            last_name: "Wilson".to_string(),
            role: Role::Teacher,
            school_id: "school-1".to_string(),
            staff_type: StaffType::Teacher,
            department: Some("Mathematics".to_string()),
            subjects: vec!["Algebra".to_string(), "Geometry".to_string()],
            employee_id: "EMP001".to_string(),
            created_at: "2024-02-01".to_string(),
            is_active: true,
        },
        Staff {
            id: "staff-2".to_string(),
            email: "david.janitor@greenwood.edu".to_string(),
            first_name: "David".to_string(),
            last_name: "Brown".to_string(),
            role: Role::Teacher,
            school_id: "school-1".to_string(),
            staff_type: StaffType::NonTeacher,
            department: Some("Maintenance".to_string()),
            subjects: Vec::new(),
            employee_id: "EMP002".to_string(),
            created_at: "2024-02-05".to_string(),
            is_active: true,
        },
        Staff {
            id: "staff-3".to_string(),
            email: "lisa.science@riverside.edu".to_string(),
            first_name: "Lisa".to_string(),
            last_name: "Davis".to_string(),
            role: Role::Teacher,
            school_id: "school-2".to_string(),
            staff_type: StaffType::Teacher,
            department: Some("Science".to_string()),
            subjects: vec!["Biology".to_string(), "Chemistry".to_string()],
            employee_id: "EMP003".to_string(),
            created_at: "2024-02-10".to_string(),
            is_active: true,
        },
    ]
}

pub fn students() -> Vec<Student> {
    vec![
        Student {
            id: "student-1".to_string(),
            email: "alice.student@email.com".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Cooper".to_string(),
            role: Role::Student,
            school_id: "school-1".to_string(),
            student_id: "STU001".to_string(),
            grade: "4th Grade".to_string(),
            parent_ids: vec!["parent-1".to_string()],
            date_of_birth: "2015-03-15".to_string(),
            emergency_contact: "(555) 111-2222".to_string(),
            created_at: "2024-02-15".to_string(),
            is_active: true,
        },
        Student {
            id: "student-2".to_string(),
            email: "bob.student@email.com".to_string(),
            first_name: "Bob".to_string(),
            last_name: "Martinez".to_string(),
            role: Role::Student,
            school_id: "school-2".to_string(),
            student_id: "STU002".to_string(),
            grade: "10th Grade".to_string(),
            parent_ids: vec!["parent-2".to_string()],
            date_of_birth: "2009-07-22".to_string(),
            emergency_contact: "(555) 333-4444".to_string(),
            created_at: "2024-02-20".to_string(),
            is_active: true,
        },
    ]
}

pub fn parents() -> Vec<Parent> {
    vec![
        Parent {
            id: "parent-1".to_string(),
            email: "robert.cooper@email.com".to_string(),
            first_name: "Robert".to_string(),
            last_name: "Cooper".to_string(),
            role: Role::Parent,
            school_id: "school-1".to_string(),
            children_ids: vec!["student-1".to_string()],
            occupation: Some("Engineer".to_string()),
            phone: "(555) 111-2222".to_string(),
            created_at: "2024-02-15".to_string(),
            is_active: true,
        },
        Parent {
            id: "parent-2".to_string(),
            email: "maria.martinez@email.com".to_string(),
            first_name: "Maria".to_string(),
            last_name: "Martinez".to_string(),
            role: Role::Parent,
            school_id: "school-2".to_string(),
            children_ids: vec!["student-2".to_string()],
            occupation: Some("Doctor".to_string()),
            phone: "(555) 333-4444".to_string(),
            created_at: "2024-02-20".to_string(),
            is_active: true,
        },
    ]
}
