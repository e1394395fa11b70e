use crate::model::{Profile, Role};

/// One sign-in account. The secret never leaves this module except for the
/// equality check in the session manager.
pub struct Account {
    pub profile: Profile,
    pub password: String,
}

/// Fixed email -> account table consulted at sign-in. Lookups are
/// case-sensitive exact matches.
pub struct IdentityDirectory {
    accounts: Vec<Account>,
}

impl IdentityDirectory {
    pub fn new(accounts: Vec<Account>) -> IdentityDirectory {
        IdentityDirectory { accounts }
    }

    /// The three accounts the console ships with: one super admin and one
    /// admin per seeded school.
    pub fn standard() -> IdentityDirectory {
        fn account(
            id: &str,
            email: &str,
            first_name: &str,
            last_name: &str,
            role: Role,
            school_id: Option<&str>,
        ) -> Account {
            Account {
                profile: Profile {
                    id: id.to_string(),
                    email: email.to_string(),
                    first_name: first_name.to_string(),
                    last_name: last_name.to_string(),
                    role,
                    school_id: school_id.map(str::to_string),
                },
                password: "admin123".to_string(),
            }
        }

        IdentityDirectory::new(vec![
            account("1", "super@admin.com", "Super", "Admin", Role::SuperAdmin, None),
            account(
                "2",
                "admin@kingdomheritage.edu",
                "John",
                "Smith",
                Role::SchoolAdmin,
                Some("school-1"),
            ),
            account(
                "3",
                "admin@YOUNIK.edu",
                "Sarah",
                "Johnson",
                Role::SchoolAdmin,
                Some("school-2"),
            ),
        ])
    }

    pub fn find(&self, email: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.profile.email == email)
    }
}
