use crate::model::Role;

pub struct Tab {
    pub id: &'static str,
    pub label: &'static str,
    pub title: &'static str,
    pub implemented: bool,
}

// Sidebar order. `schools` is prepended for the super admin only.
static TABS: [Tab; 8] = [
    Tab { id: "dashboard", label: "Dashboard", title: "Dashboard", implemented: true },
    Tab { id: "staff", label: "Staff Management", title: "Staff Management", implemented: true },
    Tab { id: "students", label: "Students", title: "Student Management", implemented: true },
    Tab { id: "parents", label: "Parents", title: "Parent Management", implemented: true },
    Tab { id: "classes", label: "Classes", title: "Classes", implemented: false },
    Tab { id: "attendance", label: "Attendance", title: "Attendance", implemented: false },
    Tab { id: "reports", label: "Reports", title: "Reports", implemented: false },
    Tab { id: "settings", label: "Settings", title: "Settings", implemented: false },
];

static SCHOOLS_TAB: Tab = Tab {
    id: "schools",
    label: "Schools",
    title: "Schools",
    implemented: false,
};

pub fn tabs_for(role: Role) -> Vec<&'static Tab> {
    let mut tabs: Vec<&'static Tab> = Vec::with_capacity(TABS.len() + 1);
    if role == Role::SuperAdmin {
        tabs.push(&SCHOOLS_TAB);
    }
    tabs.extend(TABS.iter());
    tabs
}

pub fn find_tab(role: Role, id: &str) -> Option<&'static Tab> {
    tabs_for(role).into_iter().find(|t| t.id == id)
}

/// Selected-screen slot of the navigation shell.
pub struct NavState {
    selected: &'static Tab,
}

impl NavState {
    pub fn new() -> NavState {
        NavState { selected: &TABS[0] }
    }

    pub fn current(&self) -> &'static Tab {
        self.selected
    }

    pub fn select(&mut self, role: Role, id: &str) -> Option<&'static Tab> {
        let tab = find_tab(role, id)?;
        self.selected = tab;
        Some(tab)
    }

    pub fn reset(&mut self) {
        self.selected = &TABS[0];
    }
}
