use serde::Deserialize;

use crate::directory::IdentityDirectory;
use crate::model::{Parent, School, Staff, Student};
use crate::nav::NavState;
use crate::screen::{ManagementScreen, StaffFilter};
use crate::seed;
use crate::session::Session;
use crate::store::EntityStore;

#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

pub struct AppState {
    pub directory: IdentityDirectory,
    pub session: Session,
    pub nav: NavState,
    pub schools: Vec<School>,
    pub staff: EntityStore<Staff>,
    pub students: EntityStore<Student>,
    pub parents: EntityStore<Parent>,
    pub staff_screen: ManagementScreen,
    pub staff_filter: StaffFilter,
    pub student_screen: ManagementScreen,
    pub parent_screen: ManagementScreen,
}

impl AppState {
    /// Fresh state with the demo fixtures loaded. Everything lives in this
    /// struct; a restart starts over from the same fixtures.
    pub fn seeded() -> AppState {
        AppState {
            directory: IdentityDirectory::standard(),
            session: Session::new(),
            nav: NavState::new(),
            schools: seed::schools(),
            staff: EntityStore::seeded(seed::staff()),
            students: EntityStore::seeded(seed::students()),
            parents: EntityStore::seeded(seed::parents()),
            staff_screen: ManagementScreen::new(),
            staff_filter: StaffFilter::All,
            student_screen: ManagementScreen::new(),
            parent_screen: ManagementScreen::new(),
        }
    }

    /// Every screen back to its browsing default. Runs at sign-in and
    /// sign-out so one account's UI state never leaks into the next.
    pub fn reset_screens(&mut self) {
        self.nav.reset();
        self.staff_screen.reset();
        self.staff_filter = StaffFilter::All;
        self.student_screen.reset();
        self.parent_screen.reset();
    }
}
