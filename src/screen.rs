use crate::model::StaffType;

/// Editor half of a management screen. `Closed` is the browsing mode; the
/// other two are the modal's create/edit sub-modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Editor {
    Closed,
    Create,
    Edit { target_id: String },
}

/// Per-screen UI state: listing plus search box, or an open editor modal.
/// Search term changes never touch the editor mode.
pub struct ManagementScreen {
    editor: Editor,
    search_term: String,
}

impl ManagementScreen {
    pub fn new() -> ManagementScreen {
        ManagementScreen {
            editor: Editor::Closed,
            search_term: String::new(),
        }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
    }

    pub fn begin_create(&mut self) {
        self.editor = Editor::Create;
    }

    /// Captures the edit target; the save path updates that id no matter
    /// what the listing shows by then.
    pub fn begin_edit(&mut self, target_id: &str) {
        self.editor = Editor::Edit {
            target_id: target_id.to_string(),
        };
    }

    /// Cancel or successful submit both land here.
    pub fn close_editor(&mut self) {
        self.editor = Editor::Closed;
    }

    /// Back to a fresh browsing state (used at sign-in/sign-out).
    pub fn reset(&mut self) {
        self.editor = Editor::Closed;
        self.search_term.clear();
    }
}

/// The staff screen's teacher/non-teacher dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffFilter {
    All,
    Only(StaffType),
}

impl StaffFilter {
    pub fn parse(value: &str) -> Option<StaffFilter> {
        if value == "all" {
            return Some(StaffFilter::All);
        }
        StaffType::parse(value).map(StaffFilter::Only)
    }

    pub fn keeps(&self, staff_type: StaffType) -> bool {
        match self {
            StaffFilter::All => true,
            StaffFilter::Only(only) => *only == staff_type,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StaffFilter::All => "all",
            StaffFilter::Only(StaffType::Teacher) => "teacher",
            StaffFilter::Only(StaffType::NonTeacher) => "non-teacher",
        }
    }
}
