//! Which controls each role gets to see.
//!
//! The backend enforces permissions; this module only decides what the UI
//! hides. Every role check in the app goes through [`allowed`] so the matrix
//! lives in one place:
//!
//! | Action | student | professor | admin |
//! |--------|---------|-----------|-------|
//! | [`Action::ViewAssignments`] / [`Action::ViewGrades`] | yes | no | yes |
//! | [`Action::RegisterCourses`] | yes | yes | no |
//! | [`Action::CreatePost`] (also needs `writeEnable`) | no | yes | no |
//! | [`Action::DeletePost`] | no | yes | no |
//! | [`Action::ManageAccounts`] / [`Action::ManageCourses`] | no | no | yes |
//! | [`Action::DeleteAnyComment`] | no | no | yes |

use store::{Role, SessionUser};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    ViewAssignments,
    ViewGrades,
    RegisterCourses,
    CreatePost,
    DeletePost,
    ManageAccounts,
    ManageCourses,
    DeleteAnyComment,
}

pub fn allowed(role: Role, action: Action) -> bool {
    match action {
        Action::ViewAssignments | Action::ViewGrades => role != Role::Professor,
        Action::RegisterCourses => role != Role::Admin,
        Action::CreatePost | Action::DeletePost => role == Role::Professor,
        Action::ManageAccounts | Action::ManageCourses | Action::DeleteAnyComment => {
            role == Role::Admin
        }
    }
}

/// Whether `role` may post on a board whose header carries `write_enable`.
pub fn can_write(role: Role, write_enable: bool) -> bool {
    write_enable && allowed(role, Action::CreatePost)
}

/// Own comments can always be deleted; admins can delete any.
pub fn can_delete_comment(user: &SessionUser, author_id: &str) -> bool {
    user.id == author_id || allowed(user.role, Action::DeleteAnyComment)
}

/// A top-level page reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Dashboard,
    Courses,
    Assignments,
    Grades,
    Timetable,
    CourseRegistration,
    AccountManagement,
    CourseManagement,
}

impl Page {
    pub const ALL: [Page; 8] = [
        Page::Dashboard,
        Page::Courses,
        Page::Assignments,
        Page::Grades,
        Page::Timetable,
        Page::CourseRegistration,
        Page::AccountManagement,
        Page::CourseManagement,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Courses => "My Courses",
            Page::Assignments => "Assignments",
            Page::Grades => "Grades",
            Page::Timetable => "Timetable",
            Page::CourseRegistration => "Course Registration",
            Page::AccountManagement => "Account Management",
            Page::CourseManagement => "Course Management",
        }
    }

    /// The action gating the page, if any.
    pub fn requires(self) -> Option<Action> {
        match self {
            Page::Assignments => Some(Action::ViewAssignments),
            Page::Grades => Some(Action::ViewGrades),
            Page::CourseRegistration => Some(Action::RegisterCourses),
            Page::AccountManagement => Some(Action::ManageAccounts),
            Page::CourseManagement => Some(Action::ManageCourses),
            Page::Dashboard | Page::Courses | Page::Timetable => None,
        }
    }

    pub fn visible_to(self, role: Role) -> bool {
        self.requires().is_none_or(|action| allowed(role, action))
    }
}

/// Sidebar entries for `role`, in display order.
pub fn navigation(role: Role) -> Vec<Page> {
    Page::ALL
        .into_iter()
        .filter(|page| page.visible_to(role))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, role: Role) -> SessionUser {
        SessionUser {
            id: id.to_string(),
            name: id.to_string(),
            role,
        }
    }

    #[test]
    fn test_student_navigation() {
        assert_eq!(
            navigation(Role::Student),
            vec![
                Page::Dashboard,
                Page::Courses,
                Page::Assignments,
                Page::Grades,
                Page::Timetable,
                Page::CourseRegistration,
            ]
        );
    }

    #[test]
    fn test_professor_navigation() {
        let pages = navigation(Role::Professor);
        assert!(!pages.contains(&Page::Assignments));
        assert!(!pages.contains(&Page::Grades));
        assert!(pages.contains(&Page::CourseRegistration));
        assert!(!pages.contains(&Page::AccountManagement));
    }

    #[test]
    fn test_admin_navigation() {
        let pages = navigation(Role::Admin);
        assert!(pages.contains(&Page::AccountManagement));
        assert!(pages.contains(&Page::CourseManagement));
        assert!(pages.contains(&Page::Grades));
        assert!(!pages.contains(&Page::CourseRegistration));
    }

    #[test]
    fn test_post_controls() {
        assert!(can_write(Role::Professor, true));
        assert!(!can_write(Role::Professor, false));
        assert!(!can_write(Role::Student, true));
        assert!(!can_write(Role::Admin, true));

        assert!(allowed(Role::Professor, Action::DeletePost));
        assert!(!allowed(Role::Student, Action::DeletePost));
        assert!(!allowed(Role::Admin, Action::DeletePost));
    }

    #[test]
    fn test_comment_deletion() {
        assert!(can_delete_comment(&user("s1", Role::Student), "s1"));
        assert!(!can_delete_comment(&user("s1", Role::Student), "s2"));
        assert!(!can_delete_comment(&user("p1", Role::Professor), "s2"));
        assert!(can_delete_comment(&user("a1", Role::Admin), "s2"));
    }
}
