mod auth_layout;
pub use auth_layout::AuthLayout;

mod main_layout;
pub use main_layout::MainLayout;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod dashboard;
pub use dashboard::Dashboard;

mod courses;
pub use courses::Courses;

mod course_detail;
pub use course_detail::CourseDetail;

mod post_detail;
pub use post_detail::{AssignmentDetail, MaterialDetail, NoticeDetail};

mod assignments;
pub use assignments::Assignments;

mod grades;
pub use grades::Grades;

mod timetable;
pub use timetable::Timetable;

mod course_registration;
pub use course_registration::CourseRegistration;

mod account_management;
pub use account_management::AccountManagement;

mod course_management;
pub use course_management::CourseManagement;

mod not_found;
pub use not_found::NotFound;
