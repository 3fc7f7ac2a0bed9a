//! Canonical request/response types, one per backend resource.
//!
//! Field names on the wire follow the backend (`ClassID`, `postName`, ...);
//! the Rust names are snake_case. Deserializing into these types is the
//! validation step at the client boundary.

pub mod id;

mod account;
mod assignment;
mod auth;
mod course;
mod dashboard;
mod grade;
mod post;

pub use account::{Account, AccountGroups, AccountStatus, NewAccount};
pub use assignment::{AssignmentOverview, AssignmentSummary, SubjectAssignments};
pub use auth::{LoginRequest, LoginResponse, SignupRequest};
pub use course::{BoardSubject, Counted, EnrollResult, NewCourse, Subject};
pub use dashboard::{Activity, ActivityKind, DashboardData};
pub use grade::{GradeRecord, GradeReport};
pub use post::{Board, Comment, NewComment, NewPost, PostDetail, PostKind, PostPage, PostSummary};
