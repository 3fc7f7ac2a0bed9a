//! Building blocks shared by every page.

mod alert;
mod button;
mod dialog;
mod input;
mod post;
mod stat_card;
mod status;
mod weekly_timetable;

pub use alert::{Alert, AlertKind, Notice};
pub use button::{Button, ButtonVariant};
pub use dialog::{ConfirmDialog, ModalOverlay};
pub use input::{Input, Label, Select, Textarea};
pub use post::{CommentList, PostBody};
pub use stat_card::StatCard;
pub use status::{EmptyView, ErrorView, LoadingView};
pub use weekly_timetable::WeeklyTimetable;
