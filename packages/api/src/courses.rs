//! Course listings, timetable, enrollment and course administration.

use serde::Deserialize;

use crate::client::ApiClient;
use crate::error::{ApiError, Call};
use crate::models::{Counted, EnrollResult, NewCourse, Subject};

#[derive(Deserialize)]
struct SubjectEnvelope {
    #[serde(default)]
    subject: Counted<Subject>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SubjectListing {
    Bare(Vec<Subject>),
    Wrapped { subjects: Vec<Subject> },
}

impl From<SubjectListing> for Vec<Subject> {
    fn from(listing: SubjectListing) -> Self {
        match listing {
            SubjectListing::Bare(subjects) | SubjectListing::Wrapped { subjects } => subjects,
        }
    }
}

/// Courses the signed-in user takes (or teaches) this semester.
pub async fn list_enrolled(client: &ApiClient) -> Result<Vec<Subject>, ApiError> {
    let envelope: SubjectEnvelope = client
        .get("/cource", &[], Call::Other("Failed to load courses"))
        .await?;
    Ok(envelope.subject.into_items("courses"))
}

/// Courses with their weekly time slots, for the timetable.
pub async fn get_timetable(client: &ApiClient) -> Result<Vec<Subject>, ApiError> {
    let envelope: SubjectEnvelope = client
        .get("/timetable", &[], Call::Other("Failed to load the timetable"))
        .await?;
    Ok(envelope.subject.into_items("timetable"))
}

/// Every course offered (administration view).
pub async fn list_catalog(client: &ApiClient) -> Result<Vec<Subject>, ApiError> {
    let listing: SubjectListing = client
        .get("/class", &[], Call::Other("Failed to load the course catalog"))
        .await?;
    Ok(listing.into())
}

pub async fn create_course(client: &ApiClient, course: &NewCourse) -> Result<(), ApiError> {
    if let Err(message) = course.validate() {
        return Err(ApiError::Failed {
            status: 400,
            message: message.to_string(),
        });
    }
    client
        .submit("/class", course, Call::Other("Failed to create the course"))
        .await
}

pub async fn delete_course(client: &ApiClient, class_id: i64) -> Result<(), ApiError> {
    client
        .delete(
            "/class",
            &[("classID", class_id.to_string())],
            Call::Other("Failed to delete the course"),
        )
        .await
}

/// Courses open for registration.
pub async fn list_available(client: &ApiClient) -> Result<Vec<Subject>, ApiError> {
    let listing: SubjectListing = client
        .get("/enroll", &[], Call::Other("Failed to load available courses"))
        .await?;
    Ok(listing.into())
}

#[derive(serde::Serialize)]
struct EnrollRequest {
    #[serde(rename = "classID")]
    class_id: i64,
}

/// The reply's `message` is optional; a bare 2xx counts as success.
pub async fn enroll(client: &ApiClient, class_id: i64) -> Result<EnrollResult, ApiError> {
    client
        .post_or_default(
            "/enroll",
            &EnrollRequest { class_id },
            Call::Other("Failed to register for the course"),
        )
        .await
}
