use crate::client::ApiClient;
use crate::error::{ApiError, Call};
use crate::models::AssignmentOverview;

/// Assignments of every enrolled course, with submission state.
pub async fn list_assignments(client: &ApiClient) -> Result<AssignmentOverview, ApiError> {
    client
        .get("/assignment", &[], Call::Other("Failed to load assignments"))
        .await
}
