use crate::client::ApiClient;
use crate::error::{ApiError, Call};
use crate::models::GradeReport;

/// Grade history and GPA. The GPA is the backend's figure, never recomputed.
pub async fn get_grades(client: &ApiClient) -> Result<GradeReport, ApiError> {
    client
        .get("/grade", &[], Call::Other("Failed to load grades"))
        .await
}
