//! Dashboard summary: courses, GPA, pending assignments, recent activity.

use crate::client::ApiClient;
use crate::error::{ApiError, Call};
use crate::models::DashboardData;

pub async fn get_dashboard(client: &ApiClient) -> Result<DashboardData, ApiError> {
    client
        .get("/", &[], Call::Other("Failed to load the dashboard"))
        .await
}
