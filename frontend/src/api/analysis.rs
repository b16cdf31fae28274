use super::client::ApiClient;
use super::types::{AnalysisStatusResponse, ApiError};

impl ApiClient {
    /// Fetch the resume analysis. While the backend job is still running the
    /// body reports `status: "pending"`; views poll through `utils::poll`.
    pub async fn resume_analysis(&self, user_id: &str) -> Result<AnalysisStatusResponse, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/resume-analysis", base_url))
            .query(&[("userId", user_id)])
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        Self::parse_response(response).await
    }
}
