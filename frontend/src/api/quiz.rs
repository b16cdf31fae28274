use super::client::ApiClient;
use super::types::{ApiError, QuizResponse};

impl ApiClient {
    pub async fn quiz_questions(&self, user_id: &str) -> Result<QuizResponse, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/generate-quiz-questions", base_url))
            .query(&[("userId", user_id)])
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        Self::parse_response(response).await
    }
}
