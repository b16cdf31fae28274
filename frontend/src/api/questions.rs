use serde_json::json;

use super::client::ApiClient;
use super::types::{AnswerResponse, ApiError, QuestionCategory, QuestionListResponse};

impl ApiClient {
    pub async fn list_questions(
        &self,
        category: QuestionCategory,
        user_id: &str,
    ) -> Result<QuestionListResponse, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/questions/{}", base_url, category.as_str()))
            .query(&[("userId", user_id)])
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        Self::parse_response(response).await
    }

    pub async fn generate_answer(&self, question_id: i64) -> Result<AnswerResponse, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/generate-answer", base_url))
            .headers(headers)
            .json(&json!({ "questionId": question_id }))
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        Self::parse_response(response).await
    }
}
