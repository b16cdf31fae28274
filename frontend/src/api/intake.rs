use reqwest::multipart::{Form, Part};

use super::client::ApiClient;
use super::types::{ApiError, IntakeAck, IntakeSubmission, QuestionStatusResponse};

impl ApiClient {
    /// Submit the one-time intake form. The resume file rides along as a
    /// multipart part; the backend kicks off question generation and the
    /// caller polls `question_status` until it reports completion.
    pub async fn submit_intake(&self, submission: IntakeSubmission) -> Result<IntakeAck, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;

        let mut form = Form::new()
            .text("userId", submission.user_id)
            .text("name", submission.name)
            .text("company", submission.company)
            .text("role", submission.role)
            .text("email", submission.email.unwrap_or_default());
        if let Some(resume) = submission.resume {
            let part = Part::bytes(resume.bytes)
                .file_name(resume.file_name)
                .mime_str(&resume.mime_type)
                .map_err(|_| ApiError::validation("Unsupported resume file type"))?;
            form = form.part("resume", part);
        }

        let response = self
            .http_client()
            .post(format!("{}/user-input", base_url))
            .headers(headers)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        Self::parse_response(response).await
    }

    pub async fn question_status(&self, user_id: &str) -> Result<QuestionStatusResponse, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/question-status", base_url))
            .query(&[("userId", user_id)])
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        Self::parse_response(response).await
    }
}
