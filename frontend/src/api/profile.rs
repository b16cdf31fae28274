use super::client::ApiClient;
use super::types::{ApiError, MessageResponse, ProfileCheckResponse, UpdateProfileRequest};

impl ApiClient {
    /// One-shot profile-existence check keyed by (user id, primary email).
    /// The email can legitimately be absent right after sign-up; it is sent
    /// empty and the backend treats it as unknown. Callers decide what an
    /// error means (see the gate); there is no retry here.
    pub async fn check_profile(
        &self,
        user_id: &str,
        email: Option<&str>,
    ) -> Result<ProfileCheckResponse, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/user-profile", base_url))
            .query(&[("userId", user_id), ("email", email.unwrap_or_default())])
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        Self::parse_response(response).await
    }

    pub async fn update_profile(
        &self,
        request: UpdateProfileRequest,
    ) -> Result<MessageResponse, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/update-profile", base_url))
            .headers(headers)
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        Self::parse_response(response).await
    }
}
