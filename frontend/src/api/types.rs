use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use leptos::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }
}

/// Question categories the backend generates sets for. Doubles as the path
/// segment of `/api/questions/{category}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    Resume,
    Role,
    Company,
}

impl QuestionCategory {
    pub const ALL: [QuestionCategory; 3] = [
        QuestionCategory::Resume,
        QuestionCategory::Role,
        QuestionCategory::Company,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionCategory::Resume => "resume",
            QuestionCategory::Role => "role",
            QuestionCategory::Company => "company",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuestionCategory::Resume => "Resume Based Questions",
            QuestionCategory::Role => "Role Based Questions",
            QuestionCategory::Company => "Company Based Questions",
        }
    }

    /// Local storage key of the per-category answered counter.
    pub fn answered_count_key(&self) -> &'static str {
        match self {
            QuestionCategory::Resume => "resumeAnsweredCount",
            QuestionCategory::Role => "roleAnsweredCount",
            QuestionCategory::Company => "companyAnsweredCount",
        }
    }
}

/// Resume file captured from the intake form's file input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Intake form payload, submitted as multipart form data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeSubmission {
    pub user_id: String,
    pub name: String,
    pub company: String,
    pub role: String,
    pub email: Option<String>,
    pub resume: Option<ResumeUpload>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeAck {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionStatusResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(rename = "questionsGenerated", default)]
    pub questions_generated: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileCheckResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub is_new_user: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    #[serde(default)]
    pub answer: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    pub score: u32,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub improvements: Vec<String>,
}

/// Raw shape of `/api/resume-analysis`: while the backend job is running the
/// body carries `status: "pending"`, afterwards `success` plus the analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisStatusResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub analysis: Option<ResumeAnalysis>,
    #[serde(default)]
    pub error: Option<String>,
}

impl AnalysisStatusResponse {
    pub fn is_pending(&self) -> bool {
        self.status.as_deref() == Some("pending")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: i64,
    pub question: String,
    pub options: BTreeMap<String, String>,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn question_status_uses_camel_case_count() {
        let parsed: QuestionStatusResponse =
            serde_json::from_value(json!({ "success": true, "questionsGenerated": 1 })).unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.questions_generated, 1);
    }

    #[test]
    fn quiz_question_round_trips_correct_answer_field() {
        let parsed: QuizQuestion = serde_json::from_value(json!({
            "id": 7,
            "question": "What does HTTP stand for?",
            "options": { "A": "HyperText Transfer Protocol", "B": "High Throughput" },
            "correctAnswer": "A"
        }))
        .unwrap();
        assert_eq!(parsed.correct_answer, "A");
        let back = serde_json::to_value(&parsed).unwrap();
        assert_eq!(back["correctAnswer"], json!("A"));
    }

    #[test]
    fn analysis_pending_is_detected_from_status_field() {
        let pending: AnalysisStatusResponse =
            serde_json::from_value(json!({ "status": "pending" })).unwrap();
        assert!(pending.is_pending());

        let done: AnalysisStatusResponse = serde_json::from_value(json!({
            "success": true,
            "analysis": { "score": 82, "strengths": ["s"], "improvements": ["i"] }
        }))
        .unwrap();
        assert!(!done.is_pending());
        assert_eq!(done.analysis.unwrap().score, 82);
    }

    #[test]
    fn category_paths_and_storage_keys_are_stable() {
        assert_eq!(QuestionCategory::Resume.as_str(), "resume");
        assert_eq!(QuestionCategory::Role.answered_count_key(), "roleAnsweredCount");
        assert_eq!(QuestionCategory::Company.as_str(), "company");
    }

    #[test]
    fn missing_optional_fields_deserialize_to_defaults() {
        let parsed: QuestionListResponse = serde_json::from_value(json!({ "success": true }))
            .expect("questions field may be absent");
        assert!(parsed.questions.is_empty());
        assert!(parsed.error.is_none());
    }
}
