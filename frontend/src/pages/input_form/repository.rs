use crate::api::{ApiClient, ApiError, IntakeSubmission, QuestionStatusResponse};
use crate::utils::poll::{self, CancelToken, PollOutcome, PollPolicy, PollStep};

pub const ACCEPTED_RESUME_EXTENSIONS: &[&str] = &[".pdf", ".doc", ".docx"];

/// Form-level validation before anything leaves the browser. Collects all
/// problems at once so the user fixes them in one pass.
pub fn validate(submission: &IntakeSubmission) -> Result<(), ApiError> {
    let mut problems = Vec::new();
    if submission.name.trim().is_empty() {
        problems.push("Name is required");
    }
    if submission.company.trim().is_empty() {
        problems.push("Target company is required");
    }
    if submission.role.trim().is_empty() {
        problems.push("Target role is required");
    }
    if let Some(resume) = &submission.resume {
        if !has_accepted_extension(&resume.file_name) {
            problems.push("Resume must be a .pdf, .doc or .docx file");
        }
    } else {
        problems.push("Resume file is required");
    }
    if problems.is_empty() {
        Ok(())
    } else {
        Err(ApiError {
            error: "Please fix the highlighted fields".to_string(),
            code: "VALIDATION_ERROR".to_string(),
            details: Some(serde_json::json!({ "errors": problems })),
        })
    }
}

pub fn has_accepted_extension(file_name: &str) -> bool {
    let lower = file_name.to_ascii_lowercase();
    ACCEPTED_RESUME_EXTENSIONS
        .iter()
        .any(|ext| lower.ends_with(ext))
}

/// One status observation. Generation is done when the backend reports
/// `questionsGenerated == 1`; anything else is still pending.
pub fn status_step(status: QuestionStatusResponse) -> PollStep<()> {
    if status.questions_generated == 1 {
        PollStep::Ready(())
    } else {
        PollStep::Pending
    }
}

pub async fn wait_for_questions(
    api: &ApiClient,
    user_id: &str,
    cancel: &CancelToken,
) -> PollOutcome<()> {
    poll::run(&PollPolicy::default(), cancel, || async {
        api.question_status(user_id).await.map(status_step)
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> IntakeSubmission {
        IntakeSubmission {
            user_id: "u1".into(),
            name: "Alice".into(),
            company: "Acme".into(),
            role: "Backend Engineer".into(),
            email: Some("alice@example.com".into()),
            resume: Some(crate::api::ResumeUpload {
                file_name: "resume.pdf".into(),
                mime_type: "application/pdf".into(),
                bytes: vec![1, 2, 3],
            }),
        }
    }

    #[test]
    fn complete_submission_passes_validation() {
        assert!(validate(&submission()).is_ok());
    }

    #[test]
    fn validation_collects_every_missing_field() {
        let mut s = submission();
        s.company.clear();
        s.role = "   ".into();
        s.resume = None;
        let err = validate(&s).unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
        let errors = err.details.unwrap();
        let errors = errors.get("errors").unwrap().as_array().unwrap();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn resume_extension_check_is_case_insensitive() {
        assert!(has_accepted_extension("Resume.PDF"));
        assert!(has_accepted_extension("cv.docx"));
        assert!(!has_accepted_extension("resume.txt"));
        assert!(!has_accepted_extension("resume"));
    }

    #[test]
    fn status_step_requires_the_generated_flag() {
        let pending = QuestionStatusResponse {
            success: true,
            questions_generated: 0,
        };
        let done = QuestionStatusResponse {
            success: true,
            questions_generated: 1,
        };
        assert_eq!(status_step(pending), PollStep::Pending);
        assert_eq!(status_step(done), PollStep::Ready(()));
    }
}
