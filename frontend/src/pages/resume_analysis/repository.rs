use crate::api::{AnalysisStatusResponse, ApiClient, ApiError, ResumeAnalysis};
use crate::utils::poll::{self, CancelToken, PollOutcome, PollPolicy, PollStep};

/// How many strengths/improvements show before the expand toggle appears.
pub const COLLAPSED_ENTRY_LIMIT: usize = 4;

/// Classify one status body. `status: "pending"` keeps the poll alive; a
/// present analysis finishes it; an explicit error field is terminal.
pub fn analysis_step(
    status: AnalysisStatusResponse,
) -> Result<PollStep<ResumeAnalysis>, ApiError> {
    if status.is_pending() {
        return Ok(PollStep::Pending);
    }
    if let Some(message) = status.error {
        return Err(ApiError::request_failed(message));
    }
    match status.analysis {
        Some(analysis) => Ok(PollStep::Ready(analysis)),
        None => Err(ApiError::unknown("Analysis result is missing")),
    }
}

pub async fn wait_for_analysis(
    api: &ApiClient,
    user_id: &str,
    cancel: &CancelToken,
) -> PollOutcome<ResumeAnalysis> {
    poll::run(&PollPolicy::default(), cancel, || async {
        match api.resume_analysis(user_id).await {
            Ok(status) => analysis_step(status),
            Err(err) => Err(err),
        }
    })
    .await
}

pub fn visible_entries(entries: &[String], show_all: bool) -> Vec<String> {
    if show_all || entries.len() <= COLLAPSED_ENTRY_LIMIT {
        entries.to_vec()
    } else {
        entries[..COLLAPSED_ENTRY_LIMIT].to_vec()
    }
}

pub fn needs_toggle(entries: &[String]) -> bool {
    entries.len() > COLLAPSED_ENTRY_LIMIT
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending() -> AnalysisStatusResponse {
        AnalysisStatusResponse {
            status: Some("pending".into()),
            success: None,
            analysis: None,
            error: None,
        }
    }

    fn done() -> AnalysisStatusResponse {
        AnalysisStatusResponse {
            status: None,
            success: Some(true),
            analysis: Some(ResumeAnalysis {
                score: 82,
                strengths: vec!["Clear impact statements".into()],
                improvements: vec!["Add metrics".into()],
            }),
            error: None,
        }
    }

    #[test]
    fn pending_status_keeps_polling() {
        assert_eq!(analysis_step(pending()).unwrap(), PollStep::Pending);
    }

    #[test]
    fn present_analysis_finishes_the_poll() {
        match analysis_step(done()).unwrap() {
            PollStep::Ready(analysis) => assert_eq!(analysis.score, 82),
            PollStep::Pending => panic!("expected Ready"),
        }
    }

    #[test]
    fn explicit_error_field_is_terminal() {
        let status = AnalysisStatusResponse {
            status: None,
            success: Some(false),
            analysis: None,
            error: Some("No resume on file".into()),
        };
        let err = analysis_step(status).unwrap_err();
        assert_eq!(err.error, "No resume on file");
    }

    #[test]
    fn missing_analysis_without_pending_is_an_error() {
        let status = AnalysisStatusResponse {
            status: None,
            success: Some(true),
            analysis: None,
            error: None,
        };
        assert!(analysis_step(status).is_err());
    }

    #[test]
    fn entry_lists_collapse_after_four() {
        let entries: Vec<String> = (1..=6).map(|i| format!("entry {i}")).collect();
        assert_eq!(visible_entries(&entries, false).len(), 4);
        assert_eq!(visible_entries(&entries, true).len(), 6);
        assert!(needs_toggle(&entries));
        assert!(!needs_toggle(&entries[..4]));
    }
}
