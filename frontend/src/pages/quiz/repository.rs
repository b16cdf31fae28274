use crate::api::{ApiClient, ApiError, QuizQuestion, QuizResponse};
use crate::utils::poll::{self, CancelToken, PollOutcome, PollPolicy, PollStep};

/// A quiz run uses at most this many questions, whatever the backend sends.
pub const QUIZ_SIZE: usize = 10;

pub fn take_quiz_set(mut questions: Vec<QuizQuestion>) -> Vec<QuizQuestion> {
    questions.truncate(QUIZ_SIZE);
    questions
}

/// An empty-but-successful body means generation is still running behind
/// the endpoint, so the poll stays alive instead of showing an empty quiz.
pub fn quiz_step(response: QuizResponse) -> Result<PollStep<Vec<QuizQuestion>>, ApiError> {
    if response.questions.is_empty() {
        if response.success {
            Ok(PollStep::Pending)
        } else {
            Err(ApiError::request_failed("Quiz questions are unavailable"))
        }
    } else {
        Ok(PollStep::Ready(take_quiz_set(response.questions)))
    }
}

pub async fn wait_for_quiz(
    api: &ApiClient,
    user_id: &str,
    cancel: &CancelToken,
) -> PollOutcome<Vec<QuizQuestion>> {
    poll::run(&PollPolicy::default(), cancel, || async {
        match api.quiz_questions(user_id).await {
            Ok(response) => quiz_step(response),
            Err(err) => Err(err),
        }
    })
    .await
}

/// Count of selections matching the correct option key, pairwise.
pub fn score(questions: &[QuizQuestion], selections: &[Option<String>]) -> u32 {
    questions
        .iter()
        .zip(selections.iter())
        .filter(|(question, selection)| selection.as_deref() == Some(question.correct_answer.as_str()))
        .count() as u32
}
