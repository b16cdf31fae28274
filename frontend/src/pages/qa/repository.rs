use crate::api::{ApiClient, ApiError, Question, QuestionCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QaFilter {
    All,
    Answered,
    Unanswered,
}

impl QaFilter {
    pub const ALL: [QaFilter; 3] = [QaFilter::All, QaFilter::Answered, QaFilter::Unanswered];

    pub fn label(&self) -> &'static str {
        match self {
            QaFilter::All => "All",
            QaFilter::Answered => "Answered",
            QaFilter::Unanswered => "Unanswered",
        }
    }

    pub fn matches(&self, question: &Question) -> bool {
        match self {
            QaFilter::All => true,
            QaFilter::Answered => question.answer.is_some(),
            QaFilter::Unanswered => question.answer.is_none(),
        }
    }
}

pub async fn fetch_questions(
    api: &ApiClient,
    category: QuestionCategory,
    user_id: &str,
) -> Result<Vec<Question>, ApiError> {
    let response = api.list_questions(category, user_id).await?;
    if let Some(message) = response.error {
        return Err(ApiError::request_failed(message));
    }
    Ok(response.questions)
}

pub fn answered_count(questions: &[Question]) -> u32 {
    questions.iter().filter(|q| q.answer.is_some()).count() as u32
}

pub fn filtered<'a>(questions: &'a [Question], filter: QaFilter) -> Vec<&'a Question> {
    questions.iter().filter(|q| filter.matches(q)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions() -> Vec<Question> {
        vec![
            Question {
                id: 1,
                question: "Walk me through your resume.".into(),
                answer: Some("Sure...".into()),
            },
            Question {
                id: 2,
                question: "Why this company?".into(),
                answer: None,
            },
            Question {
                id: 3,
                question: "Describe a hard bug.".into(),
                answer: None,
            },
        ]
    }

    #[test]
    fn answered_count_only_counts_present_answers() {
        assert_eq!(answered_count(&questions()), 1);
        assert_eq!(answered_count(&[]), 0);
    }

    #[test]
    fn filters_partition_the_set() {
        let qs = questions();
        assert_eq!(filtered(&qs, QaFilter::All).len(), 3);
        assert_eq!(filtered(&qs, QaFilter::Answered).len(), 1);
        assert_eq!(filtered(&qs, QaFilter::Unanswered).len(), 2);
        assert_eq!(filtered(&qs, QaFilter::Answered)[0].id, 1);
    }
}
