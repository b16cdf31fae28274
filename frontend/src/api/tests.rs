#![cfg(not(coverage))]

use super::*;
use httpmock::prelude::*;
use serde_json::json;

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.url("/api")).with_token("test-token")
}

fn question_json(id: i64, answer: Option<&str>) -> serde_json::Value {
    json!({
        "id": id,
        "question": format!("Question {id}?"),
        "answer": answer
    })
}

fn quiz_question_json(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "question": format!("Quiz question {id}?"),
        "options": { "A": "first", "B": "second", "C": "third", "D": "fourth" },
        "correctAnswer": "B"
    })
}

#[tokio::test]
async fn submit_intake_posts_multipart_with_bearer_token() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/user-input")
            .header("authorization", "Bearer test-token");
        then.status(200)
            .json_body(json!({ "success": true, "message": "Questions are being generated" }));
    });

    let ack = client_for(&server)
        .submit_intake(IntakeSubmission {
            user_id: "u1".into(),
            name: "Alice Example".into(),
            company: "Acme".into(),
            role: "Backend Engineer".into(),
            email: Some("alice@example.com".into()),
            resume: Some(ResumeUpload {
                file_name: "resume.pdf".into(),
                mime_type: "application/pdf".into(),
                bytes: b"%PDF-1.4 fake".to_vec(),
            }),
        })
        .await
        .unwrap();

    mock.assert();
    assert!(ack.success);
    assert_eq!(ack.message.as_deref(), Some("Questions are being generated"));
}

#[tokio::test]
async fn question_status_reports_generated_flag() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/question-status")
            .query_param("userId", "u1");
        then.status(200)
            .json_body(json!({ "success": true, "questionsGenerated": 1 }));
    });

    let status = client_for(&server).question_status("u1").await.unwrap();
    assert!(status.success);
    assert_eq!(status.questions_generated, 1);
}

#[tokio::test]
async fn check_profile_sends_user_and_email() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/user-profile")
            .query_param("userId", "u1")
            .query_param("email", "alice@example.com");
        then.status(200)
            .json_body(json!({ "success": true, "is_new_user": false }));
    });

    let check = client_for(&server)
        .check_profile("u1", Some("alice@example.com"))
        .await
        .unwrap();
    assert!(check.success);
    assert!(!check.is_new_user);
}

#[tokio::test]
async fn check_profile_tolerates_missing_email() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/user-profile")
            .query_param("userId", "u2")
            .query_param("email", "");
        then.status(200)
            .json_body(json!({ "success": true, "is_new_user": true }));
    });

    let check = client_for(&server).check_profile("u2", None).await.unwrap();
    assert!(check.is_new_user);
}

#[tokio::test]
async fn list_questions_uses_category_path() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/questions/role")
            .query_param("userId", "u1");
        then.status(200).json_body(json!({
            "success": true,
            "questions": [question_json(1, Some("existing answer")), question_json(2, None)]
        }));
    });

    let listing = client_for(&server)
        .list_questions(QuestionCategory::Role, "u1")
        .await
        .unwrap();
    assert_eq!(listing.questions.len(), 2);
    assert!(listing.questions[0].answer.is_some());
    assert!(listing.questions[1].answer.is_none());
}

#[tokio::test]
async fn generate_answer_posts_question_id() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/generate-answer")
            .json_body(json!({ "questionId": 42 }));
        then.status(200)
            .json_body(json!({ "answer": "Lead with the outcome." }));
    });

    let generated = client_for(&server).generate_answer(42).await.unwrap();
    mock.assert();
    assert_eq!(generated.answer, "Lead with the outcome.");
}

#[tokio::test]
async fn resume_analysis_surfaces_pending_then_result() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/resume-analysis")
            .query_param("userId", "pending-user");
        then.status(200).json_body(json!({ "status": "pending" }));
    });
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/resume-analysis")
            .query_param("userId", "done-user");
        then.status(200).json_body(json!({
            "success": true,
            "analysis": {
                "score": 78,
                "strengths": ["Clear impact statements"],
                "improvements": ["Quantify outcomes"]
            }
        }));
    });

    let api = client_for(&server);
    let pending = api.resume_analysis("pending-user").await.unwrap();
    assert!(pending.is_pending());

    let done = api.resume_analysis("done-user").await.unwrap();
    assert!(!done.is_pending());
    assert_eq!(done.analysis.unwrap().score, 78);
}

#[tokio::test]
async fn quiz_questions_parse_options_and_answer() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/generate-quiz-questions")
            .query_param("userId", "u1");
        then.status(200).json_body(json!({
            "success": true,
            "questions": [quiz_question_json(1), quiz_question_json(2)]
        }));
    });

    let quiz = client_for(&server).quiz_questions("u1").await.unwrap();
    assert_eq!(quiz.questions.len(), 2);
    assert_eq!(quiz.questions[0].correct_answer, "B");
    assert_eq!(quiz.questions[0].options.len(), 4);
}

#[tokio::test]
async fn non_success_status_carries_backend_message() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/questions/company");
        then.status(404)
            .json_body(json!({ "error": "Questions not generated yet" }));
    });

    let err = client_for(&server)
        .list_questions(QuestionCategory::Company, "u1")
        .await
        .unwrap_err();
    assert_eq!(err.error, "Questions not generated yet");
    assert_eq!(err.code, "REQUEST_FAILED");
}

#[tokio::test]
async fn non_success_status_without_body_gets_generic_message() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/question-status");
        then.status(502);
    });

    let err = client_for(&server).question_status("u1").await.unwrap_err();
    assert_eq!(err.error, "Request failed with status 502");
}

#[tokio::test]
async fn update_profile_posts_new_username() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/update-profile")
            .json_body(json!({ "userId": "u1", "username": "alice-2" }));
        then.status(200)
            .json_body(json!({ "message": "Profile updated" }));
    });

    let response = client_for(&server)
        .update_profile(UpdateProfileRequest {
            user_id: "u1".into(),
            username: "alice-2".into(),
        })
        .await
        .unwrap();
    mock.assert();
    assert_eq!(response.message.as_deref(), Some("Profile updated"));
}
