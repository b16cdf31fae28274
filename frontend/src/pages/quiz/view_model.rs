use leptos::*;

use crate::api::{ApiClient, ApiError, QuizQuestion};
use crate::pages::quiz::repository;
use crate::state::session::use_session;
use crate::utils::poll::{CancelToken, PollOutcome};

#[derive(Debug, Clone, PartialEq)]
pub enum QuizStage {
    Loading,
    InProgress,
    Complete,
    Failed(ApiError),
    TimedOut,
}

#[derive(Clone, Copy)]
pub struct QuizViewModel {
    pub stage: RwSignal<QuizStage>,
    pub questions: RwSignal<Vec<QuizQuestion>>,
    pub current_index: RwSignal<usize>,
    pub selections: RwSignal<Vec<Option<String>>>,
}

impl QuizViewModel {
    pub fn new(cancel: CancelToken) -> Self {
        let vm = Self {
            stage: create_rw_signal(QuizStage::Loading),
            questions: create_rw_signal(Vec::new()),
            current_index: create_rw_signal(0),
            selections: create_rw_signal(Vec::new()),
        };

        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let (session, _) = use_session();
        let stage = vm.stage;
        let questions = vm.questions;
        let selections = vm.selections;
        let started = store_value(false);
        create_effect(move |_| {
            let Some(user) = session.get().user else {
                return;
            };
            if started.get_value() {
                return;
            }
            started.set_value(true);
            let api = api.clone();
            let cancel = cancel.clone();
            spawn_local(async move {
                match repository::wait_for_quiz(&api, &user.id, &cancel).await {
                    PollOutcome::Done(set) => {
                        selections.set(vec![None; set.len()]);
                        questions.set(set);
                        stage.set(QuizStage::InProgress);
                    }
                    PollOutcome::Failed(err) => stage.set(QuizStage::Failed(err)),
                    PollOutcome::TimedOut => stage.set(QuizStage::TimedOut),
                    PollOutcome::Cancelled => {}
                }
            });
        });

        vm
    }

    pub fn current_question(&self) -> Option<QuizQuestion> {
        self.questions
            .get()
            .get(self.current_index.get())
            .cloned()
    }

    pub fn current_selection(&self) -> Option<String> {
        self.selections
            .get()
            .get(self.current_index.get())
            .cloned()
            .flatten()
    }

    /// One shot per question: the first selection sticks.
    pub fn select(&self, option_key: &str) {
        let index = self.current_index.get_untracked();
        let already = self
            .selections
            .get_untracked()
            .get(index)
            .cloned()
            .flatten()
            .is_some();
        if already {
            return;
        }
        let option_key = option_key.to_string();
        self.selections.update(|selections| {
            if let Some(slot) = selections.get_mut(index) {
                *slot = Some(option_key);
            }
        });
    }

    /// Advance past the current question, finishing the quiz on the last one.
    pub fn next(&self) {
        let index = self.current_index.get_untracked();
        let total = self.questions.get_untracked().len();
        if index + 1 >= total {
            self.stage.set(QuizStage::Complete);
        } else {
            self.current_index.set(index + 1);
        }
    }

    pub fn score(&self) -> u32 {
        repository::score(&self.questions.get(), &self.selections.get())
    }
}
