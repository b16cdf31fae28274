use std::collections::{HashMap, HashSet};

use leptos::*;

use crate::api::{ApiClient, ApiError, Question, QuestionCategory};
use crate::pages::qa::repository::{self, QaFilter};
use crate::state::progress::{use_progress_store, ProgressStore};
use crate::state::session::use_session;

#[derive(Clone, Copy)]
pub struct QaViewModel {
    pub category: QuestionCategory,
    pub questions_resource: Resource<Option<String>, Result<Vec<Question>, ApiError>>,
    pub filter: RwSignal<QaFilter>,
    pub expanded: RwSignal<HashSet<i64>>,
    pub generating: RwSignal<Option<i64>>,
    pub card_errors: RwSignal<HashMap<i64, ApiError>>,
    api: StoredValue<ApiClient>,
    progress: ProgressStore,
}

impl QaViewModel {
    /// Contexts are resolved here, while the setup scope is still current;
    /// event handlers only use what the view model captured.
    pub fn new(category: QuestionCategory) -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let (session, _) = use_session();
        let progress = use_progress_store();

        let fetch_api = api.clone();
        let questions_resource = create_resource(
            move || session.get().user.map(|u| u.id),
            move |user_id| {
                let api = fetch_api.clone();
                async move {
                    let Some(user_id) = user_id else {
                        return Ok(Vec::new());
                    };
                    repository::fetch_questions(&api, category, &user_id).await
                }
            },
        );

        // The fetched set is the source of truth for how many answers
        // already exist; it reseeds the cached counter.
        create_effect(move |_| {
            if let Some(Ok(questions)) = questions_resource.get() {
                progress.seed_count(category, repository::answered_count(&questions));
            }
        });

        Self {
            category,
            questions_resource,
            filter: create_rw_signal(QaFilter::All),
            expanded: create_rw_signal(HashSet::new()),
            generating: create_rw_signal(None),
            card_errors: create_rw_signal(HashMap::new()),
            api: store_value(api),
            progress,
        }
    }

    pub fn questions(&self) -> Vec<Question> {
        self.questions_resource
            .get()
            .and_then(|r| r.ok())
            .unwrap_or_default()
    }

    pub fn filter_count(&self, filter: QaFilter) -> usize {
        self.questions()
            .iter()
            .filter(|q| filter.matches(q))
            .count()
    }

    pub fn toggle_expanded(&self, question_id: i64) {
        self.expanded.update(|set| {
            if !set.remove(&question_id) {
                set.insert(question_id);
            }
        });
    }

    /// Generate the answer for one question. On success the answer lands in
    /// the fetched set, the card expands, and the category counter bumps.
    pub fn generate(&self, question_id: i64) {
        if self.generating.get_untracked().is_some() {
            return;
        }
        self.generating.set(Some(question_id));
        self.card_errors.update(|errors| {
            errors.remove(&question_id);
        });

        let api = self.api.get_value();
        let progress = self.progress;
        let category = self.category;
        let questions_resource = self.questions_resource;
        let expanded = self.expanded;
        let generating = self.generating;
        let card_errors = self.card_errors;
        spawn_local(async move {
            match api.generate_answer(question_id).await {
                Ok(resp) => {
                    questions_resource.update(|current| {
                        if let Some(Ok(questions)) = current {
                            if let Some(q) = questions.iter_mut().find(|q| q.id == question_id) {
                                q.answer = Some(resp.answer);
                            }
                        }
                    });
                    progress.increment(category);
                    expanded.update(|set| {
                        set.insert(question_id);
                    });
                }
                Err(err) => {
                    card_errors.update(|errors| {
                        errors.insert(question_id, err);
                    });
                }
            }
            generating.set(None);
        });
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn expansion_toggles_per_question() {
        with_runtime(|| {
            let vm = QaViewModel::new(QuestionCategory::Role);
            vm.toggle_expanded(7);
            assert!(vm.expanded.get().contains(&7));
            vm.toggle_expanded(7);
            assert!(!vm.expanded.get().contains(&7));
        });
    }

    #[test]
    fn counter_writes_target_the_store_resolved_at_setup() {
        with_runtime(|| {
            let store = ProgressStore::new();
            provide_context(store);
            let vm = QaViewModel::new(QuestionCategory::Role);
            // A store provided later must not re-bind the view model's
            // counter; writes have to land in the store from setup time.
            provide_context(ProgressStore::new());
            vm.progress.increment(QuestionCategory::Role);
            assert_eq!(store.count(QuestionCategory::Role), 1);
        });
    }

    #[test]
    fn view_model_starts_unfiltered() {
        with_runtime(|| {
            let vm = QaViewModel::new(QuestionCategory::Company);
            assert_eq!(vm.filter.get(), QaFilter::All);
            assert!(vm.generating.get().is_none());
            assert!(vm.card_errors.get().is_empty());
        });
    }
}
