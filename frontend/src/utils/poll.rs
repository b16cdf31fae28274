//! Bounded status polling for backend jobs (question generation, resume
//! analysis, quiz generation). One follow-up check is scheduled at a time;
//! delays grow exponentially up to a cap and the attempt budget turns an
//! unavailable backend into an explicit `TimedOut` instead of an endless loop.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use crate::api::ApiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollPolicy {
    pub initial_delay_ms: u32,
    pub max_delay_ms: u32,
    pub backoff_factor: u32,
    pub max_attempts: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        // First retry after the backend's typical generation latency.
        Self {
            initial_delay_ms: 5_000,
            max_delay_ms: 60_000,
            backoff_factor: 2,
            max_attempts: 20,
        }
    }
}

/// What a single status check observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollStep<T> {
    Pending,
    Ready(T),
}

/// Terminal signal handed back to the owning view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome<T> {
    Done(T),
    Failed(ApiError),
    TimedOut,
    Cancelled,
}

/// Shared flag flipped by the owning view on unmount. The poller checks it
/// before every state-affecting step, so nothing lands after cancellation.
#[derive(Clone, Default)]
pub struct CancelToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

pub(crate) fn next_delay_ms(policy: &PollPolicy, current: u32) -> u32 {
    current
        .saturating_mul(policy.backoff_factor)
        .min(policy.max_delay_ms)
}

async fn sleep_ms(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}

/// Run `check` until it reports a terminal step, fails, exhausts the attempt
/// budget, or is cancelled. The first check fires immediately; follow-ups are
/// strictly sequential, so at most one status request is in flight.
pub async fn run<T, F, Fut>(policy: &PollPolicy, cancel: &CancelToken, mut check: F) -> PollOutcome<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<PollStep<T>, ApiError>>,
{
    let mut delay = policy.initial_delay_ms;
    for attempt in 1..=policy.max_attempts {
        if cancel.is_cancelled() {
            return PollOutcome::Cancelled;
        }
        match check().await {
            Ok(PollStep::Ready(value)) => {
                if cancel.is_cancelled() {
                    return PollOutcome::Cancelled;
                }
                return PollOutcome::Done(value);
            }
            Ok(PollStep::Pending) => {
                if cancel.is_cancelled() {
                    return PollOutcome::Cancelled;
                }
            }
            Err(err) => {
                if cancel.is_cancelled() {
                    return PollOutcome::Cancelled;
                }
                return PollOutcome::Failed(err);
            }
        }
        if attempt == policy.max_attempts {
            break;
        }
        sleep_ms(delay).await;
        delay = next_delay_ms(policy, delay);
    }
    if cancel.is_cancelled() {
        PollOutcome::Cancelled
    } else {
        PollOutcome::TimedOut
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    fn fast_policy(max_attempts: u32) -> PollPolicy {
        PollPolicy {
            initial_delay_ms: 1,
            max_delay_ms: 2,
            backoff_factor: 2,
            max_attempts,
        }
    }

    #[tokio::test]
    async fn pending_responses_never_terminate_by_themselves() {
        let checks = Rc::new(Cell::new(0u32));
        let counter = checks.clone();
        let outcome: PollOutcome<()> = run(&fast_policy(4), &CancelToken::new(), move || {
            let counter = counter.clone();
            async move {
                counter.set(counter.get() + 1);
                Ok(PollStep::Pending)
            }
        })
        .await;
        assert_eq!(outcome, PollOutcome::TimedOut);
        assert_eq!(checks.get(), 4);
    }

    #[tokio::test]
    async fn qualifying_payload_finishes_the_poll() {
        let checks = Rc::new(Cell::new(0u32));
        let counter = checks.clone();
        let outcome = run(&fast_policy(10), &CancelToken::new(), move || {
            let counter = counter.clone();
            async move {
                counter.set(counter.get() + 1);
                if counter.get() < 3 {
                    Ok(PollStep::Pending)
                } else {
                    Ok(PollStep::Ready("generated"))
                }
            }
        })
        .await;
        assert_eq!(outcome, PollOutcome::Done("generated"));
        assert_eq!(checks.get(), 3);
    }

    #[tokio::test]
    async fn request_failure_is_terminal() {
        let checks = Rc::new(Cell::new(0u32));
        let counter = checks.clone();
        let outcome: PollOutcome<()> = run(&fast_policy(10), &CancelToken::new(), move || {
            let counter = counter.clone();
            async move {
                counter.set(counter.get() + 1);
                Err(ApiError::request_failed("status check failed"))
            }
        })
        .await;
        assert!(matches!(outcome, PollOutcome::Failed(_)));
        assert_eq!(checks.get(), 1);
    }

    #[tokio::test]
    async fn cancelled_token_stops_before_the_first_check() {
        let checks = Rc::new(Cell::new(0u32));
        let counter = checks.clone();
        let token = CancelToken::new();
        token.cancel();
        let outcome: PollOutcome<()> = run(&fast_policy(10), &token, move || {
            let counter = counter.clone();
            async move {
                counter.set(counter.get() + 1);
                Ok(PollStep::Pending)
            }
        })
        .await;
        assert_eq!(outcome, PollOutcome::Cancelled);
        assert_eq!(checks.get(), 0);
    }

    #[tokio::test]
    async fn cancellation_during_a_check_suppresses_the_result() {
        // Simulates the owning view unmounting while a request is in flight:
        // the Ready payload must not surface as Done.
        let checks = Rc::new(Cell::new(0u32));
        let counter = checks.clone();
        let token = CancelToken::new();
        let inner = token.clone();
        let outcome = run(&fast_policy(10), &token, move || {
            let counter = counter.clone();
            let inner = inner.clone();
            async move {
                counter.set(counter.get() + 1);
                inner.cancel();
                Ok(PollStep::Ready("late"))
            }
        })
        .await;
        assert_eq!(outcome, PollOutcome::Cancelled);
        assert_eq!(checks.get(), 1);
    }
}
