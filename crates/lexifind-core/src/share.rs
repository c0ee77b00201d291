use async_trait::async_trait;
use lexifind_types::{ShareMethod, SharePayload};

/// Result of one mechanism's attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareAttempt {
    Shared,
    /// The user backed out; the chain stops without trying anything else
    Cancelled,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Completed(ShareMethod),
    Cancelled,
    /// Every mechanism was unavailable or failed
    Exhausted,
}

/// One way of getting the app link to the user
#[async_trait]
pub trait ShareMechanism: Send + Sync {
    fn method(&self) -> ShareMethod;

    /// Whether this environment can satisfy the mechanism at all
    fn is_available(&self, payload: &SharePayload) -> bool;

    async fn share(&self, payload: &SharePayload) -> ShareAttempt;
}

/// Ordered fallback list: first mechanism that succeeds wins
#[derive(Default)]
pub struct ShareChain {
    mechanisms: Vec<Box<dyn ShareMechanism>>,
}

impl ShareChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, mechanism: impl ShareMechanism + 'static) -> Self {
        self.mechanisms.push(Box::new(mechanism));
        self
    }

    pub fn len(&self) -> usize {
        self.mechanisms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mechanisms.is_empty()
    }

    pub async fn run(&self, payload: &SharePayload) -> ShareOutcome {
        for mechanism in &self.mechanisms {
            let method = mechanism.method();

            if !mechanism.is_available(payload) {
                tracing::debug!(?method, "share mechanism unavailable");
                continue;
            }

            match mechanism.share(payload).await {
                ShareAttempt::Shared => {
                    tracing::info!(?method, "shared app link");
                    return ShareOutcome::Completed(method);
                }
                ShareAttempt::Cancelled => {
                    tracing::debug!(?method, "share cancelled by user");
                    return ShareOutcome::Cancelled;
                }
                ShareAttempt::Failed(reason) => {
                    tracing::warn!(?method, "share failed, trying next: {reason}");
                }
            }
        }

        ShareOutcome::Exhausted
    }
}
