use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use kanal::AsyncReceiver;
use lexifind_config::Config;
use lexifind_core::ShareChain;
use lexifind_generator::{GenerateError, ProviderMetadata, WordGenerator};
use lexifind_types::{
    AppEvent, CategorizedResults, Difficulty, Query, SearchView, UiEvent, WordItem,
};
use tokio::sync::oneshot;
use tokio::time::timeout;

use crate::events::EventContext;
use crate::state::AppState;

type Reply = Result<CategorizedResults, GenerateError>;

/// Generator whose replies are scripted per pattern and released by the test
#[derive(Default)]
pub struct FakeGenerator {
    replies: Mutex<HashMap<String, VecDeque<oneshot::Receiver<Reply>>>>,
    queries: Mutex<Vec<Query>>,
}

impl FakeGenerator {
    /// Queue a reply for `pattern` that is delivered when the sender fires
    pub fn gated_reply(&self, pattern: &str) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.replies
            .lock()
            .unwrap()
            .entry(pattern.to_string())
            .or_default()
            .push_back(rx);
        tx
    }

    pub fn reply(&self, pattern: &str, reply: Reply) {
        let _ = self.gated_reply(pattern).send(reply);
    }

    pub fn queries(&self) -> Vec<Query> {
        self.queries.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

#[async_trait]
impl WordGenerator for FakeGenerator {
    async fn generate(&self, query: &Query) -> Result<CategorizedResults, GenerateError> {
        self.queries.lock().unwrap().push(query.clone());

        let pending = self
            .replies
            .lock()
            .unwrap()
            .get_mut(query.pattern())
            .and_then(VecDeque::pop_front);

        match pending {
            Some(rx) => rx.await.unwrap_or(Err(GenerateError::EmptyResponse)),
            None => Err(GenerateError::ApiError("no scripted reply".to_string())),
        }
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Fake".to_string(),
            model: "scripted".to_string(),
            requires_api_key: false,
        }
    }
}

pub struct Harness {
    pub ctx: EventContext,
    pub generator: Arc<FakeGenerator>,
    /// What the handlers sent back to the app itself
    pub inbox_rx: AsyncReceiver<AppEvent>,
    /// What the handlers sent to the UI
    pub ui_rx: AsyncReceiver<AppEvent>,
}

pub fn harness(config: Config) -> Harness {
    let generator = Arc::new(FakeGenerator::default());
    let (inbox_tx, inbox_rx) = kanal::unbounded_async();
    let (app_to_ui_tx, ui_rx) = kanal::unbounded_async();

    let ctx = EventContext {
        state: Arc::new(AppState::new(config)),
        generator: generator.clone(),
        share_chain: Arc::new(ShareChain::new()),
        inbox_tx,
        app_to_ui_tx,
    };

    Harness {
        ctx,
        generator,
        inbox_rx,
        ui_rx,
    }
}

pub fn submit(pattern: &str, difficulty: Difficulty) -> AppEvent {
    AppEvent::UiEvent(UiEvent::Submit {
        pattern: pattern.to_string(),
        difficulty,
    })
}

pub fn word(word: &str, ipa: &str) -> WordItem {
    WordItem {
        word: word.to_string(),
        ipa: ipa.to_string(),
    }
}

pub fn middle_only(item: WordItem) -> CategorizedResults {
    CategorizedResults {
        start: vec![],
        middle: vec![item],
        end: vec![],
    }
}

pub async fn recv(rx: &AsyncReceiver<AppEvent>) -> AppEvent {
    match timeout(Duration::from_secs(2), rx.recv()).await {
        Ok(Ok(event)) => event,
        Ok(Err(e)) => panic!("Channel error: {}", e),
        Err(_) => panic!("Timeout - event never arrived!"),
    }
}

pub async fn recv_view(rx: &AsyncReceiver<AppEvent>) -> SearchView {
    match recv(rx).await {
        AppEvent::ShowSearch(view) => view,
        other => panic!("Wrong event type: {:?}", other),
    }
}
