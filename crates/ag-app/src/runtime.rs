use std::sync::Arc;
use log::{debug, error};
use tokio::runtime::Handle;
use tracing::Instrument;
use winit::event_loop::EventLoopProxy;
use crate::backend::AdsApi;
use crate::clipboard::Clipboard;
use crate::controller::Effect;
use crate::error::AppError;
use crate::events::{AgEvent, AppEvent};

/// Where effect completions are delivered
pub trait EventSink: Send + Sync {
    fn send(&self, event: AgEvent) -> Result<(), AppError>;
}

impl EventSink for EventLoopProxy<AgEvent> {
    fn send(&self, event: AgEvent) -> Result<(), AppError> {
        self.send_event(event).map_err(|_| AppError::EventLoopClosed)
    }
}

/// Runs controller effects on the tokio runtime.
#[derive(Clone)]
pub struct EffectRunner {
    handle: Handle,
    sink: Arc<dyn EventSink>,
    backend: Arc<dyn AdsApi>,
    clipboard: Arc<dyn Clipboard>,
}

impl EffectRunner {
    pub fn new(
        handle: Handle,
        sink: Arc<dyn EventSink>,
        backend: Arc<dyn AdsApi>,
        clipboard: Arc<dyn Clipboard>,
    ) -> Self {
        Self {
            handle,
            sink,
            backend,
            clipboard,
        }
    }

    pub fn run(&self, effect: Effect) {
        debug!("Running effect {:?}", effect);
        let sink = self.sink.clone();

        match effect {
            Effect::SendRequest { request, input } => {
                let backend = self.backend.clone();
                let span = tracing::info_span!("generate_ads", %request);
                self.handle.spawn(
                    async move {
                        let outcome = backend.generate_ads(&input).await;
                        emit(&*sink, AppEvent::ResponseSettled { request, outcome });
                    }
                    .instrument(span),
                );
            }
            Effect::WriteClipboard { card, text } => {
                let clipboard = self.clipboard.clone();
                self.handle.spawn(async move {
                    let outcome = clipboard.write_text(text).await;
                    emit(&*sink, AppEvent::CopyFinished { card, outcome });
                });
            }
            Effect::ScheduleCopyReset { card, stamp, after } => {
                self.handle.spawn(async move {
                    tokio::time::sleep(after).await;
                    emit(&*sink, AppEvent::CopyReset { card, stamp });
                });
            }
            Effect::ScheduleErrorExpiry { banner, after } => {
                self.handle.spawn(async move {
                    tokio::time::sleep(after).await;
                    emit(&*sink, AppEvent::ErrorExpired(banner));
                });
            }
        }
    }
}

fn emit(sink: &dyn EventSink, event: AppEvent) {
    if let Err(e) = sink.send(event.into()) {
        error!("Dropping completion: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;
    use async_trait::async_trait;
    use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
    use tokio::time::Instant;
    use ag_core::{FormInput, GenerateAdsResponse, PlatformPayload};
    use crate::controller::{COPIED_LABEL, COPY_LABEL, Controller};
    use crate::error::{BackendError, ClipboardError};
    use crate::events::{CardId, UiEvent};
    use crate::view;

    struct ChannelSink(UnboundedSender<AgEvent>);

    impl EventSink for ChannelSink {
        fn send(&self, event: AgEvent) -> Result<(), AppError> {
            self.0.send(event).map_err(|_| AppError::EventLoopClosed)
        }
    }

    struct FakeBackend {
        response: Result<GenerateAdsResponse, BackendError>,
        calls: Mutex<Vec<FormInput>>,
    }

    #[async_trait]
    impl AdsApi for FakeBackend {
        async fn generate_ads(&self, input: &FormInput) -> Result<GenerateAdsResponse, BackendError> {
            self.calls.lock().unwrap().push(input.clone());
            self.response.clone()
        }
    }

    #[derive(Default)]
    struct FakeClipboard {
        fail: bool,
        written: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Clipboard for FakeClipboard {
        async fn write_text(&self, text: String) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::Unavailable("no display".into()));
            }
            self.written.lock().unwrap().push(text);
            Ok(())
        }
    }

    struct Harness {
        controller: Controller,
        runner: EffectRunner,
        rx: UnboundedReceiver<AgEvent>,
        backend: Arc<FakeBackend>,
        clipboard: Arc<FakeClipboard>,
    }

    impl Harness {
        fn new(response: Result<GenerateAdsResponse, BackendError>, clipboard: FakeClipboard) -> Self {
            let (tx, rx) = unbounded_channel();
            let backend = Arc::new(FakeBackend {
                response,
                calls: Mutex::new(Vec::new()),
            });
            let clipboard = Arc::new(clipboard);
            let runner = EffectRunner::new(
                Handle::current(),
                Arc::new(ChannelSink(tx)),
                backend.clone(),
                clipboard.clone(),
            );
            Self {
                controller: Controller::new(),
                runner,
                rx,
                backend,
                clipboard,
            }
        }

        fn dispatch(&mut self, event: AgEvent) {
            for effect in self.controller.dispatch(event) {
                self.runner.run(effect);
            }
        }

        /// Waits for the next completion and feeds it to the controller
        async fn pump(&mut self) -> AgEvent {
            let event = self.rx.recv().await.expect("sink closed");
            self.dispatch(event.clone());
            event
        }
    }

    fn google() -> GenerateAdsResponse {
        GenerateAdsResponse::Success(vec![PlatformPayload {
            platform: "google".into(),
            raw: r#"{"v1":{"headline":"H","description":"D","cta":"C"}}"#.into(),
        }])
    }

    #[tokio::test(start_paused = true)]
    async fn submit_round_trip() {
        let mut h = Harness::new(Ok(google()), FakeClipboard::default());
        let input = FormInput {
            company_name: "Acme".into(),
            ..FormInput::default()
        };

        h.dispatch(UiEvent::Submit(input.clone()).into());
        assert!(view::render(&h.controller).loading);

        let event = h.pump().await;
        assert!(matches!(event, AgEvent::App(AppEvent::ResponseSettled { .. })));
        assert_eq!(*h.backend.calls.lock().unwrap(), vec![input]);

        let tree = view::render(&h.controller);
        assert!(!tree.loading);
        assert_eq!(tree.results.unwrap().tabs[0].label, "Google");
    }

    #[tokio::test(start_paused = true)]
    async fn transport_failure_clears_loading_and_shows_banner() {
        let mut h = Harness::new(
            Err(BackendError::Transport("connection refused".into())),
            FakeClipboard::default(),
        );

        h.dispatch(UiEvent::Submit(FormInput::default()).into());
        h.pump().await;

        let tree = view::render(&h.controller);
        assert!(!tree.loading);
        assert!(tree.results.is_none());
        assert!(tree.banners[0].message.contains("connection refused"));
    }

    #[tokio::test(start_paused = true)]
    async fn copy_label_reverts_after_two_seconds() {
        let mut h = Harness::new(Ok(google()), FakeClipboard::default());
        h.dispatch(UiEvent::Submit(FormInput::default()).into());
        h.pump().await;

        let generation = h.controller.results().unwrap().generation;
        let card = CardId { generation, section: 0, card: 0 };

        h.dispatch(UiEvent::CopyRequested(card).into());
        h.pump().await;
        assert_eq!(*h.clipboard.written.lock().unwrap(), vec!["H\n\nD\n\nC".to_string()]);
        assert_eq!(view::render(&h.controller).card(card).unwrap().copy_label, COPIED_LABEL);

        let copied_at = Instant::now();
        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert!(h.rx.try_recv().is_err());
        assert_eq!(view::render(&h.controller).card(card).unwrap().copy_label, COPIED_LABEL);

        let event = h.pump().await;
        assert!(matches!(event, AgEvent::App(AppEvent::CopyReset { .. })));
        assert!(copied_at.elapsed() >= Duration::from_secs(2));
        assert_eq!(view::render(&h.controller).card(card).unwrap().copy_label, COPY_LABEL);
    }

    #[tokio::test(start_paused = true)]
    async fn clipboard_failure_surfaces_banner_that_expires() {
        let mut h = Harness::new(
            Ok(google()),
            FakeClipboard {
                fail: true,
                ..FakeClipboard::default()
            },
        );
        h.dispatch(UiEvent::Submit(FormInput::default()).into());
        h.pump().await;

        let generation = h.controller.results().unwrap().generation;
        let card = CardId { generation, section: 0, card: 0 };
        h.dispatch(UiEvent::CopyRequested(card).into());
        h.pump().await;

        let tree = view::render(&h.controller);
        assert_eq!(tree.banners.len(), 1);
        assert_eq!(tree.card(card).unwrap().copy_label, COPY_LABEL);

        let shown_at = Instant::now();
        h.pump().await;
        assert!(shown_at.elapsed() >= Duration::from_secs(5));
        assert!(view::render(&h.controller).banners.is_empty());
    }
}
