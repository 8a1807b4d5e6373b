//! Request controller: owns the typed location and the lookup status.

use tokio::sync::watch;
use tracing::{info, warn};

use crate::{model::Reading, model::WeatherRequest, provider::WeatherProvider};

pub const INVALID_LOCATION_MESSAGE: &str = "Please Enter a Valid Location.";
pub const LOOKUP_FAILED_MESSAGE: &str = "City not found.Please try again";

/// What the widget currently shows.
///
/// A reading and an error can never be shown together.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Error(String),
    Ready(Reading),
}

impl Status {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn reading(&self) -> Option<&Reading> {
        match self {
            Self::Ready(reading) => Some(reading),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct WeatherWidget {
    provider: Box<dyn WeatherProvider>,
    input: String,
    status: watch::Sender<Status>,
}

impl WeatherWidget {
    pub fn new(provider: Box<dyn WeatherProvider>) -> Self {
        let (status, _) = watch::channel(Status::Idle);
        Self { provider, input: String::new(), status }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn status(&self) -> Status {
        self.status.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.status.borrow().is_loading()
    }

    pub fn reading(&self) -> Option<Reading> {
        self.status.borrow().reading().cloned()
    }

    pub fn error(&self) -> Option<String> {
        self.status.borrow().error().map(str::to_string)
    }

    /// Watch status changes, e.g. to draw a loading indicator.
    pub fn subscribe(&self) -> watch::Receiver<Status> {
        self.status.subscribe()
    }

    /// Look up the current input and return the resulting status.
    ///
    /// Blank input fails validation without touching the network. Any
    /// provider failure is reported with the same generic message.
    pub async fn submit(&mut self) -> Status {
        let Some(request) = WeatherRequest::from_input(&self.input) else {
            return self.publish(Status::Error(INVALID_LOCATION_MESSAGE.to_string()));
        };

        self.publish(Status::Loading);

        let outcome = match self.provider.current(&request).await {
            Ok(reading) => {
                info!(location = %reading.location, provider = self.provider.name(), "Got weather reading");
                Status::Ready(reading)
            }
            Err(err) => {
                warn!(location = %request.location, error = %err, "Weather lookup failed");
                Status::Error(LOOKUP_FAILED_MESSAGE.to_string())
            }
        };

        self.publish(outcome)
    }

    fn publish(&self, status: Status) -> Status {
        self.status.send_replace(status.clone());
        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WeatherError;
    use async_trait::async_trait;
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };
    use tokio::sync::Notify;

    #[derive(Debug)]
    enum Outcome {
        Found(Reading),
        NotFound,
    }

    /// Provider that answers with a fixed outcome, optionally waiting for a
    /// release signal first.
    #[derive(Debug)]
    struct FakeProvider {
        outcome: Outcome,
        calls: Arc<AtomicUsize>,
        release: Option<Arc<Notify>>,
    }

    impl FakeProvider {
        fn new(outcome: Outcome) -> Self {
            Self { outcome, calls: Arc::new(AtomicUsize::new(0)), release: None }
        }

        fn gated(outcome: Outcome, release: Arc<Notify>) -> Self {
            Self { release: Some(release), ..Self::new(outcome) }
        }
    }

    #[async_trait]
    impl WeatherProvider for FakeProvider {
        fn name(&self) -> &'static str {
            "fake"
        }

        async fn current(&self, request: &WeatherRequest) -> Result<Reading, WeatherError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            assert_eq!(request.location, request.location.trim());

            if let Some(release) = &self.release {
                release.notified().await;
            }

            match &self.outcome {
                Outcome::Found(reading) => Ok(reading.clone()),
                Outcome::NotFound => Err(WeatherError::Status {
                    provider: "fake",
                    status: reqwest::StatusCode::BAD_REQUEST,
                    body: "No matching location found.".into(),
                }),
            }
        }
    }

    fn paris() -> Reading {
        Reading::celsius(15.0, "Cloudy".into(), "Paris".into())
    }

    #[tokio::test]
    async fn starts_idle() {
        let widget = WeatherWidget::new(Box::new(FakeProvider::new(Outcome::NotFound)));
        assert_eq!(widget.status(), Status::Idle);
        assert_eq!(widget.input(), "");
        assert!(!widget.is_loading());
    }

    #[tokio::test]
    async fn blank_input_is_rejected_without_a_lookup() {
        let provider = FakeProvider::new(Outcome::Found(paris()));
        let calls = provider.calls.clone();
        let mut widget = WeatherWidget::new(Box::new(provider));

        widget.set_input("Paris");
        widget.submit().await;
        assert_eq!(widget.reading(), Some(paris()));

        widget.set_input("   ");
        let status = widget.submit().await;

        assert_eq!(status, Status::Error(INVALID_LOCATION_MESSAGE.into()));
        assert_eq!(widget.reading(), None);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn successful_lookup_sets_reading() {
        let mut widget = WeatherWidget::new(Box::new(FakeProvider::new(Outcome::Found(paris()))));
        widget.set_input("  paris ");

        let status = widget.submit().await;

        assert_eq!(
            status,
            Status::Ready(Reading {
                temperature: 15.0,
                description: "Cloudy".into(),
                location: "Paris".into(),
                unit: "C".into(),
            })
        );
        assert_eq!(widget.error(), None);
        assert_eq!(widget.input(), "  paris ");
    }

    #[tokio::test]
    async fn failed_lookup_sets_generic_error() {
        let mut widget = WeatherWidget::new(Box::new(FakeProvider::new(Outcome::NotFound)));
        widget.set_input("Atlantis");

        widget.submit().await;

        assert_eq!(widget.error().as_deref(), Some(LOOKUP_FAILED_MESSAGE));
        assert_eq!(widget.reading(), None);
        assert!(!widget.is_loading());
    }

    #[tokio::test]
    async fn success_clears_previous_error() {
        let mut widget = WeatherWidget::new(Box::new(FakeProvider::new(Outcome::Found(paris()))));

        widget.submit().await;
        assert_eq!(widget.error().as_deref(), Some(INVALID_LOCATION_MESSAGE));

        widget.set_input("Paris");
        widget.submit().await;
        assert_eq!(widget.error(), None);
        assert_eq!(widget.reading(), Some(paris()));
    }

    async fn assert_loading_only_while_pending(outcome: Outcome, expected_error: Option<&str>) {
        let release = Arc::new(Notify::new());
        let mut widget = WeatherWidget::new(Box::new(FakeProvider::gated(outcome, release.clone())));
        widget.set_input("Paris");
        let mut rx = widget.subscribe();
        assert!(!rx.borrow().is_loading());

        let observer = async {
            rx.changed().await.expect("widget alive");
            assert!(rx.borrow_and_update().is_loading());
            release.notify_one();

            rx.changed().await.expect("widget alive");
            let settled = rx.borrow_and_update().clone();
            assert!(!settled.is_loading());
            settled
        };

        let (status, observed) = tokio::join!(widget.submit(), observer);

        assert_eq!(status, observed);
        assert_eq!(status.error(), expected_error);
        assert!(!widget.is_loading());
    }

    #[tokio::test]
    async fn loading_only_while_lookup_pending_on_success() {
        assert_loading_only_while_pending(Outcome::Found(paris()), None).await;
    }

    #[tokio::test]
    async fn loading_only_while_lookup_pending_on_failure() {
        assert_loading_only_while_pending(Outcome::NotFound, Some(LOOKUP_FAILED_MESSAGE)).await;
    }
}
