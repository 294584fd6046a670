use std::fmt;
use uuid::Uuid;
use ag_core::{FormInput, GenerateAdsResponse};
use crate::error::{BackendError, ClipboardError};

#[derive(Debug, Clone)]
pub enum AgEvent {
    Ui(UiEvent),
    App(AppEvent),
}

/// Things the user did
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Submit(FormInput),
    SelectTab(String),
    CopyRequested(CardId),
    DismissError(BannerId),
}

/// Completions reported back by the effect runner
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    ResponseSettled {
        request: RequestId,
        outcome: Result<GenerateAdsResponse, BackendError>,
    },
    CopyFinished {
        card: CardId,
        outcome: Result<(), ClipboardError>,
    },
    CopyReset {
        card: CardId,
        stamp: u64,
    },
    ErrorExpired(BannerId),
}

impl From<UiEvent> for AgEvent {
    fn from(e: UiEvent) -> Self {
        Self::Ui(e)
    }
}

impl From<AppEvent> for AgEvent {
    fn from(e: AppEvent) -> Self {
        Self::App(e)
    }
}

/// Identifies one submission in the logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A rendered ad card. `generation` is bumped on every render, so ids
/// from replaced results never match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardId {
    pub generation: u64,
    pub section: usize,
    pub card: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BannerId(pub u64);
