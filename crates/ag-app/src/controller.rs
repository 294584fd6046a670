use std::time::Duration;
use log::{info, warn};
use ag_core::{AdCopy, FormInput, GenerateAdsResponse, PlatformAds, platform_label};
use crate::events::{AgEvent, AppEvent, BannerId, CardId, RequestId, UiEvent};
use crate::view;

pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "Copied!";
pub const COPY_RESET_AFTER: Duration = Duration::from_secs(2);
pub const BANNER_TTL: Duration = Duration::from_secs(5);

/// Side effects requested by the controller, executed by the runner.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SendRequest {
        request: RequestId,
        input: FormInput,
    },
    WriteClipboard {
        card: CardId,
        text: String,
    },
    ScheduleCopyReset {
        card: CardId,
        stamp: u64,
        after: Duration,
    },
    ScheduleErrorExpiry {
        banner: BannerId,
        after: Duration,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyState {
    Idle,
    Copied { stamp: u64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardState {
    pub variant: String,
    pub ad: AdCopy,
    pub copy: CopyState,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SectionBody {
    Cards(Vec<CardState>),
    Error {
        message: String,
        details: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlatformSection {
    pub platform: String,
    pub label: String,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Results {
    pub generation: u64,
    pub sections: Vec<PlatformSection>,
    pub active: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub id: BannerId,
    pub message: String,
}

/// All UI state of the ad form. Every change goes through [`Controller::dispatch`].
#[derive(Debug, Default)]
pub struct Controller {
    loading: bool,
    results: Option<Results>,
    banners: Vec<Banner>,
    generation: u64,
    next_banner: u64,
    next_stamp: u64,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn results(&self) -> Option<&Results> {
        self.results.as_ref()
    }

    pub fn banners(&self) -> &[Banner] {
        &self.banners
    }

    pub fn dispatch(&mut self, event: AgEvent) -> Vec<Effect> {
        match event {
            AgEvent::Ui(e) => self.on_ui_event(e),
            AgEvent::App(e) => self.on_app_event(e),
        }
    }

    fn on_ui_event(&mut self, event: UiEvent) -> Vec<Effect> {
        match event {
            UiEvent::Submit(input) => {
                let request = RequestId::new();
                info!(
                    "Submitting request {} for '{}' ({})",
                    request,
                    input.company_name,
                    input.ai_model.id()
                );
                self.loading = true;
                self.results = None;
                vec![Effect::SendRequest { request, input }]
            }
            UiEvent::SelectTab(platform) => {
                if let Some(results) = &mut self.results {
                    match results.sections.iter().position(|s| s.platform == platform) {
                        Some(idx) => results.active = Some(idx),
                        None => warn!("Ignoring selection of unknown platform '{}'", platform),
                    }
                }
                Vec::new()
            }
            UiEvent::CopyRequested(card) => {
                // Copy exactly what is on screen
                let tree = view::render(self);
                match tree.card(card) {
                    Some(node) => vec![Effect::WriteClipboard {
                        card,
                        text: node.clipboard_text(),
                    }],
                    None => {
                        warn!("Ignoring copy for stale card {:?}", card);
                        Vec::new()
                    }
                }
            }
            UiEvent::DismissError(id) => {
                self.banners.retain(|b| b.id != id);
                Vec::new()
            }
        }
    }

    fn on_app_event(&mut self, event: AppEvent) -> Vec<Effect> {
        match event {
            AppEvent::ResponseSettled { request, outcome } => {
                self.loading = false;
                match outcome {
                    Ok(GenerateAdsResponse::Success(platforms)) => {
                        info!("Request {} returned {} platform(s)", request, platforms.len());
                        self.generation += 1;
                        let sections: Vec<PlatformSection> = platforms
                            .iter()
                            .map(|p| PlatformSection {
                                platform: p.platform.clone(),
                                label: platform_label(&p.platform),
                                body: section_body(p.parse()),
                            })
                            .collect();
                        let active = if sections.is_empty() { None } else { Some(0) };
                        self.results = Some(Results {
                            generation: self.generation,
                            sections,
                            active,
                        });
                        Vec::new()
                    }
                    Ok(GenerateAdsResponse::Failure(message)) => {
                        warn!("Request {} rejected by backend: {}", request, message);
                        self.push_banner(message)
                    }
                    Err(e) => {
                        warn!("Request {} failed: {}", request, e);
                        self.push_banner(e.to_string())
                    }
                }
            }
            AppEvent::CopyFinished { card, outcome } => match outcome {
                Ok(()) => {
                    self.next_stamp += 1;
                    let stamp = self.next_stamp;
                    match self.card_mut(card) {
                        Some(state) => {
                            state.copy = CopyState::Copied { stamp };
                            vec![Effect::ScheduleCopyReset {
                                card,
                                stamp,
                                after: COPY_RESET_AFTER,
                            }]
                        }
                        None => Vec::new(),
                    }
                }
                Err(e) => {
                    warn!("Copy of {:?} failed: {}", card, e);
                    self.push_banner(format!("Failed to copy text: {}", e))
                }
            },
            AppEvent::CopyReset { card, stamp } => {
                if let Some(state) = self.card_mut(card) {
                    if state.copy == (CopyState::Copied { stamp }) {
                        state.copy = CopyState::Idle;
                    }
                }
                Vec::new()
            }
            AppEvent::ErrorExpired(id) => {
                self.banners.retain(|b| b.id != id);
                Vec::new()
            }
        }
    }

    fn push_banner(&mut self, message: String) -> Vec<Effect> {
        self.next_banner += 1;
        let id = BannerId(self.next_banner);
        self.banners.push(Banner { id, message });
        vec![Effect::ScheduleErrorExpiry {
            banner: id,
            after: BANNER_TTL,
        }]
    }

    fn card_mut(&mut self, id: CardId) -> Option<&mut CardState> {
        let results = self.results.as_mut().filter(|r| r.generation == id.generation)?;
        match &mut results.sections.get_mut(id.section)?.body {
            SectionBody::Cards(cards) => cards.get_mut(id.card),
            SectionBody::Error { .. } => None,
        }
    }
}

fn section_body(ads: PlatformAds) -> SectionBody {
    match ads {
        PlatformAds::Ads(ads) => SectionBody::Cards(
            ads.into_iter()
                .map(|(variant, ad)| CardState {
                    variant,
                    ad,
                    copy: CopyState::Idle,
                })
                .collect(),
        ),
        PlatformAds::Reported { error, details } => SectionBody::Error {
            message: error,
            details,
        },
        PlatformAds::Invalid(raw) => SectionBody::Error {
            message: raw,
            details: None,
        },
    }
}
