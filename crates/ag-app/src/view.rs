//! Pure description of what the window shows. The egui panels only
//! draw a [`ViewTree`]; they never look at the controller directly.

use crate::controller::{COPIED_LABEL, COPY_LABEL, Controller, CopyState, SectionBody};
use crate::events::{BannerId, CardId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewTree {
    pub loading: bool,
    pub banners: Vec<BannerNode>,
    /// `None` until a response has been rendered, and again after each submit
    pub results: Option<ResultsNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BannerNode {
    pub id: BannerId,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsNode {
    pub tabs: Vec<TabNode>,
    pub sections: Vec<SectionNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TabNode {
    pub platform: String,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionNode {
    pub platform: String,
    pub active: bool,
    pub content: SectionContent,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SectionContent {
    Cards(Vec<CardNode>),
    Error {
        message: String,
        details: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardNode {
    pub id: CardId,
    pub variant: String,
    pub headline: String,
    pub description: String,
    pub cta: String,
    pub copy_label: &'static str,
}

impl CardNode {
    /// Text placed on the clipboard by the card's copy control
    pub fn clipboard_text(&self) -> String {
        format!("{}\n\n{}\n\n{}", self.headline, self.description, self.cta)
    }

    pub fn is_copied(&self) -> bool {
        self.copy_label == COPIED_LABEL
    }
}

impl ViewTree {
    pub fn card(&self, id: CardId) -> Option<&CardNode> {
        let section = self.results.as_ref()?.sections.get(id.section)?;
        match &section.content {
            SectionContent::Cards(cards) => cards.iter().find(|c| c.id == id),
            SectionContent::Error { .. } => None,
        }
    }

    pub fn active_section(&self) -> Option<&SectionNode> {
        self.results.as_ref()?.sections.iter().find(|s| s.active)
    }
}

pub fn render(controller: &Controller) -> ViewTree {
    let banners = controller
        .banners()
        .iter()
        .map(|b| BannerNode {
            id: b.id,
            message: b.message.clone(),
        })
        .collect();

    let results = controller.results().map(|results| {
        let tabs = results
            .sections
            .iter()
            .enumerate()
            .map(|(idx, s)| TabNode {
                platform: s.platform.clone(),
                label: s.label.clone(),
                active: results.active == Some(idx),
            })
            .collect();

        let sections = results
            .sections
            .iter()
            .enumerate()
            .map(|(section_idx, s)| SectionNode {
                platform: s.platform.clone(),
                active: results.active == Some(section_idx),
                content: match &s.body {
                    SectionBody::Cards(cards) => SectionContent::Cards(
                        cards
                            .iter()
                            .enumerate()
                            .map(|(card_idx, card)| CardNode {
                                id: CardId {
                                    generation: results.generation,
                                    section: section_idx,
                                    card: card_idx,
                                },
                                variant: card.variant.clone(),
                                headline: card.ad.headline.clone(),
                                description: card.ad.description.clone(),
                                cta: card.ad.cta.clone(),
                                copy_label: match card.copy {
                                    CopyState::Idle => COPY_LABEL,
                                    CopyState::Copied { .. } => COPIED_LABEL,
                                },
                            })
                            .collect(),
                    ),
                    SectionBody::Error { message, details } => SectionContent::Error {
                        message: message.clone(),
                        details: details.clone(),
                    },
                },
            })
            .collect();

        ResultsNode { tabs, sections }
    });

    ViewTree {
        loading: controller.is_loading(),
        banners,
        results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ag_core::{FormInput, GenerateAdsResponse, PlatformPayload};
    use crate::events::{AppEvent, RequestId, UiEvent};

    fn render_response(c: &mut Controller, pairs: &[(&str, &str)]) -> ViewTree {
        c.dispatch(UiEvent::Submit(FormInput::default()).into());
        let platforms = pairs
            .iter()
            .map(|(platform, raw)| PlatformPayload {
                platform: platform.to_string(),
                raw: raw.to_string(),
            })
            .collect();
        c.dispatch(
            AppEvent::ResponseSettled {
                request: RequestId::new(),
                outcome: Ok(GenerateAdsResponse::Success(platforms)),
            }
            .into(),
        );
        render(c)
    }

    #[test]
    fn initial_tree_is_empty() {
        let tree = render(&Controller::new());
        assert_eq!(tree, ViewTree::default());
    }

    #[test]
    fn loading_tree_has_no_results() {
        let mut c = Controller::new();
        c.dispatch(UiEvent::Submit(FormInput::default()).into());
        let tree = render(&c);
        assert!(tree.loading);
        assert!(tree.results.is_none());
    }

    #[test]
    fn single_google_card() {
        let mut c = Controller::new();
        let tree = render_response(
            &mut c,
            &[("google", r#"{"v1":{"headline":"H","description":"D","cta":"C"}}"#)],
        );

        assert!(!tree.loading);
        let results = tree.results.as_ref().unwrap();
        assert_eq!(
            results.tabs,
            vec![TabNode {
                platform: "google".into(),
                label: "Google".into(),
                active: true,
            }]
        );

        let section = tree.active_section().unwrap();
        assert_eq!(section.platform, "google");
        let SectionContent::Cards(cards) = &section.content else {
            panic!("expected cards");
        };
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].variant, "v1");
        assert_eq!(cards[0].copy_label, COPY_LABEL);
        assert_eq!(cards[0].clipboard_text(), "H\n\nD\n\nC");
    }

    #[test]
    fn exactly_one_section_active() {
        let mut c = Controller::new();
        render_response(&mut c, &[("facebook", "{}"), ("instagram", "{}"), ("linkedin", "{}")]);
        c.dispatch(UiEvent::SelectTab("instagram".into()).into());
        let tree = render(&c);

        let results = tree.results.unwrap();
        let active_tabs: Vec<&str> = results.tabs.iter().filter(|t| t.active).map(|t| t.platform.as_str()).collect();
        let active_sections: Vec<&str> = results.sections.iter().filter(|s| s.active).map(|s| s.platform.as_str()).collect();
        assert_eq!(active_tabs, vec!["instagram"]);
        assert_eq!(active_sections, vec!["instagram"]);
    }

    #[test]
    fn card_lookup_misses_error_sections() {
        let mut c = Controller::new();
        let tree = render_response(&mut c, &[("facebook", "not json")]);
        let generation = c.results().unwrap().generation;
        assert!(tree.card(CardId { generation, section: 0, card: 0 }).is_none());
    }

    #[test]
    fn no_op_event_renders_identical_tree() {
        let mut c = Controller::new();
        let before = render_response(&mut c, &[("facebook", "{}"), ("instagram", "{}")]);

        c.dispatch(UiEvent::SelectTab("facebook".into()).into());
        assert_eq!(render(&c), before);

        c.dispatch(UiEvent::SelectTab("instagram".into()).into());
        assert_ne!(render(&c), before);
    }
}
