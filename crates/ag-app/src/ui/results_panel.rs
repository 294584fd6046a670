use egui::{Color32, Context, RichText, Ui};
use crate::events::UiEvent;
use crate::ui::{UiComponent, UiContext};
use crate::view::{CardNode, SectionContent};

#[derive(Default)]
pub struct ResultsPanel {}

impl ResultsPanel {
    fn show_card(&self, ui: &mut Ui, ui_ctx: &UiContext, card: &CardNode) {
        egui::Frame::group(ui.style())
            .fill(Color32::from_gray(30))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(card.variant.to_uppercase()).small().color(Color32::GRAY));
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&card.headline).strong().size(16.0));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let label = if card.is_copied() {
                            RichText::new(card.copy_label).color(Color32::GREEN)
                        } else {
                            RichText::new(card.copy_label)
                        };
                        if ui.button(label).clicked() {
                            ui_ctx.send_event(UiEvent::CopyRequested(card.id));
                        }
                    });
                });

                ui.label(&card.description);
                ui.horizontal_wrapped(|ui| {
                    ui.label(RichText::new("Call to Action:").strong());
                    ui.label(&card.cta);
                });
            });

        ui.add_space(5.0);
    }
}

impl UiComponent for ResultsPanel {
    fn show(&mut self, ctx: &Context, ui_ctx: &UiContext) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(results) = &ui_ctx.view.results else {
                if !ui_ctx.view.loading {
                    ui.centered_and_justified(|ui| {
                        ui.label(
                            RichText::new("Fill in the form and generate to see ad copies here")
                                .color(Color32::GRAY)
                        );
                    });
                }
                return;
            };

            if results.tabs.is_empty() {
                ui.label(RichText::new("No ad copy returned").color(Color32::GRAY));
                return;
            }

            ui.horizontal(|ui| {
                for tab in &results.tabs {
                    if ui.selectable_label(tab.active, RichText::new(&tab.label).size(15.0)).clicked() {
                        ui_ctx.send_event(UiEvent::SelectTab(tab.platform.clone()));
                    }
                }
            });
            ui.separator();

            let Some(section) = ui_ctx.view.active_section() else {
                return;
            };

            egui::ScrollArea::vertical()
                .id_salt(&section.platform)
                .auto_shrink([false; 2])
                .show(ui, |ui| match &section.content {
                    SectionContent::Cards(cards) => {
                        for card in cards {
                            self.show_card(ui, ui_ctx, card);
                        }
                    }
                    SectionContent::Error { message, details } => {
                        ui.label(RichText::new(message).color(Color32::RED));
                        if let Some(details) = details {
                            ui.label(RichText::new(details).small().color(Color32::GRAY));
                        }
                    }
                });
        });
    }
}
