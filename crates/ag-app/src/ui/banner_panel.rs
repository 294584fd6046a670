use egui::{Color32, Context, RichText};
use crate::events::UiEvent;
use crate::ui::{UiComponent, UiContext};

#[derive(Default)]
pub struct BannerPanel {}

impl UiComponent for BannerPanel {
    fn show(&mut self, ctx: &Context, ui_ctx: &UiContext) {
        if ui_ctx.view.banners.is_empty() {
            return;
        }

        egui::TopBottomPanel::top("error_banners").show(ctx, |ui| {
            for banner in &ui_ctx.view.banners {
                egui::Frame::group(ui.style())
                    .fill(Color32::from_rgb(90, 25, 25))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(&banner.message).color(Color32::from_rgb(255, 170, 170)));
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                if ui.small_button("✖").clicked() {
                                    ui_ctx.send_event(UiEvent::DismissError(banner.id));
                                }
                            });
                        });
                    });
            }
        });
    }
}
