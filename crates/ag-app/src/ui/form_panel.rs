use egui::{Color32, Context, RichText, TextEdit};
use ag_core::{AiModel, FormInput, Language};
use crate::events::UiEvent;
use crate::ui::{UiComponent, UiContext};

#[derive(Default)]
pub struct FormPanel {
    draft: FormInput,
}

impl UiComponent for FormPanel {
    fn show(&mut self, ctx: &Context, ui_ctx: &UiContext) {
        egui::SidePanel::left("ad_form")
            .default_width(320.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui.heading("Social Ad Copy Generator");
                ui.label(
                    RichText::new("Generate ad copy for multiple platforms")
                        .small()
                        .color(Color32::LIGHT_BLUE)
                );
                ui.separator();

                ui.label("Company Name");
                ui.add(
                    TextEdit::singleline(&mut self.draft.company_name)
                        .id_salt("companyName")
                        .desired_width(f32::INFINITY)
                );
                ui.add_space(5.0);

                ui.label("Landing Page URL");
                ui.add(
                    TextEdit::singleline(&mut self.draft.landing_url)
                        .id_salt("landingUrl")
                        .desired_width(f32::INFINITY)
                        .hint_text("https://")
                );
                ui.add_space(5.0);

                ui.label("Product Type");
                ui.add(
                    TextEdit::singleline(&mut self.draft.product_type)
                        .id_salt("productType")
                        .desired_width(f32::INFINITY)
                );
                ui.add_space(5.0);

                egui::ComboBox::from_id_salt("aiModel")
                    .selected_text(self.draft.ai_model.name().to_string())
                    .width(ui.available_width())
                    .show_ui(ui, |ui| {
                        for model in AiModel::all() {
                            ui.selectable_value(&mut self.draft.ai_model, model, model.name());
                        }
                    });
                ui.add_space(5.0);

                egui::ComboBox::from_id_salt("language")
                    .selected_text(self.draft.language.name().to_string())
                    .width(ui.available_width())
                    .show_ui(ui, |ui| {
                        for lang in Language::all() {
                            ui.selectable_value(&mut self.draft.language, lang, lang.name());
                        }
                    });

                ui.add_space(10.0);

                let submit = ui.add_enabled(
                    self.draft.is_submittable(),
                    egui::Button::new(RichText::new("Generate Ad Copies").size(14.0))
                        .min_size(egui::vec2(ui.available_width(), 30.0))
                );
                if submit.clicked() {
                    ui_ctx.send_event(UiEvent::Submit(self.draft.clone()));
                }

                let missing = self.draft.missing_fields();
                if !missing.is_empty() {
                    let names: Vec<&str> = missing.iter().map(|f| f.label()).collect();
                    ui.label(
                        RichText::new(format!("Required: {}", names.join(", ")))
                            .small()
                            .color(Color32::GRAY)
                    );
                }

                if ui_ctx.view.loading {
                    ui.add_space(10.0);
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Generating ad copies...");
                    });
                }
            });
    }
}
