use serde::{Deserialize, Serialize};
use crate::model_types::{AiModel, Language};

/// Body of `POST /generate-ads`, read from the form at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormInput {
    pub company_name: String,
    pub landing_url: String,
    pub product_type: String,
    pub ai_model: AiModel,
    pub language: Language,
}

/// Form fields that must be filled in before submitting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    CompanyName,
    LandingUrl,
    ProductType,
}

impl FormField {
    pub fn label(&self) -> &str {
        match self {
            Self::CompanyName => "Company Name",
            Self::LandingUrl => "Landing Page URL",
            Self::ProductType => "Product Type",
        }
    }
}

impl FormInput {
    pub fn missing_fields(&self) -> Vec<FormField> {
        let mut missing = Vec::new();
        if self.company_name.trim().is_empty() {
            missing.push(FormField::CompanyName);
        }
        if self.landing_url.trim().is_empty() {
            missing.push(FormField::LandingUrl);
        }
        if self.product_type.trim().is_empty() {
            missing.push(FormField::ProductType);
        }
        missing
    }

    pub fn is_submittable(&self) -> bool {
        self.missing_fields().is_empty()
    }
}
