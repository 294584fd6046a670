use serde::{Deserialize, Serialize};

/// Text model the backend uses to write the ad copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AiModel {
    #[serde(rename = "gpt-3.5-turbo")]
    Gpt35Turbo,
    #[serde(rename = "gpt-4")]
    Gpt4,
}

impl AiModel {
    /// Model name for display in UI
    pub fn name(&self) -> &str {
        match self {
            Self::Gpt35Turbo => "GPT-3.5 Turbo",
            Self::Gpt4 => "GPT-4",
        }
    }

    /// Model ID for API communication
    pub fn id(&self) -> &str {
        match self {
            Self::Gpt35Turbo => "gpt-3.5-turbo",
            Self::Gpt4 => "gpt-4",
        }
    }

    /// All available models
    pub fn all() -> [AiModel; 2] {
        [Self::Gpt35Turbo, Self::Gpt4]
    }
}

impl Default for AiModel {
    fn default() -> Self {
        Self::Gpt35Turbo
    }
}

/// Output language of the generated copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Language {
    En,
    Es,
    Fr,
    De,
    DeCh,
    It,
    Pt,
    Nl,
    Pl,
    Ru,
    Ja,
    Ko,
    ZhCn,
    ZhTw,
}

impl Language {
    /// Language code sent to the backend
    pub fn code(&self) -> &str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::De => "de",
            Self::DeCh => "de-ch",
            Self::It => "it",
            Self::Pt => "pt",
            Self::Nl => "nl",
            Self::Pl => "pl",
            Self::Ru => "ru",
            Self::Ja => "ja",
            Self::Ko => "ko",
            Self::ZhCn => "zh-cn",
            Self::ZhTw => "zh-tw",
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::En => "English",
            Self::Es => "Spanish",
            Self::Fr => "French",
            Self::De => "German",
            Self::DeCh => "Swiss German",
            Self::It => "Italian",
            Self::Pt => "Portuguese",
            Self::Nl => "Dutch",
            Self::Pl => "Polish",
            Self::Ru => "Russian",
            Self::Ja => "Japanese",
            Self::Ko => "Korean",
            Self::ZhCn => "Chinese (Simplified)",
            Self::ZhTw => "Chinese (Traditional)",
        }
    }

    pub fn all() -> [Language; 14] {
        [
            Self::En,
            Self::Es,
            Self::Fr,
            Self::De,
            Self::DeCh,
            Self::It,
            Self::Pt,
            Self::Nl,
            Self::Pl,
            Self::Ru,
            Self::Ja,
            Self::Ko,
            Self::ZhCn,
            Self::ZhTw,
        ]
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::En
    }
}
