pub mod ads;
pub mod error;
pub mod form;
pub mod response;
mod model_types;

pub use ads::{AdCopy, PlatformAds, platform_label};
pub use error::CoreError;
pub use form::{FormField, FormInput};
pub use model_types::{AiModel, Language};
pub use response::{GenerateAdsResponse, PlatformPayload};
