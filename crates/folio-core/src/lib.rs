pub mod config;
pub mod error;
pub mod navigator;

pub use config::{AppConfig, EasingType, NavigatorConfig, SectionConfig, UiConfig};
pub use error::{Error, Result};
pub use navigator::Navigator;
