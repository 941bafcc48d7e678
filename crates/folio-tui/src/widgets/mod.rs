mod nav_bar;
mod section_strip;
mod status_bar;

pub use nav_bar::NavBarWidget;
pub use section_strip::SectionStripWidget;
pub use status_bar::StatusBarWidget;
