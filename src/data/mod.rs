pub mod app_settings;
pub mod info_panel;
pub mod persistence;

pub use app_settings::AppSettings;
pub use info_panel::{InfoPanelData, PromotedApp};
pub use persistence::Persistable;
