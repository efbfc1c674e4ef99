pub mod form_panel;
pub mod header_panel;
pub mod status_panel;

pub use form_panel::FormPanel;
pub use header_panel::HeaderPanel;
pub use status_panel::StatusPanel;
