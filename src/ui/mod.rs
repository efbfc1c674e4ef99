mod app;
mod panels;
mod state;
pub mod forms;

pub use app::CertDeployApp;
pub use forms::AliyunClbForm;
pub use state::AppState;
