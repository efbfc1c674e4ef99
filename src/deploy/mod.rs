pub mod aliyun_clb;
pub mod context;
pub mod errors;
pub mod record;
pub mod traits;

pub use aliyun_clb::{AliyunClbConfig, ClbField, ResourceType};
pub use context::{DeployEditContext, EditContext};
pub use errors::FieldErrors;
pub use record::DeployRecord;
pub use traits::ProviderConfig;
