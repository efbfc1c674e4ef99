pub mod aliyun_clb;

pub use aliyun_clb::AliyunClbForm;
