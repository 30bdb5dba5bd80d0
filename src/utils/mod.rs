//! 工具模块
pub mod template;

pub use self::template::{TemplateRenderer, trim_control};
