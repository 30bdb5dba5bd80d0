//! 规则模块：负责规则文件的加载、数据模型定义
pub mod model;
pub mod loader;

// 导出核心接口
pub use self::model::{Device, DeviceRuleConfig, RegexesFile, OTHER_DEVICE};
pub use self::loader::RuleLoader;
