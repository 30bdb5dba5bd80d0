//! rsuaparser - Rust ua-parser 设备解析器

// 导出全局错误类型
pub use self::error::{UaParserError, UaResult};

// 导出配置模块
pub use self::config::{GlobalConfig, ConfigManager, CustomConfigBuilder};

// 导出规则模块核心接口
pub use self::rule::{Device, DeviceRuleConfig, RegexesFile, RuleLoader, OTHER_DEVICE};

// 导出工具模块核心接口
pub use self::utils::TemplateRenderer;

// 导出编译模块核心接口
pub use self::compiler::{DevicePattern, RegexFixer, RuleCompiler};

// 导出解析模块核心接口
pub use self::detector::{
    DeviceParser,
    init_device_parser,
    init_device_parser_with_config,
    parse_device,
};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod rule;
pub mod utils;
pub mod compiler;
pub mod detector;
