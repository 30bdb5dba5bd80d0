//! 解析模块：设备解析核心逻辑
pub mod global;
pub mod detector;

// 导出核心接口
pub use self::global::{init_device_parser, init_device_parser_with_config, parse_device};
pub use self::detector::DeviceParser;
