//! 全局错误类型定义

use thiserror::Error;
use serde_json::Error as SerdeJsonError;
use serde_yaml::Error as SerdeYamlError;

#[derive(Error, Debug)]
pub enum UaParserError {
    // 规则配置错误（缺失regex、正则无法编译），加载阶段即失败
    #[error("规则配置错误：{0}")]
    ConfigurationError(String),

    // 规则文件相关错误
    #[error("规则加载失败：{0}")]
    RuleLoadError(String),

    // 检测相关错误
    #[error("解析器未初始化")]
    DetectorNotInitialized,

    // 序列化/反序列化错误
    #[error("JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),
    #[error("YAML解析失败：{0}")]
    YamlError(#[from] SerdeYamlError),
}

// 全局Result类型
pub type UaResult<T> = Result<T, UaParserError>;
