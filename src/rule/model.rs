//! 规则数据模型定义
//! 仅存储规则数据和解析结果，无任何业务逻辑，支持序列化/反序列化

use std::collections::HashMap;
use std::fmt;
use serde::{Deserialize, Serialize};

/// 未命中任何规则时的默认设备名
pub const OTHER_DEVICE: &str = "Other";

/// 单条设备规则配置（规则文件中的一条记录）
/// 识别的键：regex / regex_flag / device_replacement / brand_replacement / model_replacement，其余键忽略
pub type DeviceRuleConfig = HashMap<String, String>;

/// 设备解析结果
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Device {
    pub device: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl Device {
    pub fn new(device: impl Into<String>, brand: Option<String>, model: Option<String>) -> Self {
        Self {
            device: device.into(),
            brand,
            model,
        }
    }

    /// 未命中任何规则时的默认结果
    pub fn other() -> Self {
        Self::new(OTHER_DEVICE, None, None)
    }

    pub fn is_other(&self) -> bool {
        self.device == OTHER_DEVICE
    }
}

impl Default for Device {
    fn default() -> Self {
        Self::other()
    }
}

// ======== 为 Device 实现 Display trait（用于日志 / Report 输出） ========
impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.brand, &self.model) {
            (Some(b), Some(m)) => write!(f, "{} ({} {})", self.device, b, m),
            (Some(b), None) => write!(f, "{} ({})", self.device, b),
            (None, Some(m)) => write!(f, "{} ({})", self.device, m),
            (None, None) => write!(f, "{}", self.device),
        }
    }
}

/// 完整规则文件（regexes.yaml 的 JSON 形式）
/// 只关心 device_parsers，user_agent_parsers / os_parsers 等键被忽略
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RegexesFile {
    #[serde(default)]
    pub device_parsers: Vec<DeviceRuleConfig>,
}
