//! 解析器核心：按顺序匹配设备规则，输出设备解析结果
use std::sync::Arc;

use tracing::{debug, trace};

use crate::compiler::{DevicePattern, RuleCompiler};
use crate::config::GlobalConfig;
use crate::error::UaResult;
use crate::rule::{Device, DeviceRuleConfig, RuleLoader};

/// 设备解析器
/// 规则编译后不可变，可在多线程间共享（clone 只复制 Arc）
#[derive(Debug, Clone)]
pub struct DeviceParser {
    patterns: Arc<Vec<DevicePattern>>,
}

impl DeviceParser {
    /// 从已编译的规则创建解析器
    pub fn with_patterns(patterns: Vec<DevicePattern>) -> Self {
        Self {
            patterns: Arc::new(patterns),
        }
    }

    /// 按配置加载规则文件并编译
    pub async fn new(config: GlobalConfig) -> UaResult<Self> {
        // 1. 加载规则文件
        let rules = RuleLoader::load(&config).await?;

        // 2. 编译设备规则
        let parser = Self::from_list(&rules.device_parsers)?;
        if config.verbose {
            for (index, pattern) in parser.patterns.iter().enumerate() {
                debug!("设备规则[{}]：{}", index, pattern.describe());
            }
        }
        Ok(parser)
    }

    /// 从规则配置列表创建解析器
    pub fn from_list(configs: &[DeviceRuleConfig]) -> UaResult<Self> {
        let patterns = RuleCompiler::compile_device_rules(configs)?;
        Ok(Self::with_patterns(patterns))
    }

    /// 从规则文件的JSON内容创建解析器
    pub fn from_json_str(raw: &str) -> UaResult<Self> {
        let rules = RuleLoader::from_json_str(raw)?;
        Self::from_list(&rules.device_parsers)
    }

    /// 核心解析接口
    /// - 输入为 None：返回 None（区分"无输入"与"未命中"）
    /// - 命中：返回第一条命中规则推导出的设备
    /// - 未命中：返回 Other
    pub fn parse(&self, agent: Option<&str>) -> Option<Device> {
        let agent = agent?;
        Some(self.parse_str(agent))
    }

    /// 解析必定存在的UA字符串
    pub fn parse_str(&self, agent: &str) -> Device {
        self.patterns
            .iter()
            .enumerate()
            .find_map(|(index, pattern)| {
                let device = pattern.match_agent(agent)?;
                trace!("设备规则[{}]命中：{}", index, device);
                Some(device)
            })
            .unwrap_or_else(Device::other)
    }

    /// 规则条数
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
