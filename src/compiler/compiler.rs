//! 规则编译器核心
//! 仅负责将规则配置编译为可执行的设备规则

use std::time::Instant;
use regex::RegexBuilder;
use tracing::debug;

use super::pattern::DevicePattern;
use super::regex_fixer::RegexFixer;
use crate::rule::DeviceRuleConfig;
use crate::error::{UaParserError, UaResult};

/// 规则配置中识别的键
const KEY_REGEX: &str = "regex";
const KEY_REGEX_FLAG: &str = "regex_flag";
const KEY_DEVICE_REPLACEMENT: &str = "device_replacement";
const KEY_BRAND_REPLACEMENT: &str = "brand_replacement";
const KEY_MODEL_REPLACEMENT: &str = "model_replacement";

/// 唯一生效的标志值：忽略大小写
const FLAG_CASE_INSENSITIVE: &str = "i";

/// 规则编译器
pub struct RuleCompiler;

impl RuleCompiler {
    /// 按原顺序编译规则列表，遇到第一条错误规则立即失败
    pub fn compile_device_rules(configs: &[DeviceRuleConfig]) -> UaResult<Vec<DevicePattern>> {
        let start = Instant::now();
        let mut patterns = Vec::with_capacity(configs.len());

        for (index, config) in configs.iter().enumerate() {
            let pattern = Self::compile_device_rule(config).map_err(|e| match e {
                UaParserError::ConfigurationError(msg) => {
                    UaParserError::ConfigurationError(format!("第{}条设备规则：{}", index, msg))
                }
                other => other,
            })?;
            patterns.push(pattern);
        }

        debug!("✅ 设备规则编译完成，共{}条，总耗时{:?}", patterns.len(), start.elapsed());
        Ok(patterns)
    }

    /// 编译单条设备规则
    pub fn compile_device_rule(config: &DeviceRuleConfig) -> UaResult<DevicePattern> {
        let raw_regex = config
            .get(KEY_REGEX)
            .filter(|r| !r.is_empty())
            .ok_or_else(|| UaParserError::ConfigurationError("设备规则缺少 regex".to_string()))?;

        // 除 "i" 以外的标志值一律按无标志处理
        let case_insensitive = config
            .get(KEY_REGEX_FLAG)
            .is_some_and(|flag| flag == FLAG_CASE_INSENSITIVE);

        // 共享规则文件按 ASCII 语义编写，不能用 RegexBuilder::case_insensitive（Unicode 折叠）
        let mut fixed_regex = RegexFixer::ascii_perl_classes(raw_regex);
        if case_insensitive {
            fixed_regex = RegexFixer::ascii_case_insensitive(&fixed_regex)?;
        }

        let regex = RegexBuilder::new(&fixed_regex)
            .build()
            .map_err(|e| {
                UaParserError::ConfigurationError(format!("正则编译失败 `{}`：{}", raw_regex, e))
            })?;

        Ok(DevicePattern::new(
            regex,
            config.get(KEY_DEVICE_REPLACEMENT).cloned(),
            config.get(KEY_BRAND_REPLACEMENT).cloned(),
            config.get(KEY_MODEL_REPLACEMENT).cloned(),
        )
        .with_source(raw_regex.as_str()))
    }
}
