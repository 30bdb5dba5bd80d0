//! 编译后模式模型
//! 一条设备规则编译后的结构，以及命中后的字段推导逻辑

use regex::Regex;

use crate::rule::{Device, OTHER_DEVICE};
use crate::utils::TemplateRenderer;

/// 编译后的设备规则
#[derive(Debug, Clone)]
pub struct DevicePattern {
    pub regex: Regex,
    // 规则文件中的原始正则（regex 为改写后的 ASCII 形式）
    pub source: String,
    pub device_template: Option<String>,
    pub brand_template: Option<String>,
    pub model_template: Option<String>,
}

impl DevicePattern {
    pub fn new(
        regex: Regex,
        device_template: Option<String>,
        brand_template: Option<String>,
        model_template: Option<String>,
    ) -> Self {
        Self {
            source: regex.as_str().to_string(),
            regex,
            device_template,
            brand_template,
            model_template,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// 在输入中查找（非锚定），未命中返回 None
    pub fn match_agent(&self, agent: &str) -> Option<Device> {
        let captures = self.regex.captures(agent)?;
        let group_one = || captures.get(1).map(|m| m.as_str().to_string());

        // 1. device：有模板走模板，否则取第1分组（可能不存在）
        let device = match &self.device_template {
            Some(template) => Some(TemplateRenderer::render(template, &captures)),
            None => group_one(),
        };

        // 2. brand：无模板即为空，不回退到任何分组
        let brand = self
            .brand_template
            .as_ref()
            .map(|template| TemplateRenderer::render(template, &captures));

        // 3. model：有模板走模板，否则存在分组时取第1分组
        let model = match &self.model_template {
            Some(template) => Some(TemplateRenderer::render(template, &captures)),
            None if captures.len() > 1 => group_one(),
            None => None,
        };

        // 4. 归一化：device 不能为空，brand/model 空串视为 None
        let device = device
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| OTHER_DEVICE.to_string());

        Some(Device {
            device,
            brand: brand.filter(|b| !b.is_empty()),
            model: model.filter(|m| !m.is_empty()),
        })
    }

    /// 规则描述
    pub fn describe(&self) -> &str {
        &self.source
    }
}
