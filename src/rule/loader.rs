//! 规则加载管理器
//! 负责从本地规则文件读取设备规则列表（regexes.yaml 原文或其 JSON 形式）

use std::path::Path;
use tracing::{debug, warn};

use super::model::RegexesFile;
use crate::config::GlobalConfig;
use crate::error::{UaParserError, UaResult};

/// 规则加载管理器
pub struct RuleLoader;

impl RuleLoader {
    /// 从本地规则文件加载，按扩展名区分格式：.yaml/.yml 为 YAML，其余按 JSON 解析
    pub async fn load(config: &GlobalConfig) -> UaResult<RegexesFile> {
        let path = &config.regexes_path;
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            UaParserError::RuleLoadError(format!("读取规则文件 {} 失败：{}", path.display(), e))
        })?;
        debug!("读取规则文件成功：{}，大小：{} 字节", path.display(), raw.len());

        if Self::is_yaml(path) {
            Self::from_yaml_str(&raw)
        } else {
            Self::from_json_str(&raw)
        }
    }

    /// 从JSON字符串解析规则文件
    pub fn from_json_str(raw: &str) -> UaResult<RegexesFile> {
        let rules: RegexesFile = serde_json::from_str(raw)?;
        Ok(Self::report(rules))
    }

    /// 从YAML字符串解析规则文件（regexes.yaml 原文）
    pub fn from_yaml_str(raw: &str) -> UaResult<RegexesFile> {
        let rules: RegexesFile = serde_yaml::from_str(raw)?;
        Ok(Self::report(rules))
    }

    fn is_yaml(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
    }

    fn report(rules: RegexesFile) -> RegexesFile {
        if rules.device_parsers.is_empty() {
            warn!("规则文件中没有 device_parsers，所有输入都将解析为 Other");
        } else {
            debug!("规则文件解析成功，设备规则数：{}", rules.device_parsers.len());
        }
        rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigManager;

    const RULES_JSON: &str = r#"{
        "device_parsers": [
            {"regex": "(iPhone)", "brand_replacement": "Apple", "model_replacement": "$1"},
            {"regex": "Android (\\d+)"}
        ]
    }"#;

    #[test]
    fn test_from_json_str_preserves_order() {
        let rules = RuleLoader::from_json_str(RULES_JSON).unwrap();
        assert_eq!(rules.device_parsers.len(), 2);
        assert_eq!(rules.device_parsers[0]["regex"], "(iPhone)");
        assert_eq!(rules.device_parsers[1]["regex"], r"Android (\d+)");
    }

    #[test]
    fn test_from_json_str_missing_section() {
        let rules = RuleLoader::from_json_str(r#"{"os_parsers": []}"#).unwrap();
        assert!(rules.device_parsers.is_empty());
    }

    #[test]
    fn test_from_json_str_invalid_json() {
        let err = RuleLoader::from_json_str("{ device_parsers").unwrap_err();
        assert!(matches!(err, UaParserError::JsonError(_)));
    }

    const RULES_YAML: &str = r#"
user_agent_parsers:
  - regex: '(Firefox)/(\d+)'
device_parsers:
  - regex: '(iPhone)'
    brand_replacement: 'Apple'
    model_replacement: '$1'
  - regex: '; *(KFTT)(?: Build|\))'
    regex_flag: 'i'
    device_replacement: 'Kindle Fire HD'
    brand_replacement: 'Amazon'
"#;

    #[test]
    fn test_from_yaml_str() {
        let rules = RuleLoader::from_yaml_str(RULES_YAML).unwrap();
        assert_eq!(rules.device_parsers.len(), 2);
        assert_eq!(rules.device_parsers[0]["model_replacement"], "$1");
        assert_eq!(rules.device_parsers[1]["regex"], r"; *(KFTT)(?: Build|\))");
        assert_eq!(rules.device_parsers[1]["regex_flag"], "i");
    }

    #[test]
    fn test_from_yaml_str_invalid() {
        let err = RuleLoader::from_yaml_str("device_parsers: [ {regex: ").unwrap_err();
        assert!(matches!(err, UaParserError::YamlError(_)));
    }

    #[tokio::test]
    async fn test_load_yaml_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("regexes.yaml");
        std::fs::write(&path, RULES_YAML).unwrap();

        let config = ConfigManager::custom().regexes_path(&path).build();
        let rules = RuleLoader::load(&config).await.unwrap();
        assert_eq!(rules.device_parsers.len(), 2);
        assert_eq!(rules.device_parsers[1]["brand_replacement"], "Amazon");
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("regexes.json");
        std::fs::write(&path, RULES_JSON).unwrap();

        let config = ConfigManager::custom().regexes_path(&path).build();
        let rules = RuleLoader::load(&config).await.unwrap();
        assert_eq!(rules.device_parsers.len(), 2);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigManager::custom()
            .regexes_path(dir.path().join("absent.json"))
            .build();
        let err = RuleLoader::load(&config).await.unwrap_err();
        assert!(matches!(err, UaParserError::RuleLoadError(_)));
    }
}
