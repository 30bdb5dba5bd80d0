//! 全局配置管理,存储所有可配置项

use std::path::PathBuf;

/// 全局配置
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    // 规则文件路径（regexes.yaml 的 JSON 形式）
    pub regexes_path: PathBuf,
    // 是否输出逐条规则的编译日志
    pub verbose: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            regexes_path: PathBuf::from("regexes.json"),
            verbose: false,
        }
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GlobalConfig::default(),
        }
    }

    pub fn regexes_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.regexes_path = path.into();
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConfigManager::get_default();
        assert_eq!(config.regexes_path, PathBuf::from("regexes.json"));
        assert!(!config.verbose);
    }

    #[test]
    fn test_custom_builder_overrides() {
        let config = ConfigManager::custom()
            .regexes_path("/etc/uap/regexes.json")
            .verbose(true)
            .build();
        assert_eq!(config.regexes_path, PathBuf::from("/etc/uap/regexes.json"));
        assert!(config.verbose);
    }
}
