//! 全局解析器单例管理
use once_cell::sync::Lazy;
use tokio::sync::OnceCell;

use super::detector::DeviceParser;
use crate::config::{ConfigManager, GlobalConfig};
use crate::error::{UaParserError, UaResult};
use crate::rule::Device;

/// 全局解析器实例
static GLOBAL_PARSER: Lazy<OnceCell<DeviceParser>> = Lazy::new(OnceCell::new);

/// 初始化全局解析器（默认配置）
pub async fn init_device_parser() -> UaResult<()> {
    init_device_parser_with_config(ConfigManager::get_default()).await
}

/// 带自定义配置初始化全局解析器，重复调用时保留第一次的结果
pub async fn init_device_parser_with_config(config: GlobalConfig) -> UaResult<()> {
    GLOBAL_PARSER
        .get_or_try_init(|| DeviceParser::new(config))
        .await?;
    Ok(())
}

/// 获取全局解析器
pub(crate) fn get_global_parser() -> UaResult<&'static DeviceParser> {
    GLOBAL_PARSER.get()
        .ok_or(UaParserError::DetectorNotInitialized)
}

/// 使用全局解析器解析
pub fn parse_device(agent: Option<&str>) -> UaResult<Option<Device>> {
    let parser = get_global_parser()?;
    Ok(parser.parse(agent))
}

#[cfg(test)]
mod tests {
    use super::*;

    // 全局状态只能在一个测试里完整验证
    #[tokio::test]
    async fn test_global_lifecycle() {
        assert!(matches!(
            parse_device(Some("iPhone")),
            Err(UaParserError::DetectorNotInitialized)
        ));

        // 加载失败不会占用单例
        let missing = ConfigManager::custom().regexes_path("/nonexistent/regexes.json").build();
        assert!(init_device_parser_with_config(missing).await.is_err());
        assert!(get_global_parser().is_err());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("regexes.json");
        std::fs::write(
            &path,
            r#"{"device_parsers": [{"regex": "iPhone", "device_replacement": "iPhone", "brand_replacement": "Apple"}]}"#,
        )
        .unwrap();
        init_device_parser_with_config(ConfigManager::custom().regexes_path(&path).build())
            .await
            .unwrap();

        let device = parse_device(Some("Mozilla/5.0 (iPhone)")).unwrap().unwrap();
        assert_eq!(device, Device::new("iPhone", Some("Apple".into()), None));
        assert_eq!(parse_device(None).unwrap(), None);

        // 已初始化后再次调用直接返回
        let other = ConfigManager::custom().regexes_path("/nonexistent/regexes.json").build();
        assert!(init_device_parser_with_config(other).await.is_ok());
    }
}
