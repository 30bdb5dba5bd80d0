//! 替换模板渲染模块
//! 负责把规则中的 device/brand/model 替换模板与正则捕获结果组合成最终字段值
//! 模板语法：`$` + 单个数字（$0 ~ $9）引用对应捕获分组，其余字符原样输出

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// 占位符扫描正则，仅匹配ASCII数字
static SUBSTITUTION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$[0-9]").unwrap()
});

/// 模板渲染工具类
pub struct TemplateRenderer;

impl TemplateRenderer {
    /// 渲染替换模板
    ///
    /// # 参数
    /// - `template`: 规则中的原始替换模板
    /// - `captures`: 当前规则的正则捕获结果
    ///
    /// # 返回值
    /// - 模板不含 `$`：原样返回，不做 trim
    /// - 否则：逐个替换占位符后去除首尾空白
    ///
    /// # 替换规则
    /// 1. 分组不存在或未参与匹配时替换为空串
    /// 2. 分组文本按字面量插入，其中的 `$1` 之类不会被再次展开
    /// 3. 只能引用 0~9 号分组，`$10` 解释为 `$1` 后跟字符 `0`
    pub fn render(template: &str, captures: &Captures) -> String {
        if !template.contains('$') {
            return template.to_string();
        }

        let mut rendered = String::with_capacity(template.len() + 16);
        let mut last_end = 0;

        // 按扫描到的原始位置拼接，避免二次扫描已替换的分组文本
        for placeholder in SUBSTITUTION_REGEX.find_iter(template) {
            rendered.push_str(&template[last_end..placeholder.start()]);

            let group_index = (template.as_bytes()[placeholder.start() + 1] - b'0') as usize;
            if let Some(group) = captures.get(group_index) {
                rendered.push_str(group.as_str());
            }

            last_end = placeholder.end();
        }
        rendered.push_str(&template[last_end..]);

        trim_control(&rendered).to_string()
    }
}

/// 去除首尾 <= U+0020 的字符（空格与ASCII控制字符），与共享规则文件的参考实现保持一致
/// 注意：不是 `str::trim`，全角空格等Unicode空白不会被去掉
pub fn trim_control(s: &str) -> &str {
    s.trim_matches(|c: char| c <= '\u{20}')
}
