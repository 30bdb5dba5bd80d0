//! 编译模块：将规则配置编译为可执行的设备规则
pub mod pattern;
pub mod compiler;
pub mod regex_fixer;

pub use self::pattern::DevicePattern;
pub use self::compiler::RuleCompiler;
pub use self::regex_fixer::RegexFixer;
