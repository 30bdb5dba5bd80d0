//! 正则方言修复
//! 共享规则文件按 ASCII 语义编写：\d \w \s 只匹配 ASCII，忽略大小写也只折叠 ASCII 字母
//! regex crate 默认是 Unicode 语义，这里在编译前把模式改写成等价的 ASCII 形式

use regex_syntax::hir::{Capture, Class, ClassUnicode, ClassUnicodeRange, Hir, HirKind, Repetition};
use regex_syntax::Parser;

use crate::error::{UaParserError, UaResult};

/// 正则修复器
#[derive(Debug, Default)]
pub struct RegexFixer;

impl RegexFixer {
    /// 预定义字符类改写为显式 ASCII 字符类
    /// 统一输出带方括号的形式，出现在字符类内部时即成为嵌套字符类（如 `[\w-]` -> `[[0-9A-Za-z_]-]`）
    pub fn ascii_perl_classes(pattern: &str) -> String {
        let mut fixed = String::with_capacity(pattern.len() + 16);
        let mut chars = pattern.chars();

        while let Some(c) = chars.next() {
            if c != '\\' {
                fixed.push(c);
                continue;
            }
            match chars.next() {
                Some('d') => fixed.push_str("[0-9]"),
                Some('D') => fixed.push_str("[^0-9]"),
                Some('w') => fixed.push_str("[0-9A-Za-z_]"),
                Some('W') => fixed.push_str("[^0-9A-Za-z_]"),
                Some('s') => fixed.push_str(r"[\t\n\x0B\x0C\r ]"),
                Some('S') => fixed.push_str(r"[^\t\n\x0B\x0C\r ]"),
                Some(other) => {
                    fixed.push('\\');
                    fixed.push(other);
                }
                None => fixed.push('\\'),
            }
        }

        fixed
    }

    /// 仅对 ASCII 字母做大小写折叠
    /// 解析为 HIR 后把字面量字母展开为 `[xX]`，字符类补上对应的 ASCII 大小写区间，再打印回模式串
    pub fn ascii_case_insensitive(pattern: &str) -> UaResult<String> {
        let hir = Parser::new().parse(pattern).map_err(|e| {
            UaParserError::ConfigurationError(format!("正则解析失败 `{}`：{}", pattern, e))
        })?;
        Ok(Self::fold_hir(&hir).to_string())
    }

    fn fold_hir(hir: &Hir) -> Hir {
        match hir.kind() {
            HirKind::Empty => Hir::empty(),
            HirKind::Literal(lit) => match std::str::from_utf8(&lit.0) {
                Ok(text) => Self::fold_literal(text),
                Err(_) => hir.clone(),
            },
            HirKind::Class(Class::Unicode(class)) => Hir::class(Class::Unicode(Self::fold_class(class))),
            HirKind::Class(Class::Bytes(_)) => hir.clone(),
            HirKind::Look(look) => Hir::look(*look),
            HirKind::Repetition(rep) => Hir::repetition(Repetition {
                min: rep.min,
                max: rep.max,
                greedy: rep.greedy,
                sub: Box::new(Self::fold_hir(&rep.sub)),
            }),
            HirKind::Capture(cap) => Hir::capture(Capture {
                index: cap.index,
                name: cap.name.clone(),
                sub: Box::new(Self::fold_hir(&cap.sub)),
            }),
            HirKind::Concat(subs) => Hir::concat(subs.iter().map(Self::fold_hir).collect()),
            HirKind::Alternation(subs) => Hir::alternation(subs.iter().map(Self::fold_hir).collect()),
        }
    }

    fn fold_literal(text: &str) -> Hir {
        let mut parts = Vec::new();
        let mut pending = String::new();

        for c in text.chars() {
            if c.is_ascii_alphabetic() {
                if !pending.is_empty() {
                    parts.push(Hir::literal(std::mem::take(&mut pending).into_bytes()));
                }
                let lower = c.to_ascii_lowercase();
                let upper = c.to_ascii_uppercase();
                parts.push(Hir::class(Class::Unicode(ClassUnicode::new([
                    ClassUnicodeRange::new(lower, lower),
                    ClassUnicodeRange::new(upper, upper),
                ]))));
            } else {
                pending.push(c);
            }
        }
        if !pending.is_empty() {
            parts.push(Hir::literal(pending.into_bytes()));
        }

        Hir::concat(parts)
    }

    fn fold_class(class: &ClassUnicode) -> ClassUnicode {
        let mut folded = class.clone();
        for range in class.ranges() {
            // a-z 与 A-Z 的交集各自映射到另一半
            for (lo, hi) in [('a', 'z'), ('A', 'Z')] {
                let start = range.start().max(lo);
                let end = range.end().min(hi);
                if start <= end {
                    folded.push(ClassUnicodeRange::new(
                        swap_ascii_case(start),
                        swap_ascii_case(end),
                    ));
                }
            }
        }
        folded
    }
}

fn swap_ascii_case(c: char) -> char {
    if c.is_ascii_lowercase() {
        c.to_ascii_uppercase()
    } else {
        c.to_ascii_lowercase()
    }
}
