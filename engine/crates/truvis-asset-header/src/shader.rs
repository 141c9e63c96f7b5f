//! shader 源码 -> 头文件
//!
//! 每行源码变成一个字符串字面量，行尾补 `\n`，拼起来就是原文。

use crate::emit::HeaderWriter;
use crate::error::Result;
use crate::identity::{ResourceIdentity, ResourceKind};
use std::path::Path;

/// 按 `\n`、`\r\n`、`\r` 切行，末尾的换行不会多出一个空行
///
/// 只认这三种换行。`\x0b`、`\x0c`、`\x1c`..`\x1e`、`\u{85}`、`\u{2028}`、`\u{2029}`
/// 不切行，原样留在字面量里。
pub fn split_lines(source: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = source;
    while !rest.is_empty() {
        match rest.find(['\n', '\r']) {
            Some(pos) => {
                lines.push(&rest[..pos]);
                let skip = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + skip..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }
    lines
}

/// 转义 `\` 和 `"`，其余字符原样保留
fn escape(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    for c in line.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ => out.push(c),
        }
    }
    out
}

/// `"<line>\n"`
pub fn line_literal(line: &str) -> String {
    format!("\"{}\\n\"", escape(line))
}

pub fn write_header(source: &str, identity: &ResourceIdentity, invocation: &str) -> String {
    let literals = split_lines(source).into_iter().map(line_literal);

    HeaderWriter::new(identity, invocation)
        .path_const()
        .string_literals("SOURCE", literals)
        .finish()
}

/// 读取 UTF-8 shader 源码并生成头文件文本
pub fn compile_shader(path: &Path, invocation: &str) -> Result<String> {
    let source = std::fs::read_to_string(path)?;
    log::debug!("{:?}: {} lines", path, split_lines(&source).len());

    let identity = ResourceIdentity::new(ResourceKind::Shader, path);
    Ok(write_header(&source, &identity, invocation))
}
