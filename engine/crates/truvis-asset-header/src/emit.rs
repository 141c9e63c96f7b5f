//! 生成头文件文本
//!
//! 输出结构对所有资源种类都一样：
//! ```text
//! // THIS FILE WAS AUTOGENERATED BY:
//! // <invocation>
//! #ifndef <GUARD>
//! #define <GUARD>
//!
//! #include "<kind>.h"
//!
//! <declarations>
//!
//! #endif
//! ```

use crate::identity::ResourceIdentity;

const BANNER: &str = "// THIS FILE WAS AUTOGENERATED BY:";
const INDENT: &str = "    ";

/// 按固定格式拼接一个头文件
///
/// 只在所有数据都准备好之后才构造，保证出错时不会留下半个文件。
pub struct HeaderWriter<'a> {
    identity: &'a ResourceIdentity,
    text: String,
}

impl<'a> HeaderWriter<'a> {
    /// 写入 banner、include guard 和运行时头文件的 include
    pub fn new(identity: &'a ResourceIdentity, invocation: &str) -> Self {
        let guard = identity.include_guard();

        let mut text = String::new();
        text.push_str(BANNER);
        text.push('\n');
        text.push_str(&format!("// {invocation}\n"));
        text.push_str(&format!("#ifndef {guard}\n"));
        text.push_str(&format!("#define {guard}\n"));
        text.push('\n');
        text.push_str(&format!("#include \"{}\"\n", identity.kind.companion_header()));
        text.push('\n');

        Self { identity, text }
    }

    /// `static const char <SYM>_PATH[] = "<path>";`
    ///
    /// 路径不转义，原样写入
    pub fn path_const(&mut self) -> &mut Self {
        let line = format!(
            "static const char {}[] = \"{}\";\n",
            self.identity.symbol("PATH"),
            self.identity.path_str()
        );
        self.text.push_str(&line);
        self
    }

    /// `static const int <SYM>_<suffix> = <value>;`，value 是运行时头文件中的枚举名
    pub fn int_const(&mut self, suffix: &str, value: &str) -> &mut Self {
        let line = format!("static const int {} = {};\n", self.identity.symbol(suffix), value);
        self.text.push_str(&line);
        self
    }

    /// `static const long <SYM>_<suffix> = <value>;`
    pub fn long_const(&mut self, suffix: &str, value: impl std::fmt::Display) -> &mut Self {
        let line = format!("static const long {} = {};\n", self.identity.symbol(suffix), value);
        self.text.push_str(&line);
        self
    }

    /// 数组声明，每个 `rows` 元素输出为一行，行尾带逗号
    pub fn array<R>(&mut self, ty: &str, suffix: &str, rows: R) -> &mut Self
    where
        R: IntoIterator<Item = String>,
    {
        self.text
            .push_str(&format!("static const {} {}[] = {{\n", ty, self.identity.symbol(suffix)));
        for row in rows {
            self.text.push_str(INDENT);
            self.text.push_str(&row);
            self.text.push_str(",\n");
        }
        self.text.push_str("};\n");
        self
    }

    /// 由多段字符串字面量拼接成的字符串常量，每段占一行，最后单独一行 `;`
    pub fn string_literals<L>(&mut self, suffix: &str, literals: L) -> &mut Self
    where
        L: IntoIterator<Item = String>,
    {
        self.text
            .push_str(&format!("static const char {}[] = \n", self.identity.symbol(suffix)));
        for literal in literals {
            self.text.push_str(INDENT);
            self.text.push_str(&literal);
            self.text.push('\n');
        }
        self.text.push_str(";\n");
        self
    }

    /// 关闭 include guard，返回完整文本
    pub fn finish(&mut self) -> String {
        let mut text = std::mem::take(&mut self.text);
        text.push('\n');
        text.push_str("#endif\n");
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::ResourceKind;
    use std::path::Path;

    #[test]
    fn test_layout() {
        let id = ResourceIdentity::new(ResourceKind::Model, Path::new("res/models/sprite.obj"));
        let text = HeaderWriter::new(&id, "asset-header res/models/sprite.obj sprite.h")
            .path_const()
            .int_const("FORMAT", "MODEL_FORMAT_V3F")
            .long_const("VERTEX_COUNT", 1)
            .array("float", "VERTICES", [" 0.000000f,  1.000000f, -1.000000f".to_string()])
            .finish();

        let expected = "\
// THIS FILE WAS AUTOGENERATED BY:
// asset-header res/models/sprite.obj sprite.h
#ifndef MODELS_SPRITE_H_INCLUDED
#define MODELS_SPRITE_H_INCLUDED

#include \"model.h\"

static const char MODEL_SPRITE_PATH[] = \"res/models/sprite.obj\";
static const int MODEL_SPRITE_FORMAT = MODEL_FORMAT_V3F;
static const long MODEL_SPRITE_VERTEX_COUNT = 1;
static const float MODEL_SPRITE_VERTICES[] = {
     0.000000f,  1.000000f, -1.000000f,
};

#endif
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_empty_array() {
        let id = ResourceIdentity::new(ResourceKind::Texture, Path::new("empty.png"));
        let text = HeaderWriter::new(&id, "x").array("unsigned char", "PIXELS", Vec::<String>::new()).finish();
        assert!(text.contains("static const unsigned char TEXTURE_EMPTY_PIXELS[] = {\n};\n"));
    }
}
