//! 资源的符号命名
//!
//! 符号名直接由文件名推导：去掉最后一个扩展名后转成大写。
//! 这里不做任何清洗，文件名里有 `-`、`.` 之类的字符会原样进入生成的符号，
//! 生成的头文件也就无法编译。这是有意保留的行为，文件名需要调用方自己保证。

use std::path::{Path, PathBuf};

/// 资源种类，决定符号前缀、include guard 前缀和配套的运行时头文件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Model,
    Shader,
    Texture,
}

impl ResourceKind {
    /// 符号前缀，例如 `MODEL_SPRITE_VERTICES` 中的 `MODEL`
    pub fn symbol_prefix(self) -> &'static str {
        match self {
            ResourceKind::Model => "MODEL",
            ResourceKind::Shader => "SHADER",
            ResourceKind::Texture => "TEXTURE",
        }
    }

    /// include guard 前缀，例如 `MODELS_SPRITE_H_INCLUDED` 中的 `MODELS`
    pub fn guard_prefix(self) -> &'static str {
        match self {
            ResourceKind::Model => "MODELS",
            ResourceKind::Shader => "SHADERS",
            ResourceKind::Texture => "TEXTURES",
        }
    }

    /// 生成的头文件需要 include 的运行时头文件
    pub fn companion_header(self) -> &'static str {
        match self {
            ResourceKind::Model => "model.h",
            ResourceKind::Shader => "shader.h",
            ResourceKind::Texture => "texture.h",
        }
    }
}

/// 单个资源的命名信息
#[derive(Debug, Clone)]
pub struct ResourceIdentity {
    pub kind: ResourceKind,
    /// 大写后的文件名（不含扩展名）
    pub name: String,
    /// 调用方传入的原始路径，原样写入 `_PATH` 常量
    pub path: PathBuf,
}

impl ResourceIdentity {
    pub fn new(kind: ResourceKind, path: &Path) -> Self {
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_uppercase())
            .unwrap_or_default();

        Self {
            kind,
            name,
            path: path.to_path_buf(),
        }
    }

    /// `<KINDS>_<NAME>_H_INCLUDED`
    pub fn include_guard(&self) -> String {
        format!("{}_{}_H_INCLUDED", self.kind.guard_prefix(), self.name)
    }

    /// `<KIND>_<NAME>_<suffix>`
    pub fn symbol(&self, suffix: &str) -> String {
        format!("{}_{}_{}", self.kind.symbol_prefix(), self.name, suffix)
    }

    pub fn path_str(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}
