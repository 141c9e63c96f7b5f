//! 资源编译的错误类型
//!
//! 三类格式错误都是致命的：一旦出现，整个资源不会产生任何输出。
//! 外部解析库（tobj、image）和 IO 的错误原样透传，不做额外包装。

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum AssetHeaderError {
    /// 扩展名不在 `.obj` / `.glsl` / `.jpg` / `.png` 之内
    #[error("Unknown resource type: {}", path.display())]
    UnknownResourceType { path: PathBuf },

    /// 顶点布局不是四种已知布局之一
    #[error("Unknown model format: {format}")]
    UnknownModelFormat { format: String },

    /// 像素格式不是 8 位 RGB / RGBA
    #[error("Unknown texture format: {format}")]
    UnknownTextureFormat { format: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    ObjLoad(#[from] tobj::LoadError),

    #[error(transparent)]
    ImageDecode(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, AssetHeaderError>;
