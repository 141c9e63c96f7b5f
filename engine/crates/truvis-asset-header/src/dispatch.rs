//! 按扩展名选择编码器
//!
//! 只看文件名，不嗅探内容。扩展名大小写敏感。

use crate::error::{AssetHeaderError, Result};
use crate::identity::ResourceKind;
use crate::{mesh, shader, texture};
use std::path::Path;

/// 根据扩展名判断资源种类，不认识的扩展名返回 None
pub fn resource_kind(path: &Path) -> Option<ResourceKind> {
    let kind = match path.extension()?.to_str()? {
        "obj" => ResourceKind::Model,
        "glsl" => ResourceKind::Shader,
        "jpg" | "png" => ResourceKind::Texture,
        _ => return None,
    };
    Some(kind)
}

/// 资源编译器 Trait
pub trait HeaderCompiler: Send + Sync {
    /// 返回资源种类
    fn kind(&self) -> ResourceKind;

    /// 编译单个资源，返回完整的头文件文本
    fn compile(&self, path: &Path, invocation: &str) -> Result<String>;
}

#[derive(Debug, Default)]
pub struct MeshCompiler;

impl HeaderCompiler for MeshCompiler {
    fn kind(&self) -> ResourceKind {
        ResourceKind::Model
    }

    fn compile(&self, path: &Path, invocation: &str) -> Result<String> {
        mesh::compile_mesh(path, invocation)
    }
}

#[derive(Debug, Default)]
pub struct ShaderCompiler;

impl HeaderCompiler for ShaderCompiler {
    fn kind(&self) -> ResourceKind {
        ResourceKind::Shader
    }

    fn compile(&self, path: &Path, invocation: &str) -> Result<String> {
        shader::compile_shader(path, invocation)
    }
}

#[derive(Debug, Default)]
pub struct TextureCompiler;

impl HeaderCompiler for TextureCompiler {
    fn kind(&self) -> ResourceKind {
        ResourceKind::Texture
    }

    fn compile(&self, path: &Path, invocation: &str) -> Result<String> {
        texture::compile_texture(path, invocation)
    }
}

/// 根据资源种类获取对应的编译器实例
pub fn get_compiler(kind: ResourceKind) -> Box<dyn HeaderCompiler> {
    match kind {
        ResourceKind::Model => Box::new(MeshCompiler),
        ResourceKind::Shader => Box::new(ShaderCompiler),
        ResourceKind::Texture => Box::new(TextureCompiler),
    }
}

/// 编译一个资源文件
///
/// `invocation` 是生成该文件的完整命令行，会写进头文件的注释里。
/// 出错时不返回任何文本。
pub fn compile_resource(path: &Path, invocation: &str) -> Result<String> {
    let kind = resource_kind(path).ok_or_else(|| AssetHeaderError::UnknownResourceType {
        path: path.to_path_buf(),
    })?;
    log::debug!("{:?} -> {:?}", path, kind);

    get_compiler(kind).compile(path, invocation)
}
