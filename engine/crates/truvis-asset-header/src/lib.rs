//! 资源 -> C 头文件编译器
//!
//! 把模型（`.obj`）、shader（`.glsl`）、贴图（`.jpg` / `.png`）转换成可以直接
//! `#include` 的 C 头文件，渲染器在编译期就拿到全部数据，运行时无需读文件、解析格式。
//!
//! 每次调用都是一个输入文件到一段文本的纯函数：
//! - [`dispatch::compile_resource`] 按扩展名选择编码器
//! - [`mesh`]、[`shader`]、[`texture`] 分别负责三种资源
//! - [`batch`] 在此基础上提供基于 TOML 清单的批量编译

pub mod batch;
pub mod chunk;
pub mod dispatch;
pub mod emit;
pub mod error;
pub mod identity;
pub mod mesh;
pub mod shader;
pub mod texture;

pub use dispatch::compile_resource;
pub use error::{AssetHeaderError, Result};
