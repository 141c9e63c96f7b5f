//! 模型 -> 头文件
//!
//! 所有材质的顶点拼接成一个 float 数组，每个顶点输出一行。

pub mod layout;
pub mod obj_loader;

use crate::chunk::padded_chunks;
use crate::emit::HeaderWriter;
use crate::error::Result;
use crate::identity::{ResourceIdentity, ResourceKind};
use itertools::Itertools;
use layout::VertexLayout;
use obj_loader::ObjLoader;
use std::path::Path;

/// 单个材质展开后的顶点数据
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialRecord {
    pub name: String,
    /// 该材质自身的布局标记，例如 `T2F_N3F_V3F`
    pub layout_tag: String,
    /// 已经按布局交错好的 float 分量
    pub vertices: Vec<f64>,
}

/// 解析后的模型：按遍历顺序排列的材质
#[derive(Debug, Clone, Default)]
pub struct MeshDescription {
    pub materials: Vec<MaterialRecord>,
}

/// 编码结果
#[derive(Debug, Clone)]
pub struct EncodedMesh {
    /// 实际写入头文件的布局
    ///
    /// 遍历材质时后出现的覆盖先出现的，即最后一个材质的布局。
    /// 材质布局不一致时，前面材质的数据也按这个布局解释。
    pub layout_used: VertexLayout,
    /// 每个材质自己的布局标记，和 `MeshDescription::materials` 一一对应
    pub material_layouts: Vec<String>,
    pub vertices: Vec<f64>,
    pub vertex_count: usize,
}

impl MeshDescription {
    pub fn encode(&self) -> Result<EncodedMesh> {
        let (layout_tag, vertices) =
            self.materials
                .iter()
                .fold(("", Vec::new()), |(_, mut vertices), material| {
                    vertices.extend_from_slice(&material.vertices);
                    (material.layout_tag.as_str(), vertices)
                });

        let layout_used = VertexLayout::from_tag(layout_tag)?;
        let material_layouts: Vec<String> = self.materials.iter().map(|m| m.layout_tag.clone()).collect();

        if material_layouts.iter().any(|tag| tag != layout_tag) {
            log::warn!(
                "materials disagree on vertex layout {:?}, using the last one: {}",
                material_layouts,
                layout_tag
            );
        }

        let stride = layout_used.stride();
        if vertices.len() % stride != 0 {
            log::warn!(
                "{} floats is not a multiple of the {} stride ({}), trailing floats are not counted",
                vertices.len(),
                layout_tag,
                stride
            );
        }
        let vertex_count = vertices.len() / stride;

        Ok(EncodedMesh {
            layout_used,
            material_layouts,
            vertices,
            vertex_count,
        })
    }
}

impl EncodedMesh {
    pub fn write_header(&self, identity: &ResourceIdentity, invocation: &str) -> String {
        let stride = self.layout_used.stride();
        let rows = padded_chunks(self.vertices.iter().copied().map(Some), stride, None)
            .map(|group| group.into_iter().flatten().map(format_float).join(", "));

        HeaderWriter::new(identity, invocation)
            .path_const()
            .int_const("FORMAT", self.layout_used.format_constant())
            .long_const("VERTEX_COUNT", self.vertex_count)
            .array("float", "VERTICES", rows)
            .finish()
    }
}

/// 定宽有符号小数，保留 6 位，正数前补空格，带 `f` 后缀：` 1.500000f`、`-0.250000f`
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return " nanf".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_negative() { "-inff" } else { " inff" }.to_string();
    }

    if value.is_sign_negative() {
        format!("{value:.6}f")
    } else {
        format!(" {value:.6}f")
    }
}

/// 读取 `.obj` 并生成头文件文本
pub fn compile_mesh(path: &Path, invocation: &str) -> Result<String> {
    let description = ObjLoader::load(path)?;
    let encoded = description.encode()?;
    log::debug!(
        "{:?}: {} materials, layout {}, {} vertices",
        path,
        description.materials.len(),
        encoded.layout_used.tag(),
        encoded.vertex_count
    );

    let identity = ResourceIdentity::new(ResourceKind::Model, path);
    Ok(encoded.write_header(&identity, invocation))
}
