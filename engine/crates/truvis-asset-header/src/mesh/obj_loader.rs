use crate::error::Result;
use crate::mesh::{MaterialRecord, MeshDescription};
use indexmap::IndexMap;
use std::path::Path;

/// 没有材质的网格统一归到这个名字下
pub const DEFAULT_MATERIAL: &str = "default";

const ZEROS: [f64; 3] = [0.0; 3];

pub struct ObjLoader {}

impl ObjLoader {
    /// 读取 `.obj` 文件，按材质展开成交错的顶点数据
    ///
    /// 每个三角形的每个角都展开成一个顶点（不使用索引）。
    /// `.mtl` 缺失时不报错，材质名退化为 [`DEFAULT_MATERIAL`]。
    pub fn load(obj_file: &Path) -> Result<MeshDescription> {
        let (models, materials) = tobj::load_obj(
            obj_file,
            &tobj::LoadOptions {
                single_index: true,
                triangulate: true,
                ignore_lines: true,
                ignore_points: true,
                ..Default::default()
            },
        )?;

        let materials = materials.unwrap_or_else(|e| {
            log::debug!("material library of {:?} not loaded: {}", obj_file, e);
            Vec::new()
        });

        log::debug!("{:?}: {} models, {} materials", obj_file, models.len(), materials.len());

        let material_names: Vec<&str> = materials.iter().map(|m| m.name.as_str()).collect();
        Ok(Self::flatten(models.iter().map(|m| &m.mesh), &material_names))
    }

    /// 把若干网格按材质名归组
    ///
    /// 组的顺序是材质库里的声明顺序，没有被任何网格用到的材质也保留，布局标记为空。
    /// 没有材质的网格归到 [`DEFAULT_MATERIAL`]，排在材质库之后。
    pub fn flatten<'m>(meshes: impl Iterator<Item = &'m tobj::Mesh>, material_names: &[&str]) -> MeshDescription {
        let mut records: IndexMap<String, MaterialRecord> = material_names
            .iter()
            .map(|&name| (name.to_string(), Self::empty_record(name)))
            .collect();

        for mesh in meshes {
            let name = mesh
                .material_id
                .and_then(|id| material_names.get(id))
                .copied()
                .unwrap_or(DEFAULT_MATERIAL);

            let record = records
                .entry(name.to_string())
                .or_insert_with(|| Self::empty_record(name));
            record.layout_tag = Self::layout_tag(mesh);
            Self::interleave(mesh, &mut record.vertices);
        }

        MeshDescription {
            materials: records.into_values().collect(),
        }
    }

    fn empty_record(name: &str) -> MaterialRecord {
        MaterialRecord {
            name: name.to_string(),
            layout_tag: String::new(),
            vertices: Vec::new(),
        }
    }

    /// 根据网格实际携带的属性拼出布局标记，例如 `T2F_N3F_V3F`
    ///
    /// 带顶点色的网格会得到 `C3F` 段，后续会被当作未知布局拒绝。
    fn layout_tag(mesh: &tobj::Mesh) -> String {
        let mut tag = String::new();
        if !mesh.texcoords.is_empty() {
            tag.push_str("T2F_");
        }
        if !mesh.vertex_color.is_empty() {
            tag.push_str("C3F_");
        }
        if !mesh.normals.is_empty() {
            tag.push_str("N3F_");
        }
        tag.push_str("V3F");
        tag
    }

    /// 按 texcoord、color、normal、position 的顺序把每个顶点追加到 `out`
    fn interleave(mesh: &tobj::Mesh, out: &mut Vec<f64>) {
        fn attr(data: &[f64], index: usize, n: usize) -> &[f64] {
            data.get(index * n..index * n + n).unwrap_or(&ZEROS[..n])
        }

        for &index in &mesh.indices {
            let i = index as usize;
            if !mesh.texcoords.is_empty() {
                out.extend_from_slice(attr(&mesh.texcoords, i, 2));
            }
            if !mesh.vertex_color.is_empty() {
                out.extend_from_slice(attr(&mesh.vertex_color, i, 3));
            }
            if !mesh.normals.is_empty() {
                out.extend_from_slice(attr(&mesh.normals, i, 3));
            }
            out.extend_from_slice(attr(&mesh.positions, i, 3));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> tobj::Mesh {
        tobj::Mesh {
            positions: vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            indices: vec![0, 1, 2],
            ..Default::default()
        }
    }

    #[test]
    fn test_position_only() {
        let mesh = triangle();
        let desc = ObjLoader::flatten([&mesh].into_iter(), &[]);

        assert_eq!(desc.materials.len(), 1);
        assert_eq!(desc.materials[0].name, DEFAULT_MATERIAL);
        assert_eq!(desc.materials[0].layout_tag, "V3F");
        assert_eq!(desc.materials[0].vertices, mesh.positions);
    }

    #[test]
    fn test_interleave_order() {
        let mut mesh = triangle();
        mesh.texcoords = vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0];
        mesh.normals = vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0];
        mesh.indices = vec![1];

        let desc = ObjLoader::flatten([&mesh].into_iter(), &[]);
        assert_eq!(desc.materials[0].layout_tag, "T2F_N3F_V3F");
        assert_eq!(desc.materials[0].vertices, vec![1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_vertex_color_tag() {
        let mut mesh = triangle();
        mesh.vertex_color = vec![1.0; 9];
        let desc = ObjLoader::flatten([&mesh].into_iter(), &[]);
        assert_eq!(desc.materials[0].layout_tag, "C3F_V3F");
        assert_eq!(desc.materials[0].vertices.len(), 3 * 6);
    }

    #[test]
    fn test_group_by_material_declaration_order() {
        let mut a = triangle();
        a.material_id = Some(1);
        let mut b = triangle();
        b.material_id = Some(0);
        let mut c = triangle();
        c.material_id = Some(1);

        // blue 先被用到，但 red 先声明
        let desc = ObjLoader::flatten([&a, &b, &c].into_iter(), &["red", "blue"]);
        let names: Vec<_> = desc.materials.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["red", "blue"]);
        assert_eq!(desc.materials[0].vertices.len(), 9);
        assert_eq!(desc.materials[1].vertices.len(), 18);
    }

    #[test]
    fn test_unused_material_is_kept() {
        let mut a = triangle();
        a.material_id = Some(0);

        let desc = ObjLoader::flatten([&a].into_iter(), &["red", "spare"]);
        assert_eq!(desc.materials.len(), 2);
        assert_eq!(desc.materials[1].name, "spare");
        assert_eq!(desc.materials[1].layout_tag, "");
        assert!(desc.materials[1].vertices.is_empty());
    }

    #[test]
    fn test_default_material_after_library() {
        let plain = triangle();
        let mut red = triangle();
        red.material_id = Some(0);

        let desc = ObjLoader::flatten([&plain, &red].into_iter(), &["red"]);
        let names: Vec<_> = desc.materials.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["red", DEFAULT_MATERIAL]);
    }
}
