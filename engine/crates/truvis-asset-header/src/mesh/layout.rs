use crate::error::{AssetHeaderError, Result};

/// 顶点布局，各分量按 texcoord、normal、position 的顺序交错存放
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexLayout {
    /// position
    V3f,
    /// texcoord + position
    T2fV3f,
    /// normal + position
    N3fV3f,
    /// texcoord + normal + position
    T2fN3fV3f,
}

impl VertexLayout {
    pub const ALL: [VertexLayout; 4] = [
        VertexLayout::V3f,
        VertexLayout::T2fV3f,
        VertexLayout::N3fV3f,
        VertexLayout::T2fN3fV3f,
    ];

    /// 解析布局标记，例如 `T2F_N3F_V3F`
    pub fn from_tag(tag: &str) -> Result<Self> {
        let layout = match tag {
            "V3F" => VertexLayout::V3f,
            "T2F_V3F" => VertexLayout::T2fV3f,
            "N3F_V3F" => VertexLayout::N3fV3f,
            "T2F_N3F_V3F" => VertexLayout::T2fN3fV3f,
            _ => {
                return Err(AssetHeaderError::UnknownModelFormat {
                    format: tag.to_string(),
                });
            }
        };
        Ok(layout)
    }

    pub fn tag(self) -> &'static str {
        match self {
            VertexLayout::V3f => "V3F",
            VertexLayout::T2fV3f => "T2F_V3F",
            VertexLayout::N3fV3f => "N3F_V3F",
            VertexLayout::T2fN3fV3f => "T2F_N3F_V3F",
        }
    }

    /// `model.h` 中对应的枚举名
    pub fn format_constant(self) -> &'static str {
        match self {
            VertexLayout::V3f => "MODEL_FORMAT_V3F",
            VertexLayout::T2fV3f => "MODEL_FORMAT_T2F_V3F",
            VertexLayout::N3fV3f => "MODEL_FORMAT_N3F_V3F",
            VertexLayout::T2fN3fV3f => "MODEL_FORMAT_T2F_N3F_V3F",
        }
    }

    /// 每个顶点的 float 数量
    pub fn stride(self) -> usize {
        match self {
            VertexLayout::V3f => 3,
            VertexLayout::T2fV3f => 5,
            VertexLayout::N3fV3f => 6,
            VertexLayout::T2fN3fV3f => 8,
        }
    }
}
