use std::path::{Path, PathBuf};

/// 统一资源路径管理
///
/// 所有路径基于工作区根目录（通过 `CARGO_MANIFEST_DIR` 推导）。
///
/// # 使用示例
/// ```ignore
/// let manifest = TruvisPath::asset_manifest_path(); // <workspace>/assets.toml
/// ```
pub struct TruvisPath {}
// 核心路径
impl TruvisPath {
    /// 获取工作区根目录
    pub fn workspace_path() -> PathBuf {
        // 从当前包的位置推导 workspace 目录
        let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        manifest_dir.parent().unwrap_or(manifest_dir).to_path_buf()
    }
}
// 根目录下
impl TruvisPath {
    /// 默认的批量编译清单: `assets.toml`
    pub fn asset_manifest_path() -> PathBuf {
        Self::workspace_path().join("assets.toml")
    }
}
