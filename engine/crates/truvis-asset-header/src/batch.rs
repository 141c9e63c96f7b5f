//! 批量编译
//!
//! 从 TOML 清单读取任务列表，并行编译。单个资源失败不影响其它资源，
//! 失败的资源不会写出任何文件。

use crate::dispatch::{compile_resource, resource_kind};
use anyhow::Context;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 显式指定的一对输入输出
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetItem {
    pub src: PathBuf,
    pub dst: PathBuf,
}

/// 递归遍历 `src_dir`，输出到 `out_dir` 下相同的相对路径，扩展名换成 `.h`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetDir {
    pub src_dir: PathBuf,
    pub out_dir: PathBuf,
}

/// TOML 清单
///
/// ```toml
/// [[assets]]
/// src = "res/shaders/font_frag.glsl"
/// dst = "res/shaders/font_frag.h"
///
/// [[dirs]]
/// src_dir = "res"
/// out_dir = "include/res"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    #[serde(default)]
    pub assets: Vec<AssetItem>,
    #[serde(default)]
    pub dirs: Vec<AssetDir>,
}

impl BatchConfig {
    /// 从 TOML 文件加载配置，相对路径基于清单所在目录
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).with_context(|| format!("读取清单失败: {:?}", path))?;
        let base_dir = path.parent().unwrap_or(Path::new(""));

        Self::from_toml_str(&content, base_dir).with_context(|| format!("解析清单失败: {:?}", path))
    }

    pub fn from_toml_str(content: &str, base_dir: &Path) -> anyhow::Result<Self> {
        let mut config: BatchConfig = toml::from_str(content)?;
        for item in &mut config.assets {
            item.src = base_dir.join(&item.src);
            item.dst = base_dir.join(&item.dst);
        }
        for dir in &mut config.dirs {
            dir.src_dir = base_dir.join(&dir.src_dir);
            dir.out_dir = base_dir.join(&dir.out_dir);
        }
        Ok(config)
    }
}

/// 一个编译任务
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderTask {
    pub src: PathBuf,
    pub dst: PathBuf,
}

/// 把清单展开成任务列表
///
/// 目录中扩展名不认识的文件直接跳过；`assets` 中显式列出的文件不过滤，交给编译时报错。
pub fn collect_tasks(config: &BatchConfig) -> anyhow::Result<Vec<HeaderTask>> {
    let mut tasks: Vec<HeaderTask> = config
        .assets
        .iter()
        .map(|item| HeaderTask {
            src: item.src.clone(),
            dst: item.dst.clone(),
        })
        .collect();

    for dir in &config.dirs {
        if !dir.src_dir.is_dir() {
            anyhow::bail!("资源目录不存在: {:?}", dir.src_dir);
        }

        let found = walkdir::WalkDir::new(&dir.src_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| resource_kind(entry.path()).is_some())
            .filter_map(|entry| {
                let relative = entry.path().strip_prefix(&dir.src_dir).ok()?;
                Some(HeaderTask {
                    src: entry.path().to_path_buf(),
                    dst: dir.out_dir.join(relative).with_extension("h"),
                })
            });
        tasks.extend(found);
    }

    Ok(tasks)
}

/// 编译单个资源并写出
///
/// 只有编译成功后才会创建目录、写文件。
pub fn compile_to_file(src: &Path, dst: &Path, invocation: &str) -> anyhow::Result<()> {
    let header = compile_resource(src, invocation).with_context(|| format!("编译资源失败: {:?}", src))?;

    if let Some(parent) = dst.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("创建输出目录失败: {:?}", parent))?;
    }
    fs::write(dst, header).with_context(|| format!("写入头文件失败: {:?}", dst))?;
    Ok(())
}

/// 批量编译的结果，顺序和任务顺序一致
#[derive(Debug, Default)]
pub struct BatchReport {
    /// 成功写出的头文件
    pub written: Vec<PathBuf>,
    /// 失败的资源及错误信息
    pub failed: Vec<(PathBuf, String)>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// 并行编译所有任务
pub fn run_batch(tasks: &[HeaderTask], invocation: &str) -> BatchReport {
    let results: Vec<anyhow::Result<()>> = tasks
        .par_iter()
        .map(|task| {
            log::info!("Compiling resource: {:?}", task.src);
            compile_to_file(&task.src, &task.dst, invocation)
        })
        .collect();

    let mut report = BatchReport::default();
    for (task, result) in tasks.iter().zip(results) {
        match result {
            Ok(()) => report.written.push(task.dst.clone()),
            Err(e) => {
                log::error!("{:#}", e);
                report.failed.push((task.src.clone(), format!("{:#}", e)));
            }
        }
    }
    report
}
