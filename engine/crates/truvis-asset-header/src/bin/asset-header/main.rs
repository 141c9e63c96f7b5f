//! 资源 -> C 头文件工具
//!
//! ```text
//! asset-header <resource_file> <header_file>
//! asset-header --manifest assets.toml
//! ```
//!
//! 不带任何参数时读取工作区根目录下的 `assets.toml`。

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use truvis_asset_header::batch::{collect_tasks, compile_to_file, run_batch, BatchConfig};
use truvis_crate_tools::init_log::{init_log, init_log_with_level};
use truvis_crate_tools::resource::TruvisPath;

#[derive(Parser, Debug)]
#[command(version, about = "Convert game resources into C headers", long_about = None)]
struct Args {
    /// 输入资源文件
    #[arg(requires = "header_file", conflicts_with = "manifest")]
    resource_file: Option<PathBuf>,

    /// 输出头文件
    header_file: Option<PathBuf>,

    /// 批量编译清单
    #[arg(short, long)]
    manifest: Option<PathBuf>,

    /// 输出 debug 日志
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if args.verbose {
        init_log_with_level(log::LevelFilter::Debug);
    } else {
        init_log();
    }

    // 生成的头文件里记录完整的命令行
    let invocation = std::env::args().collect::<Vec<_>>().join(" ");

    if let (Some(resource_file), Some(header_file)) = (&args.resource_file, &args.header_file) {
        compile_to_file(resource_file, header_file, &invocation)?;
        log::info!("{:?} -> {:?}", resource_file, header_file);
        return Ok(());
    }

    let manifest = args.manifest.unwrap_or_else(TruvisPath::asset_manifest_path);
    log::info!("Asset manifest: {:?}", manifest);

    let config = BatchConfig::from_file(&manifest)?;
    let tasks = collect_tasks(&config).with_context(|| format!("展开清单失败: {:?}", manifest))?;
    let report = run_batch(&tasks, &invocation);

    log::info!(
        "Asset compilation completed: {} written, {} failed",
        report.written.len(),
        report.failed.len()
    );
    if !report.is_success() {
        anyhow::bail!("{} resources failed to compile", report.failed.len());
    }
    Ok(())
}
