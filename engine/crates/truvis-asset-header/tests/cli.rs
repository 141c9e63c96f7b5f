use std::fs;
use std::path::Path;
use std::process::Command;

const BIN: &str = env!("CARGO_BIN_EXE_asset-header");

fn asset(name: &str) -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("assets")
        .join(name)
        .to_string_lossy()
        .into_owned()
}

fn scratch_dir(name: &str) -> std::path::PathBuf {
    let dir = Path::new(env!("CARGO_TARGET_TMPDIR")).join("asset-header-cli").join(name);
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_single_file() {
    let dir = scratch_dir("single");
    let src = asset("font_frag.glsl");
    let dst = dir.join("font_frag.h");

    let status = Command::new(BIN).arg(&src).arg(&dst).status().unwrap();
    assert!(status.success());

    let header = fs::read_to_string(&dst).unwrap();
    let mut lines = header.lines();
    assert_eq!(lines.next(), Some("// THIS FILE WAS AUTOGENERATED BY:"));
    // 第二行是完整命令行
    let invocation = lines.next().unwrap();
    assert!(invocation.starts_with("// "));
    assert!(invocation.ends_with(&format!("{} {}", src, dst.display())));
    assert!(header.contains(&format!("static const char SHADER_FONT_FRAG_PATH[] = \"{}\";\n", src)));
}

#[test]
fn test_unknown_type_writes_nothing() {
    let dir = scratch_dir("unknown");
    let dst = dir.join("mtl.h");

    let output = Command::new(BIN).arg(asset("two_materials.mtl")).arg(&dst).output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown resource type"));
    assert!(!dst.exists());
}

#[test]
fn test_manifest() {
    let dir = scratch_dir("manifest");
    let manifest = dir.join("assets.toml");
    fs::write(
        &manifest,
        format!(
            "[[assets]]\nsrc = {:?}\ndst = \"out/quad.h\"\n",
            asset("quad.obj")
        ),
    )
    .unwrap();

    let status = Command::new(BIN).arg("--manifest").arg(&manifest).status().unwrap();
    assert!(status.success());
    assert!(dir.join("out").join("quad.h").is_file());
}
