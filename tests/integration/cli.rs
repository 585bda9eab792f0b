use std::process::Command;

fn favicon_render() -> Command {
    Command::new(env!("CARGO_BIN_EXE_favicon-render"))
}

#[test]
fn success() {
    let dir = tempfile::tempdir().unwrap();
    let input = std::fs::canonicalize("tests/svg/solid-square.svg").unwrap();
    let out = dir.path().join("favicon.png");

    let output = favicon_render()
        .arg("--input")
        .arg(&input)
        .arg("-o")
        .arg(&out)
        .arg("--quiet")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim(), "Favicon created successfully!");

    let img = crate::load_png(&out);
    assert_eq!((img.width, img.height), (32, 32));
}

#[test]
fn default_paths() {
    let dir = tempfile::tempdir().unwrap();
    let work_dir = dir.path().join("assets");
    std::fs::create_dir(&work_dir).unwrap();
    std::fs::copy("tests/svg/wide.svg", work_dir.join("favicon.svg")).unwrap();

    let output = favicon_render()
        .arg("--quiet")
        .current_dir(&work_dir)
        .output()
        .unwrap();

    assert!(output.status.success());
    let img = crate::load_png(&dir.path().join("favicon.png"));
    assert_eq!((img.width, img.height), (32, 32));
}

#[test]
fn size_flag() {
    let dir = tempfile::tempdir().unwrap();
    let input = std::fs::canonicalize("tests/svg/tall.svg").unwrap();
    let out = dir.path().join("favicon.png");

    let output = favicon_render()
        .args(["--size=16", "--fit", "contain", "--background", "#fff"])
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&out)
        .output()
        .unwrap();

    assert!(output.status.success());
    let img = crate::load_png(&out);
    assert_eq!((img.width, img.height), (16, 16));
}

#[test]
fn read_failure() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("favicon.png");

    let output = favicon_render()
        .arg("-i")
        .arg(dir.path().join("missing.svg"))
        .arg("-o")
        .arg(&out)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("Error: failed to read"), "{}", stderr);
    assert!(!out.exists());
}

#[test]
fn invalid_size() {
    let output = favicon_render().args(["--size", "0"]).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("LENGTH cannot be zero"), "{}", stderr);
}

#[test]
fn too_large_size() {
    let output = favicon_render().args(["--size", "4097"]).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("LENGTH cannot be larger than 4096"), "{}", stderr);
}

#[test]
fn unknown_argument() {
    let output = favicon_render().arg("--width").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("USAGE:"));
}
