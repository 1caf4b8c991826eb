use std::path::Path;
use std::process::Command;

use super::{InstallError, Installer, PipInstaller, run_install};

fn manifest_in(dir: &Path) -> std::path::PathBuf {
    let manifest = dir.join("requirements.txt");
    std::fs::write(&manifest, "numpy\n").unwrap();
    manifest
}

#[test]
fn test_pip_command_args() {
    let installer = PipInstaller::new("/usr/bin/python3");
    let command = installer.command(Path::new("requirements.txt"));

    assert_eq!(command.get_program(), "/usr/bin/python3");
    let args: Vec<_> = command.get_args().map(|a| a.to_string_lossy().into_owned()).collect();
    assert_eq!(args, ["-m", "pip", "install", "-r", "requirements.txt"]);
}

#[test]
fn test_default_installer() {
    let installer = PipInstaller::default();
    assert_eq!(installer.python(), Path::new("python3"));
    assert_eq!(installer.describe(), "python3 -m pip");
}

#[test]
fn test_missing_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = dir.path().join("requirements.txt");

    let result = PipInstaller::default().install(&manifest);
    assert!(matches!(result, Err(InstallError::ManifestNotFound(p)) if p == manifest));
}

#[test]
fn test_spawn_failure() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = manifest_in(dir.path());

    let result = PipInstaller::new(dir.path().join("no-such-python")).install(&manifest);
    assert!(matches!(result, Err(InstallError::Spawn { .. })));
}

#[cfg(unix)]
#[test]
fn test_successful_install() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = manifest_in(dir.path());

    assert!(run_install(Command::new("true"), &manifest).is_ok());
}

#[cfg(unix)]
#[test]
fn test_non_zero_exit() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = manifest_in(dir.path());

    // `false` 忽略参数并以 1 退出，模拟 pip 失败
    let result = PipInstaller::new("false").install(&manifest);
    assert!(matches!(
        result,
        Err(InstallError::NonZeroExit { code: Some(1), .. })
    ));
}
