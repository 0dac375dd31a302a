// tests/target_dir.rs

use std::error::Error;
use std::path::{Path, PathBuf};

use dropcatch::errors::DropcatchError;
use dropcatch::fs::mock::MockFileSystem;
use dropcatch::fs::{FileSystem, RealFileSystem};
use dropcatch::receive::{ensure_target_dir, resolve_target_dir};

type TestResult = Result<(), Box<dyn Error>>;

fn abs_cwd() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn dot_resolves_to_cwd() -> TestResult {
    let cwd = abs_cwd();
    assert_eq!(resolve_target_dir(".", &cwd)?, cwd);
    Ok(())
}

#[test]
fn relative_paths_are_joined_and_cleaned() -> TestResult {
    let cwd = abs_cwd();
    assert_eq!(
        resolve_target_dir("./drops/./incoming/../done", &cwd)?,
        cwd.join("drops").join("done")
    );
    assert_eq!(resolve_target_dir("..", &cwd)?, cwd.parent().unwrap());
    Ok(())
}

#[test]
fn absolute_paths_ignore_cwd() -> TestResult {
    let other = tempfile::tempdir()?;
    let raw = other.path().join("x").join("..").join("y");
    let resolved = resolve_target_dir(raw.to_str().unwrap(), &abs_cwd())?;
    assert_eq!(resolved, other.path().join("y"));
    Ok(())
}

#[test]
fn empty_path_means_cwd() -> TestResult {
    let cwd = abs_cwd();
    assert_eq!(resolve_target_dir("", &cwd)?, cwd);
    Ok(())
}

#[test]
fn surrounding_whitespace_is_part_of_the_name() -> TestResult {
    let cwd = abs_cwd();
    assert_eq!(resolve_target_dir(" spaced ", &cwd)?, cwd.join(" spaced "));
    assert_eq!(resolve_target_dir("   ", &cwd)?, cwd.join("   "));
    Ok(())
}

#[test]
fn relative_cwd_cannot_anchor() {
    let result = resolve_target_dir("drops", Path::new("relative/cwd"));
    assert!(matches!(result, Err(DropcatchError::DirectoryError { .. })));
}

#[test]
fn missing_directory_and_parents_are_created() -> TestResult {
    let root = tempfile::tempdir()?;
    let target = root.path().join("a").join("b").join("c");
    assert!(!target.exists());

    ensure_target_dir(&RealFileSystem, &target)?;

    assert!(target.is_dir());
    Ok(())
}

#[cfg(unix)]
#[test]
fn created_directory_is_not_more_permissive_than_0755() -> TestResult {
    use std::os::unix::fs::PermissionsExt;

    let root = tempfile::tempdir()?;
    let target = root.path().join("fresh");
    ensure_target_dir(&RealFileSystem, &target)?;

    let mode = std::fs::metadata(&target)?.permissions().mode() & 0o777;
    assert_eq!(mode & 0o700, 0o700, "owner must have rwx, got {mode:o}");
    assert_eq!(mode & !0o755, 0, "mode wider than 0755: {mode:o}");
    Ok(())
}

#[test]
fn existing_directory_is_left_alone() -> TestResult {
    let root = tempfile::tempdir()?;
    std::fs::write(root.path().join("keep.txt"), b"keep")?;

    ensure_target_dir(&RealFileSystem, root.path())?;

    assert!(root.path().join("keep.txt").is_file());
    Ok(())
}

#[test]
fn file_in_the_way_is_a_directory_error() -> TestResult {
    let root = tempfile::tempdir()?;
    let blocker = root.path().join("blocker");
    std::fs::write(&blocker, b"not a dir")?;

    match ensure_target_dir(&RealFileSystem, &blocker) {
        Err(DropcatchError::DirectoryError { path, message }) => {
            assert_eq!(path, blocker);
            assert!(message.contains("not a directory"));
        }
        other => panic!("Expected DirectoryError, got: {:?}", other),
    }

    let nested = blocker.join("child");
    assert!(matches!(
        ensure_target_dir(&RealFileSystem, &nested),
        Err(DropcatchError::DirectoryError { .. })
    ));
    Ok(())
}

#[test]
fn mock_fs_creates_only_when_missing() -> TestResult {
    let fs = MockFileSystem::new();
    fs.add_dir("/srv/existing");

    ensure_target_dir(&fs, Path::new("/srv/existing"))?;
    ensure_target_dir(&fs, Path::new("/srv/new/inbox"))?;

    assert_eq!(fs.created_dirs(), vec![PathBuf::from("/srv/new/inbox")]);
    assert!(fs.is_dir(Path::new("/srv/new")));
    assert!(fs.is_dir(Path::new("/srv/new/inbox")));
    Ok(())
}

#[test]
fn mock_fs_reports_file_along_the_path() {
    let fs = MockFileSystem::new();
    fs.add_file("/srv/blocker", b"x".to_vec());

    let result = ensure_target_dir(&fs, Path::new("/srv/blocker/inbox"));
    match result {
        Err(DropcatchError::DirectoryError { message, .. }) => {
            assert!(message.contains("Not a directory"));
        }
        other => panic!("Expected DirectoryError, got: {:?}", other),
    }
}
