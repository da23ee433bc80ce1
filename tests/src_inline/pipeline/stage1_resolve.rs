use super::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn explicit_files_keep_given_order() {
    let files = vec![PathBuf::from("b.csv"), PathBuf::from("a.csv")];
    let resolved = run_stage1(&InputSet::Files(files.clone())).expect("resolve");
    assert_eq!(resolved.files, files);
}

#[test]
fn directory_resolves_sorted() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("b.csv"), "1\n").expect("write file");
    fs::write(dir.path().join("a.csv"), "2\n").expect("write file");

    let resolved =
        run_stage1(&InputSet::Directory(dir.path().to_path_buf())).expect("resolve");
    assert_eq!(
        resolved.files,
        vec![dir.path().join("a.csv"), dir.path().join("b.csv")]
    );
}

#[test]
fn missing_directory_fails() {
    let dir = tempdir().expect("tempdir");
    let err = run_stage1(&InputSet::Directory(dir.path().join("absent"))).unwrap_err();
    match err {
        Stage1Error::Input(InputError::MissingDirectory(_)) => {}
        other => panic!("unexpected error: {other:?}"),
    }
}
