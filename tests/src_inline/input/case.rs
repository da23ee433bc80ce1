use super::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn int_case_reads_values_in_order() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("case.csv");
    fs::write(&path, "3\n1\n2\n").expect("write file");

    let case = read_int_case(&path).expect("read case");
    assert_eq!(case.values, vec![3, 1, 2]);
}

#[test]
fn int_case_rejects_extra_fields() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("case.csv");
    fs::write(&path, "1\n2,3\n").expect("write file");

    let err = read_int_case(&path).unwrap_err();
    match err {
        InputError::FieldCount {
            line,
            expected,
            found,
            ..
        } => {
            assert_eq!(line, 2);
            assert_eq!(expected, 1);
            assert_eq!(found, 2);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn int_case_rejects_non_integer() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("case.csv");
    fs::write(&path, "1\nx\n3\n").expect("write file");

    let err = read_int_case(&path).unwrap_err();
    match err {
        InputError::InvalidInteger { line, value, .. } => {
            assert_eq!(line, 2);
            assert_eq!(value, "x");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn int_case_missing_file_fails() {
    let dir = tempdir().expect("tempdir");
    let err = read_int_case(&dir.path().join("absent.csv")).unwrap_err();
    match err {
        InputError::MissingFile(_) => {}
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn float_case_skips_header() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("case.csv");
    fs::write(&path, "x,y\n1.0,2.0\n3.0,4.0\n").expect("write file");

    let case = read_float_case(&path).expect("read case");
    assert_eq!(case.rows, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
}

#[test]
fn float_case_rejects_bad_float() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("case.csv");
    fs::write(&path, "x,y\n1.0,abc\n").expect("write file");

    let err = read_float_case(&path).unwrap_err();
    match err {
        InputError::InvalidFloat { line, value, .. } => {
            assert_eq!(line, 2);
            assert_eq!(value, "abc");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn float_case_rejects_ragged_rows() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("case.csv");
    fs::write(&path, "x,y\n1.0,2.0\n3.0\n").expect("write file");

    let err = read_float_case(&path).unwrap_err();
    match err {
        InputError::FieldCount {
            line,
            expected,
            found,
            ..
        } => {
            assert_eq!(line, 3);
            assert_eq!(expected, 2);
            assert_eq!(found, 1);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn float_case_header_only_is_empty() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("case.csv");
    fs::write(&path, "x,y\n").expect("write file");

    let case = read_float_case(&path).expect("read case");
    assert!(case.rows.is_empty());
}
