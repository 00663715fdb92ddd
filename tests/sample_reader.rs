use rtlearner::prelude::*;

use std::env;
use std::path::PathBuf;


fn dataset(name: &str) -> PathBuf {
    let mut path = env::current_dir().unwrap();
    path.push("tests/dataset");
    path.push(name);
    path
}


#[test]
fn last_column_is_the_default_target() {
    let sample = SampleReader::new()
        .file(dataset("ripple.csv"))
        .has_header(true)
        .read()
        .unwrap();

    assert_eq!(sample.shape(), (250, 2));
    assert_eq!(sample.feature_names(), vec!["x1", "x2"]);
    let (x, y) = sample.at(0);
    assert_eq!(x, vec![-0.352334, -0.698302]);
    assert_eq!(y, -0.393153);
}


#[test]
fn named_target_is_removed_from_the_features() {
    let sample = SampleReader::new()
        .file(dataset("ripple.csv"))
        .has_header(true)
        .target_feature("x1")
        .read()
        .unwrap();

    assert_eq!(sample.shape(), (250, 2));
    assert_eq!(sample.feature_names(), vec!["x2", "y"]);
    assert_eq!(sample.target()[0], -0.352334);
}


#[test]
fn first_column_can_be_dropped() {
    let sample = SampleReader::new()
        .file(dataset("dated.csv"))
        .has_header(true)
        .drop_first_column(true)
        .read()
        .unwrap();

    assert_eq!(sample.shape(), (10, 3));
    assert_eq!(sample.feature_names(), vec!["a", "b", "c"]);
}


#[test]
fn headerless_columns_get_default_names() {
    let sample = SampleReader::new()
        .file(dataset("no_header.csv"))
        .has_header(false)
        .read()
        .unwrap();

    assert_eq!(sample.shape(), (6, 2));
    assert_eq!(sample.feature_names(), vec!["Feat. [1]", "Feat. [2]"]);
    assert_eq!(sample.features()[1].vals(), &[0.0, 1.0, 4.0, 9.0, 16.0, 25.0]);
    assert_eq!(sample.target(), &[1.0, 3.0, 5.0, 7.0, 9.0, 11.0]);
}


#[test]
fn unknown_target_is_an_error() {
    let result = SampleReader::new()
        .file(dataset("ripple.csv"))
        .has_header(true)
        .target_feature("no such column")
        .read();
    assert!(result.is_err());
}


#[test]
fn missing_file_is_an_error() {
    let result = SampleReader::new()
        .file(dataset("does_not_exist.csv"))
        .read();
    assert!(result.is_err());
}


#[test]
fn reader_without_file_is_invalid() {
    let err = SampleReader::new().read().unwrap_err();
    assert!(matches!(err, RTreeError::InvalidInput(_)));
}
