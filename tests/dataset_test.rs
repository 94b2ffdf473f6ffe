use irisrs::dataset::{self, species_name, SPECIES_NAMES};
use irisrs::frame::FEATURE_NAMES;
use irisrs::NA;

#[test]
fn test_load_iris_shape() {
    let frame = dataset::load_iris().unwrap();

    assert_eq!(frame.row_count(), 150);
    assert_eq!(frame.column_count(), 5);
}

#[test]
fn test_load_iris_has_no_missing_values() {
    let frame = dataset::load_iris().unwrap();

    for (name, count) in frame.missing_counts() {
        assert_eq!(count, 0, "列 {} に欠損がある", name);
    }
}

#[test]
fn test_load_iris_targets_in_range() {
    let frame = dataset::load_iris().unwrap();

    for target in frame.target().values() {
        match target {
            NA::Value(t) => assert!((0..=2).contains(t)),
            NA::NA => panic!("targetに欠損がある"),
        }
    }
}

#[test]
fn test_load_iris_feature_columns() {
    let frame = dataset::load_iris().unwrap();

    for &name in &FEATURE_NAMES {
        let column = frame.feature(name).unwrap();
        assert_eq!(column.len(), 150);
        assert_eq!(column.na_count(), 0);
    }

    // 既知のデータ範囲: 花弁長は[1.0, 6.9]cm
    let petal = frame.feature("petal length (cm)").unwrap().dropna();
    assert_eq!(petal.min().unwrap(), 1.0);
    assert_eq!(petal.max().unwrap(), 6.9);
}

#[test]
fn test_species_name_mapping() {
    // 0/1/2 → 品種名の固定マッピング（全単射）
    assert_eq!(species_name(0), NA::Value("setosa"));
    assert_eq!(species_name(1), NA::Value("versicolor"));
    assert_eq!(species_name(2), NA::Value("virginica"));
    assert_eq!(SPECIES_NAMES, ["setosa", "versicolor", "virginica"]);

    // 範囲外の値は欠損になる
    assert_eq!(species_name(3), NA::NA);
    assert_eq!(species_name(-1), NA::NA);
}

#[test]
fn test_read_csv_with_missing_cells() {
    let csv = "\
sepal_length,sepal_width,petal_length,petal_width,target
5.1,3.5,1.4,0.2,0
,3.0,1.4,0.2,0
4.7,3.2,,0.2,1
";
    let frame = dataset::read_csv(csv.as_bytes()).unwrap();

    assert_eq!(frame.row_count(), 3);
    assert_eq!(frame.feature("sepal length (cm)").unwrap().na_count(), 1);
    assert_eq!(frame.feature("petal length (cm)").unwrap().na_count(), 1);
    assert_eq!(frame.target().na_count(), 0);
}

#[test]
fn test_read_csv_malformed_is_error() {
    let csv = "\
sepal_length,sepal_width,petal_length,petal_width,target
not-a-number,3.5,1.4,0.2,0
";
    let result = dataset::read_csv(csv.as_bytes());
    assert!(result.is_err());

    // 診断メッセージは原因を説明できる形で取り出せる
    let message = result.unwrap_err().to_string();
    assert!(!message.is_empty());
}

#[test]
fn test_read_csv_empty_is_error() {
    let csv = "sepal_length,sepal_width,petal_length,petal_width,target\n";
    assert!(dataset::read_csv(csv.as_bytes()).is_err());
}
