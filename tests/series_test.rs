use irisrs::{NASeries, Series, NA};

#[test]
fn test_series_creation() {
    let series = Series::new(vec![1.0, 2.0, 3.0, 4.0, 5.0], Some("test".to_string()));
    assert_eq!(series.len(), 5);
    assert_eq!(series.name(), Some(&"test".to_string()));
    assert_eq!(series.get(0), Some(&1.0));
    assert_eq!(series.get(4), Some(&5.0));
    assert_eq!(series.get(5), None);
}

#[test]
fn test_series_numeric_operations() {
    let series = Series::new(vec![10.0, 20.0, 30.0, 40.0, 50.0], Some("numbers".to_string()));

    // 合計
    assert_eq!(series.sum(), 150.0);

    // 平均
    assert_eq!(series.mean().unwrap(), 30.0);

    // 最小値・最大値
    assert_eq!(series.min().unwrap(), 10.0);
    assert_eq!(series.max().unwrap(), 50.0);
}

#[test]
fn test_empty_series() {
    let empty_series: Series<f64> = Series::new(vec![], Some("empty".to_string()));

    assert_eq!(empty_series.len(), 0);
    assert!(empty_series.is_empty());

    // 空のシリーズでの合計は0（デフォルト値）になるはず
    assert_eq!(empty_series.sum(), 0.0);

    // 空のシリーズでの統計計算はエラーになるはず
    assert!(empty_series.mean().is_err());
    assert!(empty_series.min().is_err());
    assert!(empty_series.max().is_err());
}

#[test]
fn test_series_cumsum() {
    let series: Series<f64> = Series::new(vec![1.4, 1.3, 1.5, 4.7], Some("petal".to_string()));
    let cumulative = series.cumsum();

    assert_eq!(cumulative.len(), 4);
    assert!((cumulative.values()[0] - 1.4).abs() < 1e-10);
    assert!((cumulative.values()[3] - 8.9).abs() < 1e-10);

    // 非負の系列の累積和は単調非減少
    for pair in cumulative.values().windows(2) {
        assert!(pair[1] >= pair[0]);
    }

    // 最後の値は合計と一致する
    assert!((cumulative.values()[3] - series.sum()).abs() < 1e-10);
}

#[test]
fn test_na_series_counts() {
    let series = NASeries::new(
        vec![NA::Value(10.0), NA::Value(20.0), NA::NA, NA::Value(40.0)],
        Some("test".to_string()),
    );

    assert_eq!(series.len(), 4);
    assert_eq!(series.na_count(), 1);
    assert_eq!(series.value_count(), 3);
    assert!(series.has_na());
}

#[test]
fn test_na_series_from_options() {
    let series = NASeries::from_options(
        vec![Some(1.0), None, Some(3.0)],
        Some("opts".to_string()),
    );
    assert_eq!(series.na_count(), 1);
    assert_eq!(series.get(1), Some(&NA::NA));
}

#[test]
fn test_na_series_dropna() {
    let series = NASeries::new(
        vec![NA::Value(1.0), NA::NA, NA::Value(3.0), NA::NA],
        Some("test".to_string()),
    );
    let dropped = series.dropna();

    // 順序を保ったまま欠損だけ除かれる
    assert_eq!(dropped.len(), 2);
    assert_eq!(dropped.values(), &[1.0, 3.0]);
    assert_eq!(dropped.name(), Some(&"test".to_string()));
}

#[test]
fn test_na_series_take_rows() {
    let series = NASeries::from_vec(vec![10.0, 20.0, 30.0, 40.0], Some("test".to_string()));
    let taken = series.take_rows(&[0, 2, 3]);

    assert_eq!(taken.values(), &[10.0, 30.0, 40.0]);
}
