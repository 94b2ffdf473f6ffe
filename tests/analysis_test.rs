use tempfile::tempdir;

use irisrs::analysis::{self, CHART_FILES};
use irisrs::dataset;

#[test]
fn test_full_pipeline() {
    let dir = tempdir().unwrap();
    let frame = dataset::load_iris().unwrap();

    let report = analysis::run(&frame, dir.path()).unwrap();

    // クリーニング: 同梱データには欠損がないので150行のまま
    assert_eq!(report.rows_before, 150);
    assert_eq!(report.rows_after, 150);

    // 記述統計: 各数値列の件数は行数と一致する
    assert_eq!(report.describe.len(), 4);
    for (name, stats) in &report.describe {
        assert_eq!(stats.count, 150, "列 {} の件数が一致しない", name);
    }

    // 花弁長の平均は既知の値（約3.76cm）
    let (_, petal) = report
        .describe
        .iter()
        .find(|(name, _)| name == "petal length (cm)")
        .unwrap();
    assert!((petal.mean - 3.76).abs() < 0.01);
    assert!(petal.mean >= 1.0 && petal.mean <= 6.9);

    // 品種別平均: 3グループが品種名の辞書順で返る
    let names: Vec<&str> = report.group_means.iter().map(|(s, _)| s.as_str()).collect();
    assert_eq!(names, ["setosa", "versicolor", "virginica"]);

    // setosaの花弁長平均は他の品種より明確に小さい
    assert!(report.group_means[0].1[2] < report.group_means[1].1[2]);
    assert!(report.group_means[1].1[2] < report.group_means[2].1[2]);

    // グループサイズの合計はクリーニング後の行数
    let total: usize = report.group_sizes.iter().map(|(_, n)| n).sum();
    assert_eq!(total, report.rows_after);

    // チャート: 固定名の4ファイルが出力される
    assert_eq!(report.charts.len(), 4);
    for (path, name) in report.charts.iter().zip(CHART_FILES) {
        assert_eq!(path.file_name().unwrap().to_str().unwrap(), name);
        let metadata = std::fs::metadata(path).expect("チャートファイルが存在しない");
        assert!(metadata.len() > 0);
    }
}

#[test]
fn test_cumulative_series_is_monotonic() {
    let frame = dataset::load_iris().unwrap();
    let clean = frame.dropna();

    let petal = clean.feature("petal length (cm)").unwrap();
    let cumulative = petal.cumsum();

    for pair in cumulative.values().windows(2) {
        assert!(pair[1] >= pair[0]);
    }

    // 最後の値は全体の合計と一致する
    let last = *cumulative.values().last().unwrap();
    assert!((last - petal.sum()).abs() < 1e-9);
}

#[test]
fn test_grouped_means_match_known_values() {
    let frame = dataset::load_iris().unwrap();
    let clean = frame.dropna();

    let (keys, values) = clean.species_pairs("petal length (cm)").unwrap();
    let grouped = irisrs::GroupBy::new(keys, values, None).unwrap();
    let means = grouped.mean().unwrap();

    // 既知の品種別花弁長平均: setosa 1.462, versicolor 4.260, virginica 5.552
    assert!((means[0].1 - 1.462).abs() < 0.001);
    assert!((means[1].1 - 4.260).abs() < 0.001);
    assert!((means[2].1 - 5.552).abs() < 0.001);
}

#[test]
fn test_load_failure_produces_no_charts() {
    // 読み込みに失敗した場合、描画まで到達しない
    let dir = tempdir().unwrap();
    let csv = "\
sepal_length,sepal_width,petal_length,petal_width,target
bad,data,here,0.2,0
";
    let result = dataset::read_csv(csv.as_bytes());
    assert!(result.is_err());

    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert!(entries.is_empty());
}
