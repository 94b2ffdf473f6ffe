use tempfile::tempdir;

use irisrs::vis::{
    plot_category_bar, plot_cumulative_line, plot_grouped_scatter, plot_histogram, OutputType,
    PlotSettings,
};

fn assert_non_empty(path: &std::path::Path) {
    let metadata = std::fs::metadata(path).expect("出力ファイルが存在しない");
    assert!(metadata.len() > 0, "出力ファイルが空: {}", path.display());
}

#[test]
fn test_plot_cumulative_line() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("line.png");

    let values: Vec<f64> = (1..=50).map(|i| i as f64 * 0.5).collect();
    plot_cumulative_line(&values, &path, &PlotSettings::default()).unwrap();

    assert_non_empty(&path);
}

#[test]
fn test_plot_cumulative_line_empty_is_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("line.png");

    assert!(plot_cumulative_line(&[], &path, &PlotSettings::default()).is_err());
    assert!(!path.exists());
}

#[test]
fn test_plot_category_bar() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bar.png");

    let categories = vec![
        "setosa".to_string(),
        "versicolor".to_string(),
        "virginica".to_string(),
    ];
    let values = vec![1.46, 4.26, 5.55];
    plot_category_bar(&categories, &values, &path, &PlotSettings::default()).unwrap();

    assert_non_empty(&path);
}

#[test]
fn test_plot_category_bar_length_mismatch_is_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bar.png");

    let categories = vec!["a".to_string(), "b".to_string()];
    let result = plot_category_bar(&categories, &[1.0], &path, &PlotSettings::default());
    assert!(result.is_err());
}

#[test]
fn test_plot_histogram() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("hist.png");

    let values = vec![
        2.9, 3.0, 3.0, 3.1, 3.2, 3.5, 3.5, 3.6, 2.5, 2.8, 3.0, 3.1, 3.4, 2.7, 3.0,
    ];
    plot_histogram(&values, 15, &path, &PlotSettings::default()).unwrap();

    assert_non_empty(&path);
}

#[test]
fn test_plot_histogram_zero_bins_is_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("hist.png");

    assert!(plot_histogram(&[1.0, 2.0], 0, &path, &PlotSettings::default()).is_err());
}

#[test]
fn test_plot_grouped_scatter() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scatter.png");

    let groups = vec![
        ("setosa".to_string(), vec![(5.1, 1.4), (4.9, 1.4), (4.7, 1.3)]),
        ("versicolor".to_string(), vec![(7.0, 4.7), (6.4, 4.5)]),
        ("virginica".to_string(), vec![(6.3, 6.0), (5.8, 5.1)]),
    ];
    plot_grouped_scatter(&groups, &path, &PlotSettings::default()).unwrap();

    assert_non_empty(&path);
}

#[test]
fn test_plot_grouped_scatter_all_empty_is_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scatter.png");

    let groups = vec![("setosa".to_string(), vec![])];
    assert!(plot_grouped_scatter(&groups, &path, &PlotSettings::default()).is_err());
}

#[test]
fn test_svg_output_type() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("line.svg");

    let settings = PlotSettings {
        output_type: OutputType::SVG,
        ..PlotSettings::default()
    };
    let values = vec![1.0, 2.5, 4.0, 4.5];
    plot_cumulative_line(&values, &path, &settings).unwrap();

    assert_non_empty(&path);
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("<svg"));
}
