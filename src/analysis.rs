//! 分析パイプライン
//!
//! 読み込み済みの表に対して、点検 → クリーニング → 集計 → 描画 →
//! 所見出力を順に実行します。各ステージは前段の出力だけを消費する
//! 一方向の流れで、途中に分岐や再利用はありません。

use log::info;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::frame::{CleanFrame, IrisFrame, FEATURE_NAMES};
use crate::groupby::GroupBy;
use crate::stats::{self, DescriptiveStats};
use crate::vis::{self, PlotSettings};

/// チャートの出力ファイル名（出力ディレクトリ基準の固定名）
pub const CHART_FILES: [&str; 4] = [
    "line_chart.png",
    "bar_chart.png",
    "histogram.png",
    "scatter_plot.png",
];

/// 1回の分析実行の結果
///
/// コンソール出力とは別に、テストから検証できる形で集計結果を
/// 保持します。
#[derive(Debug)]
pub struct AnalysisReport {
    /// クリーニング前の行数
    pub rows_before: usize,
    /// クリーニング後の行数
    pub rows_after: usize,
    /// 数値列ごとの記述統計量（列の並び順）
    pub describe: Vec<(String, DescriptiveStats)>,
    /// 品種別の各特徴量の平均（品種名の辞書順）
    pub group_means: Vec<(String, [f64; 4])>,
    /// 品種別の行数（品種名の辞書順）
    pub group_sizes: Vec<(String, usize)>,
    /// 出力したチャートファイルのパス
    pub charts: Vec<PathBuf>,
}

/// 分析パイプラインを実行
///
/// 点検と集計の結果を標準出力に表示し、4種類のチャートを
/// `out_dir`に出力します。
pub fn run(frame: &IrisFrame, out_dir: &Path) -> Result<AnalysisReport> {
    inspect(frame);

    let clean = frame.dropna();
    info!(
        "cleaned table: {} rows in, {} rows out",
        frame.row_count(),
        clean.row_count()
    );

    let (describe, group_means, group_sizes) = summarize(&clean)?;
    let charts = render(&clean, &group_means, out_dir)?;
    report();

    Ok(AnalysisReport {
        rows_before: frame.row_count(),
        rows_after: clean.row_count(),
        describe,
        group_means,
        group_sizes,
        charts,
    })
}

/// 点検ステージ: 先頭5行・構造サマリ・欠損数の表示
///
/// 読み取り専用で、後段に渡すデータは生成しません。
fn inspect(frame: &IrisFrame) {
    println!("First 5 rows of the dataset:");
    print!("{}", frame.head_table(5));

    println!("\nDataset info:");
    print!("{}", frame.info_table());

    println!("\nMissing values check:");
    print!("{}", frame.missing_table());
}

/// 集計ステージ: 列ごとの記述統計と品種別平均
fn summarize(
    clean: &CleanFrame,
) -> Result<(
    Vec<(String, DescriptiveStats)>,
    Vec<(String, [f64; 4])>,
    Vec<(String, usize)>,
)> {
    let mut describe = Vec::with_capacity(FEATURE_NAMES.len());
    for &name in &FEATURE_NAMES {
        let column = clean.feature(name)?;
        describe.push((name.to_string(), stats::describe(column.values())?));
    }

    println!("\nDescriptive statistics:");
    print_describe(&describe);

    // 品種別の平均。BTreeMap経由なので品種名の辞書順で安定
    let mut means: BTreeMap<String, [f64; 4]> = BTreeMap::new();
    let mut group_sizes = Vec::new();
    for (fi, &name) in FEATURE_NAMES.iter().enumerate() {
        let (keys, values) = clean.species_pairs(name)?;
        let grouped = GroupBy::new(keys, values, Some(name.to_string()))?;
        if fi == 0 {
            group_sizes = grouped.size();
        }
        for (species, mean) in grouped.mean()? {
            means.entry(species).or_insert([0.0; 4])[fi] = mean;
        }
    }
    let group_means: Vec<(String, [f64; 4])> = means.into_iter().collect();

    println!("\nMean of each feature grouped by species:");
    print_group_means(&group_means);

    Ok((describe, group_means, group_sizes))
}

/// 描画ステージ: 4種類のチャートをファイル出力し、ターミナルにも表示
fn render(
    clean: &CleanFrame,
    group_means: &[(String, [f64; 4])],
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let mut charts = Vec::with_capacity(CHART_FILES.len());

    // 累積折れ線: 花弁長の累積和を行順に描く
    let petal_length = clean.feature("petal length (cm)")?;
    let cumulative = petal_length.cumsum();
    let path = out_dir.join(CHART_FILES[0]);
    vis::plot_cumulative_line(
        cumulative.values(),
        &path,
        &PlotSettings {
            title: "Cumulative Petal Length Over Entries".to_string(),
            x_label: "Entry Index".to_string(),
            y_label: "Cumulative Petal Length (cm)".to_string(),
            ..PlotSettings::default()
        },
    )?;
    info!("saved {}", path.display());
    println!("\nCumulative petal length over entries:");
    vis::text::show_line(cumulative.values());
    charts.push(path);

    // 棒グラフ: 品種ごとの花弁長平均。信頼区間は描かない
    let petal_index = 2;
    let categories: Vec<String> = group_means.iter().map(|(s, _)| s.clone()).collect();
    let bar_values: Vec<f64> = group_means.iter().map(|(_, m)| m[petal_index]).collect();
    let path = out_dir.join(CHART_FILES[1]);
    vis::plot_category_bar(
        &categories,
        &bar_values,
        &path,
        &PlotSettings {
            title: "Average Petal Length per Species".to_string(),
            x_label: "Species".to_string(),
            y_label: "Petal Length (cm)".to_string(),
            ..PlotSettings::default()
        },
    )?;
    info!("saved {}", path.display());
    println!("\nAverage petal length per species [{}]:", categories.join(", "));
    vis::text::show_bars(&bar_values);
    charts.push(path);

    // ヒストグラム: がく片幅の分布（15ビン + 平滑化曲線）
    let sepal_width = clean.feature("sepal width (cm)")?;
    let path = out_dir.join(CHART_FILES[2]);
    vis::plot_histogram(
        sepal_width.values(),
        15,
        &path,
        &PlotSettings {
            title: "Distribution of Sepal Width".to_string(),
            x_label: "Sepal Width (cm)".to_string(),
            y_label: "Frequency".to_string(),
            ..PlotSettings::default()
        },
    )?;
    info!("saved {}", path.display());
    println!("\nDistribution of sepal width:");
    let (histogram, _) = stats::histogram_counts(sepal_width.values(), 15)?;
    vis::text::show_histogram(&histogram);
    charts.push(path);

    // 散布図: がく片長 × 花弁長、品種別に色分け
    let sepal_length = clean.feature("sepal length (cm)")?;
    let mut groups: BTreeMap<String, Vec<(f64, f64)>> = BTreeMap::new();
    for ((species, &x), &y) in clean
        .species()
        .values()
        .iter()
        .zip(sepal_length.values())
        .zip(petal_length.values())
    {
        if let Some(name) = species.value() {
            groups.entry(name.clone()).or_default().push((x, y));
        }
    }
    let groups: Vec<(String, Vec<(f64, f64)>)> = groups.into_iter().collect();
    let path = out_dir.join(CHART_FILES[3]);
    vis::plot_grouped_scatter(
        &groups,
        &path,
        &PlotSettings {
            title: "Sepal Length vs. Petal Length".to_string(),
            x_label: "Sepal Length (cm)".to_string(),
            y_label: "Petal Length (cm)".to_string(),
            ..PlotSettings::default()
        },
    )?;
    info!("saved {}", path.display());
    println!("\nSepal length vs. petal length:");
    let all_points: Vec<(f64, f64)> = groups
        .iter()
        .flat_map(|(_, points)| points.iter().copied())
        .collect();
    vis::text::show_points(&all_points);
    charts.push(path);

    Ok(charts)
}

/// 所見ステージ: データセットの既知の構造に関する固定文
///
/// 集計結果から導出せず、手書きの文章をそのまま表示します。
fn report() {
    println!("\nObservations:");
    println!("- Setosa has significantly smaller petal length and width.");
    println!("- Scatter plot shows clear separation of Setosa from other species.");
    println!("- Distribution of sepal width shows a slightly right-skewed pattern.");
}

/// 記述統計の表を表示（列 = 特徴量、行 = 統計量）
fn print_describe(describe: &[(String, DescriptiveStats)]) {
    print!("{:>6}", "");
    for (name, _) in describe {
        print!("  {:>17}", name);
    }
    println!();

    for label in ["count", "mean", "std", "min", "25%", "50%", "75%", "max"] {
        print!("{:>6}", label);
        for (_, s) in describe {
            let value = match label {
                "count" => s.count as f64,
                "mean" => s.mean,
                "std" => s.std,
                "min" => s.min,
                "25%" => s.q1,
                "50%" => s.median,
                "75%" => s.q3,
                _ => s.max,
            };
            print!("  {:>17.6}", value);
        }
        println!();
    }
}

/// 品種別平均の表を表示（行 = 品種、列 = 特徴量）
fn print_group_means(group_means: &[(String, [f64; 4])]) {
    print!("{:<12}", "species");
    for name in FEATURE_NAMES {
        print!("  {:>17}", name);
    }
    println!();

    for (species, means) in group_means {
        print!("{:<12}", species);
        for mean in means {
            print!("  {:>17.6}", mean);
        }
        println!();
    }
}
