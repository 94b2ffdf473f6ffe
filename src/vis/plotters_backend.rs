//! Plottersを使用したチャート描画の実装
//!
//! 4種類のチャート（累積折れ線・品種別棒グラフ・ヒストグラム・
//! 品種別散布図）をPNGまたはSVGファイルとして出力します。

use plotters::coord::ranged1d::{IntoSegmentedCoord, SegmentValue};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

use crate::error::{Error, Result};
use crate::stats;
use crate::vis::{OutputType, PlotSettings};

/// 累積折れ線グラフを出力
///
/// x = 行番号（0始まり）、y = 渡された系列の値。累積和を渡せば
/// 単調非減少の折れ線になります。
pub fn plot_cumulative_line<P: AsRef<Path>>(
    values: &[f64],
    path: P,
    settings: &PlotSettings,
) -> Result<()> {
    if values.is_empty() {
        return Err(Error::EmptyData("プロットするデータがありません".to_string()));
    }

    match settings.output_type {
        OutputType::PNG => {
            let root = BitMapBackend::new(path.as_ref(), (settings.width, settings.height))
                .into_drawing_area();
            draw_line(&root, values, settings)
        }
        OutputType::SVG => {
            let root = SVGBackend::new(path.as_ref(), (settings.width, settings.height))
                .into_drawing_area();
            draw_line(&root, values, settings)
        }
    }
}

/// カテゴリ別の棒グラフを出力
///
/// x = カテゴリ名、y = カテゴリごとの値。誤差棒や信頼区間は
/// 描画しません。
pub fn plot_category_bar<P: AsRef<Path>>(
    categories: &[String],
    values: &[f64],
    path: P,
    settings: &PlotSettings,
) -> Result<()> {
    if categories.is_empty() {
        return Err(Error::EmptyData("プロットするカテゴリがありません".to_string()));
    }
    if categories.len() != values.len() {
        return Err(Error::InconsistentRowCount {
            expected: categories.len(),
            found: values.len(),
        });
    }

    match settings.output_type {
        OutputType::PNG => {
            let root = BitMapBackend::new(path.as_ref(), (settings.width, settings.height))
                .into_drawing_area();
            draw_bar(&root, categories, values, settings)
        }
        OutputType::SVG => {
            let root = SVGBackend::new(path.as_ref(), (settings.width, settings.height))
                .into_drawing_area();
            draw_bar(&root, categories, values, settings)
        }
    }
}

/// ヒストグラムを出力
///
/// 固定幅のビンに度数を集計し、ガウスカーネル密度の平滑化曲線を
/// 重ねて描画します。
pub fn plot_histogram<P: AsRef<Path>>(
    values: &[f64],
    bins: usize,
    path: P,
    settings: &PlotSettings,
) -> Result<()> {
    if values.is_empty() {
        return Err(Error::EmptyData("データが空です".to_string()));
    }
    if bins == 0 {
        return Err(Error::InvalidInput(
            "ビン数は1以上である必要があります".to_string(),
        ));
    }

    match settings.output_type {
        OutputType::PNG => {
            let root = BitMapBackend::new(path.as_ref(), (settings.width, settings.height))
                .into_drawing_area();
            draw_histogram(&root, values, bins, settings)
        }
        OutputType::SVG => {
            let root = SVGBackend::new(path.as_ref(), (settings.width, settings.height))
                .into_drawing_area();
            draw_histogram(&root, values, bins, settings)
        }
    }
}

/// グループ別の散布図を出力
///
/// グループごとに色を変えて点を描画し、凡例にグループ名を表示します。
pub fn plot_grouped_scatter<P: AsRef<Path>>(
    groups: &[(String, Vec<(f64, f64)>)],
    path: P,
    settings: &PlotSettings,
) -> Result<()> {
    if groups.iter().all(|(_, points)| points.is_empty()) {
        return Err(Error::EmptyData("プロットするデータがありません".to_string()));
    }

    match settings.output_type {
        OutputType::PNG => {
            let root = BitMapBackend::new(path.as_ref(), (settings.width, settings.height))
                .into_drawing_area();
            draw_scatter(&root, groups, settings)
        }
        OutputType::SVG => {
            let root = SVGBackend::new(path.as_ref(), (settings.width, settings.height))
                .into_drawing_area();
            draw_scatter(&root, groups, settings)
        }
    }
}

fn draw_line<DB>(
    root: &DrawingArea<DB, Shift>,
    values: &[f64],
    settings: &PlotSettings,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let x_max = values.len().saturating_sub(1) as f64;
    let y_min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let y_max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let y_margin = ((y_max - y_min) * 0.05).max(1.0);

    let mut chart = ChartBuilder::on(root)
        .caption(&settings.title, ("sans-serif", 30).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(0.0..(x_max + 1.0), (y_min - y_margin)..(y_max + y_margin))?;

    if settings.show_grid {
        chart
            .configure_mesh()
            .x_labels(10)
            .y_labels(10)
            .x_desc(&settings.x_label)
            .y_desc(&settings.y_label)
            .draw()?;
    }

    let rgb = settings.color_palette[0];
    let color = RGBColor(rgb.0, rgb.1, rgb.2);
    let points: Vec<(f64, f64)> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| (i as f64, v))
        .collect();

    chart
        .draw_series(LineSeries::new(points, color))?
        .label(settings.y_label.clone())
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], RGBColor(rgb.0, rgb.1, rgb.2))
        });

    if settings.show_legend {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .position(SeriesLabelPosition::UpperLeft)
            .draw()?;
    }

    root.present()?;
    Ok(())
}

fn draw_bar<DB>(
    root: &DrawingArea<DB, Shift>,
    categories: &[String],
    values: &[f64],
    settings: &PlotSettings,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let y_max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max) * 1.15;

    let mut chart = ChartBuilder::on(root)
        .caption(&settings.title, ("sans-serif", 30).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(
            (0u32..categories.len() as u32).into_segmented(),
            0.0..y_max,
        )?;

    if settings.show_grid {
        let labels = categories.to_vec();
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_label_formatter(&move |seg| match seg {
                SegmentValue::CenterOf(i) => {
                    labels.get(*i as usize).cloned().unwrap_or_default()
                }
                _ => String::new(),
            })
            .x_desc(&settings.x_label)
            .y_desc(&settings.y_label)
            .draw()?;
    }

    let rgb = settings.color_palette[0];
    let color = RGBColor(rgb.0, rgb.1, rgb.2);

    chart.draw_series(values.iter().enumerate().map(|(i, &v)| {
        let i = i as u32;
        Rectangle::new(
            [(SegmentValue::Exact(i), 0.0), (SegmentValue::Exact(i + 1), v)],
            color.filled(),
        )
    }))?;

    root.present()?;
    Ok(())
}

fn draw_histogram<DB>(
    root: &DrawingArea<DB, Shift>,
    values: &[f64],
    bins: usize,
    settings: &PlotSettings,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let min_value = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max_value = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    // ビンごとの度数を集計
    let (histogram, bin_width) = stats::histogram_counts(values, bins)?;
    let max_count = histogram.iter().map(|&(_, c)| c).max().unwrap_or(0) as f64;

    // 密度曲線は度数スケールに合わせる（密度 × n × ビン幅）
    let curve_scale = values.len() as f64 * bin_width;
    let curve: Vec<(f64, f64)> = stats::gaussian_kde(values, 200)?
        .into_iter()
        .filter(|&(x, _)| x >= min_value && x <= max_value)
        .map(|(x, d)| (x, d * curve_scale))
        .collect();
    let curve_max = curve
        .iter()
        .map(|&(_, y)| y)
        .fold(f64::NEG_INFINITY, f64::max);

    let y_max = max_count.max(curve_max) * 1.1;

    let mut chart = ChartBuilder::on(root)
        .caption(&settings.title, ("sans-serif", 30).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(min_value..max_value, 0.0..y_max)?;

    if settings.show_grid {
        chart
            .configure_mesh()
            .x_labels(10)
            .y_labels(10)
            .x_desc(&settings.x_label)
            .y_desc(&settings.y_label)
            .draw()?;
    }

    let rgb = settings.color_palette[0];
    let bar_color = RGBColor(rgb.0, rgb.1, rgb.2);

    chart.draw_series(histogram.iter().map(|&(center, count)| {
        let x0 = center - bin_width / 2.0;
        let x1 = center + bin_width / 2.0;
        Rectangle::new([(x0, 0.0), (x1, count as f64)], bar_color.mix(0.5).filled())
    }))?;

    let rgb = settings.color_palette[1];
    let curve_color = RGBColor(rgb.0, rgb.1, rgb.2);
    chart.draw_series(LineSeries::new(curve, curve_color.stroke_width(2)))?;

    root.present()?;
    Ok(())
}

fn draw_scatter<DB>(
    root: &DrawingArea<DB, Shift>,
    groups: &[(String, Vec<(f64, f64)>)],
    settings: &PlotSettings,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let all_points = groups.iter().flat_map(|(_, points)| points.iter());
    let x_min = all_points.clone().map(|&(x, _)| x).fold(f64::INFINITY, f64::min);
    let x_max = all_points
        .clone()
        .map(|&(x, _)| x)
        .fold(f64::NEG_INFINITY, f64::max);
    let y_min = all_points.clone().map(|&(_, y)| y).fold(f64::INFINITY, f64::min);
    let y_max = all_points.map(|&(_, y)| y).fold(f64::NEG_INFINITY, f64::max);

    // マージン計算
    let x_margin = (x_max - x_min) * 0.05;
    let y_margin = (y_max - y_min) * 0.05;

    let mut chart = ChartBuilder::on(root)
        .caption(&settings.title, ("sans-serif", 30).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(
            (x_min - x_margin)..(x_max + x_margin),
            (y_min - y_margin)..(y_max + y_margin),
        )?;

    if settings.show_grid {
        chart
            .configure_mesh()
            .x_labels(10)
            .y_labels(10)
            .x_label_formatter(&|v| format!("{:.1}", v))
            .y_label_formatter(&|v| format!("{:.1}", v))
            .x_desc(&settings.x_label)
            .y_desc(&settings.y_label)
            .draw()?;
    }

    for (idx, (name, points)) in groups.iter().enumerate() {
        let rgb = settings.color_palette[idx % settings.color_palette.len()];
        let color = RGBColor(rgb.0, rgb.1, rgb.2);
        chart
            .draw_series(
                points
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), 3, color.filled())),
            )?
            .label(name.clone())
            .legend(move |(x, y)| Circle::new((x + 10, y), 3, color.filled()));
    }

    if settings.show_legend {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .position(SeriesLabelPosition::UpperLeft)
            .draw()?;
    }

    root.present()?;
    Ok(())
}
