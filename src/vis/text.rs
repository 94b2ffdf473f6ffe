//! textplotsによるターミナル表示
//!
//! ファイル出力した各チャートの内容を、そのままターミナルにも
//! テキストチャートとして表示します。

use textplots::{Chart, Plot, Shape};

/// チャートのターミナル表示幅（ドット数）
const TERM_WIDTH: u32 = 160;

/// チャートのターミナル表示高さ（ドット数）
const TERM_HEIGHT: u32 = 60;

/// 折れ線をターミナルに表示
pub fn show_line(values: &[f64]) {
    if values.is_empty() {
        return;
    }
    let points: Vec<(f32, f32)> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| (i as f32, v as f32))
        .collect();
    Chart::new(TERM_WIDTH, TERM_HEIGHT, 0.0, (values.len() - 1).max(1) as f32)
        .lineplot(&Shape::Lines(&points))
        .display();
}

/// 棒グラフをターミナルに表示（x = カテゴリ番号）
pub fn show_bars(values: &[f64]) {
    if values.is_empty() {
        return;
    }
    let points: Vec<(f32, f32)> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| (i as f32, v as f32))
        .collect();
    Chart::new(TERM_WIDTH, TERM_HEIGHT, -0.5, values.len() as f32 - 0.5)
        .lineplot(&Shape::Bars(&points))
        .display();
}

/// ヒストグラムの度数をターミナルに表示（x = ビン中心）
pub fn show_histogram(histogram: &[(f64, usize)]) {
    if histogram.is_empty() {
        return;
    }
    let points: Vec<(f32, f32)> = histogram
        .iter()
        .map(|&(x, c)| (x as f32, c as f32))
        .collect();
    let x_min = points.first().map(|p| p.0).unwrap_or(0.0);
    let x_max = points.last().map(|p| p.0).unwrap_or(1.0);
    Chart::new(TERM_WIDTH, TERM_HEIGHT, x_min, x_max)
        .lineplot(&Shape::Bars(&points))
        .display();
}

/// 散布図をターミナルに表示
pub fn show_points(points: &[(f64, f64)]) {
    if points.is_empty() {
        return;
    }
    let points: Vec<(f32, f32)> = points.iter().map(|&(x, y)| (x as f32, y as f32)).collect();
    let x_min = points.iter().map(|p| p.0).fold(f32::INFINITY, f32::min);
    let x_max = points.iter().map(|p| p.0).fold(f32::NEG_INFINITY, f32::max);
    Chart::new(TERM_WIDTH, TERM_HEIGHT, x_min, x_max)
        .lineplot(&Shape::Points(&points))
        .display();
}
