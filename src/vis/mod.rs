//! Module providing chart rendering functionality
//!
//! File output uses plotters (PNG via the bitmap backend, SVG as an
//! alternative output type). Each chart can also be echoed to the terminal
//! as a text plot (textplots), which stands in for an interactive display
//! surface in this offline pipeline.

pub mod plotters_backend;
pub mod text;

pub use self::plotters_backend::{
    plot_category_bar, plot_cumulative_line, plot_grouped_scatter, plot_histogram,
};

/// プロットの出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputType {
    /// PNG画像
    PNG,
    /// SVG形式
    SVG,
}

/// プロットの設定
#[derive(Debug, Clone)]
pub struct PlotSettings {
    /// タイトル
    pub title: String,
    /// X軸のラベル
    pub x_label: String,
    /// Y軸のラベル
    pub y_label: String,
    /// グラフの幅（ピクセル）
    pub width: u32,
    /// グラフの高さ（ピクセル）
    pub height: u32,
    /// 出力形式
    pub output_type: OutputType,
    /// 凡例の表示
    pub show_legend: bool,
    /// グリッドの表示
    pub show_grid: bool,
    /// 色のパレット
    pub color_palette: Vec<(u8, u8, u8)>,
}

impl Default for PlotSettings {
    fn default() -> Self {
        PlotSettings {
            title: "Plot".to_string(),
            x_label: "X".to_string(),
            y_label: "Y".to_string(),
            width: 800,
            height: 600,
            output_type: OutputType::PNG,
            show_legend: true,
            show_grid: true,
            color_palette: vec![
                (0, 123, 255),  // 青
                (255, 99, 71),  // 赤
                (46, 204, 113), // 緑
                (255, 193, 7),  // 黄
                (142, 68, 173), // 紫
            ],
        }
    }
}
