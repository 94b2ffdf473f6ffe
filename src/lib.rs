//! irisrs - Irisデータセット分析ライブラリ
//!
//! 150行・4特徴量・3品種の固定データセットを対象に、欠損値処理、
//! 記述統計、品種別の集計、チャート描画を行うための小さな
//! データ分析基盤を提供します。付属のバイナリは
//! 読み込み → 点検 → クリーニング → 集計 → 描画 → 所見出力 の
//! 一方向パイプラインを実行します。

pub mod analysis;
pub mod dataset;
pub mod error;
pub mod frame;
pub mod groupby;
pub mod na;
pub mod series;
pub mod stats;
pub mod vis;

// Re-export commonly used types
pub use dataset::{load_iris, species_name, SPECIES_NAMES};
pub use error::{Error, Result};
pub use frame::{CleanFrame, IrisFrame};
pub use groupby::GroupBy;
pub use na::NA;
pub use series::{NASeries, Series};
pub use stats::{describe, DescriptiveStats};
pub use vis::{OutputType, PlotSettings};

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
