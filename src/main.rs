//! Irisデータセット分析の実行バイナリ
//!
//! 同梱データセットの読み込みに失敗した場合のみエラーを
//! ハンドリングし、診断メッセージを出して非ゼロ終了します。
//! それ以降の失敗は診断を出して伝播するだけです。

use std::path::Path;
use std::process;

use irisrs::{analysis, dataset};

fn main() {
    env_logger::init();

    let frame = match dataset::load_iris() {
        Ok(frame) => {
            println!("Dataset loaded successfully ({} rows)\n", frame.row_count());
            frame
        }
        Err(e) => {
            eprintln!("Error loading dataset: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = analysis::run(&frame, Path::new(".")) {
        eprintln!("Analysis failed: {}", e);
        process::exit(1);
    }
}
