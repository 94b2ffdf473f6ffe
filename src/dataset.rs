//! Irisデータセットの読み込み
//!
//! データセットはクレートに同梱したCSV（150行・4特徴量・target列）で、
//! 外部ファイルやネットワークへのアクセスは行いません。読み込みに
//! 失敗した場合は`Error::DataUnavailable`を返し、呼び出し側（バイナリ）が
//! 診断メッセージを出して終了します。

use serde::Deserialize;
use std::io::Read;

use crate::error::{Error, Result};
use crate::frame::IrisFrame;
use crate::na::NA;
use crate::series::NASeries;

/// 同梱のIrisデータセット（CSV形式）
const IRIS_CSV: &str = include_str!("../data/iris.csv");

/// target値 0/1/2 に対応する品種名の固定マッピング
pub const SPECIES_NAMES: [&str; 3] = ["setosa", "versicolor", "virginica"];

/// target値から品種名を引く
///
/// {0,1,2}の範囲外の値は検証エラーにせず、欠損（NA）として扱います。
pub fn species_name(target: i64) -> NA<&'static str> {
    match target {
        0..=2 => NA::Value(SPECIES_NAMES[target as usize]),
        _ => NA::NA,
    }
}

/// CSVの1行分のレコード
///
/// 空欄のセルはNoneとして読み込まれ、NASeries上のNAになります。
#[derive(Debug, Deserialize)]
struct IrisRecord {
    sepal_length: Option<f64>,
    sepal_width: Option<f64>,
    petal_length: Option<f64>,
    petal_width: Option<f64>,
    target: Option<i64>,
}

/// 任意のリーダーからIris形式のCSVを読み込む
///
/// 同梱データの読み込みとテストの両方で使用します。スキーマは
/// 固定（4つの数値列 + target列、ヘッダー付き）です。
pub fn read_csv<R: Read>(reader: R) -> Result<IrisFrame> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let mut sepal_length = Vec::new();
    let mut sepal_width = Vec::new();
    let mut petal_length = Vec::new();
    let mut petal_width = Vec::new();
    let mut target = Vec::new();

    for record in rdr.deserialize() {
        let row: IrisRecord = record?;
        sepal_length.push(row.sepal_length);
        sepal_width.push(row.sepal_width);
        petal_length.push(row.petal_length);
        petal_width.push(row.petal_width);
        target.push(row.target);
    }

    if sepal_length.is_empty() {
        return Err(Error::EmptyData("CSVに行がありません".to_string()));
    }

    IrisFrame::new(
        [
            NASeries::from_options(sepal_length, Some("sepal length (cm)".to_string())),
            NASeries::from_options(sepal_width, Some("sepal width (cm)".to_string())),
            NASeries::from_options(petal_length, Some("petal length (cm)".to_string())),
            NASeries::from_options(petal_width, Some("petal width (cm)".to_string())),
        ],
        NASeries::from_options(target, Some("target".to_string())),
    )
}

/// 同梱のIrisデータセットを読み込む
///
/// 読み込み失敗はこのプログラムで唯一ハンドリングされる失敗モードで、
/// 原因を含む`DataUnavailable`にまとめて返します。
pub fn load_iris() -> Result<IrisFrame> {
    read_csv(IRIS_CSV.as_bytes()).map_err(|e| Error::DataUnavailable(e.to_string()))
}
