//! Irisデータセットの表構造
//!
//! `IrisFrame`は読み込み直後の表（欠損を含む可能性あり）、
//! `CleanFrame`は行単位のクリーニング後の表（全列が揃った行のみ、
//! 品種名の派生列付き）を表します。

use std::fmt::Write as _;

use crate::dataset::species_name;
use crate::error::{Error, Result};
use crate::na::NA;
use crate::series::{NASeries, Series};

/// 4つの数値特徴量の列名（センチメートル単位）
pub const FEATURE_NAMES: [&str; 4] = [
    "sepal length (cm)",
    "sepal width (cm)",
    "petal length (cm)",
    "petal width (cm)",
];

/// クラスラベル列の列名
pub const TARGET_NAME: &str = "target";

/// 派生列（品種名）の列名
pub const SPECIES_NAME: &str = "species";

/// 読み込み直後のIris表
///
/// 行 = サンプル、列 = 4つの数値特徴量 + 整数target。
/// 行の順序は読み込み順のまま保持されます。
#[derive(Debug, Clone)]
pub struct IrisFrame {
    features: [NASeries<f64>; 4],
    target: NASeries<i64>,
}

impl IrisFrame {
    /// 特徴量列とtarget列から表を作成
    ///
    /// 全列の長さが一致しない場合はエラーになります。
    pub fn new(features: [NASeries<f64>; 4], target: NASeries<i64>) -> Result<Self> {
        let expected = target.len();
        for column in &features {
            if column.len() != expected {
                return Err(Error::InconsistentRowCount {
                    expected,
                    found: column.len(),
                });
            }
        }
        Ok(IrisFrame { features, target })
    }

    /// 行数を取得
    pub fn row_count(&self) -> usize {
        self.target.len()
    }

    /// 列数を取得（特徴量4列 + target）
    pub fn column_count(&self) -> usize {
        self.features.len() + 1
    }

    /// 名前で特徴量列を取得
    pub fn feature(&self, name: &str) -> Result<&NASeries<f64>> {
        FEATURE_NAMES
            .iter()
            .position(|&n| n == name)
            .map(|i| &self.features[i])
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))
    }

    /// target列を取得
    pub fn target(&self) -> &NASeries<i64> {
        &self.target
    }

    /// 列ごとの欠損数を取得（列の並び順で返す）
    pub fn missing_counts(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = FEATURE_NAMES
            .iter()
            .zip(self.features.iter())
            .map(|(&name, column)| (name.to_string(), column.na_count()))
            .collect();
        counts.push((TARGET_NAME.to_string(), self.target.na_count()));
        counts
    }

    /// 先頭n行を表形式の文字列にする
    pub fn head_table(&self, n: usize) -> String {
        let rows = n.min(self.row_count());
        let mut out = String::new();

        write!(out, "{:>4}", "").unwrap();
        for name in FEATURE_NAMES {
            write!(out, "  {:>17}", name).unwrap();
        }
        writeln!(out, "  {:>6}", TARGET_NAME).unwrap();

        for i in 0..rows {
            write!(out, "{:>4}", i).unwrap();
            for column in &self.features {
                match column.values()[i] {
                    NA::Value(v) => write!(out, "  {:>17.1}", v).unwrap(),
                    NA::NA => write!(out, "  {:>17}", "NA").unwrap(),
                }
            }
            match self.target.values()[i] {
                NA::Value(t) => writeln!(out, "  {:>6}", t).unwrap(),
                NA::NA => writeln!(out, "  {:>6}", "NA").unwrap(),
            }
        }
        out
    }

    /// 構造のサマリ（列名・非欠損数・型）を文字列にする
    pub fn info_table(&self) -> String {
        let mut out = String::new();
        writeln!(
            out,
            "IrisFrame: {} entries, {} columns",
            self.row_count(),
            self.column_count()
        )
        .unwrap();
        writeln!(out, " #   {:<19} {:<15} Dtype", "Column", "Non-Null Count").unwrap();
        for (i, (&name, column)) in FEATURE_NAMES.iter().zip(self.features.iter()).enumerate() {
            writeln!(
                out,
                " {:<3} {:<19} {:<15} f64",
                i,
                name,
                format!("{} non-null", column.value_count())
            )
            .unwrap();
        }
        writeln!(
            out,
            " {:<3} {:<19} {:<15} i64",
            self.features.len(),
            TARGET_NAME,
            format!("{} non-null", self.target.value_count())
        )
        .unwrap();
        out
    }

    /// 列ごとの欠損数を表形式の文字列にする
    pub fn missing_table(&self) -> String {
        let mut out = String::new();
        for (name, count) in self.missing_counts() {
            writeln!(out, "{:<19} {:>4}", name, count).unwrap();
        }
        out
    }

    /// 欠損のある行を落とし、品種名列を付与したCleanFrameを作成
    ///
    /// クリーニングは行単位の削除のみで、補完は行いません。
    /// {0,1,2}以外のtargetを持つ行は残りますが、品種名は欠損になります。
    pub fn dropna(&self) -> CleanFrame {
        let positions: Vec<usize> = (0..self.row_count())
            .filter(|&i| {
                self.features.iter().all(|c| c.values()[i].is_value())
                    && self.target.values()[i].is_value()
            })
            .collect();

        let features = [
            self.features[0].take_rows(&positions),
            self.features[1].take_rows(&positions),
            self.features[2].take_rows(&positions),
            self.features[3].take_rows(&positions),
        ];
        let target = self.target.take_rows(&positions);

        // 品種名の派生列（target → 固定マッピング）
        let species = NASeries::new(
            target
                .values()
                .iter()
                .map(|&t| species_name(t).map(|s| s.to_string()))
                .collect(),
            Some(SPECIES_NAME.to_string()),
        );

        CleanFrame {
            features,
            target,
            species,
        }
    }
}

/// クリーニング後のIris表
///
/// 5つの元の列はすべて値が入っており、品種名の派生列を持ちます。
/// 行数は元の表以下になります。
#[derive(Debug, Clone)]
pub struct CleanFrame {
    features: [Series<f64>; 4],
    target: Series<i64>,
    species: NASeries<String>,
}

impl CleanFrame {
    /// 行数を取得
    pub fn row_count(&self) -> usize {
        self.target.len()
    }

    /// 名前で特徴量列を取得
    pub fn feature(&self, name: &str) -> Result<&Series<f64>> {
        FEATURE_NAMES
            .iter()
            .position(|&n| n == name)
            .map(|i| &self.features[i])
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))
    }

    /// target列を取得
    pub fn target(&self) -> &Series<i64> {
        &self.target
    }

    /// 品種名列を取得
    ///
    /// 通常のデータでは全行に値がありますが、範囲外のtargetに
    /// 由来する行では欠損のままです。
    pub fn species(&self) -> &NASeries<String> {
        &self.species
    }

    /// 品種名をキー、指定した特徴量を値とするペアの列を作成
    ///
    /// 品種名が欠損している行はグループ化の対象外です
    /// （pandasのNaNキー除外と同じ扱い）。
    pub fn species_pairs(&self, feature_name: &str) -> Result<(Vec<String>, Vec<f64>)> {
        let column = self.feature(feature_name)?;
        let mut keys = Vec::new();
        let mut values = Vec::new();
        for (name, &value) in self.species.values().iter().zip(column.values()) {
            if let NA::Value(species) = name {
                keys.push(species.clone());
                values.push(value);
            }
        }
        Ok((keys, values))
    }
}
