use std::fmt::Debug;

use crate::na::NA;
use crate::series::Series;

/// 欠損値をサポートするSeries構造体
#[derive(Debug, Clone)]
pub struct NASeries<T>
where
    T: Debug + Clone,
{
    /// Seriesのデータ値（NA型でラップ）
    values: Vec<NA<T>>,

    /// 名前（オプション）
    name: Option<String>,
}

impl<T> NASeries<T>
where
    T: Debug + Clone,
{
    /// 新しいNASeriesをベクトルから作成
    pub fn new(values: Vec<NA<T>>, name: Option<String>) -> Self {
        NASeries { values, name }
    }

    /// 通常のベクトルから作成（NAを含まない）
    pub fn from_vec(values: Vec<T>, name: Option<String>) -> Self {
        let na_values = values.into_iter().map(NA::Value).collect();
        Self::new(na_values, name)
    }

    /// Optionベクトルから作成（Noneを含む可能性あり）
    pub fn from_options(values: Vec<Option<T>>, name: Option<String>) -> Self {
        let na_values = values.into_iter().map(NA::from).collect();
        Self::new(na_values, name)
    }

    /// NASeriesの長さを取得
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// NASeriesが空かどうか
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 位置から値を取得
    pub fn get(&self, pos: usize) -> Option<&NA<T>> {
        self.values.get(pos)
    }

    /// 値の配列を取得
    pub fn values(&self) -> &[NA<T>] {
        &self.values
    }

    /// 名前を取得
    pub fn name(&self) -> Option<&String> {
        self.name.as_ref()
    }

    /// NAの数をカウント
    pub fn na_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_na()).count()
    }

    /// 値が存在する要素の数をカウント
    pub fn value_count(&self) -> usize {
        self.values.len() - self.na_count()
    }

    /// NAが含まれているかどうか
    pub fn has_na(&self) -> bool {
        self.values.iter().any(|v| v.is_na())
    }

    /// NAを除外したSeriesを作成
    ///
    /// 値の出現順は保持されます。
    pub fn dropna(&self) -> Series<T> {
        let values: Vec<T> = self
            .values
            .iter()
            .filter_map(|v| v.value().cloned())
            .collect();
        Series::new(values, self.name.clone())
    }

    /// 指定した行位置だけを残したSeriesを作成
    ///
    /// 行単位のクリーニング（全列が揃った行のみ残す）に使用します。
    /// 指定位置に欠損が残っている場合はパニックせずスキップします。
    pub fn take_rows(&self, positions: &[usize]) -> Series<T> {
        let values: Vec<T> = positions
            .iter()
            .filter_map(|&i| self.values.get(i).and_then(|v| v.value().cloned()))
            .collect();
        Series::new(values, self.name.clone())
    }
}
