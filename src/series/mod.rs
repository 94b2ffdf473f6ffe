mod na_series;

use num_traits::NumCast;
use std::fmt::Debug;
use std::iter::Sum;
use std::ops::Add;

use crate::error::{Error, Result};

pub use self::na_series::NASeries;

/// Series構造体: 一次元の値の配列
#[derive(Debug, Clone)]
pub struct Series<T>
where
    T: Debug + Clone,
{
    /// Seriesのデータ値
    values: Vec<T>,

    /// 名前（オプション）
    name: Option<String>,
}

// 基本実装
impl<T> Series<T>
where
    T: Debug + Clone,
{
    /// 新しいSeriesをベクトルから作成
    pub fn new(values: Vec<T>, name: Option<String>) -> Self {
        Series { values, name }
    }

    /// Seriesの長さを取得
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Seriesが空かどうか
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 位置から値を取得
    pub fn get(&self, pos: usize) -> Option<&T> {
        self.values.get(pos)
    }

    /// 値の配列を取得
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// 名前を取得
    pub fn name(&self) -> Option<&String> {
        self.name.as_ref()
    }

    /// 名前を設定
    pub fn with_name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }
}

// 数値型のSeriesに対する操作
impl<T> Series<T>
where
    T: Debug + Clone + Copy + Sum<T> + NumCast + PartialOrd + Add<Output = T>,
{
    /// 合計を計算
    pub fn sum(&self) -> T {
        self.values.iter().copied().sum()
    }

    /// 平均を計算
    pub fn mean(&self) -> Result<f64> {
        if self.values.is_empty() {
            return Err(Error::EmptyData(
                "平均の計算には少なくとも1つの値が必要です".to_string(),
            ));
        }
        let total: f64 = self
            .values
            .iter()
            .map(|v| {
                num_traits::cast::<T, f64>(*v)
                    .ok_or_else(|| Error::Cast("f64に変換できない値があります".to_string()))
            })
            .sum::<Result<f64>>()?;
        Ok(total / self.values.len() as f64)
    }

    /// 最小値を計算
    pub fn min(&self) -> Result<T> {
        self.values
            .iter()
            .copied()
            .fold(None, |acc: Option<T>, v| match acc {
                Some(m) if m <= v => Some(m),
                _ => Some(v),
            })
            .ok_or_else(|| Error::EmptyData("最小値の計算には少なくとも1つの値が必要です".to_string()))
    }

    /// 最大値を計算
    pub fn max(&self) -> Result<T> {
        self.values
            .iter()
            .copied()
            .fold(None, |acc: Option<T>, v| match acc {
                Some(m) if m >= v => Some(m),
                _ => Some(v),
            })
            .ok_or_else(|| Error::EmptyData("最大値の計算には少なくとも1つの値が必要です".to_string()))
    }

    /// 累積和のSeriesを作成
    ///
    /// i番目の要素は先頭からi番目までの値の合計になります。
    pub fn cumsum(&self) -> Series<T> {
        let mut running: Option<T> = None;
        let values = self
            .values
            .iter()
            .map(|&v| {
                let next = match running {
                    Some(acc) => acc + v,
                    None => v,
                };
                running = Some(next);
                next
            })
            .collect();
        Series::new(values, self.name.clone())
    }
}
