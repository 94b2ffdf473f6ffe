use num_traits::NumCast;
use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::error::{Error, Result};

/// グループ化した結果を表す構造体
///
/// キーと値のペアの列からグループを作成します。キー順（辞書順）での
/// 走査になるため、集計結果の出力は決定的です。
#[derive(Debug)]
pub struct GroupBy<K, T>
where
    K: Debug + Ord + Clone,
    T: Debug + Clone,
{
    /// グループ化された値（キー順）
    groups: BTreeMap<K, Vec<T>>,

    /// グループ名
    name: Option<String>,
}

impl<K, T> GroupBy<K, T>
where
    K: Debug + Ord + Clone,
    T: Debug + Clone,
{
    /// キーと値のペアから新しいグループを作成
    pub fn new(keys: Vec<K>, values: Vec<T>, name: Option<String>) -> Result<Self> {
        if keys.len() != values.len() {
            return Err(Error::InconsistentRowCount {
                expected: keys.len(),
                found: values.len(),
            });
        }

        let mut groups: BTreeMap<K, Vec<T>> = BTreeMap::new();
        for (key, value) in keys.into_iter().zip(values) {
            groups.entry(key).or_default().push(value);
        }

        Ok(GroupBy { groups, name })
    }

    /// グループ数を取得
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// グループ名を取得
    pub fn name(&self) -> Option<&String> {
        self.name.as_ref()
    }

    /// グループのキーをキー順で取得
    pub fn keys(&self) -> Vec<&K> {
        self.groups.keys().collect()
    }

    /// 各グループのサイズをキー順で返す
    pub fn size(&self) -> Vec<(K, usize)> {
        self.groups
            .iter()
            .map(|(k, values)| (k.clone(), values.len()))
            .collect()
    }
}

// 数値グループに対する集計
impl<K, T> GroupBy<K, T>
where
    K: Debug + Ord + Clone,
    T: Debug + Clone + Copy + NumCast,
{
    /// 各グループの合計をキー順で計算
    pub fn sum(&self) -> Result<Vec<(K, f64)>> {
        self.groups
            .iter()
            .map(|(key, values)| {
                let total = cast_sum(values)?;
                Ok((key.clone(), total))
            })
            .collect()
    }

    /// 各グループの平均をキー順で計算
    pub fn mean(&self) -> Result<Vec<(K, f64)>> {
        self.groups
            .iter()
            .map(|(key, values)| {
                if values.is_empty() {
                    return Err(Error::EmptyData(format!("空のグループです: {:?}", key)));
                }
                let total = cast_sum(values)?;
                Ok((key.clone(), total / values.len() as f64))
            })
            .collect()
    }
}

/// f64にキャストしながら合計する
fn cast_sum<T: Copy + NumCast>(values: &[T]) -> Result<f64> {
    values
        .iter()
        .map(|&v| {
            num_traits::cast::<T, f64>(v)
                .ok_or_else(|| Error::Cast("f64に変換できない値があります".to_string()))
        })
        .sum()
}
