// irisrs 統計モジュール
//
// 記述統計（平均・標準偏差・分位数）と、ヒストグラムに重ねる
// カーネル密度推定を提供します。

use crate::error::{Error, Result};

/// 記述統計量の結果を保持する構造体
#[derive(Debug, Clone)]
pub struct DescriptiveStats {
    /// データの件数
    pub count: usize,
    /// 平均値
    pub mean: f64,
    /// 標準偏差（不偏推定量）
    pub std: f64,
    /// 最小値
    pub min: f64,
    /// 25%分位点
    pub q1: f64,
    /// 中央値（50%分位点）
    pub median: f64,
    /// 75%分位点
    pub q3: f64,
    /// 最大値
    pub max: f64,
}

/// データの基本統計量を計算
///
/// 平均、標準偏差（N-1の不偏推定量）、最小値、25/50/75%分位点、
/// 最大値を計算します。
///
/// # 例
/// ```rust
/// use irisrs::stats;
///
/// let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
/// let stats = stats::describe(&data).unwrap();
/// assert_eq!(stats.mean, 3.0);
/// ```
pub fn describe<T: AsRef<[f64]>>(data: T) -> Result<DescriptiveStats> {
    let data = data.as_ref();
    if data.is_empty() {
        return Err(Error::EmptyData(
            "記述統計量の計算には少なくとも1つのデータが必要です".to_string(),
        ));
    }

    let count = data.len();

    // 平均値の計算
    let mean = data.iter().sum::<f64>() / count as f64;

    // 標準偏差の計算（不偏推定量）
    let variance = if count > 1 {
        let sum_squared_diff = data.iter().map(|&x| (x - mean).powi(2)).sum::<f64>();
        sum_squared_diff / (count - 1) as f64
    } else {
        0.0
    };
    let std = variance.sqrt();

    // データをソートして分位数を計算
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let min = sorted[0];
    let max = sorted[count - 1];

    let q1 = percentile(&sorted, 0.25);
    let median = percentile(&sorted, 0.50);
    let q3 = percentile(&sorted, 0.75);

    Ok(DescriptiveStats {
        count,
        mean,
        std,
        min,
        q1,
        median,
        q3,
        max,
    })
}

/// パーセンタイルを計算（ソート済みデータに対する線形補間）
fn percentile(sorted_data: &[f64], p: f64) -> f64 {
    if sorted_data.is_empty() {
        return 0.0;
    }

    let n = sorted_data.len();
    let idx = p * (n - 1) as f64;
    let idx_floor = idx.floor() as usize;
    let idx_ceil = idx.ceil() as usize;

    if idx_floor == idx_ceil {
        return sorted_data[idx_floor];
    }

    let weight_ceil = idx - idx_floor as f64;
    let weight_floor = 1.0 - weight_ceil;

    sorted_data[idx_floor] * weight_floor + sorted_data[idx_ceil] * weight_ceil
}

/// ヒストグラムの度数を集計
///
/// データの範囲を固定幅のビンに分割し、(ビン中心, 度数)の列と
/// ビン幅を返します。最大値はちょうど最後のビンに入ります。
pub fn histogram_counts(data: &[f64], bins: usize) -> Result<(Vec<(f64, usize)>, f64)> {
    if data.is_empty() {
        return Err(Error::EmptyData("データが空です".to_string()));
    }
    if bins == 0 {
        return Err(Error::InvalidInput(
            "ビン数は1以上である必要があります".to_string(),
        ));
    }

    let min_value = data.iter().cloned().fold(f64::INFINITY, f64::min);
    let max_value = data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    // 全値が同じ場合のフォールバック付き
    let span = max_value - min_value;
    let bin_width = if span > 0.0 { span / bins as f64 } else { 1.0 };

    let mut counts = vec![0usize; bins];
    for &value in data {
        let bin_index = ((value - min_value) / bin_width).floor() as usize;
        // 最大値の場合は最後のビンに入れる
        let index = if bin_index >= bins { bins - 1 } else { bin_index };
        counts[index] += 1;
    }

    let centers = counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| (min_value + bin_width * (i as f64 + 0.5), count))
        .collect();

    Ok((centers, bin_width))
}

/// ガウスカーネルによる密度推定
///
/// ヒストグラムに重ねる平滑化曲線の計算に使用します。バンド幅は
/// Silvermanの経験則で決定し、指定した点数の等間隔グリッド上の
/// (x, 密度)のペアを返します。
pub fn gaussian_kde(data: &[f64], grid_points: usize) -> Result<Vec<(f64, f64)>> {
    if data.is_empty() {
        return Err(Error::EmptyData(
            "密度推定には少なくとも1つのデータが必要です".to_string(),
        ));
    }
    if grid_points < 2 {
        return Err(Error::InvalidInput(
            "グリッド点数は2以上である必要があります".to_string(),
        ));
    }

    let n = data.len() as f64;
    let mean = data.iter().sum::<f64>() / n;
    let std = if data.len() > 1 {
        (data.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0)).sqrt()
    } else {
        0.0
    };

    // Silvermanの経験則。データが1点または全て同値の場合のフォールバック付き
    let bandwidth = if std > 0.0 {
        1.06 * std * n.powf(-0.2)
    } else {
        1.0
    };

    let min = data.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let lo = min - 3.0 * bandwidth;
    let hi = max + 3.0 * bandwidth;
    let step = (hi - lo) / (grid_points - 1) as f64;

    let norm = 1.0 / ((2.0 * std::f64::consts::PI).sqrt() * bandwidth * n);
    let curve = (0..grid_points)
        .map(|i| {
            let x = lo + step * i as f64;
            let density = data
                .iter()
                .map(|&xi| {
                    let u = (x - xi) / bandwidth;
                    (-0.5 * u * u).exp()
                })
                .sum::<f64>()
                * norm;
            (x, density)
        })
        .collect();

    Ok(curve)
}
