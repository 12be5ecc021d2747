/// 1/4/5本バンドの抵抗器ラベル（許容差付き）
///
/// - 1本: 数字バンドのみ（乗数 black、許容差なし）
/// - 4本: 数字2本 + 乗数 + 許容差
/// - 5本: 数字3本 + 乗数 + 許容差

use std::collections::HashMap;

use log::{debug, warn};
use once_cell::sync::Lazy;

use crate::color::Color;
use crate::error::{DecodeError, DecodeResult};
use crate::magnitude::format_ohms;

/// サポートするバンド数
pub const SUPPORTED_BAND_COUNTS: [usize; 3] = [1, 4, 5];

/// 許容差バンドの色 -> 許容差(%)
static TOLERANCES: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("grey", 0.05),
        ("violet", 0.1),
        ("blue", 0.25),
        ("green", 0.5),
        ("brown", 1.0),
        ("red", 2.0),
        ("gold", 5.0),
        ("silver", 10.0),
    ])
});

/// 許容差バンドの色名から許容差(%)を取得
pub fn tolerance(color: &str) -> DecodeResult<f64> {
    TOLERANCES
        .get(color.to_lowercase().as_str())
        .copied()
        .ok_or_else(|| {
            warn!("Invalid tolerance color: '{}'", color);
            DecodeError::InvalidColor(color.to_string())
        })
}

fn band<S: AsRef<str>>(color: &S) -> DecodeResult<Color> {
    color.as_ref().parse::<Color>().inspect_err(|_| {
        warn!("Invalid band color: '{}'", color.as_ref());
    })
}

/// 抵抗器のカラーバンドから "6.89 kiloohms ±1%" 形式のラベルを作成します
///
/// # 引数
/// * `colors` - 1本、4本、または5本のカラーバンド
///
/// # 戻り値
/// * `DecodeResult<String>` - ラベル文字列
pub fn resistor_label<S: AsRef<str>>(colors: &[S]) -> DecodeResult<String> {
    if !SUPPORTED_BAND_COUNTS.contains(&colors.len()) {
        warn!("Unsupported band count: {}", colors.len());
        return Err(DecodeError::InvalidBandCount(colors.len()));
    }

    let (digits, multiplier, tolerance_band) = match colors {
        [single] => (std::slice::from_ref(single), Color::Black, None),
        [digits @ .., multiplier, tolerance_band] => {
            (digits, band(multiplier)?, Some(tolerance_band))
        }
        [] => return Err(DecodeError::InvalidBandCount(0)),
    };

    let mut ohms: u64 = 0;
    for digit in digits {
        ohms = ohms * 10 + u64::from(band(digit)?.digit());
    }
    ohms *= 10u64.pow(u32::from(multiplier.digit()));

    let label = match tolerance_band {
        Some(color) => format!("{} ±{}%", format_ohms(ohms), tolerance(color.as_ref())?),
        None => format_ohms(ohms),
    };

    debug!("Resistor label ({} bands): {}", colors.len(), label);
    Ok(label)
}
