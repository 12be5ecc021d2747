/// 2色バンドのデコード

use log::{debug, warn};

use crate::color::color_code;
use crate::error::{DecodeError, DecodeResult};

/// デコードに必要な最小の色数
pub const MIN_DUO_COLORS: usize = 2;

/// 先頭2色から2桁の値を計算します
///
/// 3色目以降は無視されます。
///
/// # 引数
/// * `colors` - 色名の並び（2色以上）
///
/// # 戻り値
/// * `DecodeResult<u8>` - 0から99の値
pub fn two_color_value<S: AsRef<str>>(colors: &[S]) -> DecodeResult<u8> {
    if colors.len() < MIN_DUO_COLORS {
        warn!(
            "Two-color decode needs {} colors, got {}",
            MIN_DUO_COLORS,
            colors.len()
        );
        return Err(DecodeError::InsufficientColors {
            required: MIN_DUO_COLORS,
            actual: colors.len(),
        });
    }

    let first = color_code(colors[0].as_ref())?;
    let second = color_code(colors[1].as_ref())?;
    let value = first * 10 + second;

    debug!("Decoded two-color value: {}", value);
    Ok(value)
}
