/// 3色バンド（2桁 + 乗数）のデコード

use log::{debug, warn};

use crate::color::Color;
use crate::error::{DecodeError, DecodeResult};
use crate::magnitude::format_ohms;

/// デコードに必要な最小の色数
pub const MIN_TRIO_COLORS: usize = 3;

/// 先頭3色から抵抗値のラベルを作成します
///
/// 例: `["orange", "orange", "black"]` -> `"33 ohms"`、
/// `["blue", "grey", "blue"]` -> `"68 megaohms"`
///
/// 4色目以降は無視されます。いずれかの色が無効な場合、
/// 先頭3色をまとめて `InvalidColor` で報告します。
pub fn trio_value<S: AsRef<str>>(colors: &[S]) -> DecodeResult<String> {
    if colors.len() < MIN_TRIO_COLORS {
        warn!(
            "Trio decode needs {} colors, got {}",
            MIN_TRIO_COLORS,
            colors.len()
        );
        return Err(DecodeError::InsufficientColors {
            required: MIN_TRIO_COLORS,
            actual: colors.len(),
        });
    }

    let bands = &colors[..MIN_TRIO_COLORS];
    let decoded: Option<Vec<Color>> = bands.iter().map(|c| Color::lookup(c.as_ref())).collect();
    let Some(decoded) = decoded else {
        let joined = bands
            .iter()
            .map(|c| c.as_ref())
            .collect::<Vec<_>>()
            .join(", ");
        warn!("Invalid resistor color in: {}", joined);
        return Err(DecodeError::InvalidColor(joined));
    };

    let base = u64::from(decoded[0].digit() * 10 + decoded[1].digit());
    let ohms = base * 10u64.pow(u32::from(decoded[2].digit()));
    let label = format_ohms(ohms);

    debug!("Decoded trio {:?} -> {} ohms ({})", decoded, ohms, label);
    Ok(label)
}
