/// 抵抗器のカラーバンド定義
///
/// 色名と数字(0-9)の対応表を提供します。

use std::collections::HashMap;
use std::str::FromStr;

use log::{debug, warn};
use once_cell::sync::Lazy;

use crate::error::{DecodeError, DecodeResult};

/// 数値順に並んだ色名 (black=0 ... white=9)
pub const COLORS: [&str; 10] = [
    "black", "brown", "red", "orange", "yellow", "green", "blue", "violet", "grey", "white",
];

/// 色名 -> Color の対応表（初回アクセス時に一度だけ構築）
static COLOR_TABLE: Lazy<HashMap<&'static str, Color>> = Lazy::new(|| {
    Color::ALL
        .iter()
        .map(|&color| (color.name(), color))
        .collect()
});

/// カラーバンドの色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Black = 0,
    Brown = 1,
    Red = 2,
    Orange = 3,
    Yellow = 4,
    Green = 5,
    Blue = 6,
    Violet = 7,
    Grey = 8,
    White = 9,
}

impl Color {
    /// 数値順の全色
    pub const ALL: [Color; 10] = [
        Color::Black,
        Color::Brown,
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Violet,
        Color::Grey,
        Color::White,
    ];

    /// u8(0-9)からColorに変換
    pub fn from_digit(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    /// 色に対応する数字
    pub fn digit(self) -> u8 {
        self as u8
    }

    /// 小文字の色名
    pub fn name(self) -> &'static str {
        COLORS[self as usize]
    }

    /// 色名を大文字小文字を区別せずに検索
    pub fn lookup(name: &str) -> Option<Self> {
        COLOR_TABLE.get(name.to_lowercase().as_str()).copied()
    }
}

impl FromStr for Color {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| DecodeError::InvalidColor(s.to_string()))
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 色名の一覧を数値順で返します
pub fn colors() -> &'static [&'static str] {
    &COLORS
}

/// 色名を数字に変換します
///
/// # 引数
/// * `color` - 色名（大文字小文字は区別しない）
///
/// # 戻り値
/// * `DecodeResult<u8>` - 0から9の数字、または `InvalidColor`
pub fn color_code(color: &str) -> DecodeResult<u8> {
    match Color::lookup(color) {
        Some(found) => {
            debug!("Color '{}' -> {}", color, found.digit());
            Ok(found.digit())
        }
        None => {
            warn!("Invalid color: '{}'", color);
            Err(DecodeError::InvalidColor(color.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_canonical_order() {
        for (index, name) in COLORS.iter().enumerate() {
            assert_eq!(color_code(name).unwrap(), index as u8);
        }
    }

    #[test]
    fn test_from_digit_round_trip() {
        for color in Color::ALL {
            assert_eq!(Color::from_digit(color.digit()), Some(color));
        }
        assert_eq!(Color::from_digit(10), None);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(Color::lookup("VIOLET"), Some(Color::Violet));
        assert_eq!(Color::lookup("Grey"), Some(Color::Grey));
        assert_eq!(Color::lookup("gray"), None);
    }

    #[test]
    fn test_invalid_color_keeps_original_name() {
        assert_eq!(
            color_code("Pink"),
            Err(DecodeError::InvalidColor("Pink".to_string()))
        );
    }
}
