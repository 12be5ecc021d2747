// デコード処理のエラー定義

/// デコード処理での結果の型
pub type DecodeResult<T> = Result<T, DecodeError>;

/// カラーコードのデコードエラーを表す列挙型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// 無効な色名（問題のある色名を保持）
    InvalidColor(String),
    /// 色の数が不足
    InsufficientColors {
        /// 必要な色の数
        required: usize,
        /// 渡された色の数
        actual: usize,
    },
    /// サポートされていないバンド数
    InvalidBandCount(usize),
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::InvalidColor(color) => write!(f, "Invalid color: {}", color),
            DecodeError::InsufficientColors { required, actual } => write!(
                f,
                "At least {} colors are required, got {}",
                required, actual
            ),
            DecodeError::InvalidBandCount(count) => {
                write!(f, "Unsupported band count: {} (expected 1, 4 or 5)", count)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_color() {
        let error = DecodeError::InvalidColor("pink".to_string());
        assert_eq!(error.to_string(), "Invalid color: pink");
    }

    #[test]
    fn test_display_insufficient_colors() {
        let error = DecodeError::InsufficientColors { required: 3, actual: 1 };
        assert_eq!(error.to_string(), "At least 3 colors are required, got 1");
    }

    #[test]
    fn test_display_invalid_band_count() {
        let error = DecodeError::InvalidBandCount(2);
        assert_eq!(error.to_string(), "Unsupported band count: 2 (expected 1, 4 or 5)");
    }
}
