// 抵抗器カラーコードのデコードモジュールをエクスポート
pub mod color;
pub mod duo;
pub mod error;
pub mod expert;
pub mod magnitude;
pub mod trio;

// よく使う関数はクレート直下からも使えるようにする
pub use color::{color_code, colors, Color};
pub use duo::two_color_value;
pub use error::{DecodeError, DecodeResult};
pub use expert::resistor_label;
pub use trio::trio_value;
