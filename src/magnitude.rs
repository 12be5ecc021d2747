// 単位接頭辞（kilo, mega, giga, tera）の選択と表示

/// 単位接頭辞
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Magnitude {
    Kilo,
    Mega,
    Giga,
    Tera,
}

/// 指数の昇順に並んだ接頭辞
pub const MAGNITUDES: [Magnitude; 4] = [
    Magnitude::Kilo,
    Magnitude::Mega,
    Magnitude::Giga,
    Magnitude::Tera,
];

impl Magnitude {
    /// 接頭辞名
    pub fn name(self) -> &'static str {
        match self {
            Magnitude::Kilo => "kilo",
            Magnitude::Mega => "mega",
            Magnitude::Giga => "giga",
            Magnitude::Tera => "tera",
        }
    }

    /// 10の指数
    pub fn exponent(self) -> u32 {
        match self {
            Magnitude::Kilo => 3,
            Magnitude::Mega => 6,
            Magnitude::Giga => 9,
            Magnitude::Tera => 12,
        }
    }

    /// 10^exponent
    pub fn divisor(self) -> u64 {
        10u64.pow(self.exponent())
    }
}

/// 10^指数 が値以下となる最大の接頭辞を選択します
///
/// 境界値は含みます（1000ちょうどは kilo）。1000未満の場合は `None`。
pub fn select_magnitude(ohms: u64) -> Option<Magnitude> {
    MAGNITUDES
        .iter()
        .rev()
        .copied()
        .find(|magnitude| ohms >= magnitude.divisor())
}

/// オーム値を "33 ohms" / "4.7 kiloohms" の形式に整形します
pub fn format_ohms(ohms: u64) -> String {
    match select_magnitude(ohms) {
        Some(magnitude) => format!(
            "{} {}ohms",
            format_quotient(ohms, magnitude.exponent()),
            magnitude.name()
        ),
        None => format!("{} ohms", ohms),
    }
}

/// `value / 10^exponent` を末尾の0なしの10進表記にします
fn format_quotient(value: u64, exponent: u32) -> String {
    let divisor = 10u64.pow(exponent);
    let whole = value / divisor;
    let remainder = value % divisor;
    if remainder == 0 {
        return whole.to_string();
    }

    let fraction = format!("{:0width$}", remainder, width = exponent as usize);
    format!("{}.{}", whole, fraction.trim_end_matches('0'))
}
