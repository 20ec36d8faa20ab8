/// Amounts are whole yen as signed 64-bit integers. Yen has no fractional
/// unit in everyday use, so there is no cents-style scaling.
pub type Yen = i64;

/// Format an amount with a yen sign and thousands separators.
/// Example: 12345 -> "¥12,345"
pub fn format_yen(amount: Yen) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let digits = amount.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}¥{}", sign, grouped)
}

/// Parse a decimal string into yen. Separator commas and a leading yen sign
/// are tolerated.
/// Example: "1,200" -> 1200, "¥300" -> 300
pub fn parse_yen(input: &str) -> Result<Yen, ParseYenError> {
    let cleaned: String = input
        .trim()
        .trim_start_matches('¥')
        .chars()
        .filter(|c| *c != ',')
        .collect();

    cleaned.parse().map_err(|_| ParseYenError::InvalidFormat)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseYenError {
    InvalidFormat,
}

impl std::fmt::Display for ParseYenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseYenError::InvalidFormat => write!(f, "invalid amount format"),
        }
    }
}

impl std::error::Error for ParseYenError {}
