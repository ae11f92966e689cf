// currency.rs
//
// Number handling for the export, which writes money the Brazilian way:
// "." groups thousands and "," marks decimals ("1.234,56").

/// Parses a money cell. Empty, non-numeric or negative text is missing.
pub fn parse_money(text: &str) -> Option<f64> {
    parse_br_decimal(text.trim())
}

/// Parses the number captured in front of an area phrase.
///
/// A token with a comma follows the money rule. A token with only dots is read
/// as thousands grouping when every group after the first has three digits
/// (`1.234`), and as a decimal point otherwise (`68.00`).
pub fn parse_area_token(token: &str) -> Option<f64> {
    let token = token.trim().trim_matches(|c: char| c == ',' || c == '.');
    if token.is_empty() {
        return None;
    }

    if token.contains(',') {
        return parse_br_decimal(token);
    }

    let groups: Vec<&str> = token.split('.').collect();
    let value = if groups.len() > 1 && groups[1..].iter().all(|g| g.len() == 3) {
        groups.concat().parse::<f64>().ok()
    } else if groups.len() <= 2 {
        token.parse::<f64>().ok()
    } else {
        None
    };

    value.filter(|v| v.is_finite() && *v >= 0.0)
}

fn parse_br_decimal(text: &str) -> Option<f64> {
    if text.is_empty() {
        return None;
    }
    text.replace('.', "")
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Formats a value as Brazilian reais: `R$ 3.250,00`.
pub fn format_brl(value: f64) -> String {
    if !value.is_finite() {
        return "R$ -".to_string();
    }

    let cents = (value.abs() * 100.0).round() as u64;
    let digits = (cents / 100).to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}R$ {grouped},{:02}", cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_uses_brazilian_separators() {
        assert_eq!(parse_money("1.234,56"), Some(1234.56));
        assert_eq!(parse_money("300.000,00"), Some(300_000.0));
        assert_eq!(parse_money(" 99,9 "), Some(99.9));
        assert_eq!(parse_money("1.000.000"), Some(1_000_000.0));
    }

    #[test]
    fn unparseable_money_is_missing() {
        assert_eq!(parse_money(""), None);
        assert_eq!(parse_money("   "), None);
        assert_eq!(parse_money("nan"), None);
        assert_eq!(parse_money("inf"), None);
        assert_eq!(parse_money("a combinar"), None);
        assert_eq!(parse_money("-10,00"), None);
    }

    #[test]
    fn area_tokens() {
        let cases = [
            ("120,5", Some(120.5)),
            ("120", Some(120.0)),
            ("1.234,5", Some(1234.5)),
            ("1.234", Some(1234.0)),
            ("68.00", Some(68.0)),
            ("49.95", Some(49.95)),
            (",68.00", Some(68.0)),
            ("1.2.3", None),
            (",", None),
            ("", None),
        ];
        for (token, expected) in cases {
            assert_eq!(parse_area_token(token), expected, "token {token:?}");
        }
    }

    #[test]
    fn formats_reais() {
        assert_eq!(format_brl(3250.0), "R$ 3.250,00");
        assert_eq!(format_brl(200.0), "R$ 200,00");
        assert_eq!(format_brl(1234567.891), "R$ 1.234.567,89");
        assert_eq!(format_brl(0.005), "R$ 0,01");
        assert_eq!(format_brl(0.0), "R$ 0,00");
        assert_eq!(format_brl(-12.5), "-R$ 12,50");
        assert_eq!(format_brl(f64::NAN), "R$ -");
    }
}
