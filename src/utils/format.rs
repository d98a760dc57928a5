//! Format - Locale-Aware Formatting Utilities
//!
//! Numbers, prices and byte sizes as displayed by the pricing components.

use crate::domain::Currency;
use crate::i18n::Locale;

/// Insert a group separator every three digits of an unsigned integer string
pub fn group_digits(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut result = String::with_capacity(len + len / 3 * separator.len());

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push_str(separator);
        }
        result.push(c);
    }

    result
}

/// Format a decimal with a fixed number of fraction digits
fn format_fixed(value: f64, fraction_digits: usize, trim_zeros: bool, locale: Locale) -> String {
    let text = format!("{:.*}", fraction_digits, value.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let frac_part = if trim_zeros {
        frac_part.trim_end_matches('0')
    } else {
        frac_part
    };

    let mut result = String::new();
    // "-0" is not worth showing
    if value < 0.0 && text.chars().any(|c| c.is_ascii_digit() && c != '0') {
        result.push('-');
    }
    result.push_str(&group_digits(int_part, locale.group_separator()));
    if !frac_part.is_empty() {
        result.push_str(locale.decimal_separator());
        result.push_str(frac_part);
    }
    result
}

/// Format a decimal with at most `max_fraction_digits`, trailing zeros trimmed
pub fn format_decimal(value: f64, max_fraction_digits: usize, locale: Locale) -> String {
    format_fixed(value, max_fraction_digits, true, locale)
}

/// Format a plain number (feature values)
pub fn format_number(value: f64, locale: Locale) -> String {
    format_decimal(value, 2, locale)
}

/// Format a monetary amount with two fraction digits and the currency symbol
pub fn format_price(value: f64, currency: Currency, locale: Locale) -> String {
    let amount = format_fixed(value, 2, false, locale);
    match locale {
        Locale::En => match amount.strip_prefix('-') {
            Some(abs) => format!("-{}{abs}", currency.symbol()),
            None => format!("{}{amount}", currency.symbol()),
        },
        Locale::Fr => format!("{amount}\u{a0}{}", currency.symbol()),
    }
}

/// Format a byte count as a human readable size using binary multiples
pub fn format_bytes(bytes: f64, locale: Locale) -> String {
    const UNITS_EN: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    const UNITS_FR: [&str; 5] = ["o", "Ko", "Mo", "Go", "To"];

    let units = match locale {
        Locale::En => &UNITS_EN,
        Locale::Fr => &UNITS_FR,
    };

    let mut value = bytes.max(0.0);
    let mut unit = 0;
    while value >= 1024.0 && unit < units.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{}\u{a0}{}", format_decimal(value, 1, locale), units[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("1", ","), "1");
        assert_eq!(group_digits("123", ","), "123");
        assert_eq!(group_digits("1234", ","), "1,234");
        assert_eq!(group_digits("1234567", ","), "1,234,567");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(2.0, Locale::En), "2");
        assert_eq!(format_number(1500.0, Locale::En), "1,500");
        assert_eq!(format_number(1500.0, Locale::Fr), "1\u{202f}500");
        assert_eq!(format_number(0.5, Locale::Fr), "0,5");
        assert_eq!(format_number(1.254, Locale::En), "1.25");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(17.5, Currency::Eur, Locale::En), "€17.50");
        assert_eq!(format_price(0.0, Currency::Usd, Locale::En), "$0.00");
        assert_eq!(format_price(1234.5, Currency::Gbp, Locale::En), "£1,234.50");
        assert_eq!(format_price(17.5, Currency::Eur, Locale::Fr), "17,50\u{a0}€");
        assert_eq!(
            format_price(1234.5, Currency::Usd, Locale::Fr),
            "1\u{202f}234,50\u{a0}$"
        );
    }

    #[test]
    fn test_format_negative_price() {
        assert_eq!(format_price(-3.0, Currency::Eur, Locale::En), "-€3.00");
        assert_eq!(format_price(-0.001, Currency::Eur, Locale::En), "€0.00");
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512.0, Locale::En), "512\u{a0}B");
        assert_eq!(format_bytes(104_857_600.0, Locale::En), "100\u{a0}MB");
        assert_eq!(format_bytes(1_073_741_824.0, Locale::En), "1\u{a0}GB");
        assert_eq!(format_bytes(2_684_354_560.0, Locale::En), "2.5\u{a0}GB");
        assert_eq!(format_bytes(2_684_354_560.0, Locale::Fr), "2,5\u{a0}Go");
        assert_eq!(format_bytes(5_368_709_120.0, Locale::Fr), "5\u{a0}Go");
    }
}
