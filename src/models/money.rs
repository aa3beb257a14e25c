//! Currency formatting for payslip line items.

use rust_decimal::Decimal;

use crate::calculation::round2;

/// Formats an amount as `CODE 12,345.67`.
///
/// The amount is rounded to cents first. Negative amounts keep their sign
/// after the currency code.
///
/// # Examples
///
/// ```
/// use payslip_engine::models::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::new(12345_67, 2), "PHP"), "PHP 12,345.67");
/// assert_eq!(format_currency(Decimal::new(-1250, 1), "PHP"), "PHP -125.00");
/// ```
pub fn format_currency(amount: Decimal, code: &str) -> String {
    let rounded = round2(amount);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = rounded.abs().to_string();
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!(
        "{} {}{}.{}",
        code,
        if negative { "-" } else { "" },
        grouped,
        cents
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_groups_thousands() {
        assert_eq!(format_currency(dec("1234567.8"), "PHP"), "PHP 1,234,567.80");
        assert_eq!(format_currency(dec("100"), "PHP"), "PHP 100.00");
        assert_eq!(format_currency(dec("999.999"), "PHP"), "PHP 1,000.00");
    }

    #[test]
    fn test_zero_has_no_sign() {
        assert_eq!(format_currency(dec("-0.001"), "PHP"), "PHP 0.00");
        assert_eq!(format_currency(Decimal::ZERO, "USD"), "USD 0.00");
    }

    #[test]
    fn test_negative_net_pay() {
        assert_eq!(format_currency(dec("-20503.44"), "PHP"), "PHP -20,503.44");
    }
}
