//! Утилиты форматирования ячеек таблиц

use chrono::NaiveDate;
use serde_json::Value;

/// Форматирует число с разделителем тысяч (пробел) и указанным количеством знаков после запятой
///
/// # Примеры
///
/// ```
/// use frontend::shared::format::format_number_with_decimals;
///
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.*}", usize::from(decimals.min(6)), value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", integer_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    match decimal_part {
        Some(d) => format!("{sign}{grouped}.{d}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Quantity with up to three decimals, trailing zeros removed
pub fn format_quantity(value: f64) -> String {
    let formatted = format_number_with_decimals(value, 3);
    match formatted.split_once('.') {
        Some((int, dec)) => {
            let dec = dec.trim_end_matches('0');
            if dec.is_empty() {
                int.to_string()
            } else {
                format!("{int}.{dec}")
            }
        }
        None => formatted,
    }
}

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26" -> "15.03.2024"
///
/// Unparseable input is returned unchanged.
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d.%m.%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Number cell: numeric values (or numeric strings) formatted as a quantity
pub fn quantity_cell(value: Option<&Value>) -> String {
    match value {
        Some(Value::Number(n)) => n.as_f64().map(format_quantity).unwrap_or_default(),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map(format_quantity)
            .unwrap_or_else(|_| s.clone()),
        _ => String::new(),
    }
}

/// Date cell: ISO date strings shown as DD.MM.YYYY
pub fn date_cell(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => format_date(s),
        _ => String::new(),
    }
}
