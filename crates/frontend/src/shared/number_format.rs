//! Number formatting for the summary widgets and the product table

/// Formats a number with a thousands separator (comma) and the given number of decimals
///
/// # Examples
///
/// ```
/// # use inventory_frontend::shared::number_format::format_number_with_decimals;
/// let formatted = format_number_with_decimals(1234.567, 2);
/// assert_eq!(formatted, "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.*}", decimals.min(6) as usize, value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    // Insert a comma every 3 digits from the end of the integer part
    let mut result = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && c != '-' {
            result.push(',');
        }
        result.push(c);
    }
    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Money with a dollar sign, 2 decimals and thousands separators
///
/// # Examples
///
/// ```
/// # use inventory_frontend::shared::number_format::format_money;
/// assert_eq!(format_money(1234567.8), "$1,234,567.80");
/// ```
pub fn format_money(value: f64) -> String {
    let body = format_number_with_decimals(value.abs(), 2);
    if value < 0.0 {
        format!("-${}", body)
    } else {
        format!("${}", body)
    }
}

pub fn format_number_int(value: i64) -> String {
    format_number_with_decimals(value as f64, 0)
}
