/// Non-negative decimal number: `^\d+(\.\d+)?$`
pub fn is_decimal(value: &str) -> bool {
    let (int_part, frac_part) = match value.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (value, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());

    all_digits(int_part) && frac_part.map_or(true, all_digits)
}

/// Required text field: trimmed value must not be empty
pub fn require(value: &str, message: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(message.to_string());
    }
    Ok(())
}
