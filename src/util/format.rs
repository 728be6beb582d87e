//! Display formatting for amounts and ticket numbers

/// Insert thousands separators into an integer
///
/// # Examples
/// ```
/// use lottogo::util::format::group_thousands;
///
/// assert_eq!(group_thousands(0), "0");
/// assert_eq!(group_thousands(6000000), "6,000,000");
/// ```
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a whole-baht amount, e.g. `฿5,940,000`
pub fn format_baht(amount: u64) -> String {
    format!("฿{}", group_thousands(amount))
}

/// Spread a number out for big-digit display, e.g. `8 2 9 5 1 7`
pub fn spaced_digits<T: ToString>(digits: impl IntoIterator<Item = T>) -> String {
    digits
        .into_iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
