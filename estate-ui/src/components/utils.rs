//! Utility functions for UI components

use crate::display_types::FinancingCost;

/// Widths offered to the browser for full-size listing photos.
pub const PHOTO_WIDTHS: &[u32] = &[480, 768, 1024, 1600];

/// Widths offered for thumbnails.
pub const THUMBNAIL_WIDTHS: &[u32] = &[240, 480];

/// Build a `srcset` value asking the image CDN for each width.
pub fn src_set(src: &str, widths: &[u32]) -> String {
    let separator = if src.contains('?') { '&' } else { '?' };
    widths
        .iter()
        .map(|w| format!("{src}{separator}w={w} {w}w"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Group digits by thousands, e.g. `10,204`
pub fn format_number(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format whole dollars, e.g. `$57,418`
pub fn format_usd(amount: u64) -> String {
    format!("${}", format_number(amount))
}

/// Sum of the monthly cost rows
pub fn monthly_total(costs: &[FinancingCost]) -> u64 {
    costs.iter().map(|c| c.monthly_usd).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_src_set() {
        assert_eq!(
            src_set("https://cdn.example.com/a.jpg", THUMBNAIL_WIDTHS),
            "https://cdn.example.com/a.jpg?w=240 240w, https://cdn.example.com/a.jpg?w=480 480w"
        );
        assert_eq!(src_set("https://x/a.jpg?v=2", &[480]), "https://x/a.jpg?v=2&w=480 480w");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(948), "948");
        assert_eq!(format_number(10204), "10,204");
        assert_eq!(format_number(100000), "100,000");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(0), "$0");
        assert_eq!(format_usd(999), "$999");
        assert_eq!(format_usd(1000), "$1,000");
        assert_eq!(format_usd(57418), "$57,418");
        assert_eq!(format_usd(1234567), "$1,234,567");
    }

    #[test]
    fn test_monthly_total() {
        let costs = vec![
            FinancingCost {
                item: "Mortgage".into(),
                monthly_usd: 48_500,
            },
            FinancingCost {
                item: "HOA".into(),
                monthly_usd: 8_918,
            },
        ];
        assert_eq!(monthly_total(&costs), 57_418);
        assert_eq!(monthly_total(&[]), 0);
    }
}
