//! Shared HTML layout, components and formatting for the web UI.
use std::sync::OnceLock;

use maud::{DOCTYPE, Markup, PreEscaped, html};
use numfmt::{Formatter, Precision};

/// The app's stylesheet, inlined into every page.
const STYLESHEET: &str = include_str!("../static/main.css");

pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Transaction Manager" }
                style { (PreEscaped(STYLESHEET)) }
            }

            body
            {
                (content)
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    let content = html!(
        section class="error-view"
        {
            h1 { (header) }
            p { strong { (description) } }
            p { (fix) }
            a href="/" { "Back to Homepage" }
        }
    );

    base(title, &content)
}

/// A label for the element with `id`, followed by `input`, wrapped in a `.form-group` div.
pub fn form_group(id: &str, label: &str, input: Markup) -> Markup {
    html! {
        div class="form-group"
        {
            label for=(id) { (label) }
            (input)
        }
    }
}

/// numfmt switches to scientific notation for amounts this large.
const SCIENTIFIC_NOTATION_CUTOFF: f64 = 1_000_000_000_000.0;

/// Format `number` as dollars rounded to the nearest cent, e.g. "$1,234.50".
pub fn format_currency(number: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    // numfmt truncates extra decimals, so round to cents before formatting.
    let cents = (number.abs() * 100.0).round() / 100.0;
    let is_negative = number < 0.0;

    if cents == 0.0 {
        // Zero is hardcoded as "0", and anything under half a cent rounds to zero.
        return "$0.00".to_owned();
    }

    if cents >= SCIENTIFIC_NOTATION_CUTOFF {
        let sign = if is_negative { "-" } else { "" };
        return format!("{sign}${}", group_thousands(&format!("{cents:.2}")));
    }

    let mut formatted_string = if is_negative {
        negative_fmt.fmt_string(cents)
    } else {
        positive_fmt.fmt_string(cents)
    };

    // numfmt omits trailing zeros, e.g. "12.30" is rendered as "12.3" and
    // "5.00" as "5", so pad the decimals out to two places.
    match formatted_string.find('.') {
        Some(point) => {
            let decimals = formatted_string.len() - point - 1;
            for _ in decimals..2 {
                formatted_string.push('0');
            }
        }
        None => formatted_string.push_str(".00"),
    }

    formatted_string
}

/// Insert a comma between every three digits of the whole part of `number`, e.g. "1234.50" -> "1,234.50".
fn group_thousands(number: &str) -> String {
    let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));
    let mut grouped = String::with_capacity(number.len() + whole.len() / 3);

    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if !fraction.is_empty() {
        grouped.push('.');
        grouped.push_str(fraction);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::format_currency;

    #[test]
    fn formats_two_decimal_places() {
        assert_eq!(format_currency(99.5), "$99.50");
        assert_eq!(format_currency(12.34), "$12.34");
    }

    #[test]
    fn formats_zero() {
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn formats_whole_numbers_with_decimals() {
        assert_eq!(format_currency(5.0), "$5.00");
        assert_eq!(format_currency(100.0), "$100.00");
    }

    #[test]
    fn formats_thousands_separators() {
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(1_234_567.89), "$1,234,567.89");
    }

    #[test]
    fn rounds_to_nearest_cent() {
        assert_eq!(format_currency(99.999), "$100.00");
        assert_eq!(format_currency(12.345_6), "$12.35");
        assert_eq!(format_currency(0.005), "$0.01");
    }

    #[test]
    fn amounts_under_half_a_cent_are_zero() {
        assert_eq!(format_currency(0.001), "$0.00");
        assert_eq!(format_currency(0.004), "$0.00");
    }

    #[test]
    fn formats_smallest_cent() {
        assert_eq!(format_currency(0.01), "$0.01");
    }

    #[test]
    fn large_amounts_are_not_in_scientific_notation() {
        assert_eq!(format_currency(999_999_999_999.99), "$999,999,999,999.99");
        assert_eq!(format_currency(1e12), "$1,000,000,000,000.00");
        assert_eq!(format_currency(1e15), "$1,000,000,000,000,000.00");
        assert_eq!(
            format_currency(1e21),
            "$1,000,000,000,000,000,000,000.00"
        );
    }

    #[test]
    fn formats_negative_amounts() {
        assert_eq!(format_currency(-12.3), "-$12.30");
        assert_eq!(format_currency(-2e12), "-$2,000,000,000,000.00");
    }
}
