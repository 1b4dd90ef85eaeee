use rust_decimal::Decimal;

/// Normalizes input for decimal parsing: trims whitespace and removes
/// commas (thousands separator).
fn normalize_decimal_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a string into an optional [`Decimal`].
///
/// Handles comma as thousands separator. Returns `None` for empty,
/// whitespace-only or unparsable input (logs a warning on parse failure).
pub fn parse_optional_decimal(s: &str) -> Option<Decimal> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        None
    } else {
        normalized.parse().map_or_else(
            |e| {
                tracing::warn!(input = %s, "invalid decimal: {}", e);
                None
            },
            Some,
        )
    }
}

/// Formats an amount with Indian digit grouping: the last three digits
/// form one group, everything above groups in twos (10,00,000 not
/// 1,000,000). Paise are shown only when present.
pub fn format_inr(value: Decimal) -> String {
    let rounded =
        value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative();
    let abs = rounded.abs();
    let int_part = abs.trunc();
    let fraction = abs - int_part;

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_indian(&int_part.to_string()));
    if !fraction.is_zero() {
        // "0.50" -> ".50"
        let frac = format!("{fraction:.2}");
        out.push_str(&frac[1..]);
    }
    out
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
