/// Category assigned to rows that name none.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Header names holding a row's category, in lookup priority order.
pub const CATEGORY_FIELDS: &[&str] = &["category", "Category"];

/// Header names holding a row's amount, in lookup priority order.
pub const AMOUNT_FIELDS: &[&str] = &["amount", "Amount"];

/// One CSV line keyed by header name. Header names are case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row(std::collections::HashMap<String, String>);

impl Row {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Returns the trimmed value of the first field in `fields` that is
    /// present and not blank.
    pub fn first_present(&self, fields: &[&str]) -> Option<&str> {
        fields
            .iter()
            .filter_map(|f| self.get(f))
            .map(str::trim)
            .find(|v| !v.is_empty())
    }

    pub fn category(&self) -> &str {
        self.first_present(CATEGORY_FIELDS).unwrap_or(UNCATEGORIZED)
    }

    /// Amount of the row, read from the longest prefix of the field that
    /// forms a decimal number, so `12abc` is 12 and `1,234.56` is 1. Missing,
    /// blank, non-numeric and non-finite amounts count as zero.
    pub fn amount(&self) -> f64 {
        let Some(s) = self.first_present(AMOUNT_FIELDS) else {
            return 0.0;
        };
        let number = &s[..numeric_prefix_len(s)];
        if number.len() < s.len() {
            tracing::debug!(amount = s, number, "ignored trailing text in amount");
        }
        match number.parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            Ok(v) => {
                tracing::debug!(amount = s, value = %v, "non-finite amount counted as zero");
                0.0
            }
            Err(e) => {
                tracing::debug!(amount = s, error = %e, "unparsable amount counted as zero");
                0.0
            }
        }
    }
}

/// Length of the longest prefix of `s` of the form `[+-]digits[.digits][e[+-]digits]`,
/// where either the integer or the fraction digits may be empty but not both.
/// Zero if `s` does not start with a number.
fn numeric_prefix_len(s: &str) -> usize {
    let b = s.as_bytes();
    let skip_digits = |mut i: usize| {
        while b.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let start = usize::from(matches!(b.first(), Some(b'+' | b'-')));
    let mut end = skip_digits(start);
    let mut has_digits = end > start;
    if b.get(end) == Some(&b'.') {
        let frac_end = skip_digits(end + 1);
        if has_digits || frac_end > end + 1 {
            has_digits = true;
            end = frac_end;
        }
    }
    if !has_digits {
        return 0;
    }

    if matches!(b.get(end), Some(b'e' | b'E')) {
        let exp_start = end + 1 + usize::from(matches!(b.get(end + 1), Some(b'+' | b'-')));
        let exp_end = skip_digits(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }
    end
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<String>,
{
    /// Later duplicates of a field name replace earlier ones.
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
