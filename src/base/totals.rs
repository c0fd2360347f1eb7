use crate::base;

/// Rounded amount per category, in order of each category's first
/// appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Totals(Vec<(String, base::Cents)>);

impl Totals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    pub fn get(&self, category: &str) -> Option<base::Cents> {
        self.0
            .iter()
            .find(|(c, _)| c == category)
            .map(|&(_, amount)| amount)
    }

    /// Total of all categories, saturating instead of overflowing.
    pub fn sum(&self) -> base::Cents {
        self.0
            .iter()
            .fold(base::Cents(0), |acc, &(_, amount)| acc.saturating_add(amount))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, base::Cents)> {
        self.0.iter().map(|(c, amount)| (c.as_str(), *amount))
    }

    /// Keeps only the categories for which `f` returns true.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&str) -> bool,
    {
        self.0.retain(|(c, _)| f(c))
    }
}

/// Sums row amounts per category and rounds each sum to cents.
///
/// Rows are never rejected: see [`base::Row::category`] and
/// [`base::Row::amount`] for how incomplete rows are counted. Sums are kept
/// in `f64` until every row has been added so that rounding happens once per
/// category.
pub fn aggregate<'a, I>(rows: I) -> Totals
where
    I: IntoIterator<Item = &'a base::Row>,
{
    let mut sums = Vec::<(&str, f64)>::new();
    let mut index = std::collections::HashMap::<&str, usize>::new();
    for row in rows {
        let category = row.category();
        let i = *index.entry(category).or_insert_with(|| {
            sums.push((category, 0.0));
            sums.len() - 1
        });
        sums[i].1 += row.amount();
    }
    Totals(
        sums.into_iter()
            .map(|(c, sum)| (c.to_string(), base::Cents::from_f64_rounded(sum)))
            .collect(),
    )
}

impl<S> FromIterator<(S, base::Cents)> for Totals
where
    S: Into<String>,
{
    /// Amounts of repeated categories are added together.
    fn from_iter<T: IntoIterator<Item = (S, base::Cents)>>(iter: T) -> Self {
        let mut totals = Self::new();
        for (category, amount) in iter {
            let category = category.into();
            match totals.0.iter_mut().find(|(c, _)| *c == category) {
                Some((_, total)) => *total = total.saturating_add(amount),
                None => totals.0.push((category, amount)),
            }
        }
        totals
    }
}

impl serde::Serialize for Totals {
    /// Serializes as a JSON object mapping category to amount in currency
    /// units, preserving category order.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (category, amount) in &self.0 {
            map.serialize_entry(category, &amount.to_f64())?;
        }
        map.end()
    }
}

impl std::fmt::Display for Totals {
    /// Pretty printed JSON. Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string_pretty(self).map_err(|_| std::fmt::Error)?;
        writeln!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base::Cents;
    use indoc::indoc;
    use rstest::fixture;
    use rstest::rstest;

    #[fixture]
    fn rl() -> base::Rowlist {
        indoc!("
            date,category,amount
            2024-01-02,Food,12.50
            2024-01-03,Rent,900
            2024-01-03,food ,4.25
            2024-01-04,,7
            2024-01-05,Gas,abc
            2024-01-05,Food,-2.50
            2024-01-06,Gas,30.10
        ")
        .parse()
        .unwrap()
    }

    fn totals(entries: &[(&str, i64)]) -> Totals {
        entries.iter().map(|&(c, a)| (c, Cents(a))).collect()
    }

    #[rstest]
    #[case("", &[])]
    #[case("category,amount\n", &[])]
    #[case(
        indoc!("
            category,Category,amount,Amount
            Food,,12.345,
            ,Food,,0.005
        "),
        &[("Food", 1235)],
    )]
    #[case("category,amount\nGas,abc\n", &[("Gas", 0)])]
    #[case("amount\n50\n", &[("Uncategorized", 5000)])]
    #[case("note\nhello\n", &[("Uncategorized", 0)])]
    #[case(
        "category,amount\nFood,1\nfood ,2\n Food,4\nFOOD,8\n",
        &[("Food", 500), ("food", 200), ("FOOD", 800)],
    )]
    #[case(
        "category,amount\nB,1\nA,2\nB,3\nC,4\n",
        &[("B", 400), ("A", 200), ("C", 400)],
    )]
    #[case(
        "category,amount\nRefund,-10.005\nRefund,-0.001\n",
        &[("Refund", -1001)],
    )]
    #[case(
        "category,amount\nTiny,0.1\nTiny,0.2\n",
        &[("Tiny", 30)],
    )]
    #[case(
        "category,amount\nFood,12abc\nFood,3 USD\nFood,$4\n",
        &[("Food", 1500)],
    )]
    #[case(
        "category,amount\nDebt,-1e300\nDebt,-1e300\nHuge,1e300\n",
        &[("Debt", -i64::MAX), ("Huge", i64::MAX)],
    )]
    fn test_aggregate(#[case] csv: &str, #[case] want: &[(&str, i64)]) {
        let rl = csv.parse::<base::Rowlist>().unwrap();
        assert_eq!(aggregate(&rl), totals(want))
    }

    #[test]
    fn test_aggregate_replaces_invalid_utf8() {
        let bytes: &[u8] = b"category,amount,note\nFood,10,Caf\xe9\nRent,900,ok\n";
        let rl = base::Rowlist::from_reader(bytes).unwrap();
        assert_eq!(aggregate(&rl), totals(&[("Food", 1000), ("Rent", 90000)]));
    }

    #[test]
    fn test_sum_saturates() {
        let t = totals(&[("A", i64::MAX), ("B", i64::MAX)]);
        assert_eq!(t.sum(), Cents::MAX);
        assert_eq!(t.sum().to_string(), "92,233,720,368,547,758.07");

        let t = totals(&[("A", -i64::MAX), ("B", -1), ("A", -1)]);
        assert_eq!(t.sum(), Cents::MIN);
        assert_eq!(t.sum().to_string(), "(92,233,720,368,547,758.07)");
    }

    #[rstest]
    fn test_aggregate_fixture(rl: base::Rowlist) {
        let got = aggregate(&rl);
        assert_eq!(
            got,
            totals(&[
                ("Food", 1000),
                ("Rent", 90000),
                ("food", 425),
                ("Uncategorized", 700),
                ("Gas", 3010),
            ])
        );
        assert_eq!(
            got.iter().map(|(c, _)| c).collect::<Vec<_>>(),
            ["Food", "Rent", "food", "Uncategorized", "Gas"]
        );
    }

    #[rstest]
    fn test_aggregate_is_idempotent(rl: base::Rowlist) {
        assert_eq!(aggregate(&rl), aggregate(&rl))
    }

    #[rstest]
    fn test_sum_matches_row_amounts(rl: base::Rowlist) {
        let got = aggregate(&rl);
        let want = rl.iter().map(base::Row::amount).sum::<f64>();
        let tolerance = 0.01 * got.len() as f64;
        assert!((got.sum().to_f64() - want).abs() <= tolerance);
    }

    #[test]
    fn test_get_and_retain() {
        let mut t = totals(&[("Food", 100), ("Rent", 200), ("Gas", 300)]);
        assert_eq!(t.get("Rent"), Some(Cents(200)));
        assert_eq!(t.get("rent"), None);
        assert_eq!(t.sum(), Cents(600));

        t.retain(|c| c != "Rent");
        assert_eq!(t, totals(&[("Food", 100), ("Gas", 300)]));
        assert_eq!(t.len(), 2);
    }

    #[rstest]
    #[case(&[], "{}\n")]
    #[case(
        &[("Food", 1235), ("Uncategorized", 5000), ("Refund", -5)],
        indoc!(r#"
            {
              "Food": 12.35,
              "Uncategorized": 50.0,
              "Refund": -0.05
            }
        "#),
    )]
    fn test_to_string(#[case] entries: &[(&str, i64)], #[case] want: &str) {
        assert_eq!(totals(entries).to_string(), want)
    }
}
