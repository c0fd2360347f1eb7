use crate::base;

pub struct Totalsprinter<'a> {
    charset: &'a base::Charset,
    rows: Vec<(&'a str, base::Cents)>,
    total: base::Cents,
    alignment_charlen: usize,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub totals: base::Totals,
}

impl Config {
    pub fn to_totalsprinter(&'_ self) -> Totalsprinter<'_> {
        let rows = self.totals.iter().collect::<Vec<_>>();
        let total = self.totals.sum();

        fn char_count(label: &str, value: base::Cents) -> usize {
            base::util::charlen(label)
                + base::util::BOUNDING_SPACES_COUNT
                + base::util::MIN_DASHES_COUNT
                + value.charlen_for_alignment()
        }
        let alignment_charlen = usize::max(
            rows.iter()
                .map(|&(label, value)| char_count(label, value))
                .max()
                .unwrap_or_default(),
            char_count("Total", total),
        );

        Totalsprinter {
            charset: &self.charset,
            rows,
            total,
            alignment_charlen,
        }
    }
}

impl Totalsprinter<'_> {
    fn draw(
        &self,
        w: &mut impl std::fmt::Write,
        label: &str,
        value: base::Cents,
    ) -> std::fmt::Result {
        let dash_count = self.alignment_charlen
            - base::util::charlen(label)
            - base::util::BOUNDING_SPACES_COUNT
            - value.charlen_for_alignment();
        w.write_str(label)?;
        w.write_char(' ')?;
        for _ in 0..dash_count {
            w.write_char(self.charset.dash)?;
        }
        w.write_char(' ')?;
        writeln!(w, "{}", value)?;
        Ok(())
    }
}

impl std::fmt::Display for Totalsprinter<'_> {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use std::fmt::Write;
        self.rows
            .iter()
            .try_for_each(|&(label, value)| self.draw(f, label, value))?;
        if !self.rows.is_empty() {
            for _ in 1..self.alignment_charlen {
                f.write_char(self.charset.rule)?;
            }
            f.write_char('\n')?;
        }
        self.draw(f, "Total", self.total)
    }
}
