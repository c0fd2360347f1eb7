use strum::VariantArray;

use crate::base;

/// ECharts' default palette, assigned to slices in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::VariantArray)]
enum SliceColor {
    Blue,
    Green,
    Yellow,
    Red,
    Cyan,
    Teal,
    Orange,
    Purple,
    Pink,
}

impl SliceColor {
    fn of(i: usize) -> Self {
        Self::VARIANTS[i % Self::VARIANTS.len()]
    }

    const fn rgb(self) -> (u8, u8, u8) {
        match self {
            SliceColor::Blue => (0x54, 0x70, 0xc6),
            SliceColor::Green => (0x91, 0xcc, 0x75),
            SliceColor::Yellow => (0xfa, 0xc8, 0x58),
            SliceColor::Red => (0xee, 0x66, 0x66),
            SliceColor::Cyan => (0x73, 0xc0, 0xde),
            SliceColor::Teal => (0x3b, 0xa2, 0x72),
            SliceColor::Orange => (0xfc, 0x84, 0x52),
            SliceColor::Purple => (0x9a, 0x60, 0xb4),
            SliceColor::Pink => (0xea, 0x7c, 0xcc),
        }
    }
}

pub struct Piechart<'a> {
    charset: &'a base::Charset,
    title: &'a str,
    /// Legend text per slice, without the leading slice symbol.
    legend: Vec<String>,
    legend_charlen: usize,
    /// Pie raster cropped to the circle's bounding box. Each cell holds the
    /// index of the slice covering it.
    cells: Vec<Vec<Option<usize>>>,
    pie_charlen: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub term_width: usize,
    /// Maximum number of rows the pie may span.
    pub height: usize,
    pub option: base::ChartOption,
}

impl Config {
    pub fn to_piechart(&self) -> Piechart<'_> {
        let slices = self.option.slices();
        // Summed in f64 as the cents total may exceed i64::MAX.
        let positive_total = slices
            .iter()
            .map(|s| s.value.0.max(0) as f64)
            .sum::<f64>();

        let shares = slices
            .iter()
            .map(|s| match s.value.0 > 0 {
                true => format!("{:.1}%", s.value.0 as f64 * 100.0 / positive_total),
                false => "-".to_string(),
            })
            .collect::<Vec<_>>();
        let name_charlen = slices
            .iter()
            .map(|s| base::util::charlen(&s.name))
            .max()
            .unwrap_or_default();
        let value_charlen = slices
            .iter()
            .map(|s| s.value.charlen())
            .max()
            .unwrap_or_default();
        let share_charlen = shares.iter().map(String::len).max().unwrap_or_default();
        let legend = slices
            .iter()
            .zip(&shares)
            .map(|(s, share)| {
                format!(
                    "{:<name_charlen$}  {:>value_charlen$}  {:>share_charlen$}",
                    s.name,
                    s.value.to_string(),
                    share,
                )
            })
            .collect::<Vec<_>>();
        let legend_charlen = match legend.is_empty() {
            true => 0,
            false => 2 + name_charlen + 2 + value_charlen + 2 + share_charlen, // symbol and spaces
        };

        let avail_charlen = self
            .term_width
            .max(base::util::MIN_TERM_WIDTH)
            .saturating_sub(legend_charlen + base::util::LEGEND_GAP);
        let rows = match positive_total > 0.0 {
            true => self.height.min(avail_charlen / 2),
            false => 0,
        };
        let mut cells = rasterize(
            slices,
            positive_total,
            rows,
            self.option.radius_ratio(),
        );

        cells.retain(|row| row.iter().any(Option::is_some));
        let first = cells
            .iter()
            .filter_map(|row| row.iter().position(Option::is_some))
            .min()
            .unwrap_or_default();
        let end = cells
            .iter()
            .filter_map(|row| row.iter().rposition(Option::is_some))
            .max()
            .map_or(0, |i| i + 1);
        for row in cells.iter_mut() {
            row.truncate(end);
            row.drain(..first);
        }

        Piechart {
            charset: &self.charset,
            title: &self.option.title.text,
            legend,
            legend_charlen,
            cells,
            pie_charlen: end.saturating_sub(first),
        }
    }
}

/// Draws a circle of `rows` rows by `2 * rows` columns, two columns per row
/// keeping it round on screen. Slices run clockwise from 12 o'clock in data
/// order and only slices with a positive value get any area.
fn rasterize(
    slices: &[base::chartoption::Slice],
    positive_total: f64,
    rows: usize,
    radius_ratio: f64,
) -> Vec<Vec<Option<usize>>> {
    let mut ends = Vec::<(usize, f64)>::new();
    let mut acc = 0.0;
    for (i, s) in slices.iter().enumerate() {
        if s.value.0 > 0 {
            acc += s.value.0 as f64 / positive_total;
            ends.push((i, acc));
        }
    }

    let half = rows as f64 / 2.0;
    let radius = radius_ratio * half;
    (0..rows)
        .map(|r| {
            let y = r as f64 + 0.5 - half;
            (0..2 * rows)
                .map(|c| {
                    let x = (c as f64 + 0.5) / 2.0 - half;
                    if x * x + y * y > radius * radius {
                        return None;
                    }
                    let mut turn = x.atan2(-y) / std::f64::consts::TAU;
                    if turn < 0.0 {
                        turn += 1.0;
                    }
                    ends.iter()
                        .find(|&&(_, end)| turn < end)
                        .or(ends.last())
                        .map(|&(i, _)| i)
                })
                .collect()
        })
        .collect()
}

impl Piechart<'_> {
    fn write_run(
        &self,
        w: &mut impl std::fmt::Write,
        slice: Option<usize>,
        len: usize,
    ) -> std::fmt::Result {
        let run = match slice {
            Some(i) => self.charset.slice_symbol(i).to_string().repeat(len),
            None => " ".repeat(len),
        };
        match slice {
            Some(i) if self.charset.color => {
                let (r, g, b) = SliceColor::of(i).rgb();
                write!(w, "{}", colored::Colorize::truecolor(run.as_str(), r, g, b))
            }
            _ => w.write_str(&run),
        }
    }

    fn draw_row(&self, w: &mut impl std::fmt::Write, row: &[Option<usize>]) -> std::fmt::Result {
        let end = row.iter().rposition(Option::is_some).map_or(0, |i| i + 1);
        let mut start = 0;
        while start < end {
            let slice = row[start];
            let len = row[start..end].iter().take_while(|&&c| c == slice).count();
            self.write_run(w, slice, len)?;
            start += len;
        }
        Ok(())
    }

    fn draw(&self, w: &mut impl std::fmt::Write, i: usize) -> std::fmt::Result {
        let mut charlen = 0;
        if let Some(text) = self.legend.get(i) {
            self.write_run(w, Some(i), 1)?;
            write!(w, " {}", text)?;
            charlen = self.legend_charlen;
        }
        if let Some(row) = self.cells.get(i) {
            for _ in charlen..(self.legend_charlen + base::util::LEGEND_GAP) {
                w.write_char(' ')?;
            }
            self.draw_row(w, row)?;
        }
        writeln!(w)
    }
}

impl std::fmt::Display for Piechart<'_> {
    /// Writes the title, a blank line, then the legend with the pie to its
    /// right. Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use std::fmt::Write;
        let charlen = match self.pie_charlen {
            0 => self.legend_charlen,
            n => self.legend_charlen + base::util::LEGEND_GAP + n,
        };
        for _ in 0..(charlen.saturating_sub(base::util::charlen(self.title)) / 2) {
            f.write_char(' ')?;
        }
        writeln!(f, "{}", self.title)?;
        writeln!(f)?;
        for i in 0..self.legend.len().max(self.cells.len()) {
            self.draw(f, i)?;
        }
        Ok(())
    }
}
