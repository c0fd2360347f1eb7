#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    pub dash: char,
    pub rule: char,
    /// Symbols used to fill pie slices, assigned to slices in order and
    /// reused once exhausted.
    pub slice_symbols: &'static [char],
    pub color: bool,
}

impl Default for Charset {
    /// Only ASCII characters. No color.
    fn default() -> Self {
        Self {
            dash: '-',
            rule: '=',
            slice_symbols: &['#', 'o', '+', '=', '%', '*', '@', 'x', ':', '~'],
            color: false,
        }
    }
}

impl Charset {
    pub fn with_unicode(self) -> Self {
        Self {
            dash: '\u{2500}',
            rule: '\u{2550}',
            slice_symbols: &[
                '\u{2588}', '\u{2593}', '\u{2592}', '\u{2591}', '\u{25cf}', '\u{25c6}', '\u{25a0}',
                '\u{25b2}',
            ],
            ..self
        }
    }

    pub fn with_color(self) -> Self {
        Self {
            color: true,
            ..self
        }
    }

    pub fn slice_symbol(&self, i: usize) -> char {
        self.slice_symbols[i % self.slice_symbols.len()]
    }
}
