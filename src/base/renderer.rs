use crate::base;

/// Display surface a [`base::Tracker`] draws into.
pub trait Renderer {
    /// Replaces whatever chart is displayed with `option`.
    fn set_option(&mut self, option: &base::ChartOption) -> std::io::Result<()>;

    /// Removes the displayed chart.
    fn clear(&mut self) -> std::io::Result<()>;

    /// Lays the current chart out again for a new width. Chart data is left
    /// alone.
    fn resize(&mut self, term_width: usize) -> std::io::Result<()>;

    /// Shows the debug serialization of the latest totals.
    fn show_debug(&mut self, text: &str) -> std::io::Result<()>;

    /// Releases the surface. Nothing is drawn afterwards.
    fn dispose(&mut self) -> std::io::Result<()>;
}

/// Draws pie charts as text.
pub struct TermRenderer<W> {
    out: W,
    charset: base::Charset,
    term_width: usize,
    height: usize,
    current: Option<base::ChartOption>,
}

impl<W> TermRenderer<W>
where
    W: std::io::Write,
{
    pub fn new(out: W, charset: base::Charset, term_width: usize, height: usize) -> Self {
        Self {
            out,
            charset,
            term_width,
            height,
            current: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self) -> std::io::Result<()> {
        let Some(option) = &self.current else {
            return Ok(());
        };
        let config = base::piechart::Config {
            charset: self.charset.clone(),
            term_width: self.term_width,
            height: self.height,
            option: option.clone(),
        };
        write!(self.out, "{}", config.to_piechart())
    }
}

impl<W> Renderer for TermRenderer<W>
where
    W: std::io::Write,
{
    fn set_option(&mut self, option: &base::ChartOption) -> std::io::Result<()> {
        self.current = Some(option.clone());
        self.draw()
    }

    fn clear(&mut self) -> std::io::Result<()> {
        self.current = None;
        writeln!(self.out, "No transactions.")
    }

    fn resize(&mut self, term_width: usize) -> std::io::Result<()> {
        if term_width == self.term_width {
            return Ok(());
        }
        self.term_width = term_width;
        self.draw()
    }

    fn show_debug(&mut self, text: &str) -> std::io::Result<()> {
        self.out.write_all(text.as_bytes())
    }

    fn dispose(&mut self) -> std::io::Result<()> {
        self.current = None;
        self.out.flush()
    }
}

/// Writes every chart option as ECharts JSON instead of drawing it.
pub struct JsonRenderer<W> {
    out: W,
}

impl<W> JsonRenderer<W>
where
    W: std::io::Write,
{
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W> Renderer for JsonRenderer<W>
where
    W: std::io::Write,
{
    fn set_option(&mut self, option: &base::ChartOption) -> std::io::Result<()> {
        write!(self.out, "{}", option)
    }

    /// Writes an empty option, which clears an ECharts instance when applied
    /// with `notMerge`.
    fn clear(&mut self) -> std::io::Result<()> {
        writeln!(self.out, "{{}}")
    }

    fn resize(&mut self, _term_width: usize) -> std::io::Result<()> {
        Ok(())
    }

    fn show_debug(&mut self, text: &str) -> std::io::Result<()> {
        self.out.write_all(text.as_bytes())
    }

    fn dispose(&mut self) -> std::io::Result<()> {
        self.out.flush()
    }
}
