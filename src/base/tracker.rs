use crate::base;

/// Turns selected CSV files into a pie chart of spending per category.
///
/// A tracker is mounted on a [`base::Renderer`] and owns it until
/// [`Tracker::unmount`], which consumes the tracker so no event can reach a
/// disposed renderer.
pub struct Tracker<R> {
    chart: R,
    filter: base::CategoryFilter,
    show_debug: bool,
    totals: base::Totals,
}

#[derive(Debug, thiserror::Error)]
pub enum SelectError {
    #[error(transparent)]
    Parse(#[from] base::rowlist::ParseError),
    #[error("failed to draw chart")]
    Draw(#[from] std::io::Error),
}

impl<R> Tracker<R>
where
    R: base::Renderer,
{
    pub fn mount(chart: R, show_debug: bool) -> Self {
        tracing::debug!(show_debug, "tracker mounted");
        Self {
            chart,
            filter: base::CategoryFilter::default(),
            show_debug,
            totals: base::Totals::new(),
        }
    }

    /// Hides categories rejected by `filter` from the chart and debug
    /// output.
    pub fn with_filter(self, filter: base::CategoryFilter) -> Self {
        Self { filter, ..self }
    }

    /// Handles a file selection. Selecting nothing is ignored. Otherwise the
    /// file is parsed and its totals replace the previous ones. On a parse
    /// error the previous totals and chart stay in place.
    pub fn select_file<F>(&mut self, file: Option<F>) -> Result<(), SelectError>
    where
        F: std::io::Read,
    {
        let Some(file) = file else {
            tracing::debug!("no file selected");
            return Ok(());
        };
        let rl = base::Rowlist::from_reader(file)?;
        self.on_parsed(&rl)?;
        Ok(())
    }

    fn on_parsed(&mut self, rl: &base::Rowlist) -> std::io::Result<()> {
        let mut totals = base::aggregate(rl);
        totals.retain(|c| self.filter.matches(c));
        tracing::info!(rows = rl.len(), categories = totals.len(), "aggregated");

        self.totals = totals;
        if let Some(text) = self.debug_text() {
            self.chart.show_debug(&text)?;
        }
        self.update_chart()
    }

    fn update_chart(&mut self) -> std::io::Result<()> {
        if self.totals.is_empty() {
            return self.chart.clear();
        }
        self.chart.set_option(&base::ChartOption::pie(&self.totals))
    }

    pub fn resize(&mut self, term_width: usize) -> std::io::Result<()> {
        tracing::trace!(term_width, "resize");
        self.chart.resize(term_width)
    }

    pub fn totals(&self) -> &base::Totals {
        &self.totals
    }

    /// Debug serialization of the latest totals, if the debug surface is
    /// shown.
    pub fn debug_text(&self) -> Option<String> {
        self.show_debug.then(|| self.totals.to_string())
    }

    /// Disposes the renderer and hands it back.
    pub fn unmount(mut self) -> std::io::Result<R> {
        self.chart.dispose()?;
        tracing::debug!("tracker unmounted");
        Ok(self.chart)
    }
}
