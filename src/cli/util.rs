use anyhow::Context;

use crate::base;
use crate::cli;

pub fn charset_from_config(config: &base::Config) -> base::Charset {
    let mut charset = base::Charset::default();
    if config.use_unicode_symbols {
        charset = charset.with_unicode()
    }
    if config.use_colored_output {
        charset = charset.with_color()
    }
    charset
}

/// If `fullmatch` is false, ensures all categories starts with and ends with
/// `*`, except for empty categories which are left alone. If `fullmatch` is
/// true, does not modify categories.
pub fn preprocess_categories<'a>(
    categories: &'a [String],
    fullmatch: bool,
) -> std::borrow::Cow<'a, [String]> {
    if fullmatch {
        return categories.into();
    }
    categories
        .iter()
        .map(|s| {
            let mut s2 = s.clone();
            if s2.is_empty() {
                return s2;
            }
            if !s2.starts_with('*') {
                s2.insert(0, '*');
            }
            if !s2.ends_with('*') {
                s2.push('*');
            }
            s2
        })
        .collect::<Vec<_>>()
        .into()
}

pub fn category_filter(opts: &cli::sharedopts::CategoriesOpts) -> base::CategoryFilter {
    let categories = preprocess_categories(&opts.categories, opts.fullmatch);
    let not_categories = preprocess_categories(&opts.not_categories, opts.fullmatch);
    base::CategoryFilter::new(&categories, &not_categories)
}

/// Width of the attached terminal, or zero if there is none. Charts widen
/// anything narrower to their minimum.
pub fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0)
        .unwrap_or_default() as usize
}

/// Opens a selected transactions file relative to the working directory.
pub fn open_csv(fs: &base::Fs, path: &std::path::Path) -> anyhow::Result<std::fs::File> {
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if !is_csv {
        tracing::warn!(path = %path.display(), "selected file is not a .csv file");
    }
    std::fs::File::open(fs.resolve(path))
        .with_context(|| format!("failed to open '{}'", path.display()))
}

/// Feeds the file at `path` to `tracker` as a file selection. No path is the
/// empty selection, which the tracker ignores.
pub fn select<R>(
    tracker: &mut base::Tracker<R>,
    fs: &base::Fs,
    path: Option<&std::path::Path>,
) -> anyhow::Result<()>
where
    R: base::Renderer,
{
    let Some(path) = path else {
        return Ok(tracker.select_file(None::<std::fs::File>)?);
    };
    let file = open_csv(fs, path)?;
    tracker.select_file(Some(file)).map_err(|e| match e {
        base::tracker::SelectError::Parse(e) => {
            anyhow::Error::new(e).context(format!("failed to parse '{}'", path.display()))
        }
        e => e.into(),
    })?;
    let totals = tracker.totals();
    tracing::debug!(
        path = %path.display(),
        categories = totals.len(),
        total = %totals.sum(),
        "file charted"
    );
    Ok(())
}
