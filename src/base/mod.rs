pub mod categoryfilter;
pub mod cents;
pub mod charset;
pub mod chartoption;
pub mod config;
pub mod fs;
pub mod piechart;
pub mod renderer;
pub mod row;
pub mod rowlist;
pub mod totals;
pub mod totalsprinter;
pub mod tracker;
pub mod util;

pub use categoryfilter::CategoryFilter;
pub use cents::Cents;
pub use charset::Charset;
pub use chartoption::ChartOption;
pub use config::Config;
pub use fs::Fs;
pub use renderer::JsonRenderer;
pub use renderer::Renderer;
pub use renderer::TermRenderer;
pub use row::Row;
pub use rowlist::Rowlist;
pub use totals::Totals;
pub use totals::aggregate;
pub use tracker::Tracker;
