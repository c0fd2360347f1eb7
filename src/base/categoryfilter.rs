/// Wildcard include/exclude patterns over category names.
#[derive(Debug, Clone)]
pub struct CategoryFilter {
    incl: Vec<wildmatch::WildMatch>,
    excl: Vec<wildmatch::WildMatch>,
}

impl Default for CategoryFilter {
    /// Matches every category.
    fn default() -> Self {
        Self::new(&["*"], &[] as &[&str])
    }
}

impl CategoryFilter {
    pub fn new<T, U>(categories: &[T], not_categories: &[U]) -> Self
    where
        T: AsRef<str>,
        U: AsRef<str>,
    {
        Self {
            incl: categories
                .iter()
                .map(|s| wildmatch::WildMatch::new(s.as_ref()))
                .collect(),
            excl: not_categories
                .iter()
                .map(|s| wildmatch::WildMatch::new(s.as_ref()))
                .collect(),
        }
    }

    /// True if `category` matches any include pattern and no exclude pattern.
    pub fn matches(&self, category: &str) -> bool {
        self.incl.iter().any(|p| p.matches(category))
            && !self.excl.iter().any(|p| p.matches(category))
    }
}
