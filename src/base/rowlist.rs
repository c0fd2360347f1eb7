use crate::base;

/// Rows of one CSV file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rowlist(Vec<base::Row>);

impl Rowlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &base::Row> {
        self.0.iter()
    }

    /// Parses CSV whose first line names the fields. Blank lines are skipped.
    /// A line with fewer fields than the header lacks the trailing fields and
    /// fields past the header's length are dropped. Bytes that are not valid
    /// UTF-8 are replaced with U+FFFD, so only a failing reader is an error.
    pub fn from_reader<R>(r: R) -> Result<Self, ParseError>
    where
        R: std::io::Read,
    {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(r);
        let headers = reader
            .byte_headers()?
            .iter()
            .map(decode_field)
            .collect::<Vec<_>>();
        let rl = reader
            .byte_records()
            .map(|record| -> Result<base::Row, ParseError> {
                let record = record?;
                Ok(headers
                    .iter()
                    .cloned()
                    .zip(record.iter().map(decode_field))
                    .collect())
            })
            .collect::<Result<Self, ParseError>>()?;
        tracing::debug!(fields = headers.len(), rows = rl.len(), "parsed csv");
        Ok(rl)
    }
}

fn decode_field(bytes: &[u8]) -> String {
    match String::from_utf8_lossy(bytes) {
        std::borrow::Cow::Borrowed(s) => s.to_string(),
        std::borrow::Cow::Owned(s) => {
            tracing::debug!(field = %s, "replaced invalid utf-8 in csv field");
            s
        }
    }
}

impl<'a> IntoIterator for &'a Rowlist {
    type Item = &'a base::Row;
    type IntoIter = std::slice::Iter<'a, base::Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<base::Row> for Rowlist {
    fn from_iter<T: IntoIterator<Item = base::Row>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read csv")]
    Read(#[from] csv::Error),
}

impl std::str::FromStr for Rowlist {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_reader(s.as_bytes())
    }
}

impl TryFrom<&str> for Rowlist {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
