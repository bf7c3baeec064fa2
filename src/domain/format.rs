//! Format tag. Selects which loader variant reads the data files.

use crate::domain::DomainError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Xml,
}

impl DataFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            DataFormat::Json => "json",
            DataFormat::Xml => "xml",
        }
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataFormat {
    type Err = DomainError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let t = tag.trim();
        if t.eq_ignore_ascii_case("json") {
            Ok(DataFormat::Json)
        } else if t.eq_ignore_ascii_case("xml") {
            Ok(DataFormat::Xml)
        } else {
            Err(DomainError::UnsupportedFormat(tag.to_string()))
        }
    }
}
