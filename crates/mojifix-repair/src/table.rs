use serde::Deserialize;

use crate::error::ConfigError;

/// Known corrupted substrings observed in Portuguese workbooks, in the order
/// they are substituted.
#[rustfmt::skip]
const PORTUGUESE: &[(&str, &str)] = &[
    ("p\u{221A}\u{2260}lula", "pílula"),
    ("\u{221A}©", "é"),
    ("Ãª", "ê"),
    ("\u{221A}¢", "â"),
    ("\u{221A}§", "ç"),
    ("\u{221A}°", "á"),
    ("\u{221A}º", "ú"),
    ("\u{221A}£", "ã"),
    ("\u{221A}´", "ô"),
    ("\u{221A}±", "ñ"),
    ("\u{221A}\u{2265}", "ó"),
    ("\u{221A}ß", "ç"),
    ("\u{221A}µ", "õ"),
    ("Ã³", "ó"),
    ("viol\u{221A}\u{2122}ncia", "violência"),
    ("Ap\u{221A}\u{2260}lula", "Apílula"),
];

/// One literal substitution.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Replacement {
    pub from: String,
    pub to: String,
}

impl Replacement {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Result<Self, ConfigError> {
        let (from, to) = (from.into(), to.into());
        if from.is_empty() {
            return Err(ConfigError::EmptyPattern(to));
        }
        Ok(Self { from, to })
    }
}

/// Ordered list of corrupted substrings and their corrections.
///
/// Entries are applied one after another over the whole text; an entry sees
/// the output of every entry before it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CorruptionTable {
    entries: Vec<Replacement>,
}

impl CorruptionTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in European Portuguese table.
    pub fn portuguese() -> Self {
        Self {
            entries: PORTUGUESE
                .iter()
                .map(|(from, to)| Replacement {
                    from: (*from).to_string(),
                    to: (*to).to_string(),
                })
                .collect(),
        }
    }

    /// Append entries after the existing ones.
    pub fn extend<I>(&mut self, extra: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = Replacement>,
    {
        for entry in extra {
            let entry = Replacement::new(entry.from, entry.to)?;
            self.entries.push(entry);
        }
        Ok(())
    }

    pub fn entries(&self) -> &[Replacement] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn apply(&self, text: &str) -> String {
        let mut out = text.to_string();
        for entry in &self.entries {
            if out.contains(entry.from.as_str()) {
                out = out.replace(entry.from.as_str(), &entry.to);
            }
        }
        out
    }
}
