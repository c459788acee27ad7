use std::collections::BTreeMap;

use itertools::Itertools;

use crate::charsets::{charset_name, classify, CHARSET_COUNT};

/// Occurrence statistics for one charset within one analysis pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharsetStats {
    /// How many characters of the charset the text contained.
    pub total: usize,
    /// Occurrences per distinct character, in codepoint order.
    pub frequencies: BTreeMap<char, usize>,
}

impl CharsetStats {
    /// Number of distinct characters seen.
    #[inline]
    pub fn distinct(&self) -> usize {
        self.frequencies.len()
    }
}

/// Per-charset statistics over a whole text: one entry per charset id,
/// including charsets the text never touched.
pub struct CharsetReport {
    stats: [CharsetStats; CHARSET_COUNT],
}

/// Classifies every scalar value of `text` and tallies it under its charset.
pub fn analyze(text: &str) -> CharsetReport {
    let mut stats: [CharsetStats; CHARSET_COUNT] = std::array::from_fn(|_| CharsetStats::default());
    for c in text.chars() {
        let slot = &mut stats[usize::from(classify(c))];
        slot.total += 1;
        *slot.frequencies.entry(c).or_insert(0) += 1;
    }
    CharsetReport { stats }
}

impl CharsetReport {
    /// The tallies, indexed by charset id.
    #[inline]
    pub fn stats(&self) -> &[CharsetStats; CHARSET_COUNT] {
        &self.stats
    }

    /// Total number of scalar values tallied; equals the `char` count of the
    /// analyzed text.
    pub fn scalar_values(&self) -> usize {
        self.stats.iter().map(|s| s.total).sum()
    }

    /// Formats the report, one row per charset id in ascending order. With
    /// `detail`, every row gets a second line listing each distinct character
    /// and its count, characters escaped the way `char`'s `Debug` does it so
    /// controls stay visible.
    pub fn render(&self, detail: bool) -> String {
        let mut out = String::new();
        for (id, stats) in self.stats.iter().enumerate() {
            out.push_str(&format!(
                "[{id:2}] {name:<32} total:{total:8}  distinct:[{distinct:6}]\n",
                name = charset_name(id as u8),
                total = stats.total,
                distinct = stats.distinct(),
            ));
            if detail {
                let entries = stats
                    .frequencies
                    .iter()
                    .map(|(c, n)| format!("{c:?}: {n}"))
                    .join(", ");
                out.push_str(&format!("    detail: {{{entries}}}\n"));
            }
        }
        out
    }
}
