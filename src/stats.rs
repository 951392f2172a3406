//! Corpus summary statistics

use crate::corpus::Corpus;
use std::fmt;

/// Counts reported by the `stats` command
///
/// The `Display` form ends with the tag line. Tags are printed bare and
/// comma-separated (`[CC, NN]`), not quoted (`['CC', 'NN']`), and no blank
/// line follows the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    pub sentences: usize,
    pub tokens: usize,
    pub lexicon: usize,
    pub tagset: Vec<String>,
}

/// Summarise a corpus without touching it
pub fn stats(corpus: &Corpus) -> Stats {
    Stats {
        sentences: corpus.len(),
        tokens: corpus.token_count(),
        lexicon: corpus.indices().vocabulary_size(),
        tagset: corpus.pos_list().into_iter().map(str::to_string).collect(),
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sentence count: {:>12}", group_thousands(self.sentences))?;
        writeln!(f, "Token count   : {:>12}", group_thousands(self.tokens))?;
        writeln!(f, "Lexicon size  : {:>12}", group_thousands(self.lexicon))?;
        writeln!(f, "POS tagset    : [{}]", self.tagset.join(", "))
    }
}

/// `1234567` -> `1,234,567`
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_str;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(10030), "10,030");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_stats_counts() {
        let corpus = parse_str("Aku\tPRP\nmakan\tVB\n\naku\tPRP\ntidur\tVB\n");
        let stats = stats(&corpus);

        assert_eq!(stats.sentences, 2);
        assert_eq!(stats.tokens, 4);
        assert_eq!(stats.lexicon, 3);
        assert_eq!(stats.tagset, vec!["PRP", "VB"]);
    }

    #[test]
    fn test_stats_display() {
        let stats = Stats {
            sentences: 10030,
            tokens: 256622,
            lexicon: 18926,
            tagset: vec!["CC".to_string(), "NN".to_string()],
        };

        assert_eq!(
            stats.to_string(),
            "Sentence count:       10,030\n\
             Token count   :      256,622\n\
             Lexicon size  :       18,926\n\
             POS tagset    : [CC, NN]\n"
        );
    }
}
