//! Renders a ranking for display: a horizontal text bar chart or JSON.

use crate::error::Result;
use crate::pipeline::WordFrequencies;

pub const WORD_AXIS: &str = "Words";
pub const COUNT_AXIS: &str = "Frequency";

pub fn title(top_n: usize) -> String {
    format!("Top {top_n} most frequent words")
}

/// Bar length for `count` when `max` fills `width` cells.
///
/// Rounds up so every non-zero count stays visible.
fn bar_len(count: u64, max: u64, width: usize) -> usize {
    if max == 0 || count == 0 {
        return 0;
    }
    let scaled = (count as u128 * width as u128).div_ceil(max as u128);
    scaled as usize
}

/// Draws the ranking as rows of `word | bar count`, largest first.
pub fn render_text(report: &WordFrequencies, width: usize) -> Result<String> {
    let words = report.ensure_data()?;
    let label_width = words
        .iter()
        .map(|w| w.word.chars().count())
        .chain([WORD_AXIS.len()])
        .max()
        .unwrap_or(0);
    // ranking is descending, so the first row holds the maximum
    let max = words[0].count;

    let mut out = format!(
        "{}\n\n{:<label_width$} | {}\n{}-+-{}\n",
        title(report.top_n),
        WORD_AXIS,
        COUNT_AXIS,
        "-".repeat(label_width),
        "-".repeat(width.max(COUNT_AXIS.len())),
    );
    for row in words {
        out.push_str(&format!(
            "{:<label_width$} | {} {}\n",
            row.word,
            "#".repeat(bar_len(row.count, max, width)),
            row.count
        ));
    }
    Ok(out)
}

/// Serializes the whole report, totals included.
pub fn render_json(report: &WordFrequencies) -> Result<String> {
    report.ensure_data()?;
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::word_types::RankedWord;
    use pretty_assertions::assert_eq;

    fn report(words: Vec<RankedWord>) -> WordFrequencies {
        WordFrequencies {
            top_n: 3,
            total_words: words.iter().map(|w| w.count).sum(),
            distinct_words: words.len(),
            words,
        }
    }

    #[test]
    fn scales_bars_to_width() {
        assert_eq!(bar_len(10, 10, 20), 20);
        assert_eq!(bar_len(5, 10, 20), 10);
        assert_eq!(bar_len(1, 1000, 20), 1);
        assert_eq!(bar_len(0, 10, 20), 0);
        assert_eq!(bar_len(u64::MAX, u64::MAX, 50), 50);
    }

    #[test]
    fn renders_text_chart() {
        let chart = render_text(
            &report(vec![
                RankedWord::new("the", 4),
                RankedWord::new("cat", 2),
                RankedWord::new("a", 1),
            ]),
            8,
        )
        .unwrap();
        let expected = "\
Top 3 most frequent words

Words | Frequency
------+----------
the   | ######## 4
cat   | #### 2
a     | ## 1
";
        assert_eq!(chart, expected);
    }

    #[test]
    fn renders_json_report() {
        let json = render_json(&report(vec![RankedWord::new("word", 2)])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["words"][0]["word"], "word");
        assert_eq!(value["words"][0]["count"], 2);
        assert_eq!(value["total_words"], 2);
    }

    #[test]
    fn refuses_empty_ranking() {
        let empty = report(Vec::new());
        assert!(matches!(render_text(&empty, 10), Err(Error::NoData)));
        assert!(matches!(render_json(&empty), Err(Error::NoData)));
    }
}
