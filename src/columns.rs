//! # Column Balancer
//!
//! Splits a song into two columns for side-by-side presentation.
//!
//! ## Algorithm
//! 1. Break the text into blocks: maximal runs of non-blank lines. Blank
//!    lines only separate blocks and are dropped.
//! 2. Measure each block in characters, joining newlines included.
//! 3. The naive split is the first block index at which the running length
//!    reaches half of the total.
//! 4. From there, look forward for a block whose first line starts with a
//!    chord annotation `[`. If one exists, the right column starts there, so
//!    the second column opens on a phrase rather than mid-verse.
//!
//! Blocks are never reordered; the result is a prefix and a suffix of the
//! block sequence.

/// A maximal run of non-blank lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'a> {
    pub lines: Vec<&'a str>,
}

impl Block<'_> {
    /// Character count including the newlines joining the lines
    pub fn char_len(&self) -> usize {
        let chars: usize = self.lines.iter().map(|line| line.chars().count()).sum();
        chars + self.lines.len().saturating_sub(1)
    }

    /// True when the first non-blank line opens with a chord annotation
    pub fn is_chord_leading(&self) -> bool {
        self.lines
            .iter()
            .find(|line| !line.trim().is_empty())
            .map_or(false, |line| line.trim_start().starts_with('['))
    }
}

/// Two ordered block lists
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Columns<'a> {
    pub left: Vec<Block<'a>>,
    pub right: Vec<Block<'a>>,
}

impl Columns<'_> {
    /// Index of the first block in the right column
    pub fn split_index(&self) -> usize {
        self.left.len()
    }
}

/// Partition text into blocks separated by blank lines.
pub fn blocks(text: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(Block { lines: std::mem::take(&mut current) });
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(Block { lines: current });
    }

    blocks
}

/// Index where the running length first reaches half of the total
fn naive_split(blocks: &[Block]) -> usize {
    let lengths: Vec<usize> = blocks.iter().map(Block::char_len).collect();
    let total: usize = lengths.iter().sum::<usize>().max(1);

    let mut running = 0;
    for (i, len) in lengths.iter().enumerate() {
        running += len;
        if running * 2 >= total {
            return i + 1;
        }
    }
    0
}

/// Split annotated text into a left and a right column.
///
/// # Example
/// ```
/// use chordsheet::split_columns;
///
/// let columns = split_columns("verse one\n\nverse two\n\n[G]chorus\n\noutro");
/// assert_eq!(columns.left.len(), 2);
/// assert_eq!(columns.right[0].lines, vec!["[G]chorus"]);
/// ```
pub fn split_columns(text: &str) -> Columns<'_> {
    let mut blocks = blocks(text);
    let naive = naive_split(&blocks);

    let mut split = naive;
    if naive > 0 && naive < blocks.len() {
        if let Some(offset) = blocks[naive..].iter().position(Block::is_chord_leading) {
            split = naive + offset;
        }
    }
    tracing::debug!(blocks = blocks.len(), naive, split, "column split");

    let right = blocks.split_off(split);
    Columns { left: blocks, right }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_of(len: usize, lead: char) -> String {
        let mut s = String::new();
        s.push(lead);
        s.push_str(&"x".repeat(len - 1));
        s
    }

    #[test]
    fn test_blocks_drop_blank_lines() {
        let text = "\n\na\nb\n   \n\nc\n\n";
        let blocks = blocks(text);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].lines, vec!["a", "b"]);
        assert_eq!(blocks[1].lines, vec!["c"]);
    }

    #[test]
    fn test_block_length_counts_newlines() {
        let block = Block { lines: vec!["abc", "de"] };
        assert_eq!(block.char_len(), 6);
        let unicode = Block { lines: vec!["héllo ♪"] };
        assert_eq!(unicode.char_len(), 7);
    }

    #[test]
    fn test_empty_text() {
        let columns = split_columns("");
        assert!(columns.left.is_empty());
        assert!(columns.right.is_empty());

        let blank = split_columns("\n  \n\n");
        assert_eq!(blank, Columns::default());
    }

    #[test]
    fn test_single_block_goes_left() {
        let columns = split_columns("[G]only\nverse");
        assert_eq!(columns.left.len(), 1);
        assert!(columns.right.is_empty());
    }

    #[test]
    fn test_even_blocks_split_in_half() {
        let text = (0..4).map(|_| block_of(10, 'a')).collect::<Vec<_>>().join("\n\n");
        let columns = split_columns(&text);
        assert_eq!(columns.split_index(), 2);
        assert_eq!(columns.right.len(), 2);
    }

    #[test]
    fn test_split_moves_to_chord_leading_block() {
        let text = [
            block_of(10, 'a'),
            block_of(10, 'a'),
            block_of(10, 'a'),
            block_of(10, 'a'),
            block_of(10, '['),
            block_of(10, 'a'),
        ]
        .join("\n\n");
        // Total 60, naive split at 3; block 4 is the first chord-led one after it
        let columns = split_columns(&text);
        assert_eq!(columns.split_index(), 4);
        assert!(columns.right[0].is_chord_leading());
    }

    #[test]
    fn test_bias_after_even_split() {
        let text = [
            block_of(10, 'a'),
            block_of(10, 'a'),
            block_of(10, 'a'),
            block_of(10, '['),
        ]
        .join("\n\n");
        let columns = split_columns(&text);
        assert_eq!(columns.split_index(), 3);
        assert_eq!(columns.left.len(), 3);
        assert_eq!(columns.right.len(), 1);
    }

    #[test]
    fn test_no_chord_leading_block_keeps_naive_split() {
        let text = "aaaa\n\nbbbb\n\ncccc\n\ndddd";
        assert_eq!(split_columns(text).split_index(), 2);
    }

    #[test]
    fn test_bias_never_moves_earlier() {
        // Chord-leading block before the naive split is ignored
        let text = "aaaa\n\n[C]bbb\n\ncccc\n\ndddd";
        assert_eq!(split_columns(text).split_index(), 2);
    }

    #[test]
    fn test_chord_leading_ignores_indent() {
        let block = Block { lines: vec!["   [Am]indented"] };
        assert!(block.is_chord_leading());
        let plain = Block { lines: vec!["text [Am]"] };
        assert!(!plain.is_chord_leading());
    }

    #[test]
    fn test_lines_kept_verbatim() {
        let text = "  [G]one  \r\ntwo\r\n\r\nthree";
        let columns = split_columns(text);
        let all: Vec<&str> = columns
            .left
            .iter()
            .chain(columns.right.iter())
            .flat_map(|b| b.lines.iter().copied())
            .collect();
        assert_eq!(all, vec!["  [G]one  \r", "two\r", "three"]);
    }
}
