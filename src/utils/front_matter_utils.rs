use crate::utils::range_utils::line_spans;
use std::ops::Range;

/// Utility functions for detecting YAML front matter in Markdown documents
pub struct FrontMatterUtils;

impl FrontMatterUtils {
    /// Byte range of the YAML front matter block, delimiters included.
    ///
    /// Front matter must open on the very first line with `---` and close with a later
    /// `---` line. Without a closing delimiter the document has no front matter.
    pub fn front_matter_range(content: &str) -> Option<Range<usize>> {
        let lines = line_spans(content);
        let first = lines.first()?;
        if !Self::is_delimiter(first.text) {
            return None;
        }

        lines
            .iter()
            .skip(1)
            .find(|line| Self::is_delimiter(line.text))
            .map(|closing| 0..closing.start + closing.text.len())
    }

    fn is_delimiter(line: &str) -> bool {
        line.trim_end() == "---"
    }
}
