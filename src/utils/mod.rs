pub mod code_block_utils;
pub mod fix_utils;
pub mod front_matter_utils;
pub mod ignore_regions;
pub mod range_utils;
pub mod regex_cache;

pub use code_block_utils::CodeBlockUtils;
pub use fix_utils::{Edit, apply_edits};
pub use front_matter_utils::FrontMatterUtils;
pub use ignore_regions::{IgnoreType, MaskedRanges, masked_ranges};
pub use range_utils::{LineSpan, line_spans};

/// Trait for string-related extensions
pub trait StrExt {
    /// Count the number of trailing spaces and tabs in the string
    fn trailing_whitespace_len(&self) -> usize;

    /// Count the trailing spaces only; a tab ends the count
    fn trailing_spaces(&self) -> usize;
}

impl StrExt for str {
    fn trailing_whitespace_len(&self) -> usize {
        self.len() - self.trim_end_matches([' ', '\t']).len()
    }

    fn trailing_spaces(&self) -> usize {
        self.len() - self.trim_end_matches(' ').len()
    }
}
