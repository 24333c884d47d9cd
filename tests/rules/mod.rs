mod capitalize_headings_test;
mod consecutive_blank_lines_test;
mod examples_test;
mod idempotence_proptest;
mod options_test;
mod pipeline_test;
mod remove_multiple_spaces_test;
mod remove_trailing_punctuation_test;
mod trailing_spaces_test;
