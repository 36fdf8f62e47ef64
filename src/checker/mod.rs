mod heuristics;
mod result;
mod rule;

pub use heuristics::{
    Line, has_tab, has_unmatched_quotes, is_exempt, missing_space_after_colon, trim_line,
};
pub use result::{Diagnostic, Verdict};
pub use rule::Rule;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
