use std::path::PathBuf;

/// Stage labels in output order, one per table column. They name the phases
/// of the pgrep benchmark whose timing logs this tool post-processes.
pub const STAGE_LABELS: [&str; 5] = [
    "Line split",
    "Line cat",
    "Search filter",
    "Search cat",
    "Total",
];

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MismatchPolicy {
    /// Pair columns with labels up to the shorter of the two and warn.
    Truncate,
    /// Reject tables whose column count differs from the label count.
    Strict,
}

pub struct RunConfig {
    pub table: PathBuf,
    pub include_mean: bool,
    pub mismatch: MismatchPolicy,
}
