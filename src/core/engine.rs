use crate::core::error::Error;
use crate::core::io;
use crate::core::model::{MismatchPolicy, RunConfig, STAGE_LABELS};
use crate::core::summary;
use crate::core::table;
use crate::report;
use std::io::Write;

/// Loads the table, transposes it so each column becomes a stage, and
/// writes one summary line per stage to `out` in label order.
pub fn run(cfg: &RunConfig, out: &mut dyn Write) -> Result<(), Error> {
    let bytes = io::read(&cfg.table)?;
    let rows = table::parse(bytes.as_bytes())?;
    let stages = table::transpose(&rows);

    if stages.len() != STAGE_LABELS.len() {
        match cfg.mismatch {
            MismatchPolicy::Strict => {
                return Err(Error::ColumnCount {
                    columns: stages.len(),
                    labels: STAGE_LABELS.len(),
                });
            }
            MismatchPolicy::Truncate => {
                eprintln!(
                    "candlesticks: table has {} columns, {} stage labels; extra entries ignored",
                    stages.len(),
                    STAGE_LABELS.len()
                );
            }
        }
    }

    for (samples, name) in stages.iter().zip(STAGE_LABELS) {
        let stage = summary::summarize(name, samples, cfg.include_mean)?;
        report::text::write_line(out, &stage)?;
    }

    Ok(())
}
