use crate::core::summary::StageSummary;
use std::io::Write;

/// One stage per line: `min q1 median q3 max "Name"`, followed by the mean
/// when it was computed. Numbers use the default f64 representation; the
/// stage name is wrapped in literal double quotes.
pub fn write_line(w: &mut dyn Write, stage: &StageSummary) -> std::io::Result<()> {
    write!(
        w,
        "{} {} {} {} {} \"{}\"",
        stage.min, stage.q1, stage.median, stage.q3, stage.max, stage.name
    )?;
    if let Some(mean) = stage.mean {
        write!(w, " {mean}")?;
    }
    writeln!(w)
}
