use crate::core::error::Error;

#[derive(Debug)]
pub struct StageSummary {
    pub name: &'static str,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub mean: Option<f64>,
}

/// Percentile by linear interpolation: for rank p over n sorted samples the
/// target index is p/100 * (n-1); a fractional index interpolates between
/// the two neighbouring samples. Callers guarantee a non-empty slice.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    let pos = p / 100.0 * (sorted.len() - 1) as f64;
    let base = pos.floor() as usize;
    let rest = pos - base as f64;
    if base + 1 < sorted.len() {
        sorted[base] + rest * (sorted[base + 1] - sorted[base])
    } else {
        sorted[base]
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn summarize(
    name: &'static str,
    samples: &[f64],
    include_mean: bool,
) -> Result<StageSummary, Error> {
    if samples.is_empty() {
        return Err(Error::EmptyColumn {
            name: name.to_string(),
        });
    }
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(StageSummary {
        name,
        min: percentile(&sorted, 0.0),
        q1: percentile(&sorted, 25.0),
        median: percentile(&sorted, 50.0),
        q3: percentile(&sorted, 75.0),
        max: percentile(&sorted, 100.0),
        mean: if include_mean {
            Some(mean(samples))
        } else {
            None
        },
    })
}
