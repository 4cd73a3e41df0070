use crate::error::ReportError;
use crate::types::{MetricKind, Snapshot};

/// Namespace-keyed value lists, in first-encounter order.
///
/// The same namespace seen in several snapshots shares one entry; its values
/// accumulate in ingestion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueSeries {
    entries: Vec<(String, Vec<u64>)>,
}

impl ValueSeries {
    pub fn get(&self, namespace: &str) -> Option<&[u64]> {
        self.entries
            .iter()
            .find(|(ns, _)| ns == namespace)
            .map(|(_, values)| values.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u64])> {
        self.entries
            .iter()
            .map(|(ns, values)| (ns.as_str(), values.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn values_mut(&mut self, namespace: &str) -> &mut Vec<u64> {
        let pos = match self.entries.iter().position(|(ns, _)| ns == namespace) {
            Some(pos) => pos,
            None => {
                self.entries.push((namespace.to_string(), Vec::new()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[pos].1
    }
}

impl FromIterator<(String, Vec<u64>)> for ValueSeries {
    fn from_iter<I: IntoIterator<Item = (String, Vec<u64>)>>(iter: I) -> Self {
        let mut series = Self::default();
        for (namespace, values) in iter {
            series.values_mut(&namespace).extend(values);
        }
        series
    }
}

/// Flatten every pod's metric across every snapshot into one list per
/// namespace. The list length answers "how many pod observations were made
/// for this namespace over the whole run".
pub fn pod_values(snapshots: &[Snapshot], metric: MetricKind) -> ValueSeries {
    let mut series = ValueSeries::default();
    for snapshot in snapshots {
        for (namespace, pods) in snapshot.namespaces() {
            series
                .values_mut(namespace)
                .extend(pods.iter().map(|pod| metric.of(pod)));
        }
    }
    series
}

/// One summed value per snapshot per namespace.
///
/// Unlike [`pod_values`] the list length equals the number of snapshots the
/// namespace appeared in, answering "how did this namespace's total evolve
/// across captures".
pub fn namespace_sums(snapshots: &[Snapshot], metric: MetricKind) -> ValueSeries {
    let mut series = ValueSeries::default();
    for snapshot in snapshots {
        for (namespace, pods) in snapshot.namespaces() {
            series
                .values_mut(namespace)
                .push(pods.iter().map(|pod| metric.of(pod)).sum());
        }
    }
    series
}

/// Smallest value per namespace.
pub fn minimum(series: &ValueSeries) -> Result<Vec<(String, u64)>, ReportError> {
    extremum(series, |values| values.iter().copied().min())
}

/// Largest value per namespace.
pub fn maximum(series: &ValueSeries) -> Result<Vec<(String, u64)>, ReportError> {
    extremum(series, |values| values.iter().copied().max())
}

fn extremum<F>(series: &ValueSeries, pick: F) -> Result<Vec<(String, u64)>, ReportError>
where
    F: Fn(&[u64]) -> Option<u64>,
{
    let mut result = Vec::with_capacity(series.len());
    for (namespace, values) in series.iter() {
        // An empty list must fail loudly rather than pass as zero
        let value = pick(values).ok_or_else(|| ReportError::EmptySeries {
            namespace: namespace.to_string(),
        })?;
        result.push((namespace.to_string(), value));
    }
    Ok(result)
}

/// Mean of the largest `round(threshold * len)` values per namespace.
///
/// Rounding is half-up, applied uniformly. `threshold` must lie within
/// `(0, 1]` and must select at least one value for every namespace; a
/// threshold of 1 covers every value and reduces to the arithmetic mean.
pub fn weighted_average(
    series: &ValueSeries,
    threshold: f64,
) -> Result<Vec<(String, f64)>, ReportError> {
    if !(threshold > 0.0 && threshold <= 1.0) {
        return Err(ReportError::InvalidThreshold { threshold });
    }

    let mut averages = Vec::with_capacity(series.len());
    for (namespace, values) in series.iter() {
        let k = top_slice_len(threshold, values.len());
        if k == 0 {
            return Err(ReportError::InvalidThreshold { threshold });
        }
        let mut sorted = values.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        let total: u64 = sorted[..k].iter().sum();
        averages.push((namespace.to_string(), total as f64 / k as f64));
    }
    Ok(averages)
}

/// Round-half-up count of values covered by `threshold`.
fn top_slice_len(threshold: f64, len: usize) -> usize {
    (threshold * len as f64 + 0.5).floor() as usize
}
