use crate::error::ReportError;
use crate::types::PodSample;

/// Parse a CPU token as printed by `oc adm top`, e.g. `125m`.
///
/// The command always reports whole millicores with an `m` suffix; anything
/// else is rejected.
pub fn parse_cpu_millicores(token: &str) -> Option<u64> {
    token.strip_suffix('m')?.parse::<u64>().ok()
}

/// Parse a memory token as printed by `oc adm top`, e.g. `340Mi`.
pub fn parse_memory_mebibytes(token: &str) -> Option<u64> {
    token.strip_suffix("Mi")?.parse::<u64>().ok()
}

/// Split one data line into its namespace and pod sample.
///
/// `line_number` is 1-based within `source` and only used for error context.
pub fn parse_usage_line(
    source: &str,
    line_number: usize,
    line: &str,
) -> Result<(String, PodSample), ReportError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let (namespace, pod, cpu_token, memory_token) = match fields.as_slice() {
        [namespace, pod, cpu, memory] => (*namespace, *pod, *cpu, *memory),
        _ => {
            return Err(ReportError::MalformedLine {
                source_name: source.to_string(),
                line: line_number,
                fields: fields.len(),
            })
        }
    };

    let cpu_millicores =
        parse_cpu_millicores(cpu_token).ok_or_else(|| ReportError::UnitParse {
            source_name: source.to_string(),
            line: line_number,
            token: cpu_token.to_string(),
            unit: "m",
        })?;
    let memory_mebibytes =
        parse_memory_mebibytes(memory_token).ok_or_else(|| ReportError::UnitParse {
            source_name: source.to_string(),
            line: line_number,
            token: memory_token.to_string(),
            unit: "Mi",
        })?;

    Ok((
        namespace.to_string(),
        PodSample {
            pod: pod.to_string(),
            cpu_millicores,
            memory_mebibytes,
        },
    ))
}
