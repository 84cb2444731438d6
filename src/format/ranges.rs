use crate::parser::patterns::label_suffix;

/// Compress labels into ranges: `["L1","L2","L3","L5"]` → `"L1 - L3, L5"`.
///
/// Labels are taken to be ascending already; they are never re-sorted, a run
/// simply breaks wherever the next key is not exactly one more. Labels
/// without a numeric key go at the end, verbatim.
pub fn compress<S: AsRef<str>>(labels: &[S], separator: &str) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut unknown: Vec<&str> = Vec::new();
    // (first label, last label, last key)
    let mut run: Option<(&str, &str, u32)> = None;

    for label in labels.iter().map(|l| l.as_ref()) {
        let Some(key) = label_suffix(label) else {
            unknown.push(label);
            continue;
        };
        run = match run {
            Some((first, _, prev)) if prev.checked_add(1) == Some(key) => Some((first, label, key)),
            Some(done) => {
                parts.push(render(done.0, done.1));
                Some((label, label, key))
            }
            None => Some((label, label, key)),
        };
    }
    if let Some((first, last, _)) = run {
        parts.push(render(first, last));
    }
    parts.extend(unknown.into_iter().map(str::to_string));
    parts.join(separator)
}

fn render(first: &str, last: &str) -> String {
    if first == last {
        first.to_string()
    } else {
        format!("{} - {}", first, last)
    }
}
