/// Split a comma-separated list, trimming each entry.
/// Empty entries and repeats are dropped; the first occurrence keeps its position.
pub fn split_csv(raw: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for part in raw.split(',') {
        let t = part.trim();
        if t.is_empty() || out.iter().any(|existing| existing == t) {
            continue;
        }
        out.push(t.to_string());
    }
    out
}
