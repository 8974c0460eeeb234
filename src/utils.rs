/// Joins the lines of `source` into the single line the parser expects.
///
/// Every line is trimmed and blank lines are dropped. Lines are joined with one space
/// so that words on adjacent lines stay apart.
pub fn flatten_lines(source: &str) -> String {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
