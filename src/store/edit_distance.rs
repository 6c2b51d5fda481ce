#![forbid(unsafe_code)]

//! Levenshtein distance between tag strings
//!
//! Operates on raw bytes with no normalization or case folding. Uses a single
//! rolling row of the classic (len(a)+1) x (len(b)+1) table.

/// Minimum number of single-byte insertions, deletions and substitutions
/// needed to turn `a` into `b`
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a = a.as_bytes();
    let b = b.as_bytes();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // row[j] holds distance(a[..i], b[..j]) for the row being built
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, &a_byte) in a.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;

        for (j, &b_byte) in b.iter().enumerate() {
            let above = row[j + 1];
            let substitution = diagonal + usize::from(a_byte != b_byte);
            let deletion = above + 1;
            let insertion = row[j] + 1;

            row[j + 1] = substitution.min(deletion).min(insertion);
            diagonal = above;
        }
    }

    row[b.len()]
}
