//! Key glob matching
//!
//! Shell-style wildcard matching used by the MATCH option: `*` matches any
//! sequence of bytes (including none), `?` matches exactly one byte, and
//! every other byte matches itself. Matching is byte-wise, which is also how
//! keys are sorted.

/// Returns true if `text` satisfies the glob `pattern`.
///
/// An empty pattern matches only the empty string.
pub fn matches(text: &str, pattern: &str) -> bool {
    let t = text.as_bytes();
    let p = pattern.as_bytes();

    let mut ti = 0;
    let mut pi = 0;
    // Position of the most recent `*` and the text index it was tried at;
    // on a mismatch we rewind here and let the star absorb one more byte.
    let mut star: Option<usize> = None;
    let mut mark = 0;

    while ti < t.len() {
        if pi < p.len() && (p[pi] == b'?' || p[pi] == t[ti]) {
            ti += 1;
            pi += 1;
        } else if pi < p.len() && p[pi] == b'*' {
            star = Some(pi);
            mark = ti;
            pi += 1;
        } else if let Some(s) = star {
            pi = s + 1;
            mark += 1;
            ti = mark;
        } else {
            return false;
        }
    }

    while pi < p.len() && p[pi] == b'*' {
        pi += 1;
    }
    pi == p.len()
}
