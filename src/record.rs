//! Turning caller arguments into one line of text.

use crate::constants::ARG_SEPARATOR;
use std::fmt::{self, Write};

/// Join the textual form of each argument with a single space.
///
/// No separator is added before the first or after the last argument; an empty
/// slice yields an empty string.
pub fn join_args(args: &[&dyn fmt::Display]) -> String {
    let mut line = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            line.push_str(ARG_SEPARATOR);
        }
        // Only a Display impl can fail here; whatever it wrote before failing is kept.
        let _ = write!(line, "{}", arg);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_mixed_values() {
        assert_eq!(
            join_args(&[&"disk", &"at", &90, &"percent"]),
            "disk at 90 percent"
        );
    }

    #[test]
    fn test_join_number_after_text() {
        let error_code: i64 = -17;
        assert_eq!(join_args(&[&"fatal:", &error_code]), "fatal: -17");
    }

    struct HalfWritten;

    impl fmt::Display for HalfWritten {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("half")?;
            Err(fmt::Error)
        }
    }

    #[test]
    fn test_failing_display_keeps_partial_output() {
        assert_eq!(join_args(&[&"a", &HalfWritten, &"b"]), "a half b");
    }

    #[test]
    fn test_join_edge_cases() {
        assert_eq!(join_args(&[]), "");
        assert_eq!(join_args(&[&"alone"]), "alone");
        // Empty strings still count as arguments.
        assert_eq!(join_args(&[&"", &"x"]), " x");
        assert_eq!(join_args(&[&1.5f32, &'c', &true]), "1.5 c true");
    }
}
