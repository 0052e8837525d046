use crate::error::Result;
use crate::model::Candidate;
use log::debug;
use std::io::BufRead;

/// Reads one candidate per line. Line terminators (`\n` or `\r\n`) are
/// stripped and a trailing newline does not produce an empty candidate.
pub fn read_lines<R: BufRead>(reader: R) -> Result<Vec<Candidate>> {
    let mut candidates = Vec::new();
    for line in reader.lines() {
        candidates.push(Candidate::line(line?));
    }
    debug!("read {} lines", candidates.len());
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PickError;
    use std::io::Cursor;

    fn texts(candidates: &[Candidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.search_text()).collect()
    }

    #[test]
    fn final_newline_adds_no_empty_candidate() {
        let c = read_lines(Cursor::new("alpha\nbeta\n")).unwrap();
        assert_eq!(texts(&c), vec!["alpha", "beta"]);
    }

    #[test]
    fn missing_final_newline_still_reads_last_line() {
        let c = read_lines(Cursor::new("alpha\nbeta")).unwrap();
        assert_eq!(texts(&c), vec!["alpha", "beta"]);
    }

    #[test]
    fn crlf_is_stripped() {
        let c = read_lines(Cursor::new("alpha\r\nbeta\r\n")).unwrap();
        assert_eq!(texts(&c), vec!["alpha", "beta"]);
    }

    #[test]
    fn blank_lines_in_the_middle_are_kept() {
        let c = read_lines(Cursor::new("a\n\nb\n")).unwrap();
        assert_eq!(texts(&c), vec!["a", "", "b"]);
    }

    #[test]
    fn empty_input_is_not_an_error() {
        assert!(read_lines(Cursor::new("")).unwrap().is_empty());
    }

    #[test]
    fn invalid_utf8_is_reported() {
        let err = read_lines(Cursor::new(vec![0xff, 0xfe, b'\n'])).unwrap_err();
        assert!(matches!(err, PickError::Io(_)));
    }
}
