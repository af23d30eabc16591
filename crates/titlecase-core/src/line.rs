use std::io::{self, BufRead};

/// Reads every line of `reader`, stripping `\n` and a preceding `\r`.
/// Invalid UTF-8 sequences decode to U+FFFD.
pub fn read_lines<R: BufRead>(reader: &mut R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut buffer = Vec::new();

    loop {
        buffer.clear();
        let bytes_read = reader.read_until(b'\n', &mut buffer)?;
        if bytes_read == 0 {
            break;
        }

        if buffer.ends_with(b"\n") {
            buffer.pop();

            if buffer.ends_with(b"\r") {
                buffer.pop();
            }
        }

        let line = match String::from_utf8(std::mem::take(&mut buffer)) {
            Ok(line) => line,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        };
        lines.push(line);
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn splits_on_newlines() {
        let mut reader = Cursor::new("foo bar\nbaz");
        assert_eq!(read_lines(&mut reader).unwrap(), vec!["foo bar", "baz"]);
    }

    #[test]
    fn trailing_newline_adds_no_line() {
        let mut reader = Cursor::new("one\ntwo\n");
        assert_eq!(read_lines(&mut reader).unwrap(), vec!["one", "two"]);

        let mut reader = Cursor::new("one\n\n");
        assert_eq!(read_lines(&mut reader).unwrap(), vec!["one", ""]);
    }

    #[test]
    fn strips_carriage_returns() {
        let mut reader = Cursor::new("one\r\ntwo\r\n");
        assert_eq!(read_lines(&mut reader).unwrap(), vec!["one", "two"]);
    }

    #[test]
    fn empty_input_has_no_lines() {
        let mut reader = Cursor::new("");
        assert!(read_lines(&mut reader).unwrap().is_empty());
    }

    #[test]
    fn invalid_utf8_becomes_replacement_char() {
        let mut reader = Cursor::new(b"ok\ncaf\xe9 x\n".to_vec());
        assert_eq!(
            read_lines(&mut reader).unwrap(),
            vec!["ok", "caf\u{FFFD} x"]
        );
    }

    #[test]
    fn read_failures_propagate() {
        struct Failing;

        impl io::Read for Failing {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "device gone"))
            }
        }

        let mut reader = io::BufReader::new(Failing);
        let err = read_lines(&mut reader).unwrap_err();
        assert_eq!(err.to_string(), "device gone");
    }
}
