//! Minimal CSV reading and writing
//!
//! Capture exports are plain comma-separated hex fields, so only a small
//! subset of CSV is needed: double-quoted fields with `""` escapes are
//! accepted on input, and quoting is applied on output where the decoded
//! descriptions contain commas. An empty line parses as a row with zero
//! fields, which the pairing logic treats as a skip marker.

/// Parse CSV text into rows of fields
pub fn parse(text: &str) -> Vec<Vec<String>> {
    text.lines().map(parse_line).collect()
}

fn parse_line(line: &str) -> Vec<String> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.is_empty() {
        return Vec::new();
    }

    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.is_empty() => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            c => field.push(c),
        }
    }
    fields.push(field);
    fields
}

/// Serialize rows to CSV text, one `\n`-terminated line per row
pub fn to_string(rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    for row in rows {
        let line: Vec<String> = row.iter().map(|f| escape(f)).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    out
}

/// Quote a field when it contains a delimiter, quote, or line break
fn escape(field: &str) -> String {
    let needs_quoting = field
        .chars()
        .any(|c| matches!(c, '"' | ',' | '\n' | '\r'));
    if needs_quoting {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_rows() {
        let rows = parse("03,00,00,10\n00,00,00,00,41\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["03", "00", "00", "10"]);
        assert_eq!(rows[1], vec!["00", "00", "00", "00", "41"]);
    }

    #[test]
    fn test_parse_empty_line_is_zero_fields() {
        let rows = parse("03,00\n\n04\n");
        assert_eq!(rows.len(), 3);
        assert!(rows[1].is_empty());
    }

    #[test]
    fn test_parse_crlf_line_endings() {
        let rows = parse("03,00\r\n04\r\n");
        assert_eq!(rows, vec![vec!["03", "00"], vec!["04"]]);
    }

    #[test]
    fn test_parse_quoted_fields() {
        let rows = parse("\"Data read: 0x41,0x42\",03,00\n");
        assert_eq!(rows[0], vec!["Data read: 0x41,0x42", "03", "00"]);

        let rows = parse("\"say \"\"hi\"\"\",41\n");
        assert_eq!(rows[0], vec!["say \"hi\"", "41"]);
    }

    #[test]
    fn test_write_quotes_commas() {
        let rows = vec![vec![
            "Data read: 0x41,0x42 (ASCII: AB)".to_string(),
            "00".to_string(),
        ]];
        assert_eq!(
            to_string(&rows),
            "\"Data read: 0x41,0x42 (ASCII: AB)\",00\n"
        );
    }

    #[test]
    fn test_write_parse_round_trip() {
        let rows = vec![
            vec!["plain".to_string(), "with,comma".to_string()],
            vec!["with \"quote\"".to_string()],
        ];
        assert_eq!(parse(&to_string(&rows)), rows);
    }
}
