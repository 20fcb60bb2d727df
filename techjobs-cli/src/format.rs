use techjobs_core::Record;

const MAX_COL_WIDTH: usize = 40;

/// Print records as a formatted table to stdout, numbering them from 1.
pub fn print_table(headers: &[String], records: &[&Record]) {
    if headers.is_empty() {
        return;
    }

    let label_width = format_number(records.len()).len().max(1);

    // Compute column widths from headers and data
    let mut col_widths: Vec<usize> = headers.iter().map(|h| display_len(h)).collect();
    for record in records {
        for (i, value) in record.values().iter().enumerate() {
            if let Some(w) = col_widths.get_mut(i) {
                *w = (*w).max(display_len(value));
            }
        }
    }
    for w in col_widths.iter_mut() {
        *w = (*w).min(MAX_COL_WIDTH);
    }

    // Header
    print!(" {:>width$} ", "#", width = label_width);
    for (i, header) in headers.iter().enumerate() {
        print!("{}", if i > 0 { " | " } else { "| " });
        print!("{:<width$}", truncate(header, col_widths[i]), width = col_widths[i]);
    }
    println!();

    // Separator
    print!("-{:-<width$}-", "", width = label_width);
    for (i, w) in col_widths.iter().enumerate() {
        print!("{}", if i > 0 { "-+-" } else { "+-" });
        print!("{:-<width$}", "", width = w);
    }
    println!();

    for (n, record) in records.iter().enumerate() {
        print!(" {:>width$} ", format_number(n + 1), width = label_width);
        for (i, header) in headers.iter().enumerate() {
            print!("{}", if i > 0 { " | " } else { "| " });
            let value = record.get(header).unwrap_or("");
            print!("{:<width$}", truncate(value, col_widths[i]), width = col_widths[i]);
        }
        println!();
    }
}

fn display_len(s: &str) -> usize {
    s.chars().count()
}

/// Truncate to `max_len` characters, appending "..." if truncated.
/// Line breaks inside quoted fields are flattened to spaces.
fn truncate(s: &str, max_len: usize) -> String {
    let flat: String = s
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();

    if display_len(&flat) <= max_len {
        flat
    } else if max_len <= 3 {
        flat.chars().take(max_len).collect()
    } else {
        let mut out: String = flat.chars().take(max_len - 3).collect();
        out.push_str("...");
        out
    }
}

/// Format a number with comma separators (e.g., 1234567 -> "1,234,567").
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_grouping() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_000), "1,000");
        assert_eq!(format_number(1_234_567), "1,234,567");
    }

    #[test]
    fn truncate_long_values() {
        assert_eq!(truncate("Acme Corp", 40), "Acme Corp");
        assert_eq!(truncate("Enterprise Holdings", 10), "Enterpr...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("Zürich Büro", 8), "Züric...");
        assert_eq!(truncate("naïve", 5), "naïve");
    }

    #[test]
    fn truncate_flattens_line_breaks() {
        assert_eq!(truncate("a\nb", 10), "a b");
    }
}
