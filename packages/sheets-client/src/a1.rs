//! A1 notation helpers.

/// 1-based column index to letters: 1 → "A", 26 → "Z", 27 → "AA".
pub fn column_letter(mut col: u32) -> String {
    let mut letters = Vec::new();
    while col > 0 {
        let rem = (col - 1) % 26;
        letters.push(b'A' + rem as u8);
        col = (col - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

/// Quote a sheet title for use in a range, doubling embedded quotes.
pub fn quote_sheet(title: &str) -> String {
    format!("'{}'", title.replace('\'', "''"))
}

/// Whole-column range, e.g. `'Sheet1'!B:B`.
pub fn column_range(title: &str, col: u32) -> String {
    let letter = column_letter(col);
    format!("{}!{}:{}", quote_sheet(title), letter, letter)
}

/// Whole-row range, e.g. `'Sheet1'!1:1`.
pub fn row_range(title: &str, row: u32) -> String {
    format!("{}!{}:{}", quote_sheet(title), row, row)
}

/// Single cell range, e.g. `'Sheet1'!C7`.
pub fn cell_range(title: &str, row: u32, col: u32) -> String {
    format!("{}!{}{}", quote_sheet(title), column_letter(col), row)
}

/// Row number of the last cell in a range such as `Sheet1!A7:A7` or `'News'!B12`.
pub fn last_row(range: &str) -> Option<u32> {
    let cells = range.rsplit('!').next()?;
    let last_cell = cells.rsplit(':').next()?;
    let digits: String = last_cell.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_letter() {
        assert_eq!(column_letter(1), "A");
        assert_eq!(column_letter(2), "B");
        assert_eq!(column_letter(26), "Z");
        assert_eq!(column_letter(27), "AA");
        assert_eq!(column_letter(52), "AZ");
        assert_eq!(column_letter(703), "AAA");
    }

    #[test]
    fn test_ranges() {
        assert_eq!(column_range("Sheet1", 2), "'Sheet1'!B:B");
        assert_eq!(row_range("Sheet1", 1), "'Sheet1'!1:1");
        assert_eq!(cell_range("News Media Links", 7, 3), "'News Media Links'!C7");
        assert_eq!(quote_sheet("Bob's"), "'Bob''s'");
    }

    #[test]
    fn test_last_row() {
        assert_eq!(last_row("Sheet1!A7:A7"), Some(7));
        assert_eq!(last_row("'News Media Links'!B12"), Some(12));
        assert_eq!(last_row("Sheet1!A5:C9"), Some(9));
        assert_eq!(last_row("Sheet1!A:A"), None);
    }
}
