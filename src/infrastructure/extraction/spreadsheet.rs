//! Spreadsheet extraction (xlsx, xls and the other formats calamine detects)

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};

use crate::domain::DomainError;

/// Every row of every sheet, cells joined by a single space
pub fn extract_spreadsheet(bytes: &[u8]) -> Result<String, DomainError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec())).map_err(|e| {
        DomainError::extraction("spreadsheet", format!("failed to open workbook: {}", e))
    })?;

    let mut lines = Vec::new();

    for sheet in workbook.sheet_names() {
        let range = workbook.worksheet_range(&sheet).map_err(|e| {
            DomainError::extraction(
                "spreadsheet",
                format!("failed to read sheet '{}': {}", sheet, e),
            )
        })?;

        let before = lines.len();
        lines.extend(sheet_lines(&range));
        tracing::debug!(sheet = %sheet, rows = lines.len() - before, "Sheet extracted");
    }

    Ok(lines.join("\n"))
}

/// Rows of a sheet positioned from A1.
///
/// calamine ranges begin at the first used cell, so leading empty rows and
/// columns are padded back in as empty cells.
fn sheet_lines(range: &Range<Data>) -> Vec<String> {
    let (Some((first_row, first_col)), Some((_, last_col))) = (range.start(), range.end())
    else {
        return Vec::new();
    };

    let width = last_col as usize + 1;
    let leading = vec![String::new(); first_col as usize];

    let mut lines = vec![vec![""; width].join(" "); first_row as usize];
    lines.extend(range.rows().map(|row| format_row(&leading, row)));
    lines
}

fn format_row(leading: &[String], row: &[Data]) -> String {
    leading
        .iter()
        .cloned()
        .chain(row.iter().map(|cell| cell.to_string()))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;

    #[test]
    fn test_single_sheet_rows() {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "a").unwrap();
        sheet.write_number(0, 1, 1).unwrap();
        sheet.write_string(1, 0, "b").unwrap();
        sheet.write_number(1, 1, 2).unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        assert_eq!(extract_spreadsheet(&bytes).unwrap(), "a 1\nb 2");
    }

    #[test]
    fn test_sheets_in_workbook_order() {
        let mut workbook = Workbook::new();
        let first = workbook.add_worksheet().set_name("Receitas").unwrap();
        first.write_string(0, 0, "janeiro").unwrap();
        first.write_number(0, 1, 10.5).unwrap();
        let second = workbook.add_worksheet().set_name("Despesas").unwrap();
        second.write_string(0, 0, "fevereiro").unwrap();
        second.write_number(0, 1, 3).unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        assert_eq!(
            extract_spreadsheet(&bytes).unwrap(),
            "janeiro 10.5\nfevereiro 3"
        );
    }

    #[test]
    fn test_empty_cells_keep_their_position() {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "x").unwrap();
        sheet.write_string(0, 2, "z").unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        assert_eq!(extract_spreadsheet(&bytes).unwrap(), "x  z");
    }

    #[test]
    fn test_positions_are_absolute_from_a1() {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(1, 1, "a").unwrap();
        sheet.write_number(1, 2, 1).unwrap();
        sheet.write_string(2, 1, "b").unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        assert_eq!(extract_spreadsheet(&bytes).unwrap(), "  \n a 1\n b ");
    }

    #[test]
    fn test_empty_sheet_has_no_rows() {
        let mut workbook = Workbook::new();
        workbook.add_worksheet().set_name("Vazia").unwrap();
        let data = workbook.add_worksheet();
        data.write_string(0, 0, "x").unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        assert_eq!(extract_spreadsheet(&bytes).unwrap(), "x");
    }

    #[test]
    fn test_corrupt_workbook() {
        assert!(extract_spreadsheet(b"definitely not a workbook").is_err());
    }
}
