//! FILENAME: core/exporter/src/xlsx.rs

use report_engine::{PivotCell, PivotMatrix};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook};

use crate::ExportError;

const SHEET_NAME: &str = "Pick List";

/// Header fill and total-row fill, two distinct shades.
const HEADER_FILL: Color = Color::RGB(0xD9E1F2);
const TOTAL_FILL: Color = Color::RGB(0xE2EFDA);

/// Excel character widths: wide product column, narrow value columns.
const PRODUCT_COL_WIDTH: f64 = 30.0;
const VALUE_COL_WIDTH: f64 = 14.0;

/// Renders the pivot matrix into XLSX bytes.
///
/// Row 0 holds "Product Name", one column per carrier and a final
/// "Grand Total" column; each product row follows; the "Total" row closes
/// the sheet. Every row spans 1 + |carriers| + 1 columns, including the
/// carrier-less case where only the product and grand-total columns remain.
pub fn write_picklist(matrix: &PivotMatrix) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header_format = Format::new()
        .set_bold()
        .set_background_color(HEADER_FILL)
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center);
    let total_format = Format::new()
        .set_bold()
        .set_background_color(TOTAL_FILL)
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center);
    let total_label_format = Format::new()
        .set_bold()
        .set_background_color(TOTAL_FILL)
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Left);
    let value_format = Format::new()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center);
    let product_format = Format::new()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Left);

    let grand_total_col = (matrix.carriers.len() + 1) as u16;

    worksheet.set_column_width(0, PRODUCT_COL_WIDTH)?;
    for col in 1..=grand_total_col {
        worksheet.set_column_width(col, VALUE_COL_WIDTH)?;
    }

    // Header row
    worksheet.write_string_with_format(0, 0, "Product Name", &header_format)?;
    for (col, carrier) in matrix.carriers.iter().enumerate() {
        worksheet.write_string_with_format(0, (col + 1) as u16, carrier, &header_format)?;
    }
    worksheet.write_string_with_format(0, grand_total_col, "Grand Total", &header_format)?;

    // Product rows
    let mut row_idx: u32 = 1;
    for row in &matrix.rows {
        worksheet.write_string_with_format(row_idx, 0, &row.product, &product_format)?;
        for (col, cell) in row.cells.iter().enumerate() {
            match cell {
                PivotCell::Value(v) => {
                    worksheet.write_number_with_format(row_idx, (col + 1) as u16, *v, &value_format)?;
                }
                PivotCell::Blank => {
                    worksheet.write_blank(row_idx, (col + 1) as u16, &value_format)?;
                }
            }
        }
        worksheet.write_number_with_format(row_idx, grand_total_col, row.total, &value_format)?;
        row_idx += 1;
    }

    // Total row - numeric in every column, even at zero.
    worksheet.write_string_with_format(row_idx, 0, "Total", &total_label_format)?;
    for (col, total) in matrix.column_totals.iter().enumerate() {
        worksheet.write_number_with_format(row_idx, (col + 1) as u16, *total, &total_format)?;
    }
    worksheet.write_number_with_format(row_idx, grand_total_col, matrix.grand_total, &total_format)?;

    worksheet.set_freeze_panes(1, 0)?;

    Ok(workbook.save_to_buffer()?)
}
