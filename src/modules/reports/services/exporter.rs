use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::Workbook;

use crate::core::{AppError, Result};
use crate::modules::reports::models::{CellValue, ExportFormat, ReportTable};

const CSV_CONTENT_TYPE: &str = "text/csv";
const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Encoded report ready to be returned as an attachment
#[derive(Debug, Clone)]
pub struct ExportedReport {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
    pub filename: String,
}

/// Serializes an assembled table into the requested export format
pub struct ReportExporter;

impl ReportExporter {
    /// Encode `table` as `format`, naming the attachment `<stem>.<ext>`.
    ///
    /// # Errors
    /// `pdf` returns a not-implemented error; encoder failures surface as
    /// internal errors.
    pub fn encode(
        table: &ReportTable,
        format: ExportFormat,
        stem: &str,
    ) -> Result<ExportedReport> {
        match format {
            ExportFormat::Csv => Ok(ExportedReport {
                bytes: Self::to_csv(table)?,
                content_type: CSV_CONTENT_TYPE,
                filename: format!("{}.csv", stem),
            }),
            ExportFormat::Xlsx => Ok(ExportedReport {
                bytes: Self::to_xlsx(table)?,
                content_type: XLSX_CONTENT_TYPE,
                filename: format!("{}.xlsx", stem),
            }),
            ExportFormat::Pdf => Err(AppError::not_implemented(
                "PDF export is not implemented in this example",
            )),
        }
    }

    /// Header line followed by one line per row, every value quoted.
    fn to_csv(table: &ReportTable) -> Result<Vec<u8>> {
        let mut writer = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::Always)
            .from_writer(Vec::new());

        writer
            .write_record(&table.headers)
            .map_err(|e| AppError::internal(format!("CSV encoding failed: {}", e)))?;

        for row in &table.rows {
            writer
                .write_record(row.iter().map(|cell| cell.to_string()))
                .map_err(|e| AppError::internal(format!("CSV encoding failed: {}", e)))?;
        }

        writer
            .into_inner()
            .map_err(|e| AppError::internal(format!("CSV buffer flush failed: {}", e)))
    }

    /// Single-sheet workbook with a header row and typed data cells.
    fn to_xlsx(table: &ReportTable) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name("Revenue Data").map_err(xlsx_error)?;

        for (col, header) in table.headers.iter().enumerate() {
            sheet
                .write_string(0, col as u16, header.as_str())
                .map_err(xlsx_error)?;
        }

        for (row_index, row) in table.rows.iter().enumerate() {
            let row_number = row_index as u32 + 1;
            for (col, cell) in row.iter().enumerate() {
                let col_number = col as u16;
                match cell {
                    CellValue::Text(text) => {
                        sheet
                            .write_string(row_number, col_number, text.as_str())
                            .map_err(xlsx_error)?;
                    }
                    CellValue::Number(amount) => {
                        sheet
                            .write_number(
                                row_number,
                                col_number,
                                amount.to_f64().unwrap_or_default(),
                            )
                            .map_err(xlsx_error)?;
                    }
                    CellValue::Integer(value) => {
                        sheet
                            .write_number(row_number, col_number, *value as f64)
                            .map_err(xlsx_error)?;
                    }
                    CellValue::Empty => {}
                }
            }
        }

        workbook.save_to_buffer().map_err(xlsx_error)
    }
}

fn xlsx_error(e: rust_xlsxwriter::XlsxError) -> AppError {
    AppError::internal(format!("XLSX encoding failed: {}", e))
}
