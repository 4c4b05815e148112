//! Excel spreadsheet exporter

use crate::collect::Record;
use crate::constants::record::COLUMNS;
use crate::error::Result;
use crate::export::Exporter;
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

/// XLSX exporter - a single worksheet with a bold header row
pub struct XlsxExporter;

impl Exporter for XlsxExporter {
    fn name(&self) -> &str {
        "xlsx"
    }

    fn description(&self) -> &str {
        "Excel spreadsheet"
    }

    fn extension(&self) -> &str {
        "xlsx"
    }

    fn write(&self, records: &[Record], path: &Path) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        let header = Format::new().set_bold();

        for (col, title) in COLUMNS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *title, &header)?;
        }

        for (i, record) in records.iter().enumerate() {
            let row = (i + 1) as u32;
            worksheet.write_number(row, 0, record.number as f64)?;
            worksheet.write_string(row, 1, record.name.as_str())?;
            worksheet.write_number(row, 2, record.lat)?;
            worksheet.write_number(row, 3, record.lng)?;
            worksheet.write_string(row, 4, record.address.as_str())?;
        }

        workbook.save(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::tests::sample_records;
    use calamine::{open_workbook, Data, Reader, Xlsx};
    use tempfile::TempDir;

    fn read_back(path: &Path) -> Vec<Vec<Data>> {
        let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
        let range = workbook.worksheet_range("Sheet1").unwrap();
        range.rows().map(|row| row.to_vec()).collect()
    }

    fn text(s: &str) -> Data {
        Data::String(s.to_string())
    }

    #[test]
    fn test_write_xlsx() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("records.xlsx");

        XlsxExporter.write(&sample_records(), &path).unwrap();

        let rows = read_back(&path);
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0],
            vec![
                text("Número"),
                text("Nome"),
                text("Latitude"),
                text("Longitude"),
                text("Endereço"),
            ]
        );
        assert_eq!(
            rows[1],
            vec![
                Data::Float(1.0),
                text("Ana Silva"),
                Data::Float(-20.2241),
                Data::Float(-40.2652),
                text("Rua X, 10, , Vitória, ES, 29000-000, Brasil"),
            ]
        );
        assert_eq!(rows[2][0], Data::Float(2.0));
        assert_eq!(rows[2][4], text("—"));
    }

    #[test]
    fn test_write_empty_xlsx() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.xlsx");
        XlsxExporter.write(&[], &path).unwrap();

        let rows = read_back(&path);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0], text("Número"));
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("records.xlsx");
        assert!(XlsxExporter.write(&sample_records(), &path).is_err());
    }
}
