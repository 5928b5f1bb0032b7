use crate::domain::AccommodationRecord;
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::{Workbook, Worksheet};

const HEADERS: [&str; 8] = [
    "Hotel Name",
    "Destination",
    "Price",
    "Amenities",
    "Ratings",
    "Sentiment Score",
    "Latitude",
    "Longitude",
];

/// Build the workbook bytes for a set of filtered accommodations.
/// Missing numeric values are left as empty cells.
pub fn accommodations_workbook(rows: &[&AccommodationRecord]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;

        write_text(worksheet, r, 0, &row.hotel_name, "hotel name")?;
        write_text(worksheet, r, 1, &row.destination, "destination")?;
        write_optional_number(worksheet, r, 2, row.price, "price")?;
        write_text(worksheet, r, 3, &row.amenities, "amenities")?;
        write_text(worksheet, r, 4, &row.ratings, "ratings")?;
        write_optional_number(worksheet, r, 5, row.sentiment_score, "sentiment score")?;
        write_optional_number(worksheet, r, 6, row.latitude, "latitude")?;
        write_optional_number(worksheet, r, 7, row.longitude, "longitude")?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}

pub fn export_accommodations_xlsx(rows: &[&AccommodationRecord], destination: &str) -> ResultResp {
    let buffer = accommodations_workbook(rows)?;
    xlsx_response(buffer, &export_filename(destination))
}

/// `accommodations_<destination>.xlsx`, keeping only filename-safe characters.
pub fn export_filename(destination: &str) -> String {
    let slug: String = destination
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if slug.is_empty() {
        "accommodations.xlsx".to_string()
    } else {
        format!("accommodations_{slug}.xlsx")
    }
}

fn write_text(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &str,
    field: &str,
) -> Result<(), ServerError> {
    worksheet
        .write_string(row, col, value)
        .map(|_| ())
        .map_err(|e| ServerError::XlsxError(format!("Failed to write {field}: {e}")))
}

fn write_optional_number(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: Option<f64>,
    field: &str,
) -> Result<(), ServerError> {
    let Some(value) = value else {
        return Ok(());
    };
    worksheet
        .write_number(row, col, value)
        .map(|_| ())
        .map_err(|e| ServerError::XlsxError(format!("Failed to write {field}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_is_sanitized() {
        assert_eq!(export_filename("Manali"), "accommodations_Manali.xlsx");
        assert_eq!(export_filename("Ooty / Nilgiris"), "accommodations_Ooty___Nilgiris.xlsx");
        assert_eq!(export_filename(""), "accommodations.xlsx");
    }

    #[test]
    fn workbook_is_a_zip_container() {
        let record = AccommodationRecord::new("Snow Lodge", "Manali", Some(2500.0), "WiFi")
            .with_sentiment(Some(0.8));
        let bytes = accommodations_workbook(&[&record]).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }
}
