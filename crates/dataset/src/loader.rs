use crate::error::DatasetError;
use core_types::School;
use std::fs;
use std::path::Path;

const UTF8_BOM: char = '\u{feff}';

/// Reads the dataset file and deserializes it into school records, in file order.
pub fn try_load_schools(path: &Path) -> Result<Vec<School>, DatasetError> {
    let raw = fs::read_to_string(path)?;
    let json = raw.strip_prefix(UTF8_BOM).unwrap_or(&raw);
    let schools = serde_json::from_str::<Vec<School>>(json)?;
    Ok(schools)
}

/// Loads the dataset, degrading to an empty collection on any failure.
///
/// The service must still start when the file is absent or broken, so the
/// reason is only logged.
pub fn load_schools(path: &Path) -> Vec<School> {
    if !path.is_file() {
        tracing::warn!(path = %path.display(), "Dataset file not found; serving an empty dataset.");
        return Vec::new();
    }

    match try_load_schools(path) {
        Ok(schools) => {
            tracing::info!(path = %path.display(), records = schools.len(), "Dataset loaded.");
            schools
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to load dataset; serving an empty dataset.");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_fixture(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_records_in_file_order() {
        let file = write_fixture(
            r#"[
                {"學年度": "112", "學校代碼": "A01", "學校名稱": "甲國小"},
                {"學年度": "111", "學校代碼": "B02", "學校名稱": "乙國中"}
            ]"#,
        );
        let schools = load_schools(file.path());
        assert_eq!(schools.len(), 2);
        assert_eq!(schools[0].code, "A01");
        assert_eq!(schools[1].name, "乙國中");
    }

    #[test]
    fn null_cells_do_not_drop_the_dataset() {
        let file = write_fixture(
            r#"[
                {"學校代碼": "A01", "學校名稱": "甲國小", "電話": "(03)1234567"},
                {"學校代碼": "B02", "學校名稱": "乙國中", "電話": null, "女學生數[人]": null}
            ]"#,
        );
        let schools = load_schools(file.path());
        assert_eq!(schools.len(), 2);
        assert_eq!(schools[1].code, "B02");
        assert_eq!(schools[1].phone, "");
        assert_eq!(schools[1].student_total(), 0);
    }

    #[test]
    fn tolerates_byte_order_mark() {
        let file = write_fixture("\u{feff}[{\"學校代碼\": \"C03\"}]");
        let schools = try_load_schools(file.path()).unwrap();
        assert_eq!(schools.len(), 1);
        assert_eq!(schools[0].code, "C03");
    }

    #[test]
    fn missing_file_yields_empty() {
        let dir = tempfile::tempdir().unwrap();
        let schools = load_schools(&dir.path().join("nope.json"));
        assert!(schools.is_empty());
    }

    #[test]
    fn malformed_json_yields_empty() {
        let file = write_fixture("{ this is not json");
        assert!(load_schools(file.path()).is_empty());
        assert!(matches!(
            try_load_schools(file.path()),
            Err(DatasetError::Json(_))
        ));
    }

    #[test]
    fn non_array_document_yields_empty() {
        let file = write_fixture(r#"{"學校代碼": "A01"}"#);
        assert!(load_schools(file.path()).is_empty());
    }
}
