use serde::{Deserialize, Serialize};

pub const CSV_HEADERS: [&str; 5] = ["Code", "Phone", "Amount", "Prize Won", "Spin Time"];

/// One completed spin as the server reports it. `time` is a display
/// string produced when the spin was recorded.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpinRecord {
    pub code: String,
    #[serde(default)]
    pub phone: String,
    pub amount: i64,
    pub prize: String,
    pub time: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecordsResponse {
    #[serde(default)]
    pub success: bool,
    pub records: Vec<SpinRecord>,
}

/// Formats an amount in naira with thousands separators, e.g.
/// `₦150,000`.
pub fn format_naira(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("₦{}{}", sign, grouped)
}

/// Fields containing a comma or quote are wrapped in double quotes so
/// the formatted amounts keep their column.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Builds the export file contents: a header row, then one row per
/// record.
pub fn records_to_csv(records: &[SpinRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(CSV_HEADERS.join(","));
    for record in records {
        let row = [
            csv_field(&record.code),
            csv_field(&record.phone),
            csv_field(&format_naira(record.amount)),
            csv_field(&record.prize),
            csv_field(&record.time),
        ];
        lines.push(row.join(","));
    }
    lines.join("\n")
}

/// File name for an export taken on the given `YYYY-MM-DD` date.
pub fn csv_filename(date_iso: &str) -> String {
    format!("spin_records_{}.csv", date_iso)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> SpinRecord {
        SpinRecord {
            code: "4821".to_string(),
            phone: "08012345678".to_string(),
            amount: 75_000,
            prize: "1 Wig Stand".to_string(),
            time: "6/15/2025, 2:30:00 PM".to_string(),
        }
    }

    #[test]
    fn test_format_naira_groups_thousands() {
        assert_eq!(format_naira(0), "₦0");
        assert_eq!(format_naira(999), "₦999");
        assert_eq!(format_naira(1_000), "₦1,000");
        assert_eq!(format_naira(75_000), "₦75,000");
        assert_eq!(format_naira(1_234_567), "₦1,234,567");
    }

    #[test]
    fn test_csv_has_header_and_rows() {
        let records = vec![sample_record(), sample_record()];
        let csv = records_to_csv(&records);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Code,Phone,Amount,Prize Won,Spin Time");
        assert!(lines[1].starts_with("4821,08012345678,"));
    }

    #[test]
    fn test_csv_quotes_fields_with_commas() {
        let csv = records_to_csv(&[sample_record()]);
        // The formatted amount and the locale timestamp both contain
        // commas and must not split into extra columns.
        assert!(csv.contains("\"₦75,000\""));
        assert!(csv.contains("\"6/15/2025, 2:30:00 PM\""));
    }

    #[test]
    fn test_csv_filename() {
        assert_eq!(csv_filename("2025-06-15"), "spin_records_2025-06-15.csv");
    }

    #[test]
    fn test_record_wire_format() {
        let json = r#"{"code":"1111","phone":"","amount":200000,"prize":"Hair Dryer + Hair Kits","time":"6/1/2025, 10:00:00 AM"}"#;
        let record: SpinRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.amount, 200_000);
        assert_eq!(record.prize, "Hair Dryer + Hair Kits");
    }
}
