//! # CSV Export
//!
//! Serializes the ranked table exactly as it is displayed: one header row
//! followed by one row per action in descending priority order, columns
//! `id, label, gravity, urgency, trend, priority, tier`.
//!
//! - UTF-8, comma-delimited, `\n` line endings
//! - Text fields are quoted only when they need it (commas, quotes, newlines)
//! - Numbers are never quoted
//!
//! [`parse_csv`] reads an export back and re-checks it against the ranking
//! rules, so a round trip either reproduces the table or reports where it
//! diverged.
//!
//! ## Example
//!
//! ```rust
//! use gut_core::catalog::seed_catalog;
//! use gut_core::export::{parse_csv, to_csv};
//! use gut_core::ranking::rank;
//! use gut_core::settings::Locale;
//!
//! let rows = rank(&seed_catalog());
//! let bytes = to_csv(&rows, Locale::English)?;
//! assert!(bytes.starts_with(b"id,label,gravity,urgency,trend,priority,tier\n"));
//! assert_eq!(parse_csv(&bytes, Locale::English)?, rows);
//! # Ok::<(), gut_core::errors::GutError>(())
//! ```

use std::collections::HashSet;
use std::path::Path;

use crate::action::{ActionId, GutScores, Score};
use crate::errors::{GutError, GutResult};
use crate::file_io::write_atomic;
use crate::ranking::RankedAction;
use crate::settings::Locale;

/// MIME type offered alongside the export
pub const EXPORT_MIME: &str = "text/csv";

/// Serialize ranked rows to CSV bytes.
pub fn to_csv(rows: &[RankedAction], locale: Locale) -> GutResult<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(locale.column_headers())?;
    for row in rows {
        writer.write_record([
            row.id.to_string(),
            row.label.clone(),
            row.gravity.to_string(),
            row.urgency.to_string(),
            row.trend.to_string(),
            row.priority.to_string(),
            locale.tier_label(row.tier).to_string(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| GutError::serialization(e.to_string()))
}

/// Write export bytes to `path` (atomic write).
pub fn write_export(path: &Path, bytes: &[u8]) -> GutResult<()> {
    write_atomic(path, bytes)?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "export written");
    Ok(())
}

/// Parse an export back into ranked rows, validating every derived column.
pub fn parse_csv(bytes: &[u8], locale: Locale) -> GutResult<Vec<RankedAction>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes);

    let expected = locale.column_headers();
    let headers = reader.headers()?.clone();
    if headers.iter().ne(expected.iter().copied()) {
        return Err(GutError::export_mismatch(
            1,
            format!("expected header '{}', found '{}'", expected.join(","), headers.iter().collect::<Vec<_>>().join(",")),
        ));
    }

    let mut rows = Vec::new();
    let mut seen = HashSet::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let row = parse_record(&record, line, locale)?;
        if !seen.insert(row.id) {
            return Err(GutError::export_mismatch(line, format!("duplicate id {}", row.id)));
        }
        rows.push(row);
    }

    tracing::debug!(rows = rows.len(), "export parsed");
    Ok(rows)
}

fn parse_record(record: &csv::StringRecord, line: u64, locale: Locale) -> GutResult<RankedAction> {
    let field = |i: usize| record.get(i).unwrap_or("");

    let id: ActionId = field(0)
        .parse()
        .map_err(|_| GutError::export_mismatch(line, format!("invalid id '{}'", field(0))))?;

    let score = |i: usize| -> GutResult<Score> {
        field(i)
            .trim()
            .parse::<u8>()
            .ok()
            .and_then(|v| Score::new(v).ok())
            .ok_or_else(|| GutError::export_mismatch(line, format!("invalid score '{}'", field(i))))
    };
    let scores = GutScores::new(score(2)?, score(3)?, score(4)?);
    let row = RankedAction::from_parts(id, field(1), scores);

    let priority: u8 = field(5)
        .trim()
        .parse()
        .map_err(|_| GutError::export_mismatch(line, format!("invalid priority '{}'", field(5))))?;
    if priority != row.priority.value() {
        return Err(GutError::export_mismatch(
            line,
            format!("priority {} is not {} x {} x {}", priority, row.gravity, row.urgency, row.trend),
        ));
    }

    match locale.parse_tier(field(6)) {
        Some(tier) if tier == row.tier => Ok(row),
        _ => Err(GutError::export_mismatch(
            line,
            format!("tier '{}' does not match priority {}", field(6), row.priority),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_catalog;
    use crate::ranking::rank;
    use tempfile::TempDir;

    fn seed_csv(locale: Locale) -> String {
        String::from_utf8(to_csv(&rank(&seed_catalog()), locale).unwrap()).unwrap()
    }

    #[test]
    fn test_header_and_row_count() {
        let csv = seed_csv(Locale::English);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "id,label,gravity,urgency,trend,priority,tier");
        assert_eq!(lines.len(), 13);
        assert!(csv.ends_with('\n'));
    }

    #[test]
    fn test_quoting_only_when_needed() {
        let csv = seed_csv(Locale::English);
        // First ranked row has no comma in its label
        assert!(csv.contains("\n1,Oferecer planos de financiamento e parcelamento facilitado,5,5,4,100,High\n"));
        // Action 8 has a comma in its label
        assert!(csv.contains(
            "\n8,\"Oferecer descontos progressivos, programas de fidelidade e benefícios por indicação\",4,4,4,64,Medium\n"
        ));
        assert!(csv.ends_with("\n12,Divulgar estudos de caso e resultados reais,3,3,4,36,Low\n"));
    }

    #[test]
    fn test_labels_with_quotes_and_newlines_roundtrip() {
        let rows = vec![
            RankedAction::from_parts(ActionId(2), "two\nlines", GutScores::from_values(5, 5, 5)),
            RankedAction::from_parts(ActionId(1), "Say \"hi\"", GutScores::from_values(2, 2, 2)),
        ];
        let bytes = to_csv(&rows, Locale::English).unwrap();
        let csv = String::from_utf8(bytes.clone()).unwrap();

        assert!(csv.contains("\n2,\"two\nlines\",5,5,5,125,High\n"));
        assert!(csv.ends_with("\n1,\"Say \"\"hi\"\"\",2,2,2,8,Low\n"));
        assert_eq!(parse_csv(&bytes, Locale::English).unwrap(), rows);
    }

    #[test]
    fn test_parse_rejects_zero_id() {
        let csv = "id,label,gravity,urgency,trend,priority,tier\n0,x,4,5,5,100,High\n";
        let err = parse_csv(csv.as_bytes(), Locale::English).unwrap_err();
        assert!(matches!(err, GutError::ExportMismatch { line: 2, .. }));
    }

    #[test]
    fn test_portuguese_headers() {
        let csv = seed_csv(Locale::Portuguese);
        assert!(csv.starts_with("Nº,Ação Proposta,G,U,T,Prioridade,Nível\n"));
        assert!(csv.contains(",100,Alta\n"));
        assert!(csv.contains(",64,Média\n"));
        assert!(csv.contains(",36,Baixa\n"));
    }

    #[test]
    fn test_roundtrip_preserves_rows_and_order() {
        let rows = rank(&seed_catalog());
        for locale in Locale::ALL {
            let bytes = to_csv(&rows, locale).unwrap();
            assert_eq!(parse_csv(&bytes, locale).unwrap(), rows);
        }
    }

    #[test]
    fn test_export_is_deterministic() {
        assert_eq!(seed_csv(Locale::English), seed_csv(Locale::English));
    }

    #[test]
    fn test_parse_rejects_wrong_header() {
        let bytes = to_csv(&rank(&seed_catalog()), Locale::Portuguese).unwrap();
        let err = parse_csv(&bytes, Locale::English).unwrap_err();
        assert!(matches!(err, GutError::ExportMismatch { line: 1, .. }));
    }

    #[test]
    fn test_parse_rejects_stale_priority() {
        let csv = "id,label,gravity,urgency,trend,priority,tier\n12,x,5,5,5,36,Low\n";
        let err = parse_csv(csv.as_bytes(), Locale::English).unwrap_err();
        assert!(matches!(err, GutError::ExportMismatch { line: 2, .. }));
    }

    #[test]
    fn test_parse_rejects_inconsistent_tier() {
        let csv = "id,label,gravity,urgency,trend,priority,tier\n6,x,4,5,5,100,Medium\n";
        assert!(parse_csv(csv.as_bytes(), Locale::English).is_err());
    }

    #[test]
    fn test_parse_rejects_out_of_range_score() {
        let csv = "id,label,gravity,urgency,trend,priority,tier\n6,x,6,5,5,150,High\n";
        assert!(parse_csv(csv.as_bytes(), Locale::English).is_err());
    }

    #[test]
    fn test_parse_rejects_duplicate_ids() {
        let csv = "id,label,gravity,urgency,trend,priority,tier\n6,x,4,5,5,100,High\n6,y,4,5,5,100,High\n";
        let err = parse_csv(csv.as_bytes(), Locale::English).unwrap_err();
        assert!(matches!(err, GutError::ExportMismatch { line: 3, .. }));
    }

    #[test]
    fn test_write_export() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(crate::settings::EXPORT_FILE_NAME);
        let bytes = to_csv(&rank(&seed_catalog()), Locale::English).unwrap();

        write_export(&path, &bytes).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), bytes);
    }
}
