//! Trial balance and mapping template ingestion.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use mizan_core::ledger::{Classification, LedgerEntry};
use mizan_shared::{AppError, AppResult};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

#[derive(Deserialize)]
struct LedgerRow {
    #[serde(alias = "Account Code", alias = "code")]
    account_code: String,
    #[serde(alias = "Account Name", alias = "name")]
    account_name: String,
    #[serde(alias = "Period")]
    period: String,
    #[serde(alias = "Debit", default)]
    debit: String,
    #[serde(alias = "Credit", default)]
    credit: String,
}

/// Reads trial balance rows from CSV.
///
/// Expected headers: `account_code,account_name,period,debit,credit`.
/// Empty amount cells count as zero. Amounts may carry thousands
/// separators.
pub fn read_ledger<R: Read>(reader: R) -> AppResult<Vec<LedgerEntry>> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let mut entries = Vec::new();

    for (idx, rec) in rdr.deserialize::<LedgerRow>().enumerate() {
        // Header is line 1.
        let line = idx + 2;
        let row = rec.map_err(|e| AppError::Ingestion(format!("line {line}: {e}")))?;

        if row.account_code.is_empty() {
            return Err(AppError::Validation(format!("line {line}: account_code is empty")));
        }
        if row.period.is_empty() {
            return Err(AppError::Validation(format!("line {line}: period is empty")));
        }

        entries.push(LedgerEntry {
            debit: parse_amount(&row.debit, line, "debit")?,
            credit: parse_amount(&row.credit, line, "credit")?,
            account_code: row.account_code,
            account_name: row.account_name,
            period: row.period,
        });
    }

    debug!(rows = entries.len(), "Read trial balance");
    Ok(entries)
}

/// Reads a trial balance CSV file.
pub fn read_ledger_file(path: &Path) -> AppResult<Vec<LedgerEntry>> {
    read_ledger(open(path)?)
}

/// Reads a mapping template: a JSON array of classifications.
pub fn read_mapping<R: Read>(reader: R) -> AppResult<Vec<Classification>> {
    let template: Vec<Classification> = serde_json::from_reader(reader)
        .map_err(|e| AppError::Ingestion(format!("mapping template: {e}")))?;
    debug!(rows = template.len(), "Read mapping template");
    Ok(template)
}

/// Reads a mapping template file.
pub fn read_mapping_file(path: &Path) -> AppResult<Vec<Classification>> {
    read_mapping(open(path)?)
}

fn open(path: &Path) -> AppResult<File> {
    File::open(path).map_err(|e| AppError::NotFound(format!("{}: {e}", path.display())))
}

/// Largest amount a single cell may carry. Keeps sums over any realistic
/// ledger well inside `Decimal` range.
const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x38D7E, 0, false, 0);

fn parse_amount(raw: &str, line: usize, column: &str) -> AppResult<Decimal> {
    if raw.is_empty() {
        return Ok(Decimal::ZERO);
    }
    let amount: Decimal = raw.replace(',', "").parse().map_err(|_| {
        AppError::Ingestion(format!("line {line}, column {column}: invalid amount '{raw}'"))
    })?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(AppError::Validation(format!(
            "line {line}, column {column}: negative amount '{raw}'"
        )));
    }
    if amount > MAX_AMOUNT {
        return Err(AppError::Validation(format!(
            "line {line}, column {column}: amount '{raw}' exceeds {MAX_AMOUNT}"
        )));
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mizan_core::ledger::AccountType;
    use rust_decimal_macros::dec;

    #[test]
    fn test_read_ledger() {
        let data = "\
account_code,account_name,period,debit,credit
1000, Bank ,2024,\"1,250.50\",
4000,Sales,2024,,900
";
        let entries = read_ledger(data.as_bytes()).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].account_name, "Bank");
        assert_eq!(entries[0].debit, dec!(1250.50));
        assert_eq!(entries[0].credit, Decimal::ZERO);
        assert_eq!(entries[1].credit, dec!(900));
    }

    #[test]
    fn test_read_ledger_accepts_display_headers() {
        let data = "Account Code,Account Name,Period,Debit,Credit\n1000,Bank,2024,5,0\n";
        let entries = read_ledger(data.as_bytes()).unwrap();
        assert_eq!(entries[0].account_code, "1000");
    }

    #[test]
    fn test_invalid_amount_names_line_and_column() {
        let data = "account_code,account_name,period,debit,credit\n\
                    1000,Bank,2024,5,0\n\
                    1100,Debtors,2024,abc,0\n";
        let err = read_ledger(data.as_bytes()).unwrap_err();

        assert!(matches!(err, AppError::Ingestion(_)));
        assert!(err.to_string().contains("line 3, column debit"));
    }

    #[test]
    fn test_negative_amount_rejected() {
        let data = "account_code,account_name,period,debit,credit\n1000,Bank,2024,0,-5\n";
        let err = read_ledger(data.as_bytes()).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_amount_limit() {
        let at_limit = "account_code,account_name,period,debit,credit\n\
                        1000,Bank,2024,1000000000000000,0\n";
        assert_eq!(read_ledger(at_limit.as_bytes()).unwrap()[0].debit, MAX_AMOUNT);

        let data = "account_code,account_name,period,debit,credit\n\
                    1000,Bank,2024,1,0\n\
                    3000,Capital,2024,0,79228162514264337593543950335\n";
        let err = read_ledger(data.as_bytes()).unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert!(err.to_string().contains("line 3, column credit"));
    }

    #[test]
    fn test_missing_period_rejected() {
        let data = "account_code,account_name,period,debit,credit\n1000,Bank,,1,0\n";
        assert!(matches!(read_ledger(data.as_bytes()), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_read_mapping() {
        let data = r#"[
            {"account_code": "2500", "account_type": "Liability", "ifrs_category": "Borrowings", "maturity": "NonCurrent"},
            {"account_code": "4000", "account_name": "Sales", "account_type": "Revenue",
             "ifrs_category": "Revenue from Contracts with Customers", "confidence_score": "95"}
        ]"#;
        let template = read_mapping(data.as_bytes()).unwrap();

        assert_eq!(template.len(), 2);
        assert_eq!(template[1].account_type, AccountType::Revenue);
        assert_eq!(template[1].confidence_score, dec!(95));
        assert!(template[0].maturity.is_some());
    }

    #[test]
    fn test_read_mapping_rejects_garbage() {
        assert!(matches!(read_mapping("{".as_bytes()), Err(AppError::Ingestion(_))));
    }
}
