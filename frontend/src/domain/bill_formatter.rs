//! Bill formatting for the employee bills table.
//!
//! Turns raw [`Bill`] records into [`DisplayBill`] rows. Formatting never
//! panics on bad data: callers get a `Result` per record and decide whether
//! to fall back to [`unformatted_bill`].

use shared::{Bill, BillStatus, DisplayBill};

use crate::errors::FormatError;
use crate::services::date_utils;

pub use crate::services::date_utils::{format_date, try_format_date};

/// Display label for a bill status
pub fn format_status(status: &BillStatus) -> Result<&'static str, FormatError> {
    match status {
        BillStatus::Pending => Ok("En attente"),
        BillStatus::Accepted => Ok("Accepté"),
        BillStatus::Refused => Ok("Refused"),
        BillStatus::Unknown(raw) => Err(FormatError::UnknownStatus(raw.clone())),
    }
}

/// Format a single bill, failing on a malformed date or an unknown status
pub fn format_bill(bill: &Bill) -> Result<DisplayBill, FormatError> {
    let date = date_utils::try_format_date(&bill.date)?;
    let status = format_status(&bill.status)?;
    Ok(project(bill, date, true, status.to_string()))
}

/// Degraded projection: raw date, and the raw status text when it has no label
pub fn unformatted_bill(bill: &Bill) -> DisplayBill {
    let status = format_status(&bill.status)
        .map(str::to_string)
        .unwrap_or_else(|_| bill.status.as_str().to_string());
    project(bill, bill.date.clone(), false, status)
}

fn project(bill: &Bill, date: String, date_formatted: bool, status: String) -> DisplayBill {
    DisplayBill {
        id: bill.id.clone(),
        email: bill.email.clone(),
        expense_type: bill.expense_type.clone(),
        name: bill.name.clone(),
        amount: bill.amount,
        date,
        raw_date: bill.date.clone(),
        date_formatted,
        vat: bill.vat.clone(),
        pct: bill.pct,
        commentary: bill.commentary.clone(),
        file_url: bill.file_url.clone(),
        file_name: bill.file_name.clone(),
        status,
        comment_admin: bill.comment_admin.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_bill;

    #[test]
    fn test_format_status_labels() {
        assert_eq!(format_status(&BillStatus::Pending).unwrap(), "En attente");
        assert_eq!(format_status(&BillStatus::Accepted).unwrap(), "Accepté");
        assert_eq!(format_status(&BillStatus::Refused).unwrap(), "Refused");
    }

    #[test]
    fn test_unknown_status_is_an_error() {
        let err = format_status(&BillStatus::Unknown("archived".to_string())).unwrap_err();
        assert_eq!(err, FormatError::UnknownStatus("archived".to_string()));
    }

    #[test]
    fn test_format_bill() {
        let bill = create_test_bill("47qAXb6fIm2zOKkLzMro", "2004-04-04", BillStatus::Pending);

        let display = format_bill(&bill).unwrap();

        assert_eq!(display.id.as_deref(), Some("47qAXb6fIm2zOKkLzMro"));
        assert_eq!(display.date, "4 Avr. 04");
        assert_eq!(display.raw_date, "2004-04-04");
        assert!(display.date_formatted);
        assert_eq!(display.status, "En attente");
        assert_eq!(display.amount, bill.amount);
        assert_eq!(display.file_url, bill.file_url);
    }

    #[test]
    fn test_format_bill_rejects_malformed_date() {
        let bill = create_test_bill("corrupted", "23 javnier 2004", BillStatus::Pending);
        assert!(matches!(format_bill(&bill), Err(FormatError::MalformedDate(_))));
    }

    #[test]
    fn test_unformatted_bill_keeps_raw_date_but_labels_status() {
        let bill = create_test_bill("corrupted", "23 javnier 2004", BillStatus::Refused);

        let display = unformatted_bill(&bill);

        assert_eq!(display.date, "23 javnier 2004");
        assert!(!display.date_formatted);
        assert_eq!(display.status, "Refused");
    }

    #[test]
    fn test_unformatted_bill_with_unknown_status() {
        let bill = create_test_bill("odd", "2004-04-04", BillStatus::Unknown("archived".to_string()));
        assert!(format_bill(&bill).is_err());
        assert_eq!(unformatted_bill(&bill).status, "archived");
    }
}
