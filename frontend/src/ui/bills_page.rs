//! View model of the employee bills page.
//!
//! The container passes store order through untouched; ordering for display
//! happens here, most recent first by raw date string comparison.

use std::cmp::Ordering;

use shared::DisplayBill;

use crate::errors::StoreError;

#[derive(Debug, Clone, PartialEq)]
pub enum BillsPage {
    Loading,
    /// Text rendered in place of the table, e.g. `Erreur 404`
    Error(String),
    Loaded(Vec<DisplayBill>),
}

impl BillsPage {
    /// Build the page from the outcome of `get_bills`
    pub fn from_result(result: Result<Vec<DisplayBill>, StoreError>) -> Self {
        match result {
            Ok(bills) => BillsPage::Loaded(sort_anti_chrono(bills)),
            Err(err) => BillsPage::Error(err.to_string()),
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            BillsPage::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn rows(&self) -> &[DisplayBill] {
        match self {
            BillsPage::Loaded(rows) => rows,
            _ => &[],
        }
    }

    /// Plain-text rendering, one line per row
    pub fn render_text(&self) -> String {
        match self {
            BillsPage::Loading => "Chargement…".to_string(),
            BillsPage::Error(message) => message.clone(),
            BillsPage::Loaded(rows) if rows.is_empty() => "Aucune note de frais".to_string(),
            BillsPage::Loaded(rows) => rows
                .iter()
                .map(|row| {
                    format!(
                        "{} | {} | {} | {} € | {}",
                        row.expense_type, row.name, row.date, row.amount, row.status
                    )
                })
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

fn anti_chrono(a: &DisplayBill, b: &DisplayBill) -> Ordering {
    b.raw_date.cmp(&a.raw_date)
}

/// Most recent first; ties keep store order
pub fn sort_anti_chrono(mut bills: Vec<DisplayBill>) -> Vec<DisplayBill> {
    bills.sort_by(anti_chrono);
    bills
}
