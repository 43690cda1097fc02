//! Shared fixtures for unit tests.

use shared::{Bill, BillStatus, NewUpload};

pub const TEST_EMAIL: &str = "employee@test.tld";

pub fn create_test_bill(id: &str, date: &str, status: BillStatus) -> Bill {
    Bill {
        id: Some(id.to_string()),
        email: "a@a".to_string(),
        expense_type: "Hôtel et logement".to_string(),
        name: "encore".to_string(),
        amount: 400,
        date: date.to_string(),
        vat: "80".to_string(),
        pct: Some(20),
        commentary: "séminaire billed".to_string(),
        file_url: Some(format!("https://test.storage.tld/{}.jpg", id)),
        file_name: Some(format!("{}.jpg", id)),
        status,
        comment_admin: Some("ok".to_string()),
    }
}

/// The demo bills the store is seeded with
pub fn fixture_bills() -> Vec<Bill> {
    let mut bills = vec![
        create_test_bill("47qAXb6fIm2zOKkLzMro", "2004-04-04", BillStatus::Pending),
        create_test_bill("BeKy5Mo4jkmdfPGYpTxZ", "2001-01-01", BillStatus::Refused),
        create_test_bill("UIUZtnPQvnbFnB0ozvJh", "2003-03-03", BillStatus::Accepted),
        create_test_bill("qcCK3SzECmaZAGRrHjaC", "2002-02-02", BillStatus::Refused),
    ];
    bills[1].expense_type = "Transports".to_string();
    bills[1].name = "test1".to_string();
    bills[1].amount = 100;
    bills[1].vat = String::new();
    bills[1].comment_admin = Some("en fait non".to_string());
    bills[2].expense_type = "Services en ligne".to_string();
    bills[2].name = "test3".to_string();
    bills[2].amount = 300;
    bills[3].expense_type = "Restaurants et bars".to_string();
    bills[3].name = "test2".to_string();
    bills[3].amount = 200;
    bills
}

/// A demo record whose date was typed by hand
pub fn corrupted_bill() -> Bill {
    create_test_bill("corruptedBill0000000", "23 javnier 2004", BillStatus::Pending)
}

pub fn test_upload(file_name: &str) -> NewUpload {
    NewUpload {
        file_name: file_name.to_string(),
        content: vec![0xFF, 0xD8, 0xFF, 0xE0],
        email: TEST_EMAIL.to_string(),
    }
}
