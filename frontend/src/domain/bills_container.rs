//! Employee bills page container.
//!
//! Fetches bills from the store, formats them for the table, and owns the
//! state behind the page's two affordances: the "new bill" button and the
//! per-row eye icon that previews an attachment in the shared modal.

use std::sync::Arc;

use shared::{DisplayBill, RoutePath};
use tracing::{debug, info, warn};

use crate::domain::bill_formatter::{format_bill, unformatted_bill};
use crate::errors::StoreError;
use crate::services::navigation::Navigator;
use crate::storage::traits::BillStore;
use crate::ui::state::ModalState;

/// Eye icon of a bill row, carrying the attachment URL (`data-bill-url`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EyeIcon {
    pub bill_url: Option<String>,
}

impl EyeIcon {
    pub fn new(bill_url: impl Into<String>) -> Self {
        Self {
            bill_url: Some(bill_url.into()),
        }
    }

    /// Icon for a row without an attachment
    pub fn empty() -> Self {
        Self::default()
    }
}

pub struct BillsContainer {
    store: Option<Arc<dyn BillStore>>,
    navigator: Arc<dyn Navigator>,
    modal: ModalState,
}

impl BillsContainer {
    /// Container without a store; `get_bills` yields an empty list
    pub fn new(navigator: Arc<dyn Navigator>) -> Self {
        Self {
            store: None,
            navigator,
            modal: ModalState::new(),
        }
    }

    pub fn with_store(mut self, store: Arc<dyn BillStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Fetch and format every bill, in the order the store returned them.
    ///
    /// A record that cannot be formatted is kept with its raw date; only a
    /// failure of the store itself fails the call.
    pub async fn get_bills(&self) -> Result<Vec<DisplayBill>, StoreError> {
        let Some(store) = &self.store else {
            debug!("no store configured, bills list is empty");
            return Ok(Vec::new());
        };

        let bills = store.list().await.map_err(|e| {
            warn!(error = %e, status = ?e.status_code(), "failed to list bills");
            e
        })?;

        let rows: Vec<DisplayBill> = bills
            .iter()
            .map(|bill| match format_bill(bill) {
                Ok(formatted) => formatted,
                Err(e) => {
                    warn!(
                        bill_id = bill.id.as_deref().unwrap_or("<none>"),
                        error = %e,
                        "bill left unformatted"
                    );
                    unformatted_bill(bill)
                }
            })
            .collect();

        info!(count = rows.len(), "bills ready for display");
        Ok(rows)
    }

    pub fn handle_click_new_bill(&self) {
        self.navigator.navigate(RoutePath::NewBill);
    }

    /// Show the clicked row's attachment in the shared modal
    pub fn handle_click_icon_eye(&mut self, icon: &EyeIcon) {
        match icon.bill_url.as_deref().filter(|url| !url.is_empty()) {
            Some(url) => {
                debug!(url = %url, "previewing attachment");
                self.modal.show(url);
            }
            None => debug!("eye icon has no attachment url"),
        }
    }

    pub fn close_modal(&mut self) {
        self.modal.hide();
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::navigation::Router;
    use crate::storage::MemoryStore;
    use crate::test_utils::{corrupted_bill, fixture_bills};
    use crate::ui::BillsPage;

    fn container_with(store: Arc<MemoryStore>) -> (BillsContainer, Arc<Router>) {
        let router = Arc::new(Router::new(RoutePath::Bills));
        let container = BillsContainer::new(router.clone()).with_store(store);
        (container, router)
    }

    #[tokio::test]
    async fn test_get_bills_without_store_is_empty() {
        let container = BillsContainer::new(Arc::new(Router::default()));
        assert!(container.get_bills().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_bills_formats_every_record_in_store_order() {
        let store = Arc::new(MemoryStore::with_bills(fixture_bills()));
        let (container, _) = container_with(store);

        let bills = container.get_bills().await.unwrap();

        let expected_ids: Vec<_> = fixture_bills().into_iter().map(|b| b.id).collect();
        let ids: Vec<_> = bills.iter().map(|b| b.id.clone()).collect();
        assert_eq!(ids, expected_ids);
        assert_eq!(bills[0].date, "4 Avr. 04");
        assert_eq!(bills[0].status, "En attente");
        assert_eq!(bills[1].date, "1 Jan. 01");
        assert_eq!(bills[1].status, "Refused");
        assert_eq!(bills[2].status, "Accepté");
        assert!(bills.iter().all(|b| b.date_formatted));
    }

    #[tokio::test]
    async fn test_corrupted_date_is_returned_unformatted() {
        let mut raw = fixture_bills();
        raw.insert(1, corrupted_bill());
        let store = Arc::new(MemoryStore::with_bills(raw.clone()));
        let (container, _) = container_with(store);

        let bills = container.get_bills().await.unwrap();

        assert_eq!(bills.len(), raw.len());
        assert_eq!(bills[1].date, "23 javnier 2004");
        assert!(!bills[1].date_formatted);
        assert_eq!(bills[1].status, "En attente");
        assert_eq!(bills[0].date, "4 Avr. 04");
    }

    #[tokio::test]
    async fn test_abandoned_upload_record_does_not_fail_the_list() {
        let abandoned: shared::Bill = serde_json::from_str(
            r#"{"id":"UIUZtnPQvnbFnB0ozvJh","email":"a@a","type":null,"name":null,"amount":null,"date":null,"vat":null,"commentary":null,"fileUrl":"https://test.storage.tld/receipt.jpg","fileName":"receipt.jpg","status":null}"#,
        )
        .unwrap();
        let mut raw = fixture_bills();
        raw.push(abandoned);
        let store = Arc::new(MemoryStore::with_bills(raw.clone()));
        let (container, _) = container_with(store);

        let bills = container.get_bills().await.unwrap();

        assert_eq!(bills.len(), raw.len());
        let last = bills.last().unwrap();
        assert_eq!(last.id.as_deref(), Some("UIUZtnPQvnbFnB0ozvJh"));
        assert!(!last.date_formatted);
        assert_eq!(last.date, "");
        assert_eq!(last.status, "");
        assert_eq!(bills[0].date, "4 Avr. 04");
    }

    #[tokio::test]
    async fn test_store_404_propagates_and_renders() {
        let store = Arc::new(MemoryStore::with_bills(fixture_bills()));
        store.fail_list_with(404);
        let (container, _) = container_with(store);

        let result = container.get_bills().await;

        assert!(matches!(result, Err(StoreError::Status(404))));
        assert!(BillsPage::from_result(result).render_text().contains("Erreur 404"));
    }

    #[tokio::test]
    async fn test_store_500_propagates_and_renders() {
        let store = Arc::new(MemoryStore::new());
        store.fail_list_with(500);
        let (container, _) = container_with(store);

        let page = BillsPage::from_result(container.get_bills().await);

        assert_eq!(page.error_message(), Some("Erreur 500"));
    }

    #[test]
    fn test_click_new_bill_navigates() {
        let (container, router) = container_with(Arc::new(MemoryStore::new()));

        container.handle_click_new_bill();

        assert_eq!(router.current(), RoutePath::NewBill);
        assert!(router.href().contains("#employee/bill/new"));
    }

    #[test]
    fn test_click_icon_eye_opens_shared_modal() {
        let (mut container, _) = container_with(Arc::new(MemoryStore::new()));
        assert_eq!(container.modal().display(), "none");

        container.handle_click_icon_eye(&EyeIcon::new("https://test.storage.tld/a.jpg"));
        assert_eq!(container.modal().image_src(), Some("https://test.storage.tld/a.jpg"));
        assert_ne!(container.modal().display(), "none");

        container.handle_click_icon_eye(&EyeIcon::new("https://test.storage.tld/b.jpg"));
        assert_eq!(container.modal().image_src(), Some("https://test.storage.tld/b.jpg"));
    }

    #[test]
    fn test_click_icon_eye_without_url_is_noop() {
        let (mut container, _) = container_with(Arc::new(MemoryStore::new()));

        container.handle_click_icon_eye(&EyeIcon::empty());
        container.handle_click_icon_eye(&EyeIcon::new(""));

        assert_eq!(container.modal(), &ModalState::new());
    }

    #[test]
    fn test_close_modal_after_preview() {
        let (mut container, _) = container_with(Arc::new(MemoryStore::new()));
        container.handle_click_icon_eye(&EyeIcon::new("https://test.storage.tld/a.jpg"));

        container.close_modal();

        assert_eq!(container.modal().display(), "none");
    }
}
