use crate::{
    codec::Codec,
    dispatcher::{Dispatcher, Operation},
    query::{FilterSpec, Page},
    transport::Transport,
    types::{Invoice, PagedCollection},
    Result,
};

/// Invoice operations.
pub struct InvoiceApi<'a, T, C> {
    dispatcher: &'a Dispatcher<T, C>,
}

impl<'a, T: Transport, C: Codec> InvoiceApi<'a, T, C> {
    pub(crate) fn new(dispatcher: &'a Dispatcher<T, C>) -> Self {
        Self { dispatcher }
    }

    /// Fetches a single invoice by its id.
    pub async fn get_invoice(&self, invoice_id: &str) -> Result<Invoice> {
        self.dispatcher
            .execute(Operation::get("/invoices/{invoiceId}").with_path_param("invoiceId", invoice_id))
            .await
    }

    /// Fetches one page of invoices matching `filter`.
    pub async fn list_invoices(
        &self,
        page: Page,
        filter: Option<&FilterSpec>,
    ) -> Result<PagedCollection<Invoice>> {
        self.dispatcher
            .execute_list(Operation::get("/invoices").with_filter(filter), Some(page))
            .await
    }
}
