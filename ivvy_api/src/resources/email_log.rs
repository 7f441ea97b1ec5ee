use crate::{
    codec::Codec,
    dispatcher::{Dispatcher, Operation},
    query::{FilterSpec, Page},
    transport::Transport,
    types::{EmailLog, PagedCollection},
    Result,
};

/// Email log operations.
pub struct EmailLogApi<'a, T, C> {
    dispatcher: &'a Dispatcher<T, C>,
}

impl<'a, T: Transport, C: Codec> EmailLogApi<'a, T, C> {
    pub(crate) fn new(dispatcher: &'a Dispatcher<T, C>) -> Self {
        Self { dispatcher }
    }

    /// Fetches one page of the account's email log.
    pub async fn list_email_logs(
        &self,
        page: Page,
        filter: Option<&FilterSpec>,
    ) -> Result<PagedCollection<EmailLog>> {
        self.dispatcher
            .execute_list(Operation::get("/email-logs").with_filter(filter), Some(page))
            .await
    }
}
