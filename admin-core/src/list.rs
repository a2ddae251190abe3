use crate::client::CollectionClient;
use crate::error::ApiError;

/// Owns the fetched slice of the collection plus the client-side page
/// number. Every successful fetch replaces the held page wholesale; there
/// is no local patching after mutations, the list is always refetched so
/// it reflects server truth (sorting, filtering, concurrent writers).
///
/// `paginated: false` degenerates to "load everything, no page
/// arithmetic" for backends that expose the collection as a flat array.
#[derive(Debug, Clone, PartialEq)]
pub struct ListController<R> {
    records: Vec<R>,
    page: u32,
    total_pages: u32,
    page_size: u32,
    paginated: bool,
}

impl<R> ListController<R> {
    pub fn new(paginated: bool, page_size: u32) -> Self {
        Self {
            records: Vec::new(),
            page: 1,
            total_pages: 0,
            page_size,
            paginated,
        }
    }

    /// Server-driven pagination with a fixed page size.
    pub fn paginated(page_size: u32) -> Self {
        Self::new(true, page_size)
    }

    /// Backend exposes the collection as a flat array; single logical page.
    pub fn load_all() -> Self {
        Self::new(false, 0)
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn can_retreat(&self) -> bool {
        self.paginated && self.page > 1
    }

    pub fn can_advance(&self) -> bool {
        self.paginated && self.page < self.total_pages
    }

    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages.max(1))
    }

    /// Fetch page `n` and replace the held page with the response. On
    /// failure the previous records, page number and total are left
    /// untouched.
    pub async fn load_page<C>(&mut self, client: &C, n: u32) -> Result<(), ApiError>
    where
        C: CollectionClient<Record = R> + ?Sized,
    {
        if !self.paginated {
            let records = client.fetch_all().await?;
            self.records = records;
            self.page = 1;
            self.total_pages = 1;
            return Ok(());
        }

        let mut target = n.max(1);
        if self.total_pages > 0 {
            target = target.min(self.total_pages);
        }

        let mut page = client.fetch_page(target, self.page_size).await?;

        // A mutation may have shrunk the collection under us (delete on the
        // last page); fall back to the last page the backend now reports.
        let last = page.total_pages.max(1);
        if target > last {
            tracing::debug!(requested = target, last, "page past end, refetching last page");
            target = last;
            page = client.fetch_page(target, self.page_size).await?;
        }

        self.records = page.items;
        self.total_pages = page.total_pages;
        self.page = target;
        Ok(())
    }

    /// No-op at or above the last page.
    pub async fn advance<C>(&mut self, client: &C) -> Result<(), ApiError>
    where
        C: CollectionClient<Record = R> + ?Sized,
    {
        if !self.can_advance() {
            return Ok(());
        }
        self.load_page(client, self.page + 1).await
    }

    /// No-op below page 2.
    pub async fn retreat<C>(&mut self, client: &C) -> Result<(), ApiError>
    where
        C: CollectionClient<Record = R> + ?Sized,
    {
        if !self.can_retreat() {
            return Ok(());
        }
        self.load_page(client, self.page - 1).await
    }

    /// Reload the current page; called after every mutation.
    pub async fn refresh<C>(&mut self, client: &C) -> Result<(), ApiError>
    where
        C: CollectionClient<Record = R> + ?Sized,
    {
        self.load_page(client, self.page).await
    }
}
