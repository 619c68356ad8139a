use crate::backends::traits::ContentStore;
use crate::errors::CoreError;
use crate::models::chart::ChartPoint;
use crate::models::document::DocumentRecord;

/// Everything the public fund modal needs, fetched in one call.
#[derive(Debug, Clone)]
pub struct Overview {
    /// Chart series, ascending by `month_order`. Empty on fetch failure.
    pub chart: Vec<ChartPoint>,

    /// The newest monthly letter, if any exists and the fetch succeeded.
    /// `None` renders as a disabled download affordance, never a broken link.
    pub latest_document: Option<DocumentRecord>,
}

/// Read path of the content synchronization surface.
///
/// Pure sequencing over a [`ContentStore`] — no HTTP details, no state.
/// Ordering rules live here so every store implementation can return rows
/// in whatever order is convenient.
pub struct ContentService;

impl ContentService {
    pub fn new() -> Self {
        Self
    }

    /// The chart series, strictly ascending by `month_order`.
    /// An empty collection is an empty vec, not an error.
    pub async fn fetch_chart_series(
        &self,
        store: &dyn ContentStore,
    ) -> Result<Vec<ChartPoint>, CoreError> {
        let mut points = store.fetch_chart_points().await?;
        points.sort_by_key(|p| p.month_order);
        Ok(points)
    }

    /// The single newest document, max-by-`created_at` at query time.
    pub async fn fetch_latest_document(
        &self,
        store: &dyn ContentStore,
    ) -> Result<Option<DocumentRecord>, CoreError> {
        let documents = store.list_documents().await?;
        Ok(documents.into_iter().max_by_key(|d| d.created_at))
    }

    /// All documents, newest first (the admin list view).
    pub async fn list_documents(
        &self,
        store: &dyn ContentStore,
    ) -> Result<Vec<DocumentRecord>, CoreError> {
        let mut documents = store.list_documents().await?;
        documents.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(documents)
    }

    /// Both public fetches, issued concurrently. Each side degrades
    /// independently on failure — a slow or failing document fetch never
    /// delays or empties the chart, and vice versa.
    pub async fn fetch_overview(&self, store: &dyn ContentStore) -> Overview {
        let (chart, latest) = futures::join!(
            self.fetch_chart_series(store),
            self.fetch_latest_document(store)
        );
        Overview {
            chart: chart.unwrap_or_default(),
            latest_document: latest.ok().flatten(),
        }
    }
}

impl Default for ContentService {
    fn default() -> Self {
        Self::new()
    }
}
