// ═══════════════════════════════════════════════════════════════════
// Content Synchronization Surface tests — public read path
// (chart ordering, latest-document selection, overview degradation)
// ═══════════════════════════════════════════════════════════════════

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::sync::Mutex;
use uuid::Uuid;

use cretum_site_core::backends::traits::{ContentStore, IdentityProvider, ObjectStore};
use cretum_site_core::errors::CoreError;
use cretum_site_core::models::chart::ChartPoint;
use cretum_site_core::models::config::SiteConfig;
use cretum_site_core::models::document::{DocumentRecord, NewDocument};
use cretum_site_core::models::session::{AuthSession, UserInfo};
use cretum_site_core::SiteCore;

// ═══════════════════════════════════════════════════════════════════
// Mock backends
// ═══════════════════════════════════════════════════════════════════

struct MockContentStore {
    points: Mutex<Vec<ChartPoint>>,
    documents: Mutex<Vec<DocumentRecord>>,
    fail_chart: bool,
    fail_documents: bool,
}

impl MockContentStore {
    fn new(points: Vec<ChartPoint>, documents: Vec<DocumentRecord>) -> Self {
        Self {
            points: Mutex::new(points),
            documents: Mutex::new(documents),
            fail_chart: false,
            fail_documents: false,
        }
    }

    fn failing(fail_chart: bool, fail_documents: bool) -> Self {
        let mut store = Self::new(vec![point("Ene", 1, 100.0)], vec![doc("carta.pdf", 1)]);
        store.fail_chart = fail_chart;
        store.fail_documents = fail_documents;
        store
    }
}

#[async_trait]
impl ContentStore for MockContentStore {
    fn name(&self) -> &str {
        "MockContent"
    }

    async fn fetch_chart_points(&self) -> Result<Vec<ChartPoint>, CoreError> {
        if self.fail_chart {
            return Err(CoreError::Network("chart table unreachable".into()));
        }
        Ok(self.points.lock().unwrap().clone())
    }

    async fn update_chart_value(
        &self,
        _session: &AuthSession,
        id: Uuid,
        value: f64,
    ) -> Result<(), CoreError> {
        let mut points = self.points.lock().unwrap();
        match points.iter_mut().find(|p| p.id == id) {
            Some(p) => {
                p.value = value;
                Ok(())
            }
            None => Err(CoreError::NotFound(format!("chart point {id}"))),
        }
    }

    async fn list_documents(&self) -> Result<Vec<DocumentRecord>, CoreError> {
        if self.fail_documents {
            return Err(CoreError::Network("documents table unreachable".into()));
        }
        Ok(self.documents.lock().unwrap().clone())
    }

    async fn insert_document(
        &self,
        _session: &AuthSession,
        new: NewDocument,
    ) -> Result<DocumentRecord, CoreError> {
        let record = DocumentRecord {
            id: Uuid::new_v4(),
            name: new.name,
            file_path: new.file_path,
            file_url: new.file_url,
            created_at: Utc::now(),
        };
        self.documents.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn delete_document(&self, _session: &AuthSession, id: Uuid) -> Result<(), CoreError> {
        self.documents.lock().unwrap().retain(|d| d.id != id);
        Ok(())
    }
}

struct StubIdentity;

#[async_trait]
impl IdentityProvider for StubIdentity {
    fn name(&self) -> &str {
        "StubIdentity"
    }

    async fn sign_in(&self, email: &str, _password: &str) -> Result<AuthSession, CoreError> {
        Ok(AuthSession {
            access_token: "token".into(),
            user: UserInfo {
                id: "user-1".into(),
                email: email.into(),
            },
        })
    }

    async fn sign_out(&self, _session: &AuthSession) -> Result<(), CoreError> {
        Ok(())
    }

    async fn current_user(&self, session: &AuthSession) -> Result<Option<UserInfo>, CoreError> {
        Ok(Some(session.user.clone()))
    }
}

struct StubObjects;

#[async_trait]
impl ObjectStore for StubObjects {
    fn name(&self) -> &str {
        "StubObjects"
    }

    async fn upload(
        &self,
        _session: &AuthSession,
        _path: &str,
        _bytes: Vec<u8>,
        _content_type: &str,
    ) -> Result<(), CoreError> {
        Ok(())
    }

    fn public_url(&self, path: &str) -> String {
        format!("https://cdn.test/{path}")
    }

    async fn remove(&self, _session: &AuthSession, _path: &str) -> Result<(), CoreError> {
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════
// Helpers
// ═══════════════════════════════════════════════════════════════════

fn point(month: &str, order: i32, value: f64) -> ChartPoint {
    ChartPoint::new(month, order, value)
}

/// A document record created `day` days into January 2024.
fn doc(name: &str, day: u32) -> DocumentRecord {
    DocumentRecord {
        id: Uuid::new_v4(),
        name: name.to_string(),
        file_path: format!("cartas/{name}"),
        file_url: format!("https://cdn.test/cartas/{name}"),
        created_at: Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap(),
    }
}

fn core_with(store: MockContentStore) -> SiteCore {
    SiteCore::with_backends(
        SiteConfig::new("https://example.supabase.co", "anon"),
        Box::new(StubIdentity),
        Box::new(store),
        Box::new(StubObjects),
    )
}

// ═══════════════════════════════════════════════════════════════════
//  Chart series
// ═══════════════════════════════════════════════════════════════════

#[tokio::test]
async fn chart_series_is_sorted_by_month_order_not_insertion_order() {
    let store = MockContentStore::new(
        vec![
            point("Mar", 3, 103.0),
            point("Ene", 1, 101.0),
            point("Feb", 2, 102.0),
        ],
        vec![],
    );
    let core = core_with(store);

    let series = core.fetch_chart_series().await.unwrap();
    let values: Vec<f64> = series.iter().map(|p| p.value).collect();
    let months: Vec<&str> = series.iter().map(|p| p.month.as_str()).collect();
    assert_eq!(values, vec![101.0, 102.0, 103.0]);
    assert_eq!(months, vec!["Ene", "Feb", "Mar"]);
}

#[tokio::test]
async fn empty_chart_store_yields_empty_series_not_error() {
    let core = core_with(MockContentStore::new(vec![], vec![]));
    let series = core.fetch_chart_series().await.unwrap();
    assert!(series.is_empty());
}

// ═══════════════════════════════════════════════════════════════════
//  Latest document
// ═══════════════════════════════════════════════════════════════════

#[tokio::test]
async fn no_documents_yields_absence() {
    let core = core_with(MockContentStore::new(vec![], vec![]));
    assert!(core.fetch_latest_document().await.unwrap().is_none());
}

#[tokio::test]
async fn latest_document_is_the_max_creation_timestamp() {
    let store = MockContentStore::new(
        vec![],
        vec![doc("enero.pdf", 5), doc("marzo.pdf", 20), doc("febrero.pdf", 12)],
    );
    let core = core_with(store);

    let latest = core.fetch_latest_document().await.unwrap().unwrap();
    assert_eq!(latest.name, "marzo.pdf");
}

#[tokio::test]
async fn document_list_is_newest_first() {
    let store = MockContentStore::new(
        vec![],
        vec![doc("enero.pdf", 5), doc("marzo.pdf", 20), doc("febrero.pdf", 12)],
    );
    let core = core_with(store);

    let names: Vec<String> = core
        .list_documents()
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.name)
        .collect();
    assert_eq!(names, vec!["marzo.pdf", "febrero.pdf", "enero.pdf"]);
}

// ═══════════════════════════════════════════════════════════════════
//  Overview (concurrent fetch, independent degradation)
// ═══════════════════════════════════════════════════════════════════

#[tokio::test]
async fn overview_carries_both_sides_when_healthy() {
    let store = MockContentStore::new(vec![point("Ene", 1, 100.0)], vec![doc("carta.pdf", 1)]);
    let core = core_with(store);

    let overview = core.fetch_overview().await;
    assert_eq!(overview.chart.len(), 1);
    assert_eq!(overview.latest_document.unwrap().name, "carta.pdf");
}

#[tokio::test]
async fn failed_chart_fetch_degrades_to_empty_without_touching_document() {
    let core = core_with(MockContentStore::failing(true, false));

    let overview = core.fetch_overview().await;
    assert!(overview.chart.is_empty());
    assert!(overview.latest_document.is_some());
}

#[tokio::test]
async fn failed_document_fetch_degrades_to_absence_without_touching_chart() {
    let core = core_with(MockContentStore::failing(false, true));

    let overview = core.fetch_overview().await;
    assert_eq!(overview.chart.len(), 1);
    assert!(overview.latest_document.is_none());
}
