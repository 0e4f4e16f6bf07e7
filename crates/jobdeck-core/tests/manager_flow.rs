//! End-to-end flows for `JobListManager` against a stateful local server.
//!
//! The server is a small axum app over an in-memory job table with hit
//! counters and failure switches, so the tests can assert the
//! synchronization protocol: exactly one reload per successful mutation,
//! no local mutation on any failure path, stale-mirror retention when a
//! reload fails.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};

use jobdeck_core::{
    JobDraft, JobFilter, JobId, JobListManager, JobListView, JobRecord, JobUpdate, JobsApiClient,
    Notifier, Severity,
};

// ---------------------------------------------------------------------------
// Test server
// ---------------------------------------------------------------------------

#[derive(Default)]
struct ApiState {
    jobs: Mutex<Vec<Value>>,
    posted: Mutex<Vec<Value>>,
    next_id: AtomicI64,
    list_hits: AtomicUsize,
    fail_lists: AtomicBool,
    fail_mutations: AtomicBool,
    mutation_error: Mutex<String>,
}

impl ApiState {
    fn seeded(jobs: Vec<Value>) -> Arc<Self> {
        let state = Self {
            next_id: AtomicI64::new(jobs.len() as i64 + 1),
            jobs: Mutex::new(jobs),
            mutation_error: Mutex::new("mutation failed".to_owned()),
            ..Self::default()
        };
        Arc::new(state)
    }

    fn fail_mutations_with(&self, error: &str) {
        *self.mutation_error.lock().expect("lock") = error.to_owned();
        self.fail_mutations.store(true, Ordering::SeqCst);
    }
}

fn job_json(id: i64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "company": "Acme",
        "location": "N/A",
        "salary": "N/A",
        "job_type": "N/A",
        "description": "N/A",
        "posted_date": "N/A",
        "job_url": "N/A",
        "scraped_at": null
    })
}

async fn list_jobs(State(state): State<Arc<ApiState>>) -> impl IntoResponse {
    state.list_hits.fetch_add(1, Ordering::SeqCst);
    if state.fail_lists.load(Ordering::SeqCst) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "success": false, "error": "Database connection failed" })),
        );
    }
    let jobs = state.jobs.lock().expect("lock").clone();
    let count = jobs.len();
    (
        StatusCode::OK,
        Json(json!({ "success": true, "jobs": jobs, "count": count })),
    )
}

fn mutation_failure(state: &ApiState) -> (StatusCode, Json<Value>) {
    let error = state.mutation_error.lock().expect("lock").clone();
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "success": false, "error": error })),
    )
}

async fn create_job(
    State(state): State<Arc<ApiState>>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    if state.fail_mutations.load(Ordering::SeqCst) {
        return mutation_failure(&state);
    }
    state.posted.lock().expect("lock").push(body.clone());

    let id = state.next_id.fetch_add(1, Ordering::SeqCst);
    let mut record = body;
    record["id"] = json!(id);
    state.jobs.lock().expect("lock").push(record);
    (
        StatusCode::CREATED,
        Json(json!({ "success": true, "message": "Job added successfully", "job_id": id })),
    )
}

async fn update_job(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    if state.fail_mutations.load(Ordering::SeqCst) {
        return mutation_failure(&state);
    }
    let mut jobs = state.jobs.lock().expect("lock");
    let Some(record) = jobs.iter_mut().find(|j| j["id"] == json!(id)) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "success": false, "error": "Job not found" })),
        );
    };
    for (field, value) in body.as_object().expect("object") {
        record[field.as_str()] = value.clone();
    }
    (
        StatusCode::OK,
        Json(json!({ "success": true, "message": "Job updated successfully" })),
    )
}

async fn delete_job(State(state): State<Arc<ApiState>>, Path(id): Path<i64>) -> impl IntoResponse {
    if state.fail_mutations.load(Ordering::SeqCst) {
        return mutation_failure(&state);
    }
    let mut jobs = state.jobs.lock().expect("lock");
    let before = jobs.len();
    jobs.retain(|j| j["id"] != json!(id));
    if jobs.len() == before {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "success": false, "error": "Job not found" })),
        );
    }
    (
        StatusCode::OK,
        Json(json!({ "success": true, "message": "Job deleted successfully" })),
    )
}

async fn spawn_api(state: Arc<ApiState>) -> String {
    let app = Router::new()
        .route("/api/jobs", get(list_jobs).post(create_job))
        .route("/api/jobs/:id", axum::routing::put(update_job).delete(delete_job))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

// ---------------------------------------------------------------------------
// Recording seams
// ---------------------------------------------------------------------------

#[derive(Default)]
struct ViewState {
    rows: Vec<Vec<JobId>>,
    empty_renders: usize,
    counts: Vec<u64>,
    edits_opened: Vec<JobRecord>,
    edits_closed: usize,
    adds_closed: usize,
}

#[derive(Clone, Default)]
struct SharedView(Rc<RefCell<ViewState>>);

impl JobListView for SharedView {
    fn show_jobs(&mut self, jobs: &[JobRecord]) {
        self.0
            .borrow_mut()
            .rows
            .push(jobs.iter().map(|j| j.id).collect());
    }
    fn show_empty(&mut self) {
        self.0.borrow_mut().empty_renders += 1;
    }
    fn set_count(&mut self, count: u64) {
        self.0.borrow_mut().counts.push(count);
    }
    fn open_edit_dialog(&mut self, job: &JobRecord) {
        self.0.borrow_mut().edits_opened.push(job.clone());
    }
    fn close_edit_dialog(&mut self) {
        self.0.borrow_mut().edits_closed += 1;
    }
    fn close_add_dialog(&mut self) {
        self.0.borrow_mut().adds_closed += 1;
    }
}

#[derive(Clone, Default)]
struct SharedNotifier(Rc<RefCell<Vec<(Severity, String)>>>);

impl Notifier for SharedNotifier {
    fn notify(&mut self, severity: Severity, message: &str) {
        self.0.borrow_mut().push((severity, message.to_owned()));
    }
}

struct Harness {
    manager: JobListManager<SharedView, SharedNotifier>,
    view: SharedView,
    notices: SharedNotifier,
}

async fn harness(state: &Arc<ApiState>) -> Harness {
    let base_url = spawn_api(Arc::clone(state)).await;
    let view = SharedView::default();
    let notices = SharedNotifier::default();
    let manager = JobListManager::new(
        JobsApiClient::new(base_url),
        view.clone(),
        notices.clone(),
    );
    Harness {
        manager,
        view,
        notices,
    }
}

// ---------------------------------------------------------------------------
// Flows
// ---------------------------------------------------------------------------

#[tokio::test]
async fn confirmed_delete_resynchronizes_to_empty_state() {
    let state = ApiState::seeded(vec![job_json(1, "A")]);
    let mut h = harness(&state).await;

    assert!(h.manager.load_jobs().await);
    assert_eq!(h.view.0.borrow().rows, vec![vec![JobId(1)]]);

    assert!(h.manager.delete_job(JobId(1)).await);

    assert!(h.manager.jobs().is_empty());
    assert_eq!(h.view.0.borrow().empty_renders, 1);
    assert_eq!(state.list_hits.load(Ordering::SeqCst), 2);

    let notices = h.notices.0.borrow();
    assert_eq!(notices.len(), 1);
    assert_eq!(
        notices[0],
        (Severity::Success, "Job deleted successfully!".to_owned())
    );
}

#[tokio::test]
async fn successful_add_triggers_exactly_one_reload() {
    let state = ApiState::seeded(Vec::new());
    let mut h = harness(&state).await;

    assert!(h.manager.load_jobs().await);
    assert_eq!(state.list_hits.load(Ordering::SeqCst), 1);

    assert!(h.manager.add_job(JobDraft::new("Eng", "Acme")).await);

    assert_eq!(state.list_hits.load(Ordering::SeqCst), 2);
    assert_eq!(h.view.0.borrow().adds_closed, 1);
    assert_eq!(h.manager.jobs().len(), 1);
    assert_eq!(h.manager.jobs()[0].title, "Eng");

    // Blank optional fields went over the wire as the sentinel.
    let posted = state.posted.lock().expect("lock");
    for field in [
        "location",
        "salary",
        "job_type",
        "description",
        "posted_date",
        "job_url",
    ] {
        assert_eq!(posted[0][field], "N/A", "field {field}");
    }
}

#[tokio::test]
async fn failed_update_mutates_nothing_and_notifies_once() {
    let state = ApiState::seeded(vec![job_json(1, "A")]);
    let mut h = harness(&state).await;

    assert!(h.manager.load_jobs().await);
    state.fail_mutations_with("No valid fields to update");

    assert!(
        !h.manager
            .update_job(JobId(1), JobUpdate::default())
            .await
    );

    assert_eq!(h.manager.jobs().len(), 1);
    assert_eq!(h.manager.jobs()[0].title, "A");
    assert_eq!(state.list_hits.load(Ordering::SeqCst), 1);
    assert_eq!(h.view.0.borrow().edits_closed, 0);

    let notices = h.notices.0.borrow();
    assert_eq!(notices.len(), 1);
    assert_eq!(
        notices[0],
        (
            Severity::Error,
            "Failed to update job: No valid fields to update".to_owned()
        )
    );
}

#[tokio::test]
async fn failed_reload_keeps_last_good_state() {
    let state = ApiState::seeded(vec![job_json(1, "A")]);
    let mut h = harness(&state).await;

    assert!(h.manager.load_jobs().await);
    state.fail_lists.store(true, Ordering::SeqCst);

    assert!(!h.manager.load_jobs().await);

    // The stale mirror stays on display; nothing was re-rendered.
    assert_eq!(h.manager.jobs().len(), 1);
    assert_eq!(h.view.0.borrow().rows.len(), 1);
    assert_eq!(h.view.0.borrow().empty_renders, 0);

    let notices = h.notices.0.borrow();
    assert_eq!(notices.len(), 1);
    assert_eq!(
        notices[0],
        (
            Severity::Error,
            "Failed to load jobs: Database connection failed".to_owned()
        )
    );
}

#[tokio::test]
async fn successful_update_closes_dialog_and_reloads() {
    let state = ApiState::seeded(vec![job_json(1, "A")]);
    let mut h = harness(&state).await;

    assert!(h.manager.load_jobs().await);
    let update = JobUpdate::full("A+", "Acme", "Berlin", "100k", "Full-time", "Better", "N/A");
    assert!(h.manager.update_job(JobId(1), update).await);

    assert_eq!(state.list_hits.load(Ordering::SeqCst), 2);
    assert_eq!(h.view.0.borrow().edits_closed, 1);
    assert_eq!(h.manager.jobs()[0].title, "A+");
}

#[tokio::test]
async fn edit_dialog_prefills_from_the_mirror_only() {
    let state = ApiState::seeded(vec![job_json(1, "A")]);
    let mut h = harness(&state).await;

    assert!(h.manager.load_jobs().await);

    h.manager.open_edit_dialog(JobId(1));
    assert_eq!(h.view.0.borrow().edits_opened.len(), 1);
    assert_eq!(h.view.0.borrow().edits_opened[0].title, "A");

    // Absent id: stale UI referencing a since-deleted record is a no-op.
    h.manager.open_edit_dialog(JobId(99));
    assert_eq!(h.view.0.borrow().edits_opened.len(), 1);
}

#[tokio::test]
async fn render_emits_one_row_per_record_in_order() {
    let state = ApiState::seeded(vec![job_json(2, "B"), job_json(1, "A")]);
    let mut h = harness(&state).await;

    assert!(h.manager.load_jobs().await);

    let view = h.view.0.borrow();
    assert_eq!(view.rows, vec![vec![JobId(2), JobId(1)]]);
    assert_eq!(view.counts, vec![2]);
}

#[tokio::test]
async fn failed_add_leaves_mirror_untouched() {
    let state = ApiState::seeded(Vec::new());
    let mut h = harness(&state).await;
    state.fail_mutations_with("Title and company are required fields");

    assert!(!h.manager.add_job(JobDraft::new("", "")).await);

    assert!(h.manager.jobs().is_empty());
    assert_eq!(state.list_hits.load(Ordering::SeqCst), 0);
    assert_eq!(h.view.0.borrow().adds_closed, 0);

    let notices = h.notices.0.borrow();
    assert_eq!(notices.len(), 1);
    assert_eq!(
        notices[0],
        (
            Severity::Error,
            "Failed to add job: Title and company are required fields".to_owned()
        )
    );
}
