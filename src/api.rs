//! Update Endpoint Client
//!
//! Posts single-field updates back to the host and serializes them per
//! card. Optimistic UI: callers patch the store and DOM before the call
//! resolves, and a failure surfaces a notification without reverting the
//! local state.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::{Arc, Mutex};

use leptos::task::spawn_local;
use serde_json::{json, Value};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// One field change for one record
#[derive(Clone, Debug, PartialEq)]
pub struct FieldUpdate {
    pub data_id: i64,
    pub table_name: String,
    pub update_url: String,
    /// Storage name of the field being set
    pub field_name: String,
    pub value: Value,
}

pub type UpdateResult = Result<(), String>;

/// JSON body of the update call, as the host endpoint expects it
pub fn update_body(update: &FieldUpdate, csrf_token: &str) -> String {
    let mut value = serde_json::Map::new();
    value.insert(update.field_name.clone(), update.value.clone());
    json!({
        "_token": csrf_token,
        "value": value,
        "id": update.data_id,
        "table_name": update.table_name,
    })
    .to_string()
}

/// POST one update to the host. Any non-2xx status or thrown exception is
/// a failure.
pub async fn post_update(update: &FieldUpdate, csrf_token: &str) -> UpdateResult {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::SameOrigin);
    opts.set_body(&JsValue::from_str(&update_body(update, csrf_token)));

    let request =
        Request::new_with_str_and_init(&update.update_url, &opts).map_err(describe_js_error)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(describe_js_error)?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(describe_js_error)?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "unexpected fetch result".to_string())?;

    if response.ok() {
        Ok(())
    } else {
        Err(format!("update failed with status {}", response.status()))
    }
}

fn describe_js_error(error: JsValue) -> String {
    error
        .as_string()
        .unwrap_or_else(|| format!("{error:?}"))
}

// ========================
// Per-card update queue
// ========================

struct QueuedUpdate {
    update: FieldUpdate,
    csrf_token: String,
    on_result: Arc<dyn Fn(UpdateResult) + Send + Sync>,
}

#[derive(Default)]
struct QueueState {
    waiting: HashMap<i64, VecDeque<QueuedUpdate>>,
    in_flight: HashSet<i64>,
}

/// Serializes update calls per card: at most one request in flight per
/// `data_id`, later edits wait their turn in FIFO order. Updates for
/// different cards run concurrently. In-flight calls cannot be cancelled;
/// the server sees last-write-wins in submission order.
#[derive(Clone, Default)]
pub struct UpdateQueue {
    state: Arc<Mutex<QueueState>>,
}

impl UpdateQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one update; `on_result` fires when its round trip resolves.
    pub fn enqueue(
        &self,
        update: FieldUpdate,
        csrf_token: String,
        on_result: impl Fn(UpdateResult) + Send + Sync + 'static,
    ) {
        let data_id = update.data_id;
        let start_drain = {
            let mut state = self.state.lock().unwrap();
            state.waiting.entry(data_id).or_default().push_back(QueuedUpdate {
                update,
                csrf_token,
                on_result: Arc::new(on_result),
            });
            state.in_flight.insert(data_id)
        };
        if start_drain {
            let queue = self.clone();
            spawn_local(async move { queue.drain(data_id).await });
        }
    }

    async fn drain(&self, data_id: i64) {
        loop {
            // borrow must end before the network await
            let next = {
                let mut state = self.state.lock().unwrap();
                let next = state.waiting.get_mut(&data_id).and_then(|q| q.pop_front());
                if next.is_none() {
                    state.in_flight.remove(&data_id);
                    state.waiting.remove(&data_id);
                }
                next
            };
            let Some(queued) = next else { return };
            let result = post_update(&queued.update, &queued.csrf_token).await;
            (queued.on_result)(result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_between_columns_issues_the_target_key() {
        // card moved from column key "1" to column key "2"
        let update = FieldUpdate {
            data_id: 7,
            table_name: "tasks".into(),
            update_url: "https://admin.example.com/plugins/kanban/update".into(),
            field_name: "status".into(),
            value: json!("2"),
        };
        let body: Value = serde_json::from_str(&update_body(&update, "tok-123")).unwrap();
        assert_eq!(body["value"], json!({"status": "2"}));
        assert_eq!(body["id"], json!(7));
        assert_eq!(body["table_name"], json!("tasks"));
        assert_eq!(body["_token"], json!("tok-123"));
    }

    #[test]
    fn tag_update_sends_the_full_selection_list() {
        let update = FieldUpdate {
            data_id: 7,
            table_name: "tasks".into(),
            update_url: "https://admin.example.com/plugins/kanban/update".into(),
            field_name: "labels".into(),
            value: json!(["urgent", "blocked"]),
        };
        let body: Value = serde_json::from_str(&update_body(&update, "tok")).unwrap();
        assert_eq!(body["value"]["labels"], json!(["urgent", "blocked"]));
    }
}
