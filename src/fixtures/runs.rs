use serde_json::{json, Value};

/// A `runs` resource owned by `namespace`.
pub fn run_response(name: &str, namespace: &str, created_at: &str, state: &str) -> Value {
    json!({
        "apiVersion": "platform.io/v1",
        "kind": "Run",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "creationTimestamp": created_at,
            "labels": {"runKind": "training"},
        },
        "spec": {
            "experiment-name": name,
            "pod-count": 1,
            "state": state,
        }
    })
}
