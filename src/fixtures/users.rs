use serde_json::{json, Value};

/// A `users` resource the way the platform API returns it.
pub fn user_response(name: &str, uid: u32, state: &str, created_at: &str) -> Value {
    json!({
        "apiVersion": "platform.io/v1",
        "kind": "User",
        "metadata": {
            "name": name,
            "creationTimestamp": created_at,
            "generation": 1,
            "resourceVersion": "4242",
        },
        "spec": {
            "uid": uid,
            "state": state,
        }
    })
}

pub fn users_list_response(users: Vec<Value>) -> Value {
    json!({
        "apiVersion": "platform.io/v1",
        "kind": "UserList",
        "metadata": {"resourceVersion": "4242"},
        "items": users,
    })
}
