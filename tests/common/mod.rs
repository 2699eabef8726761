//! Snapshot fixtures shared by integration tests.
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use serde_json::{Value, json};

pub fn person(id: i32, name: &str, status: &str, area: &str, hired_at: &str) -> Value {
    json!({
        "id": id,
        "full_name": name,
        "id_card": format!("09{id:08}"),
        "rank": "Agente",
        "status": status,
        "unit": { "id": 1, "name": "Unidad Central", "area": area },
        "position": "Guardia",
        "hired_at": hired_at,
        "created_at": "2023-01-01T09:00:00",
        "updated_at": "2023-01-01T09:00:00"
    })
}

pub fn deleted(mut record: Value) -> Value {
    record["deleted_at"] = json!("2024-06-01T12:00:00");
    record
}

pub fn leave(id: i32, name: &str, kind: &str, start: &str, end: &str) -> Value {
    json!({
        "id": id,
        "person": { "id": id, "full_name": name, "id_card": format!("09{id:08}") },
        "kind": kind,
        "start_date": start,
        "end_date": end,
        "created_at": "2024-01-01T09:00:00"
    })
}

pub fn roster() -> Vec<Value> {
    vec![
        person(1, "Ana Lopez", "active", "operational", "2021-05-01"),
        person(2, "Beto Ruiz", "active", "administrative", "2019-02-15"),
        deleted(person(3, "Carla Mendez", "retired", "operational", "2010-09-01")),
        person(4, "Mariana Paz", "on_leave", "operational", "2023-11-20"),
        deleted(person(5, "Diego Ortiz", "suspended", "administrative", "2015-07-07")),
    ]
}

pub fn write_collection(dir: &Path, file: &str, records: &[Value]) {
    let body = serde_json::to_string_pretty(records).expect("serialize fixture");
    fs::write(dir.join(file), body).expect("write fixture");
}
