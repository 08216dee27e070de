//! File-backed job service tests
//!
//! Create/edit/delete through `FileStorage`, reopening the data directory
//! between steps.
//!
//! ## Change history
//! - 2026-10-16: blank legacy optionals, unreadable data file

use chrono::NaiveDate;
use flatbed_log::commands::open_service;
use flatbed_log::storage::FileStorage;
use flatbed_log_common::receipt::NOT_INFORMED;
use flatbed_log_common::{
    distinct_drivers, receipt_document, sorted_view, Error, JobFields, JobId, JobQuery, JobStats,
    JobStore, MoneyFormat, DEFAULT_STORAGE_KEY,
};
use tempfile::tempdir;

fn fields(day: u32, client: &str, driver: &str, km: (f64, f64), value: f64) -> JobFields {
    JobFields {
        date: NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
        client: client.to_string(),
        origin: "Santos".to_string(),
        odometer_start: km.0,
        odometer_end: km.1,
        departure_time: "08:00".to_string(),
        arrival_time: "11:30".to_string(),
        total_value: value,
        toll: None,
        fleet_number: "F-12".to_string(),
        note: None,
        driver: driver.to_string(),
        responsible: None,
    }
}

/// A created job is on disk after reopening
#[test]
fn test_create_survives_reopen() {
    let dir = tempdir().expect("Failed to create temp dir");

    let created = {
        let mut service = open_service(dir.path());
        service
            .create_at(fields(14, "Porto Seguro", "João", (1000.0, 1100.0), 1000.0), 5_000)
            .expect("create failed")
    };
    assert_eq!(created.id, JobId(5_000));
    assert_eq!(created.distance, Some(100.0));

    let reopened = open_service(dir.path());
    assert_eq!(reopened.jobs(), &[created]);
    assert!(dir.path().join(format!("{}.json", DEFAULT_STORAGE_KEY)).exists());
}

/// Edits and deletes reach the file
#[test]
fn test_edit_and_delete_persist() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut service = open_service(dir.path());

    let a = service
        .create_at(fields(10, "Porto Seguro", "João", (0.0, 50.0), 100.0), 1)
        .unwrap();
    let b = service
        .create_at(fields(12, "Auto Guincho", "Maria", (0.0, 30.0), 80.0), 1)
        .unwrap();
    assert_eq!(b.id, JobId(2));

    let mut changed = a.fields();
    changed.odometer_end = 75.0;
    service.update(a.id, changed).unwrap();
    assert!(service.delete(b.id).unwrap());
    assert!(!service.delete(b.id).unwrap());

    let reopened = open_service(dir.path());
    assert_eq!(reopened.jobs().len(), 1);
    assert_eq!(reopened.jobs()[0].id, a.id);
    assert_eq!(reopened.jobs()[0].distance, Some(75.0));
}

#[test]
fn test_update_unknown_id() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut service = open_service(dir.path());

    let err = service
        .update(JobId(42), fields(1, "X", "Y", (0.0, 1.0), 1.0))
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(JobId(42))));
    assert!(service.jobs().is_empty());
}

/// Validation failures never create the data file
#[test]
fn test_rejected_fields_are_not_written() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut service = open_service(dir.path());

    let err = service
        .create(fields(1, "   ", "João", (0.0, 10.0), 10.0))
        .unwrap_err();
    assert!(matches!(err, Error::Validation { field: "client", .. }));
    assert!(!dir.path().join(format!("{}.json", DEFAULT_STORAGE_KEY)).exists());
}

/// Bare array with Portuguese keys from the browser version
#[test]
fn test_legacy_file_is_read() {
    let dir = tempdir().expect("Failed to create temp dir");
    let legacy = r#"[
        {
            "id": 1710400000000,
            "data": "2025-03-14",
            "contratante": "Porto Seguro",
            "local": "Santos",
            "kmSaida": 1000,
            "kmChegada": 1100.5,
            "kmTotal": 999,
            "horarioSaida": "08:00",
            "horarioChegada": "11:30",
            "valorTotal": 1234.5,
            "pedagio": 45.9,
            "numeroFrota": "F-12",
            "observacao": "",
            "motorista": "João"
        }
    ]"#;
    std::fs::write(dir.path().join(format!("{}.json", DEFAULT_STORAGE_KEY)), legacy).unwrap();

    let service = open_service(dir.path());
    assert_eq!(service.jobs().len(), 1);

    let job = &service.jobs()[0];
    assert_eq!(job.id, JobId(1_710_400_000_000));
    assert_eq!(job.client, "Porto Seguro");
    // stored distance is ignored in favour of the readings
    assert_eq!(job.distance, Some(100.5));
    assert_eq!(job.toll, Some(45.9));
}

#[test]
fn test_corrupt_file_is_backed_up() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(format!("{}.json", DEFAULT_STORAGE_KEY));
    std::fs::write(&path, "{ not json").unwrap();

    let mut store = JobStore::new(FileStorage::new(dir.path()));
    assert!(store.load().is_empty());

    let backup = dir.path().join(format!("{}.bak.json", DEFAULT_STORAGE_KEY));
    assert_eq!(std::fs::read_to_string(backup).unwrap(), "{ not json");
}

#[test]
fn test_query_and_stats_over_file_store() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut service = open_service(dir.path());
    service
        .create_at(fields(10, "Porto Seguro", "João", (0.0, 100.0), 1000.0), 1)
        .unwrap();
    service
        .create_at(fields(20, "Auto Guincho", "Maria", (0.0, 50.0), 250.5), 2)
        .unwrap();
    service
        .create_at(fields(15, "Porto Seguro", "Maria", (10.0, 10.0), 0.0), 3)
        .unwrap();

    let service = open_service(dir.path());

    let stats = JobStats::from_jobs(service.jobs());
    assert_eq!(stats.count, 3);
    assert_eq!(stats.total_distance, 150.0);
    assert_eq!(stats.total_value, 1250.5);

    assert_eq!(distinct_drivers(service.jobs()), vec!["João", "Maria"]);

    let query = JobQuery {
        search: Some("porto".into()),
        driver: Some("Maria".into()),
    };
    let hits = query.apply(service.jobs());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, JobId(3));

    let days: Vec<u32> = sorted_view(service.jobs())
        .iter()
        .map(|j| chrono::Datelike::day(&j.date))
        .collect();
    assert_eq!(days, vec![20, 15, 10]);
}

/// Non-UTF-8 data file: kept as is, copied to `.bak`, saves refused
#[test]
fn test_unreadable_file_is_never_overwritten() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(format!("{}.json", DEFAULT_STORAGE_KEY));
    let original: Vec<u8> = vec![0xff, 0xfe, b'[', b']'];
    std::fs::write(&path, &original).unwrap();

    let mut service = open_service(dir.path());
    assert!(service.jobs().is_empty());

    let result = service.create(fields(14, "Porto Seguro", "João", (0.0, 10.0), 10.0));
    assert!(matches!(result, Err(Error::Storage(_))));
    assert!(service.jobs().is_empty());

    assert_eq!(std::fs::read(&path).unwrap(), original);
    let backup = dir.path().join(format!("{}.bak.json", DEFAULT_STORAGE_KEY));
    assert_eq!(std::fs::read(backup).unwrap(), original);
}

/// Blank `observacao`/`responsavel` print as not informed
#[test]
fn test_legacy_blank_optionals_read_as_absent() {
    let dir = tempdir().expect("Failed to create temp dir");
    let legacy = r#"[{
        "id": 1710400000000,
        "data": "2025-03-14",
        "contratante": "Porto Seguro",
        "local": "Santos",
        "kmSaida": 1000,
        "kmChegada": 1100,
        "horarioSaida": "08:00",
        "horarioChegada": "11:30",
        "valorTotal": 500,
        "pedagio": 0,
        "numeroFrota": "F-12",
        "observacao": "",
        "motorista": "João",
        "responsavel": ""
    }]"#;
    std::fs::write(dir.path().join(format!("{}.json", DEFAULT_STORAGE_KEY)), legacy).unwrap();

    let service = open_service(dir.path());
    let receipt = receipt_document(service.jobs(), JobId(1_710_400_000_000), &MoneyFormat::default())
        .expect("receipt for a stored id");
    assert_eq!(receipt.fields[3].value, NOT_INFORMED);
    assert_eq!(receipt.note, None);
    assert_eq!(receipt.toll_line, "Pedágio: R$ 0,00");
}
