//! Job record types
//!
//! - `JobFields`: what the operator enters (new-job / edit form)
//! - `Job`: a persisted record (fields + assigned id + derived distance)
//!
//! On-disk names are camelCase. The Portuguese keys written by the old
//! browser tool are accepted as aliases so exported data can be loaded as-is.

use crate::error::{Error, Result};
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Record identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub u64);

impl JobId {
    /// Last six digits, as printed on receipts
    pub fn short(&self) -> String {
        let s = self.0.to_string();
        let start = s.len().saturating_sub(6);
        s[start..].to_string()
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for JobId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim().trim_start_matches('#').parse().map(JobId)
    }
}

/// A logged transport job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,

    #[serde(alias = "data")]
    pub date: NaiveDate,

    #[serde(alias = "contratante")]
    pub client: String,

    #[serde(alias = "local")]
    pub origin: String,

    #[serde(default, alias = "kmSaida", deserialize_with = "number_or_zero")]
    pub odometer_start: f64,

    #[serde(default, alias = "kmChegada", deserialize_with = "number_or_zero")]
    pub odometer_end: f64,

    /// Derived, see [`compute_distance`]
    #[serde(default, alias = "kmTotal")]
    pub distance: Option<f64>,

    #[serde(default, alias = "horarioSaida")]
    pub departure_time: String,

    #[serde(default, alias = "horarioChegada")]
    pub arrival_time: String,

    #[serde(default, alias = "valorTotal", deserialize_with = "number_or_zero")]
    pub total_value: f64,

    #[serde(default, alias = "pedagio")]
    pub toll: Option<f64>,

    #[serde(default, alias = "numeroFrota")]
    pub fleet_number: String,

    #[serde(default, alias = "observacao")]
    pub note: Option<String>,

    #[serde(alias = "motorista")]
    pub driver: String,

    #[serde(default, alias = "responsavel")]
    pub responsible: Option<String>,
}

/// Operator input for create/update
#[derive(Debug, Clone, PartialEq)]
pub struct JobFields {
    pub date: NaiveDate,
    pub client: String,
    pub origin: String,
    pub odometer_start: f64,
    pub odometer_end: f64,
    pub departure_time: String,
    pub arrival_time: String,
    pub total_value: f64,
    pub toll: Option<f64>,
    pub fleet_number: String,
    pub note: Option<String>,
    pub driver: String,
    pub responsible: Option<String>,
}

/// Kilometers traveled, rounded to one decimal.
///
/// `None` when the end reading is not past the start reading.
pub fn compute_distance(odometer_start: f64, odometer_end: f64) -> Option<f64> {
    let distance = ((odometer_end - odometer_start) * 10.0).round() / 10.0;
    if distance.is_finite() && distance > 0.0 {
        Some(distance)
    } else {
        None
    }
}

impl Job {
    pub fn from_fields(id: JobId, fields: JobFields) -> Self {
        let distance = compute_distance(fields.odometer_start, fields.odometer_end);
        Self {
            id,
            date: fields.date,
            client: fields.client,
            origin: fields.origin,
            odometer_start: fields.odometer_start,
            odometer_end: fields.odometer_end,
            distance,
            departure_time: fields.departure_time,
            arrival_time: fields.arrival_time,
            total_value: fields.total_value,
            toll: fields.toll,
            fleet_number: fields.fleet_number,
            note: fields.note,
            driver: fields.driver,
            responsible: fields.responsible,
        }
    }

    /// Editable fields of this record (edit form prefill)
    pub fn fields(&self) -> JobFields {
        JobFields {
            date: self.date,
            client: self.client.clone(),
            origin: self.origin.clone(),
            odometer_start: self.odometer_start,
            odometer_end: self.odometer_end,
            departure_time: self.departure_time.clone(),
            arrival_time: self.arrival_time.clone(),
            total_value: self.total_value,
            toll: self.toll,
            fleet_number: self.fleet_number.clone(),
            note: self.note.clone(),
            driver: self.driver.clone(),
            responsible: self.responsible.clone(),
        }
    }

    pub fn refresh_distance(&mut self) {
        self.distance = compute_distance(self.odometer_start, self.odometer_end);
    }

    /// Brings a stored record in line with what `create` would have written:
    /// derived distance, blank optionals as `None`, no zero toll.
    pub fn normalize_stored(&mut self) {
        self.refresh_distance();
        self.note = non_empty(self.note.take());
        self.responsible = non_empty(self.responsible.take());
        self.toll = self.charged_toll();
    }

    /// Toll amount when one was charged
    pub fn charged_toll(&self) -> Option<f64> {
        self.toll.filter(|t| *t > 0.0)
    }
}

impl JobFields {
    /// Trims text, drops empty optionals and zero tolls.
    pub fn normalized(self) -> Self {
        Self {
            client: self.client.trim().to_string(),
            origin: self.origin.trim().to_string(),
            departure_time: self.departure_time.trim().to_string(),
            arrival_time: self.arrival_time.trim().to_string(),
            toll: self.toll.filter(|t| *t != 0.0),
            fleet_number: self.fleet_number.trim().to_string(),
            note: non_empty(self.note),
            driver: self.driver.trim().to_string(),
            responsible: non_empty(self.responsible),
            ..self
        }
    }

    pub fn validate(&self) -> Result<()> {
        require_text("client", &self.client)?;
        require_text("origin", &self.origin)?;
        require_text("fleetNumber", &self.fleet_number)?;
        require_text("driver", &self.driver)?;

        require_amount("odometerStart", self.odometer_start)?;
        require_amount("odometerEnd", self.odometer_end)?;
        require_amount("totalValue", self.total_value)?;
        if let Some(toll) = self.toll {
            require_amount("toll", toll)?;
        }

        check_time("departureTime", &self.departure_time)?;
        check_time("arrivalTime", &self.arrival_time)?;
        Ok(())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn require_text(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::validation(field, "required"));
    }
    Ok(())
}

fn require_amount(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::validation(field, "not a number"));
    }
    if value < 0.0 {
        return Err(Error::validation(field, format!("must not be negative ({})", value)));
    }
    Ok(())
}

/// Times are optional, but when given must read `HH:MM`.
fn check_time(field: &'static str, value: &str) -> Result<()> {
    lazy_static::lazy_static! {
        static ref TIME_RE: Regex = Regex::new(r"^([01]?\d|2[0-3]):[0-5]\d$").unwrap();
    }

    if value.is_empty() || TIME_RE.is_match(value) {
        Ok(())
    } else {
        Err(Error::validation(field, format!("expected HH:MM, got {:?}", value)))
    }
}

/// The browser tool stored `NaN` readings, which JSON turns into `null`.
fn number_or_zero<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_fields() -> JobFields {
        JobFields {
            date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            client: "Porto Seguro".to_string(),
            origin: "Santos".to_string(),
            odometer_start: 1000.0,
            odometer_end: 1100.0,
            departure_time: "08:00".to_string(),
            arrival_time: "11:30".to_string(),
            total_value: 1000.0,
            toll: Some(45.9),
            fleet_number: "F-12".to_string(),
            note: None,
            driver: "João".to_string(),
            responsible: None,
        }
    }

    #[test]
    fn test_compute_distance() {
        assert_eq!(compute_distance(1000.0, 1100.0), Some(100.0));
        assert_eq!(compute_distance(1000.0, 1000.0), None);
        assert_eq!(compute_distance(1100.0, 1000.0), None);
        assert_eq!(compute_distance(0.0, 0.0), None);
        assert_eq!(compute_distance(1000.2, 1234.5), Some(234.3));
        assert_eq!(compute_distance(0.0, f64::NAN), None);
        // rounds to zero, so no distance
        assert_eq!(compute_distance(100.0, 100.04), None);
        assert_eq!(compute_distance(100.0, 100.06), Some(0.1));
    }

    #[test]
    fn test_job_id_short() {
        assert_eq!(JobId(1735689600123).short(), "600123");
        assert_eq!(JobId(42).short(), "42");
    }

    #[test]
    fn test_job_id_from_str() {
        assert_eq!("17".parse::<JobId>().unwrap(), JobId(17));
        assert_eq!("#17".parse::<JobId>().unwrap(), JobId(17));
        assert!("abc".parse::<JobId>().is_err());
    }

    #[test]
    fn test_from_fields_derives_distance() {
        let job = Job::from_fields(JobId(1), sample_fields());
        assert_eq!(job.distance, Some(100.0));
        assert_eq!(job.fields(), sample_fields());
    }

    #[test]
    fn test_normalized() {
        let fields = JobFields {
            client: "  Porto Seguro ".to_string(),
            note: Some("   ".to_string()),
            responsible: Some(" Ana ".to_string()),
            toll: Some(0.0),
            ..sample_fields()
        }
        .normalized();

        assert_eq!(fields.client, "Porto Seguro");
        assert_eq!(fields.note, None);
        assert_eq!(fields.responsible.as_deref(), Some("Ana"));
        assert_eq!(fields.toll, None);
    }

    #[test]
    fn test_validate_required_text() {
        for blank in ["", "   "] {
            let fields = JobFields { driver: blank.to_string(), ..sample_fields() };
            let err = fields.validate().unwrap_err();
            assert!(matches!(err, Error::Validation { field: "driver", .. }));
        }

        let fields = JobFields { fleet_number: String::new(), ..sample_fields() };
        assert!(matches!(
            fields.validate(),
            Err(Error::Validation { field: "fleetNumber", .. })
        ));
    }

    #[test]
    fn test_validate_amounts() {
        let fields = JobFields { odometer_start: -1.0, ..sample_fields() };
        assert!(matches!(
            fields.validate(),
            Err(Error::Validation { field: "odometerStart", .. })
        ));

        let fields = JobFields { total_value: f64::NAN, ..sample_fields() };
        assert!(matches!(
            fields.validate(),
            Err(Error::Validation { field: "totalValue", .. })
        ));

        let fields = JobFields { toll: Some(-5.0), ..sample_fields() };
        assert!(matches!(
            fields.validate(),
            Err(Error::Validation { field: "toll", .. })
        ));

        assert!(sample_fields().validate().is_ok());
    }

    #[test]
    fn test_validate_times() {
        let fields = JobFields { arrival_time: "25:00".to_string(), ..sample_fields() };
        assert!(matches!(
            fields.validate(),
            Err(Error::Validation { field: "arrivalTime", .. })
        ));

        // arrival before departure is accepted
        let fields = JobFields {
            departure_time: "18:00".to_string(),
            arrival_time: "7:05".to_string(),
            ..sample_fields()
        };
        assert!(fields.validate().is_ok());

        let fields = JobFields { departure_time: String::new(), ..sample_fields() };
        assert!(fields.validate().is_ok());
    }

    #[test]
    fn test_job_serialize_camel_case() {
        let job = Job::from_fields(JobId(7), sample_fields());
        let json = serde_json::to_string(&job).expect("serialize failed");
        assert!(json.contains("\"id\":7"));
        assert!(json.contains("\"date\":\"2025-03-14\""));
        assert!(json.contains("\"odometerStart\":1000.0"));
        assert!(json.contains("\"fleetNumber\":\"F-12\""));
        assert!(json.contains("\"distance\":100.0"));
    }

    #[test]
    fn test_job_deserialize_legacy_keys() {
        let json = r#"{
            "id": 1735689600123,
            "data": "2025-01-01",
            "contratante": "Transportes Lima",
            "local": "Campinas",
            "kmSaida": 500,
            "kmChegada": 620.5,
            "kmTotal": 120.5,
            "horarioSaida": "07:00",
            "horarioChegada": "09:15",
            "valorTotal": 850,
            "pedagio": 0,
            "numeroFrota": "12",
            "observacao": "",
            "motorista": "Carlos",
            "responsavel": ""
        }"#;

        let job: Job = serde_json::from_str(json).expect("deserialize failed");
        assert_eq!(job.id, JobId(1735689600123));
        assert_eq!(job.client, "Transportes Lima");
        assert_eq!(job.odometer_end, 620.5);
        assert_eq!(job.driver, "Carlos");
    }

    #[test]
    fn test_normalize_stored() {
        let mut job = Job::from_fields(JobId(1), sample_fields());
        job.distance = Some(999.0);
        job.note = Some("   ".to_string());
        job.responsible = Some(String::new());
        job.toll = Some(0.0);

        job.normalize_stored();
        assert_eq!(job.distance, Some(100.0));
        assert_eq!(job.note, None);
        assert_eq!(job.responsible, None);
        assert_eq!(job.toll, None);

        let mut job = Job::from_fields(JobId(2), sample_fields());
        job.note = Some(" Carga frágil ".to_string());
        job.normalize_stored();
        assert_eq!(job.note.as_deref(), Some("Carga frágil"));
        assert_eq!(job.toll, Some(45.9));
    }

    #[test]
    fn test_job_deserialize_null_readings() {
        let json = r#"{
            "id": 1,
            "date": "2025-01-01",
            "client": "A",
            "origin": "B",
            "odometerStart": null,
            "odometerEnd": null,
            "distance": null,
            "totalValue": 10,
            "driver": "C"
        }"#;

        let job: Job = serde_json::from_str(json).expect("deserialize failed");
        assert_eq!(job.odometer_start, 0.0);
        assert_eq!(job.distance, None);
        assert_eq!(job.fleet_number, "");
    }
}
