use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Clone, Debug, sqlx::FromRow)]
pub struct Sensor {
    pub id: i64,
    pub name: String,
    pub model: String,
    pub location_id: Option<i64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewSensor {
    pub name: String,
    pub model: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow)]
pub struct Location {
    #[serde(skip)]
    pub id: i64,
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub altitude: Option<f64>,
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow)]
pub struct Deployment {
    #[serde(skip)]
    pub id: i64,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub name: String,
}

/// Sensor with its one-to-one location and many-to-many deployments resolved.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SensorDetail {
    pub name: String,
    pub model: String,
    pub location: Option<Location>,
    pub deployments: Vec<Deployment>,
}

/// `sensor_id` is null once the owning sensor has been deleted.
#[derive(Clone, Debug, sqlx::FromRow)]
pub struct Measurement {
    pub id: i64,
    pub sensor_id: Option<i64>,
    pub value: f64,
    pub time: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MeasurementView {
    pub id: i64,
    pub value: f64,
    pub time: NaiveDateTime,
}

impl From<Measurement> for MeasurementView {
    fn from(m: Measurement) -> Self {
        MeasurementView {
            id: m.id,
            value: m.value,
            time: m.time,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewMeasurement {
    pub value: f64,
    pub time: NaiveDateTime,
}
