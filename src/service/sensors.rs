//! Sensors, their location and deployments, and the measurements they record.

use crate::error::AppError;
use crate::model::{
    Deployment, Location, Measurement, MeasurementView, NewMeasurement, NewSensor, Sensor, SensorDetail,
};
use crate::service::Lookup;
use crate::store::insert_returning_id;
use sqlx::SqlitePool;

pub struct SensorService;

impl SensorService {
    /// `(name, model)` for every sensor, in insertion order.
    pub async fn list_sensors(pool: &SqlitePool) -> Result<Vec<(String, String)>, AppError> {
        let rows = sqlx::query_as::<_, (String, String)>("SELECT name, model FROM sensor ORDER BY id")
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    pub async fn create_sensor(pool: &SqlitePool, new: &NewSensor) -> Result<i64, AppError> {
        let conflict = format!("sensor '{}' already exists", new.name);
        if Lookup::find_sensor(pool, &new.name).await?.is_some() {
            return Err(AppError::Conflict(conflict));
        }
        let q = sqlx::query("INSERT INTO sensor (name, model) VALUES (?, ?)")
            .bind(new.name.as_str())
            .bind(new.model.as_str());
        let id = insert_returning_id(pool, q, &conflict).await?;
        tracing::info!(sensor_id = id, name = %new.name, "sensor created");
        Ok(id)
    }

    pub async fn detail(pool: &SqlitePool, sensor: &Sensor) -> Result<SensorDetail, AppError> {
        let location = match sensor.location_id {
            Some(location_id) => {
                sqlx::query_as::<_, Location>(
                    "SELECT id, name, latitude, longitude, altitude, description FROM location WHERE id = ?",
                )
                .bind(location_id)
                .fetch_optional(pool)
                .await?
            }
            None => None,
        };
        let deployments = sqlx::query_as::<_, Deployment>(
            r#"SELECT d.id, d."start", d."end", d.name
               FROM deployment d
               JOIN deployments ds ON ds.deployment_id = d.id
               WHERE ds.sensor_id = ?
               ORDER BY d."start""#,
        )
        .bind(sensor.id)
        .fetch_all(pool)
        .await?;
        Ok(SensorDetail {
            name: sensor.name.clone(),
            model: sensor.model.clone(),
            location,
            deployments,
        })
    }

    pub async fn list_measurements(pool: &SqlitePool, sensor: &Sensor) -> Result<Vec<MeasurementView>, AppError> {
        let rows = sqlx::query_as::<_, Measurement>(
            "SELECT id, sensor_id, value, time FROM measurement WHERE sensor_id = ? ORDER BY time, id",
        )
        .bind(sensor.id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(MeasurementView::from).collect())
    }

    /// Record a measurement for an already resolved sensor. If the sensor disappears
    /// between resolution and commit the foreign key rejects the row and this is a `Conflict`.
    pub async fn create_measurement(
        pool: &SqlitePool,
        sensor: &Sensor,
        new: &NewMeasurement,
    ) -> Result<i64, AppError> {
        let q = sqlx::query("INSERT INTO measurement (sensor_id, value, time) VALUES (?, ?, ?)")
            .bind(sensor.id)
            .bind(new.value)
            .bind(new.time);
        let id = insert_returning_id(pool, q, "database integrity error").await?;
        tracing::info!(measurement_id = id, sensor = %sensor.name, "measurement created");
        Ok(id)
    }

    /// Delete by id. Returns `NotFound` when the row is already gone, so a repeated delete
    /// does not report success twice.
    pub async fn delete_measurement(pool: &SqlitePool, measurement: &Measurement) -> Result<(), AppError> {
        let done = sqlx::query("DELETE FROM measurement WHERE id = ?")
            .bind(measurement.id)
            .execute(pool)
            .await?;
        if done.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("measurement '{}'", measurement.id)));
        }
        tracing::info!(measurement_id = measurement.id, "measurement deleted");
        Ok(())
    }
}
