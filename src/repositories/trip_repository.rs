use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::trip::{NewTrip, Trip};
use crate::repositories::{like_pattern, map_insert_error};
use crate::utils::errors::AppError;

pub struct TripRepository {
    pool: SqlitePool,
}

impl TripRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Crear la tabla del servicio si no existe todavía
    ///
    /// `route_id` es una columna TEXT sin foreign key: la referencia se
    /// resuelve contra el servicio de rutas, no en el almacenamiento.
    pub async fn init_schema(&self) -> Result<(), AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS trips (
                trip_id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                vehicle_id TEXT NOT NULL,
                driver_name TEXT NOT NULL,
                trip_distance TEXT NOT NULL,
                route_id TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn create(&self, new_trip: NewTrip) -> Result<Trip, AppError> {
        let trip = sqlx::query_as::<_, Trip>(
            r#"
            INSERT INTO trips (trip_id, user_id, vehicle_id, driver_name, trip_distance, route_id, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            RETURNING *
            "#,
        )
        .bind(&new_trip.trip_id)
        .bind(&new_trip.user_id)
        .bind(&new_trip.vehicle_id)
        .bind(&new_trip.driver_name)
        .bind(new_trip.trip_distance.to_string())
        .bind(&new_trip.route_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, "Trip", "trip_id", &new_trip.trip_id))?;

        Ok(trip)
    }

    pub async fn find_by_id(&self, trip_id: &str) -> Result<Option<Trip>, AppError> {
        let trip = sqlx::query_as::<_, Trip>("SELECT * FROM trips WHERE trip_id = ?1")
            .bind(trip_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(trip)
    }

    /// Como máximo un Trip por route_id; el check es previo a la escritura
    pub async fn route_reference_exists(&self, route_id: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM trips WHERE route_id = ?1)")
                .bind(route_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    /// Filtro del listado: icontains sobre los campos locales de texto,
    /// igualdad exacta sobre los dos identificadores
    pub async fn search(&self, query: Option<&str>) -> Result<Vec<Trip>, AppError> {
        let pattern = query.map(like_pattern);
        let trips = sqlx::query_as::<_, Trip>(
            r#"
            SELECT * FROM trips
            WHERE (?1 IS NULL
                OR driver_name LIKE ?2 ESCAPE '\'
                OR user_id LIKE ?2 ESCAPE '\'
                OR vehicle_id LIKE ?2 ESCAPE '\'
                OR trip_id = ?1
                OR route_id = ?1)
            "#,
        )
        .bind(query)
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(trips)
    }
}
