use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::booking::{Booking, NewBooking};
use crate::repositories::{like_pattern, map_insert_error};
use crate::utils::errors::AppError;

pub struct BookingRepository {
    pool: SqlitePool,
}

impl BookingRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Crear la tabla del servicio si no existe todavía
    pub async fn init_schema(&self) -> Result<(), AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS bookings (
                ticket_id TEXT PRIMARY KEY,
                trip_id TEXT NOT NULL,
                traveller_name TEXT NOT NULL,
                traveller_number TEXT NOT NULL,
                ticket_cost TEXT NOT NULL,
                traveller_email TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn create(&self, new_booking: NewBooking) -> Result<Booking, AppError> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (ticket_id, trip_id, traveller_name, traveller_number, ticket_cost, traveller_email, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            RETURNING *
            "#,
        )
        .bind(&new_booking.ticket_id)
        .bind(&new_booking.trip_id)
        .bind(&new_booking.traveller_name)
        .bind(&new_booking.traveller_number)
        .bind(new_booking.ticket_cost.to_string())
        .bind(&new_booking.traveller_email)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, "Booking", "ticket_id", &new_booking.ticket_id))?;

        Ok(booking)
    }

    pub async fn find_by_id(&self, ticket_id: &str) -> Result<Option<Booking>, AppError> {
        let booking = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE ticket_id = ?1")
            .bind(ticket_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(booking)
    }

    /// Como máximo un Booking por trip_id; el check es previo a la escritura
    pub async fn trip_reference_exists(&self, trip_id: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM bookings WHERE trip_id = ?1)")
                .bind(trip_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    /// Filtro icontains con OR sobre todos los campos del listado, más
    /// orden por la columna ya validada por el controller
    pub async fn search(
        &self,
        query: Option<&str>,
        order_by: &str,
    ) -> Result<Vec<Booking>, AppError> {
        let sql = format!(
            r#"
            SELECT * FROM bookings
            WHERE (?1 IS NULL
                OR traveller_name LIKE ?2 ESCAPE '\'
                OR ticket_id LIKE ?2 ESCAPE '\'
                OR ticket_cost LIKE ?2 ESCAPE '\'
                OR traveller_number LIKE ?2 ESCAPE '\'
                OR traveller_email LIKE ?2 ESCAPE '\'
                OR trip_id LIKE ?2 ESCAPE '\')
            ORDER BY {}
            "#,
            order_by
        );

        let pattern = query.map(like_pattern);
        let bookings = sqlx::query_as::<_, Booking>(&sql)
            .bind(query)
            .bind(pattern)
            .fetch_all(&self.pool)
            .await?;

        Ok(bookings)
    }
}
