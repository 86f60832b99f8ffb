use chrono::Utc;
use sqlx::types::Json;
use sqlx::SqlitePool;

use crate::models::route::{NewRoute, Route};
use crate::repositories::{like_pattern, map_insert_error};
use crate::utils::errors::AppError;

pub struct RouteRepository {
    pool: SqlitePool,
}

impl RouteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Crear la tabla del servicio si no existe todavía
    pub async fn init_schema(&self) -> Result<(), AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS routes (
                route_id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                route_name TEXT NOT NULL,
                route_origin TEXT NOT NULL,
                route_destination TEXT NOT NULL,
                stops TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn create(&self, new_route: NewRoute) -> Result<Route, AppError> {
        let route = sqlx::query_as::<_, Route>(
            r#"
            INSERT INTO routes (route_id, user_id, route_name, route_origin, route_destination, stops, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            RETURNING *
            "#,
        )
        .bind(&new_route.route_id)
        .bind(&new_route.user_id)
        .bind(&new_route.route_name)
        .bind(&new_route.route_origin)
        .bind(&new_route.route_destination)
        .bind(Json(&new_route.stops))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, "Route", "route_id", &new_route.route_id))?;

        Ok(route)
    }

    pub async fn find_by_id(&self, route_id: &str) -> Result<Option<Route>, AppError> {
        let route = sqlx::query_as::<_, Route>("SELECT * FROM routes WHERE route_id = ?1")
            .bind(route_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(route)
    }

    /// Filtro icontains con OR sobre la whitelist de campos de búsqueda,
    /// más orden por la columna ya validada por el controller
    pub async fn search(&self, query: Option<&str>, order_by: &str) -> Result<Vec<Route>, AppError> {
        let sql = format!(
            r#"
            SELECT * FROM routes
            WHERE (?1 IS NULL
                OR route_id LIKE ?2 ESCAPE '\'
                OR route_name LIKE ?2 ESCAPE '\'
                OR route_origin LIKE ?2 ESCAPE '\'
                OR route_destination LIKE ?2 ESCAPE '\')
            ORDER BY {}
            "#,
            order_by
        );

        let pattern = query.map(like_pattern);
        let routes = sqlx::query_as::<_, Route>(&sql)
            .bind(query)
            .bind(pattern)
            .fetch_all(&self.pool)
            .await?;

        Ok(routes)
    }
}
