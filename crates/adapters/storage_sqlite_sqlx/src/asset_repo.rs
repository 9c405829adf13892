//! `SQLite` implementation of [`AssetRepository`].

use std::future::Future;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use assethub_app::ports::AssetRepository;
use assethub_domain::asset::{Asset, RegisteredAsset};
use assethub_domain::error::AssetHubError;
use assethub_domain::id::AssetId;
use assethub_domain::time::Timestamp;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`RegisteredAsset`].
struct Wrapper(RegisteredAsset);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<RegisteredAsset> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let created_at: String = row.try_get("created_at")?;

        let id = AssetId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let created_at = DateTime::parse_from_rfc3339(&created_at)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?
            .with_timezone(&Utc);

        Ok(Self(RegisteredAsset {
            id,
            asset: Asset {
                asset_name: row.try_get("asset_name")?,
                asset_type: row.try_get("asset_type")?,
                serial_number: row.try_get("serial_number")?,
                purchase_date: row.try_get("purchase_date")?,
                asset_status: row.try_get("asset_status")?,
                assigned_to: row.try_get("assigned_to")?,
                department: row.try_get("department")?,
            },
            created_at,
        }))
    }
}

/// Fixed-width RFC 3339 so that text ordering matches time ordering.
fn encode_timestamp(ts: Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

const INSERT: &str = "INSERT INTO assets (id, asset_name, asset_type, serial_number, purchase_date, asset_status, assigned_to, department, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM assets WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM assets ORDER BY created_at DESC, rowid DESC";

/// `SQLite`-backed asset repository.
pub struct SqliteAssetRepository {
    pool: SqlitePool,
}

impl SqliteAssetRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl AssetRepository for SqliteAssetRepository {
    fn create(
        &self,
        asset: RegisteredAsset,
    ) -> impl Future<Output = Result<RegisteredAsset, AssetHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(asset.id.to_string())
                .bind(&asset.asset.asset_name)
                .bind(&asset.asset.asset_type)
                .bind(&asset.asset.serial_number)
                .bind(&asset.asset.purchase_date)
                .bind(&asset.asset.asset_status)
                .bind(asset.asset.assigned_to.as_deref())
                .bind(&asset.asset.department)
                .bind(encode_timestamp(asset.created_at))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(asset)
        }
    }

    fn get_by_id(
        &self,
        id: AssetId,
    ) -> impl Future<Output = Result<Option<RegisteredAsset>, AssetHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<RegisteredAsset>, AssetHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteAssetRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteAssetRepository::new(db.pool().clone())
    }

    fn laptop() -> Asset {
        Asset::builder()
            .asset_name("ThinkPad X1")
            .asset_type("laptop")
            .serial_number("SN-0042")
            .purchase_date("2024-03-01")
            .asset_status("in_use")
            .assigned_to("alice")
            .department("engineering")
            .build()
            .unwrap()
    }

    fn at(hour: u32) -> Timestamp {
        Utc.with_ymd_and_hms(2026, 1, 15, hour, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn should_create_and_retrieve_asset_when_valid() {
        let repo = setup().await;
        let registered = RegisteredAsset::stamp(laptop(), at(10));
        let id = registered.id;

        repo.create(registered.clone()).await.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched, registered);
    }

    #[tokio::test]
    async fn should_store_missing_assignee_as_null() {
        let repo = setup().await;
        let mut asset = laptop();
        asset.assigned_to = None;
        let registered = RegisteredAsset::stamp(asset, at(10));
        let id = registered.id;

        repo.create(registered).await.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.asset.assigned_to, None);
    }

    #[tokio::test]
    async fn should_return_none_when_asset_not_found() {
        let repo = setup().await;
        let result = repo.get_by_id(AssetId::new()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_list_assets_newest_first() {
        let repo = setup().await;
        let older = RegisteredAsset::stamp(laptop(), at(9));
        let newer = RegisteredAsset::stamp(laptop(), at(11));
        repo.create(older.clone()).await.unwrap();
        repo.create(newer.clone()).await.unwrap();

        let all = repo.get_all().await.unwrap();
        let ids: Vec<AssetId> = all.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![newer.id, older.id]);
    }

    #[tokio::test]
    async fn should_keep_both_records_when_registering_twice() {
        let repo = setup().await;
        repo.create(RegisteredAsset::stamp(laptop(), at(10)))
            .await
            .unwrap();
        repo.create(RegisteredAsset::stamp(laptop(), at(10)))
            .await
            .unwrap();

        assert_eq!(repo.get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_reject_duplicate_id_with_storage_error() {
        let repo = setup().await;
        let registered = RegisteredAsset::stamp(laptop(), at(10));
        repo.create(registered.clone()).await.unwrap();

        let result = repo.create(registered).await;
        assert!(matches!(result, Err(AssetHubError::Storage(_))));
    }
}
