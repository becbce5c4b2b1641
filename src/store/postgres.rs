//! # Postgres Pedigree Store
//!
//! sqlx-backed adapter over the register's `dog`, `relationship` and
//! `ailment_status` tables. Statuses are normalized into `ailment_status`
//! and joined on read; families are assembled per mate from the
//! `relationship` edge table.
//!
//! Every instance owns one open transaction. `commit` consumes the store;
//! dropping the store without committing rolls the whole batch back, so no
//! partial status updates ever land regardless of how the caller exits.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use crate::error::Result;
use crate::models::{Dog, DogRow, Family};
use crate::state_machine::{ConditionChannel, ConditionStatus};
use crate::store::PedigreeStore;

const DOG_SELECT: &str = r#"
    SELECT d.id, d.name, d.gender,
           s1.status AS slem_status,
           s2.status AS cecs_status,
           d.slem_infer_override,
           d.cecs_infer_override
    FROM dog d
    JOIN ailment_status s1 ON d.slem_status_id = s1.id
    JOIN ailment_status s2 ON d.cecs_status_id = s2.id
"#;

pub struct PgPedigreeStore {
    tx: Transaction<'static, Postgres>,
}

impl PgPedigreeStore {
    /// Open a transaction against the pool and scope a store to it
    pub async fn begin(pool: &PgPool) -> Result<Self> {
        let tx = pool.begin().await?;
        Ok(Self { tx })
    }

    /// Commit the underlying transaction, consuming the store
    pub async fn commit(self) -> Result<()> {
        self.tx.commit().await?;
        Ok(())
    }

    async fn fetch_dog(&mut self, id: i64) -> Result<Dog> {
        let sql = format!("{DOG_SELECT} WHERE d.id = $1");
        let row = sqlx::query_as::<_, DogRow>(&sql)
            .bind(id)
            .fetch_one(&mut *self.tx)
            .await?;
        Dog::try_from(row)
    }

    /// All dams a sire has produced children with (or vice versa)
    async fn fetch_mates(&mut self, parent_column: &str, id: i64) -> Result<Vec<Dog>> {
        let mate_column = match parent_column {
            "sire_id" => "dam_id",
            _ => "sire_id",
        };
        let sql = format!(
            r#"
            SELECT DISTINCT d.id, d.name, d.gender,
                   s1.status AS slem_status,
                   s2.status AS cecs_status,
                   d.slem_infer_override,
                   d.cecs_infer_override
            FROM relationship r
            JOIN dog d ON r.{mate_column} = d.id
            JOIN ailment_status s1 ON d.slem_status_id = s1.id
            JOIN ailment_status s2 ON d.cecs_status_id = s2.id
            WHERE r.{parent_column} = $1
            ORDER BY d.id
            "#
        );
        let rows = sqlx::query_as::<_, DogRow>(&sql)
            .bind(id)
            .fetch_all(&mut *self.tx)
            .await?;
        rows.into_iter().map(Dog::try_from).collect()
    }

    /// All children of a sire/dam pair, across every litter
    async fn fetch_children(&mut self, sire_id: i64, dam_id: i64) -> Result<Vec<Dog>> {
        let sql = format!(
            r#"
            SELECT d.id, d.name, d.gender,
                   s1.status AS slem_status,
                   s2.status AS cecs_status,
                   d.slem_infer_override,
                   d.cecs_infer_override
            FROM relationship r
            JOIN dog d ON r.child_id = d.id
            JOIN ailment_status s1 ON d.slem_status_id = s1.id
            JOIN ailment_status s2 ON d.cecs_status_id = s2.id
            WHERE r.sire_id = $1 AND r.dam_id = $2
            ORDER BY d.id
            "#
        );
        let rows = sqlx::query_as::<_, DogRow>(&sql)
            .bind(sire_id)
            .bind(dam_id)
            .fetch_all(&mut *self.tx)
            .await?;
        rows.into_iter().map(Dog::try_from).collect()
    }
}

#[async_trait]
impl PedigreeStore for PgPedigreeStore {
    async fn root_dogs(&mut self) -> Result<Vec<Dog>> {
        let sql = format!(
            r#"{DOG_SELECT}
            WHERE NOT EXISTS (
                SELECT 1 FROM relationship r WHERE r.child_id = d.id
            )
            ORDER BY d.id
            "#
        );
        let rows = sqlx::query_as::<_, DogRow>(&sql)
            .fetch_all(&mut *self.tx)
            .await?;
        rows.into_iter().map(Dog::try_from).collect()
    }

    async fn families_as_sire(&mut self, sire_id: i64) -> Result<Vec<Family>> {
        let sire = self.fetch_dog(sire_id).await?;
        let dams = self.fetch_mates("sire_id", sire_id).await?;

        let mut families = Vec::with_capacity(dams.len());
        for dam in dams {
            let children = self.fetch_children(sire.id, dam.id).await?;
            families.push(Family {
                sire: sire.clone(),
                dam,
                children,
            });
        }
        Ok(families)
    }

    async fn families_as_dam(&mut self, dam_id: i64) -> Result<Vec<Family>> {
        let dam = self.fetch_dog(dam_id).await?;
        let sires = self.fetch_mates("dam_id", dam_id).await?;

        let mut families = Vec::with_capacity(sires.len());
        for sire in sires {
            let children = self.fetch_children(sire.id, dam.id).await?;
            families.push(Family {
                sire,
                dam: dam.clone(),
                children,
            });
        }
        Ok(families)
    }

    async fn update_status(
        &mut self,
        dog_id: i64,
        channel: ConditionChannel,
        status: ConditionStatus,
    ) -> Result<()> {
        let status_column = match channel {
            ConditionChannel::Slem => "slem_status_id",
            ConditionChannel::Cecs => "cecs_status_id",
        };
        let sql = format!(
            r#"
            UPDATE dog
            SET {status_column} = (SELECT id FROM ailment_status WHERE status = $2)
            WHERE id = $1
            "#
        );
        sqlx::query(&sql)
            .bind(dog_id)
            .bind(status.to_string())
            .execute(&mut *self.tx)
            .await?;
        Ok(())
    }
}
