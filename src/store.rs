use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
    sea_query::Expr,
};

use crate::{entities::movie, error::AppResult, models::NewMovie};

/// Connection handle every request goes through. Each method is one
/// statement inside its own transaction; dropping the transaction on an
/// error path rolls it back and returns the connection to the pool.
#[derive(Clone)]
pub struct Store {
    db: DatabaseConnection,
}

impl Store {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// All rows, oldest first. `id` is assigned monotonically so this
    /// matches insertion order.
    pub async fn list(&self) -> AppResult<Vec<movie::Model>> {
        let txn = self.db.begin().await?;
        let rows = movie::Entity::find().order_by_asc(movie::Column::Id).all(&txn).await?;
        txn.commit().await?;
        Ok(rows)
    }

    /// Inserts a row with `status` forced to false and returns the
    /// store-assigned id.
    pub async fn insert(&self, new: NewMovie) -> AppResult<i32> {
        let model = movie::ActiveModel {
            id: Default::default(),
            title: Set(new.title),
            genre: Set(new.genre),
            status: Set(false),
            image_url: Set(new.image_url),
        };

        let txn = self.db.begin().await?;
        let res = movie::Entity::insert(model).exec(&txn).await?;
        txn.commit().await?;
        Ok(res.last_insert_id)
    }

    /// Flips `status` to true for the matching row. Returns false when no
    /// row has that id; repeating on an already-watched row still matches.
    pub async fn mark_watched(&self, id: i32) -> AppResult<bool> {
        let txn = self.db.begin().await?;
        let res = movie::Entity::update_many()
            .col_expr(movie::Column::Status, Expr::value(true))
            .filter(movie::Column::Id.eq(id))
            .exec(&txn)
            .await?;
        txn.commit().await?;
        Ok(res.rows_affected > 0)
    }

    /// Removes the matching row. Returns false when no row has that id.
    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let txn = self.db.begin().await?;
        let res = movie::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;
        Ok(res.rows_affected > 0)
    }
}
