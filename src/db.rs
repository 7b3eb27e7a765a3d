use migration::Migrator;
use sea_orm::{
    ConnectionTrait, Database, DatabaseConnection, DbBackend, EntityTrait, Set, Statement,
    TransactionTrait,
};
use sea_orm_migration::MigratorTrait;

use crate::{entities::movie, error::AppResult};

pub async fn connect_and_migrate(database_url: &str) -> AppResult<DatabaseConnection> {
    let db = Database::connect(database_url).await?;

    if db.get_database_backend() == DbBackend::Sqlite {
        for pragma in
            ["PRAGMA journal_mode=WAL", "PRAGMA synchronous=NORMAL", "PRAGMA cache_size=-64000"]
        {
            db.execute(Statement::from_string(DbBackend::Sqlite, pragma.to_string())).await?;
        }
    }

    Migrator::up(&db, None).await?;
    Ok(db)
}

const SEED_MOVIES: [(&str, &str, &str); 4] = [
    ("Inception", "Sci-Fi", "https://images.unsplash.com/photo-1524985069026-dd778a71c7b4"),
    ("Interstellar", "Sci-Fi", "https://images.unsplash.com/photo-1462331940025-496dfbfc7564"),
    ("The Dark Knight", "Action", "https://images.unsplash.com/photo-1517602302552-471fe67acf66"),
    ("Tenet", "Sci-Fi/Action", "https://images.unsplash.com/photo-1522120692562-5d7a83e9f50a"),
];

/// Inserts the starter watchlist when the table has no rows at all.
/// Runs once at startup, before the listener binds, so a restart against a
/// populated database never duplicates the seed set.
pub async fn seed_if_empty(db: &DatabaseConnection) -> AppResult<()> {
    if movie::Entity::find().one(db).await?.is_some() {
        return Ok(());
    }

    let rows = SEED_MOVIES.iter().map(|(title, genre, image_url)| movie::ActiveModel {
        id: Default::default(),
        title: Set(Some((*title).to_string())),
        genre: Set(Some((*genre).to_string())),
        status: Set(false),
        image_url: Set(Some((*image_url).to_string())),
    });

    let txn = db.begin().await?;
    movie::Entity::insert_many(rows).exec(&txn).await?;
    txn.commit().await?;

    tracing::info!(count = SEED_MOVIES.len(), "seeded starter watchlist");
    Ok(())
}
