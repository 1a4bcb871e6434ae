//! List/get/delete implemented once for every [`Record`].

use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::{EngineError, OwnedRecord, Record, ResultEngine};

use super::Engine;

pub(super) fn not_found<R: Record>(id: i32) -> EngineError {
    EngineError::KeyNotFound(format!("{} {id}", R::LABEL))
}

impl Engine {
    /// Return every stored `R`, oldest first.
    pub async fn list<R: Record>(&self) -> ResultEngine<Vec<R>> {
        R::Entity::find()
            .order_by_asc(R::id_column())
            .all(&self.database)
            .await?
            .into_iter()
            .map(R::from_model)
            .collect()
    }

    /// Return the `R` with `id`, or [`EngineError::KeyNotFound`].
    pub async fn get<R: Record>(&self, id: i32) -> ResultEngine<R> {
        let model = self.find_model::<R>(id).await?;
        R::from_model(model)
    }

    /// Delete the `R` with `id` in a single statement.
    ///
    /// An absent id is [`EngineError::KeyNotFound`] unless the record type
    /// opts out through [`Record::DELETE_MISSING_IS_ERROR`]. A row still
    /// referenced by a non-nullable foreign key is [`EngineError::InUse`].
    pub async fn delete<R: Record>(&self, id: i32) -> ResultEngine<()> {
        let result = R::Entity::delete_many()
            .filter(R::id_column().eq(id))
            .exec(&self.database)
            .await
            .map_err(|err| EngineError::from_write(err, &format!("{} {id}", R::LABEL)))?;

        if result.rows_affected == 0 && R::DELETE_MISSING_IS_ERROR {
            return Err(not_found::<R>(id));
        }
        Ok(())
    }

    /// Return every `R` owned by `user_id`, oldest first. No match is an empty list.
    pub async fn list_by_user<R: OwnedRecord>(&self, user_id: i32) -> ResultEngine<Vec<R>> {
        R::Entity::find()
            .filter(R::owner_column().eq(user_id))
            .order_by_asc(R::id_column())
            .all(&self.database)
            .await?
            .into_iter()
            .map(R::from_model)
            .collect()
    }

    pub(super) async fn find_model<R: Record>(
        &self,
        id: i32,
    ) -> ResultEngine<<R::Entity as EntityTrait>::Model> {
        R::Entity::find()
            .filter(R::id_column().eq(id))
            .one(&self.database)
            .await?
            .ok_or_else(|| not_found::<R>(id))
    }
}
