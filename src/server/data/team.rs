use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::team::{CreateTeam, TeamUpdate};

pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    /// Creates a new instance of [`TeamRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new team; new teams always start active
    pub async fn create(&self, data: &CreateTeam) -> Result<entity::team::Model, DbErr> {
        let team = entity::team::ActiveModel {
            name: ActiveValue::Set(data.name.clone()),
            description: ActiveValue::Set(data.description.clone()),
            city: ActiveValue::Set(data.city.clone()),
            mascot: ActiveValue::Set(data.mascot.clone()),
            logo_url: ActiveValue::Set(data.logo_url.clone()),
            primary_color: ActiveValue::Set(data.primary_color.clone()),
            secondary_color: ActiveValue::Set(data.secondary_color.clone()),
            accent_color: ActiveValue::Set(data.accent_color.clone()),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        team.insert(self.db).await
    }

    pub async fn get(&self, team_id: i32) -> Result<Option<entity::team::Model>, DbErr> {
        entity::prelude::Team::find_by_id(team_id).one(self.db).await
    }

    /// Case-sensitive exact name lookup, used for uniqueness checks
    pub async fn get_by_name(&self, name: &str) -> Result<Option<entity::team::Model>, DbErr> {
        entity::prelude::Team::find()
            .filter(entity::team::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::team::Model>, DbErr> {
        entity::prelude::Team::find()
            .order_by_asc(entity::team::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn get_active(&self) -> Result<Vec<entity::team::Model>, DbErr> {
        entity::prelude::Team::find()
            .filter(entity::team::Column::IsActive.eq(true))
            .order_by_asc(entity::team::Column::Name)
            .all(self.db)
            .await
    }

    /// Applies a partial update; absent fields keep their stored values and
    /// `Some(None)` clears a nullable column.
    pub async fn update(
        &self,
        team: entity::team::Model,
        update: TeamUpdate,
    ) -> Result<entity::team::Model, DbErr> {
        let mut team_am = team.into_active_model();

        if let Some(name) = update.name {
            team_am.name = ActiveValue::Set(name);
        }
        if let Some(description) = update.description {
            team_am.description = ActiveValue::Set(description);
        }
        if let Some(city) = update.city {
            team_am.city = ActiveValue::Set(city);
        }
        if let Some(mascot) = update.mascot {
            team_am.mascot = ActiveValue::Set(mascot);
        }
        if let Some(logo_url) = update.logo_url {
            team_am.logo_url = ActiveValue::Set(logo_url);
        }
        if let Some(primary_color) = update.primary_color {
            team_am.primary_color = ActiveValue::Set(primary_color);
        }
        if let Some(secondary_color) = update.secondary_color {
            team_am.secondary_color = ActiveValue::Set(secondary_color);
        }
        if let Some(accent_color) = update.accent_color {
            team_am.accent_color = ActiveValue::Set(accent_color);
        }
        if let Some(is_active) = update.is_active {
            team_am.is_active = ActiveValue::Set(is_active);
        }
        team_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        team_am.update(self.db).await
    }

    /// Deletes a team
    ///
    /// Returns OK regardless of the team existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, team_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Team::delete_by_id(team_id)
            .exec(self.db)
            .await
    }
}
