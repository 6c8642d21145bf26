use std::collections::{HashMap, HashSet};

use chrono::Utc;
use entity::character::Role;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::character::{CharacterUpdate, NewCharacter};

/// Maximum number of featured players shown on a team page
pub const FEATURED_PLAYER_LIMIT: u64 = 6;

pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, data: NewCharacter) -> Result<entity::character::Model, DbErr> {
        let character = entity::character::ActiveModel {
            name: ActiveValue::Set(data.name),
            nickname: ActiveValue::Set(data.nickname),
            avatar_url: ActiveValue::Set(data.avatar_url),
            team_id: ActiveValue::Set(data.team_id),
            role: ActiveValue::Set(data.role),
            position: ActiveValue::Set(data.position),
            jersey_number: ActiveValue::Set(data.jersey_number),
            bio: ActiveValue::Set(data.bio),
            is_private: ActiveValue::Set(false),
            is_archived: ActiveValue::Set(false),
            created_by: ActiveValue::Set(data.created_by),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        character.insert(self.db).await
    }

    pub async fn get(&self, character_id: i32) -> Result<Option<entity::character::Model>, DbErr> {
        entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await
    }

    pub async fn get_with_team(
        &self,
        character_id: i32,
    ) -> Result<Option<(entity::character::Model, Option<entity::team::Model>)>, DbErr> {
        entity::prelude::Character::find_by_id(character_id)
            .find_also_related(entity::team::Entity)
            .one(self.db)
            .await
    }

    /// Every character with its team, name-ascending, for the directory listing
    pub async fn list_with_teams(
        &self,
    ) -> Result<Vec<(entity::character::Model, Option<entity::team::Model>)>, DbErr> {
        entity::prelude::Character::find()
            .find_also_related(entity::team::Entity)
            .order_by_asc(entity::character::Column::Name)
            .all(self.db)
            .await
    }

    /// Every character except the given one, for add-connection affordances
    pub async fn list_others(
        &self,
        character_id: i32,
    ) -> Result<Vec<entity::character::Model>, DbErr> {
        entity::prelude::Character::find()
            .filter(entity::character::Column::Id.ne(character_id))
            .order_by_asc(entity::character::Column::Name)
            .all(self.db)
            .await
    }

    /// Characters created by the given user, for the dashboard
    pub async fn list_by_creator(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::character::Model>, DbErr> {
        entity::prelude::Character::find()
            .filter(entity::character::Column::CreatedBy.eq(user_id))
            .order_by_asc(entity::character::Column::Name)
            .all(self.db)
            .await
    }

    /// Live count of characters on a team with the given role
    pub async fn count_by_role(&self, team_id: i32, role: Role) -> Result<u64, DbErr> {
        entity::prelude::Character::find()
            .filter(entity::character::Column::TeamId.eq(team_id))
            .filter(entity::character::Column::Role.eq(role))
            .count(self.db)
            .await
    }

    /// Count of every character still referencing a team, archived included;
    /// used as the delete guard.
    pub async fn count_for_team(&self, team_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Character::find()
            .filter(entity::character::Column::TeamId.eq(team_id))
            .count(self.db)
            .await
    }

    /// Up to [`FEATURED_PLAYER_LIMIT`] public, non-archived players, newest first
    pub async fn featured_players(
        &self,
        team_id: i32,
    ) -> Result<Vec<entity::character::Model>, DbErr> {
        entity::prelude::Character::find()
            .filter(entity::character::Column::TeamId.eq(team_id))
            .filter(entity::character::Column::Role.eq(Role::Player))
            .filter(entity::character::Column::IsPrivate.eq(false))
            .filter(entity::character::Column::IsArchived.eq(false))
            .order_by_desc(entity::character::Column::CreatedAt)
            .limit(FEATURED_PLAYER_LIMIT)
            .all(self.db)
            .await
    }

    /// Non-archived team members, optionally filtered by role.
    ///
    /// Player listings order by jersey number then name; everything else by name.
    pub async fn team_members(
        &self,
        team_id: i32,
        role: Option<Role>,
    ) -> Result<Vec<entity::character::Model>, DbErr> {
        let mut query = entity::prelude::Character::find()
            .filter(entity::character::Column::TeamId.eq(team_id))
            .filter(entity::character::Column::IsArchived.eq(false));

        if let Some(role) = role.clone() {
            query = query.filter(entity::character::Column::Role.eq(role));
        }

        let query = if role == Some(Role::Player) {
            query
                .order_by_asc(entity::character::Column::JerseyNumber)
                .order_by_asc(entity::character::Column::Name)
        } else {
            query.order_by_asc(entity::character::Column::Name)
        };

        query.all(self.db).await
    }

    /// Batch-resolves creator usernames for a set of characters
    pub async fn creator_usernames(
        &self,
        characters: &[entity::character::Model],
    ) -> Result<HashMap<i32, String>, DbErr> {
        let ids: HashSet<i32> = characters.iter().map(|c| c.created_by).collect();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let users = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(users.into_iter().map(|u| (u.id, u.username)).collect())
    }

    /// Applies a partial update; absent fields keep their stored values and
    /// `Some(None)` clears a nullable column. Ownership (`created_by`) never
    /// changes here.
    pub async fn update(
        &self,
        character_id: i32,
        update: CharacterUpdate,
    ) -> Result<Option<entity::character::Model>, DbErr> {
        let character = match entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await?
        {
            Some(character) => character,
            None => return Ok(None),
        };

        let mut am = character.into_active_model();

        if let Some(name) = update.name {
            am.name = ActiveValue::Set(name);
        }
        if let Some(nickname) = update.nickname {
            am.nickname = ActiveValue::Set(nickname);
        }
        if let Some(age) = update.age {
            am.age = ActiveValue::Set(age);
        }
        if let Some(birthday) = update.birthday {
            am.birthday = ActiveValue::Set(birthday);
        }
        if let Some(zodiac) = update.zodiac {
            am.zodiac = ActiveValue::Set(zodiac);
        }
        if let Some(hometown) = update.hometown {
            am.hometown = ActiveValue::Set(hometown);
        }
        if let Some(education) = update.education {
            am.education = ActiveValue::Set(education);
        }
        if let Some(occupation) = update.occupation {
            am.occupation = ActiveValue::Set(occupation);
        }
        if let Some(sexuality) = update.sexuality {
            am.sexuality = ActiveValue::Set(sexuality);
        }
        if let Some(pronouns) = update.pronouns {
            am.pronouns = ActiveValue::Set(pronouns);
        }
        if let Some(languages) = update.languages {
            am.languages = ActiveValue::Set(languages);
        }
        if let Some(religion) = update.religion {
            am.religion = ActiveValue::Set(religion);
        }
        if let Some(gender) = update.gender {
            am.gender = ActiveValue::Set(gender);
        }
        if let Some(url) = update.url {
            am.url = ActiveValue::Set(url);
        }
        if let Some(role) = update.role {
            am.role = ActiveValue::Set(role);
        }
        if let Some(position) = update.position {
            am.position = ActiveValue::Set(position);
        }
        if let Some(jersey_number) = update.jersey_number {
            am.jersey_number = ActiveValue::Set(jersey_number);
        }
        if let Some(team_id) = update.team_id {
            am.team_id = ActiveValue::Set(team_id);
        }
        if let Some(job) = update.job {
            am.job = ActiveValue::Set(job);
        }
        if let Some(bio) = update.bio {
            am.bio = ActiveValue::Set(bio);
        }
        if let Some(faceclaim) = update.faceclaim {
            am.faceclaim = ActiveValue::Set(faceclaim);
        }
        if let Some(avatar_url) = update.avatar_url {
            am.avatar_url = ActiveValue::Set(avatar_url);
        }
        if let Some(banner_url) = update.banner_url {
            am.banner_url = ActiveValue::Set(banner_url);
        }
        if let Some(sidebar_url) = update.sidebar_url {
            am.sidebar_url = ActiveValue::Set(sidebar_url);
        }
        if let Some(spotify_embed) = update.spotify_embed {
            am.spotify_embed = ActiveValue::Set(spotify_embed);
        }
        if let Some(quote) = update.quote {
            am.quote = ActiveValue::Set(quote);
        }
        if let Some(personality) = update.personality {
            am.personality = ActiveValue::Set(personality);
        }
        if let Some(strengths) = update.strengths {
            am.strengths = ActiveValue::Set(strengths);
        }
        if let Some(weaknesses) = update.weaknesses {
            am.weaknesses = ActiveValue::Set(weaknesses);
        }
        if let Some(likes) = update.likes {
            am.likes = ActiveValue::Set(likes);
        }
        if let Some(dislikes) = update.dislikes {
            am.dislikes = ActiveValue::Set(dislikes);
        }
        if let Some(fears) = update.fears {
            am.fears = ActiveValue::Set(fears);
        }
        if let Some(goals) = update.goals {
            am.goals = ActiveValue::Set(goals);
        }
        if let Some(appearance) = update.appearance {
            am.appearance = ActiveValue::Set(appearance);
        }
        if let Some(background) = update.background {
            am.background = ActiveValue::Set(background);
        }
        if let Some(skills) = update.skills {
            am.skills = ActiveValue::Set(skills);
        }
        if let Some(fav_food) = update.fav_food {
            am.fav_food = ActiveValue::Set(fav_food);
        }
        if let Some(fav_music) = update.fav_music {
            am.fav_music = ActiveValue::Set(fav_music);
        }
        if let Some(fav_movies) = update.fav_movies {
            am.fav_movies = ActiveValue::Set(fav_movies);
        }
        if let Some(fav_color) = update.fav_color {
            am.fav_color = ActiveValue::Set(fav_color);
        }
        if let Some(fav_sports) = update.fav_sports {
            am.fav_sports = ActiveValue::Set(fav_sports);
        }
        if let Some(inspiration) = update.inspiration {
            am.inspiration = ActiveValue::Set(inspiration);
        }
        if let Some(full_bio) = update.full_bio {
            am.full_bio = ActiveValue::Set(full_bio);
        }
        if let Some(is_private) = update.is_private {
            am.is_private = ActiveValue::Set(is_private);
        }
        if let Some(is_archived) = update.is_archived {
            am.is_archived = ActiveValue::Set(is_archived);
        }
        if let Some(gallery) = update.gallery {
            am.gallery = ActiveValue::Set(gallery);
        }
        am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let character = am.update(self.db).await?;

        Ok(Some(character))
    }

    /// Replaces the stored gallery text
    pub async fn set_gallery(
        &self,
        character: entity::character::Model,
        gallery: String,
    ) -> Result<entity::character::Model, DbErr> {
        let mut am = character.into_active_model();
        am.gallery = ActiveValue::Set(Some(gallery));
        am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        am.update(self.db).await
    }
}
