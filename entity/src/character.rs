use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "characters")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub nickname: Option<String>,
    pub age: Option<i32>,
    pub birthday: Option<ChronoDate>,
    pub zodiac: Option<String>,
    pub hometown: Option<String>,
    pub education: Option<String>,
    pub occupation: Option<String>,
    pub sexuality: Option<String>,
    pub pronouns: Option<String>,
    pub languages: Option<String>,
    pub religion: Option<String>,
    pub gender: Option<String>,
    pub url: Option<String>,
    pub role: Role,
    pub position: Option<String>,
    pub jersey_number: Option<i32>,
    pub team_id: Option<i32>,
    pub job: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    pub faceclaim: Option<String>,
    pub avatar_url: Option<String>,
    pub banner_url: Option<String>,
    pub sidebar_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub spotify_embed: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub quote: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub personality: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub strengths: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub weaknesses: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub likes: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub dislikes: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub fears: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub goals: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub appearance: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub background: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub skills: Option<String>,
    pub fav_food: Option<String>,
    pub fav_music: Option<String>,
    pub fav_movies: Option<String>,
    pub fav_color: Option<String>,
    pub fav_sports: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub inspiration: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub full_bio: Option<String>,
    pub is_private: bool,
    pub is_archived: bool,
    /// Gallery images serialized as JSON text; decoded at the application boundary.
    #[sea_orm(column_type = "Text", nullable)]
    pub gallery: Option<String>,
    pub created_by: i32,
    pub created_at: ChronoDateTime,
    pub updated_at: ChronoDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Team,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedBy",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Creator,
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Creator.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum Role {
    #[sea_orm(string_value = "Player")]
    Player,
    #[sea_orm(string_value = "Staff")]
    Staff,
    #[sea_orm(string_value = "Civilian")]
    Civilian,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Player => write!(f, "Player"),
            Role::Staff => write!(f, "Staff"),
            Role::Civilian => write!(f, "Civilian"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Player" => Ok(Role::Player),
            "Staff" => Ok(Role::Staff),
            "Civilian" => Ok(Role::Civilian),
            other => Err(format!("unknown character role: {other}")),
        }
    }
}
