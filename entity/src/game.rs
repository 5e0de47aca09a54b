use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "game")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// `title` lower-cased with `fold`, matched by catalog search.
    pub title_folded: String,
    #[sea_orm(column_type = "Text")]
    pub description_folded: String,
    pub price: f64,
    pub genre: Genre,
    pub image: String,
    pub download_url: String,
    pub created_by: i32,
    pub stock: i32,
    pub rating: f64,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

/// Closed set of catalog genres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum Genre {
    #[sea_orm(string_value = "Action")]
    Action,
    #[sea_orm(string_value = "Adventure")]
    Adventure,
    #[sea_orm(string_value = "RPG")]
    Rpg,
    #[sea_orm(string_value = "Strategy")]
    Strategy,
    #[sea_orm(string_value = "Sports")]
    Sports,
    #[sea_orm(string_value = "Racing")]
    Racing,
    #[sea_orm(string_value = "Simulation")]
    Simulation,
    #[sea_orm(string_value = "Puzzle")]
    Puzzle,
    #[sea_orm(string_value = "Horror")]
    Horror,
    #[sea_orm(string_value = "Fighting")]
    Fighting,
    #[sea_orm(string_value = "Platformer")]
    Platformer,
    #[sea_orm(string_value = "Shooter")]
    Shooter,
    #[sea_orm(string_value = "Other")]
    Other,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedBy",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Unicode lower-casing applied to searchable text and to search keywords.
///
/// SQLite `LIKE` only folds ASCII letters, so search compares pre-folded columns instead.
pub fn fold(text: &str) -> String {
    text.to_lowercase()
}
