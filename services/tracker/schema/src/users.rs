use sea_orm::entity::prelude::*;

/// Registered user. Owns weight and nutrition entries.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(30))")]
    pub name: String,
    #[sea_orm(column_type = "String(StringLen::N(50))", unique)]
    pub email: String,
    #[sea_orm(column_type = "String(StringLen::N(30))", unique)]
    pub username: String,
    #[sea_orm(column_type = "String(StringLen::N(30))")]
    pub password: String,
    pub creation_date: chrono::DateTime<chrono::Utc>,
    pub last_modified_date: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::weight::Entity")]
    Weight,
    #[sea_orm(has_many = "super::nutrition::Entity")]
    Nutrition,
}

impl Related<super::weight::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Weight.def()
    }
}

impl Related<super::nutrition::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Nutrition.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
