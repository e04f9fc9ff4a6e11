use sea_orm::entity::prelude::*;

/// A nutrition entry: when a user ate and at which intensity level.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "nutrition")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date: chrono::DateTime<chrono::Utc>,
    pub user_id: i32,
    pub intensity_id: i32,
    pub creation_date: chrono::DateTime<chrono::Utc>,
    pub last_modified_date: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::intensity::Entity",
        from = "Column::IntensityId",
        to = "super::intensity::Column::Id"
    )]
    Intensity,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::intensity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Intensity.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
