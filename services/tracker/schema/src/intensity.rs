use sea_orm::entity::prelude::*;

/// Intensity level lookup (e.g. `LI` = 1, `MI` = 2).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "intensity")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "type", column_type = "String(StringLen::N(10))", unique)]
    pub kind: String,
    pub value: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::nutrition::Entity")]
    Nutrition,
}

impl Related<super::nutrition::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Nutrition.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
