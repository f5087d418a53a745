use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    /// Account id issued by the identity provider, stored as-is.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
    pub family_id: Option<i32>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::family::Entity",
        from = "Column::FamilyId",
        to = "super::family::Column::Id"
    )]
    Family,
    #[sea_orm(has_many = "super::child::Entity")]
    Child,
    #[sea_orm(has_many = "super::family_member::Entity")]
    FamilyMember,
    #[sea_orm(has_one = "super::profile_measurement::Entity")]
    ProfileMeasurement,
}

impl Related<super::family::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Family.def()
    }
}

impl Related<super::child::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Child.def()
    }
}

impl Related<super::family_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FamilyMember.def()
    }
}

impl Related<super::profile_measurement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProfileMeasurement.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
