use contracts::domain::a001_sale::aggregate::{NewSale, Sale, SaleId};
use contracts::domain::common::serde_date;

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sales")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    // every column is nullable in the table; rows may come from elsewhere
    pub product: Option<String>,
    pub quantity: Option<i64>,
    pub unit_price: Option<f64>,
    pub date: Option<String>, // YYYY-MM-DD when written here
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Sale {
    fn from(m: Model) -> Self {
        Sale {
            id: SaleId(m.id),
            product: m.product,
            quantity: m.quantity,
            unit_price: m.unit_price,
            date: m.date,
            latitude: m.latitude,
            longitude: m.longitude,
        }
    }
}

/// Append one row; the database assigns the id
pub async fn insert(db: &DatabaseConnection, sale: &NewSale) -> Result<SaleId, DbErr> {
    let active = ActiveModel {
        id: NotSet,
        product: Set(Some(sale.product.clone())),
        quantity: Set(Some(sale.quantity)),
        unit_price: Set(Some(sale.unit_price)),
        date: Set(Some(sale.date.format(serde_date::FORMAT).to_string())),
        latitude: Set(Some(sale.latitude)),
        longitude: Set(Some(sale.longitude)),
    };
    let result = Entity::insert(active).exec(db).await?;
    Ok(SaleId(result.last_insert_id))
}

/// Every row in insertion order
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Sale>, DbErr> {
    let items = Entity::find()
        .order_by_asc(Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}
