use sqlx::FromRow;

use business::domain::category::model::Category;

#[derive(Debug, FromRow)]
pub struct CategoryEntity {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl CategoryEntity {
    pub fn into_domain(self) -> Category {
        Category {
            id: self.id,
            name: self.name,
            description: self.description,
            image: self.image,
        }
    }
}
