use super::errors::CategoryError;

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// A validated category that has not been stored yet; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl NewCategory {
    pub fn new(
        name: String,
        description: Option<String>,
        image: Option<String>,
    ) -> Result<Self, CategoryError> {
        if name.trim().is_empty() {
            return Err(CategoryError::NameEmpty);
        }

        Ok(Self {
            name,
            description,
            image,
        })
    }

    pub fn into_category(self, id: i64) -> Category {
        Category {
            id,
            name: self.name,
            description: self.description,
            image: self.image,
        }
    }
}

impl Category {
    /// Overwrites every editable field. Absent optional fields are cleared.
    pub fn overwrite(&mut self, changes: NewCategory) {
        self.name = changes.name;
        self.description = changes.description;
        self.image = changes.image;
    }
}
