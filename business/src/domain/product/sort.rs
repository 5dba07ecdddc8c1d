use std::cmp::Ordering;

use strum_macros::{Display, EnumString};

use super::errors::ProductError;
use super::model::Product;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ProductSortField {
    #[default]
    Id,
    Name,
    Price,
    Rating,
    Reviews,
    Stock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Ordering of a product listing. Ties are always broken by ascending id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProductSort {
    pub field: ProductSortField,
    pub direction: SortDirection,
}

impl ProductSort {
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        let primary = match self.field {
            ProductSortField::Id => Ordering::Equal,
            ProductSortField::Name => a.name.cmp(&b.name),
            ProductSortField::Price => a.price.cmp(&b.price),
            ProductSortField::Rating => a.rating.total_cmp(&b.rating),
            ProductSortField::Reviews => a.reviews.cmp(&b.reviews),
            ProductSortField::Stock => a.stock.cmp(&b.stock),
        };

        let primary = match self.direction {
            SortDirection::Asc => primary,
            SortDirection::Desc => primary.reverse(),
        };

        let tiebreak = match (self.field, self.direction) {
            (ProductSortField::Id, SortDirection::Desc) => b.id.cmp(&a.id),
            _ => a.id.cmp(&b.id),
        };

        primary.then(tiebreak)
    }
}

/// Parses `field` or `field,direction`, e.g. `price,desc`.
impl std::str::FromStr for ProductSort {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = match s.split_once(',') {
            Some((field, direction)) => (field, Some(direction)),
            None => (s, None),
        };

        let field = field
            .trim()
            .parse::<ProductSortField>()
            .map_err(|_| ProductError::InvalidSort)?;
        let direction = match direction {
            Some(d) => d
                .trim()
                .parse::<SortDirection>()
                .map_err(|_| ProductError::InvalidSort)?,
            None => SortDirection::Asc,
        };

        Ok(Self { field, direction })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::model::Category;
    use bigdecimal::BigDecimal;

    fn product(id: i64, name: &str, price: i64) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: None,
            price: BigDecimal::from(price),
            image: None,
            rating: 0.0,
            reviews: 0,
            brand: None,
            stock: 0,
            category: Category {
                id: 1,
                name: "Any".to_string(),
                description: None,
                image: None,
            },
        }
    }

    #[test]
    fn should_parse_field_and_direction() {
        let sort: ProductSort = "price,desc".parse().unwrap();
        assert_eq!(sort.field, ProductSortField::Price);
        assert_eq!(sort.direction, SortDirection::Desc);
    }

    #[test]
    fn should_default_direction_to_ascending() {
        let sort: ProductSort = "Name".parse().unwrap();
        assert_eq!(sort.field, ProductSortField::Name);
        assert_eq!(sort.direction, SortDirection::Asc);
    }

    #[test]
    fn should_reject_unknown_field() {
        let result = "color,asc".parse::<ProductSort>();
        assert!(matches!(result.unwrap_err(), ProductError::InvalidSort));
    }

    #[test]
    fn should_reject_unknown_direction() {
        let result = "price,sideways".parse::<ProductSort>();
        assert!(matches!(result.unwrap_err(), ProductError::InvalidSort));
    }

    #[test]
    fn should_break_ties_by_id() {
        let sort: ProductSort = "price,desc".parse().unwrap();
        let mut products = vec![product(3, "c", 5), product(1, "a", 5), product(2, "b", 9)];

        products.sort_by(|a, b| sort.compare(a, b));

        let ids: Vec<i64> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }
}
