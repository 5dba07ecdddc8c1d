pub mod db;
mod errors;
pub mod cart {
    pub mod store;
}
pub mod category {
    pub mod entity;
    pub mod repository;
}
pub mod memory {
    pub mod catalog;
}
pub mod product {
    pub mod entity;
    pub mod repository;
}
