pub mod locale;
pub mod product;
