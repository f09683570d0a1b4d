pub mod inquiry;
pub mod product;
