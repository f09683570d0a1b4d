pub mod inquiry;
pub mod pages;
pub mod product;
pub mod seo;
