pub mod items;
pub mod seo;
