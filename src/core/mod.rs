pub mod export;
pub mod html_import;
pub mod image_load;
pub mod media;
pub mod spherical;
pub mod viewer;
