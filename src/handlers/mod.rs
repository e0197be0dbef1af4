mod list_images;
mod not_found;
mod root;

pub use list_images::list_images;
pub use not_found::not_found;
pub use root::root;
