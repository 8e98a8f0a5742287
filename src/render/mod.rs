pub mod table;
pub mod template;

pub use table::render_table;
pub use template::compose;
