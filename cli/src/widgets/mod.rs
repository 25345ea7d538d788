pub mod logo;
pub mod text_field;
pub mod util;
