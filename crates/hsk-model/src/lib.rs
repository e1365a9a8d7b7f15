pub mod color;
pub mod directory;
pub mod field;
pub mod value;

pub use color::Rgba;
pub use directory::DirectoryType;
pub use field::FieldKind;
pub use value::{FieldValue, ValueKind};
