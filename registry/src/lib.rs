mod attribute;
mod category;
pub mod declaration;
mod manifest;
mod registry;
mod scanner;

pub use attribute::{Attribute, AttributeType};
pub use category::Category;
pub use manifest::Manifest;
pub use registry::{Attributes, Registry};
pub use scanner::Scanner;
