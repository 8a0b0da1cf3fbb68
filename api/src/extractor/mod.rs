mod json;
mod path;
mod query;
mod valid;

pub use json::{Created, Json};
pub use path::Path;
pub use query::Query;
pub use valid::Valid;
