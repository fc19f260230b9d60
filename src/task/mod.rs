pub mod types;

pub use types::{Priority, Status, Task};
