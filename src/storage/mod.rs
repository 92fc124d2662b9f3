pub mod alternative;
pub mod keyed;
pub mod memory;

pub use alternative::{InMemoryAlternative, Resettable, reset_all};
pub use keyed::{MapStorage, MultiMapStorage};
pub use memory::Storage;
