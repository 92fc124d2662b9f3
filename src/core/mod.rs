pub mod error;
pub mod time;
pub mod types;

pub use error::{Result, StoreError};
pub use time::{
    FixedIdGenerator, FixedTimeProvider, IdGenerator, SequenceIdGenerator, SystemTimeProvider,
    TimeProvider, UuidGenerator,
};
pub use types::{DeletePolicy, Entity};
