//! Testing utilities and harness for the elastic scroller

pub mod callback_log;
pub mod content;
pub mod robot;

pub use callback_log::*;
pub use content::*;
pub use robot::*;

pub mod prelude {
    pub use crate::callback_log::{CallbackEvent, CallbackLog};
    pub use crate::content::{Block, BlockId, MemoryContent};
    pub use crate::robot::{pump_frames, settle, GestureRobot};
}
