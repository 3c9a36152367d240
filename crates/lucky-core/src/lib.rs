//! # lucky-core - Core Domain Types
//!
//! Foundation crate for Lucky Draw. Provides the name pool, the draw state
//! machine, candidate pickers, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** and no async runtime: the
//! draw controller describes timers and sounds as [`DrawEffect`]s and leaves
//! executing them to the application layer.
//!
//! ## Public API
//!
//! ### Name Pool (`pool`)
//! - [`NameList`] - Raw multi-line text and the pool derived from it
//! - [`parse_pool()`] - Split text into non-blank entries
//!
//! ### Draw (`draw`)
//! - [`DrawController`] - Start/stop/tick state machine
//! - [`DrawStrategy`] - Stop trigger, interval policy and sound style
//! - [`DrawEffect`] - Timer and sound requests produced by the controller
//! - [`TimerHandle`] - Identity of a scheduled tick
//!
//! ### Pickers (`picker`)
//! - [`CandidatePicker`] - Index selection seam
//! - [`RandomPicker`] - Uniform `rand`-backed picker
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use lucky_core::prelude::*;
//! ```

pub mod draw;
pub mod error;
pub mod logging;
pub mod picker;
pub mod pool;

/// Prelude for common imports used throughout all Lucky Draw crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use draw::{
    DrawController, DrawEffect, DrawPhase, DrawStrategy, IntervalPolicy, Preferences, SoundStyle,
    StopTrigger, TimerHandle,
};
pub use error::{Error, Result, ResultExt};
pub use picker::{CandidatePicker, RandomPicker, ScriptedPicker};
pub use pool::{parse_pool, remove_first_line, NameList};
