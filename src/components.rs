mod form;
pub use form::*;
mod notice;
pub use notice::*;
mod strength;
pub use strength::*;
mod task_card;
pub use task_card::*;
