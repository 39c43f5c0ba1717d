mod airport;
mod airway;
mod enums;
mod flags;
mod navaid;
mod parking;
mod pos;
mod rect;
mod runway;
mod search;

pub use airport::*;
pub use airway::*;
pub use enums::*;
pub use flags::*;
pub use navaid::*;
pub use parking::*;
pub use pos::*;
pub use rect::*;
pub use runway::*;
pub use search::*;
