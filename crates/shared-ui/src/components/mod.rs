pub mod badge;
pub mod button;
pub mod card;
pub mod check_option;
pub mod input;
pub mod search_bar;
pub mod skeleton;
pub mod tab_strip;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use check_option::*;
pub use input::*;
pub use search_bar::*;
pub use skeleton::*;
pub use tab_strip::*;
