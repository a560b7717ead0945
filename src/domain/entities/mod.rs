mod campaign;
mod click;
mod target;

pub use campaign::{Campaign, NewCampaign};
pub use click::{Click, NewClick};
pub use target::{NewTarget, Target};
