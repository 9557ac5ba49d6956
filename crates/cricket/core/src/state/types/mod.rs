pub mod common;
pub mod crease;
pub mod innings;
pub mod team;

pub use common::{Innings, TeamId};
pub use crease::{Batsman, Crease};
pub use innings::InningsContext;
pub use team::{Lineup, Team};
