pub mod input;
pub mod model;
pub mod names;
pub mod pipeline;
pub mod report;

pub use model::factors::composite_score;
pub use model::histogram::percentile_of;
pub use model::plausibility::is_implausible_ratio;
pub use names::{canonicalize, short_form};
