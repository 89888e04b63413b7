pub mod factors;
pub mod flags;
pub mod histogram;
pub mod plausibility;
pub mod tiers;
pub mod weights;
