mod attribution_index;
mod graph_expander;
mod trusted_package_cache;

pub use attribution_index::{Attribution, AttributionIndex};
pub use graph_expander::GraphExpander;
pub use trusted_package_cache::TrustedPackageCache;
