mod suppression_list;
mod trusted_roots;

pub use suppression_list::{SuppressedPackage, SuppressionList};
pub use trusted_roots::TrustedRoots;
