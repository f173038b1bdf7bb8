/// Lockfile adapters - one LockfileParser per package-manager dialect
mod commit;
mod npm;
mod pnpm;
mod yarn;

pub use commit::try_extract_commit;
pub use npm::NpmLockParser;
pub use pnpm::PnpmLockParser;
pub use yarn::YarnLockParser;
