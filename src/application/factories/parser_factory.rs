use crate::adapters::outbound::lockfile::{NpmLockParser, PnpmLockParser, YarnLockParser};
use crate::dependency_attribution::domain::LockfileKind;
use crate::ports::outbound::LockfileParser;

/// Factory selecting the lockfile parser for a dialect
pub struct ParserFactory;

impl ParserFactory {
    /// Returns the parser for `kind`, or `None` for manifests this engine
    /// does not attribute (go.mod)
    pub fn create(kind: LockfileKind) -> Option<Box<dyn LockfileParser>> {
        match kind {
            LockfileKind::Yarn => Some(Box::new(YarnLockParser::new())),
            LockfileKind::Npm => Some(Box::new(NpmLockParser::new())),
            LockfileKind::Pnpm => Some(Box::new(PnpmLockParser::new())),
            LockfileKind::GoMod => None,
        }
    }
}
