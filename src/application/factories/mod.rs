mod parser_factory;
mod presenter_factory;

pub use parser_factory::ParserFactory;
pub use presenter_factory::{PresenterFactory, PresenterType};
