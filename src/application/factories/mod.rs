/// Factories for selecting infrastructure adapters
mod formatter_factory;

pub use formatter_factory::FormatterFactory;
