mod serve;

pub use serve::serve;
