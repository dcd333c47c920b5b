// Core modules: input model, resolver seam, formatting, and error modeling.
pub mod error;
pub mod format;
pub mod ownership;
pub mod resolver;
