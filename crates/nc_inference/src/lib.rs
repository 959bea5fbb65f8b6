pub mod backends;

pub use backends::{create_backend, BackendKind};

pub mod prelude {
    pub use super::backends::{create_backend, BackendKind};
    pub use nc_core::{Config, Error, GenerationParams, Result, TextGenerator};
}
