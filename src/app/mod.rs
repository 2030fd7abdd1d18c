// Application layer - Use case interactors

pub mod container;
pub mod normalize_interactor;
pub mod walker;

// Re-export interactors
pub use container::{AppContainer, DefaultAppContainer};
pub use normalize_interactor::NormalizeInteractor;
