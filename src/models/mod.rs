pub mod dog;
pub mod family;

// Re-export core models for easy access
pub use dog::{Dog, DogRow, Sex};
pub use family::Family;
