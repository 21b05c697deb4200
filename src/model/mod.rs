pub mod ids;
pub mod contact;
pub mod patch;

// Re-exports for convenience
pub use ids::ContactId;
pub use contact::{Contact, ContactMethod, NewContact};
pub use patch::{ContactField, ContactPatch};
