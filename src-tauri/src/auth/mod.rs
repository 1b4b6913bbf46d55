pub mod gate;
pub mod remember;

pub use gate::{validate_email, CredentialGate};
pub use remember::{
    CredentialVault, KeyringVault, MemoryVault, RememberedLogin, SavedLogin, EMAIL_KEY,
};
