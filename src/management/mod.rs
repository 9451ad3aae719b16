mod album_dates;
mod auth;
mod session;

pub use album_dates::AlbumDateIndex;
pub use auth::CredentialProvider;
pub use auth::StaticToken;
pub use auth::TokenManager;
pub use auth::load_credentials;
pub use session::Session;
