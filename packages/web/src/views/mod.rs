mod layout;
pub use layout::AppLayout;

mod home;
pub use home::Home;

mod auth;
pub use auth::Auth;
