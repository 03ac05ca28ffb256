//! Authentication command handlers.

mod authenticate_user;

pub use authenticate_user::{
    AuthenticateUserCommand, AuthenticateUserHandler, AuthenticatedPrincipal,
};
