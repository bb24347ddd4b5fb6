// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod aula;
pub mod user;

pub use aula::Aula;
pub use user::User;
