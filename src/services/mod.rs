// SPDX-License-Identifier: MIT

//! Business logic services.

pub mod assets;
pub mod password;

pub use assets::AssetStore;
