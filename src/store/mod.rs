// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! In-memory CredentialsRequest storage and admission.

pub mod single;
pub mod validation;

pub use single::CredentialsRequestStore;
pub use validation::Validator;
