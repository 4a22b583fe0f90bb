// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![allow(dead_code)]

//! # sercontract
//!
//! Serialization contract metadata for .NET-style runtime type models.
//!
//! `sercontract` computes, once per type, an immutable description of which
//! instance members (fields and properties) take part in structured
//! (de)serialization, in which order they are emitted, and how each one is
//! resolved by its serialized name in O(1). It is the metadata core of a
//! serializer: actual value marshalling, wire encoding, and caching policy
//! live in the callers that consume these descriptions.
//!
//! Since Rust has no runtime reflection, the crate also carries the substrate
//! such a core reflects over: a compact, immutable runtime type model
//! ([`metadata::typesystem::RuntimeType`]) with declared fields, properties,
//! accessor methods, and custom attributes, declared through a fluent
//! [`metadata::typesystem::TypeBuilder`].
//!
//! ## Features
//!
//! - **Contract modes** - opt-in (only marked members serialize) and opt-out
//!   (everything public serializes unless excluded), switched by a
//!   `DataContractAttribute`-named marker on the type
//! - **Stable ordering** - properties before fields, each group in
//!   declaration order
//! - **Fail-fast validation** - empty or duplicate serialized names reject
//!   the whole type, never producing a partially valid description
//! - **Safe sharing** - descriptions are immutable after construction and can
//!   be read from any number of threads, with a compute-once cache
//!   collaborator ([`metadata::description::DescriptionCache`])
//!
//! ## Quick Start
//!
//! ```rust
//! use sercontract::prelude::*;
//! use std::sync::Arc;
//!
//! let registry = Arc::new(TypeRegistry::new());
//! let person = TypeBuilder::new(registry.clone())
//!     .class("MyApp.Data", "Person")
//!     .auto_property("Name", TypeSignature::String)
//!     .auto_property("Age", TypeSignature::I4)
//!     .field("tag", TypeSignature::String)
//!     .build()?;
//!
//! let description = TypeDescription::new(&RuntimeTypeRef::new(&person))?;
//! assert_eq!(description.members().len(), 3);
//! assert!(description.try_get_member("Name").is_some());
//! # Ok::<(), sercontract::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`prelude`] - re-exports of the commonly used types
//! - [`metadata::typesystem`] - runtime type model, registry, and builder
//! - [`metadata::members`] - owned field/property/accessor representations
//! - [`metadata::description`] - contract discovery, validation, and lookup
//! - [`Error`] and [`Result`] - error handling

pub(crate) mod error;

/// Convenient re-exports of the most commonly used types.
pub mod prelude;

/// Runtime type model and serialization contract metadata.
pub mod metadata;

/// The result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

pub use error::Error;
