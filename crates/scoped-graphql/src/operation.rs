//! Typed GraphQL Operations
//!
//! Each read or write is a unit type naming its document, variables and response shape.

use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
}

/// A named GraphQL document with typed variables and data
pub trait Operation {
    /// `operationName` sent to the server; also the cache and invalidation key
    const NAME: &'static str;
    const KIND: OperationKind;
    const DOCUMENT: &'static str;
    /// Read operations made stale by a successful run of this one
    const INVALIDATES: &'static [&'static str] = &[];

    type Variables: Serialize;
    type Data: DeserializeOwned;
}

/// Variables for operations that take none; serializes as `{}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NoVariables {}
