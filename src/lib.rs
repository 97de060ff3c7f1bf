#![forbid(unsafe_code)]

mod build_url;
mod endpoints;
mod error;
mod models;
mod params;
mod query;

pub use error::{ApiError, Error, SerializationError};

pub use endpoints::{AdminEndpoints, AdminEndpointsBuilder};

pub use models::{
    Access, ActiveKeys, Attributes, CertResponse, CertResponseKey, Client,
    ClientMappingsRepresentation, ClientScope, ClientScopeAttributes, Component, ComponentConfig,
    CredentialRepresentation, Group, IntrospectTokenResult, IssuerResponse, Key, KeyStoreConfig,
    MappingsRepresentation, MultivaluedHashMap, ProtocolMappers, ProtocolMappersConfig,
    RealmRepresentation, Role, SetPasswordRequest, User, UserGroup, UserInfo,
};

pub use params::{ExecuteActionsEmail, GetClientsParams, GetGroupsParams, GetUsersParams};

pub use query::{append_query, is_default, to_query_map, QueryParams};
