mod client;
mod credential;
mod group;
mod key;
mod lenient;
mod realm;
mod role;
mod token;
mod user;

pub use client::{Client, ClientScope, ClientScopeAttributes, ProtocolMappers, ProtocolMappersConfig};
pub use credential::{CredentialRepresentation, MultivaluedHashMap};
pub use group::Group;
pub use key::{ActiveKeys, Component, ComponentConfig, Key, KeyStoreConfig};
pub use realm::RealmRepresentation;
pub use role::{ClientMappingsRepresentation, MappingsRepresentation, Role};
pub use token::{CertResponse, CertResponseKey, IntrospectTokenResult, IssuerResponse};
pub use user::{Access, Attributes, SetPasswordRequest, User, UserGroup, UserInfo};
