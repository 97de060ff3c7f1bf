use crate::build_url::{build_url, BuildUrlOptions};
use crate::error::Error;
use crate::params::{ExecuteActionsEmail, GetClientsParams, GetGroupsParams, GetUsersParams};
use crate::query::{append_query, QueryParams};
use url::Url;

const LEGACY_AUTH_PREFIX: &str = "auth";

/// Configures the server base url and realm for [`AdminEndpoints`].
pub struct AdminEndpointsBuilder {
    base_url: Url,
    realm: Option<String>,
    legacy_auth_prefix: bool,
}

impl AdminEndpointsBuilder {
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, Error> {
        Ok(Self {
            base_url: Url::parse(base_url.as_ref())?,
            realm: None,
            legacy_auth_prefix: false,
        })
    }

    pub fn realm(mut self, realm: impl Into<String>) -> Self {
        self.realm = Some(realm.into());
        self
    }

    /// Prefix every path with `/auth`, as servers before version 17 expect.
    pub fn legacy_auth_prefix(mut self, enabled: bool) -> Self {
        self.legacy_auth_prefix = enabled;
        self
    }

    pub fn build(self) -> Result<AdminEndpoints, Error> {
        if self.base_url.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrl(self.base_url.to_string()));
        }
        let realm = self
            .realm
            .filter(|realm| !realm.is_empty())
            .ok_or(Error::MissingRealm)?;
        Ok(AdminEndpoints {
            base_url: self.base_url,
            realm,
            legacy_auth_prefix: self.legacy_auth_prefix,
        })
    }
}

/// Request urls of the admin REST API and the OIDC endpoints of one realm.
#[derive(Debug, Clone)]
pub struct AdminEndpoints {
    base_url: Url,
    realm: String,
    legacy_auth_prefix: bool,
}

impl AdminEndpoints {
    pub fn builder(base_url: impl AsRef<str>) -> Result<AdminEndpointsBuilder, Error> {
        AdminEndpointsBuilder::new(base_url)
    }

    pub fn realm_name(&self) -> &str {
        &self.realm
    }

    pub fn realm(&self) -> Result<Url, Error> {
        self.admin_url(&[])
    }

    pub fn users(&self, params: &GetUsersParams) -> Result<Url, Error> {
        self.admin_url_with_query(&["users"], params)
    }

    pub fn user(&self, user_id: &str) -> Result<Url, Error> {
        self.admin_url(&["users", user_id])
    }

    pub fn user_groups(&self, user_id: &str) -> Result<Url, Error> {
        self.admin_url(&["users", user_id, "groups"])
    }

    pub fn user_role_mappings(&self, user_id: &str) -> Result<Url, Error> {
        self.admin_url(&["users", user_id, "role-mappings"])
    }

    pub fn user_credentials(&self, user_id: &str) -> Result<Url, Error> {
        self.admin_url(&["users", user_id, "credentials"])
    }

    pub fn reset_password(&self, user_id: &str) -> Result<Url, Error> {
        self.admin_url(&["users", user_id, "reset-password"])
    }

    /// Url of the execute-actions-email call; the actions go in the body.
    pub fn execute_actions_email(&self, params: &ExecuteActionsEmail) -> Result<Url, Error> {
        self.admin_url_with_query(
            &["users", params.user_id.as_str(), "execute-actions-email"],
            params,
        )
    }

    pub fn groups(&self, params: &GetGroupsParams) -> Result<Url, Error> {
        self.admin_url_with_query(&["groups"], params)
    }

    pub fn group(&self, group_id: &str) -> Result<Url, Error> {
        self.admin_url(&["groups", group_id])
    }

    pub fn roles(&self) -> Result<Url, Error> {
        self.admin_url(&["roles"])
    }

    pub fn role(&self, role_name: &str) -> Result<Url, Error> {
        self.admin_url(&["roles", role_name])
    }

    pub fn clients(&self, params: &GetClientsParams) -> Result<Url, Error> {
        self.admin_url_with_query(&["clients"], params)
    }

    pub fn client_scopes(&self) -> Result<Url, Error> {
        self.admin_url(&["client-scopes"])
    }

    pub fn components(&self) -> Result<Url, Error> {
        self.admin_url(&["components"])
    }

    pub fn keys(&self) -> Result<Url, Error> {
        self.admin_url(&["keys"])
    }

    pub fn issuer(&self) -> Result<Url, Error> {
        self.realm_url(&[])
    }

    pub fn certs(&self) -> Result<Url, Error> {
        self.realm_url(&["protocol", "openid-connect", "certs"])
    }

    pub fn userinfo(&self) -> Result<Url, Error> {
        self.realm_url(&["protocol", "openid-connect", "userinfo"])
    }

    pub fn token_introspect(&self) -> Result<Url, Error> {
        self.realm_url(&["protocol", "openid-connect", "token", "introspect"])
    }

    fn admin_url(&self, segments: &[&str]) -> Result<Url, Error> {
        self.build(&["admin", "realms", self.realm.as_str()], segments)
    }

    fn admin_url_with_query<P: QueryParams>(
        &self,
        segments: &[&str],
        params: &P,
    ) -> Result<Url, Error> {
        let mut url = self.admin_url(segments)?;
        append_query(&mut url, &params.query_params()?);
        Ok(url)
    }

    fn realm_url(&self, segments: &[&str]) -> Result<Url, Error> {
        self.build(&["realms", self.realm.as_str()], segments)
    }

    fn build(&self, root: &[&str], segments: &[&str]) -> Result<Url, Error> {
        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(Error::EmptyPathSegment {
                path: segments.join("/"),
            });
        }
        let mut path = Vec::with_capacity(root.len() + segments.len() + 1);
        if self.legacy_auth_prefix {
            path.push(LEGACY_AUTH_PREFIX);
        }
        path.extend_from_slice(root);
        path.extend_from_slice(segments);
        build_url(&self.base_url, &path, BuildUrlOptions::REQUEST)
    }
}
