//! Pull zone resource.

use crate::client::Skylift;
use crate::types::{ListReply, Pagination};
use crate::Error;
use serde::{Deserialize, Serialize};

/// A CDN pull zone.
///
/// All fields are optional; the server omits what it does not populate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PullZone {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_zone_id: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hostnames: Vec<Hostname>,
}

/// A hostname attached to a pull zone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Hostname {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(rename = "ForceSSL", skip_serializing_if = "Option::is_none")]
    pub force_ssl: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_system_hostname: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_certificate: Option<bool>,
}

/// Options for creating a pull zone.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PullZoneAddOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_zone_id: Option<i64>,
}

/// Options for updating a pull zone.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PullZoneUpdateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct HostnameOptions<'a> {
    hostname: &'a str,
}

/// Pull zone operations.
pub struct PullZoneService<'a> {
    client: &'a Skylift,
}

impl<'a> PullZoneService<'a> {
    pub(crate) fn new(client: &'a Skylift) -> Self {
        Self { client }
    }

    /// List pull zones.
    pub async fn list(&self, pagination: Option<&Pagination>) -> Result<ListReply<PullZone>, Error> {
        self.client.get_json("pullzone", pagination).await
    }

    /// Get a pull zone by ID.
    pub async fn get(&self, id: i64) -> Result<PullZone, Error> {
        self.client.get_json(&format!("pullzone/{id}"), None).await
    }

    /// Create a pull zone.
    pub async fn add(&self, opts: &PullZoneAddOptions) -> Result<PullZone, Error> {
        self.client.post_json("pullzone", opts).await
    }

    /// Update a pull zone, returning its new state.
    pub async fn update(&self, id: i64, opts: &PullZoneUpdateOptions) -> Result<PullZone, Error> {
        self.client.post_json(&format!("pullzone/{id}"), opts).await
    }

    /// Delete a pull zone by ID.
    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        self.client.delete(&format!("pullzone/{id}")).await
    }

    /// Attach a custom hostname to a pull zone.
    pub async fn add_custom_hostname(&self, id: i64, hostname: &str) -> Result<(), Error> {
        self.client
            .post_no_reply(&format!("pullzone/{id}/addHostname"), &HostnameOptions { hostname })
            .await
    }

    /// Detach a custom hostname from a pull zone.
    pub async fn remove_custom_hostname(&self, id: i64, hostname: &str) -> Result<(), Error> {
        self.client
            .delete_with_body(
                &format!("pullzone/{id}/removeHostname"),
                &HostnameOptions { hostname },
            )
            .await
    }
}
