//! Storage zone resource.

use crate::client::Skylift;
use crate::types::{ListReply, Pagination};
use crate::Error;
use serde::{Deserialize, Serialize};

/// An edge storage zone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct StorageZone {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub replication_regions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_used: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files_stored: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewrite_404_to_200: Option<bool>,
}

/// Options for creating a storage zone.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StorageZoneAddOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub replication_regions: Vec<String>,
}

/// Options for updating a storage zone.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StorageZoneUpdateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewrite_404_to_200: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub replication_regions: Vec<String>,
}

/// Storage zone operations.
pub struct StorageZoneService<'a> {
    client: &'a Skylift,
}

impl<'a> StorageZoneService<'a> {
    pub(crate) fn new(client: &'a Skylift) -> Self {
        Self { client }
    }

    /// List storage zones.
    pub async fn list(
        &self,
        pagination: Option<&Pagination>,
    ) -> Result<ListReply<StorageZone>, Error> {
        self.client.get_json("storagezone", pagination).await
    }

    /// Get a storage zone by ID.
    pub async fn get(&self, id: i64) -> Result<StorageZone, Error> {
        self.client.get_json(&format!("storagezone/{id}"), None).await
    }

    /// Create a storage zone.
    pub async fn add(&self, opts: &StorageZoneAddOptions) -> Result<StorageZone, Error> {
        self.client.post_json("storagezone", opts).await
    }

    /// Update a storage zone. The endpoint replies without a body.
    pub async fn update(&self, id: i64, opts: &StorageZoneUpdateOptions) -> Result<(), Error> {
        self.client
            .post_no_reply(&format!("storagezone/{id}"), opts)
            .await
    }

    /// Delete a storage zone by ID.
    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        self.client.delete(&format!("storagezone/{id}")).await
    }
}
