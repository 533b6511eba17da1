//! Value objects embedded in app, job and function specs: environment
//! variables, volume mounts and probes.

use serde::{Deserialize, Serialize};

string_enum! {
    /// Selects where an environment variable gets its value from.
    pub enum EnvVarType {
        Literal => "literal",
        ConfigMapFullReference => "config_map_full_reference",
        SecretFullReference => "secret_full_reference",
        ConfigMapKeyReference => "config_map_key_reference",
        SecretKeyReference => "secret_key_reference",
    }
}

/// An environment variable as reported by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvVar {
    /// Key within the referenced secret or config map.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Prefix added to every key of a full reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Name of the referenced secret or config map.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(rename = "type")]
    pub type_: EnvVarType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// An environment variable in a create or update request.
///
/// Which of the fields are needed depends on `type_`; the service validates
/// the combination.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EnvVarPrototype {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Defaults to `literal` on the service side.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<EnvVarType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl EnvVarPrototype {
    pub fn literal(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            type_: Some(EnvVarType::Literal),
            value: Some(value.into()),
            ..Default::default()
        }
    }

    /// Expose every key of a secret, optionally prefixed.
    pub fn secret_full_reference(reference: impl Into<String>, prefix: Option<String>) -> Self {
        Self {
            reference: Some(reference.into()),
            prefix,
            type_: Some(EnvVarType::SecretFullReference),
            ..Default::default()
        }
    }

    /// Expose every key of a config map, optionally prefixed.
    pub fn config_map_full_reference(
        reference: impl Into<String>,
        prefix: Option<String>,
    ) -> Self {
        Self {
            reference: Some(reference.into()),
            prefix,
            type_: Some(EnvVarType::ConfigMapFullReference),
            ..Default::default()
        }
    }

    pub fn secret_key_reference(
        name: impl Into<String>,
        reference: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            reference: Some(reference.into()),
            key: Some(key.into()),
            type_: Some(EnvVarType::SecretKeyReference),
            ..Default::default()
        }
    }

    pub fn config_map_key_reference(
        name: impl Into<String>,
        reference: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            reference: Some(reference.into()),
            key: Some(key.into()),
            type_: Some(EnvVarType::ConfigMapKeyReference),
            ..Default::default()
        }
    }
}

string_enum! {
    pub enum VolumeMountType {
        ConfigMap => "config_map",
        Secret => "secret",
        PersistentDataStore => "persistent_data_store",
    }
}

/// A volume mounted into a workload's container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeMount {
    pub mount_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    /// Name of the mounted config map, secret or data store.
    pub reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_path: Option<String>,
    #[serde(rename = "type")]
    pub type_: VolumeMountType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeMountPrototype {
    pub mount_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    pub reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_path: Option<String>,
    #[serde(rename = "type")]
    pub type_: VolumeMountType,
}

impl VolumeMountPrototype {
    pub fn new(
        mount_path: impl Into<String>,
        reference: impl Into<String>,
        type_: VolumeMountType,
    ) -> Self {
        Self {
            mount_path: mount_path.into(),
            name: None,
            read_only: None,
            reference: reference.into(),
            sub_path: None,
            type_,
        }
    }
}

string_enum! {
    pub enum ProbeType {
        Tcp => "tcp",
        Http => "http",
    }
}

/// Liveness or readiness probe settings of an app.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Probe {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_threshold: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_delay: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<i64>,
    /// Only used by `http` probes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<ProbeType>,
}

/// Probe settings in a create or update request. Same shape as [`Probe`].
pub type ProbePrototype = Probe;

impl_model!(EnvVar, EnvVarPrototype, VolumeMount, VolumeMountPrototype, Probe);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Model;
    use serde_json::json;

    #[test]
    fn test_env_var_type_is_renamed() {
        let env = EnvVarPrototype::literal("LOG_LEVEL", "debug");
        assert_eq!(
            env.to_value().unwrap(),
            json!({"name": "LOG_LEVEL", "type": "literal", "value": "debug"})
        );
    }

    #[test]
    fn test_key_reference_carries_all_parts() {
        let env = EnvVarPrototype::secret_key_reference("DB_PASSWORD", "db-creds", "password");
        let value = env.to_value().unwrap();
        assert_eq!(value["type"], "secret_key_reference");
        assert_eq!(value["reference"], "db-creds");
        assert_eq!(value["key"], "password");
        assert!(value.get("prefix").is_none());
    }

    #[test]
    fn test_volume_mount_requires_type() {
        let err = VolumeMount::from_value(json!({
            "mount_path": "/etc/config",
            "reference": "my-config"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("type"));
    }

    #[test]
    fn test_volume_mount_roundtrip() {
        let value = json!({
            "mount_path": "/data",
            "name": "data-volume",
            "read_only": false,
            "reference": "my-store",
            "sub_path": "app1",
            "type": "persistent_data_store"
        });
        let mount = VolumeMount::from_value(value.clone()).unwrap();
        assert_eq!(mount.type_, VolumeMountType::PersistentDataStore);
        assert_eq!(mount.to_value().unwrap(), value);
    }
}
