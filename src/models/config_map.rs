//! Config maps: schemaless key/value configuration.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::common::{ListFirstMetadata, ListNextMetadata};

/// Config map payload. Keys keep their insertion order.
pub type ConfigMapData = IndexMap<String, String>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigMap {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ConfigMapData>,
    pub entity_tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigMapList {
    pub config_maps: Vec<ConfigMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<ListFirstMetadata>,
    pub limit: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<ListNextMetadata>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConfigMapPrototype {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ConfigMapData>,
    pub name: String,
}

impl ConfigMapPrototype {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            data: None,
            name: name.into(),
        }
    }

    pub fn with_data(mut self, data: ConfigMapData) -> Self {
        self.data = Some(data);
        self
    }
}

/// Body of a replace-config-map request: the new data, in full.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConfigMapReplace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ConfigMapData>,
}

impl_model!(ConfigMap, ConfigMapList, ConfigMapPrototype, ConfigMapReplace);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Model;
    use serde_json::json;

    #[test]
    fn test_data_keeps_insertion_order() {
        let mut data = ConfigMapData::new();
        data.insert("zeta".to_string(), "1".to_string());
        data.insert("alpha".to_string(), "2".to_string());
        let proto = ConfigMapPrototype::new("settings").with_data(data);

        let text = serde_json::to_string(&proto).unwrap();
        assert!(text.find("zeta").unwrap() < text.find("alpha").unwrap());
    }

    #[test]
    fn test_decoded_data_keeps_wire_order() {
        let value: serde_json::Value = serde_json::from_str(
            r#"{"entity_tag":"1","name":"settings","data":{"zeta":"1","alpha":"2"}}"#,
        )
        .unwrap();
        let config_map = ConfigMap::from_value(value).unwrap();
        let keys: Vec<&String> = config_map.data.as_ref().unwrap().keys().collect();
        assert_eq!(keys, ["zeta", "alpha"]);
    }

    #[test]
    fn test_data_rejects_non_string_values() {
        let err = ConfigMap::from_value(json!({
            "entity_tag": "1",
            "name": "settings",
            "data": {"retries": 3}
        }))
        .unwrap_err();
        assert!(err.to_string().contains("ConfigMap"));
    }
}
