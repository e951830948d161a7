//! Component entity type - one physical part or sub-assembly in an engine BOM

use serde::{Deserialize, Serialize};

use crate::core::identity::NodeId;

/// A node in the engine's bill of materials
///
/// A component with a non-empty `children` list is an assembly group, keyed by
/// its `description`. Stored documents written by older tooling use camelCase
/// field names, so those are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Identifier, unique only within the current tree
    pub id: NodeId,

    /// Human-readable name; doubles as the assembly group key
    pub description: String,

    /// Part number
    #[serde(default, alias = "partNumber")]
    pub part_number: String,

    /// Serial number - the natural key for history and inventory
    #[serde(default, alias = "serialNumber")]
    pub serial_number: String,

    /// Accumulated operating hours
    #[serde(default, alias = "currentHours")]
    pub current_hours: f64,

    /// Certified maximum hours (0 = not tracked)
    #[serde(default, alias = "lifeLimit")]
    pub life_limit: f64,

    /// Ordered child components
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Component>,
}

impl Component {
    /// Create a new leaf component with zero hours and no life limit
    pub fn new(
        id: impl Into<NodeId>,
        description: impl Into<String>,
        part_number: impl Into<String>,
        serial_number: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            part_number: part_number.into(),
            serial_number: serial_number.into(),
            current_hours: 0.0,
            life_limit: 0.0,
            children: Vec::new(),
        }
    }

    pub fn with_hours(mut self, hours: f64) -> Self {
        self.current_hours = hours;
        self
    }

    pub fn with_life_limit(mut self, life_limit: f64) -> Self {
        self.life_limit = life_limit;
        self
    }

    pub fn with_children(mut self, children: Vec<Component>) -> Self {
        self.children = children;
        self
    }

    /// True when this node has children and therefore names an assembly group
    pub fn is_assembly(&self) -> bool {
        !self.children.is_empty()
    }

    /// True when a life limit is being tracked for this part
    pub fn has_life_limit(&self) -> bool {
        self.life_limit > 0.0
    }

    /// Hours left before the life limit, if one is tracked
    ///
    /// Negative when the part has run past its limit.
    pub fn remaining_life(&self) -> Option<f64> {
        self.has_life_limit()
            .then(|| self.life_limit - self.current_hours)
    }

    /// Clone without children, for rebuilding a node around new children
    pub(crate) fn clone_shallow(&self) -> Component {
        Component {
            id: self.id.clone(),
            description: self.description.clone(),
            part_number: self.part_number.clone(),
            serial_number: self.serial_number.clone(),
            current_hours: self.current_hours,
            life_limit: self.life_limit,
            children: Vec::new(),
        }
    }

    /// Compare the identifying attributes, ignoring hours and children
    pub fn same_attributes(&self, other: &Component) -> bool {
        self.description == other.description
            && self.part_number == other.part_number
            && self.life_limit == other.life_limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_creation() {
        let cmp = Component::new("1", "Fuel Pump", "FP-100", "SN-001")
            .with_hours(12.5)
            .with_life_limit(500.0);

        assert_eq!(cmp.id, NodeId::from("1"));
        assert_eq!(cmp.part_number, "FP-100");
        assert_eq!(cmp.current_hours, 12.5);
        assert!(!cmp.is_assembly());
        assert_eq!(cmp.remaining_life(), Some(487.5));
    }

    #[test]
    fn test_untracked_life_limit_has_no_remaining() {
        let cmp = Component::new("1", "Bracket", "BR-1", "SN-9").with_hours(1000.0);
        assert!(!cmp.has_life_limit());
        assert_eq!(cmp.remaining_life(), None);
    }

    #[test]
    fn test_assembly_detection() {
        let asm = Component::new("10", "Turbine", "T-1", "SN-T")
            .with_children(vec![Component::new("11", "Blade", "B-1", "SN-B")]);
        assert!(asm.is_assembly());
    }

    #[test]
    fn test_component_yaml_roundtrip() {
        let cmp = Component::new("7", "Igniter", "IG-2", "SN-77")
            .with_hours(3.0)
            .with_life_limit(100.0);

        let yaml = serde_yml::to_string(&cmp).unwrap();
        assert!(yaml.contains("part_number: IG-2"));
        assert!(!yaml.contains("children"));

        let parsed: Component = serde_yml::from_str(&yaml).unwrap();
        assert_eq!(parsed, cmp);
    }

    #[test]
    fn test_accepts_camel_case_documents() {
        let json = r#"{
            "id": 1712345678901,
            "description": "Compressor",
            "partNumber": "C-9",
            "serialNumber": "SN-C9",
            "currentHours": 42.0,
            "lifeLimit": 0,
            "children": []
        }"#;
        let cmp: Component = serde_json::from_str(json).unwrap();
        assert_eq!(cmp.id.as_str(), "1712345678901");
        assert_eq!(cmp.serial_number, "SN-C9");
        assert_eq!(cmp.current_hours, 42.0);
        assert!(!cmp.has_life_limit());
    }

    #[test]
    fn test_same_attributes_ignores_hours() {
        let a = Component::new("1", "Pump", "P-1", "SN-1").with_hours(10.0);
        let b = Component::new("2", "Pump", "P-1", "SN-1").with_hours(90.0);
        assert!(a.same_attributes(&b));

        let c = Component::new("1", "Pump", "P-2", "SN-1");
        assert!(!a.same_attributes(&c));
    }
}
