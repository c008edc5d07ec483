use crate::core::geo::LatLngBounds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Tile,
    Marker,
    Vector,
}

impl std::fmt::Display for LayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayerKind::Tile => write!(f, "tile"),
            LayerKind::Marker => write!(f, "marker"),
            LayerKind::Vector => write!(f, "vector"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LayerProperties {
    pub id: String,
    pub name: String,
    pub kind: LayerKind,
    pub z_index: i32,
    pub opacity: f32,
    pub visible: bool,
}

impl LayerProperties {
    pub fn new(id: String, name: String, kind: LayerKind) -> Self {
        Self {
            id,
            name,
            kind,
            z_index: 0,
            opacity: 1.0,
            visible: true,
        }
    }
}

/// Common interface over basemap and overlay layers. `as_any` supports
/// downcasting to the concrete layer, the same way the host renderer walks
/// the composed view.
pub trait LayerTrait: Send + Sync {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn kind(&self) -> LayerKind;

    fn z_index(&self) -> i32;
    fn set_z_index(&mut self, z_index: i32);

    fn opacity(&self) -> f32;
    fn set_opacity(&mut self, opacity: f32);

    fn is_visible(&self) -> bool;
    fn set_visible(&mut self, visible: bool);

    fn bounds(&self) -> Option<LatLngBounds>;

    fn as_any(&self) -> &dyn std::any::Any;
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any;
}

/// Implements the standard LayerTrait property accessors for a layer type
/// that stores a `LayerProperties` field.
#[macro_export]
macro_rules! impl_layer_trait {
    ($layer_type:ty, $properties_field:ident) => {
        fn id(&self) -> &str {
            &self.$properties_field.id
        }

        fn name(&self) -> &str {
            &self.$properties_field.name
        }

        fn kind(&self) -> LayerKind {
            self.$properties_field.kind
        }

        fn z_index(&self) -> i32 {
            self.$properties_field.z_index
        }

        fn set_z_index(&mut self, z_index: i32) {
            self.$properties_field.z_index = z_index;
        }

        fn opacity(&self) -> f32 {
            self.$properties_field.opacity
        }

        fn set_opacity(&mut self, opacity: f32) {
            self.$properties_field.opacity = opacity.clamp(0.0, 1.0);
        }

        fn is_visible(&self) -> bool {
            self.$properties_field.visible
        }

        fn set_visible(&mut self, visible: bool) {
            self.$properties_field.visible = visible;
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
            self
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_properties() {
        let props = LayerProperties::new(
            "earthquakes".to_string(),
            "Earthquakes".to_string(),
            LayerKind::Marker,
        );

        assert_eq!(props.id, "earthquakes");
        assert_eq!(props.kind, LayerKind::Marker);
        assert_eq!(props.z_index, 0);
        assert_eq!(props.opacity, 1.0);
        assert!(props.visible);
    }

    #[test]
    fn test_layer_kind_display() {
        assert_eq!(LayerKind::Tile.to_string(), "tile");
        assert_eq!(LayerKind::Marker.to_string(), "marker");
        assert_eq!(LayerKind::Vector.to_string(), "vector");
    }
}
