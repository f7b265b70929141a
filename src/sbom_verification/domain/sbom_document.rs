use super::component::Component;

/// Parsed SBOM document: the components in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SbomDocument {
    components: Vec<Component>,
}

impl SbomDocument {
    pub fn new(components: Vec<Component>) -> Self {
        Self { components }
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
