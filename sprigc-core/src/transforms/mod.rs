use crate::transform::TransformModule;

pub mod class;
pub mod style;

/// Default module set, in registration order. Ordering is observable:
/// extraction is destructive, so each module must claim its attributes
/// before a later module could.
pub fn default_modules() -> Vec<TransformModule> {
    vec![class::module(), style::module()]
}
