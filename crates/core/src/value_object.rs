//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects carry no identity and are immutable once built. Validation
/// happens in their constructor, so holding one is proof the value is valid:
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct HolderName(String);
///
/// impl ValueObject for HolderName {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
