//! Generated C# files.

mod layers_cs;
mod tags_cs;

pub(crate) use layers_cs::MASKS_SUFFIX;
pub use layers_cs::LayersCs;
pub use tags_cs::TagsCs;

/// Comment placed at the top of every generated file.
pub const GENERATED_HEADER: &str = "// <auto-generated>
//     Generated by constgen from the Unity Tag Manager.
//     Manual changes are overwritten; edit tags and layers in Unity instead.
// </auto-generated>";
