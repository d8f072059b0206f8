//! Property-tree extraction
//!
//! Walks the loosely-typed aggregate document into typed shape records.
//! Key names follow the serialized aggregate format. Absent shape arrays
//! decode to empty sets; a shape record with missing, ill-typed, or
//! wrong-arity fields is skipped and reported without aborting the rest
//! of the aggregate.

use super::{Capsule, CollisionAggregate, Hull, HullEdge, Part, ShapeKind, Sphere};
use crate::tree::{PropertyTree, PropertyValue};
use crate::wireframe::{DecodeError, SkippedShape};
use log::warn;

const PARTS: &str = "m_parts";
const PART_SHAPE: &str = "m_rnShape";
const SPHERES: &str = "m_spheres";
const SPHERE: &str = "m_Sphere";
const CAPSULES: &str = "m_capsules";
const CAPSULE: &str = "m_Capsule";
const HULLS: &str = "m_hulls";
const HULL: &str = "m_Hull";
const CENTER: &str = "m_vCenter";
const RADIUS: &str = "m_flRadius";
const HULL_VERTICES: &str = "m_Vertices";
const HULL_EDGES: &str = "m_Edges";
const EDGE_ORIGIN: &str = "m_nOrigin";
const EDGE_NEXT: &str = "m_nNext";

/// Extraction result: the typed aggregate plus every shape record that
/// could not be decoded.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Shapes that extracted successfully, grouped by part.
    pub aggregate: CollisionAggregate,
    /// Records dropped during extraction, with reasons.
    pub skipped: Vec<SkippedShape>,
}

impl Extraction {
    fn skip(&mut self, part: usize, kind: ShapeKind, index: usize, reason: DecodeError) {
        warn!("skipping {kind} {index} in part {part}: {reason}");
        self.skipped.push(SkippedShape {
            part,
            kind,
            index,
            reason,
        });
    }
}

/// Convert a property tree into typed collision shape records.
///
/// Hull planes, bounds, centroids, and angular radii are intentionally
/// not read, and neither are mesh shapes or collision attribute indices.
#[must_use]
pub fn extract_aggregate(tree: &PropertyTree) -> Extraction {
    let mut out = Extraction::default();
    for (part_index, part_value) in tree.array(PARTS).unwrap_or(&[]).iter().enumerate() {
        let mut part = Part::default();
        let shape = part_value
            .as_tree()
            .and_then(|p| p.sub_collection(PART_SHAPE));
        if let Some(shape) = shape {
            for (i, value) in shape.array(SPHERES).unwrap_or(&[]).iter().enumerate() {
                match extract_sphere(value) {
                    Ok(sphere) => part.spheres.push(sphere),
                    Err(reason) => out.skip(part_index, ShapeKind::Sphere, i, reason),
                }
            }
            for (i, value) in shape.array(CAPSULES).unwrap_or(&[]).iter().enumerate() {
                match extract_capsule(value) {
                    Ok(capsule) => part.capsules.push(capsule),
                    Err(reason) => out.skip(part_index, ShapeKind::Capsule, i, reason),
                }
            }
            for (i, value) in shape.array(HULLS).unwrap_or(&[]).iter().enumerate() {
                match extract_hull(value) {
                    Ok(hull) => part.hulls.push(hull),
                    Err(reason) => out.skip(part_index, ShapeKind::Hull, i, reason),
                }
            }
        }
        out.aggregate.parts.push(part);
    }
    out
}

fn malformed(detail: impl Into<String>) -> DecodeError {
    DecodeError::MalformedShape(detail.into())
}

fn shape_record<'a>(
    value: &'a PropertyValue,
    key: &'static str,
) -> Result<&'a PropertyTree, DecodeError> {
    value
        .as_tree()
        .and_then(|t| t.sub_collection(key))
        .ok_or_else(|| malformed(format!("record missing {key} collection")))
}

fn extract_sphere(value: &PropertyValue) -> Result<Sphere, DecodeError> {
    let record = shape_record(value, SPHERE)?;
    let center = record
        .get(CENTER)
        .ok_or_else(|| malformed(format!("sphere missing {CENTER}")))?
        .to_vector3()?;
    let radius = record.float(RADIUS)?;
    Ok(Sphere { center, radius })
}

fn extract_capsule(value: &PropertyValue) -> Result<Capsule, DecodeError> {
    let record = shape_record(value, CAPSULE)?;
    let endpoints = record
        .array(CENTER)
        .ok_or_else(|| malformed(format!("capsule missing {CENTER} array")))?;
    if endpoints.len() != 2 {
        return Err(malformed(format!(
            "capsule endpoint array has {} elements, expected 2",
            endpoints.len()
        )));
    }
    let endpoint_a = endpoints[0].to_vector3()?;
    let endpoint_b = endpoints[1].to_vector3()?;
    let radius = record.float(RADIUS)?;
    Ok(Capsule {
        endpoint_a,
        endpoint_b,
        radius,
    })
}

fn extract_hull(value: &PropertyValue) -> Result<Hull, DecodeError> {
    let record = shape_record(value, HULL)?;
    let vertices = record
        .array(HULL_VERTICES)
        .ok_or_else(|| malformed(format!("hull missing {HULL_VERTICES}")))?
        .iter()
        .map(PropertyValue::to_vector3)
        .collect::<Result<Vec<_>, _>>()?;
    let edges = record
        .array(HULL_EDGES)
        .ok_or_else(|| malformed(format!("hull missing {HULL_EDGES}")))?
        .iter()
        .map(extract_edge)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Hull { vertices, edges })
}

fn extract_edge(value: &PropertyValue) -> Result<HullEdge, DecodeError> {
    let record = value
        .as_tree()
        .ok_or_else(|| malformed("hull edge is not a record"))?;
    let origin = edge_index(record.integer(EDGE_ORIGIN)?, EDGE_ORIGIN)?;
    let next = edge_index(record.integer(EDGE_NEXT)?, EDGE_NEXT)?;
    Ok(HullEdge { origin, next })
}

fn edge_index(raw: i64, key: &'static str) -> Result<u32, DecodeError> {
    u32::try_from(raw).map_err(|_| malformed(format!("{key} value {raw} is not a valid index")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;

    fn sphere_value(center: Vec3, radius: f32) -> PropertyValue {
        PropertyTree::new()
            .with(
                SPHERE,
                PropertyTree::new()
                    .with(CENTER, PropertyValue::vector3(center))
                    .with(RADIUS, radius),
            )
            .into()
    }

    fn capsule_value(endpoints: Vec<PropertyValue>, radius: f32) -> PropertyValue {
        PropertyTree::new()
            .with(
                CAPSULE,
                PropertyTree::new()
                    .with(CENTER, endpoints)
                    .with(RADIUS, radius),
            )
            .into()
    }

    fn edge_value(origin: i64, next: i64) -> PropertyValue {
        PropertyTree::new()
            .with(EDGE_ORIGIN, origin)
            .with(EDGE_NEXT, next)
            .into()
    }

    fn hull_value(vertices: &[Vec3], edges: Vec<PropertyValue>) -> PropertyValue {
        let verts: Vec<PropertyValue> = vertices.iter().map(|v| PropertyValue::vector3(*v)).collect();
        PropertyTree::new()
            .with(
                HULL,
                PropertyTree::new()
                    .with(HULL_VERTICES, verts)
                    .with(HULL_EDGES, edges),
            )
            .into()
    }

    fn aggregate_tree(shape: PropertyTree) -> PropertyTree {
        let part = PropertyTree::new().with(PART_SHAPE, shape);
        PropertyTree::new().with(PARTS, vec![part.into()])
    }

    #[test]
    fn test_empty_tree_yields_empty_aggregate() {
        let out = extract_aggregate(&PropertyTree::new());
        assert!(out.aggregate.parts.is_empty());
        assert!(out.skipped.is_empty());
    }

    #[test]
    fn test_part_without_shape_arrays_is_empty() {
        let tree = aggregate_tree(PropertyTree::new());
        let out = extract_aggregate(&tree);
        assert_eq!(out.aggregate.parts.len(), 1);
        assert_eq!(out.aggregate.parts[0].shape_count(), 0);
        assert!(out.skipped.is_empty());
    }

    #[test]
    fn test_extracts_all_three_shape_kinds() {
        let shape = PropertyTree::new()
            .with(SPHERES, vec![sphere_value(Vec3::new(1.0, 2.0, 3.0), 4.0)])
            .with(
                CAPSULES,
                vec![capsule_value(
                    vec![
                        PropertyValue::vector3(Vec3::zeros()),
                        PropertyValue::vector3(Vec3::new(0.0, 5.0, 0.0)),
                    ],
                    0.5,
                )],
            )
            .with(
                HULLS,
                vec![hull_value(
                    &[Vec3::zeros(), Vec3::x(), Vec3::y()],
                    vec![edge_value(0, 1), edge_value(1, 2), edge_value(2, 0)],
                )],
            );
        let out = extract_aggregate(&aggregate_tree(shape));

        assert!(out.skipped.is_empty());
        let part = &out.aggregate.parts[0];
        assert_eq!(
            part.spheres,
            vec![Sphere {
                center: Vec3::new(1.0, 2.0, 3.0),
                radius: 4.0
            }]
        );
        assert_eq!(part.capsules[0].endpoint_b, Vec3::new(0.0, 5.0, 0.0));
        assert_eq!(part.hulls[0].vertices.len(), 3);
        assert_eq!(part.hulls[0].edges[1], HullEdge { origin: 1, next: 2 });
    }

    #[test]
    fn test_capsule_with_wrong_endpoint_arity_is_skipped() {
        let shape = PropertyTree::new()
            .with(
                CAPSULES,
                vec![capsule_value(
                    vec![PropertyValue::vector3(Vec3::zeros())],
                    1.0,
                )],
            )
            .with(SPHERES, vec![sphere_value(Vec3::zeros(), 1.0)]);
        let out = extract_aggregate(&aggregate_tree(shape));

        // The malformed capsule must not take the sphere down with it.
        assert_eq!(out.aggregate.parts[0].spheres.len(), 1);
        assert!(out.aggregate.parts[0].capsules.is_empty());
        assert_eq!(out.skipped.len(), 1);
        assert_eq!(out.skipped[0].kind, ShapeKind::Capsule);
        assert!(matches!(
            out.skipped[0].reason,
            DecodeError::MalformedShape(_)
        ));
    }

    #[test]
    fn test_sphere_missing_radius_is_skipped() {
        let record = PropertyTree::new().with(
            SPHERE,
            PropertyTree::new().with(CENTER, PropertyValue::vector3(Vec3::zeros())),
        );
        let shape = PropertyTree::new().with(SPHERES, vec![record.into()]);
        let out = extract_aggregate(&aggregate_tree(shape));

        assert!(out.aggregate.parts[0].spheres.is_empty());
        assert_eq!(out.skipped.len(), 1);
        assert_eq!(out.skipped[0].kind, ShapeKind::Sphere);
    }

    #[test]
    fn test_negative_edge_index_is_malformed() {
        let shape = PropertyTree::new().with(
            HULLS,
            vec![hull_value(&[Vec3::zeros()], vec![edge_value(-1, 0)])],
        );
        let out = extract_aggregate(&aggregate_tree(shape));

        assert!(out.aggregate.parts[0].hulls.is_empty());
        assert_eq!(out.skipped.len(), 1);
    }

    #[test]
    fn test_parts_keep_serialized_order() {
        let part_a = PropertyTree::new().with(
            PART_SHAPE,
            PropertyTree::new().with(SPHERES, vec![sphere_value(Vec3::zeros(), 1.0)]),
        );
        let part_b = PropertyTree::new().with(PART_SHAPE, PropertyTree::new());
        let tree = PropertyTree::new().with(PARTS, vec![part_a.into(), part_b.into()]);

        let out = extract_aggregate(&tree);
        assert_eq!(out.aggregate.parts.len(), 2);
        assert_eq!(out.aggregate.parts[0].spheres.len(), 1);
        assert_eq!(out.aggregate.parts[1].shape_count(), 0);
    }
}
