// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Furniture and desk clutter, modelled from engine primitives.
//!
//! Every prop is spawned as a hierarchy below a group entity supplied by the caller, in the
//! prop's own coordinate frame with the floor (or desktop) at `y = 0`.  Dimensions are in
//! centimetres.

use bevy::{
    asset::RenderAssetUsages,
    mesh::{Indices, PrimitiveTopology},
    prelude::*,
};
use std::collections::HashMap;
use std::f32::consts::TAU;

mod accessories;
mod chair;
mod desk;
mod keyboard;
mod lamp;
mod monitor;
mod plant;
mod record_player;

pub use accessories::spawn_accessories;
pub use chair::spawn_chair;
pub use desk::spawn_desk;
pub use keyboard::spawn_keyboard;
pub use lamp::spawn_lamp;
pub use monitor::spawn_monitor;
pub use plant::spawn_plant;
pub use record_player::spawn_record_player;

/// Colour from a `0xRRGGBB` literal.
pub fn hex(rgb: u32) -> Color {
    Color::srgb_u8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

pub fn at(x: f32, y: f32, z: f32) -> Transform {
    Transform::from_xyz(x, y, z)
}

/// Rotation from XYZ Euler angles, in radians.
pub fn euler(x: f32, y: f32, z: f32) -> Quat {
    Quat::from_euler(EulerRot::XYZ, x, y, z)
}

/// An empty node that positions its children.
pub fn group(transform: Transform) -> impl Bundle {
    (transform, Visibility::default())
}

/// Surface finish of a cached material.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Finish {
    pub roughness: f32,
    pub metallic: f32,
}

impl Finish {
    /// Unpolished, non-metallic.
    pub const MATTE: Finish = Finish {
        roughness: 1.0,
        metallic: 0.0,
    };

    pub const fn rough(roughness: f32) -> Finish {
        Finish {
            roughness,
            metallic: 0.0,
        }
    }

    fn key(self, rgb: u32) -> (u32, u32, u32) {
        (rgb, self.roughness.to_bits(), self.metallic.to_bits())
    }
}

/// Mesh and material factory shared by all props.
///
/// Plain paints are cached, so props built from the same colour share one material.
pub struct PropKit<'a> {
    meshes: &'a mut Assets<Mesh>,
    materials: &'a mut Assets<StandardMaterial>,
    paints: HashMap<(u32, u32, u32), Handle<StandardMaterial>>,
}

impl<'a> PropKit<'a> {
    pub fn new(meshes: &'a mut Assets<Mesh>, materials: &'a mut Assets<StandardMaterial>) -> Self {
        Self {
            meshes,
            materials,
            paints: HashMap::new(),
        }
    }

    /// A matte paint of the given colour.
    pub fn paint(&mut self, rgb: u32) -> Handle<StandardMaterial> {
        self.finish(rgb, Finish::MATTE)
    }

    pub fn finish(&mut self, rgb: u32, finish: Finish) -> Handle<StandardMaterial> {
        let materials = &mut *self.materials;
        self.paints
            .entry(finish.key(rgb))
            .or_insert_with(|| {
                materials.add(StandardMaterial {
                    base_color: hex(rgb),
                    perceptual_roughness: finish.roughness,
                    metallic: finish.metallic,
                    ..default()
                })
            })
            .clone()
    }

    /// A material nothing else shares.
    pub fn material(&mut self, material: StandardMaterial) -> Handle<StandardMaterial> {
        self.materials.add(material)
    }

    pub fn mesh(&mut self, mesh: impl Into<Mesh>) -> Handle<Mesh> {
        self.meshes.add(mesh)
    }

    /// A visible mesh placed within its parent.
    pub fn part(
        &mut self,
        mesh: impl Into<Mesh>,
        material: Handle<StandardMaterial>,
        transform: Transform,
    ) -> (Mesh3d, MeshMaterial3d<StandardMaterial>, Transform) {
        (
            Mesh3d(self.mesh(mesh)),
            MeshMaterial3d(material),
            transform,
        )
    }
}

/// Side wall of a truncated cone without end caps, centred on the origin along `y`.  Anything
/// inside, such as a bulb, stays visible through the open ends.
pub fn open_cone(radius_top: f32, radius_bottom: f32, height: f32, resolution: u32) -> Mesh {
    let resolution = resolution.max(3);
    let half = height / 2.0;
    // Outward normal tilts toward the narrow end.
    let slope = (radius_bottom - radius_top) / height;

    let mut positions = Vec::with_capacity(2 * (resolution as usize + 1));
    let mut normals = Vec::with_capacity(positions.capacity());
    let mut uvs = Vec::with_capacity(positions.capacity());
    for i in 0..=resolution {
        let u = i as f32 / resolution as f32;
        let (sin, cos) = (u * TAU).sin_cos();
        let normal = Vec3::new(sin, slope, cos).normalize();
        for (radius, y, v) in [(radius_top, half, 0.0), (radius_bottom, -half, 1.0)] {
            positions.push([radius * sin, y, radius * cos]);
            normals.push(normal.to_array());
            uvs.push([u, v]);
        }
    }

    let mut indices = Vec::with_capacity(resolution as usize * 6);
    for i in 0..resolution {
        let top = 2 * i;
        let bottom = top + 1;
        let next_top = top + 2;
        let next_bottom = top + 3;
        indices.extend_from_slice(&[top, bottom, next_top, next_top, bottom, next_bottom]);
    }

    let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::mesh::VertexAttributeValues;

    #[test]
    fn hex_colours() {
        assert_eq!(hex(0xff0000), Color::srgb_u8(255, 0, 0));
        assert_eq!(hex(0x334155), Color::srgb_u8(0x33, 0x41, 0x55));
    }

    #[test]
    fn paints_are_shared_per_colour_and_finish() {
        let mut meshes = Assets::<Mesh>::default();
        let mut materials = Assets::<StandardMaterial>::default();
        let mut kit = PropKit::new(&mut meshes, &mut materials);

        let a = kit.paint(0x3f3f46);
        let b = kit.paint(0x3f3f46);
        let c = kit.finish(0x3f3f46, Finish::rough(0.6));
        let d = kit.material(StandardMaterial::default());
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
        drop(kit);
        assert_eq!(materials.len(), 3);
    }

    #[test]
    fn open_cone_spans_its_height_with_both_radii() {
        let mesh = open_cone(4.0, 8.0, 10.0, 16);
        let Some(VertexAttributeValues::Float32x3(positions)) =
            mesh.attribute(Mesh::ATTRIBUTE_POSITION)
        else {
            panic!("cone has no positions");
        };
        assert_eq!(positions.len(), 34);
        for position in positions {
            let radius = Vec2::new(position[0], position[2]).length();
            if position[1] > 0.0 {
                assert!((position[1] - 5.0).abs() < 1e-5);
                assert!((radius - 4.0).abs() < 1e-4);
            } else {
                assert!((position[1] + 5.0).abs() < 1e-5);
                assert!((radius - 8.0).abs() < 1e-4);
            }
        }
        assert_eq!(mesh.indices().map(|indices| indices.len()), Some(16 * 6));
    }
}

// End of File
