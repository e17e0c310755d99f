use std::f32::consts::TAU;
use std::time::Duration;

use anyhow::Context;
use glam::{Quat, Vec3};

use crate::config::InteractionConfig;
use crate::interaction::{
    Beam, ControllerRole, ControllerSnapshot, ControllerState, Dispatcher, Palette, TickReport,
    WorldNodes,
};
use crate::math::BoundingVolume;
use crate::scene_graph::{Material, Mesh, MeshId, Object3D, ObjectId, Scene};

const SHAPE_COLOR: u32 = 0xbbccff;
const SHAPE_RING_RADIUS: f32 = 0.25;
const SHAPE_HEIGHT: f32 = 0.04;

/// The complete interactive scene: world pivot and group, both controllers,
/// and the palette on the primary controller.
pub struct Sandbox {
    pub scene: Scene,
    config: InteractionConfig,
    dispatcher: Dispatcher,
    frame: u64,
}

impl Sandbox {
    /// Default configuration with ten dodecahedrons to play with.
    pub fn new() -> anyhow::Result<Self> {
        let mut sandbox = Self::with_config(InteractionConfig::default())?;
        sandbox.scatter_dodecahedrons(10);
        Ok(sandbox)
    }

    /// Builds the rig with an empty world group.
    pub fn with_config(config: InteractionConfig) -> anyhow::Result<Self> {
        config.validate().context("Invalid interaction config")?;

        let mut scene = Scene::new();

        let pivot = scene.add_object(Object3D::group("GroupPivot"));
        let group = scene.spawn(Object3D::group("Group"), Some(pivot));
        let world = WorldNodes { pivot, group };

        let beam = Beam {
            visible: config.beams,
            length: config.long_beam,
        };
        let primary_node = scene.add_object(Object3D::group("Controller1"));
        let secondary_node = scene.add_object(Object3D::group("Controller2"));

        let mut primary = ControllerState::new(ControllerRole::Primary, primary_node, beam);
        primary.palette = Some(Self::build_palette(&mut scene, primary_node, &config));
        let secondary = ControllerState::new(ControllerRole::Secondary, secondary_node, beam);

        let dispatcher = Dispatcher::new(world, [primary, secondary]);

        Ok(Self {
            scene,
            config,
            dispatcher,
            frame: 0,
        })
    }

    fn build_palette(
        scene: &mut Scene,
        controller_node: ObjectId,
        config: &InteractionConfig,
    ) -> Palette {
        let palette = scene.spawn(Object3D::group("Palette"), Some(controller_node));
        scene.set_object_translation(palette, Vec3::new(0.0, 0.02, 0.0));
        let library = scene.spawn(Object3D::group("ShapeLibrary"), Some(palette));

        let shapes = [
            ("Cone", BoundingVolume::cuboid(Vec3::new(0.04, 0.08, 0.04))),
            ("Dodecahedron", BoundingVolume::sphere(0.04)),
            ("Sphere", BoundingVolume::sphere(0.04)),
            ("Torus", BoundingVolume::cuboid(Vec3::new(0.05, 0.05, 0.01))),
        ];

        let count = shapes.len();
        for (i, (name, bounds)) in shapes.into_iter().enumerate() {
            let angle = i as f32 / count as f32 * TAU;
            let mesh = scene.add_mesh(Mesh::new(name, bounds));
            let shape = scene.spawn(
                Object3D::mesh(name, mesh, Material::from_hex(SHAPE_COLOR)),
                Some(library),
            );
            scene.set_object_translation(
                shape,
                Vec3::new(
                    angle.cos() * SHAPE_RING_RADIUS,
                    SHAPE_HEIGHT,
                    angle.sin() * SHAPE_RING_RADIUS,
                ),
            );
        }

        Palette::hidden(scene, palette, library, config)
    }

    /// Adds `count` randomly colored dodecahedrons stacked at the same spot.
    pub fn scatter_dodecahedrons(&mut self, count: usize) {
        let mesh = self.add_mesh(Mesh::new("Dodecahedron", BoundingVolume::sphere(0.3)));
        for i in 0..count {
            let material = Material::from_hex(rand::random::<u32>() & 0xffffff);
            self.spawn_in_world(
                format!("Dodecahedron{i}"),
                mesh,
                material,
                Vec3::new(0.0, 0.5, 0.0),
            );
        }
    }

    pub fn add_mesh(&mut self, mesh: Mesh) -> MeshId {
        self.scene.add_mesh(mesh)
    }

    /// Spawns a manipulable object in the world group at a group-local position.
    pub fn spawn_in_world(
        &mut self,
        name: impl Into<String>,
        mesh: MeshId,
        material: Material,
        translation: Vec3,
    ) -> ObjectId {
        let group = self.world().group;
        let object = self
            .scene
            .spawn(Object3D::mesh(name, mesh, material), Some(group));
        self.scene
            .set_object_transform(object, translation, Quat::IDENTITY, 1.0);
        object
    }

    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    pub fn world(&self) -> WorldNodes {
        self.dispatcher.world()
    }

    pub fn controller(&self, role: ControllerRole) -> &ControllerState {
        self.dispatcher.controller(role)
    }

    pub fn intersected(&self) -> &[ObjectId] {
        self.dispatcher.intersected()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Entry point for the frame loop, called once per display refresh.
    pub fn tick(&mut self, snapshots: &[Option<ControllerSnapshot>], time: Duration) -> TickReport {
        let report = self
            .dispatcher
            .tick(&mut self.scene, snapshots, time, &self.config);
        self.frame += 1;

        report
    }
}
